//! 6-bit fixed-point values and exact decimal fraction conversion
//!
//! Balance arithmetic runs on integer counts of 1/64 units rather than floats
//! so results never drift between platforms. The fraction parser here is the
//! only place decimal text meets that representation, and its rounding is
//! bit-exact: any decimal that is a multiple of 1/64 converts without error,
//! anything else rounds to the nearest step with ties going up.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::parse_int::ParsedValue;

/// Number of fractional steps per whole unit
pub const FIXED6_ONE: i32 = 64;

/// Reading 7 decimal digits is enough to round a 6-bit fraction exactly
const FRACTION_DIGITS: usize = 7;

/// One fixed-point step expressed over 7 decimal digits (10^7 / 64)
const FRACTION_STEP: u32 = 156_250;

/// Half a step, added before dividing so truncation rounds half up
const FRACTION_HALF_STEP: u32 = 78_125;

/// A signed quantity counted in 1/64 units
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Fixed6(i32);

impl Fixed6 {
    pub const ZERO: Self = Self(0);

    /// Wrap a raw count of 1/64 units
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// Build from a whole number of units
    pub const fn from_whole(whole: i32) -> Self {
        Self(whole * FIXED6_ONE)
    }

    /// The raw count of 1/64 units
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Whole part, truncated toward zero
    pub const fn whole(self) -> i32 {
        self.0 / FIXED6_ONE
    }

    /// Lossy conversion for display and reporting only
    pub fn to_f32(self) -> f32 {
        self.0 as f32 / FIXED6_ONE as f32
    }
}

impl fmt::Display for Fixed6 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = i64::from(self.0).unsigned_abs();
        let sign = if self.0 < 0 { "-" } else { "" };
        let whole = magnitude / FIXED6_ONE as u64;
        let steps = magnitude % FIXED6_ONE as u64;
        if steps == 0 {
            return write!(f, "{sign}{whole}");
        }
        // 1/64 is exactly 0.015625, so six decimal digits always suffice
        let mut digits = format!("{:06}", steps * 15_625);
        while digits.ends_with('0') {
            digits.pop();
        }
        write!(f, "{sign}{whole}.{digits}")
    }
}

/// Convert a decimal fractional-digit sequence into 1/64 steps
///
/// `text` is the part after the decimal point, already separated from the
/// integer part by the caller. At most 7 digits take part in the result;
/// further digits are consumed (advancing the reported end position, matching
/// the longest-token behavior of the integer parser) but cannot change the
/// rounding. There is no error outcome: non-digit or empty input yields zero
/// steps and zero consumed characters.
///
/// Note the carry case: fractions of 0.9921875 and above land exactly on or
/// past 63.5 steps and round to 64, which callers fold into the whole part.
pub fn parse_fixed6_fraction(text: &str) -> ParsedValue<u8> {
    let bytes = text.as_bytes();
    let mut num_digits = 0;
    let mut decimal_fraction: u32 = 0;

    while num_digits < FRACTION_DIGITS {
        match bytes.get(num_digits) {
            Some(byte) if byte.is_ascii_digit() => {
                decimal_fraction = decimal_fraction * 10 + u32::from(byte - b'0');
                num_digits += 1;
            }
            _ => break,
        }
    }

    // Consume any overly precise trailing digits so the caller sees where the
    // numeric token really ends.
    let mut len = num_digits;
    while bytes.get(len).is_some_and(|byte| byte.is_ascii_digit()) {
        len += 1;
    }

    // Normalize short inputs to 7 decimal places before rounding
    decimal_fraction *= 10u32.pow((FRACTION_DIGITS - num_digits) as u32);

    let steps = (decimal_fraction + FRACTION_HALF_STEP) / FRACTION_STEP;
    ParsedValue {
        value: steps as u8,
        len,
    }
}
