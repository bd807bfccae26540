//! Typed access to a single table cell

use super::fixed::{FIXED6_ONE, parse_fixed6_fraction};
use super::parse_int::{ParseIntError, TableInt, parse_int_prefix};

/// One raw cell of a data row, possibly empty
///
/// A `Field` is a borrowed view into the owning [`DataFile`](super::DataFile)'s
/// text buffer; it is copied freely but never outlives the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field<'a> {
    value: &'a str,
}

impl<'a> Field<'a> {
    pub(crate) fn new(value: &'a str) -> Self {
        Self { value }
    }

    /// The unmodified cell text, for exact sentinel comparisons
    pub fn as_str(&self) -> &'a str {
        self.value
    }

    /// Whether the cell holds no text at all
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Parse the entire cell as an integer
    ///
    /// Unlike the prefix parser this demands that the whole cell is numeric;
    /// trailing garbage after the digits is a [`ParseIntError::ParseFailure`].
    pub fn parse_int<T: TableInt>(&self) -> Result<T, ParseIntError> {
        let parsed = parse_int_prefix(self.value, T::MIN, T::MAX)?;
        if parsed.len != self.value.len() {
            return Err(ParseIntError::ParseFailure);
        }
        Ok(parsed.value)
    }

    /// Parse the entire cell as a decimal into raw 1/64 fixed-point units
    ///
    /// The integer part is parsed signed (stat adjustments may be negative),
    /// the fractional part with the exact 1/64 rounding rule. A missing
    /// decimal point means a fraction of zero, not an error. The combined
    /// value must fit `T` or the parse is [`ParseIntError::OutOfRange`].
    pub fn parse_fixed6<T: TableInt>(&self) -> Result<T, ParseIntError> {
        let text = self.value;
        let whole = parse_int_prefix::<i64>(text, i64::MIN, i64::MAX)?;

        let (steps, consumed) = match text[whole.len..].strip_prefix('.') {
            Some(fraction_text) => {
                let fraction = parse_fixed6_fraction(fraction_text);
                (fraction.value, whole.len + 1 + fraction.len)
            }
            None => (0, whole.len),
        };
        if consumed != text.len() {
            return Err(ParseIntError::ParseFailure);
        }

        // Combine in wide arithmetic; a fraction of 64 (the round-up carry
        // case) simply spills into the whole part here.
        let steps = i128::from(steps);
        let raw = i128::from(whole.value) * i128::from(FIXED6_ONE)
            + if text.starts_with('-') { -steps } else { steps };
        T::from_i128(raw).ok_or(ParseIntError::OutOfRange)
    }
}

impl PartialEq<str> for Field<'_> {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl PartialEq<&str> for Field<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}
