//! Experience curve table
//!
//! Maps character levels to the experience totals required to out-level them.
//! The shipped file ends with a terminator row whose Level cell is the
//! literal `MaxLevel`; that row carries no threshold and is skipped.

use tracing::info;

use crate::app::services::table_parser::{DataFile, ResourceStore, SchemaColumn};
use crate::constants::{EXPERIENCE_RESOURCE, MAX_CHARACTER_LEVEL, MAX_LEVEL_SENTINEL, columns};
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExperienceColumn {
    Level,
    Experience,
}

impl SchemaColumn for ExperienceColumn {
    const COUNT: usize = 2;

    fn index(self) -> usize {
        self as usize
    }

    fn from_index(index: usize) -> Option<Self> {
        [ExperienceColumn::Level, ExperienceColumn::Experience]
            .get(index)
            .copied()
    }

    fn name(self) -> &'static str {
        match self {
            ExperienceColumn::Level => columns::LEVEL,
            ExperienceColumn::Experience => columns::EXPERIENCE,
        }
    }
}

fn map_experience_column(name: &str) -> Option<ExperienceColumn> {
    match name {
        columns::LEVEL => Some(ExperienceColumn::Level),
        columns::EXPERIENCE => Some(ExperienceColumn::Experience),
        _ => None,
    }
}

/// Experience point thresholds per character level
///
/// Owned by the caller; [`load`](Self::load) builds a fresh table and
/// [`reload`](Self::reload) replaces an existing one only after the new data
/// parsed cleanly, so a broken file never leaves a half-updated table behind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperienceTable {
    thresholds: Vec<u32>,
}

impl ExperienceTable {
    /// Load the experience table from its shipped resource
    pub fn load(store: &impl ResourceStore) -> Result<Self> {
        let file = DataFile::load(store, EXPERIENCE_RESOURCE)?;
        let schema = file.parse_header(map_experience_column)?;

        let mut table = ExperienceTable::default();
        for record in file.records() {
            let mut level: u8 = 0;
            let mut experience: u32 = 0;
            let mut skip_record = false;

            let mut fields = record.fields();
            for definition in &schema {
                fields.skip(definition.skip_length());
                let Some(field) = fields.current() else {
                    return Err(Error::not_enough_columns(
                        file.resource(),
                        record.row_number(),
                    ));
                };

                match definition.column() {
                    ExperienceColumn::Level => match field.parse_int() {
                        Ok(value) => level = value,
                        Err(error) => {
                            if field == MAX_LEVEL_SENTINEL {
                                skip_record = true;
                            } else {
                                return Err(Error::field(
                                    error.into(),
                                    file.resource(),
                                    columns::LEVEL,
                                    field.as_str(),
                                ));
                            }
                        }
                    },
                    ExperienceColumn::Experience => {
                        experience = field.parse_int().map_err(|error| {
                            Error::field(
                                error.into(),
                                file.resource(),
                                columns::EXPERIENCE,
                                field.as_str(),
                            )
                        })?;
                    }
                }

                if skip_record {
                    break;
                }
                fields.advance();
            }

            if !skip_record {
                table.set_threshold(level, experience);
            }
        }

        info!(
            "loaded experience thresholds for {} levels",
            table.max_level()
        );
        Ok(table)
    }

    /// Replace this table with a freshly loaded one
    pub fn reload(&mut self, store: &impl ResourceStore) -> Result<()> {
        *self = Self::load(store)?;
        Ok(())
    }

    /// Highest level the table defines
    pub fn max_level(&self) -> u8 {
        self.thresholds
            .len()
            .min(MAX_CHARACTER_LEVEL as usize) as u8
    }

    /// Thresholds for levels 1 through [`max_level`](Self::max_level), in order
    pub fn thresholds(&self) -> &[u32] {
        &self.thresholds
    }

    /// Experience required to advance past `level`
    ///
    /// Level 0 needs nothing; levels beyond the table clamp to the final
    /// threshold.
    pub fn threshold_for_level(&self, level: u8) -> u32 {
        if level == 0 || self.thresholds.is_empty() {
            return 0;
        }
        let index = usize::from(level - 1).min(self.thresholds.len() - 1);
        self.thresholds[index]
    }

    fn set_threshold(&mut self, level: u8, experience: u32) {
        if level == 0 {
            return;
        }
        let level = usize::from(level);
        if level > self.thresholds.len() {
            // Levels may arrive in any order; slots without a row yet hold
            // u32::MAX so a gap can never hand out a zero threshold.
            self.thresholds.resize(level, u32::MAX);
        }
        self.thresholds[level - 1] = experience;
    }
}
