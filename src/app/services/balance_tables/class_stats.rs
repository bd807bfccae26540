//! Character class stat table
//!
//! One row per playable class: starting and maximum attributes plus the
//! fixed-point life/mana coefficients. The Class column is validated against
//! the closed set of class keywords; the literal `Expansion` marks a
//! separator row between base-game and expansion classes and is skipped.

use tracing::info;

use crate::app::models::{ClassStats, HeroClass};
use crate::app::services::table_parser::{
    DataFile, Field, Fixed6, ParseIntError, ResourceStore, SchemaColumn,
};
use crate::constants::{CLASS_STATS_RESOURCE, EXPANSION_SENTINEL, columns};
use crate::{Error, FieldError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClassStatsColumn {
    Class,
    BaseStrength,
    BaseMagic,
    BaseDexterity,
    BaseVitality,
    MaxStrength,
    MaxMagic,
    MaxDexterity,
    MaxVitality,
    BaseLife,
    BaseMana,
    LifePerLevel,
    ManaPerLevel,
    LifePerStat,
    ManaPerStat,
    LifePerItemStat,
    ManaPerItemStat,
}

const CLASS_STATS_COLUMNS: [ClassStatsColumn; 17] = [
    ClassStatsColumn::Class,
    ClassStatsColumn::BaseStrength,
    ClassStatsColumn::BaseMagic,
    ClassStatsColumn::BaseDexterity,
    ClassStatsColumn::BaseVitality,
    ClassStatsColumn::MaxStrength,
    ClassStatsColumn::MaxMagic,
    ClassStatsColumn::MaxDexterity,
    ClassStatsColumn::MaxVitality,
    ClassStatsColumn::BaseLife,
    ClassStatsColumn::BaseMana,
    ClassStatsColumn::LifePerLevel,
    ClassStatsColumn::ManaPerLevel,
    ClassStatsColumn::LifePerStat,
    ClassStatsColumn::ManaPerStat,
    ClassStatsColumn::LifePerItemStat,
    ClassStatsColumn::ManaPerItemStat,
];

impl SchemaColumn for ClassStatsColumn {
    const COUNT: usize = CLASS_STATS_COLUMNS.len();

    fn index(self) -> usize {
        self as usize
    }

    fn from_index(index: usize) -> Option<Self> {
        CLASS_STATS_COLUMNS.get(index).copied()
    }

    fn name(self) -> &'static str {
        match self {
            ClassStatsColumn::Class => columns::CLASS,
            ClassStatsColumn::BaseStrength => columns::BASE_STRENGTH,
            ClassStatsColumn::BaseMagic => columns::BASE_MAGIC,
            ClassStatsColumn::BaseDexterity => columns::BASE_DEXTERITY,
            ClassStatsColumn::BaseVitality => columns::BASE_VITALITY,
            ClassStatsColumn::MaxStrength => columns::MAX_STRENGTH,
            ClassStatsColumn::MaxMagic => columns::MAX_MAGIC,
            ClassStatsColumn::MaxDexterity => columns::MAX_DEXTERITY,
            ClassStatsColumn::MaxVitality => columns::MAX_VITALITY,
            ClassStatsColumn::BaseLife => columns::BASE_LIFE,
            ClassStatsColumn::BaseMana => columns::BASE_MANA,
            ClassStatsColumn::LifePerLevel => columns::LIFE_PER_LEVEL,
            ClassStatsColumn::ManaPerLevel => columns::MANA_PER_LEVEL,
            ClassStatsColumn::LifePerStat => columns::LIFE_PER_STAT,
            ClassStatsColumn::ManaPerStat => columns::MANA_PER_STAT,
            ClassStatsColumn::LifePerItemStat => columns::LIFE_PER_ITEM_STAT,
            ClassStatsColumn::ManaPerItemStat => columns::MANA_PER_ITEM_STAT,
        }
    }
}

fn map_class_stats_column(name: &str) -> Option<ClassStatsColumn> {
    CLASS_STATS_COLUMNS
        .into_iter()
        .find(|column| column.name() == name)
}

/// Per-class balance numbers, indexed by [`HeroClass`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassStatsTable {
    classes: Vec<ClassStats>,
}

impl ClassStatsTable {
    /// Load the class stat table from its shipped resource
    ///
    /// Every class must have a row; a file that omits one fails with
    /// [`Error::IncompleteTable`] rather than leaving zeroed stats behind.
    pub fn load(store: &impl ResourceStore) -> Result<Self> {
        let file = DataFile::load(store, CLASS_STATS_RESOURCE)?;
        let schema = file.parse_header(map_class_stats_column)?;

        let mut slots: [Option<ClassStats>; HeroClass::COUNT] = [None; HeroClass::COUNT];
        for record in file.records() {
            let mut class: Option<HeroClass> = None;
            let mut stats = ClassStats::default();
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

                let column = definition.column();
                match column {
                    ClassStatsColumn::Class => {
                        if field == EXPANSION_SENTINEL {
                            skip_record = true;
                        } else {
                            class = Some(HeroClass::from_keyword(field.as_str()).ok_or_else(
                                || {
                                    Error::field(
                                        FieldError::InvalidValue,
                                        file.resource(),
                                        columns::CLASS,
                                        field.as_str(),
                                    )
                                },
                            )?);
                        }
                    }
                    ClassStatsColumn::BaseStrength => {
                        stats.base_strength = parse_stat(&file, column, field)?;
                    }
                    ClassStatsColumn::BaseMagic => {
                        stats.base_magic = parse_stat(&file, column, field)?;
                    }
                    ClassStatsColumn::BaseDexterity => {
                        stats.base_dexterity = parse_stat(&file, column, field)?;
                    }
                    ClassStatsColumn::BaseVitality => {
                        stats.base_vitality = parse_stat(&file, column, field)?;
                    }
                    ClassStatsColumn::MaxStrength => {
                        stats.max_strength = parse_stat(&file, column, field)?;
                    }
                    ClassStatsColumn::MaxMagic => {
                        stats.max_magic = parse_stat(&file, column, field)?;
                    }
                    ClassStatsColumn::MaxDexterity => {
                        stats.max_dexterity = parse_stat(&file, column, field)?;
                    }
                    ClassStatsColumn::MaxVitality => {
                        stats.max_vitality = parse_stat(&file, column, field)?;
                    }
                    ClassStatsColumn::BaseLife => {
                        stats.base_life = parse_coefficient(&file, column, field)?;
                    }
                    ClassStatsColumn::BaseMana => {
                        stats.base_mana = parse_coefficient(&file, column, field)?;
                    }
                    ClassStatsColumn::LifePerLevel => {
                        stats.life_per_level = parse_coefficient(&file, column, field)?;
                    }
                    ClassStatsColumn::ManaPerLevel => {
                        stats.mana_per_level = parse_coefficient(&file, column, field)?;
                    }
                    ClassStatsColumn::LifePerStat => {
                        stats.life_per_stat = parse_coefficient(&file, column, field)?;
                    }
                    ClassStatsColumn::ManaPerStat => {
                        stats.mana_per_stat = parse_coefficient(&file, column, field)?;
                    }
                    ClassStatsColumn::LifePerItemStat => {
                        stats.life_per_item_stat = parse_coefficient(&file, column, field)?;
                    }
                    ClassStatsColumn::ManaPerItemStat => {
                        stats.mana_per_item_stat = parse_coefficient(&file, column, field)?;
                    }
                }

                if skip_record {
                    break;
                }
                fields.advance();
            }

            if skip_record {
                continue;
            }
            if let Some(class) = class {
                slots[class.index()] = Some(stats);
            }
        }

        let mut classes = Vec::with_capacity(HeroClass::COUNT);
        for hero_class in HeroClass::ALL {
            match slots[hero_class.index()] {
                Some(stats) => classes.push(stats),
                None => {
                    return Err(Error::incomplete_table(
                        file.resource(),
                        hero_class.keyword(),
                    ));
                }
            }
        }

        info!("loaded stats for {} classes", classes.len());
        Ok(ClassStatsTable { classes })
    }

    /// Replace this table with a freshly loaded one
    pub fn reload(&mut self, store: &impl ResourceStore) -> Result<()> {
        *self = Self::load(store)?;
        Ok(())
    }

    /// The balance numbers for one class
    pub fn stats_for_class(&self, class: HeroClass) -> &ClassStats {
        &self.classes[class.index()]
    }

    /// All classes with their stats, in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (HeroClass, &ClassStats)> {
        HeroClass::ALL.into_iter().zip(self.classes.iter())
    }
}

/// Parse an attribute column into its u8 stat
fn parse_stat(file: &DataFile, column: ClassStatsColumn, field: Field<'_>) -> Result<u8> {
    field.parse_int().map_err(|error: ParseIntError| {
        Error::field(error.into(), file.resource(), column.name(), field.as_str())
    })
}

/// Parse a life/mana column into its fixed-point coefficient
fn parse_coefficient(file: &DataFile, column: ClassStatsColumn, field: Field<'_>) -> Result<Fixed6> {
    let raw = field.parse_fixed6::<i32>().map_err(|error| {
        Error::field(error.into(), file.resource(), column.name(), field.as_str())
    })?;
    Ok(Fixed6::from_raw(raw))
}
