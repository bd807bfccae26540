//! Data models for loaded balance tables

use serde::Serialize;

use crate::app::services::table_parser::Fixed6;

/// The playable character classes, in canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum HeroClass {
    Warrior,
    Rogue,
    Sorcerer,
    Monk,
    Bard,
    Barbarian,
}

impl HeroClass {
    pub const COUNT: usize = 6;

    /// Every class, in canonical order
    pub const ALL: [HeroClass; HeroClass::COUNT] = [
        HeroClass::Warrior,
        HeroClass::Rogue,
        HeroClass::Sorcerer,
        HeroClass::Monk,
        HeroClass::Bard,
        HeroClass::Barbarian,
    ];

    /// Canonical-order position of this class
    pub fn index(self) -> usize {
        self as usize
    }

    /// The keyword naming this class in data files
    pub fn keyword(self) -> &'static str {
        match self {
            HeroClass::Warrior => "Warrior",
            HeroClass::Rogue => "Rogue",
            HeroClass::Sorcerer => "Sorcerer",
            HeroClass::Monk => "Monk",
            HeroClass::Bard => "Bard",
            HeroClass::Barbarian => "Barbarian",
        }
    }

    /// Match a data-file keyword against the closed class set
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        HeroClass::ALL
            .into_iter()
            .find(|class| class.keyword() == keyword)
    }
}

/// The balance numbers for one character class
///
/// Attribute columns are plain integers; the life and mana columns are 1/64
/// fixed-point values because per-level and per-stat gains are fractional
/// (a vitality point may be worth 2.5 life, stored as 160 raw units).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ClassStats {
    pub base_strength: u8,
    pub base_magic: u8,
    pub base_dexterity: u8,
    pub base_vitality: u8,
    pub max_strength: u8,
    pub max_magic: u8,
    pub max_dexterity: u8,
    pub max_vitality: u8,
    pub base_life: Fixed6,
    pub base_mana: Fixed6,
    pub life_per_level: Fixed6,
    pub mana_per_level: Fixed6,
    pub life_per_stat: Fixed6,
    pub mana_per_stat: Fixed6,
    pub life_per_item_stat: Fixed6,
    pub mana_per_item_stat: Fixed6,
}
