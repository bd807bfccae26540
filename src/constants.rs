//! Application constants for the balance data loader
//!
//! This module contains resource names, sentinel literals, and the canonical
//! column names used by the shipped balance tables.

// =============================================================================
// Resource Names
// =============================================================================

/// Experience curve table resource
pub const EXPERIENCE_RESOURCE: &str = "Experience.tsv";

/// Character class stat table resource
pub const CLASS_STATS_RESOURCE: &str = "CharStats.tsv";

/// All resources the loader knows how to validate
pub const KNOWN_RESOURCES: &[&str] = &[EXPERIENCE_RESOURCE, CLASS_STATS_RESOURCE];

/// Default directory name holding the shipped text data
pub const DATA_DIR_NAME: &str = "txtdata";

// =============================================================================
// Sentinel Rows
// =============================================================================

/// Level-column literal marking the experience table's terminator row
pub const MAX_LEVEL_SENTINEL: &str = "MaxLevel";

/// Class-column literal separating base-game classes from expansion classes
pub const EXPANSION_SENTINEL: &str = "Expansion";

// =============================================================================
// Limits
// =============================================================================

/// Hard cap on the character level an experience table may define
pub const MAX_CHARACTER_LEVEL: u8 = u8::MAX;

// =============================================================================
// Column Name Constants
// =============================================================================

/// Canonical header names in balance table files
pub mod columns {
    // Experience table
    pub const LEVEL: &str = "Level";
    pub const EXPERIENCE: &str = "Experience";

    // Class stat table
    pub const CLASS: &str = "Class";
    pub const BASE_STRENGTH: &str = "Base Strength";
    pub const BASE_MAGIC: &str = "Base Magic";
    pub const BASE_DEXTERITY: &str = "Base Dexterity";
    pub const BASE_VITALITY: &str = "Base Vitality";
    pub const MAX_STRENGTH: &str = "Maximum Strength";
    pub const MAX_MAGIC: &str = "Maximum Magic";
    pub const MAX_DEXTERITY: &str = "Maximum Dexterity";
    pub const MAX_VITALITY: &str = "Maximum Vitality";
    pub const BASE_LIFE: &str = "Base Life";
    pub const BASE_MANA: &str = "Base Mana";
    pub const LIFE_PER_LEVEL: &str = "Life Per Level";
    pub const MANA_PER_LEVEL: &str = "Mana Per Level";
    pub const LIFE_PER_STAT: &str = "Life Per Player Stat";
    pub const MANA_PER_STAT: &str = "Mana Per Player Stat";
    pub const LIFE_PER_ITEM_STAT: &str = "Life Per Item Stat";
    pub const MANA_PER_ITEM_STAT: &str = "Mana Per Item Stat";
}

/// File extension of balance table resources
pub const TABLE_EXTENSION: &str = "tsv";
