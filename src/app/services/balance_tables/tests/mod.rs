//! Test fixtures shared across the balance table test modules

use crate::app::services::table_parser::tests::MemoryStore;
use crate::constants::{CLASS_STATS_RESOURCE, EXPERIENCE_RESOURCE, columns};


/// A well-formed experience file: three levels plus the terminator row
pub const EXPERIENCE_CONTENT: &str = "Level\tExperience\n1\t0\n2\t100\n3\t250\nMaxLevel\t0\n";

/// A store holding the given text under the experience resource name
pub fn experience_store(content: &str) -> MemoryStore {
    MemoryStore::new().with(EXPERIENCE_RESOURCE, content)
}

/// A store holding the given text under the class stats resource name
pub fn class_stats_store(content: &str) -> MemoryStore {
    MemoryStore::new().with(CLASS_STATS_RESOURCE, content)
}

/// The canonical class stats header row
pub fn class_stats_header() -> String {
    [
        columns::CLASS,
        columns::BASE_STRENGTH,
        columns::BASE_MAGIC,
        columns::BASE_DEXTERITY,
        columns::BASE_VITALITY,
        columns::MAX_STRENGTH,
        columns::MAX_MAGIC,
        columns::MAX_DEXTERITY,
        columns::MAX_VITALITY,
        columns::BASE_LIFE,
        columns::BASE_MANA,
        columns::LIFE_PER_LEVEL,
        columns::MANA_PER_LEVEL,
        columns::LIFE_PER_STAT,
        columns::MANA_PER_STAT,
        columns::LIFE_PER_ITEM_STAT,
        columns::MANA_PER_ITEM_STAT,
    ]
    .join("\t")
}

/// A well-formed class stats file covering every class, with an `Expansion`
/// separator row in the middle
pub fn default_class_stats_content() -> String {
    let mut content = class_stats_header();
    content.push('\n');
    content.push_str("Warrior\t30\t10\t20\t25\t250\t50\t60\t100\t2\t1\t2\t1\t2\t1\t2\t1\n");
    content.push_str("Rogue\t20\t15\t30\t20\t55\t70\t250\t80\t1\t2\t2\t2\t1.5\t2\t1.5\t2\n");
    content.push_str("Sorcerer\t15\t35\t15\t20\t45\t250\t85\t80\t-1\t2\t1\t2\t1\t2\t1\t2\n");
    content.push_str("Expansion\t0\t0\t0\t0\t0\t0\t0\t0\t0\t0\t0\t0\t0\t0\t0\t0\n");
    content.push_str("Monk\t25\t15\t25\t20\t150\t80\t150\t80\t2\t1.5\t2\t1.5\t2\t1.5\t2\t1.5\n");
    content.push_str("Bard\t20\t20\t25\t20\t120\t120\t120\t100\t1\t1.75\t2\t1.75\t1\t1.75\t1\t1.75\n");
    content.push_str("Barbarian\t40\t0\t20\t25\t255\t0\t55\t150\t2\t0\t2\t0\t2.5\t0\t2.5\t0\n");
    content
}
