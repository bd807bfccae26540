//! End-to-end tests: balance tables loaded from real files on disk

use balancedat::app::adapters::filesystem::FsResourceStore;
use balancedat::{ClassStatsTable, Config, DataFile, Error, ExperienceTable, HeroClass};
use std::fs;
use tempfile::TempDir;

const EXPERIENCE_CONTENT: &str = "Level\tExperience\n1\t0\n2\t100\nMaxLevel\t0\n";

fn class_stats_content() -> String {
    let header = [
        "Class",
        "Base Strength",
        "Base Magic",
        "Base Dexterity",
        "Base Vitality",
        "Maximum Strength",
        "Maximum Magic",
        "Maximum Dexterity",
        "Maximum Vitality",
        "Base Life",
        "Base Mana",
        "Life Per Level",
        "Mana Per Level",
        "Life Per Player Stat",
        "Mana Per Player Stat",
        "Life Per Item Stat",
        "Mana Per Item Stat",
    ]
    .join("\t");

    let mut content = header;
    content.push('\n');
    for class in HeroClass::ALL {
        content.push_str(&format!(
            "{}\t30\t10\t20\t25\t250\t50\t60\t100\t2\t1\t2.5\t1.5\t2\t1\t2\t1\n",
            class.keyword()
        ));
    }
    content
}

fn write_data_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Experience.tsv"), EXPERIENCE_CONTENT).unwrap();
    fs::write(dir.path().join("CharStats.tsv"), class_stats_content()).unwrap();
    dir
}

#[test]
fn test_load_tables_from_disk() {
    let dir = write_data_dir();
    let config = Config::default().with_data_dir(dir.path());
    config.validate().unwrap();
    let store = config.store();

    let experience = ExperienceTable::load(&store).unwrap();
    assert_eq!(experience.max_level(), 2);
    assert_eq!(experience.threshold_for_level(1), 0);
    assert_eq!(experience.threshold_for_level(2), 100);

    let classes = ClassStatsTable::load(&store).unwrap();
    for (_, stats) in classes.iter() {
        assert_eq!(stats.base_strength, 30);
        // 2.5 life per level is 160 raw 1/64 units
        assert_eq!(stats.life_per_level.raw(), 160);
        assert_eq!(stats.mana_per_level.to_f32(), 1.5);
    }
}

#[test]
fn test_missing_file_reports_resource_not_found() {
    let dir = TempDir::new().unwrap();
    let store = FsResourceStore::new(dir.path());

    match ExperienceTable::load(&store) {
        Err(Error::ResourceNotFound { resource }) => assert_eq!(resource, "Experience.tsv"),
        other => panic!("expected ResourceNotFound, got {other:?}"),
    }
}

#[test]
fn test_broken_file_on_disk_fails_with_cell_context() {
    let dir = write_data_dir();
    fs::write(
        dir.path().join("Experience.tsv"),
        "Level\tExperience\n1\tlots\n",
    )
    .unwrap();

    let store = FsResourceStore::new(dir.path());
    let error = ExperienceTable::load(&store).unwrap_err();
    let message = error.to_string();
    assert!(message.contains("Experience.tsv"), "message: {message}");
    assert!(message.contains("Experience"), "message: {message}");
    assert!(message.contains("lots"), "message: {message}");
}

#[test]
fn test_data_file_round_trip_from_disk() {
    let dir = write_data_dir();
    let store = FsResourceStore::new(dir.path());

    let file = DataFile::load(&store, "Experience.tsv").unwrap();
    assert_eq!(file.resource(), "Experience.tsv");
    assert_eq!(file.header().cell_count(), 2);
    // two data rows plus the terminator row
    assert_eq!(file.records().count(), 3);
}
