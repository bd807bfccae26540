//! Show command: load the balance tables and print their typed contents

use anyhow::Context;
use colored::Colorize;
use serde_json::json;

use crate::app::services::balance_tables::{ClassStatsTable, ExperienceTable};
use crate::cli::args::{OutputFormat, ShowArgs, TableSelector};
use crate::config::Config;

/// Show command runner
pub fn run_show(args: ShowArgs) -> anyhow::Result<()> {
    super::init_logging(args.get_log_level());
    args.validate()?;

    let data_dir = args.get_data_dir();
    let config = Config::default().with_data_dir(&data_dir);
    config
        .validate()
        .with_context(|| format!("cannot load tables from {}", data_dir.display()))?;
    let store = config.store();

    let want_experience = matches!(args.table, None | Some(TableSelector::Experience));
    let want_classes = matches!(args.table, None | Some(TableSelector::Classes));

    let experience = want_experience
        .then(|| ExperienceTable::load(&store))
        .transpose()
        .context("failed to load experience table")?;
    let classes = want_classes
        .then(|| ClassStatsTable::load(&store))
        .transpose()
        .context("failed to load class stat table")?;

    match args.output_format {
        OutputFormat::Json => print_json(experience.as_ref(), classes.as_ref())?,
        OutputFormat::Human => {
            if let Some(table) = &experience {
                print_experience(table);
            }
            if let Some(table) = &classes {
                print_classes(table);
            }
        }
    }
    Ok(())
}

fn print_json(
    experience: Option<&ExperienceTable>,
    classes: Option<&ClassStatsTable>,
) -> anyhow::Result<()> {
    let mut document = serde_json::Map::new();

    if let Some(table) = experience {
        document.insert(
            "experience".to_string(),
            json!({
                "max_level": table.max_level(),
                "thresholds": table.thresholds(),
            }),
        );
    }
    if let Some(table) = classes {
        let classes: Vec<_> = table
            .iter()
            .map(|(class, stats)| {
                json!({
                    "class": class.keyword(),
                    "stats": stats,
                })
            })
            .collect();
        document.insert("classes".to_string(), json!(classes));
    }

    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}

fn print_experience(table: &ExperienceTable) {
    println!();
    println!("{}", "Experience Curve".bold());
    println!("Maximum level: {}", table.max_level());
    for (index, threshold) in table.thresholds().iter().enumerate() {
        println!("  level {:>3}  {:>12}", index + 1, threshold);
    }
}

fn print_classes(table: &ClassStatsTable) {
    println!();
    println!("{}", "Class Stats".bold());
    for (class, stats) in table.iter() {
        println!("  {}", class.keyword().bold());
        println!(
            "    attributes  STR {:>3}/{:<3} MAG {:>3}/{:<3} DEX {:>3}/{:<3} VIT {:>3}/{:<3}",
            stats.base_strength,
            stats.max_strength,
            stats.base_magic,
            stats.max_magic,
            stats.base_dexterity,
            stats.max_dexterity,
            stats.base_vitality,
            stats.max_vitality,
        );
        println!(
            "    life        base {}, per level {}, per stat {}, per item stat {}",
            stats.base_life, stats.life_per_level, stats.life_per_stat, stats.life_per_item_stat,
        );
        println!(
            "    mana        base {}, per level {}, per stat {}, per item stat {}",
            stats.base_mana, stats.mana_per_level, stats.mana_per_stat, stats.mana_per_item_stat,
        );
    }
}
