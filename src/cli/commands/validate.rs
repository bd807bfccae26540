//! Validate command: load every known table and report per-resource status

use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use serde::Serialize;
use tracing::{info, warn};
use walkdir::WalkDir;

use crate::app::services::balance_tables::{ClassStatsTable, ExperienceTable};
use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::config::Config;
use crate::constants::{
    CLASS_STATS_RESOURCE, EXPERIENCE_RESOURCE, KNOWN_RESOURCES, TABLE_EXTENSION,
};
use crate::app::services::table_parser::ResourceStore;

/// Outcome for one known resource
#[derive(Debug, Clone, Serialize)]
pub struct ResourceReport {
    pub resource: String,
    pub ok: bool,
    /// Short summary of the loaded contents, when the load succeeded
    pub detail: Option<String>,
    /// The load error, when it did not
    pub error: Option<String>,
}

/// Full validation report across the data directory
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub data_dir: String,
    pub resources: Vec<ResourceReport>,
    /// Table files present on disk that no schema claims
    pub stray_files: Vec<String>,
    pub passed: bool,
}

/// Validate command runner
pub fn run_validate(args: ValidateArgs) -> anyhow::Result<()> {
    super::init_logging(args.get_log_level());
    args.validate()?;

    let data_dir = args.get_data_dir();
    let config = Config::default().with_data_dir(&data_dir);
    config
        .validate()
        .with_context(|| format!("cannot validate {}", data_dir.display()))?;

    info!("validating balance tables in {}", data_dir.display());
    let store = config.store();

    let resources: Vec<ResourceReport> = KNOWN_RESOURCES
        .iter()
        .map(|&resource| check_resource(&store, resource))
        .collect();

    let stray_files = find_stray_tables(&data_dir);
    for stray in &stray_files {
        warn!("stray table file not claimed by any schema: {}", stray);
    }

    let passed = resources.iter().all(|report| report.ok);
    let report = ValidationReport {
        data_dir: data_dir.display().to_string(),
        resources,
        stray_files,
        passed,
    };

    match args.output_format {
        OutputFormat::Human => {
            if !args.quiet {
                print_human_report(&report);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if !report.passed {
        let failed = report.resources.iter().filter(|r| !r.ok).count();
        anyhow::bail!("{failed} of {} balance tables failed validation", report.resources.len());
    }
    Ok(())
}

/// Load one known resource and summarize the outcome
fn check_resource(store: &impl ResourceStore, resource: &str) -> ResourceReport {
    let outcome = match resource {
        EXPERIENCE_RESOURCE => ExperienceTable::load(store)
            .map(|table| format!("{} levels", table.max_level())),
        CLASS_STATS_RESOURCE => ClassStatsTable::load(store)
            .map(|table| format!("{} classes", table.iter().count())),
        other => Err(crate::Error::configuration(format!(
            "no loader registered for resource '{other}'"
        ))),
    };

    match outcome {
        Ok(detail) => ResourceReport {
            resource: resource.to_string(),
            ok: true,
            detail: Some(detail),
            error: None,
        },
        Err(error) => ResourceReport {
            resource: resource.to_string(),
            ok: false,
            detail: None,
            error: Some(error.to_string()),
        },
    }
}

/// Table files under the data dir that no known schema claims
fn find_stray_tables(data_dir: &Path) -> Vec<String> {
    let mut stray = Vec::new();
    for entry in WalkDir::new(data_dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
    {
        let is_table = entry
            .path()
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(TABLE_EXTENSION));
        if !is_table {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if !KNOWN_RESOURCES.contains(&name.as_str()) {
            stray.push(name);
        }
    }
    stray.sort();
    stray
}

fn print_human_report(report: &ValidationReport) {
    println!();
    println!("{}", "Balance Data Validation".bold());
    println!("Data directory: {}", report.data_dir);
    println!();

    for resource in &report.resources {
        if resource.ok {
            println!(
                "  {} {:<16} {}",
                "✓".green(),
                resource.resource,
                resource.detail.as_deref().unwrap_or_default()
            );
        } else {
            println!(
                "  {} {:<16} {}",
                "✗".red(),
                resource.resource,
                resource.error.as_deref().unwrap_or_default().red()
            );
        }
    }

    if !report.stray_files.is_empty() {
        println!();
        println!(
            "  {} unclaimed table files: {}",
            "!".yellow(),
            report.stray_files.join(", ")
        );
    }

    println!();
    if report.passed {
        println!("{}", "All balance tables are valid.".green().bold());
    } else {
        println!("{}", "Some balance tables failed validation.".red().bold());
    }
}
