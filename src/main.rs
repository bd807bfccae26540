use balancedat::cli::{args::Args, commands};
use clap::Parser;
use std::process;

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {error:#}");
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("balancedat - Game Balance Table Loader");
    println!("======================================");
    println!();
    println!("Load and validate tab-separated game balance tables (class stats,");
    println!("experience curves) against their compile-time column schemas.");
    println!();
    println!("USAGE:");
    println!("    balancedat <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    validate    Validate every known balance table and report status");
    println!("    show        Load the balance tables and print their typed contents");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Validate the shipped tables in the default data directory:");
    println!("    balancedat validate");
    println!();
    println!("    # Validate a working copy and emit a machine-readable report:");
    println!("    balancedat validate --data-dir ./txtdata --format json");
    println!();
    println!("    # Inspect the parsed experience curve:");
    println!("    balancedat show --table experience");
    println!();
    println!("For detailed help on any command, use:");
    println!("    balancedat <COMMAND> --help");
}
