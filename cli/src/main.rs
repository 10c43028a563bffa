mod args;
mod format;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use engine::{EngineConfig, Inventory};
use engine::ingest::load_path;
use engine::query::QueryResult;
use engine::query::parser::parse_command;
use rustyline::DefaultEditor;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use args::Args;
use format::{OutputMode, print_error, print_result};

fn main() {
    if let Err(e) = run() {
        eprintln!("inventory: error: {:#}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    // Logs go to stderr so query output on stdout stays readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = args.engine_config().context("invalid configuration")?;
    let mode = if args.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    println!("\n Welcome to Amazon Inventory Query System");
    println!(" enter :quit to exit. or :help to list supported commands.");

    let inventory = load_inventory(&config);
    let mut rl = DefaultEditor::new().context("failed to start line editor")?;

    loop {
        let line = match rl.readline("> ") {
            Ok(line) => line,
            Err(_) => break,
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        remember(&mut rl, line);

        match parse_command(line) {
            Ok(command) => match inventory.execute(&command) {
                QueryResult::Quit => break,
                result => print_result(&result, mode),
            },
            Err(e) => print_error(&e),
        }
    }

    println!("Goodbye!");
    Ok(())
}

/// Build the inventory and fill it from the configured dataset. A dataset
/// that cannot be opened leaves the inventory empty.
fn load_inventory(config: &EngineConfig) -> Inventory {
    let mut inventory = Inventory::new(config);
    println!("Loading inventory from {}...", config.dataset_path.display());

    match load_path(&config.dataset_path, &mut inventory) {
        Ok(report) => println!("Loaded {} products from CSV.", report.loaded),
        Err(e) => {
            debug!(path = %config.dataset_path.display(), error = ?e, "dataset not loaded");
            eprintln!(
                "{} Could not load {} ({}). System will run with empty inventory.",
                "Warning:".yellow().bold(),
                config.dataset_path.display(),
                e
            );
        }
    }
    inventory
}

fn remember(rl: &mut DefaultEditor, line: &str) {
    if let Err(e) = rl.add_history_entry(line) {
        debug!(error = %e, "history entry not recorded");
    }
}
