//! `contactbook` - CLI for the contact book
//!
//! Opens the interactive menu, or prints configuration when asked. The process
//! always exits with status 0; faults are reported on the console instead.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io;

use anyhow::Context;
use clap::Parser;
use tracing::{error, warn};

use contactbook::cli::{Cli, Command, ConfigCommand, Console, Dispatcher};
use contactbook::{init_logging, report, Config};

fn main() {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    if let Err(err) = run(cli) {
        error!("{err:#}");
        println!("{} {err:#}", report::ERROR_MARKER);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli);

    match cli.command {
        Some(Command::Config(config_cmd)) => handle_config(&config, &config_cmd),
        None => run_menu(&config),
    }
}

/// Load configuration, falling back to defaults when it is unusable.
fn load_config(cli: &Cli) -> Config {
    Config::load_with_overrides(cli.config.clone(), cli.file.clone(), cli.export.clone())
        .unwrap_or_else(|err| {
            warn!("{err}; using default configuration");
            Config::default()
        })
}

fn run_menu(config: &Config) -> anyhow::Result<()> {
    let console = Console::new(io::stdin().lock(), io::stdout().lock());
    let mut dispatcher = Dispatcher::open(config, console);
    dispatcher.run().context("console failed")?;
    Ok(())
}

fn handle_config(config: &Config, cmd: &ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if *json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Contacts file:      {}", config.contacts_path().display());
                println!(
                    "  Create parent dirs: {}",
                    config.storage.create_parent_dirs
                );
                println!();
                println!("[Export]");
                println!("  CSV file:           {}", config.export_path().display());
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
    }
    Ok(())
}
