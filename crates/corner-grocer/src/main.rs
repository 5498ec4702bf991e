use std::io;
use std::process;

use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

use corner_grocer::{Cli, Menu, load_config, run_command};
use grocer_tally::FrequencyTable;

const DEFAULT_LOG_FILTER: &str = "warn";

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = load_config(&cli);
    info!("using inventory at {}", config.inventory_path.display());
    info!("exporting to {}", config.export_path.display());

    let table = FrequencyTable::load(&config.inventory_path);
    if !table.is_loaded() {
        eprintln!(
            "ERROR: Could not open \"{}\".",
            config.inventory_path.display()
        );
        eprintln!(
            "Make sure the file is in the program's working directory, or pass --inventory <path>."
        );
        process::exit(1);
    }

    match &cli.command {
        Some(command) => {
            let mut out = io::stdout().lock();
            run_command(&table, command, &config, &mut out)?;
        }
        None => {
            let mut menu = Menu::new(
                &table,
                &config.export_path,
                io::stdin().lock(),
                io::stdout().lock(),
            );
            menu.run()?;
        }
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let max_level = env_filter
        .max_level_hint()
        .and_then(|hint| hint.into_level())
        .unwrap_or(Level::WARN);
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true)
        .with_max_level(max_level)
        .init();
}
