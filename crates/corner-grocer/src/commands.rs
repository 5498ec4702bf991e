use std::io::Write;

use anyhow::{Context, Result};
use grocer_tally::FrequencyTable;

use crate::config::{Command, Config};

/// Run one non-interactive command against a loaded table.
///
/// Unlike the menu, nothing is exported unless the command asks for it.
pub fn run_command<W: Write>(
    table: &FrequencyTable,
    command: &Command,
    config: &Config,
    out: &mut W,
) -> Result<()> {
    match command {
        Command::Lookup { item } => {
            writeln!(out, "{} {}", item, table.frequency(item))?;
        }
        Command::List { order, json } => {
            if *json {
                serde_json::to_writer_pretty(&mut *out, &table.entries(*order))
                    .context("serializing listing")?;
                writeln!(out)?;
            } else {
                table.write_listing(*order, out)?;
            }
        }
        Command::Histogram { order, bar } => {
            table.write_histogram(*order, *bar, out)?;
        }
        Command::Export { path } => {
            let path = path.as_deref().unwrap_or(config.export_path.as_path());
            table.try_export(path)?;
            writeln!(out, "Exported to {}", path.display())?;
        }
    }
    out.flush()?;
    Ok(())
}
