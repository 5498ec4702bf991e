use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use grocer_tally::{DEFAULT_BAR_CHAR, FrequencyTable, SortOrder};

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let inventory = args
        .next()
        .map(PathBuf::from)
        .context("usage: cargo run -p grocer-tally --example summary -- <inventory> [top-n]")?;
    let top_n = match args.next() {
        Some(raw) => raw
            .parse::<usize>()
            .with_context(|| format!("top-n must be a number, got {raw:?}"))?,
        None => 5,
    };

    let table = FrequencyTable::try_load(&inventory)
        .with_context(|| format!("loading inventory from {}", inventory.display()))?;
    if table.is_empty() {
        bail!("{} contains no items", inventory.display());
    }

    println!("Inventory    : {}", inventory.display());
    println!("Distinct items: {}", table.len());
    println!("Total units   : {}", table.total_quantity());

    println!("\nTop {top_n}:");
    for line in table
        .render_histogram(SortOrder::CountDesc, DEFAULT_BAR_CHAR)
        .iter()
        .take(top_n)
    {
        println!("  {line}");
    }

    Ok(())
}
