use std::env;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use grocer_types::{MENU_BAR_CHAR, SortOrder};

pub const DEFAULT_INVENTORY: &str = "inventory.txt";
pub const DEFAULT_EXPORT: &str = "frequency.dat";
pub const INVENTORY_ENV: &str = "GROCER_INVENTORY";
pub const EXPORT_ENV: &str = "GROCER_EXPORT";

#[derive(Debug, Parser)]
#[command(name = "corner-grocer")]
#[command(about = "Count grocery items from an inventory list and browse their frequencies")]
pub struct Cli {
    /// Inventory file, one `<item> [<quantity>]` per line.
    #[arg(long, global = true)]
    pub inventory: Option<PathBuf>,
    /// File written with every item's count when the menu exits.
    #[arg(long, global = true)]
    pub export: Option<PathBuf>,
    /// Run a single command instead of the interactive menu.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the count for one item.
    Lookup { item: String },
    /// Print every item with its count.
    List {
        #[arg(long, default_value_t = SortOrder::Alpha)]
        order: SortOrder,
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print one bar per item, one fill character per unit.
    Histogram {
        #[arg(long, default_value_t = SortOrder::Alpha)]
        order: SortOrder,
        #[arg(long, default_value_t = MENU_BAR_CHAR)]
        bar: char,
    },
    /// Write `<item> <count>` lines to a file (defaults to the export path).
    Export { path: Option<PathBuf> },
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Config {
    pub inventory_path: PathBuf,
    pub export_path: PathBuf,
}

/// Flags win over environment variables, which win over the defaults.
pub fn load_config(cli: &Cli) -> Config {
    resolve_config(cli, |key| env::var(key).ok())
}

fn resolve_config<F>(cli: &Cli, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    let inventory_path = cli
        .inventory
        .clone()
        .or_else(|| lookup(INVENTORY_ENV).filter(|v| !v.is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INVENTORY));
    let export_path = cli
        .export
        .clone()
        .or_else(|| lookup(EXPORT_ENV).filter(|v| !v.is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT));

    Config {
        inventory_path,
        export_path,
    }
}
