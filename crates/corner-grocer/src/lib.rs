pub mod commands;
pub mod config;
pub mod menu;

pub use commands::run_command;
pub use config::{Cli, Command, Config, load_config};
pub use menu::{Menu, MenuChoice};
