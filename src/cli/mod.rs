// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod menu;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Command to execute
    #[command(subcommand)]
    pub command: CliCommand,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "PASSGEN_LOG_LEVEL")]
    pub log_level: Option<String>,
}
