use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `fsa` binary.
#[derive(Debug, Parser)]
#[command(
    name = "fsa",
    version,
    about = "Financial skills academy - site support tooling"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory of the progress store (overrides `storage.dir`)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Lab catalog file or URL (overrides `labs.catalog`)
    #[arg(long, global = true)]
    pub catalog: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            data_dir: self.data_dir.clone(),
            catalog: self.catalog.clone(),
        }
    }
}
