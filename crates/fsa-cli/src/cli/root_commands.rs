use clap::{Args, Subcommand};

use crate::cli::subcommands::{IconCommands, LabCommands, NavCommands, ProgressCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// SVG icons.
    Icon {
        #[command(subcommand)]
        action: IconCommands,
    },
    /// Popup labs.
    Lab {
        #[command(subcommand)]
        action: LabCommands,
    },
    /// Learner progress.
    Progress {
        #[command(subcommand)]
        action: ProgressCommands,
    },
    /// Module navigation and reading time.
    Nav {
        #[command(subcommand)]
        action: NavCommands,
    },
    /// Write page-generation prompts and build instructions.
    Prompts(PromptsArgs),
}

#[derive(Clone, Debug, Args)]
pub struct PromptsArgs {
    /// Module to generate prompts for (default 1).
    #[arg(long)]
    pub module: Option<u32>,
    /// Output directory (overrides `prompts.out_dir`).
    #[arg(long)]
    pub out: Option<String>,
}
