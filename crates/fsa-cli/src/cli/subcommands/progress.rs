use clap::Subcommand;

/// Learner progress.
#[derive(Clone, Debug, Subcommand)]
pub enum ProgressCommands {
    /// Show the progress record.
    Show,
    /// Mark a module visited.
    Visit {
        /// Module id (1-10).
        id: u32,
    },
    /// Mark a module complete.
    Complete {
        /// Module id (1-10).
        id: u32,
        /// Assessment score.
        #[arg(long)]
        score: Option<f64>,
        /// Seconds spent, added to any earlier total.
        #[arg(long)]
        time_spent: Option<u64>,
    },
    /// Show or set the persona.
    Persona {
        /// Persona id to set; omitted prints the current one.
        id: Option<String>,
    },
    /// Print the record as pretty JSON.
    Export,
    /// Delete all progress keys.
    Clear,
}
