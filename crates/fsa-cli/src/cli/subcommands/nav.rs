use clap::Subcommand;

/// Module navigation and reading time.
#[derive(Clone, Debug, Subcommand)]
pub enum NavCommands {
    /// Previous/next links for a module.
    Links {
        /// Module id or page path (e.g. `modules/budgeting-basics.html`).
        target: String,
        /// Print the footer markup instead of the link model.
        #[arg(long)]
        html: bool,
    },
    /// Estimate reading time for a text or HTML file.
    ReadingTime {
        /// File to measure.
        file: String,
        /// Scroll position used for the remaining-time label.
        #[arg(long)]
        scroll_percent: Option<f64>,
    },
}
