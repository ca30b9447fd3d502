use clap::Subcommand;

/// SVG icon library.
#[derive(Clone, Debug, Subcommand)]
pub enum IconCommands {
    /// Render one icon as SVG markup.
    Get {
        /// Icon name (e.g. `wallet`, `trending-up`).
        name: String,
        /// Edge length in pixels.
        #[arg(long, default_value_t = fsa_icons::DEFAULT_SIZE)]
        size: u32,
        /// Drop animation classes.
        #[arg(long = "static")]
        no_animate: bool,
    },
    /// List icon names.
    List,
    /// Replace emoji glyphs in text with inline icons.
    Replace {
        /// Text to rewrite.
        text: String,
    },
}
