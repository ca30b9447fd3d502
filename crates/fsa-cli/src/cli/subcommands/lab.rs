use clap::Subcommand;

/// Popup labs.
#[derive(Clone, Debug, Subcommand)]
pub enum LabCommands {
    /// List catalog entries.
    List,
    /// Validate the catalog and report skipped entries.
    Validate,
    /// Render a lab's modal content.
    Show {
        /// Lab id.
        id: String,
    },
    /// Run a calculator lab.
    Calc {
        /// Lab id.
        id: String,
        /// Input override as `key=value` (repeatable).
        #[arg(long, value_parser = parse_key_value)]
        input: Vec<(String, String)>,
    },
    /// Pick a choice of a scenario lab.
    Choose {
        /// Lab id.
        id: String,
        /// Zero-based choice index.
        index: usize,
    },
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{raw}'"))?;
    if key.trim().is_empty() {
        return Err(format!("empty input id in '{raw}'"));
    }
    Ok((key.trim().to_string(), value.to_string()))
}
