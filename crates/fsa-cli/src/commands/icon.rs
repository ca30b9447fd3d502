use anyhow::bail;
use fsa_icons::IconLibrary;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::IconCommands;
use crate::output::output;

/// Handle `fsa icon`.
pub fn handle(action: &IconCommands, flags: &GlobalFlags) -> anyhow::Result<()> {
    let library = IconLibrary::new();
    match action {
        IconCommands::Get {
            name,
            size,
            no_animate,
        } => {
            let Some(svg) = library.try_get(name, *size, !no_animate) else {
                bail!("icon '{name}' not found in library");
            };
            output(
                &json!({ "name": name, "size": size, "animate": !no_animate, "svg": svg }),
                flags.format,
            )
        }
        IconCommands::List => {
            let mut names = library.names().collect::<Vec<_>>();
            names.sort_unstable();
            output(&names, flags.format)
        }
        IconCommands::Replace { text } => output(
            &json!({ "text": library.replace_glyphs(text) }),
            flags.format,
        ),
    }
}
