use std::path::Path;

use anyhow::Context;
use fsa_core::ModuleId;
use fsa_nav::{ModuleNavigation, ReadingProgress, visible_text};
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::NavCommands;
use crate::output::output;

/// Handle `fsa nav`.
pub fn handle(action: &NavCommands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        NavCommands::Links { target, html } => {
            let navigation = ModuleNavigation::new();
            let id = resolve_module(&navigation, target)?;
            if *html {
                output(&json!({ "html": navigation.render_html(id) }), flags.format)
            } else {
                output(&navigation.links(id), flags.format)
            }
        }
        NavCommands::ReadingTime {
            file,
            scroll_percent,
        } => {
            let path = Path::new(file);
            let reading = measure(path)?;
            let update = reading.at_percent(scroll_percent.unwrap_or(0.0));
            output(
                &json!({
                    "title": reading.title,
                    "words": reading.words,
                    "totalMinutes": reading.total_minutes,
                    "percent": update.percent,
                    "remainingMinutes": update.remaining_minutes,
                    "label": update.label,
                }),
                flags.format,
            )
        }
    }
}

/// A numeric target is a module id; anything else is a page path.
fn resolve_module(navigation: &ModuleNavigation, target: &str) -> anyhow::Result<ModuleId> {
    if target.chars().all(|ch| ch.is_ascii_digit()) {
        return target
            .parse::<ModuleId>()
            .with_context(|| format!("invalid module id '{target}'"));
    }
    Ok(navigation.current_module_id(target))
}

fn measure(path: &Path) -> anyhow::Result<ReadingProgress> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let is_html = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"));
    let text = if is_html {
        visible_text(&content)
    } else {
        content
    };
    let title = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default();
    Ok(ReadingProgress::new(title, &text))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn numeric_targets_are_module_ids() {
        let navigation = ModuleNavigation::new();
        let id = resolve_module(&navigation, "4").expect("valid id");
        assert_eq!(id.get(), 4);
        assert!(resolve_module(&navigation, "11").is_err());
    }

    #[test]
    fn unknown_pages_fall_back_to_first_module() {
        let navigation = ModuleNavigation::new();
        let id = resolve_module(&navigation, "modules/not-a-module.html").expect("page path");
        assert_eq!(id, ModuleId::FIRST);
    }

    #[test]
    fn html_files_are_measured_by_visible_text() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("lesson.html");
        let body = vec!["word"; 250].join(" ");
        std::fs::write(
            &path,
            format!("<html><script>{}</script><p>{body}</p></html>", "x ".repeat(500)),
        )
        .expect("write page");

        let reading = measure(&path).expect("measure");
        assert_eq!(reading.title, "lesson");
        assert_eq!(reading.words, 250);
        assert_eq!(reading.total_minutes, 2);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(measure(&dir.path().join("absent.txt")).is_err());
    }
}
