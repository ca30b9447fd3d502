use anyhow::{Context, bail};
use fsa_core::ModuleId;
use fsa_progress::{
    CompletionMetadata, FileStore, KeyValueStore, ProgressEventKind, ProgressManager,
};
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProgressCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `fsa progress`.
pub fn handle(
    action: &ProgressCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut manager = ctx.progress();
    log_events(&mut manager);
    run(action, &mut manager, flags)
}

fn run<S: KeyValueStore>(
    action: &ProgressCommands,
    manager: &mut ProgressManager<S>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProgressCommands::Show => output(&manager.record(), flags.format),
        ProgressCommands::Visit { id } => {
            ModuleId::new(*id)?;
            if !manager.set_module_visited(*id) {
                bail!("failed to record visit to module {id}");
            }
            output(&manager.module_data(*id), flags.format)
        }
        ProgressCommands::Complete {
            id,
            score,
            time_spent,
        } => {
            ModuleId::new(*id)?;
            let mut metadata = CompletionMetadata::default();
            if let Some(score) = score {
                metadata = metadata.with_score(*score);
            }
            if let Some(time_spent) = time_spent {
                metadata = metadata.with_time_spent(*time_spent);
            }
            if !manager.set_module_complete(*id, metadata) {
                bail!("failed to record completion of module {id}");
            }
            output(
                &json!({
                    "module": manager.module_data(*id),
                    "completedModules": manager.completed_modules(),
                    "progressPercentage": manager.progress_percentage(),
                }),
                flags.format,
            )
        }
        ProgressCommands::Persona { id: Some(persona) } => {
            if !manager.set_persona(persona) {
                bail!("failed to save persona '{persona}'");
            }
            output(&json!({ "persona": persona }), flags.format)
        }
        ProgressCommands::Persona { id: None } => {
            output(&json!({ "persona": manager.persona() }), flags.format)
        }
        ProgressCommands::Export => {
            let exported = manager
                .export_progress()
                .context("failed to export progress")?;
            println!("{exported}");
            Ok(())
        }
        ProgressCommands::Clear => {
            if !manager.clear_all_progress() {
                bail!("failed to clear progress");
            }
            output(&json!({ "cleared": true }), flags.format)
        }
    }
}

/// Mirror manager events into the log.
fn log_events(manager: &mut ProgressManager<FileStore>) {
    for kind in [
        ProgressEventKind::ModuleComplete,
        ProgressEventKind::ModuleVisited,
        ProgressEventKind::PersonaChanged,
        ProgressEventKind::ProgressCleared,
    ] {
        manager.on(kind, |event| {
            tracing::info!(event = ?event, "progress changed");
            Ok(())
        });
    }
}
