use std::path::{Path, PathBuf};

use fsa_prompts::{NamedPrompt, PromptSelection, build_plan, write_instructions, write_prompt};
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::PromptsArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `fsa prompts`.
pub fn handle(args: &PromptsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let selection = match args.module {
        Some(id) => PromptSelection::module(id)?,
        None => PromptSelection::default(),
    };
    let out_dir = args
        .out
        .as_ref()
        .map_or_else(|| ctx.config.prompts.out_dir.clone(), PathBuf::from);

    let prompts = build_plan(selection);
    let written = write_all(&out_dir, &prompts)?;

    output(
        &json!({
            "module": selection.module,
            "outDir": out_dir.display().to_string(),
            "files": written.iter().map(|path| path.display().to_string()).collect::<Vec<_>>(),
        }),
        flags.format,
    )
}

fn write_all(dir: &Path, prompts: &[NamedPrompt]) -> anyhow::Result<Vec<PathBuf>> {
    let progress = Progress::bar(prompts.len() as u64 + 1, "writing prompts");
    let mut written = Vec::with_capacity(prompts.len() + 1);

    for prompt in prompts {
        progress.set_message(&prompt.name);
        match write_prompt(dir, prompt) {
            Ok(path) => written.push(path),
            Err(error) => {
                progress.finish_err("prompt generation failed");
                return Err(error.into());
            }
        }
        progress.inc(1);
    }

    progress.set_message("build instructions");
    match write_instructions(dir, prompts) {
        Ok(path) => written.push(path),
        Err(error) => {
            progress.finish_err("prompt generation failed");
            return Err(error.into());
        }
    }
    progress.inc(1);
    progress.finish_ok(&format!("{} files written", written.len()));

    Ok(written)
}
