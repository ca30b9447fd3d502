//! Assembling and writing a prompt set.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use fsa_core::ModuleId;
use serde::Serialize;

use crate::error::PromptError;
use crate::plan::plan;
use crate::templates::{assessment_prompt, calculator_prompt, landing_page_prompt, module_prompt};

pub const BUILD_INSTRUCTIONS_FILE: &str = "BUILD_INSTRUCTIONS.md";

/// One prompt and the page it produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedPrompt {
    /// File stem of the prompt (`<name>.txt`).
    pub name: String,
    /// Site path the generated page is saved to.
    pub target: String,
    pub text: String,
}

impl NamedPrompt {
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.txt", self.name)
    }
}

/// Which module the build focuses on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptSelection {
    pub module: ModuleId,
}

impl Default for PromptSelection {
    fn default() -> Self {
        Self {
            module: ModuleId::FIRST,
        }
    }
}

impl PromptSelection {
    /// # Errors
    ///
    /// Returns [`PromptError::Module`] for an id outside 1..=10.
    pub fn module(id: u32) -> Result<Self, PromptError> {
        Ok(Self {
            module: ModuleId::new(id)?,
        })
    }
}

/// Landing page, assessment, the selected module and each of its
/// calculators, in that order.
#[must_use]
pub fn build_plan(selection: PromptSelection) -> Vec<NamedPrompt> {
    let module = plan(selection.module);
    let mut prompts = vec![
        NamedPrompt {
            name: "landing-page".to_string(),
            target: "index.html".to_string(),
            text: landing_page_prompt(),
        },
        NamedPrompt {
            name: "assessment".to_string(),
            target: "assessment.html".to_string(),
            text: assessment_prompt(),
        },
        NamedPrompt {
            name: format!("module-{}", module.id),
            target: module.page_path(),
            text: module_prompt(module),
        },
    ];
    prompts.extend(module.calculators.iter().map(|calculator| NamedPrompt {
        name: format!("module-{}-{calculator}", module.id),
        target: format!("calculators/{calculator}.html"),
        text: calculator_prompt(calculator, module),
    }));
    prompts
}

/// Write one prompt as `<dir>/<name>.txt`, creating `dir` if needed.
///
/// # Errors
///
/// Returns [`PromptError::Write`] on any filesystem failure.
pub fn write_prompt(dir: &Path, prompt: &NamedPrompt) -> Result<PathBuf, PromptError> {
    create_dir(dir)?;
    let path = dir.join(prompt.file_name());
    write_file(&path, &prompt.text)?;
    tracing::debug!(path = %path.display(), "prompt written");
    Ok(path)
}

/// Write `BUILD_INSTRUCTIONS.md` for `prompts` into `dir`.
///
/// # Errors
///
/// Returns [`PromptError::Write`] on any filesystem failure.
pub fn write_instructions(dir: &Path, prompts: &[NamedPrompt]) -> Result<PathBuf, PromptError> {
    create_dir(dir)?;
    let path = dir.join(BUILD_INSTRUCTIONS_FILE);
    write_file(&path, &build_instructions(dir, prompts))?;
    Ok(path)
}

/// Write every prompt, then the instructions. Returns the written paths in
/// order, instructions last.
///
/// # Errors
///
/// Returns [`PromptError::Write`] on the first filesystem failure.
pub fn write_prompts(dir: &Path, prompts: &[NamedPrompt]) -> Result<Vec<PathBuf>, PromptError> {
    let mut written = prompts
        .iter()
        .map(|prompt| write_prompt(dir, prompt))
        .collect::<Result<Vec<_>, _>>()?;
    written.push(write_instructions(dir, prompts)?);
    tracing::info!(dir = %dir.display(), files = written.len(), "prompt set written");
    Ok(written)
}

/// Markdown checklist telling a reader which prompt produces which page.
#[must_use]
pub fn build_instructions(dir: &Path, prompts: &[NamedPrompt]) -> String {
    let mut doc = String::from("# Site Build Instructions\n\n## Files to generate\n\n");
    for (i, prompt) in prompts.iter().enumerate() {
        let _ = write!(
            doc,
            "{n}. **{target}**\n   - Prompt: {prompt_path}\n   - Save to: /{target}\n\n",
            n = i + 1,
            target = prompt.target,
            prompt_path = dir.join(prompt.file_name()).display(),
        );
    }
    doc.push_str(
        "## Checks\n\n- Mobile responsive\n- Accessible (WCAG AA)\n- Progress persists in localStorage\n- No console errors\n",
    );
    doc
}

fn create_dir(dir: &Path) -> Result<(), PromptError> {
    fs::create_dir_all(dir).map_err(|source| PromptError::Write {
        path: dir.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, contents: &str) -> Result<(), PromptError> {
    fs::write(path, contents).map_err(|source| PromptError::Write {
        path: path.to_path_buf(),
        source,
    })
}
