//! # fsa-prompts
//!
//! Builds the text prompts handed to a content model to generate the site's
//! pages: the landing page, the placement assessment, one module page and
//! that module's calculators. Prompts are plain templates over the static
//! [`ModulePlan`] list and are written to a directory as `.txt` files along
//! with a `BUILD_INSTRUCTIONS.md` checklist.

pub mod build;
pub mod plan;
pub mod templates;

mod error;

pub use build::{
    BUILD_INSTRUCTIONS_FILE, NamedPrompt, PromptSelection, build_instructions, build_plan,
    write_instructions, write_prompt, write_prompts,
};
pub use error::PromptError;
pub use plan::{MentionStyle, ModulePlan, PLANS, Priority, plan};
pub use templates::{assessment_prompt, calculator_prompt, landing_page_prompt, module_prompt};
