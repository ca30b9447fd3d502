//! Previous/next links between module pages.

use std::fmt::Write;

use fsa_core::{MODULES, ModuleDescriptor, ModuleId, TOTAL_MODULES};
use serde::Serialize;

/// Link target shown after the last module.
pub const FINISHED_HREF: &str = "../index.html";
pub const FINISHED_LABEL: &str = "Academy Finished!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleLink {
    pub id: u8,
    pub title: &'static str,
    pub href: String,
}

impl From<&ModuleDescriptor> for ModuleLink {
    fn from(module: &ModuleDescriptor) -> Self {
        Self {
            id: module.id,
            title: module.title,
            href: module.file(),
        }
    }
}

/// Forward link: the next module, or the academy index after the last one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NextLink {
    Module(ModuleLink),
    Finished { href: &'static str, label: &'static str },
}

/// View model of the navigation strip for one module.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavLinks {
    pub current: ModuleLink,
    /// "Module N of 10".
    pub position: String,
    /// Width of the position bar, `id / 10 * 100`.
    pub position_percent: f64,
    pub previous: Option<ModuleLink>,
    pub next: NextLink,
}

impl NavLinks {
    #[must_use]
    pub const fn is_last(&self) -> bool {
        matches!(self.next, NextLink::Finished { .. })
    }
}

/// Resolves modules and their neighbours from the fixed module list.
#[derive(Debug, Clone, Copy)]
pub struct ModuleNavigation {
    modules: &'static [ModuleDescriptor],
}

impl Default for ModuleNavigation {
    fn default() -> Self {
        Self { modules: &MODULES }
    }
}

impl ModuleNavigation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Module whose page is the last segment of `path`; module 1 when no
    /// page matches.
    #[must_use]
    pub fn current_module_id(&self, path: &str) -> ModuleId {
        let file = path.rsplit('/').next().unwrap_or(path);
        self.modules
            .iter()
            .find(|module| module.file() == file)
            .map_or_else(
                || {
                    tracing::debug!(path, "page is not a module; defaulting to the first");
                    ModuleId::FIRST
                },
                ModuleDescriptor::module_id,
            )
    }

    #[must_use]
    pub fn module(&self, id: ModuleId) -> Option<&'static ModuleDescriptor> {
        self.modules.iter().find(|module| module.id == id.get())
    }

    #[must_use]
    pub fn previous(&self, id: ModuleId) -> Option<&'static ModuleDescriptor> {
        id.previous().and_then(|prev| self.module(prev))
    }

    #[must_use]
    pub fn next(&self, id: ModuleId) -> Option<&'static ModuleDescriptor> {
        id.next().and_then(|next| self.module(next))
    }

    #[must_use]
    pub fn links(&self, id: ModuleId) -> NavLinks {
        let current = self.module(id).map_or_else(
            || ModuleLink {
                id: id.get(),
                title: "",
                href: String::new(),
            },
            ModuleLink::from,
        );
        let next = self.next(id).map_or(
            NextLink::Finished {
                href: FINISHED_HREF,
                label: FINISHED_LABEL,
            },
            |module| NextLink::Module(module.into()),
        );

        NavLinks {
            current,
            position: format!("Module {} of {TOTAL_MODULES}", id.get()),
            position_percent: f64::from(id.get()) / f64::from(TOTAL_MODULES) * 100.0,
            previous: self.previous(id).map(ModuleLink::from),
            next,
        }
    }

    /// Navigation strip markup for module `id`.
    #[must_use]
    pub fn render_html(&self, id: ModuleId) -> String {
        let links = self.links(id);
        let mut html = String::from(r#"<nav class="module-navigation"><div class="nav-slot nav-slot-prev">"#);

        if let Some(prev) = &links.previous {
            let _ = write!(
                html,
                r#"<a href="{}" class="nav-btn nav-prev"><span>&larr;</span><div><div class="nav-caption">Previous</div><div class="nav-title">{}</div></div></a>"#,
                prev.href, prev.title
            );
        }

        let _ = write!(
            html,
            r#"</div><div class="nav-position"><div class="nav-position-label">{}</div><div class="progress-bar"><div class="progress-fill" style="width: {}%;"></div></div></div><div class="nav-slot nav-slot-next">"#,
            links.position, links.position_percent
        );

        match &links.next {
            NextLink::Module(next) => {
                let _ = write!(
                    html,
                    r#"<a href="{}" class="nav-btn nav-next"><div><div class="nav-caption">Next</div><div class="nav-title">{}</div></div><span>&rarr;</span></a>"#,
                    next.href, next.title
                );
            }
            NextLink::Finished { href, label } => {
                let _ = write!(
                    html,
                    r#"<a href="{href}" class="nav-btn nav-complete"><div><div class="nav-caption">Complete</div><div class="nav-title">{label}</div></div></a>"#
                );
            }
        }

        html.push_str("</div></nav>");
        html
    }
}
