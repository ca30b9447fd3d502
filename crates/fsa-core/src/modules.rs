//! The fixed, ordered list of academy modules.
//!
//! Used for navigation link resolution, reading-time display and progress
//! accounting. Never mutated at runtime.

use serde::Serialize;

use crate::ids::ModuleId;

/// Number of modules in the academy. Progress percentages use this as a
/// fixed denominator.
pub const TOTAL_MODULES: u8 = 10;

/// Static description of one module page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModuleDescriptor {
    pub id: u8,
    pub slug: &'static str,
    pub title: &'static str,
}

impl ModuleDescriptor {
    /// Page file name of this module (`<slug>.html`).
    #[must_use]
    pub fn file(&self) -> String {
        format!("{}.html", self.slug)
    }

    #[must_use]
    pub fn module_id(&self) -> ModuleId {
        ModuleId::new(u32::from(self.id)).unwrap_or(ModuleId::FIRST)
    }
}

pub const MODULES: [ModuleDescriptor; TOTAL_MODULES as usize] = [
    ModuleDescriptor {
        id: 1,
        slug: "money-mindset-cash-flow",
        title: "Money Mindset & Cash Flow",
    },
    ModuleDescriptor {
        id: 2,
        slug: "emergency-funds-saving",
        title: "Emergency Funds & Saving",
    },
    ModuleDescriptor {
        id: 3,
        slug: "banking-basics",
        title: "Banking Without Getting Robbed",
    },
    ModuleDescriptor {
        id: 4,
        slug: "credit-scores",
        title: "Credit Scores Decoded",
    },
    ModuleDescriptor {
        id: 5,
        slug: "debt-strategy",
        title: "Debt Strategy",
    },
    ModuleDescriptor {
        id: 6,
        slug: "taxes-paychecks",
        title: "Taxes & Paychecks Demystified",
    },
    ModuleDescriptor {
        id: 7,
        slug: "investing-fundamentals",
        title: "Investing for Humans",
    },
    ModuleDescriptor {
        id: 8,
        slug: "risk-insurance",
        title: "Protect What You've Built",
    },
    ModuleDescriptor {
        id: 9,
        slug: "consumer-protection",
        title: "Don't Get Scammed",
    },
    ModuleDescriptor {
        id: 10,
        slug: "financial-master-plan",
        title: "Your Financial Master Plan",
    },
];

/// Look up a descriptor by id.
#[must_use]
pub fn descriptor(id: ModuleId) -> &'static ModuleDescriptor {
    &MODULES[usize::from(id.get() - 1)]
}

/// Find the module whose page file or slug matches `name`.
#[must_use]
pub fn find_by_file(name: &str) -> Option<&'static ModuleDescriptor> {
    MODULES
        .iter()
        .find(|module| module.file() == name || module.slug == name)
}
