//! # fsa-labs
//!
//! Interactive "mini-lab" popups driven by a JSON catalog.
//!
//! A lab is one of four kinds: a calculator, a scenario with choices, a
//! checklist, or an info page. The catalog is loaded once from a
//! [`CatalogSource`] and validated entry by entry. Calculators do not embed
//! code; they name a computation in a [`CalculationRegistry`].
//!
//! [`PopupLabs`] owns the catalog and a headless [`Modal`] and exposes the
//! interactions a page would wire up: open, close, keyboard, input edits,
//! calculate and choice selection.

pub mod builtin;
pub mod calculation;
pub mod catalog;
pub mod engine;
pub mod modal;
pub mod render;
pub mod schema;
pub mod source;

mod error;

pub use calculation::{Calculation, CalculationRegistry, InputValues, LabResult, Metric};
pub use catalog::{
    CalculatorLab, Catalog, CatalogDiagnostic, ChecklistLab, Choice, InfoLab, InfoSection, Input,
    InputKind, InputValue, LabEntry, LabKind, ScenarioLab, SelectOption,
};
pub use engine::PopupLabs;
pub use error::{CalculationError, LabError};
pub use modal::{Key, Modal, ModalState, Region};
pub use render::render_modal_shell;
pub use schema::CatalogSchema;
pub use source::{
    AnyCatalogSource, CatalogSource, DEFAULT_FETCH_TIMEOUT, FileCatalogSource, HttpCatalogSource,
    InlineCatalogSource,
};
