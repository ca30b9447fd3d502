//! # fsa-core
//!
//! Core types shared across the Financially Sovereign Academy crates.
//!
//! This crate provides:
//! - The static, ordered list of the 10 academy modules
//! - `ModuleId`, the validated module identifier and its storage key
//! - Cross-cutting error types

pub mod errors;
pub mod ids;
pub mod modules;

pub use errors::CoreError;
pub use ids::ModuleId;
pub use modules::{MODULES, ModuleDescriptor, TOTAL_MODULES};
