//! # fsa-progress
//!
//! Browser-style progress tracking for the 10 academy modules.
//!
//! The whole state lives in one versioned [`ProgressRecord`] stored as JSON
//! under a single namespaced key of a [`KeyValueStore`]. [`ProgressManager`]
//! wraps that store with:
//! - a short-lived read cache (5 seconds by default)
//! - derived totals recomputed on every completion write
//! - synchronous, failure-isolated event listeners
//!
//! No public manager operation returns an error: failures are logged through
//! `tracing` and degrade to `false`, `None`, or a fresh record.
//!
//! The cache is a single-process optimisation. Writes made by another process
//! to the same store are not observed until the freshness window expires.

pub mod clock;
pub mod events;
pub mod file_store;
pub mod keys;
pub mod manager;
pub mod record;
pub mod store;

mod error;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{ProgressError, StorageError};
pub use events::{ListenerId, ProgressEvent, ProgressEventKind};
pub use file_store::FileStore;
pub use keys::StorageKeys;
pub use manager::ProgressManager;
pub use record::{CompletionMetadata, ModuleProgress, ProgressRecord, RECORD_VERSION};
pub use store::{KeyValueStore, MemoryStore};
