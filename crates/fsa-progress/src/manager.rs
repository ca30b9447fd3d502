//! The progress manager: cached, event-emitting access to the record.

use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use fsa_core::ModuleId;

use crate::clock::{Clock, SystemClock};
use crate::error::ProgressError;
use crate::events::{ListenerId, Listeners, ProgressEvent, ProgressEventKind};
use crate::keys::StorageKeys;
use crate::record::{CompletionMetadata, ModuleProgress, ProgressRecord};
use crate::store::KeyValueStore;

/// Default freshness window of the in-memory record copy.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5);

#[derive(Debug)]
struct CachedRecord {
    record: ProgressRecord,
    expires_at: DateTime<Utc>,
    /// Set when the store could not be read; such a record is never
    /// written back over what the store holds.
    detached: bool,
}

/// Owns the progress record's store, cache and listeners.
///
/// Construct one per application and hand it to whichever UI layer needs
/// it. Every public method catches and logs its own failures.
#[derive(Debug)]
pub struct ProgressManager<S, C = SystemClock> {
    store: S,
    clock: C,
    keys: StorageKeys,
    cache_ttl: TimeDelta,
    cache: Option<CachedRecord>,
    listeners: Listeners,
}

impl<S: KeyValueStore> ProgressManager<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock> ProgressManager<S, C> {
    #[must_use]
    pub fn with_clock(store: S, clock: C) -> Self {
        Self {
            store,
            clock,
            keys: StorageKeys::default(),
            cache_ttl: to_delta(DEFAULT_CACHE_TTL),
            cache: None,
            listeners: Listeners::default(),
        }
    }

    /// Use `<namespace>-progress` (and its auxiliary keys) instead of `fsa-*`.
    #[must_use]
    pub fn with_namespace(mut self, namespace: &str) -> Self {
        self.keys = StorageKeys::new(namespace);
        self.cache = None;
        self
    }

    #[must_use]
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = to_delta(ttl);
        self
    }

    #[must_use]
    pub const fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    pub const fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Load the stored record, replacing it with a fresh zero-state record
    /// when it is absent, corrupt or of another version.
    ///
    /// If the fresh record cannot be persisted it is still returned and
    /// cached. If the store cannot be read at all, a fresh record is served
    /// from memory only and the stored one is left alone.
    pub fn init(&mut self) -> ProgressRecord {
        match self.load_record() {
            Ok(Some(record)) if record.is_current_version() => {
                tracing::debug!(key = %self.keys.progress, "loaded existing progress record");
                self.cache_record(record.clone());
                return record;
            }
            Ok(Some(record)) => tracing::info!(
                found = %record.version,
                "progress record version mismatch; starting fresh"
            ),
            Ok(None) => {}
            Err(error) => {
                handle_error("init", &error);
                return self.detached_fallback();
            }
        }

        tracing::info!(key = %self.keys.progress, "creating fresh progress record");
        let fresh = ProgressRecord::fresh(self.clock.now());
        if let Err(error) = self.persist(&fresh) {
            handle_error("init", &error);
        }
        self.cache_record(fresh.clone());
        fresh
    }

    /// Mark a module complete, merging optional metadata.
    ///
    /// Returns `false` (after logging) on any failure, including an id
    /// outside 1..=10.
    pub fn set_module_complete(&mut self, module_id: u32, metadata: CompletionMetadata) -> bool {
        match self.try_set_module_complete(module_id, metadata) {
            Ok(id) => {
                self.listeners.emit(&ProgressEvent::ModuleComplete {
                    module_id: id,
                    metadata,
                });
                tracing::info!(module = %id, "module marked complete");
                true
            }
            Err(error) => {
                handle_error("set_module_complete", &error);
                false
            }
        }
    }

    /// Record a visit: creates the entry with one attempt, or bumps
    /// `attempts` on an existing one. Completion totals are untouched.
    pub fn set_module_visited(&mut self, module_id: u32) -> bool {
        match self.try_set_module_visited(module_id) {
            Ok(id) => {
                self.listeners
                    .emit(&ProgressEvent::ModuleVisited { module_id: id });
                true
            }
            Err(error) => {
                handle_error("set_module_visited", &error);
                false
            }
        }
    }

    pub fn is_module_complete(&mut self, module_id: u32) -> bool {
        self.module_data(module_id)
            .is_some_and(|module| module.completed)
    }

    pub fn progress_percentage(&mut self) -> u8 {
        self.data().progress_percentage
    }

    pub fn completed_modules(&mut self) -> u8 {
        self.data().completed_modules
    }

    /// Stored state of one module, `None` when it was never touched or the
    /// id is out of range.
    pub fn module_data(&mut self, module_id: u32) -> Option<ModuleProgress> {
        let id = ModuleId::new(module_id).ok()?;
        self.data().module(id).cloned()
    }

    pub fn set_persona(&mut self, persona_id: &str) -> bool {
        match self.try_set_persona(persona_id) {
            Ok(()) => {
                self.listeners.emit(&ProgressEvent::PersonaChanged {
                    persona_id: persona_id.to_string(),
                });
                tracing::info!(persona = persona_id, "persona set");
                true
            }
            Err(error) => {
                handle_error("set_persona", &error);
                false
            }
        }
    }

    pub fn persona(&mut self) -> Option<String> {
        self.data().persona
    }

    /// The full current record.
    pub fn record(&mut self) -> ProgressRecord {
        self.data()
    }

    /// Pretty-printed JSON of the full record.
    pub fn export_progress(&mut self) -> Option<String> {
        match serde_json::to_string_pretty(&self.data()) {
            Ok(json) => Some(json),
            Err(error) => {
                handle_error("export_progress", &ProgressError::from(error));
                None
            }
        }
    }

    /// Flag the placement assessment as done (auxiliary key).
    pub fn mark_assessment_completed(&mut self) -> bool {
        let key = self.keys.assessment_completed.clone();
        self.write_auxiliary("mark_assessment_completed", &key, "true")
    }

    /// Persona chosen by the assessment (auxiliary key). The record's own
    /// persona is set separately through [`Self::set_persona`].
    pub fn set_assessment_persona(&mut self, persona_id: &str) -> bool {
        let key = self.keys.persona.clone();
        self.write_auxiliary("set_assessment_persona", &key, persona_id)
    }

    /// Delete the record and both auxiliary keys, then drop the cache.
    pub fn clear_all_progress(&mut self) -> bool {
        let result = self.remove_all();
        self.cache = None;
        match result {
            Ok(()) => {
                self.listeners.emit(&ProgressEvent::ProgressCleared);
                tracing::info!("all progress cleared");
                true
            }
            Err(error) => {
                handle_error("clear_all_progress", &error);
                false
            }
        }
    }

    /// Register a listener. Listeners run synchronously in registration
    /// order; an `Err` is logged and never reaches the caller.
    pub fn on<F>(&mut self, kind: ProgressEventKind, callback: F) -> ListenerId
    where
        F: FnMut(&ProgressEvent) -> anyhow::Result<()> + 'static,
    {
        self.listeners.add(kind, Box::new(callback))
    }

    /// Unregister a listener. Returns whether one was removed.
    pub fn off(&mut self, kind: ProgressEventKind, id: ListenerId) -> bool {
        self.listeners.remove(kind, id)
    }

    // ---------------------------------------------------------------------

    fn try_set_persona(&mut self, persona_id: &str) -> Result<(), ProgressError> {
        let mut record = self.writable()?;
        record.persona = Some(persona_id.to_string());
        self.save(record)
    }

    fn try_set_module_complete(
        &mut self,
        module_id: u32,
        metadata: CompletionMetadata,
    ) -> Result<ModuleId, ProgressError> {
        let id = ModuleId::new(module_id)?;
        let now = self.clock.now();
        let mut record = self.writable()?;

        let module = record
            .modules
            .entry(id.storage_key())
            .or_insert_with(|| ModuleProgress::new(id, now));
        module.completed = true;
        module.completed_at = Some(now);
        if let Some(score) = metadata.score {
            module.score = Some(score);
        }
        if let Some(time_spent) = metadata.time_spent {
            module.time_spent = module.time_spent.saturating_add(time_spent);
        }

        record.last_activity = now;
        record.recompute_totals();
        self.save(record)?;
        Ok(id)
    }

    fn try_set_module_visited(&mut self, module_id: u32) -> Result<ModuleId, ProgressError> {
        let id = ModuleId::new(module_id)?;
        let now = self.clock.now();
        let mut record = self.writable()?;

        record
            .modules
            .entry(id.storage_key())
            .and_modify(|module| {
                module.visited = true;
                module.attempts = module.attempts.saturating_add(1);
            })
            .or_insert_with(|| ModuleProgress {
                visited: true,
                attempts: 1,
                ..ModuleProgress::new(id, now)
            });

        record.last_activity = now;
        self.save(record)?;
        Ok(id)
    }

    /// Current record: the cached copy while fresh, otherwise re-read from
    /// the store (falling back to [`Self::init`]).
    fn data(&mut self) -> ProgressRecord {
        if let Some(cached) = &self.cache
            && self.clock.now() < cached.expires_at
        {
            return cached.record.clone();
        }

        match self.load_record() {
            Ok(Some(record)) if record.is_current_version() => {
                self.cache_record(record.clone());
                record
            }
            Ok(_) => self.init(),
            Err(error) => {
                handle_error("data", &error);
                self.detached_fallback()
            }
        }
    }

    /// Base record for a write. Fails while the store is unreadable so the
    /// stored record is never replaced by a stand-in.
    fn writable(&mut self) -> Result<ProgressRecord, ProgressError> {
        if let Some(cached) = &self.cache
            && !cached.detached
            && self.clock.now() < cached.expires_at
        {
            return Ok(cached.record.clone());
        }

        match self.load_record()? {
            Some(record) if record.is_current_version() => Ok(record),
            _ => Ok(ProgressRecord::fresh(self.clock.now())),
        }
    }

    /// Read and parse the stored record. Corrupt data counts as absent; only
    /// a failed store read is an error.
    fn load_record(&self) -> Result<Option<ProgressRecord>, ProgressError> {
        let Some(raw) = self.store.get(&self.keys.progress)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(record) => Ok(Some(record)),
            Err(error) => {
                handle_error("load_record", &ProgressError::from(error));
                Ok(None)
            }
        }
    }

    /// Record served while the store is unreadable: the last cached copy if
    /// there is one, otherwise a fresh record kept in memory only.
    fn detached_fallback(&mut self) -> ProgressRecord {
        if let Some(cached) = &self.cache {
            return cached.record.clone();
        }
        tracing::warn!(key = %self.keys.progress, "progress store unreadable; using an in-memory record");
        let fresh = ProgressRecord::fresh(self.clock.now());
        self.cache = Some(CachedRecord {
            record: fresh.clone(),
            expires_at: self.clock.now() + self.cache_ttl,
            detached: true,
        });
        fresh
    }

    fn persist(&mut self, record: &ProgressRecord) -> Result<(), ProgressError> {
        let json = serde_json::to_string(record)?;
        self.store.set(&self.keys.progress, &json)?;
        Ok(())
    }

    /// Persist, then refresh the cache. A failed write leaves the cache as
    /// it was.
    fn save(&mut self, record: ProgressRecord) -> Result<(), ProgressError> {
        self.persist(&record)?;
        self.cache_record(record);
        Ok(())
    }

    fn cache_record(&mut self, record: ProgressRecord) {
        self.cache = Some(CachedRecord {
            record,
            expires_at: self.clock.now() + self.cache_ttl,
            detached: false,
        });
    }

    fn remove_all(&mut self) -> Result<(), ProgressError> {
        let mut first_error = None;
        let mut keys = vec![self.keys.progress.clone()];
        keys.extend(self.keys.auxiliary().map(str::to_string));
        for key in &keys {
            if let Err(error) = self.store.remove(key) {
                first_error.get_or_insert(error);
            }
        }
        first_error.map_or(Ok(()), |error| Err(error.into()))
    }

    fn write_auxiliary(&mut self, method: &str, key: &str, value: &str) -> bool {
        match self.store.set(key, value) {
            Ok(()) => true,
            Err(error) => {
                handle_error(method, &ProgressError::from(error));
                false
            }
        }
    }
}

fn to_delta(ttl: Duration) -> TimeDelta {
    TimeDelta::from_std(ttl).unwrap_or_else(|_| TimeDelta::seconds(5))
}

fn handle_error(method: &str, error: &ProgressError) {
    tracing::warn!(method, %error, "progress operation failed");
}
