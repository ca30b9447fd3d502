//! Progress change notifications.

use std::fmt;
use std::str::FromStr;

use fsa_core::{CoreError, ModuleId};
use serde::Serialize;

use crate::record::CompletionMetadata;

/// Event names listeners subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ProgressEventKind {
    ModuleComplete,
    ModuleVisited,
    PersonaChanged,
    ProgressCleared,
}

impl ProgressEventKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ModuleComplete => "moduleComplete",
            Self::ModuleVisited => "moduleVisited",
            Self::PersonaChanged => "personaChanged",
            Self::ProgressCleared => "progressCleared",
        }
    }
}

impl fmt::Display for ProgressEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProgressEventKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "moduleComplete" => Ok(Self::ModuleComplete),
            "moduleVisited" => Ok(Self::ModuleVisited),
            "personaChanged" => Ok(Self::PersonaChanged),
            "progressCleared" => Ok(Self::ProgressCleared),
            other => Err(CoreError::Validation(format!("unknown progress event '{other}'"))),
        }
    }
}

/// Payload delivered to listeners.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum ProgressEvent {
    #[serde(rename_all = "camelCase")]
    ModuleComplete {
        module_id: ModuleId,
        metadata: CompletionMetadata,
    },
    #[serde(rename_all = "camelCase")]
    ModuleVisited { module_id: ModuleId },
    #[serde(rename_all = "camelCase")]
    PersonaChanged { persona_id: String },
    ProgressCleared,
}

impl ProgressEvent {
    #[must_use]
    pub const fn kind(&self) -> ProgressEventKind {
        match self {
            Self::ModuleComplete { .. } => ProgressEventKind::ModuleComplete,
            Self::ModuleVisited { .. } => ProgressEventKind::ModuleVisited,
            Self::PersonaChanged { .. } => ProgressEventKind::PersonaChanged,
            Self::ProgressCleared => ProgressEventKind::ProgressCleared,
        }
    }
}

/// Handle returned by [`ProgressManager::on`](crate::ProgressManager::on),
/// used to unregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

pub(crate) type Callback = Box<dyn FnMut(&ProgressEvent) -> anyhow::Result<()>>;

struct Listener {
    id: ListenerId,
    kind: ProgressEventKind,
    callback: Callback,
}

/// Registration-ordered listener list.
#[derive(Default)]
pub(crate) struct Listeners {
    entries: Vec<Listener>,
    next_id: u64,
}

impl Listeners {
    pub(crate) fn add(&mut self, kind: ProgressEventKind, callback: Callback) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.entries.push(Listener { id, kind, callback });
        id
    }

    pub(crate) fn remove(&mut self, kind: ProgressEventKind, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries
            .retain(|listener| !(listener.kind == kind && listener.id == id));
        self.entries.len() != before
    }

    /// Invoke every listener of the event's kind in registration order. A
    /// failing listener is logged and does not stop the others.
    pub(crate) fn emit(&mut self, event: &ProgressEvent) {
        let kind = event.kind();
        for listener in self.entries.iter_mut().filter(|l| l.kind == kind) {
            if let Err(error) = (listener.callback)(event) {
                tracing::error!(event = %kind, error = %error, "progress listener failed");
            }
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}
