//! Storage notification events

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of mutation a notification reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    #[serde(rename = "user created")]
    UserCreated,
    #[serde(rename = "user deleted")]
    UserDeleted,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::UserCreated => "user created",
            EventKind::UserDeleted => "user deleted",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Notification emitted after a mutation is applied.
///
/// `payload` is opaque to the storage layer; the in-memory engine fills it
/// with the JSON encoding of the affected record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEvent {
    pub kind: EventKind,
    pub payload: String,
    pub emitted_at: DateTime<Utc>,
}

impl UserEvent {
    pub fn new(kind: EventKind, payload: impl Into<String>) -> Self {
        Self {
            kind,
            payload: payload.into(),
            emitted_at: Utc::now(),
        }
    }

    /// Event type as sent to external subscribers
    pub fn event_type(&self) -> &'static str {
        self.kind.as_str()
    }
}
