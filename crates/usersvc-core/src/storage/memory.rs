//! In-memory user store (reference backend, no persistence)

use crate::error::{Result, StoreError};
use crate::events::LogEventSink;
use crate::ports::{EventSink, UserStore};
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use usersvc_types::{EventKind, NewUser, SearchCriteria, User, UserEvent, UserUpdate};

/// Memory-resident user store.
///
/// Records are kept in insertion order and identifiers come from a counter
/// that starts at 1 and never goes back, so deleted ids are never reused.
pub struct MemoryStore {
    inner: Mutex<Inner>,
    events: Arc<dyn EventSink>,
}

/// Event payload: the record without its password
#[derive(Serialize)]
struct EventPayload<'a> {
    #[serde(rename = "ID")]
    id: &'a str,
    first_name: &'a str,
    last_name: &'a str,
    nickname: &'a str,
    email: &'a str,
    country: &'a str,
}

impl<'a> From<&'a User> for EventPayload<'a> {
    fn from(user: &'a User) -> Self {
        Self {
            id: &user.id,
            first_name: &user.first_name,
            last_name: &user.last_name,
            nickname: &user.nickname,
            email: &user.email,
            country: &user.country,
        }
    }
}

struct Inner {
    users: Vec<User>,
    next_id: u64,
}

impl Inner {
    fn position(&self, id: &str) -> Option<usize> {
        self.users.iter().position(|u| u.id == id)
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_sink(Arc::new(LogEventSink))
    }

    pub fn with_sink(events: Arc<dyn EventSink>) -> Self {
        Self {
            inner: Mutex::new(Inner {
                users: Vec::new(),
                next_id: 1,
            }),
            events,
        }
    }

    fn emit(&self, kind: EventKind, user: &User) {
        let payload = serde_json::to_string(&EventPayload::from(user)).unwrap_or_else(|e| {
            warn!("Failed to encode {} payload for user {}: {}", kind, user.id, e);
            String::new()
        });
        self.events.emit(&UserEvent::new(kind, payload));
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Overwrite every field of `user` that is non-empty in `changes`.
///
/// An empty string cannot clear a field: it reads as "not sent".
fn apply_changes(user: &mut User, changes: NewUser) {
    if !changes.first_name.is_empty() {
        user.first_name = changes.first_name;
    }
    if !changes.last_name.is_empty() {
        user.last_name = changes.last_name;
    }
    if !changes.nickname.is_empty() {
        user.nickname = changes.nickname;
    }
    if !changes.password.is_empty() {
        user.password = changes.password;
    }
    if !changes.email.is_empty() {
        user.email = changes.email;
    }
    if !changes.country.is_empty() {
        user.country = changes.country;
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn add_user(&self, user: NewUser) -> Result<User> {
        let mut inner = self.inner.lock().await;

        let id = inner.next_id.to_string();
        inner.next_id += 1;

        let user = User::with_id(id, user);
        inner.users.push(user.clone());

        info!("[MemoryStore] added new user {}", user.id);
        self.emit(EventKind::UserCreated, &user);

        Ok(user)
    }

    async fn find_user_by_id(&self, id: &str) -> Result<User> {
        let inner = self.inner.lock().await;

        let user = inner
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        debug!("[MemoryStore] found user {}", user.id);
        Ok(user)
    }

    async fn update_user(&self, update: UserUpdate) -> Result<User> {
        let mut inner = self.inner.lock().await;

        let idx = inner
            .position(&update.id)
            .ok_or_else(|| StoreError::NotFound(update.id.clone()))?;

        let user = &mut inner.users[idx];
        apply_changes(user, update.changes);

        info!("[MemoryStore] updated user {}", user.id);
        Ok(user.clone())
    }

    async fn delete_user(&self, id: &str) -> Result<()> {
        let mut inner = self.inner.lock().await;

        let idx = inner
            .position(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let removed = inner.users.remove(idx);

        info!("[MemoryStore] deleted user {}", removed.id);
        self.emit(EventKind::UserDeleted, &removed);

        Ok(())
    }

    async fn find_users_by_criteria(&self, criteria: &str, value: &str) -> Result<Vec<User>> {
        let criteria: SearchCriteria = criteria.parse()?;
        let inner = self.inner.lock().await;

        let results: Vec<User> = inner
            .users
            .iter()
            .filter(|u| criteria.matches(u, value))
            .cloned()
            .collect();

        debug!(
            "[MemoryStore] search {}={} matched {} users",
            criteria,
            value,
            results.len()
        );
        Ok(results)
    }

    async fn count(&self) -> usize {
        self.inner.lock().await.users.len()
    }
}
