//! Storage traits for persistence

use crate::Result;
use async_trait::async_trait;
use usersvc_types::{NewUser, User, UserUpdate};

/// User store.
///
/// Every backend must honor the same semantics:
/// - `add_user` assigns the identifier; callers never supply one.
/// - `update_user` overwrites only the non-empty fields of the change set.
/// - `find_users_by_criteria` is an exact, case-sensitive match returned in
///   insertion order; an empty result is not an error.
///
/// Returned records are owned copies. Mutating them does not touch the store.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn add_user(&self, user: NewUser) -> Result<User>;
    async fn find_user_by_id(&self, id: &str) -> Result<User>;
    async fn update_user(&self, update: UserUpdate) -> Result<User>;
    async fn delete_user(&self, id: &str) -> Result<()>;
    async fn find_users_by_criteria(&self, criteria: &str, value: &str) -> Result<Vec<User>>;

    /// Number of live records
    async fn count(&self) -> usize;
}
