//! User types

use serde::{Deserialize, Serialize};

/// Registered user record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "ID")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub nickname: String,
    pub password: String,
    pub email: String,
    pub country: String,
}

impl User {
    /// Build a stored record from caller-supplied fields and an assigned id
    pub fn with_id(id: impl Into<String>, new_user: NewUser) -> Self {
        Self {
            id: id.into(),
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            nickname: new_user.nickname,
            password: new_user.password,
            email: new_user.email,
            country: new_user.country,
        }
    }
}

/// User fields without an identifier.
///
/// Used as the create payload, and as the change set of an update where an
/// empty string means "leave unchanged". Missing form/JSON keys decode to
/// empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub nickname: String,
    pub password: String,
    pub email: String,
    pub country: String,
}

impl NewUser {
    /// True when no field carries a change
    pub fn is_empty(&self) -> bool {
        self.first_name.is_empty()
            && self.last_name.is_empty()
            && self.nickname.is_empty()
            && self.password.is_empty()
            && self.email.is_empty()
            && self.country.is_empty()
    }
}

/// Partial update request for an existing user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(flatten)]
    pub changes: NewUser,
}

impl UserUpdate {
    pub fn new(id: impl Into<String>, changes: NewUser) -> Self {
        Self {
            id: id.into(),
            changes,
        }
    }
}
