//! Search criteria

use crate::User;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Field a user search can match on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchCriteria {
    Country,
    FirstName,
    LastName,
    Nickname,
    Email,
}

/// Returned when a criteria name is not one of the searchable fields
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid search criteria: {0}")]
pub struct UnknownCriteria(pub String);

impl SearchCriteria {
    pub const ALL: [SearchCriteria; 5] = [
        SearchCriteria::Country,
        SearchCriteria::FirstName,
        SearchCriteria::LastName,
        SearchCriteria::Nickname,
        SearchCriteria::Email,
    ];

    /// The field of `user` this criteria compares against
    pub fn field<'a>(&self, user: &'a User) -> &'a str {
        match self {
            SearchCriteria::Country => &user.country,
            SearchCriteria::FirstName => &user.first_name,
            SearchCriteria::LastName => &user.last_name,
            SearchCriteria::Nickname => &user.nickname,
            SearchCriteria::Email => &user.email,
        }
    }

    /// Case-sensitive exact match
    pub fn matches(&self, user: &User, value: &str) -> bool {
        self.field(user) == value
    }
}

impl FromStr for SearchCriteria {
    type Err = UnknownCriteria;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "country" => Ok(SearchCriteria::Country),
            "first_name" => Ok(SearchCriteria::FirstName),
            "last_name" => Ok(SearchCriteria::LastName),
            "nickname" => Ok(SearchCriteria::Nickname),
            "email" => Ok(SearchCriteria::Email),
            other => Err(UnknownCriteria(other.to_string())),
        }
    }
}

impl std::fmt::Display for SearchCriteria {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchCriteria::Country => write!(f, "country"),
            SearchCriteria::FirstName => write!(f, "first_name"),
            SearchCriteria::LastName => write!(f, "last_name"),
            SearchCriteria::Nickname => write!(f, "nickname"),
            SearchCriteria::Email => write!(f, "email"),
        }
    }
}
