//! User Service Types - Pure type definitions
//!
//! This crate contains only plain data types shared between the storage
//! layer and the HTTP layer. It has no async runtime dependencies.

pub mod criteria;
pub mod event;
pub mod user;

pub use criteria::*;
pub use event::*;
pub use user::*;
