//! Storage layer
//!
//! Backends are picked at startup by tag through [`StoreFactory`].
//! Only the in-memory backend exists today.

pub mod factory;
pub mod memory;

pub use factory::{StoreConstructor, StoreFactory, MOCKDB};
pub use memory::MemoryStore;
