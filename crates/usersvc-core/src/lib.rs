//! User Service Core Library
//!
//! Storage contract, the reference in-memory engine, event sinks and the
//! backend factory.

// Re-export pure types from usersvc-types
pub use usersvc_types::*;

pub mod error;
pub mod events;
pub mod ports;
pub mod storage;

pub use error::{Result, StoreError};
pub use events::{ChannelEventSink, LogEventSink, NoopEventSink};
pub use ports::{EventSink, UserStore};
pub use storage::{MemoryStore, StoreFactory, MOCKDB};
