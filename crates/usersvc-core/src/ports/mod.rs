//! Port traits (interfaces) for dependency injection

pub mod events;
pub mod storage;

pub use events::EventSink;
pub use storage::UserStore;
