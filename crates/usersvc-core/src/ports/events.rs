//! Notification sink port

use usersvc_types::UserEvent;

/// Receiver of storage mutation events.
///
/// Called synchronously from inside the mutating operation, after the change
/// is applied and before the operation returns. Implementations must not
/// block; nothing is awaited from them.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: &UserEvent);
}
