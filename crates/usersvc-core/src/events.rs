//! Event sink implementations

use crate::ports::EventSink;
use tokio::sync::mpsc;
use tracing::{debug, info};
use usersvc_types::UserEvent;

/// Logs every event. Default sink until a message bus is wired in.
#[derive(Debug, Default, Clone)]
pub struct LogEventSink;

impl EventSink for LogEventSink {
    fn emit(&self, event: &UserEvent) {
        info!(
            "emitting {} event with msg {}",
            event.event_type(),
            event.payload
        );
    }
}

/// Discards every event
#[derive(Debug, Default, Clone)]
pub struct NoopEventSink;

impl EventSink for NoopEventSink {
    fn emit(&self, _event: &UserEvent) {}
}

/// Forwards events to an unbounded channel for an external subscriber
#[derive(Debug, Clone)]
pub struct ChannelEventSink {
    tx: mpsc::UnboundedSender<UserEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::UnboundedSender<UserEvent>) -> Self {
        Self { tx }
    }

    /// Create a sink together with the receiving end
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<UserEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: &UserEvent) {
        if self.tx.send(event.clone()).is_err() {
            debug!("event subscriber gone, dropping {} event", event.event_type());
        }
    }
}
