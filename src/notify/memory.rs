//! In-memory recording sink.

use super::{Notification, Notifier, NotifyError};

/// Sink that records every delivered notification in order.
///
/// Useful for tests and for demonstrating the snapshot guarantee: the
/// recorded notifications keep the field values they were emitted with,
/// however the live entity is mutated afterwards.
///
/// # Example
///
/// ```rust
/// use clearout::{ClearItemsCommand, Entity, InMemorySink, Item, LockStatus};
///
/// let mut command = ClearItemsCommand::new(InMemorySink::new());
/// let mut entity = Entity::with_items(1, LockStatus::Locked, [Item::new(7)]);
///
/// command.handle(&mut entity).unwrap();
///
/// let sink = command.into_sink();
/// assert_eq!(sink.len(), 2);
/// assert_eq!(sink.notifications()[0].snapshot.items, vec![7]);
/// assert!(sink.notifications()[1].snapshot.items.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct InMemorySink {
    delivered: Vec<Notification>,
}

impl InMemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded notifications, in delivery order.
    pub fn notifications(&self) -> &[Notification] {
        &self.delivered
    }

    /// Number of notifications delivered so far.
    pub fn len(&self) -> usize {
        self.delivered.len()
    }

    /// Check whether nothing has been delivered yet.
    pub fn is_empty(&self) -> bool {
        self.delivered.is_empty()
    }

    /// Take the recorded notifications, leaving the sink empty.
    pub fn take(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.delivered)
    }
}

impl Notifier for InMemorySink {
    fn notify(&mut self, notification: Notification) -> Result<(), NotifyError> {
        self.delivered.push(notification);
        Ok(())
    }
}
