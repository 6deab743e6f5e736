//! The clear-items transition command.
//!
//! [`ClearItemsCommand`] walks an [`Entity`] through a fixed transition
//! sequence (open if locked, clear all items, restore the original
//! status) and reports each semantically meaningful step to its
//! [`Notifier`] sink. Every report is a point-in-time snapshot, never a
//! reference into the live aggregate.
//!
//! Execution is synchronous and single-threaded: `handle` runs to
//! completion on the calling thread with no suspension points and no
//! internal locking. The mutation is multi-step and non-atomic, so
//! embedders that share an entity across threads must serialize calls
//! to `handle` per entity identity.

pub mod error;

pub use error::CommandError;

use crate::core::{Entity, LockStatus};
use crate::notify::{Notification, Notifier};
use tracing::debug;

/// Command that clears an entity's items, notifying its sink of each
/// intermediate state.
///
/// Holds the sink for its lifetime; one command instance can handle any
/// number of entities in sequence.
///
/// # Example
///
/// ```rust
/// use clearout::{ClearItemsCommand, Entity, InMemorySink, Item, LockStatus};
///
/// let mut command = ClearItemsCommand::new(InMemorySink::new());
/// let mut entity = Entity::with_items(1, LockStatus::Locked, [Item::new(7), Item::new(9)]);
///
/// command.handle(&mut entity).unwrap();
///
/// // The entity ends cleared, with its original status restored.
/// assert_eq!(entity.status(), LockStatus::Locked);
/// assert!(entity.is_empty());
///
/// // The sink saw the opened state first, then the cleared one.
/// let sink = command.sink();
/// assert_eq!(sink.notifications()[0].snapshot.status, LockStatus::Open);
/// assert_eq!(sink.notifications()[0].snapshot.items, vec![7, 9]);
/// assert_eq!(sink.notifications()[1].snapshot.status, LockStatus::Locked);
/// assert!(sink.notifications()[1].snapshot.items.is_empty());
/// ```
pub struct ClearItemsCommand<N: Notifier> {
    sink: N,
}

impl<N: Notifier> ClearItemsCommand<N> {
    /// Create a command delivering to the given sink.
    pub fn new(sink: N) -> Self {
        Self { sink }
    }

    /// Borrow the sink.
    pub fn sink(&self) -> &N {
        &self.sink
    }

    /// Consume the command, returning its sink.
    pub fn into_sink(self) -> N {
        self.sink
    }

    /// Clear the entity's items, emitting a snapshot after each
    /// meaningful step.
    ///
    /// An entity with no items is left untouched and nothing is
    /// emitted, whatever its status; re-invoking on an already-cleared
    /// entity is therefore a no-op. Otherwise: a locked entity is
    /// opened (snapshot emitted), the items are removed, the original
    /// status is restored, and a final snapshot is emitted.
    ///
    /// Sink failures are not caught or retried; they propagate as
    /// [`CommandError::Delivery`].
    pub fn handle(&mut self, entity: &mut Entity) -> Result<(), CommandError> {
        if entity.is_empty() {
            debug!(entity_id = entity.id(), "no items to clear, entity untouched");
            return Ok(());
        }

        let original_status = entity.status();
        let was_locked = original_status == LockStatus::Locked;

        if was_locked {
            entity.set_status(LockStatus::Open);
            debug!(entity_id = entity.id(), "opened entity for clearing");
            self.emit(entity)?;
        }

        // Iterate a copy of the membership; removing from the live
        // collection while iterating it would skip items.
        let member_ids = entity.item_ids();
        for item_id in &member_ids {
            entity.remove_item(*item_id);
        }
        debug!(
            entity_id = entity.id(),
            removed = member_ids.len(),
            "cleared items"
        );

        if was_locked {
            entity.set_status(original_status);
            debug!(
                entity_id = entity.id(),
                status = original_status.name(),
                "restored original status"
            );
        }

        self.emit(entity)
    }

    fn emit(&mut self, entity: &Entity) -> Result<(), CommandError> {
        let notification = Notification::capture(entity);
        debug!(
            entity_id = entity.id(),
            notification_id = %notification.id,
            status = notification.snapshot.status.name(),
            items = notification.snapshot.items.len(),
            "emitting snapshot"
        );
        self.sink
            .notify(notification)
            .map_err(|source| CommandError::Delivery {
                entity_id: entity.id(),
                source,
            })
    }
}
