//! Notification sink contract and delivery envelope.
//!
//! The sink is the external collaborator of this crate: anything that
//! implements [`Notifier`] can observe the intermediate states a
//! command walks an entity through. The crate guarantees every
//! [`Notification`] handed to a sink is immutable from the sink's
//! perspective: the enclosed [`EntitySnapshot`] shares no data with
//! the live entity the command keeps mutating.

mod memory;

pub use memory::InMemorySink;

use crate::core::{Entity, EntitySnapshot};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Error returned by a sink that refuses or fails a delivery.
///
/// The command never swallows or retries these; they propagate to the
/// caller wrapped in [`crate::command::CommandError`].
#[derive(Debug, Error)]
#[error("notification rejected: {reason}")]
pub struct NotifyError {
    /// Sink-supplied description of the failure.
    pub reason: String,
}

impl NotifyError {
    /// Create an error with the given reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Envelope delivered to a [`Notifier`].
///
/// Wraps the point-in-time [`EntitySnapshot`] with a unique delivery
/// identity and an emission timestamp. The envelope is a value: a sink
/// may retain it indefinitely without observing later entity mutation.
///
/// # Example
///
/// ```rust
/// use clearout::{Entity, LockStatus, Notification};
///
/// let entity = Entity::new(1, LockStatus::Open);
/// let notification = Notification::capture(&entity);
///
/// assert_eq!(notification.snapshot.id, 1);
/// assert_eq!(notification.snapshot.status, LockStatus::Open);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique identity of this delivery.
    pub id: Uuid,
    /// When the notification was emitted.
    pub emitted_at: DateTime<Utc>,
    /// The entity's state at the moment of emission.
    pub snapshot: EntitySnapshot,
}

impl Notification {
    /// Capture the entity's current state into a fresh envelope.
    pub fn capture(entity: &Entity) -> Self {
        Self {
            id: Uuid::new_v4(),
            emitted_at: Utc::now(),
            snapshot: EntitySnapshot::capture(entity),
        }
    }
}

/// Sink for observing entity state transitions.
///
/// Implementations receive an owned [`Notification`] per emission and
/// may keep it; the data inside is frozen at emission time. A sink that
/// cannot accept a delivery returns [`NotifyError`], which the emitting
/// command propagates unchanged.
///
/// # Example
///
/// ```rust
/// use clearout::{Notification, Notifier, NotifyError};
///
/// struct CountingSink {
///     deliveries: usize,
/// }
///
/// impl Notifier for CountingSink {
///     fn notify(&mut self, _notification: Notification) -> Result<(), NotifyError> {
///         self.deliveries += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait Notifier {
    /// Deliver one notification.
    fn notify(&mut self, notification: Notification) -> Result<(), NotifyError>;
}
