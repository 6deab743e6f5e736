//! Clearout: a mutate-and-notify command core with snapshot-isolated
//! notifications
//!
//! Clearout is the minimal state-machine-plus-notification core for a
//! recurring design hazard: a command mutates a shared aggregate in
//! several steps and reports each intermediate state to an observer. If
//! the observer is handed a reference to the live aggregate, every
//! retained report silently converges to the aggregate's *final* state.
//! Clearout's contract is that each report is an independent, frozen
//! snapshot taken at the moment of emission.
//!
//! # Core Concepts
//!
//! - **Entity**: mutable aggregate with an identity, a [`LockStatus`],
//!   and ordered items
//! - **Snapshot**: an [`EntitySnapshot`] owns a point-in-time copy of
//!   the entity's fields
//! - **Sink**: anything implementing [`Notifier`] observes the
//!   transition sequence
//!
//! # Example
//!
//! ```rust
//! use clearout::{ClearItemsCommand, Entity, InMemorySink, Item, LockStatus};
//!
//! let mut command = ClearItemsCommand::new(InMemorySink::new());
//! let mut entity = Entity::with_items(1, LockStatus::Locked, [Item::new(7), Item::new(9)]);
//!
//! command.handle(&mut entity).unwrap();
//!
//! let sink = command.into_sink();
//! let notifications = sink.notifications();
//!
//! // First the opened entity with its full item list, then the
//! // cleared entity with its original status restored.
//! assert_eq!(notifications[0].snapshot.status, LockStatus::Open);
//! assert_eq!(notifications[0].snapshot.items, vec![7, 9]);
//! assert_eq!(notifications[1].snapshot.status, LockStatus::Locked);
//! assert!(notifications[1].snapshot.items.is_empty());
//! ```

pub mod command;
pub mod core;
pub mod notify;

// Re-export commonly used types
pub use command::{ClearItemsCommand, CommandError};
pub use notify::{InMemorySink, Notification, Notifier, NotifyError};
pub use self::core::{Entity, EntitySnapshot, Item, LockStatus};
