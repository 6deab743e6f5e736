//! Point-in-time snapshots of an entity.
//!
//! A snapshot is an independently-owned copy of an [`Entity`]'s fields
//! at the instant of capture. Handing observers a snapshot instead of a
//! reference to the live aggregate is what keeps an already-delivered
//! notification from silently converging to the entity's final state
//! when the command mutates it afterwards.

use super::entity::{Entity, LockStatus};
use serde::{Deserialize, Serialize};

/// Frozen copy of an [`Entity`]'s observable state.
///
/// Owns its data outright: the item identities are copied out of the
/// live collection, so later mutation of the entity cannot reach a
/// snapshot that was already taken.
///
/// # Example
///
/// ```rust
/// use clearout::{Entity, EntitySnapshot, Item, LockStatus};
///
/// let mut entity = Entity::with_items(1, LockStatus::Locked, [Item::new(7)]);
/// let snapshot = EntitySnapshot::capture(&entity);
///
/// entity.remove_item(7);
/// entity.set_status(LockStatus::Open);
///
/// // The snapshot still reflects the state at capture time.
/// assert_eq!(snapshot.status, LockStatus::Locked);
/// assert_eq!(snapshot.items, vec![7]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySnapshot {
    /// Identity of the entity the snapshot was taken from.
    pub id: u64,
    /// Status at the instant of capture.
    pub status: LockStatus,
    /// Ordered item identities at the instant of capture.
    pub items: Vec<u64>,
}

impl EntitySnapshot {
    /// Capture the entity's current state.
    pub fn capture(entity: &Entity) -> Self {
        Self {
            id: entity.id(),
            status: entity.status(),
            items: entity.item_ids(),
        }
    }
}

impl From<&Entity> for EntitySnapshot {
    fn from(entity: &Entity) -> Self {
        Self::capture(entity)
    }
}
