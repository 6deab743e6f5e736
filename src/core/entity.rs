//! The mutable aggregate under transition.
//!
//! An [`Entity`] is a plain mutable record: an identity fixed at
//! construction, a two-valued [`LockStatus`], and an ordered collection
//! of owned [`Item`]s. It carries no behavior beyond field access and
//! collection maintenance; all transition logic lives in
//! [`crate::command`].

use serde::{Deserialize, Serialize};

/// Two-valued access status of an [`Entity`].
///
/// # Example
///
/// ```rust
/// use clearout::LockStatus;
///
/// assert_eq!(LockStatus::Locked.name(), "Locked");
/// assert_ne!(LockStatus::Locked, LockStatus::Open);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum LockStatus {
    /// The restricted state: the entity must be opened before its
    /// items can be cleared.
    Locked,
    /// The unrestricted state.
    Open,
}

impl LockStatus {
    /// Get the status name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Locked => "Locked",
            Self::Open => "Open",
        }
    }
}

/// Child record owned by an [`Entity`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Item {
    id: u64,
}

impl Item {
    /// Create an item with the given identity.
    pub fn new(id: u64) -> Self {
        Self { id }
    }

    /// The item's identity.
    pub fn id(&self) -> u64 {
        self.id
    }
}

/// The mutable aggregate a [`crate::command::ClearItemsCommand`] operates on.
///
/// The identity never changes once assigned; `status` and the item
/// collection are mutable through the methods below. Items are owned
/// exclusively by the entity; once removed, an item is no longer
/// reachable from it.
///
/// # Example
///
/// ```rust
/// use clearout::{Entity, Item, LockStatus};
///
/// let mut entity = Entity::new(1, LockStatus::Locked);
/// entity.add_item(Item::new(7));
/// entity.add_item(Item::new(9));
///
/// assert_eq!(entity.id(), 1);
/// assert_eq!(entity.len(), 2);
/// assert!(entity.contains(7));
///
/// assert!(entity.remove_item(7));
/// assert!(!entity.contains(7));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    id: u64,
    status: LockStatus,
    items: Vec<Item>,
}

impl Entity {
    /// Create an entity with the given identity and initial status,
    /// holding no items.
    pub fn new(id: u64, status: LockStatus) -> Self {
        Self {
            id,
            status,
            items: Vec::new(),
        }
    }

    /// Create an entity already holding the given items.
    ///
    /// # Example
    ///
    /// ```rust
    /// use clearout::{Entity, Item, LockStatus};
    ///
    /// let entity = Entity::with_items(1, LockStatus::Locked, [Item::new(7), Item::new(9)]);
    /// assert_eq!(entity.item_ids(), vec![7, 9]);
    /// ```
    pub fn with_items(
        id: u64,
        status: LockStatus,
        items: impl IntoIterator<Item = Item>,
    ) -> Self {
        Self {
            id,
            status,
            items: items.into_iter().collect(),
        }
    }

    /// The entity's identity. Immutable after construction.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The entity's current status.
    pub fn status(&self) -> LockStatus {
        self.status
    }

    /// Set the entity's status.
    pub fn set_status(&mut self, status: LockStatus) {
        self.status = status;
    }

    /// Append an item to the collection.
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Remove the first item with the given identity.
    ///
    /// Returns `true` if an item was removed, `false` if no item with
    /// that identity was present.
    pub fn remove_item(&mut self, id: u64) -> bool {
        match self.items.iter().position(|item| item.id() == id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Check whether an item with the given identity is present.
    pub fn contains(&self, id: u64) -> bool {
        self.items.iter().any(|item| item.id() == id)
    }

    /// Check whether the entity holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items currently held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// The items in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The identities of the current items, in order.
    ///
    /// Returns an owned list, detached from the live collection.
    pub fn item_ids(&self) -> Vec<u64> {
        self.items.iter().map(Item::id).collect()
    }
}
