//! Core domain types.
//!
//! This module contains the data the command operates on:
//! - The mutable [`Entity`] aggregate, its [`Item`]s, and the
//!   [`LockStatus`] enum
//! - [`EntitySnapshot`], the frozen point-in-time copy
//!
//! Nothing here performs a transition or a notification; the aggregate
//! is deliberately behavior-free.

mod entity;
mod snapshot;

pub use entity::{Entity, Item, LockStatus};
pub use snapshot::EntitySnapshot;
