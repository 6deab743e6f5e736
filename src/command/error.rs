//! Errors surfaced by command handling.

use crate::notify::NotifyError;
use thiserror::Error;

/// Errors that can occur while handling a command.
///
/// The command itself is total over the entity's field values; the only
/// failure path is a sink refusing a delivery, which propagates to the
/// caller with the entity's identity attached.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("failed to deliver snapshot for entity {entity_id}")]
    Delivery {
        entity_id: u64,
        #[source]
        source: NotifyError,
    },
}
