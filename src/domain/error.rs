//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::entities::Direction;

/// Domain errors represent violations of the room tree invariants.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("room not found in map: {0}")]
    UnknownRoom(String),

    #[error("{parent} already has a room to the {direction}")]
    SlotOccupied { parent: String, direction: Direction },

    #[error("room already attached to a parent: {0}")]
    AlreadyAttached(String),

    #[error("cycle detected in room tree: {0}")]
    CycleDetected(String),

    #[error("map root already set: {0}")]
    RootAlreadySet(String),

    #[error("map has no root room")]
    MissingRoot,
}
