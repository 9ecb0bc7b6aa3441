//! Domain layer: the room tree and its entities
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod builder;
pub mod entities;
pub mod error;
pub mod layout;

pub use arena::{DomainResult, MansionMap, Room, RoomId, RoomIterator};
pub use builder::MapBuilder;
pub use entities::*;
pub use error::DomainError;
pub use layout::{MansionLayout, RoomLayout};
