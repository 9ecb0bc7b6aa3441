//! Map builder: turns a layout into wired rooms.

use tracing::{debug, instrument};

use crate::domain::arena::{DomainResult, MansionMap, RoomId};
use crate::domain::entities::Direction;
use crate::domain::layout::{MansionLayout, RoomLayout};

/// Constructs a [`MansionMap`] from a [`MansionLayout`].
///
/// Rooms are created root first and then wired parent to child, each slot
/// exactly once.
#[derive(Debug, Default)]
pub struct MapBuilder {
    map: MansionMap,
}

impl MapBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[instrument(level = "debug", skip_all, fields(root = %layout.root.name))]
    pub fn build(mut self, layout: &MansionLayout) -> DomainResult<MansionMap> {
        let root = self.map.create_room(&layout.root.name);
        self.map.set_root(root)?;

        let mut stack: Vec<(&RoomLayout, RoomId)> = vec![(&layout.root, root)];
        while let Some((room, idx)) = stack.pop() {
            for (direction, child) in [
                (Direction::Left, room.left.as_deref()),
                (Direction::Right, room.right.as_deref()),
            ] {
                if let Some(child) = child {
                    let child_idx = self.map.create_room(&child.name);
                    self.map.attach(idx, direction, child_idx)?;
                    stack.push((child, child_idx));
                }
            }
        }

        debug!("built map with {} rooms", self.map.len());
        Ok(self.map)
    }
}

impl MansionMap {
    /// Builds a map from a layout.
    pub fn from_layout(layout: &MansionLayout) -> DomainResult<Self> {
        MapBuilder::new().build(layout)
    }

    /// The built-in mansion, starting at the Entrance Hall.
    pub fn default_mansion() -> DomainResult<Self> {
        Self::from_layout(&MansionLayout::default())
    }
}
