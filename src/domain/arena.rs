use std::fmt;

use generational_arena::{Arena, Index};
use termtree::Tree;
use tracing::{debug, instrument};

use crate::domain::entities::{Direction, RoomName};
use crate::domain::error::DomainError;

/// Result type for room tree operations.
pub type DomainResult<T> = Result<T, DomainError>;

/// Handle of a room inside a [`MansionMap`].
pub type RoomId = Index;

/// Room node in the arena-based mansion tree.
#[derive(Debug, Clone)]
pub struct Room {
    /// Display label of the room
    pub name: RoomName,
    /// Index of the owning room, None for the root and detached rooms
    pub parent: Option<RoomId>,
    pub left: Option<RoomId>,
    pub right: Option<RoomId>,
}

impl Room {
    fn new(name: &str) -> Self {
        Self {
            name: RoomName::new(name),
            parent: None,
            left: None,
            right: None,
        }
    }

    pub fn child(&self, direction: Direction) -> Option<RoomId> {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Directions that lead somewhere, left before right.
    pub fn exits(&self) -> impl Iterator<Item = (Direction, RoomId)> + '_ {
        [Direction::Left, Direction::Right]
            .into_iter()
            .filter_map(move |d| self.child(d).map(|idx| (d, idx)))
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Arena-based binary tree of rooms.
///
/// Every room is owned by the arena; `left`, `right` and `parent` are
/// indices into it. Each child slot is wired at most once and a room can be
/// attached under a single parent only, so the rooms reachable from the
/// root always form a strict tree. Rooms are never removed: the map is
/// dropped as a whole.
#[derive(Debug, Clone)]
pub struct MansionMap {
    arena: Arena<Room>,
    root: Option<RoomId>,
}

impl Default for MansionMap {
    fn default() -> Self {
        Self::new()
    }
}

impl MansionMap {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Creates a detached room with no exits and returns its handle.
    ///
    /// Names longer than [`MAX_ROOM_NAME`](crate::domain::MAX_ROOM_NAME)
    /// characters are truncated.
    #[instrument(level = "trace", skip(self))]
    pub fn create_room(&mut self, name: &str) -> RoomId {
        self.arena.insert(Room::new(name))
    }

    /// Marks a detached room as the entrance of the map. Can only be done once.
    #[instrument(level = "trace", skip(self))]
    pub fn set_root(&mut self, idx: RoomId) -> DomainResult<()> {
        let room = self.get(idx)?;
        if let Some(root) = self.root {
            return Err(DomainError::RootAlreadySet(self.label(root)));
        }
        if room.parent.is_some() {
            return Err(DomainError::AlreadyAttached(room.name.to_string()));
        }
        self.root = Some(idx);
        Ok(())
    }

    /// Wires `child` into the `direction` slot of `parent`.
    ///
    /// A slot is assigned once; there is no re-wiring or detaching.
    #[instrument(level = "trace", skip(self))]
    pub fn attach(&mut self, parent: RoomId, direction: Direction, child: RoomId) -> DomainResult<()> {
        let parent_room = self.get(parent)?;
        let child_room = self.get(child)?;

        if parent == child || self.root == Some(child) || self.is_ancestor(child, parent) {
            return Err(DomainError::CycleDetected(child_room.name.to_string()));
        }
        if child_room.parent.is_some() {
            return Err(DomainError::AlreadyAttached(child_room.name.to_string()));
        }
        if parent_room.child(direction).is_some() {
            return Err(DomainError::SlotOccupied {
                parent: parent_room.name.to_string(),
                direction,
            });
        }

        debug!(
            "attach {} -{}-> {}",
            parent_room.name, direction, child_room.name
        );
        if let Some(room) = self.arena.get_mut(parent) {
            match direction {
                Direction::Left => room.left = Some(child),
                Direction::Right => room.right = Some(child),
            }
        }
        if let Some(room) = self.arena.get_mut(child) {
            room.parent = Some(parent);
        }
        Ok(())
    }

    /// True if `candidate` is `idx` itself or lies on the path from `idx` up to its top.
    fn is_ancestor(&self, candidate: RoomId, idx: RoomId) -> bool {
        let mut current = Some(idx);
        while let Some(c) = current {
            if c == candidate {
                return true;
            }
            current = self.arena.get(c).and_then(|room| room.parent);
        }
        false
    }

    fn get(&self, idx: RoomId) -> DomainResult<&Room> {
        self.arena
            .get(idx)
            .ok_or_else(|| DomainError::UnknownRoom(format!("{:?}", idx)))
    }

    fn label(&self, idx: RoomId) -> String {
        self.name(idx)
            .map(str::to_string)
            .unwrap_or_else(|| format!("{:?}", idx))
    }

    pub fn root(&self) -> Option<RoomId> {
        self.root
    }

    pub fn room(&self, idx: RoomId) -> Option<&Room> {
        self.arena.get(idx)
    }

    pub fn name(&self, idx: RoomId) -> Option<&str> {
        self.room(idx).map(|room| room.name.as_str())
    }

    pub fn child(&self, idx: RoomId, direction: Direction) -> Option<RoomId> {
        self.room(idx).and_then(|room| room.child(direction))
    }

    pub fn is_leaf(&self, idx: RoomId) -> bool {
        self.room(idx).is_some_and(Room::is_leaf)
    }

    /// Number of rooms created, attached or not.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// First room reachable from the root with the given name, in pre-order.
    pub fn find(&self, name: &str) -> Option<RoomId> {
        self.iter()
            .find(|(_, room)| room.name.as_str() == name)
            .map(|(idx, _)| idx)
    }

    pub fn iter(&self) -> RoomIterator<'_> {
        RoomIterator::new(self)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        self.root.map_or(0, |root| self.calculate_depth(root))
    }

    fn calculate_depth(&self, idx: RoomId) -> usize {
        match self.room(idx) {
            Some(room) => {
                1 + room
                    .exits()
                    .map(|(_, child)| self.calculate_depth(child))
                    .max()
                    .unwrap_or(0)
            }
            None => 0,
        }
    }

    /// Names of the dead ends, left to right.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_names(&self) -> Vec<String> {
        self.iter()
            .filter(|(_, room)| room.is_leaf())
            .map(|(_, room)| room.name.to_string())
            .collect()
    }

    /// Renders the reachable rooms as a printable tree.
    pub fn to_tree(&self) -> Tree<String> {
        fn build(map: &MansionMap, idx: RoomId, label: String) -> Tree<String> {
            let leaves: Vec<_> = map
                .room(idx)
                .into_iter()
                .flat_map(Room::exits)
                .map(|(direction, child)| {
                    let name = map.name(child).unwrap_or_default();
                    build(map, child, format!("[{}] {}", direction.key(), name))
                })
                .collect();
            Tree::new(label).with_leaves(leaves)
        }

        match self.root {
            Some(root) => build(self, root, self.label(root)),
            None => Tree::new("Empty map".to_string()),
        }
    }
}

/// Pre-order walk over the rooms reachable from the root.
pub struct RoomIterator<'a> {
    map: &'a MansionMap,
    stack: Vec<RoomId>,
}

impl<'a> RoomIterator<'a> {
    fn new(map: &'a MansionMap) -> Self {
        Self {
            map,
            stack: map.root().into_iter().collect(),
        }
    }
}

impl<'a> Iterator for RoomIterator<'a> {
    type Item = (RoomId, &'a Room);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.stack.pop() {
            if let Some(room) = self.map.room(current) {
                // Push right first so left is visited first
                self.stack.extend(room.right);
                self.stack.extend(room.left);
                return Some((current, room));
            }
        }
        None
    }
}
