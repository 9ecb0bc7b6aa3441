//! Cursor over a mansion map: the explorer's state machine.

use tracing::{debug, instrument};

use crate::domain::{Choice, Direction, DomainError, DomainResult, MansionMap, Room, RoomId};

/// Outcome of applying one choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The cursor moved into this room.
    Moved(RoomId),
    /// No room in that direction; the cursor stays.
    NoExit(Direction),
    /// The player asked to stop.
    Quit,
    /// Unknown key; the cursor stays.
    Invalid(char),
}

/// Tracks the player's current room. Never mutates the map.
#[derive(Debug, Clone)]
pub struct Explorer<'a> {
    map: &'a MansionMap,
    cursor: RoomId,
    room: &'a Room,
}

impl<'a> Explorer<'a> {
    /// Starts at the map's entrance.
    pub fn new(map: &'a MansionMap) -> DomainResult<Self> {
        let root = map.root().ok_or(DomainError::MissingRoot)?;
        Self::starting_at(map, root)
    }

    /// Starts at an arbitrary room of the map.
    pub fn starting_at(map: &'a MansionMap, idx: RoomId) -> DomainResult<Self> {
        let room = map
            .room(idx)
            .ok_or_else(|| DomainError::UnknownRoom(format!("{:?}", idx)))?;
        Ok(Self {
            map,
            cursor: idx,
            room,
        })
    }

    pub fn current(&self) -> RoomId {
        self.cursor
    }

    pub fn room(&self) -> &'a Room {
        self.room
    }

    pub fn map(&self) -> &'a MansionMap {
        self.map
    }

    pub fn at_leaf(&self) -> bool {
        self.room.is_leaf()
    }

    #[instrument(level = "trace", skip(self), fields(room = %self.room.name))]
    pub fn choose(&mut self, choice: Choice) -> Step {
        match choice {
            Choice::Go(direction) => match self.room.child(direction).and_then(|idx| {
                self.map.room(idx).map(|room| (idx, room))
            }) {
                Some((idx, room)) => {
                    debug!("{} -{}-> {}", self.room.name, direction, room.name);
                    self.cursor = idx;
                    self.room = room;
                    Step::Moved(idx)
                }
                None => Step::NoExit(direction),
            },
            Choice::Quit => Step::Quit,
            Choice::Invalid(c) => Step::Invalid(c),
        }
    }
}
