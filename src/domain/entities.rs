//! Domain entities: rooms, directions and player choices

use std::fmt;

/// Longest room name kept, in characters. Longer names are truncated.
pub const MAX_ROOM_NAME: usize = 49;

/// Short display label of a room.
///
/// Always at most [`MAX_ROOM_NAME`] characters; truncation happens on a
/// character boundary so multi-byte names stay valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoomName(String);

impl RoomName {
    pub fn new(name: &str) -> Self {
        match name.char_indices().nth(MAX_ROOM_NAME) {
            Some((cut, _)) => Self(name[..cut].to_string()),
            None => Self(name.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for RoomName {
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}

impl From<&str> for RoomName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<RoomName> for String {
    fn from(value: RoomName) -> Self {
        value.0
    }
}

impl AsRef<str> for RoomName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which child slot of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Key the player types to take this direction.
    pub fn key(self) -> char {
        match self {
            Direction::Left => 'e',
            Direction::Right => 'd',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => f.write_str("left"),
            Direction::Right => f.write_str("right"),
        }
    }
}

/// A single parsed answer to the explorer prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Go(Direction),
    Quit,
    /// Any character that is not a known key.
    Invalid(char),
}

impl Choice {
    /// Interpret one typed character, ignoring case.
    pub fn from_char(c: char) -> Self {
        match c.to_ascii_lowercase() {
            'e' => Choice::Go(Direction::Left),
            'd' => Choice::Go(Direction::Right),
            's' => Choice::Quit,
            _ => Choice::Invalid(c),
        }
    }

    /// Interpret an input line: the first non-whitespace character decides,
    /// the rest of the line is discarded. Blank lines yield `None`.
    pub fn from_line(line: &str) -> Option<Self> {
        line.trim_start().chars().next().map(Self::from_char)
    }
}
