//! Declarative description of a mansion's shape.

use serde::{Deserialize, Serialize};

/// One room and the rooms behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomLayout {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<Box<RoomLayout>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<Box<RoomLayout>>,
}

impl RoomLayout {
    /// A room with no exits.
    pub fn leaf(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            left: None,
            right: None,
        }
    }

    pub fn with_left(mut self, left: RoomLayout) -> Self {
        self.left = Some(Box::new(left));
        self
    }

    pub fn with_right(mut self, right: RoomLayout) -> Self {
        self.right = Some(Box::new(right));
        self
    }
}

/// Whole map: the entrance hall and everything reachable from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MansionLayout {
    pub root: RoomLayout,
}

impl Default for MansionLayout {
    /// The built-in mansion.
    ///
    /// ```text
    /// Entrance Hall
    /// ├─ [e] Living Room
    /// │  ├─ [e] Library
    /// │  └─ [d] Office
    /// │     └─ [e] Master Bedroom
    /// └─ [d] Kitchen
    ///    ├─ [e] Pantry
    ///    └─ [d] Winter Garden
    /// ```
    fn default() -> Self {
        Self {
            root: RoomLayout::leaf("Entrance Hall")
                .with_left(
                    RoomLayout::leaf("Living Room")
                        .with_left(RoomLayout::leaf("Library"))
                        .with_right(
                            RoomLayout::leaf("Office").with_left(RoomLayout::leaf("Master Bedroom")),
                        ),
                )
                .with_right(
                    RoomLayout::leaf("Kitchen")
                        .with_left(RoomLayout::leaf("Pantry"))
                        .with_right(RoomLayout::leaf("Winter Garden")),
                ),
        }
    }
}
