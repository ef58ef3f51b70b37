//! Room — a named location whose temperature is tracked.

use serde::{Deserialize, Serialize};

use crate::id::RoomId;

/// A persisted room. The identifier is assigned by the store on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
}

/// A room that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRoom {
    pub name: String,
}

impl NewRoom {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Attach the identifier the store generated for this room.
    #[must_use]
    pub fn with_id(self, id: RoomId) -> Room {
        Room {
            id,
            name: self.name,
        }
    }
}

impl Room {
    /// Human readable confirmation returned once the room exists.
    #[must_use]
    pub fn created_message(&self) -> String {
        format!("Room {} created.", self.name)
    }
}
