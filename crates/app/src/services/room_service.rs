//! Room service — use-cases for managing rooms.

use roomtemp_domain::error::RoomTempError;
use roomtemp_domain::room::{NewRoom, Room};

use crate::ports::RoomRepository;

/// Application service for room creation.
pub struct RoomService<R> {
    repo: R,
}

impl<R: RoomRepository> RoomService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persist a new room and return it with its generated identifier.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, room), fields(room_name = %room.name))]
    pub async fn create_room(&self, room: NewRoom) -> Result<Room, RoomTempError> {
        let room = self.repo.create(room).await?;
        tracing::debug!(room_id = %room.id, "room created");
        Ok(room)
    }
}
