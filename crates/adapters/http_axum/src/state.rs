//! Shared application state for axum handlers.

use std::sync::Arc;

use roomtemp_app::ports::{ReadingRepository, RoomRepository};
use roomtemp_app::services::reading_service::ReadingService;
use roomtemp_app::services::room_service::RoomService;

/// Application state shared across all axum handlers.
///
/// Generic over the room and reading repositories to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repositories themselves do not
/// need to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<RR, TR> {
    /// Room creation service.
    pub room_service: Arc<RoomService<RR>>,
    /// Reading and average service.
    pub reading_service: Arc<ReadingService<TR>>,
}

impl<RR, TR> Clone for AppState<RR, TR> {
    fn clone(&self) -> Self {
        Self {
            room_service: Arc::clone(&self.room_service),
            reading_service: Arc::clone(&self.reading_service),
        }
    }
}

impl<RR, TR> AppState<RR, TR>
where
    RR: RoomRepository + Send + Sync + 'static,
    TR: ReadingRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(room_service: RoomService<RR>, reading_service: ReadingService<TR>) -> Self {
        Self {
            room_service: Arc::new(room_service),
            reading_service: Arc::new(reading_service),
        }
    }
}
