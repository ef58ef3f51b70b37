//! Storage port — repository traits for persistence.

use std::future::Future;

use roomtemp_domain::average::GlobalAverage;
use roomtemp_domain::error::RoomTempError;
use roomtemp_domain::reading::TemperatureReading;
use roomtemp_domain::room::{NewRoom, Room};

/// Repository for persisting [`Room`]s.
pub trait RoomRepository {
    /// Insert a new room and return it with the identifier the store generated.
    fn create(&self, room: NewRoom) -> impl Future<Output = Result<Room, RoomTempError>> + Send;
}

/// Repository for persisting and aggregating [`TemperatureReading`]s.
pub trait ReadingRepository {
    /// Insert a reading.
    ///
    /// Implementations must fail with
    /// [`ConflictError::UnknownRoom`](roomtemp_domain::error::ConflictError::UnknownRoom)
    /// and persist nothing when `reading.room_id` does not exist.
    fn record(
        &self,
        reading: TemperatureReading,
    ) -> impl Future<Output = Result<TemperatureReading, RoomTempError>> + Send;

    /// Mean of every stored temperature and the number of distinct days,
    /// across all rooms.
    fn global_average(&self) -> impl Future<Output = Result<GlobalAverage, RoomTempError>> + Send;
}
