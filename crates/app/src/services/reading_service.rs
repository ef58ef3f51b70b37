//! Reading service — use-cases for recording temperatures and querying the
//! global average.

use roomtemp_domain::average::GlobalAverage;
use roomtemp_domain::error::RoomTempError;
use roomtemp_domain::reading::TemperatureReading;

use crate::ports::ReadingRepository;

/// Application service for temperature readings.
pub struct ReadingService<R> {
    repo: R,
}

impl<R: ReadingRepository> ReadingService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Record a temperature reading.
    ///
    /// # Errors
    ///
    /// Returns [`RoomTempError::Conflict`] when the room does not exist, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, reading), fields(room_id = %reading.room_id))]
    pub async fn record_temperature(
        &self,
        reading: TemperatureReading,
    ) -> Result<TemperatureReading, RoomTempError> {
        self.repo.record(reading).await
    }

    /// Compute the mean temperature and distinct-day count across all rooms.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn global_average(&self) -> Result<GlobalAverage, RoomTempError> {
        self.repo.global_average().await
    }
}
