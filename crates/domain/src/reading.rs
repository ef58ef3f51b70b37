//! Temperature reading — one observation for a room at a point in time.

use serde::{Deserialize, Serialize};

use crate::error::{RoomTempError, ValidationError};
use crate::id::RoomId;
use crate::time::Timestamp;

/// A single temperature observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureReading {
    pub room_id: RoomId,
    pub temperature: f64,
    pub date: Timestamp,
}

impl TemperatureReading {
    /// Create a builder for constructing a [`TemperatureReading`].
    #[must_use]
    pub fn builder() -> TemperatureReadingBuilder {
        TemperatureReadingBuilder::default()
    }
}

/// Step-by-step builder for [`TemperatureReading`].
///
/// `room_id` and `temperature` are required; `date` falls back to
/// [`crate::time::now`] when unset.
#[derive(Debug, Default)]
pub struct TemperatureReadingBuilder {
    room_id: Option<RoomId>,
    temperature: Option<f64>,
    date: Option<Timestamp>,
}

impl TemperatureReadingBuilder {
    #[must_use]
    pub fn room_id(mut self, room_id: RoomId) -> Self {
        self.room_id = Some(room_id);
        self
    }

    #[must_use]
    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    #[must_use]
    pub fn date(mut self, date: Timestamp) -> Self {
        self.date = Some(date);
        self
    }

    /// Consume the builder and return a [`TemperatureReading`].
    ///
    /// # Errors
    ///
    /// Returns [`RoomTempError::Validation`] if `room_id` or `temperature`
    /// is missing.
    pub fn build(self) -> Result<TemperatureReading, RoomTempError> {
        let temperature = self
            .temperature
            .ok_or(ValidationError::MissingField("temperature"))?;
        let room_id = self.room_id.ok_or(ValidationError::MissingField("room"))?;

        Ok(TemperatureReading {
            room_id,
            temperature,
            date: self.date.unwrap_or_else(crate::time::now),
        })
    }
}
