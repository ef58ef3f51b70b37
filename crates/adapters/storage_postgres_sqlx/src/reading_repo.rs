//! `PostgreSQL` implementation of [`ReadingRepository`].

use std::future::Future;

use sqlx::PgPool;

use roomtemp_app::ports::ReadingRepository;
use roomtemp_domain::average::GlobalAverage;
use roomtemp_domain::error::RoomTempError;
use roomtemp_domain::reading::TemperatureReading;

use crate::error::{StorageError, reading_insert_error};

const INSERT: &str = "INSERT INTO temperatures (room_id, temperature, date) VALUES ($1, $2, $3)";

// Both aggregates come from one statement so they describe the same snapshot.
const SELECT_GLOBAL_AVERAGE: &str = r"
    SELECT AVG(temperature)::float8 AS average,
           COUNT(DISTINCT DATE(date)) AS days
    FROM temperatures
";

/// `PostgreSQL`-backed temperature reading repository.
pub struct PgReadingRepository {
    pool: PgPool,
}

impl PgReadingRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ReadingRepository for PgReadingRepository {
    fn record(
        &self,
        reading: TemperatureReading,
    ) -> impl Future<Output = Result<TemperatureReading, RoomTempError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut tx = pool.begin().await.map_err(StorageError::from)?;

            sqlx::query(INSERT)
                .bind(reading.room_id.get())
                .bind(reading.temperature)
                .bind(reading.date.naive_utc())
                .execute(&mut *tx)
                .await
                .map_err(|err| reading_insert_error(err, reading.room_id))?;

            tx.commit().await.map_err(StorageError::from)?;

            Ok(reading)
        }
    }

    fn global_average(&self) -> impl Future<Output = Result<GlobalAverage, RoomTempError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut tx = pool.begin().await.map_err(StorageError::from)?;

            let (average, days): (Option<f64>, i64) = sqlx::query_as(SELECT_GLOBAL_AVERAGE)
                .fetch_one(&mut *tx)
                .await
                .map_err(StorageError::from)?;

            tx.commit().await.map_err(StorageError::from)?;

            Ok(GlobalAverage::from_raw(average, days))
        }
    }
}
