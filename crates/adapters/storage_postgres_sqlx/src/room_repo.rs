//! `PostgreSQL` implementation of [`RoomRepository`].

use std::future::Future;

use sqlx::PgPool;

use roomtemp_app::ports::RoomRepository;
use roomtemp_domain::error::RoomTempError;
use roomtemp_domain::id::RoomId;
use roomtemp_domain::room::{NewRoom, Room};

use crate::error::StorageError;

const INSERT_RETURNING_ID: &str = "INSERT INTO rooms (name) VALUES ($1) RETURNING id";

/// `PostgreSQL`-backed room repository.
pub struct PgRoomRepository {
    pool: PgPool,
}

impl PgRoomRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl RoomRepository for PgRoomRepository {
    fn create(&self, room: NewRoom) -> impl Future<Output = Result<Room, RoomTempError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut tx = pool.begin().await.map_err(StorageError::from)?;

            let (id,): (i32,) = sqlx::query_as(INSERT_RETURNING_ID)
                .bind(&room.name)
                .fetch_one(&mut *tx)
                .await
                .map_err(StorageError::from)?;

            tx.commit().await.map_err(StorageError::from)?;

            Ok(room.with_id(RoomId::new(id)))
        }
    }
}
