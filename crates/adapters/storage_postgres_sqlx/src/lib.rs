//! # roomtemp-adapter-storage-postgres-sqlx
//!
//! `PostgreSQL` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `roomtemp-app::ports::storage`
//! - Manage the `PostgreSQL` connection pool lifecycle
//! - Run the schema migration once at startup (sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `roomtemp-app` (for port traits) and `roomtemp-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod pool;
mod reading_repo;
mod room_repo;

pub use error::StorageError;
pub use pool::{Config, Database};
pub use reading_repo::PgReadingRepository;
pub use room_repo::PgRoomRepository;
