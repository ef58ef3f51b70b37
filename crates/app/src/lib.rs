//! # roomtemp-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `RoomRepository` — create rooms
//!   - `ReadingRepository` — record readings, aggregate the global average
//! - Define **driving/inbound ports** as use-case structs:
//!   - `RoomService` — create a room
//!   - `ReadingService` — record a temperature, compute the global average
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `roomtemp-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
