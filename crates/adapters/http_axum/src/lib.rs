//! # roomtemp-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON API (`/api/room`, `/api/temperature`, `/api/average`)
//!   and the plain-text greeting at `/`
//! - Check presence of required body fields before any service call
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `roomtemp-app` (for port traits and services) and
//! `roomtemp-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
