//! # roomtemp-domain
//!
//! Pure domain model for the roomtemp service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Rooms** (named locations whose temperature is tracked)
//! - Define **Readings** (a single temperature observation for a room)
//! - Define the **Global average** (mean temperature and distinct-day count)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod average;
pub mod reading;
pub mod room;
