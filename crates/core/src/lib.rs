//! # GroomBook Core
//!
//! Domain types and the appointment slot generator shared by the persistence
//! and API crates. Nothing in this crate performs I/O or reads the clock.

pub mod availability;
pub mod clock;
pub mod errors;
pub mod models;
pub mod slots;
