//! Type-safe wrappers and enums for shot data.

pub mod ids;
pub mod location;
pub mod time;
