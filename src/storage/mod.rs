//! Storage layer for the NBA shots CLI
//!
//! This module wraps the SQLite database, organized into logical components:
//! - `models`: Data structures
//! - `schema`: Database connection and schema management
//! - `queries`: Shot search and entity lookups
//! - `load`: Bulk loading of ingested data

pub mod load;
pub mod models;
pub mod queries;
pub mod schema;


// Re-export the main types and database struct for easy access
pub use models::*;
pub use load::LoadSummary;
pub use schema::ShotDatabase;
