//! Convenience re-exports for common rowhaus usage

// Coordinator and its errors
pub use crate::core::RowHaus;
pub use crate::errors::RowHausError;

// Configuration
pub use config::{AppConfig, DatabaseConfig, DEFAULT_POOL};

// DAO core
pub use dao_object::prelude::*;
