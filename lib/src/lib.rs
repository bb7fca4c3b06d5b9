pub mod config;
pub mod error;
pub mod format;
pub mod import;
pub mod models;
pub mod profile;
pub mod snapshot;
pub mod tree;
pub mod utils;

// Re-export error types for convenience
pub use error::MeteorError;
