pub mod config;
pub mod error;
pub mod render;
pub mod session;

// Re-export common error type
pub use error::SiftError;
