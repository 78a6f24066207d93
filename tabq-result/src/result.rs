use crate::error::Error;

/// Result type alias used throughout the tabq crates.
pub type Result<T> = std::result::Result<T, Error>;
