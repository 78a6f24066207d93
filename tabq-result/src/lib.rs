//! Error types and result definitions for the tabq adapter crates.
//!
//! All adapter operations that can fail return [`Result<T>`], whose error
//! variant is the single [`Error`] enum. A single enum rather than
//! crate-specific error types keeps propagation across crate boundaries to a
//! plain `?` and lets callers match on specific variants when they need
//! different handling (most importantly [`Error::StreamExhausted`], the
//! normal end-of-input signal during streaming reads).

pub mod error;
pub mod result;

pub use error::Error;
pub use result::Result;
