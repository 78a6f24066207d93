use std::io;

use thiserror::Error;

/// The byte substituted for an unparseable delimiter spec.
///
/// The substitution only ever happens inside the error value itself; the
/// error is still returned to the caller and aborts adapter construction.
pub const FALLBACK_DELIMITER: u8 = b',';

/// Unified error type for all tabq operations.
///
/// Construction-time failures ([`Error::NilStream`],
/// [`Error::InvalidDelimiterSpec`], and propagated tokenizer errors) abort
/// adapter creation entirely. Streaming-phase failures are returned per call
/// and never retried internally.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error from the underlying byte stream.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Tokenizer error while splitting the stream into records.
    ///
    /// The tokenizer is configured leniently (flexible record widths,
    /// permissive quoting), so this is rare in practice; it surfaces
    /// lower-level stream failures and hard parse faults.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// No input stream was supplied at construction.
    #[error("nil stream")]
    NilStream,

    /// The user-supplied delimiter spec could not be resolved to a single
    /// separator byte.
    ///
    /// `fallback` carries the conventional substitute separator (a comma);
    /// the error itself is still fatal at construction.
    #[error("can not get separator: {spec:?}")]
    InvalidDelimiterSpec {
        /// The spec string as supplied by the user.
        spec: String,
        /// Conventional substitute separator, always [`FALLBACK_DELIMITER`].
        fallback: u8,
    },

    /// End of the input stream.
    ///
    /// This is the expected termination signal for row iteration, not a
    /// fault; callers stop reading when they see it.
    #[error("stream exhausted")]
    StreamExhausted,

    /// No column names were ever established: the stream was empty through
    /// both the header and look-ahead phases.
    #[error("no rows")]
    NoRowsSeen,
}

impl Error {
    /// Build an [`Error::InvalidDelimiterSpec`] carrying the conventional
    /// comma fallback.
    #[inline]
    pub fn invalid_delimiter(spec: impl Into<String>) -> Self {
        Error::InvalidDelimiterSpec {
            spec: spec.into(),
            fallback: FALLBACK_DELIMITER,
        }
    }

    /// True when this error is the normal end-of-stream signal.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Error::StreamExhausted)
    }
}
