//! Shared vocabulary for tabular-input adapters.
//!
//! Every format adapter in the system hands a downstream engine the same
//! three things before streaming begins: column names, column types, and a
//! bounded look-ahead sample of rows. [`TabularReader`] is that contract;
//! [`ReadOptions`] is the construction-time configuration every adapter
//! consumes once.

use tabq_result::Result;

/// A materialized input row. A cell is `Some(text)` or null (`None`).
pub type Row = Vec<Option<String>>;

/// Type tag reported for every column of a delimited-text source.
///
/// Delimited text carries no type information, so adapters over it report
/// this single default for every column and leave real typing to the engine.
pub const DEFAULT_COLUMN_TYPE: &str = "text";

/// Construction-time configuration for a tabular-input adapter.
///
/// The adapter reads this once during construction and never again; the
/// caller keeps ownership.
#[derive(Debug, Clone)]
pub struct ReadOptions {
    /// Delimiter spec: a character literal, possibly escaped (`"\\t"` for a
    /// tab). Empty means "use the format default".
    pub delimiter: String,
    /// Number of leading rows to discard before anything else.
    pub skip_rows: usize,
    /// Whether the first post-skip row is a header.
    pub has_header: bool,
    /// Number of rows to buffer as the look-ahead sample. A consumed header
    /// row counts against this budget.
    pub pre_read_rows: usize,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            delimiter: ",".to_string(),
            skip_rows: 0,
            has_header: false,
            pre_read_rows: 1,
        }
    }
}

/// The contract every tabular-format adapter implements, so the engine can
/// treat them interchangeably behind `dyn TabularReader`.
///
/// Lifecycle: names, types, and the look-ahead sample are available
/// immediately after construction; `read_row` then streams the remainder of
/// the input, one row per call, until it returns the end-of-stream error.
pub trait TabularReader {
    /// Current column names. Fails with `NoRowsSeen` if the input was empty
    /// through both the header and look-ahead phases.
    fn names(&self) -> Result<&[String]>;

    /// One type tag per current column name, recomputed on each call.
    fn types(&self) -> Result<Vec<String>>;

    /// The materialized look-ahead sample, each row padded with nulls to the
    /// current column-name count.
    fn pre_read_rows(&self) -> Vec<Row>;

    /// Read one row into `row`, positionally normalized to `row.len()`:
    /// missing trailing cells become `None`, extra cells are dropped.
    ///
    /// End of input is reported as the `StreamExhausted` error. Not safe to
    /// call from multiple execution contexts without external serialization;
    /// the underlying stream cursor is shared mutable state.
    fn read_row(&mut self, row: &mut [Option<String>]) -> Result<()>;
}
