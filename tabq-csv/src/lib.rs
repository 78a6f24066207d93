//! Delimited-text input adapter.
//!
//! Turns an arbitrary byte stream of delimiter-separated text into uniformly
//! shaped rows for a downstream engine. Construction runs a one-time
//! bootstrap (row skipping, optional header extraction, look-ahead
//! buffering); afterwards [`CsvReader::read_row`] streams the remainder of
//! the input one positionally-normalized row at a time.

pub mod delimiter;
pub mod reader;

pub use delimiter::resolve_delimiter;
pub use reader::CsvReader;

pub use tabq_types::{ReadOptions, Row, TabularReader, DEFAULT_COLUMN_TYPE};
