//! The delimited-text adapter proper.
//!
//! Construction performs the one-time schema bootstrap in a fixed order:
//! skip rows (best effort), consume an optional header, buffer the
//! look-ahead sample. The order matters: header detection consumes the first
//! post-skip row positionally, and look-ahead widening must run after header
//! names exist so names are only synthesized for columns the header never
//! named.

use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};

use tabq_result::{Error, Result};
use tabq_types::{ReadOptions, Row, TabularReader, DEFAULT_COLUMN_TYPE};

use crate::delimiter::resolve_delimiter;

/// Synthesized name for the column at a 1-based position.
fn synthetic_name(position: usize) -> String {
    format!("c{position}")
}

/// Owned schema state produced by the bootstrap pass and assigned once.
struct Bootstrap {
    names: Vec<String>,
    pre_read: Vec<Vec<String>>,
}

/// Tabular-input adapter over a delimited byte stream.
///
/// The underlying stream is borrowed for the adapter's lifetime but never
/// closed by it; single-threaded, blocking reads throughout.
pub struct CsvReader<R: Read> {
    reader: csv::Reader<R>,
    names: Vec<String>,
    pre_read: Vec<Vec<String>>,
    // Scratch record reused across reads to avoid per-row allocation.
    record: StringRecord,
}

impl<R: Read> CsvReader<R> {
    /// Construct the adapter and run the skip/header/look-ahead bootstrap
    /// eagerly against `stream`.
    pub fn new(stream: R, options: &ReadOptions) -> Result<Self> {
        let sep = resolve_delimiter(&options.delimiter)?;

        let mut builder = ReaderBuilder::new();
        builder
            .has_headers(false)
            .flexible(true)
            .trim(Trim::Fields);
        if let Some(sep) = sep {
            builder.delimiter(sep);
        }

        let mut reader = CsvReader {
            reader: builder.from_reader(stream),
            names: Vec::new(),
            pre_read: Vec::new(),
            record: StringRecord::new(),
        };

        let Bootstrap { names, pre_read } = reader.bootstrap(options)?;
        reader.names = names;
        reader.pre_read = pre_read;
        Ok(reader)
    }

    fn bootstrap(&mut self, options: &ReadOptions) -> Result<Bootstrap> {
        // Skip phase: best effort, any failure (end of stream included) is
        // logged and ends the phase without aborting construction.
        let mut throwaway: Row = vec![None];
        for _ in 0..options.skip_rows {
            match self.read_row(&mut throwaway) {
                Ok(()) => tracing::debug!(row = ?throwaway, "skipped row"),
                Err(err) => {
                    tracing::warn!("skip error: {err}");
                    break;
                }
            }
        }

        let mut names: Vec<String> = Vec::new();
        let mut budget = options.pre_read_rows;

        // Header phase: end of stream here means "no header content", any
        // other failure is fatal. The consumed row counts against the
        // look-ahead budget.
        if options.has_header {
            if self.reader.read_record(&mut self.record)? {
                names = self
                    .record
                    .iter()
                    .enumerate()
                    .map(|(i, cell)| {
                        if cell.is_empty() {
                            synthetic_name(i + 1)
                        } else {
                            cell.to_string()
                        }
                    })
                    .collect();
            }
            budget = budget.saturating_sub(1);
        }

        // Look-ahead phase: materialize up to `budget` rows, widening the
        // name set when a row is wider than anything seen so far. Names only
        // grow, never shrink and never rename.
        let mut pre_read = Vec::with_capacity(budget);
        for _ in 0..budget {
            if !self.reader.read_record(&mut self.record)? {
                break;
            }
            let row: Vec<String> = self.record.iter().map(str::to_string).collect();
            for i in names.len()..row.len() {
                names.push(synthetic_name(i + 1));
            }
            pre_read.push(row);
        }

        Ok(Bootstrap { names, pre_read })
    }

    /// Current column names. Fails with `NoRowsSeen` when the stream was
    /// empty through both the header and look-ahead phases.
    pub fn names(&self) -> Result<&[String]> {
        if self.names.is_empty() {
            return Err(Error::NoRowsSeen);
        }
        Ok(&self.names)
    }

    /// One default type tag per current column name, recomputed per call.
    /// Delimited text carries no type information.
    pub fn types(&self) -> Result<Vec<String>> {
        Ok(vec![DEFAULT_COLUMN_TYPE.to_string(); self.names.len()])
    }

    /// The look-ahead sample, each row padded with nulls to the current
    /// (possibly widened) column-name count.
    pub fn pre_read_rows(&self) -> Vec<Row> {
        self.pre_read
            .iter()
            .map(|raw| (0..self.names.len()).map(|i| raw.get(i).cloned()).collect())
            .collect()
    }

    /// Read one row into `row`, normalized positionally to `row.len()`:
    /// cells present at `i` are copied, missing trailing cells become
    /// `None`, cells at or beyond `row.len()` are silently dropped. No
    /// realignment by name ever happens.
    ///
    /// End of input is reported as `StreamExhausted`; other tokenizer or
    /// stream failures propagate unchanged.
    pub fn read_row(&mut self, row: &mut [Option<String>]) -> Result<()> {
        if !self.reader.read_record(&mut self.record)? {
            return Err(Error::StreamExhausted);
        }
        for (i, cell) in row.iter_mut().enumerate() {
            *cell = self.record.get(i).map(str::to_string);
        }
        Ok(())
    }
}

impl CsvReader<Box<dyn Read + Send>> {
    /// Construct from a possibly-absent dynamic stream, as handed over by
    /// engines whose input may not have been opened. `None` fails with
    /// `NilStream`.
    pub fn from_stream(
        stream: Option<Box<dyn Read + Send>>,
        options: &ReadOptions,
    ) -> Result<Self> {
        let stream = stream.ok_or(Error::NilStream)?;
        Self::new(stream, options)
    }
}

impl<R: Read> TabularReader for CsvReader<R> {
    fn names(&self) -> Result<&[String]> {
        CsvReader::names(self)
    }

    fn types(&self) -> Result<Vec<String>> {
        CsvReader::types(self)
    }

    fn pre_read_rows(&self) -> Vec<Row> {
        CsvReader::pre_read_rows(self)
    }

    fn read_row(&mut self, row: &mut [Option<String>]) -> Result<()> {
        CsvReader::read_row(self, row)
    }
}
