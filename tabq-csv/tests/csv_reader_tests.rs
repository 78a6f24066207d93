use std::fs::File;
use std::io::Write;

use tabq_csv::CsvReader;
use tabq_result::Error;
use tabq_types::{ReadOptions, Row};
use tempfile::NamedTempFile;

// Linked for its ctor-based tracing init.
use tabq_test_utils as _;

fn write_fixture(contents: &str) -> NamedTempFile {
    let mut tmp = NamedTempFile::new().expect("create tmp csv");
    tmp.write_all(contents.as_bytes()).unwrap();
    tmp
}

fn open_fixture(contents: &str, options: &ReadOptions) -> CsvReader<File> {
    let tmp = write_fixture(contents);
    let file = File::open(tmp.path()).expect("open tmp csv");
    CsvReader::new(file, options).expect("construct reader")
}

fn cells(row: &[&str]) -> Row {
    row.iter().map(|c| Some(c.to_string())).collect()
}

#[test]
fn header_with_blank_cell_gets_synthesized_name() {
    let mut reader = open_fixture(
        "a,,c\n1,2,3\n4,5\n6,7,8\n",
        &ReadOptions {
            has_header: true,
            pre_read_rows: 3,
            ..Default::default()
        },
    );

    assert_eq!(reader.names().unwrap(), ["a", "c2", "c"]);
    assert_eq!(
        reader.pre_read_rows(),
        vec![
            cells(&["1", "2", "3"]),
            vec![Some("4".to_string()), Some("5".to_string()), None],
        ]
    );

    // Streaming picks up at the row after the look-ahead sample.
    let mut row: Row = vec![None; 3];
    reader.read_row(&mut row).unwrap();
    assert_eq!(row, cells(&["6", "7", "8"]));
    assert!(reader.read_row(&mut row).unwrap_err().is_exhausted());
}

#[test]
fn header_consumes_one_look_ahead_slot() {
    let mut reader = open_fixture(
        "h1,h2\n1,2\n3,4\n",
        &ReadOptions {
            has_header: true,
            pre_read_rows: 1,
            ..Default::default()
        },
    );

    assert_eq!(reader.names().unwrap(), ["h1", "h2"]);
    assert!(reader.pre_read_rows().is_empty());

    let mut row: Row = vec![None; 2];
    reader.read_row(&mut row).unwrap();
    assert_eq!(row, cells(&["1", "2"]));
}

#[test]
fn skipped_rows_are_absent_from_header_and_sample() {
    let mut reader = open_fixture(
        "junk line\nmore junk\na,b\n1,2\n",
        &ReadOptions {
            has_header: true,
            skip_rows: 2,
            pre_read_rows: 1,
            ..Default::default()
        },
    );

    assert_eq!(reader.names().unwrap(), ["a", "b"]);
    assert!(reader.pre_read_rows().is_empty());

    let mut row: Row = vec![None; 2];
    reader.read_row(&mut row).unwrap();
    assert_eq!(row, cells(&["1", "2"]));
}

#[test]
fn skipping_past_end_of_stream_is_not_fatal() {
    let mut reader = open_fixture(
        "only\n",
        &ReadOptions {
            skip_rows: 5,
            pre_read_rows: 0,
            ..Default::default()
        },
    );

    assert!(matches!(reader.names(), Err(Error::NoRowsSeen)));

    let mut row: Row = vec![None; 1];
    assert!(reader.read_row(&mut row).unwrap_err().is_exhausted());
}

#[test]
fn look_ahead_widens_names_for_trailing_positions_only() {
    let reader = open_fixture(
        "a,b\n1,2,3,4\n",
        &ReadOptions {
            pre_read_rows: 2,
            ..Default::default()
        },
    );

    assert_eq!(reader.names().unwrap(), ["c1", "c2", "c3", "c4"]);
    assert_eq!(
        reader.pre_read_rows(),
        vec![
            vec![Some("a".to_string()), Some("b".to_string()), None, None],
            cells(&["1", "2", "3", "4"]),
        ]
    );
}

#[test]
fn header_names_survive_widening() {
    let reader = open_fixture(
        "x\n1,2,3\n",
        &ReadOptions {
            has_header: true,
            pre_read_rows: 2,
            ..Default::default()
        },
    );

    assert_eq!(reader.names().unwrap(), ["x", "c2", "c3"]);
}

#[test]
fn read_row_normalizes_to_buffer_width() {
    let mut reader = open_fixture(
        "1,2,3\n4,5\n6,7,8,9\n",
        &ReadOptions {
            pre_read_rows: 0,
            ..Default::default()
        },
    );

    let mut row: Row = vec![None; 3];

    reader.read_row(&mut row).unwrap();
    assert_eq!(row, cells(&["1", "2", "3"]));

    // Narrow record: trailing positions become null.
    reader.read_row(&mut row).unwrap();
    assert_eq!(row, vec![Some("4".to_string()), Some("5".to_string()), None]);

    // Wide record: the excess is silently dropped.
    reader.read_row(&mut row).unwrap();
    assert_eq!(row, cells(&["6", "7", "8"]));

    assert!(reader.read_row(&mut row).unwrap_err().is_exhausted());
}

#[test]
fn types_report_one_fixed_default_per_column() {
    let reader = open_fixture(
        "id,price,comment\n1,2.5,deep\n",
        &ReadOptions {
            has_header: true,
            pre_read_rows: 2,
            ..Default::default()
        },
    );

    assert_eq!(reader.types().unwrap(), ["text", "text", "text"]);
}

#[test]
fn skip_without_look_ahead_reports_no_rows_seen() {
    let mut reader = open_fixture(
        "x\n1,2\n",
        &ReadOptions {
            skip_rows: 1,
            pre_read_rows: 0,
            ..Default::default()
        },
    );

    // No header and no sample: the adapter has no names to report, but
    // streaming still works for a caller that sizes its own rows.
    assert!(matches!(reader.names(), Err(Error::NoRowsSeen)));

    let mut row: Row = vec![None; 2];
    reader.read_row(&mut row).unwrap();
    assert_eq!(row, cells(&["1", "2"]));
}

#[test]
fn tab_delimiter_spec_is_unescaped() {
    let mut reader = open_fixture(
        "a\tb\n1\t2\n",
        &ReadOptions {
            delimiter: "\\t".to_string(),
            has_header: true,
            pre_read_rows: 1,
            ..Default::default()
        },
    );

    assert_eq!(reader.names().unwrap(), ["a", "b"]);

    let mut row: Row = vec![None; 2];
    reader.read_row(&mut row).unwrap();
    assert_eq!(row, cells(&["1", "2"]));
}

#[test]
fn invalid_delimiter_spec_aborts_construction() {
    let tmp = write_fixture("a,b\n");
    let file = File::open(tmp.path()).unwrap();
    let err = CsvReader::new(
        file,
        &ReadOptions {
            delimiter: "\\q".to_string(),
            ..Default::default()
        },
    )
    .err()
    .expect("construction should fail");

    match err {
        Error::InvalidDelimiterSpec { fallback, .. } => assert_eq!(fallback, b','),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn tokenizer_is_lenient_about_quoting_and_whitespace() {
    let reader = open_fixture(
        " a , b\n\"x,y\",z\n",
        &ReadOptions {
            has_header: true,
            pre_read_rows: 2,
            ..Default::default()
        },
    );

    assert_eq!(reader.names().unwrap(), ["a", "b"]);
    assert_eq!(reader.pre_read_rows(), vec![cells(&["x,y", "z"])]);
}
