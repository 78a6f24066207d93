use std::env;
use std::error::Error;
use std::fs::File;
use std::path::PathBuf;

use tabq_csv::CsvReader;
use tabq_types::{ReadOptions, Row};

fn print_row(row: &[Option<String>]) {
    let cells: Vec<&str> = row.iter().map(|c| c.as_deref().unwrap_or("NULL")).collect();
    println!("{}", cells.join(" | "));
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let path = match args.next() {
        Some(p) => PathBuf::from(p),
        None => {
            eprintln!("Usage: stream_rows <path-to-csv>");
            std::process::exit(2);
        }
    };

    let file = File::open(&path)?;
    let options = ReadOptions {
        has_header: true,
        pre_read_rows: 10,
        ..Default::default()
    };

    let mut reader = CsvReader::new(file, &options)?;
    let width = reader.names()?.len();
    println!("columns: {}", reader.names()?.join(", "));

    for row in reader.pre_read_rows() {
        print_row(&row);
    }

    // Stream the remainder of the input into a reused caller-owned buffer.
    let mut row: Row = vec![None; width];
    loop {
        match reader.read_row(&mut row) {
            Ok(()) => print_row(&row),
            Err(err) if err.is_exhausted() => break,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}
