use colored::*;
use records_core::{CarRecord, RecordsError};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use tracing::warn;

pub const RECORDS_HEADER: &str = "Car ID   Model          Manufacturer   Quantity   Price";
pub const INVALID_HEADER: &str = "Invalid Records:";

/// Writes the valid records as a fixed-width table.
pub fn print_records_table<W: Write>(records: &[CarRecord], out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", RECORDS_HEADER)?;
    for record in records {
        writeln!(out, "{}", format_record_row(record))?;
    }
    Ok(())
}

pub fn format_record_row(record: &CarRecord) -> String {
    format!(
        "{:>10}{:>15}{:>15}{:>15}{:>10.2}",
        record.car_id, record.model, record.manufacturer, record.quantity, record.price
    )
}

/// Streams the error log back line by line.
///
/// Bytes are copied unchanged so the output matches the log exactly. A
/// missing or unreadable log is reported and does not end the session.
pub fn print_invalid_records<W: Write>(error_file: &Path, out: &mut W) -> io::Result<()> {
    let file = match File::open(error_file) {
        Ok(file) => file,
        Err(source) => {
            warn!("{}", RecordsError::error_log_open(error_file, source));
            writeln!(out, "{}", "Error opening error file.".red())?;
            return Ok(());
        }
    };

    writeln!(out, "{}", INVALID_HEADER.bold())?;
    let mut reader = BufReader::new(file);
    let mut line = Vec::new();
    while reader.read_until(b'\n', &mut line)? > 0 {
        if !line.ends_with(b"\n") {
            line.push(b'\n');
        }
        out.write_all(&line)?;
        line.clear();
    }
    Ok(())
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
