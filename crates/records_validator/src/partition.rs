//! Partitioning of input lines into valid records and an error log.

use crate::RecordValidator;
use records_core::{CarRecord, PartitionStats, RecordsConfig, RecordsError, Result};
use records_parser::parse_line;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

/// Gap between the raw line and the reason text in the error log.
pub const ERROR_LOG_GAP: &str = "   ";

/// Valid records plus counters from one partitioning run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition {
    /// Valid records, in input order
    pub records: Vec<CarRecord>,

    /// Line counters
    pub stats: PartitionStats,
}

/// Splits input lines into valid records and logged rejects.
///
/// # Example
///
/// ```rust
/// use records_core::RecordsConfig;
/// use records_validator::Partitioner;
///
/// let input = "AB12CD Camry Toyota 4 18500.00\nZK1234B Civic Honda 12 8000.00\n";
/// let mut error_log = Vec::new();
///
/// let partitioner = Partitioner::new(&RecordsConfig::default());
/// let partition = partitioner.partition(input.as_bytes(), &mut error_log).unwrap();
///
/// assert_eq!(partition.records.len(), 1);
/// assert_eq!(
///     String::from_utf8(error_log).unwrap(),
///     "ZK1234B Civic Honda 12 8000.00   Invalid ID length; Price must be above $11,400.00; \n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Partitioner {
    validator: RecordValidator,
    max_records: usize,
}

impl Partitioner {
    /// Creates a partitioner using the limits in `config`.
    pub fn new(config: &RecordsConfig) -> Self {
        Self {
            validator: RecordValidator::new(config),
            max_records: config.max_records,
        }
    }

    /// Parses and validates every line from `reader`.
    ///
    /// Valid records are collected in order. Each invalid line is written to
    /// `error_sink` as the raw line, three spaces and the joined violation
    /// messages. Once `max_records` valid records have been collected no
    /// further line is read.
    ///
    /// Lines are read as bytes. Invalid UTF-8 is decoded lossily for
    /// validation, and the error log keeps the original bytes.
    pub fn partition<R: BufRead, W: Write>(
        &self,
        mut reader: R,
        mut error_sink: W,
    ) -> Result<Partition> {
        let mut partition = Partition::default();
        let mut buf = Vec::new();

        while partition.records.len() < self.max_records {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = strip_line_ending(&buf);
            partition.stats.lines_read += 1;

            let candidate = parse_line(&String::from_utf8_lossy(line));
            let outcome = self.validator.validate(&candidate);

            if outcome.is_valid() {
                partition.records.push(candidate);
                partition.stats.valid += 1;
            } else {
                let codes: Vec<&str> = outcome.violations().iter().map(|v| v.code()).collect();
                debug!(
                    "Line {} rejected: {}",
                    partition.stats.lines_read,
                    codes.join(", ")
                );
                error_sink.write_all(line)?;
                writeln!(error_sink, "{}{}", ERROR_LOG_GAP, outcome.message())?;
                partition.stats.invalid += 1;
            }
        }

        partition.stats.capacity_reached = partition.records.len() >= self.max_records;
        if partition.stats.capacity_reached {
            info!(
                "Valid record capacity of {} reached, remaining input skipped",
                self.max_records
            );
        }

        error_sink.flush()?;
        Ok(partition)
    }

    /// Partitions the file at `input`, writing rejects to `error_log`.
    ///
    /// The error log is created or truncated. Failing to open the input file
    /// is reported as [`RecordsError::InputOpen`].
    pub fn partition_files(&self, input: &Path, error_log: &Path) -> Result<Partition> {
        info!("Reading car records from {}", input.display());

        let input_file =
            File::open(input).map_err(|source| RecordsError::input_open(input, source))?;
        let error_file = File::create(error_log)
            .map_err(|source| RecordsError::error_log_create(error_log, source))?;

        let partition = self.partition(BufReader::new(input_file), BufWriter::new(error_file))?;

        info!(
            "Processed {} lines: {} valid, {} invalid (logged to {})",
            partition.stats.lines_read,
            partition.stats.valid,
            partition.stats.invalid,
            error_log.display()
        );

        Ok(partition)
    }
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

impl Default for Partitioner {
    fn default() -> Self {
        Self::new(&RecordsConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(input: &str, max_records: usize) -> (Partition, String) {
        let config = RecordsConfig::builder()
            .max_records(max_records)
            .build()
            .unwrap();
        let mut sink = Vec::new();
        let partition = Partitioner::new(&config)
            .partition(input.as_bytes(), &mut sink)
            .unwrap();
        (partition, String::from_utf8(sink).unwrap())
    }

    #[test]
    fn test_empty_input() {
        let (partition, log) = run("", 100);
        assert!(partition.records.is_empty());
        assert_eq!(partition.stats, PartitionStats::default());
        assert_eq!(log, "");
    }

    #[test]
    fn test_valid_and_invalid_are_split_in_order() {
        let input = "AB12CD Camry Toyota 4 18500.00\n\
                     OO123A Tucson Hyundai 10 11500.00\n\
                     CD34EF Accord Honda 2 21000.00\n\
                     GH56IJ Golf VW -1 15000.00\n";
        let (partition, log) = run(input, 100);

        let ids: Vec<&str> = partition.records.iter().map(|r| r.car_id.as_str()).collect();
        assert_eq!(ids, vec!["AB12CD", "CD34EF"]);
        assert_eq!(
            log,
            "OO123A Tucson Hyundai 10 11500.00   ID must start with two alphabetic characters (no 'O'); \n\
             GH56IJ Golf VW -1 15000.00   Quantity cannot be negative; \n"
        );
        assert_eq!(partition.stats.lines_read, 4);
        assert_eq!(partition.stats.valid, 2);
        assert_eq!(partition.stats.invalid, 2);
        assert!(!partition.stats.capacity_reached);
    }

    #[test]
    fn test_raw_line_is_logged_verbatim() {
        let input = "  bad   line\twith  spacing  \n";
        let (_, log) = run(input, 100);
        assert!(log.starts_with("  bad   line\twith  spacing     Invalid ID length; "));
    }

    #[test]
    fn test_empty_line_is_a_record() {
        let (partition, log) = run("\n", 100);
        assert_eq!(partition.stats.lines_read, 1);
        assert_eq!(partition.stats.invalid, 1);
        assert!(log.starts_with("   Invalid ID length; "));
    }

    #[test]
    fn test_capacity_stops_reading() {
        let input = "AA11BB Aaaa X 1 20000\n\
                     CC22DD Cccc X 1 20000\n\
                     bad\n\
                     EE33FF Eeee X 1 20000\n";
        let (partition, log) = run(input, 2);

        assert_eq!(partition.records.len(), 2);
        assert_eq!(partition.stats.lines_read, 2);
        assert_eq!(partition.stats.invalid, 0);
        assert!(partition.stats.capacity_reached);
        assert_eq!(log, "");
    }

    #[test]
    fn test_invalid_lines_before_capacity_are_logged() {
        let input = "bad1\nAA11BB Aaaa X 1 20000\nbad2\nbad3\n";
        let (partition, log) = run(input, 1);

        assert_eq!(partition.records.len(), 1);
        assert_eq!(partition.stats.lines_read, 2);
        assert_eq!(log.lines().count(), 1);
        assert!(log.starts_with("bad1   "));
    }

    #[test]
    fn test_counts_add_up() {
        let input = "AA11BB Aaaa X 1 20000\nbad\n\nCC22DD Cccc X 1 100\nDD33EE Dddd X 0 11400.01\n";
        let (partition, log) = run(input, 100);
        let stats = &partition.stats;
        assert_eq!(stats.valid + stats.invalid, stats.lines_read);
        assert_eq!(stats.lines_read, 5);
        assert_eq!(stats.valid, 2);
        assert_eq!(log.lines().count(), stats.invalid);
    }

    #[test]
    fn test_last_line_without_newline() {
        let (partition, log) = run("AA11BB Aaaa X 1 20000\nbad", 100);
        assert_eq!(partition.stats.lines_read, 2);
        assert_eq!(log, "bad   Invalid ID length; \n");
    }

    #[test]
    fn test_latin1_line_is_logged_and_reading_continues() {
        let input: &[u8] = b"AB12CD Camry Toyota 4 18500.00\n\
                             AB12CD Caf\xe9 Renault 4 1000.00\n\
                             CD34EF Accord Honda 2 21000.00\n";
        let mut sink = Vec::new();
        let partition = Partitioner::default().partition(input, &mut sink).unwrap();

        let ids: Vec<&str> = partition.records.iter().map(|r| r.car_id.as_str()).collect();
        assert_eq!(ids, vec!["AB12CD", "CD34EF"]);
        assert_eq!(partition.stats.invalid, 1);
        assert_eq!(
            sink,
            b"AB12CD Caf\xe9 Renault 4 1000.00   Price must be above $11,400.00; \n".to_vec()
        );
    }

    #[test]
    fn test_latin1_model_is_validated_lossily() {
        let input: &[u8] = b"AB12CD Caf\xe9 Renault 4 18500.00\n";
        let mut sink = Vec::new();
        let partition = Partitioner::default().partition(input, &mut sink).unwrap();

        assert_eq!(partition.records.len(), 1);
        assert_eq!(partition.records[0].model, "Caf\u{FFFD}");
        assert!(sink.is_empty());
    }

    #[test]
    fn test_crlf_line_endings_are_stripped() {
        let (partition, log) = run("AA11BB Aaaa X 1 20000\r\nbad\r\n", 100);
        assert_eq!(partition.records.len(), 1);
        assert!(log.starts_with("bad   "));
        assert!(!log.contains('\r'));
    }
}
