use crate::output;
use colored::*;
use records_core::CarRecord;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::debug;

pub const MENU_TEXT: &str = "\nMenu:\n1. Print all valid car records\n2. Print invalid car records\n3. Quit\n";
pub const PROMPT: &str = "Enter your choice: ";
pub const INVALID_CHOICE: &str = "Invalid choice. Please try again.";
pub const EXIT_MESSAGE: &str = "Exiting the program.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    PrintAll = 1,
    PrintInvalid = 2,
    Quit = 3,
}

impl MenuOption {
    /// Maps a menu number to its option.
    pub fn from_number(number: i64) -> Option<Self> {
        match number {
            1 => Some(MenuOption::PrintAll),
            2 => Some(MenuOption::PrintInvalid),
            3 => Some(MenuOption::Quit),
            _ => None,
        }
    }
}

/// What a line of console input asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Choice(MenuOption),
    /// Non-numeric or out of range
    Invalid,
    /// Whitespace only; keep waiting
    Blank,
}

pub fn parse_selection(line: &str) -> Selection {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Selection::Blank;
    }

    match trimmed.parse::<i64>().ok().and_then(MenuOption::from_number) {
        Some(option) => Selection::Choice(option),
        None => Selection::Invalid,
    }
}

/// How the session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Quit,
    EndOfInput,
}

/// Interactive loop over the partitioned records.
pub struct MenuSession<'a> {
    records: &'a [CarRecord],
    error_file: &'a Path,
}

impl<'a> MenuSession<'a> {
    pub fn new(records: &'a [CarRecord], error_file: &'a Path) -> Self {
        Self {
            records,
            error_file,
        }
    }

    /// Runs the menu until the user quits or `input` is exhausted.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, out: &mut W) -> io::Result<SessionEnd> {
        let mut buf = Vec::new();

        loop {
            write!(out, "{}{}", MENU_TEXT, PROMPT)?;
            out.flush()?;

            // Undecodable bytes become U+FFFD and read as an invalid choice.
            let selection = loop {
                buf.clear();
                if input.read_until(b'\n', &mut buf)? == 0 {
                    debug!("Console input closed");
                    writeln!(out)?;
                    return Ok(SessionEnd::EndOfInput);
                }
                match parse_selection(&String::from_utf8_lossy(&buf)) {
                    Selection::Blank => continue,
                    selection => break selection,
                }
            };

            match selection {
                Selection::Choice(MenuOption::PrintAll) => {
                    output::print_records_table(self.records, out)?;
                }
                Selection::Choice(MenuOption::PrintInvalid) => {
                    output::print_invalid_records(self.error_file, out)?;
                }
                Selection::Choice(MenuOption::Quit) => {
                    writeln!(out, "{}", EXIT_MESSAGE)?;
                    return Ok(SessionEnd::Quit);
                }
                Selection::Invalid | Selection::Blank => {
                    debug!(
                        "Discarding menu input {:?}",
                        String::from_utf8_lossy(&buf).trim_end()
                    );
                    writeln!(out, "{}", INVALID_CHOICE.yellow())?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn run_session(
        records: &[CarRecord],
        error_file: &Path,
        input: impl AsRef<[u8]>,
    ) -> (SessionEnd, String) {
        let mut out = Vec::new();
        let end = MenuSession::new(records, error_file)
            .run(input.as_ref(), &mut out)
            .unwrap();
        (end, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("1\n"), Selection::Choice(MenuOption::PrintAll));
        assert_eq!(parse_selection("  2  "), Selection::Choice(MenuOption::PrintInvalid));
        assert_eq!(parse_selection("3"), Selection::Choice(MenuOption::Quit));
        assert_eq!(parse_selection("4"), Selection::Invalid);
        assert_eq!(parse_selection("0"), Selection::Invalid);
        assert_eq!(parse_selection("-1"), Selection::Invalid);
        assert_eq!(parse_selection("abc"), Selection::Invalid);
        assert_eq!(parse_selection("1abc"), Selection::Invalid);
        assert_eq!(parse_selection("99999999999999999999"), Selection::Invalid);
        assert_eq!(parse_selection(" \n"), Selection::Blank);
    }

    #[test]
    fn test_quit_immediately() {
        let (end, text) = run_session(&[], Path::new("unused.txt"), "3\n");
        assert_eq!(end, SessionEnd::Quit);
        assert_eq!(text, format!("{}{}{}\n", MENU_TEXT, PROMPT, EXIT_MESSAGE));
    }

    #[test]
    fn test_non_numeric_input_reprompts() {
        let (end, text) = run_session(&[], Path::new("unused.txt"), "abc\n3\n");
        assert_eq!(end, SessionEnd::Quit);
        assert!(text.contains(INVALID_CHOICE));
        assert_eq!(text.matches(PROMPT).count(), 2);
        assert!(text.ends_with(&format!("{}\n", EXIT_MESSAGE)));
    }

    #[test]
    fn test_out_of_range_reprompts() {
        let (_, text) = run_session(&[], Path::new("unused.txt"), "7\n3\n");
        assert!(text.contains(INVALID_CHOICE));
        assert_eq!(text.matches(PROMPT).count(), 2);
    }

    #[test]
    fn test_non_utf8_input_reprompts() {
        let (end, text) = run_session(&[], Path::new("unused.txt"), b"\xff\xfe\n3\n");
        assert_eq!(end, SessionEnd::Quit);
        assert!(text.contains(INVALID_CHOICE));
        assert_eq!(text.matches(PROMPT).count(), 2);
    }

    #[test]
    fn test_blank_lines_do_not_reprompt() {
        let (_, text) = run_session(&[], Path::new("unused.txt"), "\n\n3\n");
        assert!(!text.contains(INVALID_CHOICE));
        assert_eq!(text.matches(PROMPT).count(), 1);
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let (end, text) = run_session(&[], Path::new("unused.txt"), "1\n");
        assert_eq!(end, SessionEnd::EndOfInput);
        assert_eq!(text.matches(PROMPT).count(), 2);
    }

    #[test]
    fn test_print_all_then_invalid() {
        let dir = TempDir::new().unwrap();
        let error_file = dir.path().join("invalid_records.txt");
        fs::write(&error_file, "bad   Invalid ID length; \n").unwrap();
        let records = vec![CarRecord::new("AB12CD", "Camry", "Toyota", 4, 18500.0)];

        let (end, text) = run_session(&records, &error_file, "1\n2\n3\n");

        assert_eq!(end, SessionEnd::Quit);
        assert!(text.contains(output::RECORDS_HEADER));
        assert!(text.contains("    AB12CD          Camry         Toyota              4  18500.00\n"));
        assert!(text.contains(output::INVALID_HEADER));
        assert!(text.contains("\nbad   Invalid ID length; \n"));
    }

    #[test]
    fn test_missing_error_file_keeps_session_alive() {
        let dir = TempDir::new().unwrap();
        let (end, text) = run_session(&[], &dir.path().join("gone.txt"), "2\n3\n");
        assert_eq!(end, SessionEnd::Quit);
        assert!(text.contains("Error opening error file."));
        assert_eq!(text.matches(PROMPT).count(), 2);
    }
}
