//! Validation outcome types.
//!
//! A record is checked against every rule independently; each failed rule
//! contributes one [`Violation`]. The outcome keeps them in rule order and can
//! render the semicolon-separated reason text written to the error log.

use std::fmt;

/// Separator appended after every violation message, including the last.
pub const MESSAGE_SEPARATOR: &str = "; ";

/// A single failed field rule.
///
/// Variants are declared in the order the rules are evaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    /// Car ID does not have the expected number of characters
    IdLength,

    /// Positions 1-2 of the car ID are not letters, or one is 'O'
    IdPrefix,

    /// Positions 3-4 of the car ID are not decimal digits
    IdDigits,

    /// Positions 5-6 of the car ID are not alphanumeric, or one is 'O'
    IdSuffix,

    /// Model is too short or does not start with a letter
    Model {
        /// Minimum number of characters
        min_length: usize,
    },

    /// Quantity is below zero
    NegativeQuantity,

    /// Price is not strictly above the floor
    PriceTooLow {
        /// Price floor in dollars
        floor: f64,
    },
}

impl Violation {
    /// Short machine-friendly code for the violated rule.
    pub fn code(&self) -> &'static str {
        match self {
            Violation::IdLength => "id_length",
            Violation::IdPrefix => "id_prefix",
            Violation::IdDigits => "id_digits",
            Violation::IdSuffix => "id_suffix",
            Violation::Model { .. } => "model",
            Violation::NegativeQuantity => "quantity",
            Violation::PriceTooLow { .. } => "price",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::IdLength => write!(f, "Invalid ID length"),
            Violation::IdPrefix => {
                write!(f, "ID must start with two alphabetic characters (no 'O')")
            }
            Violation::IdDigits => write!(f, "ID must contain two digits at positions 3 and 4"),
            Violation::IdSuffix => write!(
                f,
                "ID must contain two alphanumeric characters (no 'O') at positions 5 and 6"
            ),
            Violation::Model { min_length } => write!(
                f,
                "Model must be at least {} characters long and start with an alphabetic character",
                min_length
            ),
            Violation::NegativeQuantity => write!(f, "Quantity cannot be negative"),
            Violation::PriceTooLow { floor } => {
                write!(f, "Price must be above {}", format_currency(*floor))
            }
        }
    }
}

/// Result of checking one record against every rule.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationOutcome {
    violations: Vec<Violation>,
}

impl ValidationOutcome {
    /// Creates a passing outcome.
    pub fn valid() -> Self {
        Self::default()
    }

    /// Creates an outcome from violations collected in rule order.
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// Returns true if no rule was violated.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violated rules, in evaluation order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Renders every violation followed by `"; "`.
    ///
    /// Returns an empty string for a valid outcome.
    pub fn message(&self) -> String {
        self.violations
            .iter()
            .map(|v| format!("{}{}", v, MESSAGE_SEPARATOR))
            .collect()
    }
}

/// Counters collected while partitioning an input file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartitionStats {
    /// Number of input lines consumed
    pub lines_read: usize,

    /// Lines that produced a valid record
    pub valid: usize,

    /// Lines written to the error log
    pub invalid: usize,

    /// Whether reading stopped because the valid collection was full
    pub capacity_reached: bool,
}

/// Formats a dollar amount with thousands separators and two decimals.
///
/// ```rust
/// use records_core::format_currency;
///
/// assert_eq!(format_currency(11400.0), "$11,400.00");
/// assert_eq!(format_currency(999.5), "$999.50");
/// ```
pub fn format_currency(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount.is_sign_negative() && amount != 0.0 {
        "-"
    } else {
        ""
    };
    format!("{}${}.{}", sign, grouped, cents)
}
