//! Parser for car record lines.
//!
//! Each input line carries five whitespace-separated fields:
//!
//! ```text
//! carID model manufacturer quantity price
//! ```
//!
//! Parsing never fails. Correctness is the validator's job, so the parser
//! fills in whatever it can and leaves the rest at [`CarRecord::default`]:
//!
//! - Missing trailing tokens leave their fields at the default value.
//! - Tokens after the fifth are ignored.
//! - A numeric token that does not parse in full stops extraction. That field
//!   and every field after it keep their defaults.
//! - A price that parses to a non-finite value (`inf`, `NaN`) is rejected.
//!
//! # Example
//!
//! ```rust
//! use records_parser::parse_line;
//!
//! let record = parse_line("AB12CD Corolla Toyota 7 19999.99");
//! assert_eq!(record.car_id, "AB12CD");
//! assert_eq!(record.model, "Corolla");
//! assert_eq!(record.quantity, 7);
//! assert_eq!(record.price, 19999.99);
//!
//! // Short lines are not rejected here
//! let partial = parse_line("AB12CD Corolla");
//! assert_eq!(partial.manufacturer, "");
//! assert_eq!(partial.price, 0.0);
//! ```

use records_core::CarRecord;
use std::str::FromStr;
use tracing::debug;

/// Number of fields in a complete record line.
pub const FIELD_COUNT: usize = 5;

/// Parses one input line into a candidate record.
pub fn parse_line(line: &str) -> CarRecord {
    let tokens: Vec<&str> = line.split_whitespace().take(FIELD_COUNT).collect();
    if tokens.len() < FIELD_COUNT {
        debug!(
            "Line has {} of {} fields, leaving the rest unset: {:?}",
            tokens.len(),
            FIELD_COUNT,
            line
        );
    }

    let text = |index: usize| tokens.get(index).map(|t| t.to_string()).unwrap_or_default();
    let mut record = CarRecord {
        car_id: text(0),
        model: text(1),
        manufacturer: text(2),
        ..Default::default()
    };

    let Some(quantity) = tokens.get(3).and_then(|t| parse_number::<i32>(t, "quantity")) else {
        return record;
    };
    record.quantity = quantity;

    if let Some(price) = tokens.get(4).and_then(|t| parse_price(t)) {
        record.price = price;
    }

    record
}

fn parse_price(token: &str) -> Option<f64> {
    let price = parse_number::<f64>(token, "price")?;
    if !price.is_finite() {
        debug!("Rejected non-finite price token '{}'", token);
        return None;
    }
    Some(price)
}

fn parse_number<T: FromStr>(token: &str, field: &str) -> Option<T> {
    match token.parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            debug!("Rejected {} token '{}'", field, token);
            None
        }
    }
}
