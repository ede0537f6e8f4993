//! Field rule checks.
//!
//! Each rule inspects one aspect of a record and reports at most one
//! [`Violation`]. Rules never depend on each other, so a record can fail any
//! combination of them.
//!
//! Positional ID rules look at character pairs (1-2, 3-4, 5-6). A pair that
//! does not exist because the ID is too short fails its rule.

use records_core::{CarRecord, Violation};
use std::cmp::Ordering;

/// Letter excluded from the ID prefix and suffix so it is never confused with zero.
pub const EXCLUDED_ID_LETTER: char = 'O';

/// Checks that the car ID has exactly `expected` characters.
pub fn check_id_length(car_id: &str, expected: usize) -> Option<Violation> {
    (car_id.chars().count() != expected).then_some(Violation::IdLength)
}

/// Checks that ID positions 1-2 are letters other than 'O'.
pub fn check_id_prefix(car_id: &str) -> Option<Violation> {
    let ok = pair_satisfies(car_id, 0, |c| {
        c.is_ascii_alphabetic() && c != EXCLUDED_ID_LETTER
    });
    (!ok).then_some(Violation::IdPrefix)
}

/// Checks that ID positions 3-4 are decimal digits.
pub fn check_id_digits(car_id: &str) -> Option<Violation> {
    let ok = pair_satisfies(car_id, 2, |c| c.is_ascii_digit());
    (!ok).then_some(Violation::IdDigits)
}

/// Checks that ID positions 5-6 are letters or digits other than 'O'.
pub fn check_id_suffix(car_id: &str) -> Option<Violation> {
    let ok = pair_satisfies(car_id, 4, |c| {
        c.is_ascii_alphanumeric() && c != EXCLUDED_ID_LETTER
    });
    (!ok).then_some(Violation::IdSuffix)
}

/// Checks that the model has at least `min_length` characters and starts with a letter.
pub fn check_model(model: &str, min_length: usize) -> Option<Violation> {
    let long_enough = model.chars().count() >= min_length;
    let starts_with_letter = model
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic());

    (!(long_enough && starts_with_letter)).then_some(Violation::Model { min_length })
}

/// Checks that the quantity is not negative.
pub fn check_quantity(quantity: i32) -> Option<Violation> {
    (quantity < 0).then_some(Violation::NegativeQuantity)
}

/// Checks that the price is strictly above `floor`.
///
/// NaN never passes.
pub fn check_price(price: f64, floor: f64) -> Option<Violation> {
    match price.partial_cmp(&floor) {
        Some(Ordering::Greater) => None,
        _ => Some(Violation::PriceTooLow { floor }),
    }
}

/// Runs the four car ID rules in order.
pub fn check_car_id(record: &CarRecord, expected_length: usize) -> Vec<Violation> {
    let id = record.car_id.as_str();
    [
        check_id_length(id, expected_length),
        check_id_prefix(id),
        check_id_digits(id),
        check_id_suffix(id),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Returns true if the characters at `start` and `start + 1` both exist and
/// satisfy `predicate`.
fn pair_satisfies(value: &str, start: usize, predicate: impl Fn(char) -> bool) -> bool {
    let mut pair = value.chars().skip(start).take(2);
    match (pair.next(), pair.next()) {
        (Some(first), Some(second)) => predicate(first) && predicate(second),
        _ => false,
    }
}
