//! Record validation engine.
//!
//! [`RecordValidator`] runs every field rule against a record and collects the
//! failures into a [`ValidationOutcome`].

use crate::rules;
use records_core::{CarRecord, RecordsConfig, ValidationOutcome};

/// Checks car records against the configured field rules.
///
/// The validator only holds immutable limits, so validating the same record
/// any number of times yields the same outcome.
///
/// # Example
///
/// ```rust
/// use records_core::{CarRecord, RecordsConfig};
/// use records_validator::RecordValidator;
///
/// let validator = RecordValidator::new(&RecordsConfig::default());
///
/// let good = CarRecord::new("AB12CD", "Camry", "Toyota", 4, 18500.0);
/// assert!(validator.validate(&good).is_valid());
///
/// let bad = CarRecord::new("ZK1234B", "Civic", "Honda", 12, 8000.0);
/// let outcome = validator.validate(&bad);
/// assert_eq!(
///     outcome.message(),
///     "Invalid ID length; Price must be above $11,400.00; "
/// );
/// ```
#[derive(Debug, Clone)]
pub struct RecordValidator {
    id_length: usize,
    min_model_length: usize,
    price_floor: f64,
}

impl RecordValidator {
    /// Creates a validator using the limits in `config`.
    pub fn new(config: &RecordsConfig) -> Self {
        Self {
            id_length: config.id_length,
            min_model_length: config.min_model_length,
            price_floor: config.price_floor,
        }
    }

    /// Validates a record against all seven rules.
    ///
    /// Rules do not short-circuit: every failure is reported, in rule order.
    pub fn validate(&self, record: &CarRecord) -> ValidationOutcome {
        let mut violations = rules::check_car_id(record, self.id_length);
        violations.extend(
            [
                rules::check_model(&record.model, self.min_model_length),
                rules::check_quantity(record.quantity),
                rules::check_price(record.price, self.price_floor),
            ]
            .into_iter()
            .flatten(),
        );

        ValidationOutcome::from_violations(violations)
    }
}

impl Default for RecordValidator {
    fn default() -> Self {
        Self::new(&RecordsConfig::default())
    }
}
