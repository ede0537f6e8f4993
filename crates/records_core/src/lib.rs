//! # Car Records Core
//!
//! Core data structures and types for the Car Records Engine.
//!
//! The engine reads whitespace-separated car records from a flat file, checks
//! every record against a fixed set of field-format rules and splits the input
//! into an in-memory collection of valid records and an error log of rejected
//! lines. This crate holds the pieces every other crate shares.
//!
//! ## Key Concepts
//!
//! - **CarRecord**: One car entry (ID, model, manufacturer, quantity, price)
//! - **Violation**: A single failed field rule with its human-readable message
//! - **ValidationOutcome**: Ordered violations for one record, empty iff valid
//! - **RecordsConfig**: Limits and file locations used by the pipeline
//!
//! ## Example
//!
//! ```rust
//! use records_core::{CarRecord, ValidationOutcome, Violation};
//!
//! let record = CarRecord::new("AB12CD", "Camry", "Toyota", 4, 18500.0);
//! assert_eq!(record.car_id, "AB12CD");
//!
//! let outcome = ValidationOutcome::from_violations(vec![Violation::NegativeQuantity]);
//! assert!(!outcome.is_valid());
//! assert_eq!(outcome.message(), "Quantity cannot be negative; ");
//! ```

pub mod config;
pub mod error;
pub mod outcome;
pub mod record;

pub use config::*;
pub use error::*;
pub use outcome::*;
pub use record::*;
