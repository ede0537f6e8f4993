//! # Car Records Validator
//!
//! Validation engine for car records. This crate provides:
//!
//! - Field rules for the car ID, model, quantity and price ([`rules`])
//! - [`RecordValidator`], which runs every rule and accumulates violations
//! - [`Partitioner`], which drives the parser and validator over an input
//!   source and splits it into valid records and an error log
//!
//! ## Example
//!
//! ```rust
//! use records_core::{CarRecord, RecordsConfig};
//! use records_validator::RecordValidator;
//!
//! let validator = RecordValidator::new(&RecordsConfig::default());
//! let record = CarRecord::new("OO123A", "Tucson", "Hyundai", 10, 11500.0);
//!
//! let outcome = validator.validate(&record);
//! if !outcome.is_valid() {
//!     println!("Rejected: {}", outcome.message());
//! }
//! ```

mod engine;
mod partition;
pub mod rules;

pub use engine::*;
pub use partition::*;
