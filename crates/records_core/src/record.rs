//! Car record type.

/// A single car entry read from the input file.
///
/// The same type represents both an unvalidated candidate freshly parsed from
/// a line and a valid record that passed every rule. Records have no identity
/// beyond their own fields and are copied into the valid collection.
///
/// # Example
///
/// ```rust
/// use records_core::CarRecord;
///
/// let record = CarRecord::new("KL45M9", "Accord", "Honda", 3, 21000.0);
/// assert_eq!(record.quantity, 3);
///
/// // Fields left unset by a short input line keep these defaults
/// let empty = CarRecord::default();
/// assert!(empty.car_id.is_empty());
/// assert_eq!(empty.price, 0.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarRecord {
    /// Six character car identifier (e.g. "AB12CD")
    pub car_id: String,

    /// Model name
    pub model: String,

    /// Manufacturer name
    pub manufacturer: String,

    /// Units in stock
    pub quantity: i32,

    /// Unit price in dollars
    pub price: f64,
}

impl CarRecord {
    /// Creates a record from its five fields.
    pub fn new(
        car_id: impl Into<String>,
        model: impl Into<String>,
        manufacturer: impl Into<String>,
        quantity: i32,
        price: f64,
    ) -> Self {
        Self {
            car_id: car_id.into(),
            model: model.into(),
            manufacturer: manufacturer.into(),
            quantity,
            price,
        }
    }
}
