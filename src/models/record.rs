use chrono::NaiveDate;
use std::fmt;
use std::fmt::{Display, Formatter};

/// The date shapes a record may carry, in the order they are tried
const DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d", "%Y.%m.%d", "%Y/%m/%d", "%d-%m-%Y", "%d.%m.%Y", "%d/%m/%Y",
];

/// A fuel price quotation: the fuel type, the quotation date and the price
///
/// A record always carries all three fields. When the source line misses
/// a field, the text fields stay empty and the price stays at zero, there
/// is no separate "absent" state.
///
/// # Examples
/// ```rust
/// use gasolina::models::FuelRecord;
///
/// let record = FuelRecord::new("AI-95".to_string(), "2024-05-01".to_string(), 56.7);
/// assert_eq!(record.fuel_type(), "AI-95");
/// assert_eq!(format!("{}", record), "Fuel type: AI-95 Date: 2024-05-01 Price: 56.70");
///
/// // Both date shapes are readable as calendar dates
/// let record = FuelRecord::new("DT".to_string(), "15.03.2023".to_string(), 45.99);
/// assert!(record.parsed_date().is_some());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FuelRecord {
    fuel_type: String,
    date: String,
    price: f64,
}

impl FuelRecord {
    pub fn new(fuel_type: String, date: String, price: f64) -> FuelRecord {
        FuelRecord {
            fuel_type,
            date,
            price,
        }
    }

    pub fn fuel_type(&self) -> &str {
        &self.fuel_type
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// The quotation date as a calendar date, if the date text reads as one
    ///
    /// Accepts both `YYYY-MM-DD` and `DD-MM-YYYY` with `-`, `.` or `/` as
    /// the separator. Date text that matches neither shape (or names an
    /// impossible day) yields `None`.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(&self.date, format).ok())
    }
}

impl Display for FuelRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Fuel type: {} Date: {} Price: {:.2}",
            self.fuel_type, self.date, self.price
        )
    }
}
