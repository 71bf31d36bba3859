//! Parser module
//!
//! The parser turns a record file into [FuelRecord]s. Each non-empty line
//! is one candidate record with its fields in any order:
//! - the fuel type, between double quotes
//! - the quotation date, `2024-05-01` or `01.05.2024` style
//! - the price, with an optional decimal comma or period
//!
//! The fields are extracted by the matcher stages in `stages`, in a fixed
//! order, and every recognized field is cut out of the line before the
//! next search. A missing field is not an error: the record keeps an
//! empty text or a zero price for it.

use std::fs::read_to_string;
use std::path::PathBuf;

use crate::models::FuelRecord;
use crate::{EmptyRecordFileError, Error, MissingFileError};

mod stages;

/// Parses one line into a [FuelRecord]
///
/// Never fails: whatever the stages cannot find stays at its default.
/// The stage order (quotes, then date, then price) is deliberate, it
/// keeps a year inside the date, or digits inside a quoted fuel name,
/// from being read as the price.
pub fn parse_record(line: &str) -> FuelRecord {
    let mut remaining = line.to_string();
    let fuel_type = stages::take_quoted(&mut remaining).unwrap_or_default();
    let date = stages::take_date(&mut remaining).unwrap_or_default();
    let price = stages::take_price(&mut remaining).unwrap_or(0.0);
    FuelRecord::new(fuel_type, date, price)
}

/// Reads a record file, one record per non-empty line
///
/// Records come back in file order. Zero-length lines are skipped before
/// parsing. A file that cannot be opened, or that yields no records at
/// all, is reported as an [Error].
pub fn read_records(path: &PathBuf) -> Result<Vec<FuelRecord>, Error> {
    let content = match read_to_string(path) {
        Ok(content) => content,
        Err(_) => return Err(MissingFileError(path.clone()).into()),
    };
    let records: Vec<FuelRecord> = content
        .lines()
        .filter(|line| !line.is_empty())
        .map(parse_record)
        .collect();
    if records.is_empty() {
        return Err(EmptyRecordFileError(path.clone()).into());
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_three_fields_in_the_usual_order() {
        let record = parse_record("\"DT\" 2024-01-15 54.32");
        assert_eq!(record.fuel_type(), "DT");
        assert_eq!(record.date(), "2024-01-15");
        assert_eq!(record.price(), 54.32);
    }

    #[test]
    fn token_order_does_not_matter() {
        let record = parse_record("45,99 \"AI-92\" 15.03.2023");
        assert_eq!(record.fuel_type(), "AI-92");
        assert_eq!(record.date(), "15.03.2023");
        assert_eq!(record.price(), 45.99);
    }

    #[test]
    fn missing_fields_stay_at_their_defaults() {
        let record = parse_record("\"AI-95\"");
        assert_eq!(record.fuel_type(), "AI-95");
        assert_eq!(record.date(), "");
        assert_eq!(record.price(), 0.0);

        let record = parse_record("2024-01-15");
        assert_eq!(record.fuel_type(), "");
        assert_eq!(record.date(), "2024-01-15");
        assert_eq!(record.price(), 0.0);
    }

    #[test]
    fn an_empty_line_parses_to_the_default_record() {
        // The store never passes empty lines, but a direct call must not panic
        let record = parse_record("");
        assert_eq!(record.fuel_type(), "");
        assert_eq!(record.date(), "");
        assert_eq!(record.price(), 0.0);
    }

    #[test]
    fn digits_inside_a_quoted_name_are_not_a_price() {
        let record = parse_record("\"AI-95\" 2024-05-01 56,70");
        assert_eq!(record.fuel_type(), "AI-95");
        assert_eq!(record.date(), "2024-05-01");
        assert_eq!(record.price(), 56.70);

        // A full date inside the quotes belongs to the fuel type
        let record = parse_record("\"blend 2024-01-01\" 15.03.2023 7");
        assert_eq!(record.fuel_type(), "blend 2024-01-01");
        assert_eq!(record.date(), "15.03.2023");
        assert_eq!(record.price(), 7.0);
    }

    #[test]
    fn the_year_of_the_date_is_not_a_price() {
        let record = parse_record("\"DT\" 2024-01-15");
        assert_eq!(record.date(), "2024-01-15");
        assert_eq!(record.price(), 0.0);
    }

    #[test]
    fn integer_prices_are_a_fallback() {
        let record = parse_record("\"DT\" 54 2024-01-15");
        assert_eq!(record.price(), 54.0);
    }

    #[test]
    fn records_come_back_in_file_order_without_empty_lines() {
        use std::io::Write;

        let dir = std::env::temp_dir().join("gasolina-parser-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("records.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "\"DT\" 1\n\n\"DT\" 2\n\"AI-95\" 3\n").unwrap();
        drop(file);

        let records = read_records(&path).unwrap();
        assert_eq!(records.len(), 3);
        let prices: Vec<f64> = records.iter().map(|r| r.price()).collect();
        assert_eq!(prices, vec![1.0, 2.0, 3.0]);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn a_missing_file_is_an_error() {
        let path = PathBuf::from("this_file_does_not_exist.txt");
        assert!(read_records(&path).is_err());
    }
}
