use std::collections::HashSet;

use crate::parser::read_records;
use crate::{CommonOpts, Error};
use chrono::NaiveDate;

/// Statistics command
///
/// Prints summary statistics from the record file
pub fn execute(options: &CommonOpts) -> Result<(), Error> {
    let records = read_records(&options.input_file)?;

    let fuel_types: HashSet<&str> = records.iter().map(|record| record.fuel_type()).collect();
    let cheapest = records
        .iter()
        .map(|record| record.price())
        .fold(f64::INFINITY, f64::min);
    let most_expensive = records
        .iter()
        .map(|record| record.price())
        .fold(0.0, f64::max);
    let total: f64 = records.iter().map(|record| record.price()).sum();

    // Print the stats
    println!("{} records", records.len());
    println!("{} different fuel types", fuel_types.len());
    println!("Cheapest price: {:.2}", cheapest);
    println!("Most expensive price: {:.2}", most_expensive);
    println!("{:.2} average price", total / records.len() as f64);

    let mut dates: Vec<NaiveDate> = records
        .iter()
        .filter_map(|record| record.parsed_date())
        .collect();
    dates.sort();
    if let (Some(first), Some(last)) = (dates.first(), dates.last()) {
        println!("First record: {}", first);
        println!("Last record: {}", last);
        println!(
            "{} days between first and last record",
            1 + last.signed_duration_since(*first).num_days()
        );
    }

    Ok(())
}
