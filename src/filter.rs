use crate::models::FuelRecord;
use crate::CommonOpts;

/// Does a record pass the filters for the report
///
/// The fuel type has to be exactly equal to the requested one: the
/// comparison is case sensitive and nothing gets trimmed, so an empty
/// request matches only records whose own fuel type is empty.
pub fn filter(options: &CommonOpts, target_fuel: &str, record: &FuelRecord) -> bool {
    if record.fuel_type() != target_fuel {
        return false;
    }
    in_date_range(options, record)
}

/// Checks the record date against the begin and end options
///
/// `--begin` is inclusive and `--end` is exclusive. A record whose date
/// text does not read as a calendar date only passes when no date option
/// was given.
pub fn in_date_range(options: &CommonOpts, record: &FuelRecord) -> bool {
    if options.begin.is_none() && options.end.is_none() {
        return true;
    }
    match record.parsed_date() {
        Some(date) => {
            if let Some(begin) = options.begin {
                if date < begin {
                    return false;
                }
            }
            if let Some(end) = options.end {
                if date >= end {
                    return false;
                }
            }
            true
        }
        None => false,
    }
}
