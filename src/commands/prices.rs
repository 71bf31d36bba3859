use crate::parser::read_records;
use crate::{filter, CommonOpts, Error};

/// Prints every record, cheapest first
pub fn execute(options: &CommonOpts) -> Result<(), Error> {
    let mut records = read_records(&options.input_file)?;
    records.sort_by(|a, b| a.price().total_cmp(&b.price()));
    for record in records
        .iter()
        .filter(|record| filter::in_date_range(options, record))
    {
        println!("{}", record);
    }
    Ok(())
}
