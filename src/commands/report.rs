use crate::models::FuelRecord;
use crate::parser::read_records;
use crate::{filter, CommonOpts, Error};
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::Editor;

const PROMPT: &str = "Enter fuel type to filter (e.g., DT, AI-95): ";

/// Fuel price report
///
/// Loads the record file, sorts it by ascending price and prints every
/// record of the requested fuel type. The fuel type comes from the
/// command line, or from an interactive prompt when it was not given.
pub fn execute(options: &CommonOpts) -> Result<(), Error> {
    let mut records = read_records(&options.input_file)?;
    records.sort_by(|a, b| a.price().total_cmp(&b.price()));

    let target_fuel = if options.query.is_empty() {
        ask_fuel_type()?
    } else {
        options.query.join(" ")
    };

    let filtered: Vec<&FuelRecord> = records
        .iter()
        .filter(|record| filter::filter(options, &target_fuel, record))
        .collect();

    if filtered.is_empty() {
        println!("No records found for fuel type: {}", target_fuel);
    } else {
        for record in filtered {
            println!("{}", record);
        }
    }
    Ok(())
}

/// Asks for the fuel type on the terminal
///
/// The answer is used verbatim, so an empty answer asks for the records
/// without a fuel type. End of input counts as an empty answer.
fn ask_fuel_type() -> Result<String, Error> {
    let mut editor = Editor::<()>::new();
    match editor.readline(PROMPT) {
        Ok(line) => Ok(line),
        Err(ReadlineError::Eof) => Ok(String::new()),
        Err(err) => Err(Error {
            message: vec![format!("{}", err).as_str().red().bold()],
        }),
    }
}
