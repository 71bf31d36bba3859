//! This module contains the matcher stages
//!
//! Each stage searches the remaining text for one field pattern and, when
//! it finds a match, cuts the match out of the buffer and returns the
//! captured value. Running the stages in order over the same buffer is
//! what keeps the fields from overlapping: digits inside a quoted fuel
//! name are gone before the date search, and the date digits are gone
//! before the price search.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RE_FUEL_TYPE: Regex = Regex::new(r#""([^"]*)""#).unwrap();
    // The regex crate has no backreferences, so the separator consistency
    // is spelled out as one alternative per shape and separator.
    static ref RE_DATE: Regex = Regex::new(
        r"\d{4}-\d{2}-\d{2}|\d{4}\.\d{2}\.\d{2}|\d{4}/\d{2}/\d{2}|\d{2}-\d{2}-\d{4}|\d{2}\.\d{2}\.\d{4}|\d{2}/\d{2}/\d{4}"
    )
    .unwrap();
    static ref RE_DECIMAL: Regex = Regex::new(r"\d+[.,]\d+").unwrap();
    static ref RE_INTEGER: Regex = Regex::new(r"\d+").unwrap();
}

/// Takes the text between the first pair of double quotes
pub(crate) fn take_quoted(remaining: &mut String) -> Option<String> {
    let captures = RE_FUEL_TYPE.captures(remaining)?;
    let value = captures.get(1).unwrap().as_str().to_string();
    let matched = captures.get(0).unwrap();
    let range = matched.start()..matched.end();
    remaining.replace_range(range, "");
    Some(value)
}

/// Takes the first date-shaped substring
///
/// A date is either `YYYY?MM?DD` or `DD?MM?YYYY` where `?` is `-`, `.`
/// or `/` and is the same character in both positions.
pub(crate) fn take_date(remaining: &mut String) -> Option<String> {
    let matched = RE_DATE.find(remaining)?;
    let value = matched.as_str().to_string();
    let range = matched.start()..matched.end();
    remaining.replace_range(range, "");
    Some(value)
}

/// Takes the first numeric token and reads it as a price
///
/// A token with a decimal separator (`.` or `,`) wins over a plain run of
/// digits. The comma is normalized to a period before the conversion, the
/// conversion itself never looks at the locale.
pub(crate) fn take_price(remaining: &mut String) -> Option<f64> {
    let matched = RE_DECIMAL
        .find(remaining)
        .or_else(|| RE_INTEGER.find(remaining))?;
    let token = matched.as_str().replace(',', ".");
    let range = matched.start()..matched.end();
    remaining.replace_range(range, "");
    token.parse::<f64>().ok().filter(|price| price.is_finite())
}
