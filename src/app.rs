//! Document the command line interface
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;
use std::env;
use std::fs::read_to_string;
use std::path::{Path, PathBuf};
use structopt::StructOpt;

use crate::commands::{prices, report, statistics};
use crate::Error;
use chrono::NaiveDate;
use colored::Colorize;

#[derive(Debug, StructOpt)]
enum Command {
    /// Price report for one fuel type
    #[structopt(alias = "rep")]
    Report(CommonOpts),
    /// List every record, cheapest first
    Prices(CommonOpts),
    /// Summary statistics for the record file
    #[structopt(alias = "stats")]
    Statistics(CommonOpts),
}

#[derive(Debug, StructOpt)]
#[structopt(about = "Command line fuel price report tool",
version = env ! ("CARGO_PKG_VERSION"),
name = "gasolina"
)]
struct Opt {
    #[structopt(subcommand)]
    cmd: Command,
}

/// Command line options
#[derive(Debug, StructOpt, Clone)]
pub struct CommonOpts {
    /// Input file with one fuel price record per line
    #[structopt(
        name = "FILE",
        short = "f",
        long = "file",
        parse(from_os_str),
        default_value = "input.txt"
    )]
    pub input_file: PathBuf,

    /// Ignore init file if it exists
    #[structopt(long = "--args-only")]
    args_only: bool,

    /// Init file
    #[structopt(long = "--init-file", parse(from_os_str))]
    init_file: Option<PathBuf>,

    /// The fuel type to filter, e.g. DT or AI-95. Asked interactively when absent.
    #[structopt(multiple = true, takes_value = true)]
    pub query: Vec<String>,

    /// Keep only records dated on or after this date
    #[structopt(short = "b", long = "begin", parse(try_from_str = date_parser))]
    pub begin: Option<NaiveDate>,
    /// Keep only records dated strictly before this date
    #[structopt(short = "e", long = "end", parse(try_from_str = date_parser))]
    pub end: Option<NaiveDate>,

    #[structopt(long = "--force-color")]
    pub force_color: bool,
}

impl CommonOpts {
    pub fn new() -> Self {
        let opt: Opt = Opt::from_iter(vec!["gasolina", "report"].iter());
        match opt.cmd {
            Command::Report(options) => options,
            _ => panic!("Something's very wrong"),
        }
    }
}

const INIT_FILE_FLAG: &str = "--init-file";
const NO_INIT_FILE_FLAG: &str = "--args-only";
const RC_PATH_UNDER_HOME: &str = "~/.gasolinarc";
const RC_PATH: &str = ".gasolinarc";

fn init_paths(args: &[String]) -> Vec<String> {
    let mut possible_paths: Vec<String> = Vec::new();
    for (i, arg) in args.iter().enumerate() {
        if arg == NO_INIT_FILE_FLAG {
            return vec![];
        } else if arg == INIT_FILE_FLAG {
            if let Some(path) = args.get(i + 1) {
                possible_paths.push(path.clone());
            }
        }
    }
    possible_paths.push(shellexpand::tilde(RC_PATH_UNDER_HOME).to_string());
    possible_paths.push(RC_PATH.to_string());
    possible_paths
}

/// Adds the options from the init file to the argument vector
///
/// Options already present on the command line win over the file.
fn merge_init_file(args: &mut Vec<String>) {
    let possible_paths = init_paths(args);
    let file = match possible_paths.iter().map(Path::new).find(|x| x.exists()) {
        Some(file) => file,
        None => return,
    };
    let mut aliases = HashMap::new();
    aliases.insert("-f".to_string(), "--file".to_string());
    let contents = match read_to_string(file) {
        Ok(contents) => contents,
        Err(_) => return,
    };
    for line in contents.lines() {
        let option = line.trim_start();
        match option.chars().next() {
            Some('-') => {
                assert!(
                    option.starts_with("--"),
                    "Bad config file {:?}\n{}",
                    file,
                    line
                );
                let mut iter = option.split_whitespace();
                let flag = iter.next().unwrap();
                if !args
                    .iter()
                    .any(|x| (x == flag) | (aliases.get(x).unwrap_or(&String::new()) == flag))
                {
                    args.push(flag.to_string());
                    let rest = iter.collect::<Vec<&str>>().join(" ");
                    if !rest.is_empty() {
                        args.push(rest);
                    }
                }
            }
            Some(';') | Some('#') | Some('!') | Some('%') => (), // a comment
            Some(_) => panic!("Bad config file {:?}\n{}", file, line),
            None => (),
        }
    }
}

/// Entry point for the command line app
///
/// Merge the options from the init file into the supplied command line
/// options and call the command accordingly.
pub fn run_app(mut args: Vec<String>) -> Result<(), Error> {
    // A bare invocation is the price report
    if args.len() == 1 {
        args.push("report".to_string());
    }
    merge_init_file(&mut args);

    let opt: Opt = Opt::from_iter(args.iter());
    match opt.cmd {
        Command::Report(options) => {
            if options.force_color {
                env::set_var("CLICOLOR_FORCE", "1");
            }
            report::execute(&options)
        }
        Command::Prices(options) => {
            if options.force_color {
                env::set_var("CLICOLOR_FORCE", "1");
            }
            prices::execute(&options)
        }
        Command::Statistics(options) => {
            if options.force_color {
                env::set_var("CLICOLOR_FORCE", "1");
            }
            statistics::execute(&options)
        }
    }
}

/// A parser for date filter expressions
///
/// Accepts a day (`2024-05-01`), a month (`2024-05`) or a year (`2024`),
/// with `-` or `/` as separator. Months and years stand for their first
/// day.
pub fn date_parser(date: &str) -> Result<NaiveDate, Error> {
    lazy_static! {
        static ref RE_DATE: Regex = Regex::new(r"^(\d{4})[/-](\d\d?)[/-](\d\d?)$").unwrap();
        static ref RE_MONTH: Regex = Regex::new(r"^(\d{4})[/-](\d\d?)$").unwrap();
        static ref RE_YEAR: Regex = Regex::new(r"^(\d{4})$").unwrap();
    }
    let (year, month, day) = if let Some(captures) = RE_DATE.captures(date) {
        (
            captures.get(1).unwrap().as_str().parse::<i32>().unwrap(),
            captures.get(2).unwrap().as_str().parse::<u32>().unwrap(),
            captures.get(3).unwrap().as_str().parse::<u32>().unwrap(),
        )
    } else if let Some(captures) = RE_MONTH.captures(date) {
        (
            captures.get(1).unwrap().as_str().parse::<i32>().unwrap(),
            captures.get(2).unwrap().as_str().parse::<u32>().unwrap(),
            1,
        )
    } else if let Some(captures) = RE_YEAR.captures(date) {
        (captures.get(1).unwrap().as_str().parse::<i32>().unwrap(), 1, 1)
    } else {
        return Err(invalid_date(date));
    };
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| invalid_date(date))
}

fn invalid_date(date: &str) -> Error {
    Error {
        message: vec![format!("Invalid date {}", date).as_str().bold().bright_red()],
    }
}
