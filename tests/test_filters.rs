use assert_cmd::Command;

mod common;
use common::test_args;

fn report_output(args: &[&str]) -> String {
    let assert = Command::cargo_bin("gasolina").unwrap().args(args).assert();
    String::from_utf8(assert.get_output().to_owned().stdout).unwrap()
}

/// The filter is an exact match: no case folding, no trimming
#[test]
fn filtering_is_case_sensitive() {
    let output = report_output(&[
        "report",
        "--args-only",
        "-f",
        "tests/example_files/demo.txt",
        "dt",
    ]);
    assert_eq!(output, "No records found for fuel type: dt\n");
}

#[test]
fn filtering_does_not_trim() {
    let output = report_output(&[
        "report",
        "--args-only",
        "-f",
        "tests/example_files/demo.txt",
        "DT ",
    ]);
    assert_eq!(output, "No records found for fuel type: DT \n");
}

/// The no-records outcome is a report, not an error
#[test]
fn no_match_is_not_an_error() {
    Command::cargo_bin("gasolina")
        .unwrap()
        .args(&[
            "report",
            "--args-only",
            "-f",
            "tests/example_files/demo.txt",
            "E100",
        ])
        .assert()
        .success();
    test_args(&[
        "report",
        "--args-only",
        "-f",
        "tests/example_files/demo.txt",
        "E100",
    ]);
}

/// An empty answer to the prompt asks for the records without a fuel type
#[test]
fn empty_filter_matches_only_empty_fuel_types() {
    let assert = Command::cargo_bin("gasolina")
        .unwrap()
        .args(&[
            "report",
            "--args-only",
            "-f",
            "tests/example_files/demo.txt",
        ])
        .write_stdin("\n")
        .assert()
        .success();
    let output = String::from_utf8(assert.get_output().to_owned().stdout).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines, vec!["Fuel type:  Date:  Price: 0.00"]);
}

/// Date filters compose with the fuel type match
#[test]
fn date_filters_narrow_the_report() {
    let output = report_output(&[
        "report",
        "--args-only",
        "-f",
        "tests/example_files/demo.txt",
        "-b",
        "2024-02-01",
        "DT",
    ]);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Fuel type: DT Date: 01.02.2024 Price: 59.80",
            "Fuel type: DT Date: 2024-04-12 Price: 61.20",
        ]
    );

    let output = report_output(&[
        "report",
        "--args-only",
        "-f",
        "tests/example_files/demo.txt",
        "-e",
        "2024-02-01",
        "DT",
    ]);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines, vec!["Fuel type: DT Date: 2024-01-15 Price: 54.32"]);
}
