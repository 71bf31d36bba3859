use colored::{ColoredString, Colorize};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

#[derive(Debug)]
pub struct EmptyRecordFileError(pub PathBuf);
impl std::error::Error for EmptyRecordFileError {}
impl Display for EmptyRecordFileError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The file does not have any records: {}",
            self.0.to_string_lossy().red().bold()
        )
    }
}

#[derive(Debug)]
pub struct MissingFileError(pub PathBuf);
impl std::error::Error for MissingFileError {}
impl Display for MissingFileError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Record file does not exist: {}",
            self.0.to_string_lossy().red().bold()
        )
    }
}

/// An error with a styled message, ready to print to stderr
#[derive(Debug)]
pub struct Error {
    pub message: Vec<ColoredString>,
}

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", ColoredStrings(&self.message))
    }
}

impl From<MissingFileError> for Error {
    fn from(error: MissingFileError) -> Self {
        Error {
            message: vec![format!("{}", error).normal()],
        }
    }
}

impl From<EmptyRecordFileError> for Error {
    fn from(error: EmptyRecordFileError) -> Self {
        Error {
            message: vec![format!("{}", error).normal()],
        }
    }
}

struct ColoredStrings<'a>(pub &'a Vec<ColoredString>);

impl<'a> fmt::Display for ColoredStrings<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.iter().fold(Ok(()), |result, partial| {
            result.and_then(|_| write!(f, "{}", partial))
        })
    }
}
