use std::num::ParseFloatError;
use std::path::PathBuf;
use thiserror::Error;

pub mod body;
pub mod parser;
pub mod series;
pub mod table;

pub use body::{Body, RECOGNIZED_BODIES};
pub use parser::{clean, parse_line};
pub use series::{Bounds, Sample, Series};
pub use table::SeriesTable;

#[derive(Debug, Error)]
pub enum LineErrors {
    #[error("expected 'LABEL:X,Y', found '{0}'")]
    MalformedLine(String),
    #[error("expected two comma separated values, found '{0}'")]
    MalformedValues(String),
    #[error("unrecognized body '{0}' (expected one of: moon, earth)")]
    UnknownBody(String),
    #[error("'{value}' is not a number")]
    InvalidNumber {
        value: String,
        #[source]
        source: ParseFloatError,
    },
}

#[derive(Debug, Error)]
pub enum MotionErrors {
    #[error("could not open {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not read line {line}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}")]
    Line {
        line: usize,
        #[source]
        source: LineErrors,
    },
}
