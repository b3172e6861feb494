//! Error types for the `bittricks` command-line evaluator.

use crate::operation::Operation;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for reading operands and writing results.
#[derive(Debug, Error)]
pub enum Error {
    #[error("input contains no values")]
    EmptyInput,

    #[error("line {line}: `{token}` is not an integer literal")]
    InvalidValue { line: usize, token: String },

    #[error("line {line}: `{token}` does not fit the operand type of '{operation}'")]
    ValueOutOfRange {
        line: usize,
        token: String,
        operation: Operation,
    },

    #[error("'{operation}' takes values in pairs, but an odd number of values was given")]
    UnpairedValue { operation: Operation },

    #[error("'{operation}' takes {expected} operand(s) per evaluation, got {found}")]
    OperandCount {
        operation: Operation,
        expected: usize,
        found: usize,
    },

    #[error("failed to read input: {0}")]
    ReadInput(#[source] io::Error),

    #[error("failed to write output: {0}")]
    WriteOutput(#[from] io::Error),

    #[error("failed to write report to '{path}': {source}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
