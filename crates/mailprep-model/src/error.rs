//! Error taxonomy for the parse pipeline.
//!
//! Only structural problems are errors: an empty file, a repeated header,
//! a missing required field in strict mode, or a data row too short for
//! the mapped columns. Per-field anomalies (bad phone, odd zip shape,
//! unparseable date) degrade to empty values and never surface here.

use thiserror::Error;

use crate::field::Field;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PrepError {
    /// The input had no rows at all, not even a header.
    #[error("empty input: expected a header row")]
    EmptyInput,

    /// The same literal column name appeared twice in the header row.
    #[error("duplicate header column: {0}")]
    DuplicateHeader(String),

    /// Strict mode found no column mapped to a required field.
    #[error("missing required field: {0}")]
    MissingRequiredField(Field),

    /// A data row does not cover every mapped column index. `row` is the
    /// 1-based number of the data row, header excluded.
    #[error("row {row}: {actual} columns, mapped fields need {expected}")]
    MalformedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("read error: {0}")]
    Read(String),
}

pub type Result<T> = std::result::Result<T, PrepError>;
