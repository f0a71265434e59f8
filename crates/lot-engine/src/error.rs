//! Error types for lot-engine input handling.
//!
//! The sweep-line engine itself is total; every variant here is raised while
//! reading or normalizing input.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LotError {
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("input is empty: no parking records found")]
    EmptyInput,

    /// A timestamp could not be decoded. `line` is 1-based when known.
    #[error("parse error{}: {message}", line_suffix(.line))]
    Parse {
        line: Option<usize>,
        message: String,
    },

    /// An arrival or departure field is absent from a record.
    #[error("missing field{}: {field}", line_suffix(.line))]
    MissingField { line: Option<usize>, field: String },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn line_suffix(line: &Option<usize>) -> String {
    line.map(|l| format!(" at line {}", l)).unwrap_or_default()
}

/// Convenience alias used throughout lot-engine.
pub type Result<T> = std::result::Result<T, LotError>;
