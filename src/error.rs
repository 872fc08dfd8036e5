//! Error types.
//!
//! The library surfaces two structured error kinds:
//! - `ParseError`: a parameter file violated the line grammar
//! - `ComputeError`: numeric inputs failed validation
//!
//! The binary folds everything into `AppError`, which carries the process exit code.

use std::path::PathBuf;

use thiserror::Error;

/// A curve-file line did not match the expected pattern.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{}:{line}: expected {expected}, found {found:?}", .path.display())]
pub struct ParseError {
    pub path: PathBuf,
    /// 1-based line number (one past the last line when input ended early).
    pub line: usize,
    pub expected: &'static str,
    pub found: String,
}

/// Validation failures for the numeric routines.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComputeError {
    #[error("x and y lengths differ (x={x}, y={y})")]
    LengthMismatch { x: usize, y: usize },
    #[error("need at least {needed} points, got {got}")]
    InsufficientData { needed: usize, got: usize },
    #[error("adjacent x values are equal at index {index} (division by zero)")]
    ZeroStep { index: usize },
    #[error("dispersion must be finite and > 0, got {0}")]
    InvalidDispersion(f64),
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

impl From<ParseError> for AppError {
    fn from(err: ParseError) -> Self {
        AppError::new(2, format!("Invalid curve file: {err}"))
    }
}

impl From<ComputeError> for AppError {
    fn from(err: ComputeError) -> Self {
        AppError::new(3, err.to_string())
    }
}
