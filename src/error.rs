//! Error types for carton pricing and sizing.

use std::fmt::Display;
use std::path::PathBuf;
use thiserror::Error;

/// Error codes reported alongside failed quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// File not found (-1)
    FileNotFound = -1,
    /// Empty file (-2)
    EmptyFile = -2,
    /// Malformed job or config file (-3)
    ParseError = -3,
    /// Input outside its valid range (E100)
    InvalidInput = 100,
    /// Piece too wide for any roll (E200)
    PieceExceedsRollWidth = 200,
    /// No product fits on the sample board (E201)
    ProductExceedsBoardCapacity = 201,
    /// Carton smaller than its fixed allowances (E202)
    CartonTooSmall = 202,
    /// Unit or board count too large to represent (E203)
    CountOverflow = 203,
    /// Money not representable as a decimal (E300)
    NonFiniteAmount = 300,
}

/// Main error type for the calculators.
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("Invalid value for '{field}': expected {expected}, got {value}")]
    InvalidInput {
        field: String,
        expected: String,
        value: String,
    },

    #[error("Piece width {width_mm} mm is too wide for any standard roll (max {max_width_mm} mm)")]
    PieceExceedsRollWidth { width_mm: f64, max_width_mm: f64 },

    #[error("Product {product_length} x {product_width} mm exceeds board capacity ({board_length} x {board_width} mm)")]
    ProductExceedsBoardCapacity {
        product_length: f64,
        product_width: f64,
        board_length: f64,
        board_width: f64,
    },

    #[error("Carton too small: internal {axis} would be {internal_mm} mm")]
    CartonTooSmall { axis: &'static str, internal_mm: f64 },

    #[error("Count '{field}' is too large ({detail})")]
    CountOverflow { field: &'static str, detail: String },

    #[error("Amount for '{field}' is not a finite decimal")]
    NonFiniteAmount { field: &'static str },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Empty file: {path}")]
    EmptyFile { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl QuoteError {
    /// Build an [`QuoteError::InvalidInput`].
    pub fn invalid(field: &str, expected: &str, value: impl Display) -> Self {
        QuoteError::InvalidInput {
            field: field.to_string(),
            expected: expected.to_string(),
            value: value.to_string(),
        }
    }

    /// Build a [`QuoteError::CountOverflow`].
    pub fn count_overflow(field: &'static str, detail: impl Display) -> Self {
        QuoteError::CountOverflow {
            field,
            detail: detail.to_string(),
        }
    }

    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            QuoteError::InvalidInput { .. } => ErrorCode::InvalidInput,
            QuoteError::PieceExceedsRollWidth { .. } => ErrorCode::PieceExceedsRollWidth,
            QuoteError::ProductExceedsBoardCapacity { .. } => {
                ErrorCode::ProductExceedsBoardCapacity
            }
            QuoteError::CartonTooSmall { .. } => ErrorCode::CartonTooSmall,
            QuoteError::CountOverflow { .. } => ErrorCode::CountOverflow,
            QuoteError::NonFiniteAmount { .. } => ErrorCode::NonFiniteAmount,
            QuoteError::FileNotFound { .. } => ErrorCode::FileNotFound,
            QuoteError::EmptyFile { .. } => ErrorCode::EmptyFile,
            QuoteError::Io(_) => ErrorCode::FileNotFound,
            QuoteError::Json(_) => ErrorCode::ParseError,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

/// Result type alias for calculator operations.
pub type Result<T> = std::result::Result<T, QuoteError>;
