//! Error taxonomy for matrix construction and drawing.
//!
//! Every validation error is raised before any statistic is computed, so a
//! caller never receives a partially built figure.

use thiserror::Error;

/// Top-level error returned by every fallible operation in the crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    /// The table, method or figure size was rejected up front.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    /// A zero-variance column was passed to a strict correlation function.
    #[error("column '{column}' has zero variance; correlation is undefined")]
    DegenerateInput { column: String },

    /// The drawing backend failed.
    #[error("render failed: {0}")]
    Render(String),
}

/// Reasons an input is rejected before any computation starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    #[error("table has no columns")]
    EmptyTable,

    #[error("table has {rows} row(s); at least 2 are required")]
    TooFewRows { rows: usize },

    #[error("column '{column}' is not numeric (row {row})")]
    NonNumericColumn { column: String, row: usize },

    #[error("column '{column}' has a non-finite value at row {row}")]
    NonFiniteValue { column: String, row: usize },

    #[error("column '{column}' has {found} rows, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        found: usize,
    },

    #[error("unsupported correlation method '{0}' (expected 'pearson' or 'spearman')")]
    UnknownMethod(String),

    #[error("figure size must be positive and at most 32768 px a side, got ({width}, {height})")]
    InvalidFigureSize { width: f64, height: f64 },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl MatrixError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, MatrixError::InvalidInput(_))
    }
}

impl<E> From<plotters::drawing::DrawingAreaErrorKind<E>> for MatrixError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        MatrixError::Render(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_converts_and_formats() {
        let err: MatrixError = InvalidInput::UnknownMethod("kendall".to_string()).into();
        assert!(err.is_invalid_input());
        let msg = err.to_string();
        assert!(msg.contains("kendall"), "message should name the method: {msg}");
    }

    #[test]
    fn degenerate_is_not_invalid_input() {
        let err = MatrixError::DegenerateInput {
            column: "c".to_string(),
        };
        assert!(!err.is_invalid_input());
        assert!(err.to_string().contains("'c'"));
    }
}
