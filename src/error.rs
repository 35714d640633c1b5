use thiserror::Error;

pub type SolverResult<T> = Result<T, SolverError>;

#[derive(Error, Debug)]
pub enum SolverError {
    /// A scalar parameter outside its admissible range.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error("length mismatch: expected {expected} points, got {provided}")]
    LengthMismatch { expected: usize, provided: usize },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse parameter file: {0}")]
    ParamFile(#[from] serde_json::Error),

    #[error("failed to write csv: {0}")]
    Csv(#[from] csv::Error),
}

impl SolverError {
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        SolverError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

/// Rejects zero, negative, infinite and NaN values.
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> SolverResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SolverError::invalid_argument(
            name,
            format!("must be finite and > 0, got {}", value),
        ))
    }
}
