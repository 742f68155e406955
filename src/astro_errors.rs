use thiserror::Error;

use crate::body::Body;

/// Errors raised by the ephemeris models, frame pipeline and event searches.
///
/// A search that legitimately finds nothing inside its time window is **not** an error:
/// it returns `Ok(None)`. The variants below are reserved for invalid input, requests that
/// make no sense for a given body, and numerical loops that exceed their iteration caps.
#[derive(Error, Debug, Clone)]
pub enum AstroError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Operation not supported for body: {0}")]
    UnsupportedBody(Body),

    #[error("Numerical iteration did not converge: {0}")]
    NonConvergence(String),

    #[error("Time outside of the supported model range: {0}")]
    OutOfRange(String),

    #[error("Invalid time format: {0}")]
    InvalidTimeFormat(String),
}

impl From<hifitime::HifitimeError> for AstroError {
    fn from(err: hifitime::HifitimeError) -> Self {
        AstroError::InvalidTimeFormat(err.to_string())
    }
}

impl PartialEq for AstroError {
    fn eq(&self, other: &Self) -> bool {
        use AstroError::*;
        match (self, other) {
            (InvalidInput(a), InvalidInput(b)) => a == b,
            (UnsupportedBody(a), UnsupportedBody(b)) => a == b,
            (NonConvergence(a), NonConvergence(b)) => a == b,
            (OutOfRange(a), OutOfRange(b)) => a == b,
            (InvalidTimeFormat(a), InvalidTimeFormat(b)) => a == b,
            _ => false,
        }
    }
}

impl From<roots::SearchError> for AstroError {
    fn from(err: roots::SearchError) -> Self {
        AstroError::NonConvergence(format!("Kepler equation: {err}"))
    }
}

impl From<ordered_float::FloatIsNan> for AstroError {
    fn from(_: ordered_float::FloatIsNan) -> Self {
        AstroError::InvalidInput("NaN value encountered".into())
    }
}
