use thiserror::Error;
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FitError {
    #[error("x and y must have equal length (x: {x_len}, y: {y_len})")]
    LengthMismatch { x_len: usize, y_len: usize },
    #[error("Akima fit needs at least 3 samples, got {len}")]
    TooFewPoints { len: usize },
    #[error("x must be strictly increasing (violated at index {index})")]
    NotStrictlyIncreasing { index: usize },
}
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("interpolator has not been fitted")]
    NotFitted,
    #[error("query {value} lies outside the fitted domain [{lo}, {hi}]")]
    OutOfDomain { value: f64, lo: f64, hi: f64 },
}
#[derive(Debug, Clone, PartialEq, Error)]
#[error("unknown segment lookup '{0}' (expected 'nearest' or 'containing')")]
pub struct ParseLookupError(pub String);
