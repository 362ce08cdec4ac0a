use thiserror::Error;

/// Inputs the EMI engine refuses to compute with.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LoanError {
    #[error("principal must be positive, got {0}")]
    NonPositivePrincipal(f64),
    #[error("annual rate must not be negative, got {0}%")]
    NegativeRate(f64),
    #[error("tenure must be positive, got {0} months")]
    NonPositiveTenure(f64),
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown loan kind '{0}'")]
pub struct ParseLoanKindError(pub String);

/// Slider ranges the calculator cannot clamp into.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} bound must be a finite number")]
    NonFiniteBound { field: &'static str },
    #[error("{field} range is inverted: min {min} > max {max}")]
    InvertedRange {
        field: &'static str,
        min: f64,
        max: f64,
    },
}
