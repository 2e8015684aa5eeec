//! Error type of `joukowski`
//!
//! The closed-form functions never fail. Singular points
//! propagate as non-finite numbers. Errors are only returned
//! while validating parameters and while joining real arrays
//! into complex ones.
use thiserror::Error;

/// Result alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by parameter validation and conversions
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Circle radius is zero, negative or NaN
    #[error("radius must be positive, got {0}")]
    NonPositiveRadius(f64),
    /// Radial axis is not ordered or starts at a non-positive radius
    #[error("radial bounds must satisfy 0 < r_min <= r_max, got [{r_min}, {r_max}]")]
    InvalidRadialBounds {
        /// Lower bound
        r_min: f64,
        /// Upper bound
        r_max: f64,
    },
    /// Angular axis is not ordered
    #[error("angular bounds must satisfy theta_min < theta_max, got [{theta_min}, {theta_max})")]
    InvalidAngularBounds {
        /// Lower bound
        theta_min: f64,
        /// Upper bound (excluded)
        theta_max: f64,
    },
    /// An axis would be sampled with zero points
    #[error("axis {0} needs at least one sample")]
    EmptyAxis(&'static str),
    /// Parameter is infinite or NaN
    #[error("parameter {name} must be finite, got {value}")]
    NonFinite {
        /// Parameter name
        name: &'static str,
        /// Offending value
        value: f64,
    },
    /// Real and imaginary parts differ in shape
    #[error("shape mismatch: real part {re:?}, imaginary part {im:?}")]
    ShapeMismatch {
        /// Shape of the real part
        re: Vec<usize>,
        /// Shape of the imaginary part
        im: Vec<usize>,
    },
}
