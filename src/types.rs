//! Types and traits for real and complex numbers
use num_complex::Complex;
use num_traits::{Float, FloatConst};
use std::fmt::{Debug, Display};

/// Real scalar type, used throughout this crate for coordinates,
/// radii, angles and flow parameters
pub trait FloatNum: Float + FloatConst + Debug + Display + Send + Sync + 'static {}

impl<T> FloatNum for T where T: Float + FloatConst + Debug + Display + Send + Sync + 'static {}

/// Double precision complex number
pub type Complex64 = Complex<f64>;
