//! Points on a circle
use crate::types::FloatNum;
use ndarray::{s, Array1};
use num_complex::Complex;

/// Number of samples along a full turn if nothing else is specified
pub const DEFAULT_SAMPLES: usize = 1000;

/// Angles at which a circle is sampled
#[derive(Debug, Clone, PartialEq)]
pub enum Angles<A> {
    /// `n` equally spaced angles on `[min, max)`
    Uniform {
        /// First angle
        min: A,
        /// Upper bound, excluded
        max: A,
        /// Number of angles
        n: usize,
    },
    /// Explicit angles, used in the given order
    Explicit(Array1<A>),
}

impl<A: FloatNum> Angles<A> {
    /// `n` equally spaced angles over a full turn, starting at zero
    pub fn full_turn(n: usize) -> Self {
        Self::Uniform {
            min: A::zero(),
            max: A::PI() + A::PI(),
            n,
        }
    }

    /// Number of angles
    pub fn len(&self) -> usize {
        match self {
            Self::Uniform { n, .. } => *n,
            Self::Explicit(theta) => theta.len(),
        }
    }

    /// True if no angle is sampled
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return angles as array
    pub fn to_array(&self) -> Array1<A> {
        match self {
            Self::Uniform { min, max, n } => angle_axis(*min, *max, *n),
            Self::Explicit(theta) => theta.clone(),
        }
    }
}

impl<A: FloatNum> Default for Angles<A> {
    fn default() -> Self {
        Self::full_turn(DEFAULT_SAMPLES)
    }
}

/// `n` linearly spaced values on the half-open interval `[min, max)`
///
/// The upper bound is excluded, so that a full turn does not
/// repeat its first point.
///
/// # Example
///```
/// use joukowski::geometry::angle_axis;
/// let theta = angle_axis(0., 4., 4);
/// assert_eq!(theta.to_vec(), vec![0., 1., 2., 3.]);
///```
pub fn angle_axis<A: FloatNum>(min: A, max: A, n: usize) -> Array1<A> {
    Array1::linspace(min, max, n + 1).slice_move(s![..n])
}

/// Points `center + radius * exp(i*theta)` for every angle theta
///
/// # Example
/// Sample the unit circle at four points
///```
/// use joukowski::geometry::{circle, Angles};
/// use num_complex::Complex;
/// let z = circle(Complex::new(0., 0.), 1., &Angles::full_turn(4));
/// assert!((z[1] - Complex::new(0., 1.)).norm() < 1e-12);
///```
pub fn circle<A: FloatNum>(
    center: Complex<A>,
    radius: A,
    angles: &Angles<A>,
) -> Array1<Complex<A>> {
    angles
        .to_array()
        .mapv(|theta| center + Complex::from_polar(radius, theta))
}
