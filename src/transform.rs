//! # Joukowski transform
//! Conformal map
//! $$
//! z \mapsto z + b^2 / z
//! $$
//! which maps circles passing close to `+-b` onto airfoil-like shapes.
//!
//! The map is undefined at `z = 0`. Evaluating it there yields a
//! non-finite value, no error is raised. The sampled domains of this
//! crate start at the circle's radius and normally exclude the origin.
use crate::types::FloatNum;
use ndarray::{Array, ArrayBase, Data, Dimension, Zip};
use num_complex::Complex;

/// Joukowski transform with fixed parameter `b`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Joukowski<A> {
    /// Transform parameter, real or complex
    pub b: Complex<A>,
}

impl<A: FloatNum> Joukowski<A> {
    /// Return transform for a given parameter
    pub fn new<B: Into<Complex<A>>>(b: B) -> Self {
        Self { b: b.into() }
    }

    /// Map a single point
    pub fn map(&self, z: Complex<A>) -> Complex<A> {
        z + self.b * self.b / z
    }

    /// Map every point of an array, keeping its shape
    pub fn apply<S, D>(&self, z: &ArrayBase<S, D>) -> Array<Complex<A>, D>
    where
        S: Data<Elem = Complex<A>>,
        D: Dimension,
    {
        z.mapv(|zi| self.map(zi))
    }

    /// Map every point of an array, keeping its shape
    ///
    /// Points are evaluated in parallel.
    pub fn apply_par<S, D>(&self, z: &ArrayBase<S, D>) -> Array<Complex<A>, D>
    where
        S: Data<Elem = Complex<A>>,
        D: Dimension,
    {
        let mut out = Array::<Complex<A>, D>::zeros(z.raw_dim());
        Zip::from(&mut out).and(z).par_for_each(|w, &zi| {
            *w = self.map(zi);
        });
        out
    }
}

impl<A: FloatNum> Default for Joukowski<A> {
    fn default() -> Self {
        Self::new(A::one())
    }
}

/// Joukowski transform of a single point, `z + b^2 / z`
///
/// # Example
///```
/// use joukowski::transform::joukowski;
/// use num_complex::Complex;
/// let w = joukowski(Complex::<f64>::new(2., 0.), 1.);
/// assert!((w - Complex::<f64>::new(2.5, 0.)).norm() < 1e-12);
///```
pub fn joukowski<A, B>(z: Complex<A>, b: B) -> Complex<A>
where
    A: FloatNum,
    B: Into<Complex<A>>,
{
    Joukowski::new(b).map(z)
}

/// Joukowski transform of a curve or grid
///
/// Output has the same shape as the input, so that
/// transformed points stay aligned with any values computed
/// on the original points.
///
/// # Example
///```
/// use joukowski::geometry::{circle, Angles};
/// use joukowski::transform::joukowski_transform;
/// use num_complex::Complex;
/// let z = circle(Complex::<f64>::new(-0.1, 0.22), 1.12, &Angles::full_turn(100));
/// let w = joukowski_transform(&z, 1.);
/// assert_eq!(w.len(), 100);
///```
pub fn joukowski_transform<A, S, D, B>(z: &ArrayBase<S, D>, b: B) -> Array<Complex<A>, D>
where
    A: FloatNum,
    S: Data<Elem = Complex<A>>,
    D: Dimension,
    B: Into<Complex<A>>,
{
    Joukowski::new(b).apply(z)
}

/// Parallel version of [`joukowski_transform`]
pub fn joukowski_transform_par<A, S, D, B>(z: &ArrayBase<S, D>, b: B) -> Array<Complex<A>, D>
where
    A: FloatNum,
    S: Data<Elem = Complex<A>>,
    D: Dimension,
    B: Into<Complex<A>>,
{
    Joukowski::new(b).apply_par(z)
}
