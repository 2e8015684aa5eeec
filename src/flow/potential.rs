//! Complex potential
use crate::types::FloatNum;
use ndarray::{Array, ArrayBase, Data, Dimension, Zip};
use num_complex::Complex;

/// Uniform stream of speed `freestream` past the unit cylinder
/// with a vortex of strength `circulation` at the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PotentialFlow<A> {
    /// Circulation (Gamma)
    pub circulation: A,
    /// Freestream speed (u)
    pub freestream: A,
}

impl<A: FloatNum> PotentialFlow<A> {
    /// Return flow from circulation and freestream speed
    pub fn new(circulation: A, freestream: A) -> Self {
        Self {
            circulation,
            freestream,
        }
    }

    /// Flow with unit freestream speed
    pub fn with_circulation(circulation: A) -> Self {
        Self::new(circulation, A::one())
    }

    /// Complex potential at a single point
    ///
    /// Not finite at `z = 0`.
    pub fn potential_at(&self, z: Complex<A>) -> Complex<A> {
        let two = A::one() + A::one();
        let u = Complex::from(self.freestream);
        let vortex = Complex::new(A::zero(), self.circulation / (two * A::PI()));
        u * z + u / z - vortex * z.ln()
    }

    /// Streamfunction at a single point
    pub fn streamfunction_at(&self, z: Complex<A>) -> A {
        self.potential_at(z).im
    }

    /// Complex potential on a curve or grid
    pub fn potential<S, D>(&self, z: &ArrayBase<S, D>) -> Array<Complex<A>, D>
    where
        S: Data<Elem = Complex<A>>,
        D: Dimension,
    {
        z.mapv(|zi| self.potential_at(zi))
    }

    /// Complex potential on a curve or grid, evaluated in parallel
    pub fn potential_par<S, D>(&self, z: &ArrayBase<S, D>) -> Array<Complex<A>, D>
    where
        S: Data<Elem = Complex<A>>,
        D: Dimension,
    {
        let mut out = Array::<Complex<A>, D>::zeros(z.raw_dim());
        Zip::from(&mut out).and(z).par_for_each(|w, &zi| {
            *w = self.potential_at(zi);
        });
        out
    }

    /// Streamfunction on a curve or grid
    pub fn streamfunction<S, D>(&self, z: &ArrayBase<S, D>) -> Array<A, D>
    where
        S: Data<Elem = Complex<A>>,
        D: Dimension,
    {
        z.mapv(|zi| self.streamfunction_at(zi))
    }

    /// Streamfunction on a curve or grid, evaluated in parallel
    pub fn streamfunction_par<S, D>(&self, z: &ArrayBase<S, D>) -> Array<A, D>
    where
        S: Data<Elem = Complex<A>>,
        D: Dimension,
    {
        let mut out = Array::<A, D>::zeros(z.raw_dim());
        Zip::from(&mut out).and(z).par_for_each(|psi, &zi| {
            *psi = self.streamfunction_at(zi);
        });
        out
    }
}

/// Complex potential `u*z + u/z - i*gamma/(2*pi)*ln(z)`
///
/// # Example
///```
/// use joukowski::flow::complex_potential;
/// use ndarray::array;
/// use num_complex::Complex;
/// let z = array![Complex::<f64>::new(1., 0.)];
/// let w = complex_potential(&z, 0., 1.);
/// assert!((w[0] - Complex::<f64>::new(2., 0.)).norm() < 1e-12);
///```
pub fn complex_potential<A, S, D>(z: &ArrayBase<S, D>, gamma: A, u: A) -> Array<Complex<A>, D>
where
    A: FloatNum,
    S: Data<Elem = Complex<A>>,
    D: Dimension,
{
    PotentialFlow::new(gamma, u).potential(z)
}

/// Parallel version of [`complex_potential`]
pub fn complex_potential_par<A, S, D>(
    z: &ArrayBase<S, D>,
    gamma: A,
    u: A,
) -> Array<Complex<A>, D>
where
    A: FloatNum,
    S: Data<Elem = Complex<A>>,
    D: Dimension,
{
    PotentialFlow::new(gamma, u).potential_par(z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::grid_around_circle;
    use crate::types::Complex64;
    use ndarray::array;
    use std::f64::consts::PI;

    #[test]
    fn test_potential_at_one() {
        let flow = PotentialFlow::with_circulation(0.);
        let w = flow.potential_at(Complex64::new(1., 0.));
        assert!((w - Complex64::new(2., 0.)).norm() < 1e-12);
    }

    #[test]
    fn test_vortex_term() {
        // At z = i: u*i + u/i = 0, ln(i) = i*pi/2
        // => W = -i*gamma/(2pi) * i*pi/2 = gamma/4
        let flow = PotentialFlow::new(2., 1.);
        let w = flow.potential_at(Complex64::new(0., 1.));
        assert!((w - Complex64::new(0.5, 0.)).norm() < 1e-12);
    }

    #[test]
    fn test_freestream_scales_linear_part() {
        let z = Complex64::new(1.5, -0.7);
        let w1 = PotentialFlow::new(0., 1.).potential_at(z);
        let w3 = PotentialFlow::new(0., 3.).potential_at(z);
        assert!((w3 - 3. * w1).norm() < 1e-12);
    }

    #[test]
    fn test_potential_keeps_shape() {
        let z = array![
            [Complex64::new(1., 1.), Complex64::new(2., 0.), Complex64::new(0., 2.)],
            [Complex64::new(0., -3.), Complex64::new(-1., 0.5), Complex64::new(4., 4.)]
        ];
        let w = complex_potential(&z, -3., 1.);
        assert_eq!(w.shape(), z.shape());
        for (wi, &zi) in w.iter().zip(z.iter()) {
            let expected = zi + 1. / zi - Complex64::new(0., -3. / (2. * PI)) * zi.ln();
            assert!((wi - expected).norm() < 1e-12);
        }
    }

    #[test]
    fn test_potential_par_matches_serial() {
        let center = Complex64::new(-0.1, 0.22);
        let grid = grid_around_circle(center, [1.12, 10.], [0., 2. * PI], 21, 40);
        let serial = complex_potential(&grid, -3., 1.);
        let parallel = complex_potential_par(&grid, -3., 1.);
        for (a, b) in serial.iter().zip(parallel.iter()) {
            assert!((a - b).norm() < 1e-14);
        }
        let flow = PotentialFlow::new(-3., 1.);
        let psi = flow.streamfunction(&grid);
        let psi_par = flow.streamfunction_par(&grid);
        for (a, b) in psi.iter().zip(psi_par.iter()) {
            assert!((a - b).abs() < 1e-14);
        }
    }

    #[test]
    fn test_potential_origin_is_not_finite() {
        let w = PotentialFlow::new(-3., 1.).potential_at(Complex64::new(0., 0.));
        assert!(!(w.re.is_finite() && w.im.is_finite()));
    }
}
