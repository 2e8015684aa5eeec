//! Streamfunction
use super::potential::PotentialFlow;
use crate::types::FloatNum;
use ndarray::{Array, ArrayBase, Data, Dimension};
use num_complex::Complex;

/// Streamfunction `Im W(z)` with unit freestream speed
///
/// For other freestream speeds use [`PotentialFlow::streamfunction`].
///
/// # Example
///```
/// use joukowski::flow::streamfunction;
/// use joukowski::geometry::{circle, Angles};
/// use num_complex::Complex;
/// // The unit circle is a streamline
/// let z = circle(Complex::<f64>::new(0., 0.), 1., &Angles::full_turn(16));
/// let psi = streamfunction(&z, -3.);
/// assert!(psi.iter().all(|p| (p - psi[0]).abs() < 1e-12));
///```
pub fn streamfunction<A, S, D>(z: &ArrayBase<S, D>, gamma: A) -> Array<A, D>
where
    A: FloatNum,
    S: Data<Elem = Complex<A>>,
    D: Dimension,
{
    PotentialFlow::with_circulation(gamma).streamfunction(z)
}

/// Parallel version of [`streamfunction`]
pub fn streamfunction_par<A, S, D>(z: &ArrayBase<S, D>, gamma: A) -> Array<A, D>
where
    A: FloatNum,
    S: Data<Elem = Complex<A>>,
    D: Dimension,
{
    PotentialFlow::with_circulation(gamma).streamfunction_par(z)
}

/// Streamfunction of an already evaluated complex potential
pub fn stream_values<A, S, D>(potential: &ArrayBase<S, D>) -> Array<A, D>
where
    A: FloatNum,
    S: Data<Elem = Complex<A>>,
    D: Dimension,
{
    potential.mapv(|w| w.im)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::complex_potential;
    use crate::geometry::{circle, grid_around_circle, Angles};
    use crate::types::Complex64;
    use ndarray::{array, Array1};
    use ndarray_rand::rand_distr::Uniform;
    use ndarray_rand::RandomExt;
    use std::f64::consts::PI;

    #[test]
    fn test_unit_circle_is_streamline() {
        let z = circle(Complex64::new(0., 0.), 1., &Angles::full_turn(360));
        let circulations: [f64; 4] = [0., -3., 1.5, 10.];
        for gamma in circulations {
            let psi = streamfunction(&z, gamma);
            let psi0 = psi[0];
            for p in psi.iter() {
                assert!(
                    (p - psi0).abs() < 1e-12,
                    "streamfunction {} not constant on boundary (gamma = {}), expected {}",
                    p,
                    gamma,
                    psi0
                );
            }
        }
    }

    #[test]
    fn test_symmetry_without_circulation() {
        let re: Array1<f64> = Array1::random(500, Uniform::new(-5., 5.));
        let im: Array1<f64> = Array1::random(500, Uniform::new(0.05, 5.));
        let z = crate::convert::from_parts(&re, &im).unwrap();
        let psi = streamfunction(&z, 0.);
        let psi_conj = streamfunction(&z.mapv(|zi| zi.conj()), 0.);
        for (a, b) in psi.iter().zip(psi_conj.iter()) {
            assert!((a + b).abs() < 1e-10, "psi(conj z) = {}, -psi(z) = {}", b, -a);
        }
    }

    #[test]
    fn test_branch_cut_on_negative_real_axis() {
        // Across the negative real axis the principal argument jumps
        // by 2*pi. The jump shows up in the potential, Re W jumps by
        // gamma, while psi only sees ln|z| and stays continuous.
        let gamma: f64 = -3.;
        let eps = 1e-9;
        let z = array![Complex64::new(-2., eps), Complex64::new(-2., -eps)];
        let w = complex_potential(&z, gamma, 1.);
        assert!(((w[0].re - w[1].re) - gamma).abs() < 1e-6);
        let psi = streamfunction(&z, gamma);
        assert!((psi[0] - psi[1]).abs() < 1e-6);
    }

    #[test]
    fn test_stream_values_match_streamfunction() {
        let grid = grid_around_circle(Complex64::new(-0.1, 0.22), [1.12, 5.], [0., 2. * PI], 9, 12);
        let potential = complex_potential(&grid, -3., 1.);
        let psi = streamfunction(&grid, -3.);
        let psi_par = streamfunction_par(&grid, -3.);
        assert_eq!(stream_values(&potential), psi);
        assert_eq!(psi_par, psi);
    }
}
