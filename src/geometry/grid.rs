//! Polar grid around a circle
use super::circle::angle_axis;
use crate::types::FloatNum;
use log::debug;
use ndarray::{Array1, Array2};
use num_complex::Complex;

/// Sample the plane around a circle on a polar grid
///
/// The radius axis is spaced linearly from `radial[0]` to `radial[1]`
/// (both included), the angle axis linearly over the half-open
/// `[angular[0], angular[1])`.
///
/// # Return
/// Array of shape `(n_theta, n_r)`, element `[i, j]` holds
/// `center + r_j * exp(i*theta_i)`. Rows follow the angle and
/// columns the radius, as a meshgrid of (r, theta) would.
///
/// The grid contains the origin only if `|center|` lies within the
/// radial bounds. The flow functions are singular there.
///
/// # Example
///```
/// use joukowski::geometry::grid_around_circle;
/// use num_complex::Complex;
/// use std::f64::consts::PI;
/// let grid = grid_around_circle(Complex::new(0., 0.), [1., 2.], [0., 2. * PI], 3, 4);
/// assert_eq!(grid.shape(), &[4, 3]);
///```
pub fn grid_around_circle<A: FloatNum>(
    center: Complex<A>,
    radial: [A; 2],
    angular: [A; 2],
    n_r: usize,
    n_theta: usize,
) -> Array2<Complex<A>> {
    let r = Array1::linspace(radial[0], radial[1], n_r);
    let theta = angle_axis(angular[0], angular[1], n_theta);
    debug!(
        "Sample polar grid n_theta x n_r = {} x {}, r in [{}, {}]",
        n_theta, n_r, radial[0], radial[1]
    );
    Array2::from_shape_fn((n_theta, n_r), |(i, j)| {
        center + Complex::from_polar(r[j], theta[i])
    })
}
