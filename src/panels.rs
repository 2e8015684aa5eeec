//! # Plot data
//! Everything a plotting backend needs to draw the two kinds of
//! figures: the circle next to its Joukowski image ([`ShapePanel`]),
//! and the streamfunction on the grid around the body
//! ([`StreamPanel`]), either in the circle plane or mapped to the
//! airfoil plane. Drawing itself is left to the consumer.
use crate::config::{FlowParameters, Setup};
use crate::convert::to_parts;
use crate::error::Result;
use crate::flow::PotentialFlow;
use crate::geometry::{circle, grid_around_circle, Angles};
use crate::transform::Joukowski;
use crate::types::Complex64;
use log::{debug, warn};
use ndarray::{Array1, Array2, ArrayBase, Data, Dimension};
use std::fmt;

/// Number of contour levels if nothing else is specified
pub const DEFAULT_LEVELS: usize = 30;

/// Plane in which a stream panel is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plane {
    /// Grid and boundary as sampled around the circle
    Circle,
    /// Grid and boundary mapped through the Joukowski transform
    Airfoil,
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Circle => write!(f, "circle"),
            Self::Airfoil => write!(f, "airfoil"),
        }
    }
}

/// Circle and its Joukowski image
#[derive(Debug, Clone)]
pub struct ShapePanel {
    /// Radius of the circle (label)
    pub radius: f64,
    /// Points on the circle
    pub circle: Array1<Complex64>,
    /// Joukowski image of `circle`, point by point
    pub airfoil: Array1<Complex64>,
}

impl ShapePanel {
    /// Sample circle with `n_boundary` points and transform it
    ///
    /// # Errors
    /// Invalid flow parameters.
    pub fn new(flow: &FlowParameters, n_boundary: usize) -> Result<Self> {
        flow.validate()?;
        let circle = circle(flow.center, flow.radius, &Angles::full_turn(n_boundary));
        let airfoil = Joukowski::new(flow.b).apply(&circle);
        Ok(Self {
            radius: flow.radius,
            circle,
            airfoil,
        })
    }

    /// Horizontal extent of the transformed curve
    pub fn chord(&self) -> f64 {
        match finite_range(&self.airfoil.mapv(|w| w.re)) {
            Some((min, max)) => max - min,
            None => 0.,
        }
    }
}

/// Streamfunction sampled around the body
#[derive(Debug, Clone)]
pub struct StreamPanel {
    /// Circulation (label)
    pub circulation: f64,
    /// Joukowski parameter (label)
    pub b: Complex64,
    /// Plane of `boundary` and `grid`
    pub plane: Plane,
    /// Body contour
    pub boundary: Array1<Complex64>,
    /// Sample points, shape (n_theta, n_r)
    pub grid: Array2<Complex64>,
    /// Streamfunction at the sample points
    pub psi: Array2<f64>,
}

impl StreamPanel {
    /// Evaluate the streamfunction for a given circulation
    ///
    /// The streamfunction is always evaluated on the grid around the
    /// circle. In the airfoil plane, grid and boundary are mapped
    /// through the Joukowski transform afterwards, `psi[[i, j]]` stays
    /// attached to the image of `grid[[i, j]]`.
    ///
    /// # Errors
    /// Invalid setup.
    pub fn new(setup: &Setup, circulation: f64, plane: Plane) -> Result<Self> {
        setup.validate()?;
        let flow = &setup.flow;
        let boundary = circle(
            flow.center,
            flow.radius,
            &Angles::full_turn(setup.n_boundary),
        );
        let grid = grid_around_circle(
            flow.center,
            setup.grid.radial(),
            setup.grid.angular(),
            setup.grid.n_r,
            setup.grid.n_theta,
        );
        let psi = PotentialFlow::new(circulation, flow.freestream).streamfunction_par(&grid);

        let non_finite = count_non_finite(&psi);
        if non_finite > 0 {
            warn!(
                "Streamfunction (gamma = {}) is not finite at {} grid points",
                circulation, non_finite
            );
        }

        let (boundary, grid) = match plane {
            Plane::Circle => (boundary, grid),
            Plane::Airfoil => {
                let transform = Joukowski::new(flow.b);
                (transform.apply(&boundary), transform.apply_par(&grid))
            }
        };
        debug!(
            "Stream panel gamma = {} in {} plane, grid {:?}",
            circulation,
            plane,
            grid.shape()
        );

        Ok(Self {
            circulation,
            b: flow.b,
            plane,
            boundary,
            grid,
            psi,
        })
    }

    /// Streamfunction for each circulation
    ///
    /// # Errors
    /// Invalid setup.
    pub fn for_circulations(
        setup: &Setup,
        circulations: &[f64],
        plane: Plane,
    ) -> Result<Vec<Self>> {
        circulations
            .iter()
            .map(|&gamma| Self::new(setup, gamma, plane))
            .collect()
    }

    /// Grid coordinates as x and y arrays
    pub fn coords(&self) -> (Array2<f64>, Array2<f64>) {
        to_parts(&self.grid)
    }

    /// Range of finite streamfunction values
    pub fn range(&self) -> Option<(f64, f64)> {
        finite_range(&self.psi)
    }

    /// Equally spaced contour levels
    pub fn levels(&self, n: usize) -> Array1<f64> {
        contour_levels(&self.psi, n)
    }
}

/// Minimum and maximum of all finite values
///
/// Returns `None` if no value is finite.
pub fn finite_range<S, D>(values: &ArrayBase<S, D>) -> Option<(f64, f64)>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    values
        .iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, &v| match acc {
            None => Some((v, v)),
            Some((min, max)) => Some((v.min(min), v.max(max))),
        })
}

/// Number of infinite or NaN values
pub fn count_non_finite<S, D>(values: &ArrayBase<S, D>) -> usize
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    values.iter().filter(|v| !v.is_finite()).count()
}

/// `n` equally spaced levels from the smallest to the largest
/// finite value
///
/// Empty if `n == 0` or no value is finite.
///
/// # Example
///```
/// use joukowski::panels::contour_levels;
/// use ndarray::array;
/// let levels = contour_levels(&array![[0., 4.], [f64::NAN, 2.]], 3);
/// assert_eq!(levels.to_vec(), vec![0., 2., 4.]);
///```
pub fn contour_levels<S, D>(values: &ArrayBase<S, D>, n: usize) -> Array1<f64>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    match finite_range(values) {
        Some((min, max)) if n > 0 => Array1::linspace(min, max, n),
        _ => Array1::zeros(0),
    }
}
