//! # Parameters of the circle, the flow and the sampling grid
//!
//! Defaults reproduce the reference setup: a circle of radius 1.12
//! centered at -0.1 + 0.22i, unit freestream speed, Joukowski
//! parameter b = 1, and a 1000 x 1000 polar grid reaching from the
//! circle out to r = 10.
//!
//! # Example
//!```
//! use joukowski::config::{GridParameters, Setup};
//!
//! let setup = Setup::default().with_grid(GridParameters::default().with_samples(200, 400));
//! assert!(setup.validate().is_ok());
//!```
use crate::error::{Error, Result};
use crate::geometry::DEFAULT_SAMPLES;
use num_complex::Complex;
use std::f64::consts::PI;

/// Circle and flow parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowParameters {
    /// Center of the circle
    pub center: Complex<f64>,
    /// Radius of the circle
    pub radius: f64,
    /// Freestream speed
    pub freestream: f64,
    /// Joukowski transform parameter
    pub b: Complex<f64>,
}

impl Default for FlowParameters {
    fn default() -> Self {
        Self {
            center: Complex::new(-0.1, 0.22),
            radius: 1.12,
            freestream: 1.,
            b: Complex::new(1., 0.),
        }
    }
}

impl FlowParameters {
    /// Return parameters with a new circle
    pub fn with_circle(mut self, center: Complex<f64>, radius: f64) -> Self {
        self.center = center;
        self.radius = radius;
        self
    }

    /// Return parameters with a new freestream speed
    pub fn with_freestream(mut self, freestream: f64) -> Self {
        self.freestream = freestream;
        self
    }

    /// Return parameters with a new transform parameter
    pub fn with_b<B: Into<Complex<f64>>>(mut self, b: B) -> Self {
        self.b = b.into();
        self
    }

    /// Check parameters
    ///
    /// # Errors
    /// Radius is not positive or any parameter is not finite.
    pub fn validate(&self) -> Result<()> {
        finite("center.re", self.center.re)?;
        finite("center.im", self.center.im)?;
        finite("freestream", self.freestream)?;
        finite("b.re", self.b.re)?;
        finite("b.im", self.b.im)?;
        if self.radius.is_nan() || self.radius <= 0. {
            return Err(Error::NonPositiveRadius(self.radius));
        }
        finite("radius", self.radius)
    }
}

/// Polar sampling grid around the circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridParameters {
    /// Smallest radius
    pub r_min: f64,
    /// Largest radius (included)
    pub r_max: f64,
    /// First angle
    pub theta_min: f64,
    /// Last angle (excluded)
    pub theta_max: f64,
    /// Number of radii
    pub n_r: usize,
    /// Number of angles
    pub n_theta: usize,
}

impl Default for GridParameters {
    fn default() -> Self {
        Self {
            r_min: 1.12,
            r_max: 10.,
            theta_min: 0.,
            theta_max: 2. * PI,
            n_r: 1000,
            n_theta: 1000,
        }
    }
}

impl GridParameters {
    /// Default grid, starting at the radius of the circle
    pub fn around(flow: &FlowParameters) -> Self {
        Self {
            r_min: flow.radius,
            ..Self::default()
        }
    }

    /// Return grid with new radial bounds
    pub fn with_radii(mut self, r_min: f64, r_max: f64) -> Self {
        self.r_min = r_min;
        self.r_max = r_max;
        self
    }

    /// Return grid with new angular bounds
    pub fn with_angles(mut self, theta_min: f64, theta_max: f64) -> Self {
        self.theta_min = theta_min;
        self.theta_max = theta_max;
        self
    }

    /// Return grid with new sample counts
    pub fn with_samples(mut self, n_r: usize, n_theta: usize) -> Self {
        self.n_r = n_r;
        self.n_theta = n_theta;
        self
    }

    /// Radial bounds
    pub fn radial(&self) -> [f64; 2] {
        [self.r_min, self.r_max]
    }

    /// Angular bounds
    pub fn angular(&self) -> [f64; 2] {
        [self.theta_min, self.theta_max]
    }

    /// Check parameters
    ///
    /// # Errors
    /// Bounds are not finite or not ordered, or an axis is empty.
    pub fn validate(&self) -> Result<()> {
        finite("r_min", self.r_min)?;
        finite("r_max", self.r_max)?;
        finite("theta_min", self.theta_min)?;
        finite("theta_max", self.theta_max)?;
        if self.r_min <= 0. || self.r_min > self.r_max {
            return Err(Error::InvalidRadialBounds {
                r_min: self.r_min,
                r_max: self.r_max,
            });
        }
        if self.theta_min >= self.theta_max {
            return Err(Error::InvalidAngularBounds {
                theta_min: self.theta_min,
                theta_max: self.theta_max,
            });
        }
        if self.n_r == 0 {
            return Err(Error::EmptyAxis("r"));
        }
        if self.n_theta == 0 {
            return Err(Error::EmptyAxis("theta"));
        }
        Ok(())
    }
}

/// Complete setup: circle, flow, grid and boundary resolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Setup {
    /// Circle and flow
    pub flow: FlowParameters,
    /// Sampling grid
    pub grid: GridParameters,
    /// Number of points on the circle
    pub n_boundary: usize,
}

impl Default for Setup {
    fn default() -> Self {
        let flow = FlowParameters::default();
        Self {
            flow,
            grid: GridParameters::around(&flow),
            n_boundary: DEFAULT_SAMPLES,
        }
    }
}

impl Setup {
    /// Return setup with new flow parameters
    pub fn with_flow(mut self, flow: FlowParameters) -> Self {
        self.flow = flow;
        self
    }

    /// Return setup with new grid parameters
    pub fn with_grid(mut self, grid: GridParameters) -> Self {
        self.grid = grid;
        self
    }

    /// Return setup with new boundary resolution
    pub fn with_boundary_samples(mut self, n_boundary: usize) -> Self {
        self.n_boundary = n_boundary;
        self
    }

    /// Check all parameters
    ///
    /// # Errors
    /// See [`FlowParameters::validate`] and [`GridParameters::validate`],
    /// or the boundary has no samples.
    pub fn validate(&self) -> Result<()> {
        self.flow.validate()?;
        self.grid.validate()?;
        if self.n_boundary == 0 {
            return Err(Error::EmptyAxis("boundary"));
        }
        Ok(())
    }
}

fn finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::NonFinite { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let setup = Setup::default();
        assert_eq!(setup.flow.center, Complex::new(-0.1, 0.22));
        assert_eq!(setup.flow.radius, 1.12);
        assert_eq!(setup.grid.r_min, setup.flow.radius);
        assert_eq!(setup.grid.radial(), [1.12, 10.]);
        assert_eq!((setup.grid.n_theta, setup.grid.n_r), (1000, 1000));
        assert_eq!(setup.n_boundary, 1000);
        assert!(setup.validate().is_ok());
    }

    #[test]
    fn test_invalid_radius() {
        for radius in [0., -1., f64::NAN] {
            let flow = FlowParameters::default().with_circle(Complex::new(0., 0.), radius);
            assert!(matches!(
                flow.validate(),
                Err(Error::NonPositiveRadius(_))
            ));
        }
        let flow = FlowParameters::default().with_circle(Complex::new(0., 0.), f64::INFINITY);
        assert!(matches!(flow.validate(), Err(Error::NonFinite { .. })));
    }

    #[test]
    fn test_non_finite_freestream() {
        let flow = FlowParameters::default().with_freestream(f64::NAN);
        assert!(matches!(
            flow.validate(),
            Err(Error::NonFinite {
                name: "freestream",
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_grid() {
        let grid = GridParameters::default().with_radii(5., 2.);
        assert_eq!(
            grid.validate(),
            Err(Error::InvalidRadialBounds {
                r_min: 5.,
                r_max: 2.
            })
        );
        let grid = GridParameters::default().with_angles(1., 1.);
        assert!(matches!(
            grid.validate(),
            Err(Error::InvalidAngularBounds { .. })
        ));
        let grid = GridParameters::default().with_samples(0, 10);
        assert_eq!(grid.validate(), Err(Error::EmptyAxis("r")));
    }

    #[test]
    fn test_empty_boundary() {
        let setup = Setup::default().with_boundary_samples(0);
        assert_eq!(setup.validate(), Err(Error::EmptyAxis("boundary")));
    }

    #[test]
    fn test_complex_b() {
        let flow = FlowParameters::default().with_b(Complex::new(0.9, 0.1));
        assert_eq!(flow.b, Complex::new(0.9, 0.1));
        assert!(flow.validate().is_ok());
    }
}
