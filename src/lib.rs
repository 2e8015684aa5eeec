//! # `joukowski`: Potential flow around a Joukowski airfoil
//!
//! Closed-form complex analysis of the flow around a circle and its
//! image under the Joukowski transform.
//!
//! # Details
//!
//! The library is a thin numerics layer on top of `ndarray` and
//! `num-complex`. Every computation takes complex points, either a
//! curve (`Array1`) or a grid (`Array2`), and returns a new array of
//! the same shape:
//!
//! - Points on a circle, see [`geometry::circle`]
//! - Polar grid around a circle, see [`geometry::grid_around_circle`]
//! - Joukowski transform `z + b^2/z`, see [`transform::joukowski_transform`]
//! - Complex potential `u z + u/z - i Gamma/(2 pi) ln z`,
//! see [`flow::complex_potential`]
//! - Streamfunction `Im W`, see [`flow::streamfunction`]
//!
//! Grid-sized inputs can be evaluated in parallel with the `_par`
//! variants.
//!
//! ## Singularities
//!
//! The transform and the potential are undefined at the origin.
//! Evaluating them there yields infinite or NaN values, no error.
//! The logarithm in the potential uses the principal branch, so the
//! potential jumps by `Gamma` across the negative real axis.
//!
//! # Example
//! Streamfunction around the default circle, mapped to the airfoil plane
//! ```
//! use joukowski::config::{GridParameters, Setup};
//! use joukowski::panels::{Plane, StreamPanel};
//!
//! let setup = Setup::default().with_grid(GridParameters::default().with_samples(50, 100));
//! let panel = StreamPanel::new(&setup, -3., Plane::Airfoil).unwrap();
//! assert_eq!(panel.psi.shape(), &[100, 50]);
//! ```
//!
//! ## Plotting
//!
//! Drawing is not part of this crate. [`panels`] collects boundary,
//! grid, values and labels in the layout a contour plot expects.
#![warn(missing_docs)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
pub mod config;
pub mod convert;
pub mod error;
pub mod flow;
pub mod geometry;
pub mod panels;
pub mod transform;
pub mod types;

pub use error::{Error, Result};
