//! # Sampling of the complex plane
//! Points on a circle (the body boundary) and a polar grid around
//! it (the flow domain).
//!
//! Both are anchored at the circle's own center, so the grid has
//! uniform resolution along the boundary and gets sparser further
//! out, where the flow is close to uniform.
pub mod circle;
pub mod grid;
pub use circle::{angle_axis, circle, Angles, DEFAULT_SAMPLES};
pub use grid::grid_around_circle;
