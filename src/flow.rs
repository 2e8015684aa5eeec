//! # Potential flow with circulation
//! Complex potential of a uniform stream past a cylinder plus a
//! point vortex at the origin
//! $$
//! W(z) = u z + u / z - i \Gamma / (2 \pi) \ln(z)
//! $$
//! and its streamfunction `psi = Im W`, whose level curves are the
//! streamlines.
//!
//! The logarithm is the principal branch (argument in (-pi, pi]).
//! For nonzero circulation the potential therefore jumps by `Gamma`
//! across the negative real axis. The jump is kept as is, no branch
//! unwrapping is applied.
pub mod potential;
pub mod stream;
pub use potential::{complex_potential, complex_potential_par, PotentialFlow};
pub use stream::{stream_values, streamfunction, streamfunction_par};
