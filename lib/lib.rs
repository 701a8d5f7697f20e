//! Bound-state solver for the one-dimensional, time-independent Schrödinger
//! equation on uniform coordinate grids.
//!
//! Given a [potential model][potential::Potential] and a grid, a
//! [`Hamiltonian`][hamiltonian::Hamiltonian] discretizes −(1/2) ∂²/∂x² + V(x)
//! with the second-order central finite-difference stencil, yielding a
//! symmetric tridiagonal operator whose full spectrum (ascending energies
//! paired with orthonormal eigenvectors) is computed by a
//! [tridiagonal-specialized eigensolver][eig::eigh_tridiagonal]. A
//! [radial variant][hamiltonian::RadialHamiltonian] adds the centrifugal term
//! l(l+1)/(2r²) and trims the coordinate origin to sidestep its singularity.
//!
//! Everything is expressed in natural units with ħ = 1 and the particle mass
//! absorbed into the stencil coefficient; see [`docs`] for the conventions
//! and [`units::Units`] for converting to and from a concrete base unit
//! system.

pub mod error;
pub mod units;
pub mod potential;
pub mod eig;
pub mod hamiltonian;
pub mod utils;

pub mod docs;

/// Relative tolerance on grid-spacing uniformity.
pub(crate) const GRID_RTOL: f64 = 1e-8;
/// Absolute tolerance under which a leading radial grid point is taken to sit
/// on the coordinate origin.
pub(crate) const ORIGIN_ATOL: f64 = 1e-8;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
pub type Arr2<S> = ndarray::ArrayBase<S, ndarray::Ix2>;
