//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use thiserror::Error;

/// Returned when a model parameter or solver argument lies outside its
/// mathematical domain.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Returned when a non-positive mass is encountered.
    #[error("mass must be greater than 0; got {0}")]
    BadMass(f64),

    /// Returned when a non-positive width is encountered.
    #[error("width must be greater than 0; got {0}")]
    BadWidth(f64),

    /// Returned when a negative angular-momentum index is encountered.
    #[error("angular momentum must be at least 0; got {0}")]
    BadAngularMomentum(f64),
}

impl DomainError {
    pub(crate) fn check_mass(mass: f64) -> Result<(), Self> {
        (mass > 0.0).then_some(()).ok_or(Self::BadMass(mass))
    }

    pub(crate) fn check_width(width: f64) -> Result<(), Self> {
        (width > 0.0).then_some(()).ok_or(Self::BadWidth(width))
    }

    pub(crate) fn check_angular_momentum(l: f64) -> Result<(), Self> {
        (l >= 0.0).then_some(()).ok_or(Self::BadAngularMomentum(l))
    }
}

/// Returned when a coordinate grid fails a precondition of the
/// finite-difference stencil.
#[derive(Debug, Error)]
pub enum GridError {
    /// Returned when a grid holds fewer than two points.
    #[error("coordinate grids must hold at least 2 points; got {0}")]
    TooShort(usize),

    /// Returned when consecutive grid points fail to increase. Holds the
    /// index of the first non-increasing step.
    #[error("coordinate grids must be strictly increasing; first violation at index {0}")]
    NotIncreasing(usize),

    /// Returned when grid spacing is non-uniform. Holds the index of the
    /// first step that deviates from the leading spacing.
    #[error("coordinate grids must be uniformly spaced; first deviation at index {0}")]
    NonUniform(usize),
}

/// Returned when two arrays that must agree in length do not, e.g. a
/// potential's sampled values against the grid they were sampled on.
#[derive(Debug, Error)]
#[error("incompatible array lengths; got {0} against {1}")]
pub struct ShapeError(pub usize, pub usize);

impl ShapeError {
    pub(crate) fn check(got: usize, expected: usize) -> Result<(), Self> {
        (got == expected).then_some(()).ok_or(Self(got, expected))
    }
}

/// Returned from Hamiltonian construction and spectrum solvers.
#[derive(Debug, Error)]
pub enum SolveError {
    /// [`DomainError`]
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// [`GridError`]
    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    /// [`ShapeError`]
    #[error("shape error: {0}")]
    Shape(#[from] ShapeError),

    /// Returned when the eigensolver fails to isolate an eigenvalue within
    /// its iteration cap.
    #[error("eigensolver failed to converge within {0} iterations")]
    NoConvergence(usize),
}

pub type SolveResult<T> = Result<T, SolveError>;
