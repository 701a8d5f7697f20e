//! Theoretical background.
//!
//! # Contents
//! - [Discretization](#discretization)
//! - [Boundary behavior](#boundary-behavior)
//! - [Units](#units)
//! - [Radial problems](#radial-problems)
//!
//! # Discretization
//! Bound states of a particle in a conservative potential are eigenpairs of
//! the time-independent Schrödinger equation,
//! ```text
//!    1  ∂²ψ
//! − --- ---- + V(x) ψ(x) = E ψ(x)
//!    2  ∂x²
//! ```
//! Sampling over a uniform grid
//! ```text
//! x[i] = x₀ + i Δ, i ∊ {0, ..., N - 1}
//! ψ[i] = ψ(x[i])
//! V[i] = V(x[i])
//! ```
//! and replacing the second derivative with the three-point central stencil
//! ```text
//! ∂²ψ      ψ[i - 1] - 2 ψ[i] + ψ[i + 1]
//! ---[i] ≈ ----------------------------- + O(Δ²)
//! ∂x²                   Δ²
//! ```
//! turns the differential equation into a matrix eigenvalue problem whose
//! operator is symmetric tridiagonal: with α = 1/(2Δ²), the main diagonal is
//! 2α + V[i] and both off-diagonals are the constant −α. The
//! [eigensolver][crate::eig::eigh_tridiagonal] works directly on those two
//! arrays, never materializing the dense matrix, and returns all N
//! eigenvalues in ascending order with orthonormal eigenvectors.
//!
//! # Boundary behavior
//! Truncating the operator at the first and last grid points implicitly sets
//! ψ = 0 one step beyond each end of the grid, i.e. hard walls at x₀ − Δ and
//! x₀ + N Δ. For genuinely bound states this is harmless provided the grid
//! extends well into the classically forbidden region; for box-type problems
//! it shifts levels by the effective widening of the box, which vanishes as
//! Δ → 0.
//!
//! # Units
//! The stencil above is written in natural units: ħ = 1 and the particle
//! mass is absorbed into α. Callers who need a concrete unit system should
//! express their grid and potential in natural units of a chosen length
//! scale *a* and energy scale ħ²/(2 m a²) (see
//! [`units::Units`][crate::units::Units]), then undo the scaling on the
//! output with [`Spectrum::rescale`][crate::hamiltonian::Spectrum::rescale].
//! The closed-form [characteristic
//! energies][crate::potential::Potential::characteristic_energy] are the one
//! exception: they are quoted with SI constants, following the reference
//! formulas they come from, and serve only as scale hints.
//!
//! # Radial problems
//! For a spherically symmetric potential the substitution u(r) = r R(r)
//! reduces the three-dimensional problem to a one-dimensional one on r ≥ 0,
//! ```text
//!    1  ∂²u    ⎛        l (l + 1) ⎞
//! − --- ---- + ⎜ V(r) + --------- ⎟ u(r) = E u(r)
//!    2  ∂r²    ⎝          2 r²    ⎠
//! ```
//! identical in form to the Cartesian equation with the centrifugal term
//! folded into an effective potential. Both that term and Coulomb-type
//! potentials are singular at r = 0, so a leading grid point sitting on the
//! origin is dropped before sampling
//! ([`RadialHamiltonian`][crate::hamiltonian::RadialHamiltonian]). Matrix
//! truncation then pins u(0) = 0, which is exactly the boundary condition
//! the reduced equation requires; the cost is one grid point of resolution
//! near the origin, and accuracy away from it stays second order.
