//! Finite-difference Hamiltonians over uniform grids and the spectra they
//! produce.
//!
//! [`Hamiltonian`] discretizes −(1/2) ∂²/∂x² + V(x) with the second-order
//! central stencil: for grid spacing Δ and α = 1/(2Δ²), the operator is
//! symmetric tridiagonal with main diagonal 2α + V and constant off-diagonal
//! −α. Truncating the matrix at the grid edges implicitly pins the
//! wavefunction to zero one step beyond each end.
//!
//! [`RadialHamiltonian`] handles the reduced radial equation: it augments the
//! potential with the centrifugal term l(l+1)/(2r²) and drops a leading grid
//! point sitting on the coordinate origin, where that term (and any 1/r-type
//! potential) is singular. Trimming costs one point of resolution near r = 0
//! and keeps second-order accuracy everywhere else.

use ndarray as nd;
use crate::{
    GRID_RTOL,
    ORIGIN_ATOL,
    eig,
    error::{ DomainError, GridError, ShapeError, SolveResult },
    potential::Potential,
    utils,
};

// validate length, monotonicity, and uniform spacing; Δ on success
fn check_uniform(x: &nd::Array1<f64>) -> Result<f64, GridError> {
    let n = x.len();
    if n < 2 { return Err(GridError::TooShort(n)); }
    let dx = x[1] - x[0];
    if dx <= 0.0 { return Err(GridError::NotIncreasing(1)); }
    for i in 2..n {
        let di = x[i] - x[i - 1];
        if di <= 0.0 { return Err(GridError::NotIncreasing(i)); }
        if (di - dx).abs() > GRID_RTOL * dx {
            return Err(GridError::NonUniform(i));
        }
    }
    Ok(dx)
}

// main and off-diagonal of the stencil operator for sampled potential `v`
fn stencil_diagonals(dx: f64, v: &nd::Array1<f64>)
    -> (nd::Array1<f64>, nd::Array1<f64>)
{
    let alpha = 0.5 * dx.powi(2).recip();
    let main = v.mapv(|vk| 2.0 * alpha + vk);
    let off = nd::Array1::from_elem(v.len() - 1, -alpha);
    (main, off)
}

/// The full spectrum of a discretized Hamiltonian.
///
/// Energies are ascending; column i of `states` is the eigenvector paired
/// with `energies[i]`, normalized to unit Euclidean norm. The columns are
/// mutually orthogonal, so `states.t().dot(&states)` is the identity to
/// floating-point accuracy.
#[derive(Clone, Debug)]
pub struct Spectrum {
    /// Eigenvalues in ascending order.
    pub energies: nd::Array1<f64>,
    /// Eigenvectors by column, index-matched to `energies`.
    pub states: nd::Array2<f64>,
}

impl Spectrum {
    /// Number of computed levels (equal to the working grid length).
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.energies.len() }

    /// View of the eigenvector paired with `energies[i]`.
    pub fn state(&self, i: usize) -> nd::ArrayView1<'_, f64> {
        self.states.column(i)
    }

    /// Copy of state `i` renormalized under the Δ-weighted grid inner
    /// product, i.e. with ∫|ψ|² dx = 1 rather than unit vector norm.
    pub fn wavefunction(&self, i: usize, dx: f64) -> nd::Array1<f64> {
        utils::wf_normalized(&self.states.column(i), dx)
    }

    /// Apply a scaling factor to the implicit length dimension associated
    /// with the states and energies.
    ///
    /// This performs the following:
    /// ```text
    /// ψ → √a * ψ
    /// E → E / a²
    /// ```
    pub fn rescale(&mut self, a: f64) {
        self.energies /= a.powi(2);
        self.states *= a.sqrt();
    }

    /// Like [`Self::rescale`], but create a copy of `self` with the specified
    /// scaling factor.
    pub fn rescaled(&self, a: f64) -> Self {
        let mut new = self.clone();
        new.rescale(a);
        new
    }
}

/// Cartesian one-dimensional Hamiltonian −(1/2) ∂²/∂x² + V(x).
///
/// Construction validates the grid, samples the potential once, and checks
/// the sample shape; a failed construction returns no partial state. The
/// potential model is held by reference and never mutated, so one model may
/// back any number of Hamiltonians.
#[derive(Clone)]
pub struct Hamiltonian<'a> {
    potential: &'a dyn Potential,
    x: nd::Array1<f64>,
    dx: f64,
    v: nd::Array1<f64>,
}

impl<'a> Hamiltonian<'a> {
    pub fn new(potential: &'a dyn Potential, x: nd::Array1<f64>)
        -> SolveResult<Self>
    {
        let dx = check_uniform(&x)?;
        let v = potential.evaluate(&x);
        ShapeError::check(v.len(), x.len())?;
        Ok(Self { potential, x, dx, v })
    }

    /// Get a reference to the coordinate grid.
    pub fn grid(&self) -> &nd::Array1<f64> { &self.x }

    /// Get the grid spacing Δ.
    pub fn spacing(&self) -> f64 { self.dx }

    /// Get a reference to the sampled potential values.
    pub fn potential_values(&self) -> &nd::Array1<f64> { &self.v }

    /// Reference energy scale reported by the underlying potential model.
    pub fn characteristic_energy(&self) -> f64 {
        self.potential.characteristic_energy()
    }

    /// Main and off-diagonal of the stencil operator.
    ///
    /// Rebuilt on every call; the instance carries no solver state, so
    /// [`solve`][Self::solve] is reentrant.
    pub fn diagonals(&self) -> (nd::Array1<f64>, nd::Array1<f64>) {
        stencil_diagonals(self.dx, &self.v)
    }

    /// Compute the full spectrum of the discretized operator.
    pub fn solve(&self) -> SolveResult<Spectrum> {
        let (main, off) = self.diagonals();
        let (energies, states) = eig::eigh_tridiagonal(&main, &off)?;
        Ok(Spectrum { energies, states })
    }
}

/// Radial Hamiltonian for the reduced wavefunction u(r) = r R(r):
/// −(1/2) ∂²/∂r² + V(r) + l(l+1)/(2r²).
///
/// If the first grid point sits on the coordinate origin (within a small
/// tolerance) it is dropped from the working grid before the potential is
/// sampled, so both the centrifugal term and any 1/r-type potential are only
/// ever evaluated at r > 0. Matrix truncation then enforces u = 0 at the
/// origin, which is the physical boundary condition for the reduced equation.
#[derive(Clone)]
pub struct RadialHamiltonian<'a> {
    potential: &'a dyn Potential,
    r: nd::Array1<f64>,
    dr: f64,
    l: f64,
    v: nd::Array1<f64>,
}

impl<'a> RadialHamiltonian<'a> {
    /// Construct for angular-momentum index `l ≥ 0` (pass `0.0` for pure
    /// s-wave problems).
    pub fn new(potential: &'a dyn Potential, r: nd::Array1<f64>, l: f64)
        -> SolveResult<Self>
    {
        DomainError::check_angular_momentum(l)?;
        let r
            = if r.first().is_some_and(|&r0| r0.abs() <= ORIGIN_ATOL) {
                r.slice(nd::s![1..]).to_owned()
            } else {
                r
            };
        let dr = check_uniform(&r)?;
        let bare = potential.evaluate(&r);
        ShapeError::check(bare.len(), r.len())?;
        let v = bare + r.mapv(|rk| l * (l + 1.0) / (2.0 * rk.powi(2)));
        Ok(Self { potential, r, dr, l, v })
    }

    /// Get a reference to the working (possibly origin-trimmed) grid.
    pub fn grid(&self) -> &nd::Array1<f64> { &self.r }

    /// Get the grid spacing Δ of the working grid.
    pub fn spacing(&self) -> f64 { self.dr }

    /// Get the angular-momentum index.
    pub fn angular_momentum(&self) -> f64 { self.l }

    /// Get a reference to the effective potential samples, centrifugal term
    /// included.
    pub fn potential_values(&self) -> &nd::Array1<f64> { &self.v }

    /// Reference energy scale reported by the underlying potential model.
    pub fn characteristic_energy(&self) -> f64 {
        self.potential.characteristic_energy()
    }

    /// Main and off-diagonal of the stencil operator over the effective
    /// potential.
    pub fn diagonals(&self) -> (nd::Array1<f64>, nd::Array1<f64>) {
        stencil_diagonals(self.dr, &self.v)
    }

    /// Compute the full spectrum of the discretized radial operator.
    pub fn solve(&self) -> SolveResult<Spectrum> {
        let (main, off) = self.diagonals();
        let (energies, states) = eig::eigh_tridiagonal(&main, &off)?;
        Ok(Spectrum { energies, states })
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;
    use ndarray as nd;
    use crate::{
        error::{ DomainError, GridError, SolveError },
        potential::{
            Coulomb,
            DoubleWell,
            FreeParticle,
            HarmonicOscillator,
            InfiniteWell,
            Potential,
        },
        utils,
    };
    use super::*;

    #[test]
    fn spectrum_size_and_ordering() {
        let fp = FreeParticle::new(1.0, 1.0).unwrap();
        let x = nd::Array1::linspace(-5.0, 5.0, 80);
        let ham = Hamiltonian::new(&fp, x).unwrap();
        let spec = ham.solve().unwrap();
        assert_eq!(spec.len(), 80);
        for i in 1..spec.len() {
            assert!(
                spec.energies[i] >= spec.energies[i - 1],
                "energies not ascending at index {i}"
            );
        }
        let gram = spec.states.t().dot(&spec.states);
        for i in 0..spec.len() {
            for j in 0..spec.len() {
                let expect = if i == j { 1.0 } else { 0.0 };
                assert!(
                    (gram[[i, j]] - expect).abs() < 1e-9,
                    "gram[{i},{j}] = {}", gram[[i, j]]
                );
            }
        }
    }

    #[test]
    fn infinite_well_ground_level() {
        // particle in a box of unit width: E₁ = π²/2 in natural units
        let well = InfiniteWell::new(1.0, 1.0, 0.0).unwrap();
        let x = nd::Array1::linspace(0.0, 1.0, 500);
        let ham = Hamiltonian::new(&well, x).unwrap();
        let spec = ham.solve().unwrap();
        let exact = PI.powi(2) / 2.0;
        let rel = (spec.energies[0] - exact).abs() / exact;
        assert!(
            rel < 0.02,
            "ground level {} vs {exact}, rel err {rel:.4}",
            spec.energies[0]
        );
    }

    #[test]
    fn harmonic_oscillator_level_spacing() {
        let ho = HarmonicOscillator::new(1.0, 1.0, 0.0).unwrap();
        let x = nd::Array1::linspace(-6.0, 6.0, 501);
        let ham = Hamiltonian::new(&ho, x).unwrap();
        let spec = ham.solve().unwrap();
        assert!(
            (spec.energies[0] - 0.5).abs() < 0.01,
            "ground level {}", spec.energies[0]
        );
        for n in 0..3 {
            let gap = spec.energies[n + 1] - spec.energies[n];
            assert!(
                (gap - 1.0).abs() < 0.02,
                "spacing E{} - E{} = {gap}", n + 1, n
            );
        }
    }

    #[test]
    fn hydrogen_s_levels() {
        // radial Coulomb problem in atomic units: Eₙ = -1/(2n²)
        let coul = Coulomb::new();
        let r = nd::Array1::linspace(0.0, 25.0, 501);
        let ham = RadialHamiltonian::new(&coul, r, 0.0).unwrap();
        let spec = ham.solve().unwrap();
        let rel0 = (spec.energies[0] + 0.5).abs() / 0.5;
        assert!(rel0 < 0.01, "1s level {}, rel err {rel0:.4}", spec.energies[0]);
        let rel1 = (spec.energies[1] + 0.125).abs() / 0.125;
        assert!(rel1 < 0.05, "2s level {}, rel err {rel1:.4}", spec.energies[1]);
    }

    #[test]
    fn radial_grid_trimmed_at_origin() {
        let coul = Coulomb::new();
        let r = nd::Array1::linspace(0.0, 10.0, 101);
        let ham = RadialHamiltonian::new(&coul, r, 0.0).unwrap();
        assert_eq!(ham.grid().len(), 100);
        assert!(ham.grid()[0] > 0.0);
        assert_eq!(ham.solve().unwrap().len(), 100);

        // a grid starting away from the origin is used as given
        let r_off = nd::Array1::linspace(0.5, 10.0, 96);
        let ham_off = RadialHamiltonian::new(&coul, r_off, 0.0).unwrap();
        assert_eq!(ham_off.grid().len(), 96);
    }

    #[test]
    fn negative_angular_momentum_rejected() {
        let coul = Coulomb::new();
        let r = nd::Array1::linspace(0.0, 10.0, 101);
        assert!(matches!(
            RadialHamiltonian::new(&coul, r, -1.0),
            Err(SolveError::Domain(DomainError::BadAngularMomentum(_))),
        ));
    }

    #[test]
    fn centrifugal_term_added_on_working_grid() {
        let fp = FreeParticle::new(1.0, 1.0).unwrap();
        let r = nd::Array1::linspace(0.0, 4.0, 5);
        let ham = RadialHamiltonian::new(&fp, r, 1.0).unwrap();
        // working grid is [1, 2, 3, 4]; effective V = l(l+1)/(2r²) = 1/r²
        let expect = nd::array![1.0, 0.25, 1.0 / 9.0, 1.0 / 16.0];
        for (vk, ek) in ham.potential_values().iter().zip(&expect) {
            assert!((vk - ek).abs() < 1e-12);
        }
    }

    #[test]
    fn double_well_quasi_degeneracy() {
        // splitting of the lowest doublet shrinks as the barrier grows
        let x = nd::Array1::linspace(-1.5, 4.0, 401);
        let low = DoubleWell::new(1.0, 1.0, 0.0, 1.5, 20.0).unwrap();
        let high = DoubleWell::new(1.0, 1.0, 0.0, 1.5, 60.0).unwrap();
        let gap_low = {
            let spec = Hamiltonian::new(&low, x.clone()).unwrap()
                .solve().unwrap();
            spec.energies[1] - spec.energies[0]
        };
        let gap_high = {
            let spec = Hamiltonian::new(&high, x).unwrap().solve().unwrap();
            spec.energies[1] - spec.energies[0]
        };
        assert!(gap_low > 0.0 && gap_high > 0.0);
        assert!(
            gap_high < gap_low,
            "splitting must shrink with barrier height; got {gap_high} vs \
            {gap_low}"
        );
        assert!(
            gap_high < 0.2,
            "lowest doublet not quasi-degenerate; gap {gap_high}"
        );
    }

    #[test]
    fn solve_is_deterministic() {
        let ho = HarmonicOscillator::new(1.0, 1.0, 0.0).unwrap();
        let x = nd::Array1::linspace(-4.0, 4.0, 50);
        let ham = Hamiltonian::new(&ho, x).unwrap();
        let a = ham.solve().unwrap();
        let b = ham.solve().unwrap();
        assert_eq!(a.energies, b.energies);
        assert_eq!(a.states, b.states);
    }

    #[test]
    fn stencil_diagonal_values() {
        let fp = FreeParticle::new(1.0, 1.0).unwrap();
        let x = nd::Array1::linspace(0.0, 1.0, 11);
        let ham = Hamiltonian::new(&fp, x).unwrap();
        let (main, off) = ham.diagonals();
        let alpha = 0.5 / ham.spacing().powi(2);
        assert_eq!(main.len(), 11);
        assert_eq!(off.len(), 10);
        assert!(main.iter().all(|&mk| (mk - 2.0 * alpha).abs() < 1e-9));
        assert!(off.iter().all(|&ok| (ok + alpha).abs() < 1e-9));
    }

    #[test]
    fn invalid_grids_rejected() {
        let fp = FreeParticle::new(1.0, 1.0).unwrap();
        assert!(matches!(
            Hamiltonian::new(&fp, nd::array![1.0]),
            Err(SolveError::Grid(GridError::TooShort(1))),
        ));
        assert!(matches!(
            Hamiltonian::new(&fp, nd::array![0.0, 1.0, 0.5]),
            Err(SolveError::Grid(GridError::NotIncreasing(2))),
        ));
        assert!(matches!(
            Hamiltonian::new(&fp, nd::array![0.0, 1.0, 3.0]),
            Err(SolveError::Grid(GridError::NonUniform(2))),
        ));
    }

    #[test]
    fn mismatched_potential_samples_rejected() {
        // a model that violates the evaluate contract
        struct Broken;
        impl Potential for Broken {
            fn evaluate(&self, x: &nd::Array1<f64>) -> nd::Array1<f64> {
                nd::Array1::zeros(x.len() / 2)
            }
            fn characteristic_energy(&self) -> f64 { 0.0 }
        }
        let x = nd::Array1::linspace(0.0, 1.0, 10);
        assert!(matches!(
            Hamiltonian::new(&Broken, x),
            Err(SolveError::Shape(_)),
        ));
    }

    #[test]
    fn rescale_spectrum() {
        let ho = HarmonicOscillator::new(1.0, 1.0, 0.0).unwrap();
        let x = nd::Array1::linspace(-4.0, 4.0, 60);
        let spec = Hamiltonian::new(&ho, x).unwrap().solve().unwrap();
        let scaled = spec.rescaled(2.0);
        assert!((scaled.energies[0] - spec.energies[0] / 4.0).abs() < 1e-12);
        assert!(
            (scaled.states[[0, 0]] - spec.states[[0, 0]] * 2.0_f64.sqrt())
                .abs() < 1e-12
        );
    }

    #[test]
    fn wavefunction_grid_normalized() {
        let ho = HarmonicOscillator::new(1.0, 1.0, 0.0).unwrap();
        let x = nd::Array1::linspace(-6.0, 6.0, 201);
        let ham = Hamiltonian::new(&ho, x).unwrap();
        let spec = ham.solve().unwrap();
        let wf = spec.wavefunction(0, ham.spacing());
        let norm = utils::wf_norm(&wf, ham.spacing());
        assert!((norm - 1.0).abs() < 1e-9, "norm = {norm}");
        // ground state of the oscillator has no interior nodes
        let sign = wf[100].signum();
        assert!(wf.iter().skip(20).take(161).all(|&q| q * sign > 0.0));
    }
}
