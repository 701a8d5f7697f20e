//! Eigensolver specialized to symmetric tridiagonal operators.
//!
//! The finite-difference stencil produces operators with a constant
//! off-diagonal and a potential-shifted main diagonal, so the full spectrum
//! is computed directly on the two diagonal arrays: implicit-QL iteration
//! with Wilkinson shifts, accumulating the Givens rotations into the
//! eigenvector matrix. An LDLT Sturm sequence is also provided for counting
//! eigenvalues below a bound, which makes an independent cross-check on the
//! QL output.

use ndarray as nd;
use crate::{
    Arr1,
    error::{ ShapeError, SolveError, SolveResult },
};

/// Per-eigenvalue cap on QL sweeps.
const QL_MAXITERS: usize = 50;

/// Smallest admissible LDLT pivot magnitude in the Sturm sequence.
const STURM_PIVOT_GUARD: f64 = 1e-300;

/// Count eigenvalues of a symmetric tridiagonal matrix strictly less than λ.
///
/// Uses the LDLT factorization (Sturm sequence): the number of negative
/// pivots equals the number of eigenvalues below λ.
///
/// - `diag`: main diagonal, length n
/// - `offdiag`: sub/super-diagonal, length n − 1
pub fn sturm_count<S, T>(diag: &Arr1<S>, offdiag: &Arr1<T>, lambda: f64)
    -> usize
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    let n = diag.len();
    if n == 0 { return 0; }

    let mut count: usize = 0;
    let mut q = diag[0] - lambda;
    if q < 0.0 { count += 1; }
    for i in 1..n {
        let q_safe
            = if q.abs() < STURM_PIVOT_GUARD {
                STURM_PIVOT_GUARD.copysign(q)
            } else {
                q
            };
        q = (diag[i] - lambda) - offdiag[i - 1].powi(2) / q_safe;
        if q < 0.0 { count += 1; }
    }
    count
}

/// Compute all eigenvalues and eigenvectors of a symmetric tridiagonal
/// matrix.
///
/// Returns eigenvalues in ascending order along with an n×n matrix whose
/// column i is the unit-norm eigenvector paired with eigenvalue i; the
/// columns are mutually orthogonal to floating-point accuracy since they are
/// accumulated from pure rotations.
///
/// Fails with [`SolveError::Shape`] if `offdiag` is not one element shorter
/// than `diag`, and with [`SolveError::NoConvergence`] if any eigenvalue
/// fails to deflate within the sweep cap.
pub fn eigh_tridiagonal<S, T>(diag: &Arr1<S>, offdiag: &Arr1<T>)
    -> SolveResult<(nd::Array1<f64>, nd::Array2<f64>)>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    let n = diag.len();
    if n == 0 {
        ShapeError::check(offdiag.len(), 0)?;
        return Ok((nd::Array1::zeros(0), nd::Array2::zeros((0, 0))));
    }
    ShapeError::check(offdiag.len() + 1, n)?;
    if n == 1 {
        return Ok((diag.to_owned(), nd::Array2::eye(1)));
    }

    let mut d: nd::Array1<f64> = diag.to_owned();
    // off-diagonal working copy, padded so e[i] couples points i and i + 1
    let mut e: nd::Array1<f64> = nd::Array1::zeros(n);
    e.slice_mut(nd::s![..n - 1]).assign(offdiag);
    let mut z: nd::Array2<f64> = nd::Array2::eye(n);

    for l in 0..n {
        let mut iters: usize = 0;
        loop {
            // locate the first negligible off-diagonal element at or past l
            let mut m = l;
            while m < n - 1 {
                let dd = d[m].abs() + d[m + 1].abs();
                if e[m].abs() <= f64::EPSILON * dd { break; }
                m += 1;
            }
            if m == l { break; }
            if iters == QL_MAXITERS {
                return Err(SolveError::NoConvergence(QL_MAXITERS));
            }
            iters += 1;

            // Wilkinson shift from the leading 2×2 block
            let mut g = (d[l + 1] - d[l]) / (2.0 * e[l]);
            let mut r = g.hypot(1.0);
            g = d[m] - d[l] + e[l] / (g + r.copysign(g));

            let mut s: f64 = 1.0;
            let mut c: f64 = 1.0;
            let mut p: f64 = 0.0;
            let mut deflated = false;
            for i in (l..m).rev() {
                let mut f = s * e[i];
                let b = c * e[i];
                r = f.hypot(g);
                e[i + 1] = r;
                if r == 0.0 {
                    // rotation underflow: deflate and restart the sweep
                    d[i + 1] -= p;
                    e[m] = 0.0;
                    deflated = true;
                    break;
                }
                s = f / r;
                c = g / r;
                g = d[i + 1] - p;
                r = (d[i] - g) * s + 2.0 * c * b;
                p = s * r;
                d[i + 1] = g + p;
                g = c * r - b;
                for k in 0..n {
                    f = z[[k, i + 1]];
                    z[[k, i + 1]] = s * z[[k, i]] + c * f;
                    z[[k, i]] = c * z[[k, i]] - s * f;
                }
            }
            if deflated { continue; }
            d[l] -= p;
            e[l] = g;
            e[m] = 0.0;
        }
    }

    // ascending eigenvalues with matching column permutation
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&i, &j| d[i].total_cmp(&d[j]));
    let evals: nd::Array1<f64> = order.iter().map(|&i| d[i]).collect();
    let mut evecs: nd::Array2<f64> = nd::Array2::zeros((n, n));
    for (jnew, &jold) in order.iter().enumerate() {
        evecs.column_mut(jnew).assign(&z.column(jold));
    }
    Ok((evals, evecs))
}
