//! Grid inner-product tools for sampled wavefunctions.
//!
//! All routines weight by the trapezoidal rule, so endpoints count half; a
//! wavefunction with `wf_norm(q, dx) == 1` satisfies ∫|ψ|² dx = 1 on the
//! sampled interval.

use ndarray::{ self as nd, Ix1 };
use num_traits::Float;

/// Integrate using the trapezoidal rule.
///
/// *Panics if `y` has length less than 2*.
pub fn trapz<S, A>(y: &nd::ArrayBase<S, Ix1>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    let n: usize = y.len();
    let two = A::one() + A::one();
    (dx / two) * (y[0] + two * y.slice(nd::s![1..n - 1]).sum() + y[n - 1])
}

/// Calculate the squared norm of a wavefunction under the Δ-weighted grid
/// inner product.
///
/// *Panics if `q` has length less than 2*.
pub fn wf_norm<S, A>(q: &nd::ArrayBase<S, Ix1>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    let n: usize = q.len();
    let two = A::one() + A::one();
    (dx / two) * (
        q[0].powi(2)
        + two * q.iter().skip(1).take(n - 2)
            .fold(A::zero(), |acc, qk| acc + qk.powi(2))
        + q[n - 1].powi(2)
    )
}

/// Calculate the inner product of two wavefunctions.
///
/// *Panics if either array has length less than 2*.
pub fn wf_dot<S, T, A>(
    q: &nd::ArrayBase<S, Ix1>,
    p: &nd::ArrayBase<T, Ix1>,
    dx: A,
) -> A
where
    S: nd::Data<Elem = A>,
    T: nd::Data<Elem = A>,
    A: Float,
{
    let n: usize = q.len().min(p.len());
    let two = A::one() + A::one();
    (dx / two) * (
        q[0] * p[0]
        + two * q.iter().zip(p).skip(1).take(n - 2)
            .fold(A::zero(), |acc, (qk, pk)| acc + *qk * *pk)
        + q[n - 1] * p[n - 1]
    )
}

/// Renormalize a wavefunction in place.
///
/// *Panics if `q` has length less than 2*.
pub fn wf_renormalize<S, A>(q: &mut nd::ArrayBase<S, Ix1>, dx: A)
where
    S: nd::DataMut<Elem = A>,
    A: Float,
{
    let norm = wf_norm(q, dx).sqrt();
    q.iter_mut().for_each(|qk| { *qk = *qk / norm; });
}

/// Return a normalized copy of a wavefunction.
///
/// *Panics if `q` has length less than 2*.
pub fn wf_normalized<S, A>(q: &nd::ArrayBase<S, Ix1>, dx: A)
    -> nd::Array1<A>
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    let norm = wf_norm(q, dx).sqrt();
    q.mapv(|qk| qk / norm)
}
