//! Cosine similarity between term vectors.
//!
//! All arithmetic happens in f64 regardless of the element type, so count
//! vectors (`u32`) and weighted vectors (`f64`) share one code path.

use crate::error::{Error, Result};

/// Dot product over the common prefix of `a` and `b`.
pub fn dot<T: Copy + Into<f64>>(a: &[T], b: &[T]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(&x, &y)| Into::<f64>::into(x) * Into::<f64>::into(y))
        .sum()
}

/// Euclidean (L2) norm.
pub fn norm<T: Copy + Into<f64>>(v: &[T]) -> f64 {
    v.iter()
        .map(|&x| {
            let x = Into::<f64>::into(x);
            x * x
        })
        .sum::<f64>()
        .sqrt()
}

/// `dot(q, d) / (‖q‖·‖d‖)`, or 0.0 when either vector has zero norm.
///
/// Fails with [`Error::DimensionMismatch`] if the lengths differ. The result is
/// clamped to `[-1, 1]` to absorb rounding; for non-negative inputs it lies in `[0, 1]`.
pub fn cosine_similarity<T: Copy + Into<f64>>(query: &[T], document: &[T]) -> Result<f64> {
    if query.len() != document.len() {
        return Err(Error::DimensionMismatch { expected: query.len(), found: document.len() });
    }
    let (nq, nd) = (norm(query), norm(document));
    if nq == 0.0 || nd == 0.0 {
        return Ok(0.0);
    }
    Ok((dot(query, document) / (nq * nd)).clamp(-1.0, 1.0))
}
