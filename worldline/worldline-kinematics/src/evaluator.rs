//! Symbolic 4-vector -> numbers at one proper time.

use tracing::warn;
use worldline_cas::{AlgebraEngine, SymbolicAdapter};
use worldline_core::{FourVector, ZERO};

use crate::error::EvalError;
use crate::vector::SymbolicVector4;

/// Evaluate every component at `tau`, failing on the first component that
/// errors or is not finite.
pub fn try_evaluate<E: AlgebraEngine>(
    adapter: &SymbolicAdapter<E>,
    v: &SymbolicVector4,
    tau: f64,
) -> Result<FourVector, EvalError> {
    let mut out = ZERO;
    for (index, c) in v.iter().enumerate() {
        let value = adapter.evaluate_at(c, tau).map_err(|source| EvalError::Algebra { index, source })?;
        if !value.is_finite() {
            return Err(EvalError::NonFinite { index, value });
        }
        out[index] = value;
    }
    Ok(out)
}

/// Evaluate at `tau`. Any failing or non-finite component degrades the
/// whole vector to zero; the failure is logged, never returned.
pub fn evaluate<E: AlgebraEngine>(adapter: &SymbolicAdapter<E>, v: &SymbolicVector4, tau: f64) -> FourVector {
    try_evaluate(adapter, v, tau).unwrap_or_else(|err| {
        warn!(%err, vector = %v, tau, "evaluation failed, using zero vector");
        ZERO
    })
}

/// Evaluate `v` at `n` evenly spaced proper times over `[start, end]` for a
/// worldline trace.
pub fn sample_worldline<E: AlgebraEngine>(
    adapter: &SymbolicAdapter<E>,
    v: &SymbolicVector4,
    start: f64,
    end: f64,
    n: usize,
) -> Vec<(f64, FourVector)> {
    let step = if n > 1 { (end - start) / (n - 1) as f64 } else { 0.0 };
    (0..n)
        .map(|i| {
            let tau = start + i as f64 * step;
            (tau, evaluate(adapter, v, tau))
        })
        .collect()
}
