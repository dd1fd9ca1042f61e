//! Lab coordinate time -> proper time by bisection on the time component.

use tracing::{trace, warn};
use worldline_cas::{AlgebraEngine, SymbolicAdapter};

use crate::config::LocatorConfig;
use crate::error::LocateError;
use crate::vector::SymbolicVector4;

/// Proper time at which `x`'s time component reaches `target`.
///
/// Assumes `t(tau)` is increasing, which holds for admissible worldlines
/// (`dt/dtau = gamma >= 1`). Returns the last midpoint once the residual is
/// below `tolerance`, or after `max_iterations` if the residual stays under
/// `divergence_limit`.
pub fn locate<E: AlgebraEngine>(
    adapter: &SymbolicAdapter<E>,
    x: &SymbolicVector4,
    target: f64,
    config: &LocatorConfig,
) -> Result<f64, LocateError> {
    let (mut lo, mut hi) = (config.lower, config.upper);
    let mut mid = 0.5 * (lo + hi);
    let mut residual = f64::INFINITY;
    for iteration in 0..config.max_iterations {
        mid = 0.5 * (lo + hi);
        let t = adapter.evaluate_at(x.time(), mid).unwrap_or(f64::NAN);
        if t.is_nan() {
            return Err(LocateError::NotANumber { tau: mid });
        }
        residual = (t - target).abs();
        if residual < config.tolerance {
            trace!(iteration, tau = mid, residual, "bisection converged");
            return Ok(mid);
        }
        if t < target {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    if residual > config.divergence_limit {
        return Err(LocateError::NoConvergence { residual });
    }
    Ok(mid)
}

/// [`locate`] with the default bracket, clamped to `0` on any failure.
///
/// The zero is a safety value, not a solution: callers that need to tell
/// the two apart use [`locate`].
pub fn find_tau<E: AlgebraEngine>(adapter: &SymbolicAdapter<E>, x: &SymbolicVector4, target: f64) -> f64 {
    find_tau_with(adapter, x, target, &LocatorConfig::default())
}

pub fn find_tau_with<E: AlgebraEngine>(
    adapter: &SymbolicAdapter<E>,
    x: &SymbolicVector4,
    target: f64,
    config: &LocatorConfig,
) -> f64 {
    locate(adapter, x, target, config).unwrap_or_else(|err| {
        warn!(%err, time = %x.time(), target, "proper-time lookup failed, clamping to 0");
        0.0
    })
}
