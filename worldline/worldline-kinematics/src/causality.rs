//! Causality checks on symbolic velocities.

use tracing::debug;
use worldline_cas::{AlgebraEngine, SymbolicAdapter};
use worldline_core::{spatial_norm2, validate_velocity, VelocityReport};

use crate::config::SweepConfig;
use crate::evaluator::{evaluate, try_evaluate};
use crate::vector::SymbolicVector4;

/// Pointwise check of the velocity at one proper time.
pub fn check_velocity<E: AlgebraEngine>(
    adapter: &SymbolicAdapter<E>,
    velocity: &SymbolicVector4,
    tau: f64,
) -> VelocityReport {
    validate_velocity(&evaluate(adapter, velocity, tau))
}

/// Sample the velocity over the sweep grid and report whether any sample
/// looks superluminal: `U0` about zero with a moving spatial part, a 3-speed
/// squared above `speed_bound`, or a value that cannot be evaluated.
///
/// A heuristic: an excursion between grid points goes unnoticed.
pub fn sweep_for_violation<E: AlgebraEngine>(
    adapter: &SymbolicAdapter<E>,
    velocity: &SymbolicVector4,
    config: &SweepConfig,
) -> bool {
    config.samples().any(|tau| {
        let u = match try_evaluate(adapter, velocity, tau) {
            Ok(u) => u,
            Err(err) => {
                debug!(%err, tau, "velocity not evaluable during sweep");
                return true;
            }
        };
        let spatial = spatial_norm2(&u);
        if u[0].abs() < config.time_epsilon && spatial.sqrt() >= config.time_epsilon {
            debug!(tau, ?u, "infinite coordinate speed");
            return true;
        }
        let v_squared = spatial / (u[0] * u[0]);
        let violated = v_squared.is_nan() || v_squared > config.speed_bound;
        if violated {
            debug!(tau, v_squared, "speed bound exceeded");
        }
        violated
    })
}
