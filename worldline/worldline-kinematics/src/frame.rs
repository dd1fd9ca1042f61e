//! Choosing the comoving frame of a reference object at a lab instant.

use tracing::{debug, warn};
use worldline_cas::{AlgebraEngine, SymbolicAdapter, TAU};
use worldline_core::{three_velocity, FourVector, LorentzBoost, McrfFrame};

use crate::config::FrameConfig;
use crate::evaluator::evaluate;
use crate::locator::find_tau;
use crate::triple::KinematicTriple;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameKind {
    /// Constant velocity: one boost about the worldline's `tau = 0` event.
    Inertial,
    /// Fresh comoving frame at the reference's current proper time.
    Accelerating,
    /// The boost would be singular; identity boost at the last valid origin.
    Fallback,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameSelection {
    pub frame: McrfFrame,
    /// Proper time of the reference object at the requested lab time.
    pub tau: f64,
    pub kind: FrameKind,
}

/// Frame of `reference` at `lab_time`.
///
/// A velocity with no `tau` dependence is inertial: origin at `X(0)`, no time
/// offset. Otherwise the frame is rebuilt around `X(tau_ref)` with time
/// offset `tau_ref`, so the reference object always sits at
/// `(tau_ref, 0, 0, 0)`. When `|U0|` is below `min_time_component` or the
/// speed reaches `max_speed`, `last_valid` is kept with its boost dropped
/// (the lab frame if there is none).
pub fn select_frame<E: AlgebraEngine>(
    adapter: &SymbolicAdapter<E>,
    reference: &KinematicTriple,
    lab_time: f64,
    last_valid: Option<&McrfFrame>,
    config: &FrameConfig,
) -> FrameSelection {
    let tau = find_tau(adapter, reference.position(), lab_time);
    let u = evaluate(adapter, reference.velocity(), tau);
    let (origin, time_offset, kind) = if reference.velocity().depends_on(adapter, TAU) {
        (evaluate(adapter, reference.position(), tau), tau, FrameKind::Accelerating)
    } else {
        (evaluate(adapter, reference.position(), 0.0), 0.0, FrameKind::Inertial)
    };
    match comoving_boost(&u, config) {
        Some(boost) => {
            debug!(?kind, tau, gamma = boost.gamma(), "selected comoving frame");
            FrameSelection { frame: McrfFrame::new(boost, origin, time_offset), tau, kind }
        }
        None => {
            warn!(?u, tau, "comoving boost is singular, keeping last valid origin");
            let frame = last_valid.map_or_else(McrfFrame::lab, McrfFrame::without_boost);
            FrameSelection { frame, tau, kind: FrameKind::Fallback }
        }
    }
}

fn comoving_boost(u: &FourVector, config: &FrameConfig) -> Option<LorentzBoost> {
    if u[0].is_nan() || u[0].abs() < config.min_time_component {
        return None;
    }
    let v = three_velocity(u);
    let speed = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    if speed.is_nan() || speed >= config.max_speed {
        return None;
    }
    LorentzBoost::from_velocity(v).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> FrameConfig {
        FrameConfig::default()
    }

    #[test]
    fn singular_velocities_have_no_boost() {
        assert!(comoving_boost(&[1e-6, 0.0, 0.0, 0.0], &cfg()).is_none());
        assert!(comoving_boost(&[1.0, 0.999995, 0.0, 0.0], &cfg()).is_none());
        assert!(comoving_boost(&[f64::NAN, 0.0, 0.0, 0.0], &cfg()).is_none());
        assert!(comoving_boost(&[1.25, 0.75, 0.0, 0.0], &cfg()).is_some());
    }
}
