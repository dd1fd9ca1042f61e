//! Pointwise admissibility of a 4-velocity.
//!
//! Physical invalidity is reported as a value, never as an error: renderers
//! use the report to suppress FTL objects.

use std::fmt;

use crate::{lorentz_factor, minkowski_norm2, spatial_norm2, FourVector, Scalar};

/// Allowed deviation of `U.U` from -1. Symbolic round-off lands well inside
/// this; tighter checks false-positive.
pub const NORMALIZATION_TOLERANCE: Scalar = 1e-4;

/// Cancellation allowance in `-U0^2 + |U|^2`, in units of `EPSILON * U0^2`.
const ROUND_OFF_ULPS: Scalar = 8.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Violation {
    /// `U0 < 0`: the object moves backward in coordinate time.
    BackwardInTime,
    /// `U.U` is not -1 within tolerance.
    NotNormalized,
    /// 3-speed squared at or above 1.
    Superluminal,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Violation::BackwardInTime => "moving backward in time",
            Violation::NotNormalized => "4-velocity is not normalized",
            Violation::Superluminal => "speed at or above light speed",
        };
        f.write_str(s)
    }
}

/// Outcome of [`validate_velocity`] plus the measured invariants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VelocityReport {
    pub reason: Option<Violation>,
    /// Minkowski norm `-U0^2 + |U|^2`.
    pub u_squared: Scalar,
    /// Coordinate 3-speed squared `|U|^2 / U0^2`.
    pub v_squared: Scalar,
    /// Lorentz factor for `v_squared`; infinite when light-like or faster.
    pub gamma: Scalar,
}

impl VelocityReport {
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.reason.is_none()
    }
}

/// Check one 4-velocity.
///
/// Checks run in order: time direction, normalization, speed. Normalization
/// admits `NORMALIZATION_TOLERANCE` plus the f64 cancellation error of the
/// two `U0^2`-sized terms in `U.U`.
pub fn validate_velocity(u: &FourVector) -> VelocityReport {
    let u_squared = minkowski_norm2(u);
    let v_squared = spatial_norm2(u) / (u[0] * u[0]);
    let gamma = lorentz_factor(v_squared);
    let report = |reason| VelocityReport { reason, u_squared, v_squared, gamma };

    if u[0] < 0.0 {
        return report(Some(Violation::BackwardInTime));
    }
    let round_off = ROUND_OFF_ULPS * Scalar::EPSILON * u[0] * u[0];
    let deviation = (u_squared + 1.0).abs();
    if !(deviation <= NORMALIZATION_TOLERANCE + round_off) {
        return report(Some(Violation::NotNormalized));
    }
    if !(v_squared < 1.0) {
        return report(Some(Violation::Superluminal));
    }
    report(None)
}
