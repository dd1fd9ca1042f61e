#![doc = r#"
worldline-core: flat-spacetime numerics for relativistic worldlines.

Conventions:
- natural units, speed of light = 1
- 4-vectors are `[t, x, y, z]` with Minkowski signature (-,+,+,+)

This crate provides:
- Core types Scalar and FourVector
- minkowski_dot / interval / causally_allows over events
- LorentzBoost: pure boosts built from 3-velocities (no rotation)
- McrfFrame: affine lab -> comoving-frame map (boost + origin + time offset)
- validate_velocity: pointwise 4-velocity admissibility report

Everything here is pure and allocation-free except the batch transform.
"#]

pub mod boost;
pub mod error;
pub mod frame;
pub mod validity;

pub use boost::{LorentzBoost, IDENTITY_THRESHOLD};
pub use error::TransformError;
pub use frame::{transform_worldline, McrfFrame};
pub use validity::{validate_velocity, VelocityReport, Violation, NORMALIZATION_TOLERANCE};

pub type Scalar = f64;

/// An ordered `[t, x, y, z]` quadruple of finite reals.
pub type FourVector = [Scalar; 4];

/// A spatial 3-vector `[x, y, z]`.
pub type ThreeVector = [Scalar; 3];

pub const ZERO: FourVector = [0.0; 4];

/// Minkowski inner product with signature (-,+,+,+).
#[inline]
pub fn minkowski_dot(a: &FourVector, b: &FourVector) -> Scalar {
    -a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3]
}

/// Minkowski squared norm; -1 for a normalized 4-velocity.
#[inline]
pub fn minkowski_norm2(a: &FourVector) -> Scalar {
    minkowski_dot(a, a)
}

/// Squared interval between two events: s^2 = -dt^2 + |dx|^2.
///
/// Negative for timelike separation, zero on the light cone.
#[inline]
pub fn interval(e1: &FourVector, e2: &FourVector) -> Scalar {
    let d = sub(e2, e1);
    minkowski_norm2(&d)
}

/// Causality predicate: e2 lies in or on the future light cone of e1 (dt >= |dx|).
#[inline]
pub fn causally_allows(e1: &FourVector, e2: &FourVector) -> bool {
    let d = sub(e2, e1);
    d[0] >= spatial_norm2(&d).sqrt()
}

#[inline]
pub fn sub(a: &FourVector, b: &FourVector) -> FourVector {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2], a[3] - b[3]]
}

#[inline]
pub fn spatial_norm2(a: &FourVector) -> Scalar {
    a[1] * a[1] + a[2] * a[2] + a[3] * a[3]
}

/// Coordinate 3-velocity `dx/dt` carried by a 4-velocity (`u_i / u_0`).
///
/// Returns non-finite components when `u_0` is zero.
#[inline]
pub fn three_velocity(u: &FourVector) -> ThreeVector {
    [u[1] / u[0], u[2] / u[0], u[3] / u[0]]
}

/// Lorentz factor for a squared 3-speed. Infinite at or above light speed;
/// never a large finite stand-in.
#[inline]
pub fn lorentz_factor(v_squared: Scalar) -> Scalar {
    if v_squared >= 1.0 || v_squared.is_nan() {
        Scalar::INFINITY
    } else {
        1.0 / (1.0 - v_squared).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lorentz_factor_edges() {
        assert_eq!(lorentz_factor(0.0), 1.0);
        assert!((lorentz_factor(0.64) - 1.0 / 0.6).abs() < 1e-12);
        assert!(lorentz_factor(1.0).is_infinite());
        assert!(lorentz_factor(4.0).is_infinite());
    }

    #[test]
    fn three_velocity_of_rest() {
        assert_eq!(three_velocity(&[1.0, 0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
        assert!(three_velocity(&[0.0, 1.0, 0.0, 0.0])[0].is_infinite());
    }
}
