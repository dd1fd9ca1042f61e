//! Pure Lorentz boosts (no rotation) as 4x4 matrices acting on `[t, x, y, z]`.

use tracing::trace;

use crate::error::TransformError;
use crate::{lorentz_factor, three_velocity, FourVector, Scalar, ThreeVector};

/// Below this squared speed a boost is the identity (the projector term
/// `v_i v_j / |v|^2` would divide by ~0).
pub const IDENTITY_THRESHOLD: Scalar = 1e-10;

pub type Matrix4 = [[Scalar; 4]; 4];

const IDENTITY: Matrix4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// A boost into the frame moving with 3-velocity `v` relative to the lab.
///
/// Invariants: `L(v) * L(-v) == I` and the Minkowski interval between any
/// two events is preserved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LorentzBoost {
    m: Matrix4,
}

impl Default for LorentzBoost {
    fn default() -> Self {
        Self::identity()
    }
}

impl LorentzBoost {
    pub const fn identity() -> Self {
        Self { m: IDENTITY }
    }

    /// Build the boost for 3-velocity `v` (natural units).
    ///
    /// - `|v|^2 < IDENTITY_THRESHOLD` gives the identity.
    /// - `|v|^2 >= 1` is rejected: the Lorentz factor is infinite there.
    pub fn from_velocity(v: ThreeVector) -> Result<Self, TransformError> {
        if v.iter().any(|c| !c.is_finite()) {
            return Err(TransformError::NonFinite);
        }
        let v2 = v[0] * v[0] + v[1] * v[1] + v[2] * v[2];
        if v2 < IDENTITY_THRESHOLD {
            return Ok(Self::identity());
        }
        let gamma = lorentz_factor(v2);
        if !gamma.is_finite() {
            return Err(TransformError::Superluminal { v_squared: v2 });
        }
        trace!(v2, gamma, "building boost");

        let mut m = IDENTITY;
        m[0][0] = gamma;
        for i in 0..3 {
            m[0][i + 1] = -gamma * v[i];
            m[i + 1][0] = -gamma * v[i];
            for j in 0..3 {
                m[i + 1][j + 1] += (gamma - 1.0) * v[i] * v[j] / v2;
            }
        }
        Ok(Self { m })
    }

    /// Boost into the rest frame of an object with 4-velocity `u`.
    pub fn from_four_velocity(u: &FourVector) -> Result<Self, TransformError> {
        if u[0] == 0.0 {
            return Err(TransformError::Superluminal { v_squared: Scalar::INFINITY });
        }
        Self::from_velocity(three_velocity(u))
    }

    #[inline]
    pub fn matrix(&self) -> &Matrix4 {
        &self.m
    }

    /// Time-time entry, i.e. the Lorentz factor.
    #[inline]
    pub fn gamma(&self) -> Scalar {
        self.m[0][0]
    }

    /// Matrix-vector product `L * v`.
    #[inline]
    pub fn apply(&self, v: &FourVector) -> FourVector {
        let mut out = [0.0; 4];
        for (row, o) in self.m.iter().zip(out.iter_mut()) {
            *o = row[0] * v[0] + row[1] * v[1] + row[2] * v[2] + row[3] * v[3];
        }
        out
    }

    /// `self * other`: apply `other` first, then `self`.
    ///
    /// The product of two non-collinear boosts is a boost times a rotation,
    /// so the result is returned as a raw matrix wrapper, not re-parameterized.
    pub fn compose(&self, other: &LorentzBoost) -> LorentzBoost {
        let mut m = [[0.0; 4]; 4];
        for (i, row) in m.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..4).map(|k| self.m[i][k] * other.m[k][j]).sum();
            }
        }
        LorentzBoost { m }
    }

    /// Inverse via `eta * L^T * eta`.
    pub fn inverse(&self) -> LorentzBoost {
        let mut m = [[0.0; 4]; 4];
        for (i, row) in m.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                let sign = if (i == 0) ^ (j == 0) { -1.0 } else { 1.0 };
                *cell = sign * self.m[j][i];
            }
        }
        LorentzBoost { m }
    }

    /// Largest absolute entry-wise deviation from another matrix.
    pub fn max_deviation(&self, other: &LorentzBoost) -> Scalar {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, Scalar::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiny_velocity_is_identity() {
        let b = LorentzBoost::from_velocity([1e-6, 0.0, 0.0]).unwrap();
        assert_eq!(b, LorentzBoost::identity());
    }

    #[test]
    fn axis_boost_matches_textbook_form() {
        let b = LorentzBoost::from_velocity([0.6, 0.0, 0.0]).unwrap();
        let g = 1.25;
        let m = b.matrix();
        assert!((m[0][0] - g).abs() < 1e-12);
        assert!((m[0][1] + g * 0.6).abs() < 1e-12);
        assert!((m[1][0] + g * 0.6).abs() < 1e-12);
        assert!((m[1][1] - g).abs() < 1e-12);
        assert!((m[2][2] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn light_speed_rejected() {
        let err = LorentzBoost::from_velocity([1.0, 0.0, 0.0]).unwrap_err();
        assert_eq!(err, TransformError::Superluminal { v_squared: 1.0 });
        assert_eq!(
            LorentzBoost::from_velocity([Scalar::NAN, 0.0, 0.0]).unwrap_err(),
            TransformError::NonFinite
        );
    }
}
