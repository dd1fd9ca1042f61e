//! Poincare maps from lab coordinates into a momentarily comoving frame.

use crate::boost::LorentzBoost;
use crate::{sub, FourVector, Scalar, ZERO};

/// Affine lab -> frame map: `x' = L * (x - origin) + [offset, 0, 0, 0]`.
///
/// The spatial origin of the target frame sits on `origin` by construction.
/// For an accelerating reference object this value is only valid for the
/// instant it was built for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct McrfFrame {
    pub boost: LorentzBoost,
    pub origin: FourVector,
    pub time_offset: Scalar,
}

impl Default for McrfFrame {
    fn default() -> Self {
        Self::lab()
    }
}

impl McrfFrame {
    /// The lab frame itself.
    pub const fn lab() -> Self {
        Self { boost: LorentzBoost::identity(), origin: ZERO, time_offset: 0.0 }
    }

    pub fn new(boost: LorentzBoost, origin: FourVector, time_offset: Scalar) -> Self {
        Self { boost, origin, time_offset }
    }

    /// Same origin and offset with the boost dropped. Used when the boost
    /// would be singular.
    pub fn without_boost(&self) -> Self {
        Self { boost: LorentzBoost::identity(), ..*self }
    }

    /// Map one lab event into frame coordinates.
    #[inline]
    pub fn apply(&self, event: &FourVector) -> FourVector {
        let mut out = self.boost.apply(&sub(event, &self.origin));
        out[0] += self.time_offset;
        out
    }

    /// Map frame coordinates back to the lab.
    pub fn inverse_apply(&self, local: &FourVector) -> FourVector {
        let mut shifted = *local;
        shifted[0] -= self.time_offset;
        let back = self.boost.inverse().apply(&shifted);
        [
            back[0] + self.origin[0],
            back[1] + self.origin[1],
            back[2] + self.origin[2],
            back[3] + self.origin[3],
        ]
    }
}

/// Transform a batch of lab events (a single marker or a full worldline trace).
///
/// Subtracts `origin`, applies `boost`, then adds `time_offset` to the time
/// component only.
pub fn transform_worldline(
    coords: &[FourVector],
    boost: &LorentzBoost,
    origin: &FourVector,
    time_offset: Scalar,
) -> Vec<FourVector> {
    let frame = McrfFrame::new(*boost, *origin, time_offset);
    coords.iter().map(|e| frame.apply(e)).collect()
}
