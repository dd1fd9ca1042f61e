//! The solved kinematic state of one object and the primary input it came from.

use worldline_core::FourVector;

use crate::vector::{Quantity, SymbolicVector4};

/// The one user-authored quantity plus the initial conditions it needs.
///
/// Switching variant drops whatever the previous variant carried, so two
/// primaries can never be set at once.
#[derive(Clone, Debug, PartialEq)]
pub enum PrimaryInput {
    /// Initial conditions live inside the expressions.
    Position(SymbolicVector4),
    Velocity {
        velocity: SymbolicVector4,
        x0: FourVector,
    },
    Acceleration {
        acceleration: SymbolicVector4,
        u0: FourVector,
        x0: FourVector,
    },
}

impl PrimaryInput {
    pub fn kind(&self) -> Quantity {
        match self {
            PrimaryInput::Position(_) => Quantity::Position,
            PrimaryInput::Velocity { .. } => Quantity::Velocity,
            PrimaryInput::Acceleration { .. } => Quantity::Acceleration,
        }
    }

    /// The user-authored vector.
    pub fn expression(&self) -> &SymbolicVector4 {
        match self {
            PrimaryInput::Position(x) => x,
            PrimaryInput::Velocity { velocity, .. } => velocity,
            PrimaryInput::Acceleration { acceleration, .. } => acceleration,
        }
    }
}

/// Position, velocity and acceleration as functions of proper time, with
/// `U = dX/dtau` and `A = dU/dtau`.
#[derive(Clone, Debug, PartialEq)]
pub struct KinematicTriple {
    position: SymbolicVector4,
    velocity: SymbolicVector4,
    acceleration: SymbolicVector4,
    primary: Quantity,
}

impl KinematicTriple {
    pub(crate) fn new(
        position: SymbolicVector4,
        velocity: SymbolicVector4,
        acceleration: SymbolicVector4,
        primary: Quantity,
    ) -> Self {
        Self { position, velocity, acceleration, primary }
    }

    /// The object at rest at the lab origin, `X = (tau, 0, 0, 0)`.
    pub fn at_rest() -> Self {
        Self::new(
            SymbolicVector4::from(["tau", "0", "0", "0"]),
            SymbolicVector4::from(["1", "0", "0", "0"]),
            SymbolicVector4::zero(),
            Quantity::Position,
        )
    }

    /// Which member was user-authored; the other two are derived.
    pub fn primary_kind(&self) -> Quantity {
        self.primary
    }

    pub fn position(&self) -> &SymbolicVector4 {
        &self.position
    }

    pub fn velocity(&self) -> &SymbolicVector4 {
        &self.velocity
    }

    pub fn acceleration(&self) -> &SymbolicVector4 {
        &self.acceleration
    }

    pub fn get(&self, quantity: Quantity) -> &SymbolicVector4 {
        match quantity {
            Quantity::Position => &self.position,
            Quantity::Velocity => &self.velocity,
            Quantity::Acceleration => &self.acceleration,
        }
    }
}
