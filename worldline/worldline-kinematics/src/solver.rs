//! Derives the full kinematic triple from one primary quantity.

use tracing::debug;
use worldline_cas::{AlgebraEngine, Cas, SymbolicAdapter};
use worldline_core::FourVector;

use crate::error::SolveError;
use crate::triple::{KinematicTriple, PrimaryInput};
use crate::vector::{Quantity, SymbolicVector4};

/// Symbolic calculus over whole 4-vectors. Every entry point is
/// all-or-nothing: one failing component fails the call.
#[derive(Clone, Debug, Default)]
pub struct KinematicSolver<E: AlgebraEngine = Cas> {
    adapter: SymbolicAdapter<E>,
}

impl KinematicSolver<Cas> {
    pub fn new() -> Self {
        Self { adapter: SymbolicAdapter::new() }
    }
}

impl<E: AlgebraEngine> KinematicSolver<E> {
    pub fn with_adapter(adapter: SymbolicAdapter<E>) -> Self {
        Self { adapter }
    }

    pub fn adapter(&self) -> &SymbolicAdapter<E> {
        &self.adapter
    }

    /// `U = dX/dtau`, `A = dU/dtau`.
    pub fn from_position(&self, x: &SymbolicVector4) -> Result<KinematicTriple, SolveError> {
        let u = self.derive(x, Quantity::Velocity)?;
        let a = self.derive(&u, Quantity::Acceleration)?;
        Ok(KinematicTriple::new(x.clone(), u, a, Quantity::Position))
    }

    /// `X = X0 + integral of U`, `A = dU/dtau`.
    pub fn from_velocity(&self, u: &SymbolicVector4, x0: &FourVector) -> Result<KinematicTriple, SolveError> {
        let x = self.antiderive(u, x0, Quantity::Position)?;
        let a = self.derive(u, Quantity::Acceleration)?;
        Ok(KinematicTriple::new(x, u.clone(), a, Quantity::Velocity))
    }

    /// `U = U0 + integral of A`, `X = X0 + integral of U`.
    pub fn from_acceleration(
        &self,
        a: &SymbolicVector4,
        u0: &FourVector,
        x0: &FourVector,
    ) -> Result<KinematicTriple, SolveError> {
        let u = self.antiderive(a, u0, Quantity::Velocity)?;
        let x = self.antiderive(&u, x0, Quantity::Position)?;
        Ok(KinematicTriple::new(x, u, a.clone(), Quantity::Acceleration))
    }

    pub fn solve(&self, input: &PrimaryInput) -> Result<KinematicTriple, SolveError> {
        let triple = match input {
            PrimaryInput::Position(x) => self.from_position(x),
            PrimaryInput::Velocity { velocity, x0 } => self.from_velocity(velocity, x0),
            PrimaryInput::Acceleration { acceleration, u0, x0 } => self.from_acceleration(acceleration, u0, x0),
        }?;
        debug!(primary = %input.kind(), position = %triple.position(), "solved kinematic triple");
        Ok(triple)
    }

    fn derive(&self, v: &SymbolicVector4, quantity: Quantity) -> Result<SymbolicVector4, SolveError> {
        v.try_map(|_, c| self.adapter.differentiate(c))
            .map_err(|(index, source)| SolveError::Component { quantity, index, source })
    }

    fn antiderive(
        &self,
        v: &SymbolicVector4,
        constants: &FourVector,
        quantity: Quantity,
    ) -> Result<SymbolicVector4, SolveError> {
        v.try_map(|i, c| self.adapter.integrate(c, constants[i]))
            .map_err(|(index, source)| SolveError::Component { quantity, index, source })
    }
}
