//! Error types for worldline-kinematics.

use thiserror::Error;
use worldline_cas::AlgebraError;

use crate::vector::Quantity;

/// A symbolic step of the solver failed. Nothing from the attempted update
/// is published.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    #[error("deriving {quantity} component {index}: {source}")]
    Component {
        quantity: Quantity,
        index: usize,
        #[source]
        source: AlgebraError,
    },
}

/// Strict evaluation of a 4-vector failed on one component.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("component {index}: {source}")]
    Algebra {
        index: usize,
        #[source]
        source: AlgebraError,
    },

    #[error("component {index} evaluated to {value}")]
    NonFinite { index: usize, value: f64 },
}

/// The lab-time inversion found no usable proper time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocateError {
    /// The time component could not be evaluated at a bisection midpoint.
    #[error("time component is not a number at tau = {tau}")]
    NotANumber { tau: f64 },

    /// The bracket was exhausted far from the target, typically because the
    /// time component is not monotone in tau.
    #[error("bisection did not converge (residual {residual})")]
    NoConvergence { residual: f64 },
}
