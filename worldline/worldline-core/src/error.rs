//! Error types for worldline-core.

use thiserror::Error;

use crate::Scalar;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    /// A boost was requested at or above light speed; the Lorentz factor is infinite.
    #[error("velocity is not sub-luminal (|v|^2 = {v_squared})")]
    Superluminal { v_squared: Scalar },

    #[error("non-finite velocity component")]
    NonFinite,
}
