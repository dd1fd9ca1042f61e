//! The symbolic boundary used by the kinematics layer.
//!
//! Owns constant substitution, treats empty/zero input as trivially zero
//! without touching the engine, and turns indefinite integrals into
//! definite ones anchored at `tau = 0`.

use tracing::debug;

use crate::constants::substitute_constants;
use crate::error::AlgebraError;
use crate::expr::format_number;
use crate::{AlgebraEngine, Cas};

/// The proper-time variable.
pub const TAU: &str = "tau";

#[derive(Clone, Debug, Default)]
pub struct SymbolicAdapter<E: AlgebraEngine = Cas> {
    engine: E,
}

impl SymbolicAdapter<Cas> {
    pub fn new() -> Self {
        Self { engine: Cas }
    }
}

/// `""`, whitespace only, or the literal `0`.
pub fn is_degenerate(expr: &str) -> bool {
    let t = expr.trim();
    t.is_empty() || t == "0"
}

impl<E: AlgebraEngine> SymbolicAdapter<E> {
    pub fn with_engine(engine: E) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn substitute_constants(&self, expr: &str) -> String {
        substitute_constants(expr)
    }

    /// True iff `expr` parses and mentions no identifier other than `tau`
    /// once constants are substituted. Degenerate input counts as zero and is
    /// valid. Never panics or propagates an engine error.
    pub fn validate(&self, expr: &str) -> bool {
        if is_degenerate(expr) {
            return true;
        }
        let expr = substitute_constants(expr);
        if let Err(err) = self.engine.parse_and_validate(&expr) {
            debug!(%err, expr = %expr, "expression rejected");
            return false;
        }
        match self.engine.free_variables(&expr) {
            Ok(vars) => match vars.iter().find(|v| v.as_str() != TAU) {
                Some(unknown) => {
                    debug!(unknown = %unknown, expr = %expr, "expression has unknown identifier");
                    false
                }
                None => true,
            },
            Err(err) => {
                debug!(%err, expr = %expr, "expression rejected");
                false
            }
        }
    }

    /// `d(expr)/d(tau)`.
    pub fn differentiate(&self, expr: &str) -> Result<String, AlgebraError> {
        if is_degenerate(expr) {
            return Ok("0".to_string());
        }
        self.engine.differentiate(&substitute_constants(expr), TAU)
    }

    /// Definite integral from 0 to `tau` plus `constant`: the result
    /// evaluates to `constant` at `tau = 0`.
    pub fn integrate(&self, expr: &str, constant: f64) -> Result<String, AlgebraError> {
        if is_degenerate(expr) {
            return Ok(format_number(constant));
        }
        let raw = self.engine.integrate(&substitute_constants(expr), TAU)?;
        let at_zero = self.engine.substitute(&raw, &[(TAU, "0")])?;
        let f0 = self.engine.evaluate(&at_zero)?;
        if !f0.is_finite() {
            return Err(AlgebraError::Singular { expr: raw, variable: TAU.to_string() });
        }
        let offset = constant - f0;
        self.engine.simplify(&format!("{raw} + ({})", format_number(offset)))
    }

    /// Evaluate at one proper time. The value is bound as a decimal literal,
    /// never re-introducing the symbol. May return NaN or infinities.
    pub fn evaluate_at(&self, expr: &str, tau: f64) -> Result<f64, AlgebraError> {
        if is_degenerate(expr) {
            return Ok(0.0);
        }
        let literal = format!("({})", format_number(tau));
        let bound = self.engine.substitute(&substitute_constants(expr), &[(TAU, literal.as_str())])?;
        self.engine.evaluate(&bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_inputs_short_circuit() {
        let a = SymbolicAdapter::new();
        for s in ["", "   ", "0", " 0 "] {
            assert!(is_degenerate(s));
            assert_eq!(a.differentiate(s).unwrap(), "0");
            assert_eq!(a.integrate(s, 2.5).unwrap(), "2.5");
            assert_eq!(a.evaluate_at(s, 3.0).unwrap(), 0.0);
            assert!(a.validate(s));
        }
        assert!(!is_degenerate("0.0"));
    }
}
