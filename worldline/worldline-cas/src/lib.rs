//! worldline-cas: a narrow symbolic algebra engine over one free variable.
//!
//! Layers:
//! - [`syntax`]: cursor, tokenizer and parser producing [`Expr`] trees
//! - [`simplify`], [`diff`], [`integrate`]: tree rewrites
//! - [`AlgebraEngine`]: the string-in/string-out seam the rest of the
//!   workspace talks through, implemented by [`Cas`]
//! - [`SymbolicAdapter`]: constant substitution, degenerate-input short
//!   circuits and definite integration on top of any engine

pub mod adapter;
pub mod constants;
pub mod diff;
pub mod error;
pub mod expr;
pub mod integrate;
pub mod simplify;
pub mod syntax;

use std::collections::BTreeSet;

pub use adapter::{SymbolicAdapter, TAU};
pub use constants::{substitute_constants, CONSTANTS};
pub use error::{AlgebraError, SyntaxError};
pub use expr::{Expr, Func};

/// Parse an expression string into a tree (public API).
pub fn parse(src: &str) -> Result<Expr, SyntaxError> {
    syntax::parse(src)
}

/// Capabilities the kinematics layer needs from a symbolic engine.
///
/// Every method except [`AlgebraEngine::parse_and_validate`] may fail on
/// malformed input; callers decide how to degrade.
pub trait AlgebraEngine {
    fn parse_and_validate(&self, expr: &str) -> Result<(), AlgebraError>;

    fn differentiate(&self, expr: &str, variable: &str) -> Result<String, AlgebraError>;

    /// Indefinite integral without a constant of integration.
    fn integrate(&self, expr: &str, variable: &str) -> Result<String, AlgebraError>;

    /// Replace variables by expressions given as strings.
    fn substitute(&self, expr: &str, bindings: &[(&str, &str)]) -> Result<String, AlgebraError>;

    fn simplify(&self, expr: &str) -> Result<String, AlgebraError>;

    /// Evaluate a closed expression. May return NaN or infinities.
    fn evaluate(&self, expr: &str) -> Result<f64, AlgebraError>;

    fn free_variables(&self, expr: &str) -> Result<BTreeSet<String>, AlgebraError>;
}

/// The built-in engine.
#[derive(Clone, Copy, Debug, Default)]
pub struct Cas;

impl AlgebraEngine for Cas {
    fn parse_and_validate(&self, expr: &str) -> Result<(), AlgebraError> {
        parse(expr)?;
        Ok(())
    }

    fn differentiate(&self, expr: &str, variable: &str) -> Result<String, AlgebraError> {
        Ok(diff::differentiate(&parse(expr)?, variable).to_string())
    }

    fn integrate(&self, expr: &str, variable: &str) -> Result<String, AlgebraError> {
        Ok(integrate::integrate(&parse(expr)?, variable)?.to_string())
    }

    fn substitute(&self, expr: &str, bindings: &[(&str, &str)]) -> Result<String, AlgebraError> {
        let mut tree = parse(expr)?;
        for (name, value) in bindings {
            tree = tree.substitute(name, &parse(value)?);
        }
        Ok(tree.to_string())
    }

    fn simplify(&self, expr: &str) -> Result<String, AlgebraError> {
        Ok(simplify::simplify(&parse(expr)?).to_string())
    }

    fn evaluate(&self, expr: &str) -> Result<f64, AlgebraError> {
        parse(expr)?.eval(&[])
    }

    fn free_variables(&self, expr: &str) -> Result<BTreeSet<String>, AlgebraError> {
        Ok(parse(expr)?.free_variables())
    }
}
