//! Crate-level error types for worldline-cas.

use thiserror::Error;

/// An expression string failed to parse.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyntaxError {
    #[error("empty expression")]
    Empty,

    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEnd { offset: usize },

    #[error("unexpected character {ch:?} at offset {offset}")]
    UnexpectedChar { ch: char, offset: usize },

    #[error("unexpected token {found} at offset {offset}")]
    UnexpectedToken { found: String, offset: usize },

    #[error("invalid number literal {text:?} at offset {offset}")]
    InvalidNumber { text: String, offset: usize },

    #[error("unknown function {name:?} at offset {offset}")]
    UnknownFunction { name: String, offset: usize },

    #[error("function {name:?} used without an argument at offset {offset}")]
    MissingArgument { name: String, offset: usize },

    #[error("expression nested deeper than {limit} levels at offset {offset}")]
    TooDeep { limit: usize, offset: usize },
}

/// Failures of the symbolic operations themselves.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AlgebraError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// The expression parses but no rule covers it (e.g. a non-elementary integral).
    #[error("cannot {operation} {expr}")]
    Unsupported { operation: &'static str, expr: String },

    #[error("unbound variable {0:?}")]
    UnboundVariable(String),

    /// The antiderivative is not finite at the lower limit.
    #[error("antiderivative {expr} is singular at {variable} = 0")]
    Singular { expr: String, variable: String },
}

pub type Result<T> = core::result::Result<T, AlgebraError>;
