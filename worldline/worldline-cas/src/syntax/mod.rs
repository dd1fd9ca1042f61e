//! Expression syntax: cursor, tokenizer and recursive-descent parser.
//!
//! Grammar (lowest to highest binding):
//!
//! ```text
//! expr  := term (('+' | '-') term)*
//! term  := unary (('*' | '/') unary)*
//! unary := ('-' | '+') unary | power
//! power := atom (('^' | '**') unary)?      right associative
//! atom  := number | ident | ident '(' expr ')' | '(' expr ')'
//! ```
//!
//! Input whose tree would be deeper than [`MAX_DEPTH`] is rejected with
//! `SyntaxError::TooDeep`.

pub mod cursor;
pub mod lexer;
pub mod parser;

pub use parser::{parse, MAX_DEPTH};
