//! Recursive-descent parser producing [`Expr`] trees.

use super::lexer::{tokenize, Spanned, Token};
use crate::error::SyntaxError;
use crate::expr::{self, Expr, Func};

type PResult<T> = Result<T, SyntaxError>;

/// Bound on expression tree depth: parentheses, unary signs, exponents and
/// operator chains all count. Keeps every recursive pass over the tree
/// within a small stack.
pub const MAX_DEPTH: usize = 256;

/// Parse an expression string.
pub fn parse(src: &str) -> PResult<Expr> {
    let tokens = tokenize(src)?;
    if tokens.is_empty() {
        return Err(SyntaxError::Empty);
    }
    let mut p = Parser { tokens, pos: 0, end: src.len(), depth: 0 };
    let e = p.expr()?;
    match p.peek() {
        None => Ok(e),
        Some(s) => Err(SyntaxError::UnexpectedToken { found: s.token.describe(), offset: s.offset }),
    }
}

struct Parser {
    tokens: Vec<Spanned>,
    pos: usize,
    end: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Spanned> {
        self.tokens.get(self.pos)
    }

    fn peek_token(&self) -> Option<&Token> {
        self.peek().map(|s| &s.token)
    }

    fn next(&mut self) -> PResult<Spanned> {
        let s = self
            .tokens
            .get(self.pos)
            .cloned()
            .ok_or(SyntaxError::UnexpectedEnd { offset: self.end })?;
        self.pos += 1;
        Ok(s)
    }

    fn eat(&mut self, t: &Token) -> bool {
        if self.peek_token() == Some(t) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, t: Token) -> PResult<()> {
        let s = self.next()?;
        if s.token == t {
            Ok(())
        } else {
            Err(SyntaxError::UnexpectedToken { found: s.token.describe(), offset: s.offset })
        }
    }

    fn descend(&mut self) -> PResult<()> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            let offset = self.peek().map_or(self.end, |s| s.offset);
            return Err(SyntaxError::TooDeep { limit: MAX_DEPTH, offset });
        }
        Ok(())
    }

    fn expr(&mut self) -> PResult<Expr> {
        let base = self.depth;
        let mut lhs = self.term()?;
        loop {
            if self.eat(&Token::Plus) {
                self.descend()?;
                lhs = expr::add(lhs, self.term()?);
            } else if self.eat(&Token::Minus) {
                self.descend()?;
                lhs = expr::sub(lhs, self.term()?);
            } else {
                self.depth = base;
                return Ok(lhs);
            }
        }
    }

    fn term(&mut self) -> PResult<Expr> {
        let base = self.depth;
        let mut lhs = self.unary()?;
        loop {
            if self.eat(&Token::Star) {
                self.descend()?;
                lhs = expr::mul(lhs, self.unary()?);
            } else if self.eat(&Token::Slash) {
                self.descend()?;
                lhs = expr::div(lhs, self.unary()?);
            } else {
                self.depth = base;
                return Ok(lhs);
            }
        }
    }

    fn unary(&mut self) -> PResult<Expr> {
        self.descend()?;
        let e = if self.eat(&Token::Minus) {
            expr::neg(self.unary()?)
        } else if self.eat(&Token::Plus) {
            self.unary()?
        } else {
            self.power()?
        };
        self.depth -= 1;
        Ok(e)
    }

    fn power(&mut self) -> PResult<Expr> {
        let base = self.atom()?;
        if self.eat(&Token::Caret) {
            return Ok(expr::pow(base, self.unary()?));
        }
        Ok(base)
    }

    fn atom(&mut self) -> PResult<Expr> {
        let Spanned { token, offset } = self.next()?;
        match token {
            Token::Num(v) => Ok(Expr::Num(v)),
            Token::LParen => {
                let inner = self.expr()?;
                self.expect(Token::RParen)?;
                Ok(inner)
            }
            Token::Ident(name) => {
                let is_call = self.peek_token() == Some(&Token::LParen);
                match (Func::from_name(&name), is_call) {
                    (Some(f), true) => {
                        self.expect(Token::LParen)?;
                        let arg = self.expr()?;
                        self.expect(Token::RParen)?;
                        Ok(expr::call(f, arg))
                    }
                    (Some(_), false) => Err(SyntaxError::MissingArgument { name, offset }),
                    (None, true) => Err(SyntaxError::UnknownFunction { name, offset }),
                    (None, false) => Ok(Expr::Var(name)),
                }
            }
            other => Err(SyntaxError::UnexpectedToken { found: other.describe(), offset }),
        }
    }
}
