//! Tokenizer for algebraic expressions.

use super::cursor::Cursor;
use crate::error::SyntaxError;

#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    Num(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    /// `^` or `**`
    Caret,
    LParen,
    RParen,
}

impl Token {
    pub fn describe(&self) -> String {
        match self {
            Token::Num(v) => format!("number {v}"),
            Token::Ident(s) => format!("identifier {s:?}"),
            Token::Plus => "'+'".into(),
            Token::Minus => "'-'".into(),
            Token::Star => "'*'".into(),
            Token::Slash => "'/'".into(),
            Token::Caret => "'^'".into(),
            Token::LParen => "'('".into(),
            Token::RParen => "')'".into(),
        }
    }
}

/// A token plus the byte offset it starts at.
#[derive(Clone, Debug, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub offset: usize,
}

#[inline]
pub fn is_ident_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

#[inline]
pub fn is_ident_continue(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

pub fn tokenize(src: &str) -> Result<Vec<Spanned>, SyntaxError> {
    let mut cur = Cursor::new(src);
    let mut out = Vec::new();
    loop {
        cur.skip_whitespace();
        let offset = cur.offset();
        let Some(ch) = cur.peek() else { break };
        let token = match ch {
            '0'..='9' | '.' => lex_number(&mut cur)?,
            c if is_ident_start(c) => Token::Ident(cur.eat_while(is_ident_continue).to_string()),
            '+' => single(&mut cur, Token::Plus),
            '-' => single(&mut cur, Token::Minus),
            '/' => single(&mut cur, Token::Slash),
            '^' => single(&mut cur, Token::Caret),
            '(' => single(&mut cur, Token::LParen),
            ')' => single(&mut cur, Token::RParen),
            '*' => {
                cur.bump();
                if cur.peek() == Some('*') {
                    cur.bump();
                    Token::Caret
                } else {
                    Token::Star
                }
            }
            other => return Err(SyntaxError::UnexpectedChar { ch: other, offset }),
        };
        out.push(Spanned { token, offset });
    }
    Ok(out)
}

fn single(cur: &mut Cursor<'_>, token: Token) -> Token {
    cur.bump();
    token
}

/// `digits [. digits] [(e|E) [+|-] digits]`, also `.5`.
fn lex_number(cur: &mut Cursor<'_>) -> Result<Token, SyntaxError> {
    let offset = cur.offset();
    let mut text = String::from(cur.eat_while(|c| c.is_ascii_digit()));
    if cur.peek() == Some('.') {
        cur.bump();
        text.push('.');
        text.push_str(cur.eat_while(|c| c.is_ascii_digit()));
    }
    if matches!(cur.peek(), Some('e' | 'E')) {
        let exp_follows = match cur.peek_second() {
            Some(d) if d.is_ascii_digit() => true,
            Some('+' | '-') => {
                let mut ahead = *cur;
                ahead.bump();
                ahead.bump();
                ahead.peek().is_some_and(|d| d.is_ascii_digit())
            }
            _ => false,
        };
        if exp_follows {
            text.push('e');
            cur.bump();
            if let Some(sign @ ('+' | '-')) = cur.peek() {
                text.push(sign);
                cur.bump();
            }
            text.push_str(cur.eat_while(|c| c.is_ascii_digit()));
        }
    }
    text.parse::<f64>()
        .map(Token::Num)
        .map_err(|_| SyntaxError::InvalidNumber { text, offset })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(src: &str) -> Vec<Token> {
        tokenize(src).unwrap().into_iter().map(|s| s.token).collect()
    }

    #[test]
    fn numbers_and_exponents() {
        assert_eq!(tokens("1.5e-3"), vec![Token::Num(1.5e-3)]);
        assert_eq!(tokens(".25"), vec![Token::Num(0.25)]);
        assert_eq!(tokens("2E3"), vec![Token::Num(2000.0)]);
    }

    #[test]
    fn trailing_e_is_identifier() {
        // `2e` is the number 2 followed by the identifier `e`
        assert_eq!(tokens("2e"), vec![Token::Num(2.0), Token::Ident("e".into())]);
    }

    #[test]
    fn double_star_is_power() {
        assert_eq!(
            tokens("tau**2"),
            vec![Token::Ident("tau".into()), Token::Caret, Token::Num(2.0)]
        );
    }

    #[test]
    fn bad_input() {
        assert!(matches!(tokenize("tau $ 2"), Err(SyntaxError::UnexpectedChar { ch: '$', offset: 4 })));
        assert!(matches!(tokenize("."), Err(SyntaxError::InvalidNumber { .. })));
    }
}
