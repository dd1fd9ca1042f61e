//! Character cursor with byte-offset tracking.

/// Cursor over an expression string. Offsets are byte offsets into the source.
#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Peek next char without advancing.
    pub fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    /// Peek the char after next.
    pub fn peek_second(&self) -> Option<char> {
        let mut it = self.src[self.pos..].chars();
        it.next();
        it.next()
    }

    pub fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Advance while `pred` holds and return the consumed slice.
    pub fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) -> &'a str {
        let start = self.pos;
        while let Some(ch) = self.peek() {
            if !pred(ch) {
                break;
            }
            self.pos += ch.len_utf8();
        }
        &self.src[start..self.pos]
    }

    pub fn skip_whitespace(&mut self) {
        self.eat_while(char::is_whitespace);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_cursor_ops() {
        let mut c = Cursor::new("  ab12+");
        c.skip_whitespace();
        assert_eq!(c.offset(), 2);
        assert_eq!(c.peek(), Some('a'));
        assert_eq!(c.peek_second(), Some('b'));
        assert_eq!(c.eat_while(|ch| ch.is_ascii_alphanumeric()), "ab12");
        assert_eq!(c.bump(), Some('+'));
        assert_eq!(c.bump(), None);
    }
}
