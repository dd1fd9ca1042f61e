//! Reserved physical constants, substituted textually before any symbolic
//! or numeric work.
//!
//! Units are natural/Planck: `c = hbar = G = k_B = 1`.

use crate::syntax::lexer::is_ident_continue;

/// Reserved identifier -> numeric literal. Ordered longest name first.
pub static CONSTANTS: &[(&str, &str)] = &[
    ("hbar", "1"),
    ("k_B", "1"),
    ("pi", "3.141592653589793"),
    ("c", "1"),
    ("e", "2.718281828459045"),
    ("G", "1"),
];

/// Replace every whole-token occurrence of each constant with its
/// parenthesized value, longest name first.
///
/// A token boundary is anything that cannot continue an identifier or a
/// number, so `c` never matches inside `cosh` and `e` never matches the
/// exponent marker in `1e-5`.
pub fn substitute_constants(expr: &str) -> String {
    CONSTANTS
        .iter()
        .fold(expr.to_string(), |acc, (name, value)| replace_token(&acc, name, &format!("({value})")))
}

fn is_word(ch: char) -> bool {
    is_ident_continue(ch) || ch == '.'
}

fn replace_token(src: &str, name: &str, replacement: &str) -> String {
    let mut out = String::with_capacity(src.len());
    let mut rest = src;
    let mut prev: Option<char> = None;
    while let Some(idx) = rest.find(name) {
        let before = rest[..idx].chars().next_back().or(if idx == 0 { prev } else { None });
        let after = rest[idx + name.len()..].chars().next();
        let whole = !before.is_some_and(is_word) && !after.is_some_and(is_word);
        out.push_str(&rest[..idx]);
        if whole {
            out.push_str(replacement);
        } else {
            out.push_str(name);
        }
        prev = name.chars().next_back();
        rest = &rest[idx + name.len()..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_longest_first() {
        let lens: Vec<usize> = CONSTANTS.iter().map(|(n, _)| n.len()).collect();
        let mut sorted = lens.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(lens, sorted);
    }

    #[test]
    fn whole_token_only() {
        assert_eq!(substitute_constants("cosh(tau)"), "cosh(tau)");
        assert_eq!(substitute_constants("c*tau"), "(1)*tau");
        assert_eq!(substitute_constants("sec(c)"), "sec((1))");
        assert_eq!(substitute_constants("exp(e)"), "exp((2.718281828459045))");
        assert_eq!(substitute_constants("1e-5 + e"), "1e-5 + (2.718281828459045)");
        assert_eq!(substitute_constants("cc + c_1"), "cc + c_1");
    }

    #[test]
    fn adjacent_tokens() {
        assert_eq!(substitute_constants("c*c"), "(1)*(1)");
        assert_eq!(substitute_constants("pi/hbar"), "(3.141592653589793)/(1)");
    }
}
