//! Bottom-up local rewriting: constant folding, identities, sign hoisting.
//!
//! Not a canonical form. The goal is readable derived expressions and
//! numeric literals wherever a subtree is closed.

use crate::expr::{self, Expr};

pub fn simplify(e: &Expr) -> Expr {
    match e {
        Expr::Num(_) | Expr::Var(_) => e.clone(),
        Expr::Neg(a) => simplify_neg(simplify(a)),
        Expr::Add(a, b) => simplify_add(simplify(a), simplify(b)),
        Expr::Sub(a, b) => simplify_sub(simplify(a), simplify(b)),
        Expr::Mul(a, b) => simplify_mul(simplify(a), simplify(b)),
        Expr::Div(a, b) => simplify_div(simplify(a), simplify(b)),
        Expr::Pow(a, b) => simplify_pow(simplify(a), simplify(b)),
        Expr::Call(f, a) => {
            let a = simplify(a);
            match a.as_num().map(|x| f.apply(x)) {
                Some(v) if v.is_finite() => Expr::Num(v),
                _ => expr::call(*f, a),
            }
        }
    }
}

/// Fold a binary numeric op only when the result stays finite.
fn fold(a: &Expr, b: &Expr, op: impl Fn(f64, f64) -> f64) -> Option<Expr> {
    let v = op(a.as_num()?, b.as_num()?);
    v.is_finite().then_some(Expr::Num(v))
}

/// `x + k` / `x - k` with numeric `k` -> `(x, k)` (signed).
fn numeric_offset(e: &Expr) -> Option<(&Expr, f64)> {
    match e {
        Expr::Add(x, k) => k.as_num().map(|k| (x.as_ref(), k)),
        Expr::Sub(x, k) => k.as_num().map(|k| (x.as_ref(), -k)),
        _ => None,
    }
}

fn with_offset(x: Expr, k: f64) -> Expr {
    if k == 0.0 {
        x
    } else if k < 0.0 {
        expr::sub(x, Expr::Num(-k))
    } else {
        expr::add(x, Expr::Num(k))
    }
}

fn simplify_neg(a: Expr) -> Expr {
    match a {
        Expr::Num(v) => Expr::Num(-v),
        Expr::Neg(inner) => *inner,
        Expr::Sub(x, y) => expr::sub(*y, *x),
        Expr::Mul(x, y) if x.as_num().is_some() => simplify_mul(simplify_neg(*x), *y),
        other => expr::neg(other),
    }
}

fn simplify_add(a: Expr, b: Expr) -> Expr {
    if let Some(v) = fold(&a, &b, |x, y| x + y) {
        return v;
    }
    if a.is_num(0.0) {
        return b;
    }
    if b.is_num(0.0) {
        return a;
    }
    if let Some(k) = b.as_num() {
        if let Some((x, j)) = numeric_offset(&a) {
            return with_offset(x.clone(), j + k);
        }
        return with_offset(a, k);
    }
    if a.as_num().is_some() {
        return simplify_add(b, a);
    }
    match (a, b) {
        (x, Expr::Neg(y)) => simplify_sub(x, *y),
        (Expr::Neg(x), y) => simplify_sub(y, *x),
        (x, y) => expr::add(x, y),
    }
}

fn simplify_sub(a: Expr, b: Expr) -> Expr {
    if let Some(v) = fold(&a, &b, |x, y| x - y) {
        return v;
    }
    if b.is_num(0.0) {
        return a;
    }
    if a.is_num(0.0) {
        return simplify_neg(b);
    }
    if a == b {
        return Expr::Num(0.0);
    }
    if let Some(k) = b.as_num() {
        return simplify_add(a, Expr::Num(-k));
    }
    match (a, b) {
        (x, Expr::Neg(y)) => simplify_add(x, *y),
        (x, y) => expr::sub(x, y),
    }
}

fn simplify_mul(a: Expr, b: Expr) -> Expr {
    if let Some(v) = fold(&a, &b, |x, y| x * y) {
        return v;
    }
    if a.is_num(0.0) || b.is_num(0.0) {
        return Expr::Num(0.0);
    }
    if a.is_num(1.0) {
        return b;
    }
    if b.is_num(1.0) {
        return a;
    }
    if a.is_num(-1.0) {
        return simplify_neg(b);
    }
    if b.is_num(-1.0) {
        return simplify_neg(a);
    }
    // numbers to the left
    if b.as_num().is_some() && a.as_num().is_none() {
        return simplify_mul(b, a);
    }
    match (a, b) {
        (Expr::Neg(x), Expr::Neg(y)) => simplify_mul(*x, *y),
        (Expr::Neg(x), y) => simplify_neg(simplify_mul(*x, y)),
        (x, Expr::Neg(y)) => simplify_neg(simplify_mul(x, *y)),
        (Expr::Num(k), Expr::Mul(x, y)) if x.as_num().is_some() => {
            simplify_mul(fold(&Expr::Num(k), &x, |p, q| p * q).unwrap_or(expr::mul(Expr::Num(k), *x)), *y)
        }
        (x, Expr::Div(one, y)) if one.is_num(1.0) => simplify_div(x, *y),
        (x, y) => expr::mul(x, y),
    }
}

fn simplify_div(a: Expr, b: Expr) -> Expr {
    if let Some(v) = fold(&a, &b, |x, y| x / y) {
        return v;
    }
    if b.is_num(1.0) {
        return a;
    }
    if b.is_num(-1.0) {
        return simplify_neg(a);
    }
    if a.is_num(0.0) && !b.is_num(0.0) {
        return Expr::Num(0.0);
    }
    match (a, b) {
        (Expr::Neg(x), Expr::Neg(y)) => simplify_div(*x, *y),
        (Expr::Neg(x), y) => simplify_neg(simplify_div(*x, y)),
        (x, y) => expr::div(x, y),
    }
}

fn simplify_pow(a: Expr, b: Expr) -> Expr {
    if let Some(v) = fold(&a, &b, f64::powf) {
        return v;
    }
    if b.is_num(0.0) {
        return Expr::Num(1.0);
    }
    if b.is_num(1.0) {
        return a;
    }
    if a.is_num(1.0) {
        return Expr::Num(1.0);
    }
    if a.is_num(0.0) && b.as_num().is_some_and(|n| n > 0.0) {
        return Expr::Num(0.0);
    }
    match (a, b) {
        // (x^p)^q == x^(p*q) for integer q
        (Expr::Pow(x, p), Expr::Num(q)) if q.fract() == 0.0 && p.as_num().is_some() => {
            simplify_pow(*x, fold(&p, &Expr::Num(q), |m, n| m * n).unwrap_or(Expr::Num(q)))
        }
        (x, y) => expr::pow(x, y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::parse;

    fn s(src: &str) -> String {
        simplify(&parse(src).unwrap()).to_string()
    }

    #[test]
    fn folds_constants() {
        assert_eq!(s("2*3 + 4"), "10");
        assert_eq!(s("cosh(0)"), "1");
        assert_eq!(s("1/0"), "1/0");
        assert_eq!(s("(-8)^(1/3)"), "(-8)^0.3333333333333333");
    }

    #[test]
    fn removes_identities() {
        assert_eq!(s("0 + tau*1"), "tau");
        assert_eq!(s("tau^1 - 0"), "tau");
        assert_eq!(s("0*sinh(tau)"), "0");
        assert_eq!(s("tau^0"), "1");
        assert_eq!(s("--tau"), "tau");
        assert_eq!(s("tau - tau"), "0");
    }

    #[test]
    fn collects_numeric_offsets() {
        assert_eq!(s("cosh(tau) - 1 + 1"), "cosh(tau)");
        assert_eq!(s("sinh(tau) + 2 - 5"), "sinh(tau) - 3");
        assert_eq!(s("3 + tau"), "tau + 3");
    }

    #[test]
    fn hoists_signs() {
        assert_eq!(s("tau + -sinh(tau)"), "tau - sinh(tau)");
        assert_eq!(s("(-1)*cos(tau)"), "-cos(tau)");
        assert_eq!(s("-sin(tau) * -2"), "2*sin(tau)");
        assert_eq!(s("2*(3*tau)"), "6*tau");
    }
}
