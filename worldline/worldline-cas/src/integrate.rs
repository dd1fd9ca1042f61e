//! Rule-based indefinite integration with respect to one variable.
//!
//! Covered:
//! - linearity and constant factors
//! - polynomials (including products and integer powers of polynomials)
//! - every elementary function of an affine argument `a*x + b`
//! - `(a*x + b)^n`, `k^(a*x + b)`, squares of trig/hyperbolic functions
//! - polynomial times `sin/cos/sinh/cosh/exp` of an affine argument (by parts)
//! - `f'/f` -> `log(abs(f))` when the ratio is a constant multiple
//!
//! Everything else is [`AlgebraError::Unsupported`]. No constant of
//! integration is added.

use crate::error::{AlgebraError, Result};
use crate::expr::{add, call, div, mul, neg, num, pow, sub, var, Expr, Func};
use crate::simplify::simplify;

/// Highest polynomial degree expanded symbolically.
const MAX_DEGREE: usize = 32;

/// Probe points for the `f'/f` ratio test.
const PROBES: [f64; 3] = [0.37, 1.13, 2.71];

pub fn integrate(e: &Expr, v: &str) -> Result<Expr> {
    let e = simplify(e);
    Ok(simplify(&antiderivative(&e, v)?))
}

fn unsupported(e: &Expr) -> AlgebraError {
    AlgebraError::Unsupported { operation: "integrate", expr: e.to_string() }
}

fn antiderivative(e: &Expr, v: &str) -> Result<Expr> {
    if !e.contains_var(v) {
        return Ok(mul(e.clone(), var(v)));
    }
    if let Some(p) = Poly::from_expr(e, v) {
        return Ok(p.integral().to_expr(v));
    }
    match e {
        Expr::Neg(a) => Ok(neg(antiderivative(a, v)?)),
        Expr::Add(a, b) => Ok(add(antiderivative(a, v)?, antiderivative(b, v)?)),
        Expr::Sub(a, b) => Ok(sub(antiderivative(a, v)?, antiderivative(b, v)?)),
        Expr::Mul(..) | Expr::Div(..) => product(e, v),
        Expr::Pow(base, exp) => power(base, exp, v).ok_or_else(|| unsupported(e)),
        Expr::Call(f, u) => function_of_affine(*f, u, v).ok_or_else(|| unsupported(e)),
        Expr::Num(_) | Expr::Var(_) => Err(unsupported(e)),
    }
}

// ---------------------------------------------------------------------------
// Polynomials with numeric coefficients
// ---------------------------------------------------------------------------

/// Coefficients in ascending degree.
#[derive(Clone, Debug, PartialEq)]
struct Poly(Vec<f64>);

impl Poly {
    fn constant(c: f64) -> Self {
        Poly(vec![c]).trimmed()
    }

    fn trimmed(mut self) -> Self {
        while self.0.last() == Some(&0.0) {
            self.0.pop();
        }
        self
    }

    fn is_zero(&self) -> bool {
        self.0.is_empty()
    }

    fn degree(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    fn coeff(&self, k: usize) -> f64 {
        self.0.get(k).copied().unwrap_or(0.0)
    }

    fn from_expr(e: &Expr, v: &str) -> Option<Poly> {
        if e.is_closed() {
            let c = e.eval(&[]).ok()?;
            return c.is_finite().then(|| Poly::constant(c));
        }
        let p = match e {
            Expr::Var(name) if name == v => Poly(vec![0.0, 1.0]),
            Expr::Neg(a) => Poly::from_expr(a, v)?.scale(-1.0),
            Expr::Add(a, b) => Poly::from_expr(a, v)?.plus(&Poly::from_expr(b, v)?, 1.0),
            Expr::Sub(a, b) => Poly::from_expr(a, v)?.plus(&Poly::from_expr(b, v)?, -1.0),
            Expr::Mul(a, b) => Poly::from_expr(a, v)?.times(&Poly::from_expr(b, v)?)?,
            Expr::Div(a, b) if b.is_closed() => {
                let d = b.eval(&[]).ok()?;
                if d == 0.0 || !d.is_finite() {
                    return None;
                }
                Poly::from_expr(a, v)?.scale(1.0 / d)
            }
            Expr::Pow(a, n) if n.is_closed() => {
                let n = n.eval(&[]).ok()?;
                if n < 0.0 || n.fract() != 0.0 || n as usize > MAX_DEGREE {
                    return None;
                }
                let base = Poly::from_expr(a, v)?;
                let mut acc = Poly::constant(1.0);
                for _ in 0..n as usize {
                    acc = acc.times(&base)?;
                }
                acc
            }
            _ => return None,
        };
        Some(p)
    }

    fn scale(self, k: f64) -> Poly {
        Poly(self.0.into_iter().map(|c| c * k).collect()).trimmed()
    }

    fn plus(self, other: &Poly, sign: f64) -> Poly {
        let n = self.0.len().max(other.0.len());
        Poly((0..n).map(|k| self.coeff(k) + sign * other.coeff(k)).collect()).trimmed()
    }

    fn times(&self, other: &Poly) -> Option<Poly> {
        if self.is_zero() || other.is_zero() {
            return Some(Poly(Vec::new()));
        }
        if self.degree() + other.degree() > MAX_DEGREE {
            return None;
        }
        let mut out = vec![0.0; self.0.len() + other.0.len() - 1];
        for (i, a) in self.0.iter().enumerate() {
            for (j, b) in other.0.iter().enumerate() {
                out[i + j] += a * b;
            }
        }
        Some(Poly(out).trimmed())
    }

    fn integral(&self) -> Poly {
        let mut out = vec![0.0];
        out.extend(self.0.iter().enumerate().map(|(k, c)| c / (k as f64 + 1.0)));
        Poly(out).trimmed()
    }

    fn derivative(&self) -> Poly {
        Poly(self.0.iter().enumerate().skip(1).map(|(k, c)| c * k as f64).collect()).trimmed()
    }

    /// `(a, b)` for `a*x + b` with `a != 0`.
    fn as_affine(&self) -> Option<(f64, f64)> {
        (self.0.len() == 2).then(|| (self.0[1], self.0[0]))
    }

    /// Highest degree first, subtracting negative terms.
    fn to_expr(&self, v: &str) -> Expr {
        let mut acc: Option<Expr> = None;
        for k in (0..self.0.len()).rev() {
            let c = self.0[k];
            if c == 0.0 {
                continue;
            }
            let monomial = |c: f64| match k {
                0 => num(c),
                1 => mul(num(c), var(v)),
                _ => mul(num(c), pow(var(v), num(k as f64))),
            };
            acc = Some(match acc {
                None => monomial(c),
                Some(prev) if c < 0.0 => sub(prev, monomial(-c)),
                Some(prev) => add(prev, monomial(c)),
            });
        }
        simplify(&acc.unwrap_or(num(0.0)))
    }
}

fn affine(u: &Expr, v: &str) -> Option<(f64, f64)> {
    Poly::from_expr(u, v)?.as_affine()
}

// ---------------------------------------------------------------------------
// Elementary functions of an affine argument
// ---------------------------------------------------------------------------

/// `∫ f(a*x + b) dx = F(u) / a`.
fn function_of_affine(f: Func, u: &Expr, v: &str) -> Option<Expr> {
    let (a, _) = affine(u, v)?;
    let u = u.clone();
    let c = |g: Func| call(g, u.clone());
    let log_abs = |e: Expr| call(Func::Log, call(Func::Abs, e));
    let sq = |e: Expr| pow(e, num(2.0));
    let big_f = match f {
        Func::Sin => neg(c(Func::Cos)),
        Func::Cos => c(Func::Sin),
        Func::Tan => neg(log_abs(c(Func::Cos))),
        Func::Sec => log_abs(add(c(Func::Sec), c(Func::Tan))),
        Func::Csc => neg(log_abs(add(c(Func::Csc), c(Func::Cot)))),
        Func::Cot => log_abs(c(Func::Sin)),
        Func::Asin => add(mul(u.clone(), c(Func::Asin)), call(Func::Sqrt, sub(num(1.0), sq(u.clone())))),
        Func::Acos => sub(mul(u.clone(), c(Func::Acos)), call(Func::Sqrt, sub(num(1.0), sq(u.clone())))),
        Func::Atan => sub(
            mul(u.clone(), c(Func::Atan)),
            div(call(Func::Log, add(num(1.0), sq(u.clone()))), num(2.0)),
        ),
        Func::Sinh => c(Func::Cosh),
        Func::Cosh => c(Func::Sinh),
        Func::Tanh => call(Func::Log, c(Func::Cosh)),
        Func::Asinh => sub(mul(u.clone(), c(Func::Asinh)), call(Func::Sqrt, add(sq(u.clone()), num(1.0)))),
        Func::Acosh => sub(mul(u.clone(), c(Func::Acosh)), call(Func::Sqrt, sub(sq(u.clone()), num(1.0)))),
        Func::Atanh => add(
            mul(u.clone(), c(Func::Atanh)),
            div(call(Func::Log, sub(num(1.0), sq(u.clone()))), num(2.0)),
        ),
        Func::Exp => c(Func::Exp),
        Func::Log => sub(mul(u.clone(), c(Func::Log)), u.clone()),
        Func::Sqrt => mul(div(num(2.0), num(3.0)), pow(u.clone(), num(1.5))),
        Func::Abs => div(mul(u.clone(), c(Func::Abs)), num(2.0)),
        Func::Sign => c(Func::Abs),
    };
    Some(div(big_f, num(a)))
}

/// Powers: `(a*x+b)^n`, `k^(a*x+b)`, and squares/inverse squares of
/// trig and hyperbolic functions of an affine argument.
fn power(base: &Expr, exp: &Expr, v: &str) -> Option<Expr> {
    if exp.is_closed() {
        let n = exp.eval(&[]).ok()?;
        if let Some((a, _)) = affine(base, v) {
            if n == -1.0 {
                return Some(div(call(Func::Log, call(Func::Abs, base.clone())), num(a)));
            }
            return Some(div(pow(base.clone(), num(n + 1.0)), num((n + 1.0) * a)));
        }
        if let Expr::Call(f, u) = base {
            return squared_function(*f, u, n, v);
        }
        return None;
    }
    if base.is_closed() {
        let (a, _) = affine(exp, v)?;
        let ln_k = base.eval(&[]).ok()?.ln();
        if !ln_k.is_finite() || ln_k == 0.0 {
            return None;
        }
        return Some(div(pow(base.clone(), exp.clone()), num(a * ln_k)));
    }
    None
}

fn squared_function(f: Func, u: &Expr, n: f64, v: &str) -> Option<Expr> {
    let (a, _) = affine(u, v)?;
    let u = u.clone();
    let two_u = || mul(num(2.0), u.clone());
    let quarter = |g: Func| div(call(g, two_u()), num(4.0));
    let half_u = || div(u.clone(), num(2.0));
    let big_f = match (f, n) {
        (Func::Sin, n) if n == 2.0 => sub(half_u(), quarter(Func::Sin)),
        (Func::Cos, n) if n == 2.0 => add(half_u(), quarter(Func::Sin)),
        (Func::Sinh, n) if n == 2.0 => sub(quarter(Func::Sinh), half_u()),
        (Func::Cosh, n) if n == 2.0 => add(quarter(Func::Sinh), half_u()),
        (Func::Tan, n) if n == 2.0 => sub(call(Func::Tan, u.clone()), u.clone()),
        (Func::Tanh, n) if n == 2.0 => sub(u.clone(), call(Func::Tanh, u.clone())),
        (Func::Sec, n) if n == 2.0 => call(Func::Tan, u.clone()),
        (Func::Csc, n) if n == 2.0 => neg(call(Func::Cot, u.clone())),
        (Func::Exp, n) if n != 0.0 => div(call(Func::Exp, mul(num(n), u.clone())), num(n)),
        (Func::Cos, n) if n == -2.0 => call(Func::Tan, u.clone()),
        (Func::Cosh, n) if n == -2.0 => call(Func::Tanh, u.clone()),
        (Func::Sin, n) if n == -2.0 => neg(call(Func::Cot, u.clone())),
        (Func::Sqrt, n) => return power(&u, &num(n / 2.0), v),
        _ => return None,
    };
    Some(div(big_f, num(a)))
}

// ---------------------------------------------------------------------------
// Products and quotients
// ---------------------------------------------------------------------------

/// Flatten nested `*`, `/` and unary minus into numerator/denominator factors.
fn flatten(e: &Expr, numer: &mut Vec<Expr>, denom: &mut Vec<Expr>, sign: &mut f64) {
    match e {
        Expr::Mul(a, b) => {
            flatten(a, numer, denom, sign);
            flatten(b, numer, denom, sign);
        }
        Expr::Div(a, b) => {
            flatten(a, numer, denom, sign);
            flatten(b, denom, numer, sign);
        }
        Expr::Neg(a) => {
            *sign = -*sign;
            flatten(a, numer, denom, sign);
        }
        other => numer.push(other.clone()),
    }
}

fn product_of(factors: &[Expr]) -> Expr {
    factors.iter().cloned().reduce(mul).unwrap_or(num(1.0))
}

fn product(e: &Expr, v: &str) -> Result<Expr> {
    let (mut numer, mut denom, mut sign) = (Vec::new(), Vec::new(), 1.0);
    flatten(e, &mut numer, &mut denom, &mut sign);

    let (k_num, x_num): (Vec<Expr>, Vec<Expr>) = numer.into_iter().partition(|f| !f.contains_var(v));
    let (k_den, x_den): (Vec<Expr>, Vec<Expr>) = denom.into_iter().partition(|f| !f.contains_var(v));

    let coeff = simplify(&div(mul(num(sign), product_of(&k_num)), product_of(&k_den)));
    if !coeff.is_num(1.0) {
        let rest = simplify(&div(product_of(&x_num), product_of(&x_den)));
        return Ok(mul(coeff, antiderivative(&rest, v)?));
    }

    if x_den.is_empty() {
        return numerator_product(&x_num, v).ok_or_else(|| unsupported(e));
    }
    if x_num.is_empty() && x_den.len() == 1 {
        let d = &x_den[0];
        let recip = match d {
            Expr::Pow(b, n) => power(b, &simplify(&neg((**n).clone())), v),
            _ => power(d, &num(-1.0), v),
        };
        if let Some(r) = recip {
            return Ok(r);
        }
    }
    log_derivative(&product_of(&x_num), &product_of(&x_den), v).ok_or_else(|| unsupported(e))
}

/// `∫ Π f_i` with no constant factors and no denominator.
fn numerator_product(xs: &[Expr], v: &str) -> Option<Expr> {
    if let [single] = xs {
        return antiderivative(single, v).ok();
    }
    let mut poly = Poly::constant(1.0);
    let mut others = Vec::new();
    for f in xs {
        match Poly::from_expr(f, v) {
            Some(p) => poly = poly.times(&p)?,
            None => others.push(f.clone()),
        }
    }
    match others.as_slice() {
        [] => Some(poly.integral().to_expr(v)),
        [g] if parts_friendly(g, v) => by_parts(&poly, g, v),
        [g, h] if poly.degree() == 0 => {
            pair_product(g, h, v).map(|r| mul(num(poly.coeff(0)), r))
        }
        _ => None,
    }
}

/// Functions whose repeated antiderivatives stay in the same family.
fn parts_friendly(g: &Expr, v: &str) -> bool {
    match g {
        Expr::Call(Func::Sin | Func::Cos | Func::Sinh | Func::Cosh | Func::Exp, u) => affine(u, v).is_some(),
        Expr::Pow(k, u) => k.is_closed() && affine(u, v).is_some(),
        _ => false,
    }
}

/// `∫ P g = Σ_k (-1)^k P^(k) G_(k+1)` where `G_(k+1)` is the (k+1)-fold antiderivative of `g`.
fn by_parts(p: &Poly, g: &Expr, v: &str) -> Option<Expr> {
    let mut deriv = p.clone();
    let mut g_int = simplify(&antiderivative(g, v).ok()?);
    let mut sign = 1.0;
    let mut acc = num(0.0);
    while !deriv.is_zero() {
        let term = mul(num(sign), mul(deriv.to_expr(v), g_int.clone()));
        acc = add(acc, term);
        deriv = deriv.derivative();
        if deriv.is_zero() {
            break;
        }
        g_int = simplify(&antiderivative(&g_int, v).ok()?);
        sign = -sign;
    }
    Some(acc)
}

/// `sin(u)cos(u)`, `sinh(u)cosh(u)`, `exp(u)exp(w)`.
fn pair_product(g: &Expr, h: &Expr, v: &str) -> Option<Expr> {
    let (Expr::Call(f1, u1), Expr::Call(f2, u2)) = (g, h) else { return None };
    let same_arg = u1 == u2;
    let square_over = |f: Func| -> Option<Expr> {
        let (a, _) = affine(u1, v)?;
        Some(div(pow(call(f, (**u1).clone()), num(2.0)), num(2.0 * a)))
    };
    match (f1, f2) {
        (Func::Sin, Func::Cos) | (Func::Cos, Func::Sin) if same_arg => square_over(Func::Sin),
        (Func::Sinh, Func::Cosh) | (Func::Cosh, Func::Sinh) if same_arg => square_over(Func::Sinh),
        (Func::Exp, Func::Exp) => {
            let merged = simplify(&add((**u1).clone(), (**u2).clone()));
            function_of_affine(Func::Exp, &merged, v)
        }
        _ => None,
    }
}

/// `∫ n/d = r * log(abs(d))` when `n = r * d'` for a constant `r`, checked
/// at a few sample points.
fn log_derivative(n: &Expr, d: &Expr, v: &str) -> Option<Expr> {
    let dd = crate::diff::differentiate(d, v);
    let mut ratio: Option<f64> = None;
    for &x in &PROBES {
        let nv = n.eval(&[(v, x)]).ok()?;
        let dv = dd.eval(&[(v, x)]).ok()?;
        let r = nv / dv;
        if !r.is_finite() {
            return None;
        }
        match ratio {
            None => ratio = Some(r),
            Some(r0) if (r - r0).abs() <= 1e-9 * r0.abs().max(1.0) => {}
            Some(_) => return None,
        }
    }
    Some(mul(num(ratio?), call(Func::Log, call(Func::Abs, d.clone()))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::parse;

    fn ii(src: &str) -> String {
        integrate(&parse(src).unwrap(), "tau").unwrap().to_string()
    }

    #[test]
    fn closed_forms() {
        assert_eq!(ii("0"), "0");
        assert_eq!(ii("2"), "2*tau");
        assert_eq!(ii("3*tau^2"), "tau^3");
        assert_eq!(ii("cosh(tau)"), "sinh(tau)");
        assert_eq!(ii("sinh(tau)"), "cosh(tau)");
        assert_eq!(ii("1/tau"), "log(abs(tau))");
        assert_eq!(ii("exp(2*tau)"), "exp(2*tau)/2");
    }

    #[test]
    fn polynomial_arithmetic() {
        let p = Poly::from_expr(&parse("(1 + tau)^2 - tau").unwrap(), "tau").unwrap();
        assert_eq!(p, Poly(vec![1.0, 1.0, 1.0]));
        assert_eq!(p.integral(), Poly(vec![0.0, 1.0, 0.5, 1.0 / 3.0]));
        assert_eq!(p.derivative(), Poly(vec![1.0, 2.0]));
        assert!(Poly::from_expr(&parse("tau^-1").unwrap(), "tau").is_none());
        assert!(Poly::from_expr(&parse("k*tau").unwrap(), "tau").is_none());
    }

    #[test]
    fn unsupported_is_an_error() {
        let err = integrate(&parse("exp(tau^2)").unwrap(), "tau").unwrap_err();
        assert!(matches!(err, AlgebraError::Unsupported { operation: "integrate", .. }));
        assert!(integrate(&parse("sin(tau)/tau").unwrap(), "tau").is_err());
    }
}
