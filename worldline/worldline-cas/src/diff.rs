//! Symbolic differentiation with respect to one variable.

use crate::expr::{add, call, div, mul, neg, num, pow, sub, Expr, Func};
use crate::simplify::simplify;

/// `d(e)/d(var)`, simplified.
pub fn differentiate(e: &Expr, var: &str) -> Expr {
    simplify(&d(e, var))
}

fn d(e: &Expr, v: &str) -> Expr {
    if !e.contains_var(v) {
        return num(0.0);
    }
    match e {
        Expr::Num(_) => num(0.0),
        Expr::Var(name) => num(if name == v { 1.0 } else { 0.0 }),
        Expr::Neg(a) => neg(d(a, v)),
        Expr::Add(a, b) => add(d(a, v), d(b, v)),
        Expr::Sub(a, b) => sub(d(a, v), d(b, v)),
        Expr::Mul(a, b) => add(mul(d(a, v), (**b).clone()), mul((**a).clone(), d(b, v))),
        Expr::Div(a, b) => {
            let (a, b) = (a.as_ref(), b.as_ref());
            if !b.contains_var(v) {
                return div(d(a, v), b.clone());
            }
            div(
                sub(mul(d(a, v), b.clone()), mul(a.clone(), d(b, v))),
                pow(b.clone(), num(2.0)),
            )
        }
        Expr::Pow(base, exp) => {
            let (base, exp) = (base.as_ref(), exp.as_ref());
            match (base.contains_var(v), exp.contains_var(v)) {
                // n * u^(n-1) * u'
                (true, false) => mul(
                    mul(exp.clone(), pow(base.clone(), sub(exp.clone(), num(1.0)))),
                    d(base, v),
                ),
                // k^u * log(k) * u'
                (false, true) => mul(mul(e.clone(), call(Func::Log, base.clone())), d(exp, v)),
                // u^w * (w' log(u) + w u'/u)
                _ => mul(
                    e.clone(),
                    add(
                        mul(d(exp, v), call(Func::Log, base.clone())),
                        div(mul(exp.clone(), d(base, v)), base.clone()),
                    ),
                ),
            }
        }
        Expr::Call(f, u) => mul(outer_derivative(*f, u), d(u, v)),
    }
}

/// `f'(u)` for the chain rule.
fn outer_derivative(f: Func, u: &Expr) -> Expr {
    let one_minus_u2 = sub(num(1.0), pow(u.clone(), num(2.0)));
    let u = u.clone();
    match f {
        Func::Sin => call(Func::Cos, u),
        Func::Cos => neg(call(Func::Sin, u)),
        Func::Tan => div(num(1.0), pow(call(Func::Cos, u), num(2.0))),
        Func::Sec => mul(call(Func::Sec, u.clone()), call(Func::Tan, u)),
        Func::Csc => neg(mul(call(Func::Csc, u.clone()), call(Func::Cot, u))),
        Func::Cot => neg(pow(call(Func::Csc, u), num(2.0))),
        Func::Asin => div(num(1.0), call(Func::Sqrt, one_minus_u2)),
        Func::Acos => neg(div(num(1.0), call(Func::Sqrt, one_minus_u2))),
        Func::Atan => div(num(1.0), add(num(1.0), pow(u, num(2.0)))),
        Func::Sinh => call(Func::Cosh, u),
        Func::Cosh => call(Func::Sinh, u),
        Func::Tanh => div(num(1.0), pow(call(Func::Cosh, u), num(2.0))),
        Func::Asinh => div(num(1.0), call(Func::Sqrt, add(pow(u, num(2.0)), num(1.0)))),
        Func::Acosh => div(num(1.0), call(Func::Sqrt, sub(pow(u, num(2.0)), num(1.0)))),
        Func::Atanh => div(num(1.0), one_minus_u2),
        Func::Exp => call(Func::Exp, u),
        Func::Log => div(num(1.0), u),
        Func::Sqrt => div(num(1.0), mul(num(2.0), call(Func::Sqrt, u))),
        Func::Abs => call(Func::Sign, u),
        Func::Sign => num(0.0),
    }
}
