//! Expression tree, printing and numeric evaluation.

use std::collections::BTreeSet;
use std::fmt;

use crate::error::{AlgebraError, Result};

/// Unary elementary functions understood by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Func {
    Sin,
    Cos,
    Tan,
    Sec,
    Csc,
    Cot,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Asinh,
    Acosh,
    Atanh,
    Exp,
    Log,
    Sqrt,
    Abs,
    Sign,
}

impl Func {
    pub fn from_name(name: &str) -> Option<Func> {
        Some(match name {
            "sin" => Func::Sin,
            "cos" => Func::Cos,
            "tan" => Func::Tan,
            "sec" => Func::Sec,
            "csc" => Func::Csc,
            "cot" => Func::Cot,
            "asin" => Func::Asin,
            "acos" => Func::Acos,
            "atan" => Func::Atan,
            "sinh" => Func::Sinh,
            "cosh" => Func::Cosh,
            "tanh" => Func::Tanh,
            "asinh" => Func::Asinh,
            "acosh" => Func::Acosh,
            "atanh" => Func::Atanh,
            "exp" => Func::Exp,
            "log" | "ln" => Func::Log,
            "sqrt" => Func::Sqrt,
            "abs" => Func::Abs,
            "sign" => Func::Sign,
            _ => return None,
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            Func::Sin => "sin",
            Func::Cos => "cos",
            Func::Tan => "tan",
            Func::Sec => "sec",
            Func::Csc => "csc",
            Func::Cot => "cot",
            Func::Asin => "asin",
            Func::Acos => "acos",
            Func::Atan => "atan",
            Func::Sinh => "sinh",
            Func::Cosh => "cosh",
            Func::Tanh => "tanh",
            Func::Asinh => "asinh",
            Func::Acosh => "acosh",
            Func::Atanh => "atanh",
            Func::Exp => "exp",
            Func::Log => "log",
            Func::Sqrt => "sqrt",
            Func::Abs => "abs",
            Func::Sign => "sign",
        }
    }

    pub fn apply(self, x: f64) -> f64 {
        match self {
            Func::Sin => x.sin(),
            Func::Cos => x.cos(),
            Func::Tan => x.tan(),
            Func::Sec => 1.0 / x.cos(),
            Func::Csc => 1.0 / x.sin(),
            Func::Cot => 1.0 / x.tan(),
            Func::Asin => x.asin(),
            Func::Acos => x.acos(),
            Func::Atan => x.atan(),
            Func::Sinh => x.sinh(),
            Func::Cosh => x.cosh(),
            Func::Tanh => x.tanh(),
            Func::Asinh => x.asinh(),
            Func::Acosh => x.acosh(),
            Func::Atanh => x.atanh(),
            Func::Exp => x.exp(),
            Func::Log => x.ln(),
            Func::Sqrt => x.sqrt(),
            Func::Abs => x.abs(),
            Func::Sign => {
                if x > 0.0 {
                    1.0
                } else if x < 0.0 {
                    -1.0
                } else {
                    // sign(0) = 0; NaN stays NaN
                    x
                }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Num(f64),
    Var(String),
    Neg(Box<Expr>),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),
    Call(Func, Box<Expr>),
}

// Raw constructors; no simplification happens here.
pub fn num(v: f64) -> Expr {
    Expr::Num(v)
}
pub fn var(name: &str) -> Expr {
    Expr::Var(name.to_string())
}
pub fn neg(a: Expr) -> Expr {
    Expr::Neg(Box::new(a))
}
pub fn add(a: Expr, b: Expr) -> Expr {
    Expr::Add(Box::new(a), Box::new(b))
}
pub fn sub(a: Expr, b: Expr) -> Expr {
    Expr::Sub(Box::new(a), Box::new(b))
}
pub fn mul(a: Expr, b: Expr) -> Expr {
    Expr::Mul(Box::new(a), Box::new(b))
}
pub fn div(a: Expr, b: Expr) -> Expr {
    Expr::Div(Box::new(a), Box::new(b))
}
pub fn pow(a: Expr, b: Expr) -> Expr {
    Expr::Pow(Box::new(a), Box::new(b))
}
pub fn call(f: Func, a: Expr) -> Expr {
    Expr::Call(f, Box::new(a))
}

impl Expr {
    pub fn as_num(&self) -> Option<f64> {
        match self {
            Expr::Num(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    pub fn is_num(&self, v: f64) -> bool {
        matches!(self, Expr::Num(x) if *x == v)
    }

    /// True iff `name` occurs anywhere in the tree.
    pub fn contains_var(&self, name: &str) -> bool {
        match self {
            Expr::Num(_) => false,
            Expr::Var(v) => v == name,
            Expr::Neg(a) | Expr::Call(_, a) => a.contains_var(name),
            Expr::Add(a, b) | Expr::Sub(a, b) | Expr::Mul(a, b) | Expr::Div(a, b) | Expr::Pow(a, b) => {
                a.contains_var(name) || b.contains_var(name)
            }
        }
    }

    pub fn free_variables(&self) -> BTreeSet<String> {
        let mut out = BTreeSet::new();
        self.collect_vars(&mut out);
        out
    }

    fn collect_vars(&self, out: &mut BTreeSet<String>) {
        match self {
            Expr::Num(_) => {}
            Expr::Var(v) => {
                out.insert(v.clone());
            }
            Expr::Neg(a) | Expr::Call(_, a) => a.collect_vars(out),
            Expr::Add(a, b) | Expr::Sub(a, b) | Expr::Mul(a, b) | Expr::Div(a, b) | Expr::Pow(a, b) => {
                a.collect_vars(out);
                b.collect_vars(out);
            }
        }
    }

    /// True iff the tree has no variables at all.
    pub fn is_closed(&self) -> bool {
        self.free_variables().is_empty()
    }

    /// Replace every occurrence of a variable with an expression.
    pub fn substitute(&self, name: &str, with: &Expr) -> Expr {
        self.map_vars(&|v| (v == name).then(|| with.clone()))
    }

    fn map_vars(&self, f: &dyn Fn(&str) -> Option<Expr>) -> Expr {
        let bx = |e: &Expr| Box::new(e.map_vars(f));
        match self {
            Expr::Num(v) => Expr::Num(*v),
            Expr::Var(v) => f(v).unwrap_or_else(|| Expr::Var(v.clone())),
            Expr::Neg(a) => Expr::Neg(bx(a)),
            Expr::Call(g, a) => Expr::Call(*g, bx(a)),
            Expr::Add(a, b) => Expr::Add(bx(a), bx(b)),
            Expr::Sub(a, b) => Expr::Sub(bx(a), bx(b)),
            Expr::Mul(a, b) => Expr::Mul(bx(a), bx(b)),
            Expr::Div(a, b) => Expr::Div(bx(a), bx(b)),
            Expr::Pow(a, b) => Expr::Pow(bx(a), bx(b)),
        }
    }

    /// Evaluate with variable bindings. IEEE semantics: the result may be
    /// NaN or infinite; only unbound variables are errors.
    pub fn eval(&self, bindings: &[(&str, f64)]) -> Result<f64> {
        Ok(match self {
            Expr::Num(v) => *v,
            Expr::Var(v) => bindings
                .iter()
                .find(|(name, _)| *name == v.as_str())
                .map(|(_, value)| *value)
                .ok_or_else(|| AlgebraError::UnboundVariable(v.clone()))?,
            Expr::Neg(a) => -a.eval(bindings)?,
            Expr::Add(a, b) => a.eval(bindings)? + b.eval(bindings)?,
            Expr::Sub(a, b) => a.eval(bindings)? - b.eval(bindings)?,
            Expr::Mul(a, b) => a.eval(bindings)? * b.eval(bindings)?,
            Expr::Div(a, b) => a.eval(bindings)? / b.eval(bindings)?,
            Expr::Pow(a, b) => a.eval(bindings)?.powf(b.eval(bindings)?),
            Expr::Call(f, a) => f.apply(a.eval(bindings)?),
        })
    }

    fn precedence(&self) -> u8 {
        match self {
            Expr::Add(..) | Expr::Sub(..) => 1,
            Expr::Mul(..) | Expr::Div(..) => 2,
            Expr::Neg(_) => 3,
            Expr::Num(v) if v.is_sign_negative() => 3,
            Expr::Pow(..) => 4,
            Expr::Num(_) | Expr::Var(_) | Expr::Call(..) => 5,
        }
    }
}

/// Shortest text that re-parses to the same value.
pub fn format_number(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{v}")
    } else {
        format!("{v:?}")
    }
}

struct Child<'a> {
    expr: &'a Expr,
    min_prec: u8,
}

impl fmt::Display for Child<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.expr.precedence() < self.min_prec {
            write!(f, "({})", self.expr)
        } else {
            write!(f, "{}", self.expr)
        }
    }
}

fn child(expr: &Expr, min_prec: u8) -> Child<'_> {
    Child { expr, min_prec }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Num(v) => f.write_str(&format_number(*v)),
            Expr::Var(v) => f.write_str(v),
            Expr::Neg(a) => write!(f, "-{}", child(a, 4)),
            Expr::Add(a, b) => write!(f, "{} + {}", child(a, 1), child(b, 2)),
            Expr::Sub(a, b) => write!(f, "{} - {}", child(a, 1), child(b, 2)),
            Expr::Mul(a, b) => write!(f, "{}*{}", child(a, 2), child(b, 3)),
            Expr::Div(a, b) => write!(f, "{}/{}", child(a, 2), child(b, 3)),
            // right associative: a^b^c == a^(b^c)
            Expr::Pow(a, b) => write!(f, "{}^{}", child(a, 5), child(b, 4)),
            Expr::Call(g, a) => write!(f, "{}({})", g.name(), a),
        }
    }
}
