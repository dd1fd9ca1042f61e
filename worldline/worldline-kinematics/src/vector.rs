//! Symbolic 4-vectors over proper time.

use std::fmt;

use worldline_cas::{AlgebraEngine, SymbolicAdapter};

/// Which kinematic quantity a vector describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quantity {
    Position,
    Velocity,
    Acceleration,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Quantity::Position => "position",
            Quantity::Velocity => "velocity",
            Quantity::Acceleration => "acceleration",
        })
    }
}

/// Four expression strings `(t, x, y, z)` in `tau` and named constants.
///
/// Immutable: every operation builds a new vector.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SymbolicVector4([String; 4]);

impl SymbolicVector4 {
    pub fn new<S: Into<String>>(t: S, x: S, y: S, z: S) -> Self {
        Self([t.into(), x.into(), y.into(), z.into()])
    }

    /// All four components `"0"`.
    pub fn zero() -> Self {
        Self(["0", "0", "0", "0"].map(String::from))
    }

    pub fn components(&self) -> &[String; 4] {
        &self.0
    }

    /// The time component.
    pub fn time(&self) -> &str {
        &self.0[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// True iff any component mentions `variable` once constants are
    /// substituted. Unparseable components count as dependent.
    pub fn depends_on<E: AlgebraEngine>(&self, adapter: &SymbolicAdapter<E>, variable: &str) -> bool {
        self.iter().any(|c| {
            if worldline_cas::adapter::is_degenerate(c) {
                return false;
            }
            let c = adapter.substitute_constants(c);
            adapter.engine().free_variables(&c).map_or(true, |vars| vars.contains(variable))
        })
    }

    /// Apply `f` to every component, stopping at the first error.
    pub fn try_map<F, Err>(&self, mut f: F) -> Result<Self, (usize, Err)>
    where
        F: FnMut(usize, &str) -> Result<String, Err>,
    {
        let mut out: [String; 4] = Default::default();
        for (i, c) in self.0.iter().enumerate() {
            out[i] = f(i, c).map_err(|e| (i, e))?;
        }
        Ok(Self(out))
    }
}

impl From<[&str; 4]> for SymbolicVector4 {
    fn from(c: [&str; 4]) -> Self {
        Self(c.map(String::from))
    }
}

impl From<[String; 4]> for SymbolicVector4 {
    fn from(c: [String; 4]) -> Self {
        Self(c)
    }
}

impl fmt::Display for SymbolicVector4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [t, x, y, z] = &self.0;
        write!(f, "({t}, {x}, {y}, {z})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use worldline_cas::TAU;

    #[test]
    fn dependence_ignores_constants_and_zeros() {
        let a = SymbolicAdapter::new();
        assert!(!SymbolicVector4::from(["5/3", "4/3", "0", ""]).depends_on(&a, TAU));
        assert!(!SymbolicVector4::from(["c", "c/2", "0", "0"]).depends_on(&a, TAU));
        assert!(SymbolicVector4::from(["cosh(tau)", "sinh(tau)", "0", "0"]).depends_on(&a, TAU));
        assert!(SymbolicVector4::from(["1", "2", "sin(", "0"]).depends_on(&a, TAU));
    }

    #[test]
    fn try_map_reports_first_failing_index() {
        let v = SymbolicVector4::from(["a", "b", "c", "d"]);
        let r = v.try_map(|i, c| if i == 2 { Err(()) } else { Ok(c.to_uppercase()) });
        assert_eq!(r, Err((2, ())));
        let ok = v.try_map(|_, c| Ok::<_, ()>(c.repeat(2))).unwrap();
        assert_eq!(ok.to_string(), "(aa, bb, cc, dd)");
    }
}
