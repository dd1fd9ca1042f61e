//! One object's kinematic state, updated all-or-nothing.

use tracing::{debug, warn};
use worldline_cas::AlgebraEngine;

use crate::causality::sweep_for_violation;
use crate::config::SweepConfig;
use crate::error::SolveError;
use crate::solver::KinematicSolver;
use crate::triple::{KinematicTriple, PrimaryInput};
use crate::vector::SymbolicVector4;

/// The primary input, the triple solved from it and the FTL tag.
///
/// A failed update leaves all three untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct Worldline {
    input: PrimaryInput,
    triple: KinematicTriple,
    ftl: bool,
}

impl Default for Worldline {
    fn default() -> Self {
        Self::at_rest()
    }
}

impl Worldline {
    /// At rest at the lab origin.
    pub fn at_rest() -> Self {
        Self {
            input: PrimaryInput::Position(SymbolicVector4::from(["tau", "0", "0", "0"])),
            triple: KinematicTriple::at_rest(),
            ftl: false,
        }
    }

    pub fn new<E: AlgebraEngine>(solver: &KinematicSolver<E>, input: PrimaryInput) -> Result<Self, SolveError> {
        let mut w = Self::at_rest();
        w.update(solver, input)?;
        Ok(w)
    }

    /// Re-solve from a new primary input. On error the previous state is kept
    /// and the error returned.
    pub fn update<E: AlgebraEngine>(&mut self, solver: &KinematicSolver<E>, input: PrimaryInput) -> Result<(), SolveError> {
        let triple = solver.solve(&input).map_err(|err| {
            warn!(%err, primary = %input.kind(), "update rejected, keeping previous kinematic state");
            err
        })?;
        let ftl = sweep_for_violation(solver.adapter(), triple.velocity(), &SweepConfig::default());
        if ftl {
            debug!(velocity = %triple.velocity(), "worldline tagged FTL");
        }
        self.input = input;
        self.triple = triple;
        self.ftl = ftl;
        Ok(())
    }

    pub fn input(&self) -> &PrimaryInput {
        &self.input
    }

    pub fn triple(&self) -> &KinematicTriple {
        &self.triple
    }

    /// Excluded from rendering when set.
    pub fn is_ftl(&self) -> bool {
        self.ftl
    }
}
