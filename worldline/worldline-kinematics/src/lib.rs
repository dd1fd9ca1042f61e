#![doc = r#"worldline-kinematics: symbolic worldlines over proper time.

Given one user-authored kinematic quantity (position, velocity or
acceleration as expressions in `tau`) this crate derives the other two,
evaluates them numerically, maps lab time back to proper time and picks the
comoving frame of a reference object.

- [`KinematicSolver`]: the all-or-nothing symbolic derivation.
- [`evaluate`], [`sample_worldline`]: numbers at one `tau` or a whole trace,
  degrading to the zero vector on failure.
- [`locate`], [`find_tau`]: bisection on the time component.
- [`sweep_for_violation`], [`check_velocity`]: causality checks.
- [`select_frame`]: inertial vs accelerating comoving frame.
- [`Worldline`]: one object's state with FTL tagging.

Examples

```rust
use worldline_kinematics::{evaluate, find_tau, KinematicSolver, PrimaryInput, Worldline};

let solver = KinematicSolver::new();
let ship = Worldline::new(
    &solver,
    PrimaryInput::Velocity { velocity: ["5/3", "4/3", "0", "0"].into(), x0: [0.0; 4] },
)
.unwrap();
assert!(!ship.is_ftl());

let x = ship.triple().position();
let tau = find_tau(solver.adapter(), x, 5.0);
assert!((tau - 3.0).abs() < 1e-3);

let event = evaluate(solver.adapter(), x, 3.0);
assert!((event[0] - 5.0).abs() < 1e-12 && (event[1] - 4.0).abs() < 1e-12);
```
"#]

pub mod causality;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod frame;
pub mod locator;
pub mod solver;
pub mod triple;
pub mod vector;
pub mod worldline;

pub use causality::{check_velocity, sweep_for_violation};
pub use config::{FrameConfig, LocatorConfig, SweepConfig};
pub use error::{EvalError, LocateError, SolveError};
pub use evaluator::{evaluate, sample_worldline, try_evaluate};
pub use frame::{select_frame, FrameKind, FrameSelection};
pub use locator::{find_tau, find_tau_with, locate};
pub use solver::KinematicSolver;
pub use triple::{KinematicTriple, PrimaryInput};
pub use vector::{Quantity, SymbolicVector4};
pub use worldline::Worldline;
