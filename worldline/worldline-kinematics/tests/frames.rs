use worldline_core::{transform_worldline, LorentzBoost, McrfFrame};
use worldline_kinematics::*;

fn v4(c: [&str; 4]) -> SymbolicVector4 {
    c.into()
}

fn assert_close(got: [f64; 4], want: [f64; 4], tol: f64) {
    for i in 0..4 {
        assert!((got[i] - want[i]).abs() < tol, "{got:?} vs {want:?}");
    }
}

#[test]
fn inertial_reference_uses_one_boost() {
    let solver = KinematicSolver::new();
    let ship = solver.from_velocity(&v4(["5/3", "4/3", "0", "0"]), &[0.0; 4]).unwrap();
    let sel = select_frame(solver.adapter(), &ship, 5.0, None, &FrameConfig::default());
    assert_eq!(sel.kind, FrameKind::Inertial);
    assert!((sel.tau - 3.0).abs() < 1e-4);
    assert_eq!(sel.frame.origin, [0.0; 4]);
    assert_eq!(sel.frame.time_offset, 0.0);

    // The ship's turnaround event, seen from the ship.
    assert_close(sel.frame.apply(&[5.0, 4.0, 0.0, 0.0]), [3.0, 0.0, 0.0, 0.0], 1e-9);
    // Earth at lab time 5, in ship coordinates.
    assert_close(sel.frame.apply(&[5.0, 0.0, 0.0, 0.0]), [25.0 / 3.0, -20.0 / 3.0, 0.0, 0.0], 1e-9);
}

#[test]
fn own_trace_sits_on_the_time_axis() {
    let solver = KinematicSolver::new();
    let ship = solver.from_velocity(&v4(["5/3", "4/3", "0", "0"]), &[0.0; 4]).unwrap();
    let sel = select_frame(solver.adapter(), &ship, 5.0, None, &FrameConfig::default());

    let trace = sample_worldline(solver.adapter(), ship.position(), 0.0, 3.0, 31);
    let coords: Vec<[f64; 4]> = trace.iter().map(|(_, x)| *x).collect();
    let local = transform_worldline(&coords, &sel.frame.boost, &sel.frame.origin, sel.frame.time_offset);
    for ((tau, _), x) in trace.iter().zip(&local) {
        assert_close(*x, [*tau, 0.0, 0.0, 0.0], 1e-9);
    }
}

#[test]
fn accelerating_reference_is_rebuilt_per_instant() {
    let solver = KinematicSolver::new();
    let rocket = solver.from_position(&v4(["sinh(tau)", "cosh(tau)", "0", "0"])).unwrap();
    let a = solver.adapter();

    let mut last = None;
    for lab_time in [0.5_f64, 1.0_f64.sinh(), 4.0] {
        let sel = select_frame(a, &rocket, lab_time, None, &FrameConfig::default());
        assert_eq!(sel.kind, FrameKind::Accelerating);
        assert!((sel.tau - lab_time.asinh()).abs() < 1e-4);
        assert_eq!(sel.frame.time_offset, sel.tau);

        // comoving: the rocket is at the spatial origin and at rest
        let here = evaluate(a, rocket.position(), sel.tau);
        assert_close(sel.frame.apply(&here), [sel.tau, 0.0, 0.0, 0.0], 1e-9);
        let u = evaluate(a, rocket.velocity(), sel.tau);
        assert_close(sel.frame.boost.apply(&u), [1.0, 0.0, 0.0, 0.0], 1e-9);

        if let Some(prev) = last.replace(sel.frame) {
            assert_ne!(prev, sel.frame);
        }
    }
}

#[test]
fn singular_reference_falls_back_to_last_origin() {
    let solver = KinematicSolver::new();
    let light = solver.from_velocity(&v4(["0", "1", "0", "0"]), &[0.0; 4]).unwrap();
    let previous = McrfFrame::new(
        LorentzBoost::from_velocity([0.6, 0.0, 0.0]).unwrap(),
        [1.0, 2.0, 3.0, 4.0],
        0.75,
    );

    let sel = select_frame(solver.adapter(), &light, 5.0, Some(&previous), &FrameConfig::default());
    assert_eq!(sel.kind, FrameKind::Fallback);
    assert_eq!(sel.frame.boost, LorentzBoost::identity());
    assert_eq!(sel.frame.origin, previous.origin);
    assert_eq!(sel.frame.time_offset, previous.time_offset);

    let sel = select_frame(solver.adapter(), &light, 5.0, None, &FrameConfig::default());
    assert_eq!(sel.frame, McrfFrame::lab());
}

#[test]
fn near_light_speed_is_singular() {
    let solver = KinematicSolver::new();
    // v = 0.999995, just above the 0.99999 cap
    let gamma = 1.0 / (1.0 - 0.999995_f64.powi(2)).sqrt();
    let fast = solver
        .from_velocity(&SymbolicVector4::new(format!("{gamma}"), format!("{}", gamma * 0.999995), "0".into(), "0".into()), &[0.0; 4])
        .unwrap();
    let sel = select_frame(solver.adapter(), &fast, 1.0, None, &FrameConfig::default());
    assert_eq!(sel.kind, FrameKind::Fallback);

    let relaxed = FrameConfig { max_speed: 0.999999, ..FrameConfig::default() };
    let sel = select_frame(solver.adapter(), &fast, 1.0, None, &relaxed);
    assert_eq!(sel.kind, FrameKind::Inertial);
}
