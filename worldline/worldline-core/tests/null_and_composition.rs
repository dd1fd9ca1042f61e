use proptest::prelude::*;
use worldline_core::*;

// Golden: null separation stays null after a boost.
#[test]
fn golden_null_preservation() {
    let boost = LorentzBoost::from_velocity([0.5, 0.2, 0.0]).unwrap();
    let e1 = [0.0, 0.0, 0.0, 0.0];
    let e2 = [3.0, 0.0, 3.0, 0.0];
    assert!(interval(&e1, &e2).abs() < 1e-12);
    let s_after = interval(&boost.apply(&e1), &boost.apply(&e2));
    assert!(s_after.abs() < 1e-9, "not null after: {s_after}");
}

// Golden: collinear boosts compose by Einstein velocity addition.
#[test]
fn golden_collinear_composition() {
    let (v1, v2) = (0.3, 0.4);
    let seq = LorentzBoost::from_velocity([v2, 0.0, 0.0])
        .unwrap()
        .compose(&LorentzBoost::from_velocity([v1, 0.0, 0.0]).unwrap());
    let v12 = (v1 + v2) / (1.0 + v1 * v2);
    let single = LorentzBoost::from_velocity([v12, 0.0, 0.0]).unwrap();
    assert!(seq.max_deviation(&single) < 1e-12);
}

#[test]
fn golden_transform_worldline_batch() {
    // Object at rest at x=2; view it from a frame moving at 0.6 along x whose
    // origin sits on the event (1, 2, 0, 0), time offset 10.
    let boost = LorentzBoost::from_velocity([0.6, 0.0, 0.0]).unwrap();
    let coords: Vec<FourVector> = (0..5).map(|t| [t as f64, 2.0, 0.0, 0.0]).collect();
    let out = transform_worldline(&coords, &boost, &[1.0, 2.0, 0.0, 0.0], 10.0);
    assert_eq!(out.len(), coords.len());
    assert!((out[1][0] - 10.0).abs() < 1e-12);
    assert!(out[1][1].abs() < 1e-12);
    // the object recedes at -0.6 in the moving frame
    let speed = (out[4][1] - out[1][1]) / (out[4][0] - out[1][0]);
    assert!((speed + 0.6).abs() < 1e-12, "speed={speed}");
}

proptest! {
    #[test]
    fn prop_null_preservation(
        vx in -0.9_f64..0.9, theta in 0.0_f64..6.28, k in -10.0_f64..10.0
    ) {
        let boost = LorentzBoost::from_velocity([vx, 0.0, 0.0]).unwrap();
        let e = [k, k * theta.cos(), k * theta.sin(), 0.0];
        let s_after = minkowski_norm2(&boost.apply(&e));
        prop_assert!(s_after.abs() < 1e-8);
    }

    #[test]
    fn prop_collinear_composition(v1 in -0.6_f64..0.6, v2 in -0.6_f64..0.6) {
        let seq = LorentzBoost::from_velocity([0.0, 0.0, v2])
            .unwrap()
            .compose(&LorentzBoost::from_velocity([0.0, 0.0, v1]).unwrap());
        let v12 = (v1 + v2) / (1.0 + v1 * v2);
        let single = LorentzBoost::from_velocity([0.0, 0.0, v12]).unwrap();
        prop_assert!(seq.max_deviation(&single) < 1e-9);
    }
}
