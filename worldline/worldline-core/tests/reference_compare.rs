use worldline_core::{LorentzBoost, Scalar};

/// Closed-form boost of a single event by beta (Jackson 11.19):
/// t' = g (t - b.r),  r' = r + ((g - 1) (b.r) / b^2 - g t) b
mod reference {
    pub fn boost(beta: [f64; 3], e: [f64; 4]) -> [f64; 4] {
        let b2 = beta[0] * beta[0] + beta[1] * beta[1] + beta[2] * beta[2];
        let g = 1.0 / (1.0 - b2).sqrt();
        let br = beta[0] * e[1] + beta[1] * e[2] + beta[2] * e[3];
        let k = (g - 1.0) * br / b2 - g * e[0];
        [g * (e[0] - br), e[1] + k * beta[0], e[2] + k * beta[1], e[3] + k * beta[2]]
    }
}

fn is_finite_all(vals: &[f64]) -> bool {
    vals.iter().all(|x| x.is_finite())
}

#[test]
fn compare_boost_outputs_many_random() {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    const N_SAMPLES: usize = 20_000;
    const TOL: Scalar = 1e-9;

    let mut rng = StdRng::seed_from_u64(0xB005_7ED_2026);

    let mut accepted = 0usize;
    while accepted < N_SAMPLES {
        // |beta|^2 <= 0.75 keeps gamma at or below 2; events in [-8, 8]^4.
        let beta = [
            rng.gen_range(-0.5..=0.5),
            rng.gen_range(-0.5..=0.5),
            rng.gen_range(-0.5..=0.5),
        ];
        let b2: f64 = beta.iter().map(|b| b * b).sum();
        if b2 < 1e-6 {
            continue;
        }
        let e = [
            rng.gen_range(-8.0..=8.0),
            rng.gen_range(-8.0..=8.0),
            rng.gen_range(-8.0..=8.0),
            rng.gen_range(-8.0..=8.0),
        ];

        let lib = LorentzBoost::from_velocity(beta).unwrap().apply(&e);
        let reference = reference::boost(beta, e);
        if !is_finite_all(&lib) || !is_finite_all(&reference) {
            continue;
        }

        for i in 0..4 {
            let d = (lib[i] - reference[i]).abs();
            assert!(
                d <= TOL,
                "component {i} mismatch: |{} - {}| = {} > {} (beta={:?}, e={:?})",
                lib[i],
                reference[i],
                d,
                TOL,
                beta,
                e
            );
        }
        accepted += 1;
    }
}
