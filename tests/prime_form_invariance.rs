use rand::{Rng, SeedableRng};

use tensura::core::edo::EdoSpace;
use tensura::core::evaluate::{evaluate, EvalParams};
use tensura::core::pitchset::{interval_vector, pitch_classes, prime_form};

#[test]
fn record_prime_forms_are_idempotent() {
    let p = EvalParams {
        roughness_gamma: 0.5,
        ..Default::default()
    };
    let results = evaluate(&[11, 7, 16], &[], &[3], &p).unwrap();
    let edo = p.tension.edo;
    for r in &results[0].records {
        assert_eq!(prime_form(&r.prime_form, &edo), r.prime_form);
    }
}

#[test]
fn prime_form_survives_transposition_of_the_pitch_set() {
    let edo = EdoSpace::new(12);
    let pitches = [3u32, 10, 14, 21];
    let base = prime_form(&pitches, &edo);
    for t in 0..24u32 {
        let shifted: Vec<u32> = pitches.iter().map(|&p| p + t).collect();
        assert_eq!(prime_form(&shifted, &edo), base, "t={t}");
    }
}

#[test]
fn prime_form_invariant_under_random_transposition() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    for edo_steps in [12u32, 19, 31] {
        let edo = EdoSpace::new(edo_steps);
        for _ in 0..100 {
            let len = rng.random_range(1..=6);
            let pitches: Vec<u32> = (0..len)
                .map(|_| rng.random_range(0..3 * edo_steps))
                .collect();
            let base = prime_form(&pitches, &edo);
            let t = rng.random_range(0..4 * edo_steps);
            let shifted: Vec<u32> = pitches.iter().map(|&p| p + t).collect();
            assert_eq!(prime_form(&shifted, &edo), base, "{pitches:?} t={t}");
            assert_eq!(prime_form(&base, &edo), base, "{pitches:?}");
        }
    }
}

#[test]
fn interval_vector_sum_matches_pc_pair_count() {
    let p = EvalParams {
        roughness_gamma: 0.5,
        ..Default::default()
    };
    let results = evaluate(&[11, 7, 16, 4], &[], &[3], &p).unwrap();
    let edo = p.tension.edo;
    for r in &results[0].records {
        let pcs = pitch_classes(&r.pitches, &edo);
        let expected = (pcs.len() * (pcs.len() - 1) / 2) as u32;
        assert_eq!(r.iv.iter().sum::<u32>(), expected, "pitches {:?}", r.pitches);
        assert_eq!(r.iv, interval_vector(&r.pitches, &edo));
    }
}
