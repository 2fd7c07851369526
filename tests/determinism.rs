use tensura::core::evaluate::{evaluate, EvalParams};
use tensura::core::placement::{OddBias, PlacementMode};

// Identical inputs must produce bit-identical records; the roughness
// memo cache may only skip recomputation, never change a value.
#[test]
fn repeated_runs_are_bit_identical() {
    for mode in [
        PlacementMode::Uniform,
        PlacementMode::PrefixSlack,
        PlacementMode::PrefixDominance,
        PlacementMode::Repulsion,
    ] {
        let p = EvalParams {
            mode,
            roughness_gamma: 0.5,
            ..Default::default()
        };
        let bias = [OddBias::Up, OddBias::Down, OddBias::Up];
        let a = evaluate(&[11, 7, 16], &bias, &[2, 3], &p).unwrap();
        let b = evaluate(&[11, 7, 16], &bias, &[2, 3], &p).unwrap();
        assert_eq!(a, b, "{mode:?}");
    }
}
