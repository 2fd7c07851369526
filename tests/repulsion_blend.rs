use tensura::core::evaluate::{evaluate, EvalParams};
use tensura::core::placement::PlacementMode;

// Blend factor 0 discards the relaxation result entirely: the anchors
// must equal the neutral centers, which a zero-iteration run also yields.
#[test]
fn zero_blend_equals_neutral_centers() {
    let mut p = EvalParams {
        mode: PlacementMode::Repulsion,
        roughness_gamma: 0.5,
        ..Default::default()
    };

    p.placement.repulse_blend = 0.0;
    let blended = evaluate(&[11, 7, 16, 4], &[], &[3], &p).unwrap();

    p.placement.repulse_blend = 1.0;
    p.placement.iterations = 0;
    let neutral = evaluate(&[11, 7, 16, 4], &[], &[3], &p).unwrap();

    assert_eq!(blended.len(), neutral.len());
    for (x, y) in blended[0].records.iter().zip(&neutral[0].records) {
        assert_eq!(x.perm, y.perm);
        assert_eq!(x.anchors, y.anchors);
        assert_eq!(x.pitches, y.pitches);
    }
}

#[test]
fn relaxation_changes_crowded_placements() {
    let mut p = EvalParams {
        mode: PlacementMode::Repulsion,
        roughness_gamma: 0.5,
        ..Default::default()
    };

    p.placement.repulse_blend = 1.0;
    let relaxed = evaluate(&[4, 4, 2], &[], &[1], &p).unwrap();

    p.placement.repulse_blend = 0.0;
    let neutral = evaluate(&[4, 4, 2], &[], &[1], &p).unwrap();

    let any_moved = relaxed[0]
        .records
        .iter()
        .zip(&neutral[0].records)
        .any(|(x, y)| x.anchors != y.anchors);
    assert!(any_moved);
}
