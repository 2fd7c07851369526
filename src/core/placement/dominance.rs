//! core/placement/dominance.rs — prefix placement dominated by length.
//!
//! Weights are `d^beta`, so long intervals claim proportionally more of
//! the shared anchor range `[max(rho·d_i), min(L - (1-rho)·d_i)]`.
//! All-zero weights (an all-unison ordering) fall back to equal weights.

use super::{cumulative_fractions, PlacementParams};

pub fn solve_centers(l: u32, ordering: &[u32], params: &PlacementParams) -> Option<Vec<f32>> {
    let n = ordering.len();
    if n == 0 {
        return Some(Vec::new());
    }

    let rho = params.rho;
    let mut lo = f32::MIN;
    let mut hi = f32::MAX;
    for &d in ordering {
        lo = lo.max(rho * d as f32);
        hi = hi.min(l as f32 - (1.0 - rho) * d as f32);
    }
    if lo > hi {
        return None;
    }

    let weights: Vec<f32> = ordering
        .iter()
        .map(|&d| (d as f32).powf(params.beta))
        .collect();
    let fracs = cumulative_fractions(&weights);

    let span = hi - lo;
    Some(fracs.into_iter().map(|c| lo + c * span).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p() -> PlacementParams {
        PlacementParams::default()
    }

    #[test]
    fn anchors_fill_range_by_weight() {
        // equal lengths → midpoints of equal thirds
        let anchors = solve_centers(36, &[8, 8, 8], &p()).unwrap();
        let lo = 4.0;
        let hi = 32.0;
        let third = (hi - lo) / 3.0;
        assert!((anchors[0] - (lo + 0.5 * third)).abs() < 1e-4);
        assert!((anchors[1] - (lo + 1.5 * third)).abs() < 1e-4);
        assert!((anchors[2] - (lo + 2.5 * third)).abs() < 1e-4);
    }

    #[test]
    fn long_interval_claims_more_span() {
        let anchors = solve_centers(48, &[20, 4], &p()).unwrap();
        // weights 20 vs 4: first midpoint at 10/24 of span, second at 22/24
        let lo = 10.0;
        let hi = 38.0;
        assert!((anchors[0] - (lo + (10.0 / 24.0) * (hi - lo))).abs() < 1e-4);
        assert!((anchors[1] - (lo + (22.0 / 24.0) * (hi - lo))).abs() < 1e-4);
    }

    #[test]
    fn all_zero_lengths_use_equal_weights() {
        let anchors = solve_centers(12, &[0, 0], &p()).unwrap();
        assert_eq!(anchors, vec![3.0, 9.0]);
    }

    #[test]
    fn collapsed_range_is_infeasible() {
        assert!(solve_centers(12, &[10, 16], &p()).is_none());
    }
}
