//! core/placement/slack.rs — prefix-slack placement (v2, default).
//!
//! Each interval is weighted by its slack `(L - d)^beta`: short
//! intervals have room to move and attract anchor spread, long ones are
//! pinned near the grid. Anchors interpolate between a uniform grid and
//! the midpoint cumulative-weight fraction, blended by `params.blend`.
//! The feasible anchor range is the intersection of the quantized
//! per-interval bounds; an empty intersection drops the ordering.

use super::{cumulative_fractions, index_fraction, PlacementParams};

pub fn solve_centers(l: u32, ordering: &[u32], params: &PlacementParams) -> Option<Vec<f32>> {
    let n = ordering.len();
    if n == 0 {
        return Some(Vec::new());
    }

    let rho = params.rho;
    let mut amin = i64::MIN;
    let mut amax = i64::MAX;
    for &d in ordering {
        let lo = (rho * d as f32).ceil() as i64;
        let hi = (l as f32 - (1.0 - rho) * d as f32).floor() as i64;
        amin = amin.max(lo);
        amax = amax.min(hi);
    }
    if amin > amax {
        return None;
    }

    let weights: Vec<f32> = ordering
        .iter()
        .map(|&d| (l as f32 - d as f32).max(0.0).powf(params.beta))
        .collect();
    let fracs = cumulative_fractions(&weights);

    let span = (amax - amin) as f32;
    let blend = params.blend.clamp(0.0, 1.0);
    let anchors = (0..n)
        .map(|i| {
            let t = (1.0 - blend) * index_fraction(i, n) + blend * fracs[i];
            amin as f32 + t * span
        })
        .collect();
    Some(anchors)
}
