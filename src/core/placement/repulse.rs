//! core/placement/repulse.rs — pairwise-repulsion relaxation.
//!
//! The only iterative solver in the crate. Centers start from a neutral
//! linear interpolation inside their per-interval bounds; a fixed number
//! of projected-gradient sweeps applies a quadratic penalty force
//! whenever two centers violate their separation target
//! `delta_ij = kappa·((d_i/L)^gamma + (d_j/L)^gamma)`, clamping each
//! center back into its bound after every sweep. The relaxed solution is
//! finally blended with the neutral one by `params.repulse_blend`.
//!
//! Unlike the prefix engines this one guarantees only non-overlap
//! pressure, not monotone center order.

use super::{index_fraction, PlacementParams};

pub fn solve_centers(l: u32, ordering: &[u32], params: &PlacementParams) -> Option<Vec<f32>> {
    let n = ordering.len();
    if n == 0 {
        return Some(Vec::new());
    }
    if l == 0 {
        return None;
    }

    let rho = params.rho;
    let mut lo = Vec::with_capacity(n);
    let mut hi = Vec::with_capacity(n);
    for &d in ordering {
        let a = rho * d as f32;
        let b = l as f32 - (1.0 - rho) * d as f32;
        if a > b {
            return None;
        }
        lo.push(a);
        hi.push(b);
    }

    let neutral: Vec<f32> = (0..n)
        .map(|i| lo[i] + (hi[i] - lo[i]) * index_fraction(i, n))
        .collect();
    let radius: Vec<f32> = ordering
        .iter()
        .map(|&d| (d as f32 / l as f32).powf(params.gamma))
        .collect();

    let mut centers = neutral.clone();
    let mut force = vec![0.0f32; n];
    for _ in 0..params.iterations {
        force.iter_mut().for_each(|f| *f = 0.0);
        for i in 0..n {
            for j in (i + 1)..n {
                let target = params.kappa * (radius[i] + radius[j]);
                let sep = centers[i] - centers[j];
                let dist = sep.abs();
                if dist >= target {
                    continue;
                }
                let push = 0.5 * params.spring * (target - dist);
                // coincident centers separate by index order
                let dir = if dist > 0.0 { sep.signum() } else { -1.0 };
                force[i] += dir * push;
                force[j] -= dir * push;
            }
        }
        for i in 0..n {
            centers[i] = (centers[i] + force[i]).clamp(lo[i], hi[i]);
        }
    }

    let blend = params.repulse_blend.clamp(0.0, 1.0);
    Some(
        (0..n)
            .map(|i| (neutral[i] + blend * (centers[i] - neutral[i])).clamp(lo[i], hi[i]))
            .collect(),
    )
}
