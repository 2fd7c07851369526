//! core/placement/uniform.rs — legacy evenly-spaced anchors (v1).
//!
//! Integer anchors spread across the shared feasible range
//! `[max(ceil(rho·d)), L - max(d - floor(rho·d))]` using
//! largest-remainder distribution of the span over the n-1 gaps.
//! Kept bit-compatible with the original v1 behavior; its rounding
//! conventions intentionally differ from the prefix-slack engine.

use super::PlacementParams;

pub fn solve_centers(l: u32, ordering: &[u32], params: &PlacementParams) -> Option<Vec<f32>> {
    let n = ordering.len();
    if n == 0 {
        return Some(Vec::new());
    }

    let rho = params.rho;
    let mut max_down = 0i64;
    let mut max_up = 0i64;
    for &d in ordering {
        let down = (rho * d as f32).ceil() as i64;
        let up = d as i64 - (rho * d as f32).floor() as i64;
        max_down = max_down.max(down);
        max_up = max_up.max(up);
    }

    let amin = max_down;
    let amax = l as i64 - max_up;
    if amin > amax {
        return None;
    }

    let mut anchors = Vec::with_capacity(n);
    if n == 1 {
        anchors.push(amin as f32);
        return Some(anchors);
    }

    // largest-remainder spread: first `rem` gaps get one extra unit
    let span = (amax - amin) as u64;
    let gaps = (n - 1) as u64;
    let base = span / gaps;
    let rem = span % gaps;
    let mut a = amin;
    anchors.push(a as f32);
    for g in 0..gaps {
        a += base as i64 + i64::from(g < rem);
        anchors.push(a as f32);
    }
    Some(anchors)
}
