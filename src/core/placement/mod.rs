//! core/placement — anchor placement engines.
//!
//! Four interchangeable strategies map an ordered interval sequence plus
//! a window length to per-interval anchor centers (float, floor-quantized
//! at endpoint derivation). Every engine either guarantees endpoints in
//! `[0, L]` or signals infeasibility by returning `None`; an infeasible
//! ordering is dropped from the window's results, not an error.

pub mod dominance;
pub mod repulse;
pub mod slack;
pub mod uniform;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Placement strategy selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlacementMode {
    /// Legacy evenly-spaced integer anchors (v1).
    Uniform,
    /// Prefix-slack weighted placement (v2).
    #[default]
    PrefixSlack,
    /// Prefix placement dominated by interval length.
    PrefixDominance,
    /// Iterative pairwise-repulsion relaxation.
    Repulsion,
}

impl PlacementMode {
    pub fn name(&self) -> &'static str {
        match self {
            PlacementMode::Uniform => "uniform",
            PlacementMode::PrefixSlack => "prefix-slack",
            PlacementMode::PrefixDominance => "prefix-dominance",
            PlacementMode::Repulsion => "repulsion",
        }
    }
}

impl FromStr for PlacementMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "v1" | "uniform" => Ok(PlacementMode::Uniform),
            "v2" | "slack" | "prefix-slack" => Ok(PlacementMode::PrefixSlack),
            "dominance" | "prefix-dominance" => Ok(PlacementMode::PrefixDominance),
            "repulse" | "repulsion" => Ok(PlacementMode::Repulsion),
            other => Err(format!("unknown placement mode: {other}")),
        }
    }
}

/// Engine parameters shared across one evaluation run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementParams {
    /// Fraction of each interval assigned below its anchor.
    pub rho: f32,
    /// Slack / dominance weight exponent.
    pub beta: f32,
    /// Prefix-slack blend between uniform grid (0) and weighted prefix (1).
    pub blend: f32,
    /// Repulsion: separation-target scale.
    pub kappa: f32,
    /// Repulsion: radius exponent for (d/L)^gamma.
    pub gamma: f32,
    /// Repulsion: relaxation step size.
    pub spring: f32,
    /// Repulsion: fixed relaxation iteration count.
    pub iterations: u32,
    /// Repulsion: final blend between neutral (0) and relaxed (1) centers.
    pub repulse_blend: f32,
}

impl Default for PlacementParams {
    fn default() -> Self {
        Self {
            rho: 0.5,
            beta: 1.0,
            blend: 0.65,
            kappa: 4.0,
            gamma: 0.5,
            spring: 0.35,
            iterations: 48,
            repulse_blend: 1.0,
        }
    }
}

/// Per-column rounding tie-break for odd-length intervals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OddBias {
    Up,
    #[default]
    Down,
}

/// Solve anchor centers for one ordering, or `None` when the window is
/// too small for it.
pub fn solve_centers(
    mode: PlacementMode,
    l: u32,
    ordering: &[u32],
    params: &PlacementParams,
) -> Option<Vec<f32>> {
    match mode {
        PlacementMode::Uniform => uniform::solve_centers(l, ordering, params),
        PlacementMode::PrefixSlack => slack::solve_centers(l, ordering, params),
        PlacementMode::PrefixDominance => dominance::solve_centers(l, ordering, params),
        PlacementMode::Repulsion => repulse::solve_centers(l, ordering, params),
    }
}

const ODD_SPLIT_EPS: f32 = 1e-6;

/// Floor-quantize one anchored interval into an endpoint pair.
///
/// Even lengths split at round(rho·d); odd lengths resolve the rounding
/// tie with the per-column bias flag. The down-split is clamped into
/// `[0, d]`, so `hi - lo == d` always holds.
pub fn split_endpoints(anchor: f32, d: u32, rho: f32, odd: OddBias) -> (i64, i64) {
    let base = anchor.floor() as i64;
    let rd = rho * d as f32;
    let down = if d % 2 == 0 {
        rd.round() as i64
    } else {
        match odd {
            OddBias::Up => (rd - ODD_SPLIT_EPS).floor() as i64,
            OddBias::Down => (rd + ODD_SPLIT_EPS).ceil() as i64,
        }
    };
    let down = down.clamp(0, d as i64);
    (base - down, base + (d as i64 - down))
}

/// Neutral per-index interpolation parameter: 0..1 across the ordering,
/// 0.5 for a single interval.
#[inline]
pub(crate) fn index_fraction(i: usize, n: usize) -> f32 {
    if n > 1 {
        i as f32 / (n - 1) as f32
    } else {
        0.5
    }
}

/// Midpoint-of-segment cumulative weight fractions; equal weights when
/// the total is not positive.
pub(crate) fn cumulative_fractions(weights: &[f32]) -> Vec<f32> {
    let n = weights.len();
    let sum: f32 = weights.iter().sum();
    if !(sum > 0.0) {
        return (0..n).map(|i| (i as f32 + 0.5) / n as f32).collect();
    }
    let mut out = Vec::with_capacity(n);
    let mut cum = 0.0f32;
    for &w in weights {
        out.push((cum + 0.5 * w) / sum);
        cum += w;
    }
    out
}
