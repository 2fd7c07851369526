//! core/tension.rs — psychoacoustic tension of one dyad.
//!
//! Combines four sub-models into a single scalar:
//!   (ratio_cost + alpha·roughness) × register_damping × compound_relief
//! where `alpha` is the calibrated roughness weight (see core/calibrate),
//! register damping weights lower-register dyads more heavily, and
//! compound relief discounts dyads spanning whole extra octaves.

use crate::core::edo::EdoSpace;
use crate::core::ratios;
use crate::core::roughness::{RoughnessCache, RoughnessParams};

/// Immutable per-run tension parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TensionParams {
    pub edo: EdoSpace,
    /// Just-intonation tolerance in cents.
    pub ji_sigma_cents: f32,
    /// Weight of the ratio height (complexity) penalty.
    pub ji_lambda: f32,
    pub roughness: RoughnessParams,
    /// Calibrated roughness mixing weight, not the raw user-facing gamma.
    pub alpha: f32,
    /// Register damping decay constant.
    pub register_k: f32,
    pub register_damping: bool,
    /// Compound (octave-spanning) relief decay constant.
    pub compound_m: f32,
}

impl Default for TensionParams {
    fn default() -> Self {
        Self {
            edo: EdoSpace::new(12),
            ji_sigma_cents: 15.0,
            ji_lambda: 0.05,
            roughness: RoughnessParams::default(),
            alpha: 0.0,
            register_k: 1.0,
            register_damping: true,
            compound_m: 0.7,
        }
    }
}

/// Tension of the dyad (lo, hi) inside a window of length `l` steps.
///
/// `lo <= hi` is assumed; both in steps. Nonnegative and finite for
/// finite parameters.
pub fn dyad_penalty(lo: u32, hi: u32, p: &TensionParams, l: u32, cache: &mut RoughnessCache) -> f32 {
    debug_assert!(lo <= hi);
    let d_steps = hi - lo;
    let d_red = p.edo.reduce(d_steps);
    let cents = p.edo.steps_to_cents(d_red);

    let ratio = ratios::ratio_cost(cents, p.ji_sigma_cents, p.ji_lambda);
    let rough = if p.alpha != 0.0 {
        cache.get(cents, &p.roughness)
    } else {
        0.0
    };

    let damping = if p.register_damping && l > 0 {
        (-p.register_k * lo as f32 / l as f32).exp()
    } else {
        1.0
    };
    let whole_octaves = (d_steps / p.edo.steps_per_oct) as f32;
    let relief = (-p.compound_m * whole_octaves).exp();

    (ratio + p.alpha * rough) * damping * relief
}
