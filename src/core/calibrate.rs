//! core/calibrate.rs — roughness/ratio-cost scale alignment.
//!
//! The raw roughness scale depends on K, rolloff and the curve shape
//! constants, so a fixed mixing weight would mean different things for
//! different parameter sets. Calibration probes every non-zero step
//! class, takes the median of the ratio-cost and roughness series, and
//! returns `alpha = gamma · median(ratio) / median(roughness)`.

use tracing::debug;

use crate::core::ratios;
use crate::core::roughness::{dyad_roughness, RoughnessParams};
use crate::core::tension::TensionParams;

/// Median of a sample; the mean of the two middle values for even
/// lengths, 0 for an empty slice.
fn median(xs: &[f32]) -> f32 {
    if xs.is_empty() {
        return 0.0;
    }
    let mut s = xs.to_vec();
    s.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let n = s.len();
    if n % 2 == 1 {
        s[n / 2]
    } else {
        0.5 * (s[n / 2 - 1] + s[n / 2])
    }
}

/// Derive the calibrated roughness weight for one parameter set.
///
/// Returns 0 when the roughness sub-model is degenerate (zero or
/// non-finite median), disabling its contribution rather than letting
/// NaN/Infinity propagate into the records.
pub fn calibrate_alpha(p: &TensionParams, rough: &RoughnessParams, gamma: f32) -> f32 {
    let n = p.edo.steps_per_oct;
    let mut ratio_series = Vec::with_capacity(n.saturating_sub(1) as usize);
    let mut rough_series = Vec::with_capacity(n.saturating_sub(1) as usize);
    for d in 1..n {
        let cents = p.edo.steps_to_cents(d);
        ratio_series.push(ratios::ratio_cost(cents, p.ji_sigma_cents, p.ji_lambda));
        rough_series.push(dyad_roughness(cents, rough));
    }

    let med_ratio = median(&ratio_series);
    let med_rough = median(&rough_series);
    if med_rough <= 0.0 || !med_rough.is_finite() || !med_ratio.is_finite() {
        debug!(med_rough, "degenerate roughness median, alpha = 0");
        return 0.0;
    }
    let alpha = gamma * med_ratio / med_rough;
    debug!(med_ratio, med_rough, alpha, "calibrated roughness weight");
    if alpha.is_finite() {
        alpha
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_odd_even_empty() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(&[4.0, 1.0, 2.0, 3.0]), 2.5);
        assert_eq!(median(&[]), 0.0);
    }

    #[test]
    fn alpha_is_positive_for_defaults() {
        let p = TensionParams::default();
        let a = calibrate_alpha(&p, &p.roughness, 0.5);
        assert!(a > 0.0 && a.is_finite());
    }

    #[test]
    fn alpha_scales_linearly_with_gamma() {
        let p = TensionParams::default();
        let a1 = calibrate_alpha(&p, &p.roughness, 0.5);
        let a2 = calibrate_alpha(&p, &p.roughness, 1.0);
        assert!((a2 - 2.0 * a1).abs() < 1e-5 * a2.abs().max(1.0));
    }

    #[test]
    fn zero_roughness_disables_mixing() {
        let p = TensionParams::default();
        let rough = RoughnessParams {
            partials: 0,
            ..p.roughness
        };
        assert_eq!(calibrate_alpha(&p, &rough, 0.5), 0.0);
    }
}
