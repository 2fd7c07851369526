//! core/roughness.rs — partial-beating roughness for one dyad.
//!
//! Two harmonic tones are synthesized as K partials each (partial i at
//! amplitude i^-rolloff); every partial pair contributes a
//! Plomp–Levelt-style dissonance `exp(-a·x) - exp(-b·x)` where x is the
//! pair's frequency gap in units of the critical bandwidth
//! `1.72·f̄^0.65` at the pair's mean frequency. The K² accumulation
//! dominates evaluation cost, so results are memoized per run in a
//! `RoughnessCache` keyed by the rounded inputs.

use std::collections::HashMap;

/// Parameters of the two-tone partial model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoughnessParams {
    /// Lower tone fundamental in Hz (window origin).
    pub f0_hz: f32,
    /// Harmonic partials per tone (K).
    pub partials: u32,
    /// Amplitude rolloff exponent: amp(i) = i^-rolloff.
    pub amp_rolloff: f32,
    /// Dissonance curve rise constant.
    pub shape_a: f32,
    /// Dissonance curve fall constant.
    pub shape_b: f32,
}

impl Default for RoughnessParams {
    fn default() -> Self {
        Self {
            f0_hz: 261.63,
            partials: 7,
            amp_rolloff: 0.8,
            shape_a: 3.5,
            shape_b: 5.75,
        }
    }
}

/// Critical bandwidth at mean frequency f̄ (Hz).
#[inline]
fn bandwidth_hz(f_mean: f32) -> f32 {
    1.72 * f_mean.powf(0.65)
}

/// Dissonance of one partial pair, amplitude-weighted.
#[inline]
fn pair_dissonance(f1: f32, a1: f32, f2: f32, a2: f32, shape_a: f32, shape_b: f32) -> f32 {
    let f_mean = 0.5 * (f1 + f2);
    let bw = bandwidth_hz(f_mean).max(1e-6);
    let x = (f1 - f2).abs() / bw;
    a1 * a2 * ((-shape_a * x).exp() - (-shape_b * x).exp())
}

/// Total roughness of a dyad `cents` wide above `p.f0_hz`, uncached.
pub fn dyad_roughness(cents: f32, p: &RoughnessParams) -> f32 {
    if p.partials == 0 {
        return 0.0;
    }
    let f0 = p.f0_hz;
    let f1 = f0 * (cents / 1200.0).exp2();

    let k = p.partials as usize;
    let mut acc = 0.0f32;
    for i in 1..=k {
        let fi = f0 * i as f32;
        let ai = (i as f32).powf(-p.amp_rolloff);
        for j in 1..=k {
            let gj = f1 * j as f32;
            let aj = (j as f32).powf(-p.amp_rolloff);
            acc += pair_dissonance(fi, ai, gj, aj, p.shape_a, p.shape_b);
        }
    }
    acc.max(0.0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct RoughKey {
    cents_milli: i64,
    f0_milli: i64,
    partials: u32,
    rolloff_milli: i64,
    a_milli: i64,
    b_milli: i64,
}

#[inline]
fn milli(x: f32) -> i64 {
    (x as f64 * 1000.0).round() as i64
}

/// Per-run memo cache for `dyad_roughness`.
///
/// Owned by one evaluation run and keyed by all inputs that affect the
/// result (rounded to 3 decimals), so a parameter change can never see a
/// stale entry. Rounding collisions only skip recomputation of an
/// effectively identical input.
#[derive(Debug, Default)]
pub struct RoughnessCache {
    map: HashMap<RoughKey, f32>,
}

impl RoughnessCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Roughness of a dyad, computing and memoizing on first sight.
    pub fn get(&mut self, cents: f32, p: &RoughnessParams) -> f32 {
        let key = RoughKey {
            cents_milli: milli(cents),
            f0_milli: milli(p.f0_hz),
            partials: p.partials,
            rolloff_milli: milli(p.amp_rolloff),
            a_milli: milli(p.shape_a),
            b_milli: milli(p.shape_b),
        };
        *self
            .map
            .entry(key)
            .or_insert_with(|| dyad_roughness(cents, p))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
