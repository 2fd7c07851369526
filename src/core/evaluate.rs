//! core/evaluate.rs — per-window orchestration and result records.
//!
//! For one register window: enumerate all distinct orderings of the
//! interval multiset, place anchors with the selected engine, derive the
//! pitch set, score every induced dyad with the tension model, analyze
//! the pitch-class set, and rank the orderings ascending by per-pair
//! tension. Orderings the window cannot hold are dropped silently;
//! an empty interval multiset is the caller's error.

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::core::calibrate::calibrate_alpha;
use crate::core::edo::Window;
use crate::core::perm::multiset_permutations;
use crate::core::pitchset::{induced_intervals, interval_counts, interval_vector, prime_form};
use crate::core::placement::{
    solve_centers, split_endpoints, OddBias, PlacementMode, PlacementParams,
};
use crate::core::roughness::RoughnessCache;
use crate::core::tension::{dyad_penalty, TensionParams};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    #[error("interval multiset is empty")]
    EmptyIntervals,
    #[error("window octave count must be at least 1")]
    ZeroOctaves,
}

/// Full parameter set of one evaluation run.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EvalParams {
    pub tension: TensionParams,
    pub placement: PlacementParams,
    pub mode: PlacementMode,
    /// User-facing roughness mixing ratio fed to the calibrator.
    pub roughness_gamma: f32,
}

/// One ordering's complete evaluation output. Immutable once built.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Record {
    pub perm: Vec<u32>,
    pub anchors: Vec<f32>,
    pub endpoints: Vec<(u32, u32)>,
    pub pitches: Vec<u32>,
    pub induced: Vec<u32>,
    pub induced_counts: Vec<(u32, u32)>,
    pub total: f32,
    pub per_pair: f32,
    pub iv: Vec<u32>,
    pub prime_form: Vec<u32>,
    pub engine: &'static str,
}

/// All surviving orderings of one window, ranked by per-pair tension.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct WindowResult {
    /// Window length L in steps.
    pub len: u32,
    /// Octave count the window was requested as.
    pub octaves: u32,
    pub records: Vec<Record>,
}

/// Evaluate one window size with an already-calibrated parameter set.
pub fn evaluate_window(
    intervals: &[u32],
    odd_bias: &[OddBias],
    octaves: u32,
    params: &EvalParams,
    cache: &mut RoughnessCache,
) -> Result<WindowResult, EvalError> {
    if intervals.is_empty() {
        return Err(EvalError::EmptyIntervals);
    }
    if octaves == 0 {
        return Err(EvalError::ZeroOctaves);
    }
    let window = Window::new(octaves, &params.tension.edo);
    let l = window.len;

    let perms = multiset_permutations(intervals);
    let mut records = Vec::with_capacity(perms.len());
    let mut dropped = 0usize;

    'ordering: for perm in perms {
        let Some(anchors) = solve_centers(params.mode, l, &perm, &params.placement) else {
            dropped += 1;
            continue;
        };

        let mut endpoints = Vec::with_capacity(perm.len());
        for (col, (&d, &a)) in perm.iter().zip(anchors.iter()).enumerate() {
            let bias = odd_bias.get(col).copied().unwrap_or_default();
            let (lo, hi) = split_endpoints(a, d, params.placement.rho, bias);
            if !window.contains(lo) || !window.contains(hi) {
                dropped += 1;
                continue 'ordering;
            }
            endpoints.push((lo as u32, hi as u32));
        }

        let mut pitches: Vec<u32> = endpoints.iter().flat_map(|&(lo, hi)| [lo, hi]).collect();
        pitches.sort_unstable();
        pitches.dedup();

        let induced = induced_intervals(&pitches);
        let induced_counts = interval_counts(&induced);

        let mut total = 0.0f32;
        for i in 0..pitches.len() {
            for j in (i + 1)..pitches.len() {
                total += dyad_penalty(pitches[i], pitches[j], &params.tension, l, cache);
            }
        }
        let pairs = pitches.len() * pitches.len().saturating_sub(1) / 2;
        let per_pair = if pairs > 0 { total / pairs as f32 } else { 0.0 };

        records.push(Record {
            iv: interval_vector(&pitches, &params.tension.edo),
            prime_form: prime_form(&pitches, &params.tension.edo),
            perm,
            anchors,
            endpoints,
            pitches,
            induced,
            induced_counts,
            total,
            per_pair,
            engine: params.mode.name(),
        });
    }

    // per_pair is finite for finite parameters; perm breaks exact ties
    records.sort_by(|a, b| {
        a.per_pair
            .partial_cmp(&b.per_pair)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.perm.cmp(&b.perm))
    });

    debug!(l, kept = records.len(), dropped, "window evaluated");
    Ok(WindowResult {
        len: l,
        octaves: window.octaves,
        records,
    })
}

/// Calibrate once, then evaluate each requested window size.
///
/// The roughness cache is created here and shared across windows of the
/// run, since the tension parameters do not change between them.
pub fn evaluate(
    intervals: &[u32],
    odd_bias: &[OddBias],
    octave_sizes: &[u32],
    params: &EvalParams,
) -> Result<Vec<WindowResult>, EvalError> {
    if intervals.is_empty() {
        return Err(EvalError::EmptyIntervals);
    }

    let mut calibrated = *params;
    calibrated.tension.alpha = calibrate_alpha(
        &params.tension,
        &params.tension.roughness,
        params.roughness_gamma,
    );
    debug!(alpha = calibrated.tension.alpha, "run calibrated");

    let mut cache = RoughnessCache::new();
    octave_sizes
        .iter()
        .map(|&o| evaluate_window(intervals, odd_bias, o, &calibrated, &mut cache))
        .collect()
}
