//! core/pitchset.rs — induced intervals, interval-class vector, prime form.
//!
//! Pure set-theoretic analysis of a finite integer pitch set, generalized
//! to arbitrary EDO size N (Rahn/Forte normal order and prime form).

use crate::core::edo::EdoSpace;

/// All pairwise absolute differences of a pitch set, ascending.
pub fn induced_intervals(pitches: &[u32]) -> Vec<u32> {
    let mut out = Vec::with_capacity(pitches.len() * (pitches.len().saturating_sub(1)) / 2);
    for i in 0..pitches.len() {
        for j in (i + 1)..pitches.len() {
            out.push(pitches[i].abs_diff(pitches[j]));
        }
    }
    out.sort_unstable();
    out
}

/// (value, multiplicity) pairs for an ascending-sorted interval multiset.
pub fn interval_counts(induced: &[u32]) -> Vec<(u32, u32)> {
    let mut out: Vec<(u32, u32)> = Vec::new();
    for &d in induced {
        match out.last_mut() {
            Some((v, c)) if *v == d => *c += 1,
            _ => out.push((d, 1)),
        }
    }
    out
}

/// Sorted, deduplicated pitch classes of a pitch set.
pub fn pitch_classes(pitches: &[u32], space: &EdoSpace) -> Vec<u32> {
    let mut pcs: Vec<u32> = pitches.iter().map(|&p| space.pitch_class(p)).collect();
    pcs.sort_unstable();
    pcs.dedup();
    pcs
}

/// Octave-reduced interval-class vector, length floor(N/2).
///
/// Tallies `min(d, N-d)` over all pairs of distinct pitch classes; class
/// 0 pairs (only possible when N divides the difference) are not
/// representable in the vector and cannot occur between distinct classes.
pub fn interval_vector(pitches: &[u32], space: &EdoSpace) -> Vec<u32> {
    let n = space.steps_per_oct;
    let pcs = pitch_classes(pitches, space);
    let mut iv = vec![0u32; (n / 2) as usize];
    for i in 0..pcs.len() {
        for j in (i + 1)..pcs.len() {
            let ic = space.interval_class(pcs[j] + n - pcs[i]);
            if ic > 0 {
                iv[ic as usize - 1] += 1;
            }
        }
    }
    iv
}

/// Normal order of sorted distinct pitch classes, transposed to start
/// at 0 (i.e. the interval-from-first sequence of the winning rotation).
///
/// The winning rotation minimizes the span from first to last; ties are
/// broken by comparing the interior intervals from the last one backward
/// to the first, smaller sub-interval at the first difference wins.
fn normal_order_from_zero(pcs: &[u32], n: u32) -> Vec<u32> {
    let k = pcs.len();
    if k == 0 {
        return Vec::new();
    }
    if k == 1 {
        return vec![0];
    }

    let ivs_of = |r: usize| -> Vec<u32> {
        (0..k)
            .map(|j| (pcs[(r + j) % k] + n - pcs[r]) % n)
            .collect()
    };

    let mut best = ivs_of(0);
    for r in 1..k {
        let cand = ivs_of(r);
        if cand[k - 1] < best[k - 1] {
            best = cand;
            continue;
        }
        if cand[k - 1] > best[k - 1] {
            continue;
        }
        // span tie: walk interior intervals from the back
        for j in (1..k - 1).rev() {
            if cand[j] < best[j] {
                best = cand;
                break;
            }
            if cand[j] > best[j] {
                break;
            }
        }
    }
    best
}

/// Rahn/Forte prime form of a pitch set in N-EDO: the lexicographically
/// smaller of the zero-transposed normal orders of the set and of its
/// inversion.
pub fn prime_form(pitches: &[u32], space: &EdoSpace) -> Vec<u32> {
    let n = space.steps_per_oct;
    let pcs = pitch_classes(pitches, space);
    if pcs.is_empty() {
        return Vec::new();
    }

    let fwd = normal_order_from_zero(&pcs, n);

    let mut inv: Vec<u32> = pcs.iter().map(|&pc| (n - pc) % n).collect();
    inv.sort_unstable();
    inv.dedup();
    let bwd = normal_order_from_zero(&inv, n);

    if bwd < fwd {
        bwd
    } else {
        fwd
    }
}
