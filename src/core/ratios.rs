//! core/ratios.rs — just-intonation target table and ratio cost.
//!
//! A dyad's step distance (octave-reduced, in cents) is scored against a
//! fixed table of small-integer ratios from 1:1 up to 2:1 plus a 7:5
//! tritone proxy. Each target carries a "height" = log2(num·den), a
//! harmonic-complexity penalty in the spirit of Tenney height.

use std::sync::OnceLock;

/// One just-intonation target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioTarget {
    pub num: u32,
    pub den: u32,
    pub cents: f32,
    pub height: f32,
}

/// Simple gcd (Euclidean algorithm)
pub const fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let tmp = b;
        b = a % b;
        a = tmp;
    }
    a
}

// Table order is fixed: cost ties resolve to the earlier entry.
const TARGET_FRACTIONS: [(u32, u32); 13] = [
    (1, 1),
    (16, 15),
    (9, 8),
    (6, 5),
    (5, 4),
    (4, 3),
    (7, 5), // tritone proxy
    (3, 2),
    (8, 5),
    (5, 3),
    (9, 5),
    (15, 8),
    (2, 1),
];

static TARGETS: OnceLock<Vec<RatioTarget>> = OnceLock::new();

/// The fixed just-intonation target table, ascending in cents.
pub fn targets() -> &'static [RatioTarget] {
    TARGETS.get_or_init(|| {
        TARGET_FRACTIONS
            .iter()
            .map(|&(num, den)| {
                debug_assert_eq!(gcd(num, den), 1);
                RatioTarget {
                    num,
                    den,
                    cents: 1200.0 * (num as f32 / den as f32).log2(),
                    height: ((num * den) as f32).log2(),
                }
            })
            .collect()
    })
}

/// Minimal just-intonation cost of a dyad at `cents`:
/// min over targets of ((cents - target)/sigma)^2 + lambda·height.
/// The first table entry achieving the minimum wins.
pub fn ratio_cost(cents: f32, sigma: f32, lambda: f32) -> f32 {
    nearest_target(cents, sigma, lambda).1
}

/// As `ratio_cost`, also returning the winning target (diagnostic only).
pub fn nearest_target(cents: f32, sigma: f32, lambda: f32) -> (&'static RatioTarget, f32) {
    let sigma = sigma.max(1e-6);
    let mut best: Option<(&'static RatioTarget, f32)> = None;
    for t in targets() {
        let z = (cents - t.cents) / sigma;
        let cost = z * z + lambda * t.height;
        match best {
            Some((_, b)) if cost >= b => {}
            _ => best = Some((t, cost)),
        }
    }
    // table is non-empty
    best.unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_reduced_and_ordered() {
        let ts = targets();
        assert_eq!(ts.len(), 13);
        for t in ts {
            assert_eq!(gcd(t.num, t.den), 1);
        }
        for w in ts.windows(2) {
            assert!(w[0].cents < w[1].cents);
        }
        // endpoints: unison and octave
        assert_eq!(ts[0].cents, 0.0);
        assert!((ts[ts.len() - 1].cents - 1200.0).abs() < 1e-3);
    }

    #[test]
    fn unison_costs_nothing() {
        // 1:1 has height log2(1) = 0, so exact unison scores 0
        assert!(ratio_cost(0.0, 15.0, 0.1).abs() < 1e-9);
    }

    #[test]
    fn fifth_snaps_to_3_2() {
        let (t, _) = nearest_target(700.0, 15.0, 0.02);
        assert_eq!((t.num, t.den), (3, 2));
    }

    #[test]
    fn tritone_proxy_wins_midway() {
        let (t, _) = nearest_target(585.0, 15.0, 0.02);
        assert_eq!((t.num, t.den), (7, 5));
    }

    #[test]
    fn lambda_penalizes_complex_ratios() {
        // At exactly 16:15 cents, raising lambda raises the cost floor
        let c = 1200.0 * (16.0f32 / 15.0).log2();
        let lo = ratio_cost(c, 15.0, 0.0);
        let hi = ratio_cost(c, 15.0, 1.0);
        assert!(hi > lo);
    }

    #[test]
    fn cost_grows_between_targets() {
        // halfway between 1:1 and 16:15 is worse than either anchor point
        let mid = ratio_cost(55.0, 10.0, 0.0);
        assert!(mid > ratio_cost(0.0, 10.0, 0.0));
        assert!(mid > ratio_cost(111.7, 10.0, 0.0));
    }
}
