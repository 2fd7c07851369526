//! core/perm.rs — distinct orderings of an interval multiset.
//!
//! Standard multiset-permutation backtracking over sorted distinct
//! values with remaining-count bookkeeping: each of the
//! n!/∏(multiplicity!) orderings is emitted exactly once, in
//! lexicographic order.

/// All distinct orderings of `values` (order of the input is irrelevant).
pub fn multiset_permutations(values: &[u32]) -> Vec<Vec<u32>> {
    let n = values.len();
    if n == 0 {
        return Vec::new();
    }

    // (value, remaining count), sorted ascending
    let mut pool: Vec<(u32, u32)> = Vec::new();
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    for v in sorted {
        match pool.last_mut() {
            Some((pv, c)) if *pv == v => *c += 1,
            _ => pool.push((v, 1)),
        }
    }

    let mut out = Vec::new();
    let mut current = Vec::with_capacity(n);
    backtrack(&mut pool, &mut current, n, &mut out);
    out
}

fn backtrack(
    pool: &mut Vec<(u32, u32)>,
    current: &mut Vec<u32>,
    n: usize,
    out: &mut Vec<Vec<u32>>,
) {
    if current.len() == n {
        out.push(current.clone());
        return;
    }
    for i in 0..pool.len() {
        if pool[i].1 == 0 {
            continue;
        }
        pool[i].1 -= 1;
        current.push(pool[i].0);
        backtrack(pool, current, n, out);
        current.pop();
        pool[i].1 += 1;
    }
}

/// n!/∏(multiplicity!) for a multiset, as a checked u64.
pub fn distinct_count(values: &[u32]) -> u64 {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let mut num = 1u64;
    for i in 1..=sorted.len() as u64 {
        num = num.saturating_mul(i);
    }
    let mut i = 0;
    while i < sorted.len() {
        let mut run = 1u64;
        let mut fact = 1u64;
        while i + 1 < sorted.len() && sorted[i + 1] == sorted[i] {
            i += 1;
            run += 1;
            fact = fact.saturating_mul(run);
        }
        num /= fact;
        i += 1;
    }
    num
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_distinct_values() {
        let perms = multiset_permutations(&[11, 7, 16]);
        assert_eq!(perms.len(), 6);
        let unique: HashSet<_> = perms.iter().cloned().collect();
        assert_eq!(unique.len(), 6);
    }

    #[test]
    fn repeats_are_collapsed() {
        // 4!/2! = 12
        let perms = multiset_permutations(&[5, 5, 7, 2]);
        assert_eq!(perms.len(), 12);
        let unique: HashSet<_> = perms.iter().cloned().collect();
        assert_eq!(unique.len(), perms.len());
        assert_eq!(distinct_count(&[5, 5, 7, 2]), 12);
    }

    #[test]
    fn all_equal_yields_one() {
        let perms = multiset_permutations(&[3, 3, 3]);
        assert_eq!(perms, vec![vec![3, 3, 3]]);
        assert_eq!(distinct_count(&[3, 3, 3]), 1);
    }

    #[test]
    fn empty_input_yields_none() {
        assert!(multiset_permutations(&[]).is_empty());
    }

    #[test]
    fn emitted_in_lexicographic_order() {
        let perms = multiset_permutations(&[2, 1, 1]);
        assert_eq!(perms, vec![vec![1, 1, 2], vec![1, 2, 1], vec![2, 1, 1]]);
    }

    #[test]
    fn count_matches_enumeration() {
        for values in [
            vec![1u32, 2, 3, 4],
            vec![1, 1, 2, 2],
            vec![0, 0, 0, 1],
            vec![9, 9, 9, 9, 4],
        ] {
            assert_eq!(
                multiset_permutations(&values).len() as u64,
                distinct_count(&values),
                "{values:?}"
            );
        }
    }
}
