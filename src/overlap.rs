//! Naive suffix/prefix overlap detection between read pairs.

use std::collections::BTreeMap;

/// Length of the longest suffix of `a` that is a prefix of `b`, considering
/// only overlaps of at least `min_length` characters.
///
/// Walks a cursor through `a`, jumping to each occurrence of `b`'s
/// `min_length`-character prefix and testing whether the rest of `a` from
/// there is a full prefix of `b`. Returns 0 when no qualifying overlap
/// exists, including when `min_length` exceeds either string's length.
///
/// `min_length` of 0 is a contract violation: every position would qualify
/// and the result would be meaningless.
pub fn overlap(a: &str, b: &str, min_length: usize) -> usize {
    assert!(min_length > 0, "min_length must be at least 1");
    if min_length > a.len() || min_length > b.len() {
        return 0;
    }

    let probe = &b[..min_length];
    let mut start = 0;
    while let Some(found) = a[start..].find(probe) {
        let pos = start + found;
        if b.starts_with(&a[pos..]) {
            return a.len() - pos;
        }
        start = pos + 1;
    }
    0
}

/// All qualifying overlaps between ordered pairs of distinct reads, keyed by
/// `(source index, target index)`. Pairs with no overlap of at least
/// `min_length` are omitted.
pub fn overlap_map<S: AsRef<str>>(
    reads: &[S],
    min_length: usize,
) -> BTreeMap<(usize, usize), usize> {
    let mut map = BTreeMap::new();
    for (i, a) in reads.iter().enumerate() {
        for (j, b) in reads.iter().enumerate() {
            if i == j {
                continue;
            }
            let olen = overlap(a.as_ref(), b.as_ref(), min_length);
            if olen > 0 {
                map.insert((i, j), olen);
            }
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_longest_qualifying_overlap() {
        assert_eq!(overlap("ACCGGGTAGC", "AGCTTTTGGGGGGGGAG", 3), 3);
        assert_eq!(overlap("ACCGGGTAGCTT", "AGCTTTTGGGGGGGGAG", 3), 5);
    }

    #[test]
    fn returns_zero_when_no_overlap_qualifies() {
        assert_eq!(overlap("ACCGGGTAGC", "GCTTTTGGGGGGGGAG", 3), 0);
        // "GC" overlaps but is below the threshold.
        assert_eq!(overlap("TTACGC", "GCAATT", 3), 0);
    }

    #[test]
    fn skips_interior_false_starts() {
        // b's prefix "AGC" occurs twice in a; only the suffix occurrence is a
        // real overlap.
        assert_eq!(overlap("AGCTTAGC", "AGCAAA", 3), 3);
    }

    #[test]
    fn threshold_longer_than_either_string_is_zero() {
        assert_eq!(overlap("ACG", "ACGT", 4), 0);
        assert_eq!(overlap("ACGT", "ACG", 4), 0);
        assert_eq!(overlap("", "ACG", 1), 0);
    }

    #[test]
    #[should_panic(expected = "min_length")]
    fn zero_threshold_is_a_contract_violation() {
        overlap("ACGT", "ACGT", 0);
    }

    #[test]
    fn maps_all_ordered_pairs() {
        let reads = vec![
            "ACCGGGTAGC",
            "AGCTTTTGGGGGGGAG",
            "GTAGCTTGGGGGGGA",
            "TTGGGGGGGACC",
        ];
        let map = overlap_map(&reads, 4);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&(0, 2)), Some(&5));
        assert_eq!(map.get(&(2, 3)), Some(&10));
    }
}
