//! Edit distance between two sequences.
//!
//! The production path is the iterative dynamic-programming form. The
//! recursive form is kept as a reference baseline for cross-checking on
//! short inputs only; it recomputes subproblems and blows up exponentially.

/// Minimum number of single-character insertions, deletions and
/// substitutions turning `a` into `b`.
///
/// Builds the full (|a|+1) x (|b|+1) distance table; row 0 and column 0 hold
/// the insert-everything / delete-everything base cases. Empty inputs are
/// valid.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a = a.as_bytes();
    let b = b.as_bytes();
    let mut dist = vec![vec![0usize; b.len() + 1]; a.len() + 1];

    for (i, row) in dist.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in dist[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let insertion = dist[i][j - 1] + 1;
            let deletion = dist[i - 1][j] + 1;
            let diagonal = dist[i - 1][j - 1] + usize::from(a[i - 1] != b[j - 1]);
            dist[i][j] = insertion.min(deletion).min(diagonal);
        }
    }

    dist[a.len()][b.len()]
}

/// Recursive reference formulation of [`edit_distance`].
///
/// Exponential in the input lengths; only suitable for strings of a dozen or
/// so characters.
pub fn edit_distance_recursive(a: &str, b: &str) -> usize {
    fn go(a: &[u8], b: &[u8]) -> usize {
        if a.is_empty() {
            return b.len();
        }
        if b.is_empty() {
            return a.len();
        }
        let delta = usize::from(a[a.len() - 1] != b[b.len() - 1]);
        let diag = go(&a[..a.len() - 1], &b[..b.len() - 1]) + delta;
        let del = go(&a[..a.len() - 1], b) + 1;
        let ins = go(a, &b[..b.len() - 1]) + 1;
        diag.min(del).min(ins)
    }
    go(a.as_bytes(), b.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_distance() {
        assert_eq!(
            edit_distance("AGCTAAAGGGTTGGGGCCCCGGGGGGGA", "AGCTAGTTGGCCGGA"),
            13
        );
    }

    #[test]
    fn identity_and_empty() {
        assert_eq!(edit_distance("ACGT", "ACGT"), 0);
        assert_eq!(edit_distance("", "ACGT"), 4);
        assert_eq!(edit_distance("ACGT", ""), 4);
        assert_eq!(edit_distance("", ""), 0);
    }

    #[test]
    fn symmetry() {
        let pairs = [("ACCGGT", "AGT"), ("TTTT", "AAAA"), ("GATTACA", "GCAT")];
        for (a, b) in pairs {
            assert_eq!(edit_distance(a, b), edit_distance(b, a));
        }
    }

    #[test]
    fn triangle_inequality() {
        let seqs = ["ACGT", "AGT", "TTGA", "", "ACGTACGT"];
        for a in seqs {
            for b in seqs {
                for c in seqs {
                    assert!(edit_distance(a, c) <= edit_distance(a, b) + edit_distance(b, c));
                }
            }
        }
    }

    #[test]
    fn recursive_baseline_agrees_with_dp() {
        let pairs = [("ACGTAC", "AGTC"), ("", "AC"), ("TTT", "TTT"), ("GATTA", "CAT")];
        for (a, b) in pairs {
            assert_eq!(edit_distance_recursive(a, b), edit_distance(a, b));
        }
    }
}
