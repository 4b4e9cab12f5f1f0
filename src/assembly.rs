//! Greedy and brute-force shortest common superstring assembly.
//!
//! The greedy path repeatedly merges the read pair with the longest
//! suffix/prefix overlap. It is an approximation: O(r^2 * L) per round and
//! O(r) rounds, against the exact brute-force enumeration's O(r! * L). The
//! brute-force form is retained purely as a correctness oracle for small
//! read sets.

use log::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::overlap::overlap;

/// The read pair with the maximal qualifying overlap, as
/// `(source index, target index, overlap length)`.
///
/// Ordered pairs are scanned in ascending `(i, j)` order; ties on overlap
/// length go to the first pair scanned, i.e. the lexicographically smallest
/// index pair. With the `parallel` feature the scan is distributed but the
/// reduction preserves the same ordering, so the winner is identical.
/// Returns `None` when no pair overlaps by at least `min_length`.
pub fn pick_maximal_overlap<S: AsRef<str> + Sync>(
    reads: &[S],
    min_length: usize,
) -> Option<(usize, usize, usize)> {
    #[cfg(feature = "parallel")]
    {
        (0..reads.len())
            .into_par_iter()
            .flat_map_iter(|i| (0..reads.len()).filter(move |&j| j != i).map(move |j| (i, j)))
            .map(|(i, j)| (i, j, overlap(reads[i].as_ref(), reads[j].as_ref(), min_length)))
            .filter(|&(_, _, olen)| olen > 0)
            .min_by_key(|&(i, j, olen)| (std::cmp::Reverse(olen), i, j))
    }

    #[cfg(not(feature = "parallel"))]
    {
        let mut best: Option<(usize, usize, usize)> = None;
        for i in 0..reads.len() {
            for j in 0..reads.len() {
                if i == j {
                    continue;
                }
                let olen = overlap(reads[i].as_ref(), reads[j].as_ref(), min_length);
                if olen > best.map_or(0, |(_, _, o)| o) {
                    best = Some((i, j, olen));
                }
            }
        }
        best
    }
}

/// Approximate shortest common superstring of `reads` by greedy merging.
///
/// Each round merges the maximal-overlap pair `(x, y)` into `x + y[olen..]`,
/// removing both and appending the merged read at the tail, so iteration
/// order stays stable and reruns are byte-identical. Stops when no pair
/// overlaps by at least `min_length`; whatever reads remain are concatenated
/// in order, so the result is a true superstring only when a fully connected
/// overlap chain exists.
pub fn greedy_scs(mut reads: Vec<String>, min_length: usize) -> String {
    while let Some((i, j, olen)) = pick_maximal_overlap(&reads, min_length) {
        debug!(
            "merging reads {i} and {j} with overlap {olen} ({} reads left)",
            reads.len() - 1
        );
        let second = reads.remove(i.max(j));
        let first = reads.remove(i.min(j));
        let (x, y) = if i < j { (first, second) } else { (second, first) };
        let mut merged = x;
        merged.push_str(&y[olen..]);
        reads.push(merged);
    }
    reads.concat()
}

/// Exact shortest common superstring by enumerating every read permutation
/// and chaining consecutive overlaps (threshold 1). Factorial in the number
/// of reads; only usable as an oracle on small sets. `None` for an empty
/// read set. Equal-length ties keep the first permutation visited.
pub fn brute_force_scs<S: AsRef<str>>(reads: &[S]) -> Option<String> {
    fn permute<F: FnMut(&[usize])>(order: &mut [usize], k: usize, visit: &mut F) {
        if k == order.len() {
            visit(order);
            return;
        }
        for i in k..order.len() {
            order.swap(k, i);
            permute(order, k + 1, visit);
            order.swap(k, i);
        }
    }

    if reads.is_empty() {
        return None;
    }

    let mut best: Option<String> = None;
    let mut order: Vec<usize> = (0..reads.len()).collect();
    permute(&mut order, 0, &mut |perm| {
        let mut superstring = reads[perm[0]].as_ref().to_string();
        for pair in perm.windows(2) {
            let (x, y) = (reads[pair[0]].as_ref(), reads[pair[1]].as_ref());
            let olen = overlap(x, y, 1);
            superstring.push_str(&y[olen..]);
        }
        if best.as_ref().map_or(true, |b| superstring.len() < b.len()) {
            best = Some(superstring);
        }
    });
    best
}
