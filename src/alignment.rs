//! Global alignment with an asymmetric substitution/indel penalty matrix.
//!
//! Generalises [`crate::distance::edit_distance`]: every transition cost is
//! looked up in a fixed 5x5 table over {A, C, G, T, gap} instead of costing
//! a flat 1.

use crate::sequence::SequenceError;

/// A DNA base over the strict {A, C, G, T} alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base {
    A,
    C,
    G,
    T,
}

impl Base {
    /// Decode one ASCII byte; anything outside {A, C, G, T} is rejected.
    pub fn from_ascii(byte: u8, pos: usize) -> Result<Self, SequenceError> {
        match byte {
            b'A' => Ok(Self::A),
            b'C' => Ok(Self::C),
            b'G' => Ok(Self::G),
            b'T' => Ok(Self::T),
            other => Err(SequenceError::InvalidBase {
                base: other as char,
                pos,
            }),
        }
    }

    #[inline]
    fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::C => 1,
            Self::G => 2,
            Self::T => 3,
        }
    }
}

/// Row/column index of the gap symbol in a [`PenaltyMatrix`].
const GAP: usize = 4;

/// Immutable 5x5 cost table indexed by {A, C, G, T, gap}.
///
/// Rows are the base consumed from the first sequence, columns the base
/// consumed from the second; the gap row/column hold insertion and deletion
/// penalties. Constructed once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PenaltyMatrix {
    costs: [[u32; 5]; 5],
}

impl PenaltyMatrix {
    pub const fn new(costs: [[u32; 5]; 5]) -> Self {
        Self { costs }
    }

    /// Uniform unit costs: 0 on the base diagonal, 1 everywhere else.
    /// With this matrix [`global_alignment`] equals
    /// [`crate::distance::edit_distance`].
    pub const fn unit() -> Self {
        Self::new([
            [0, 1, 1, 1, 1],
            [1, 0, 1, 1, 1],
            [1, 1, 0, 1, 1],
            [1, 1, 1, 0, 1],
            [1, 1, 1, 1, 1],
        ])
    }

    #[inline]
    pub fn substitution(&self, a: Base, b: Base) -> u32 {
        self.costs[a.index()][b.index()]
    }

    /// Cost of deleting `a` from the first sequence (gap column).
    #[inline]
    pub fn deletion(&self, a: Base) -> u32 {
        self.costs[a.index()][GAP]
    }

    /// Cost of inserting `b` from the second sequence (gap row).
    #[inline]
    pub fn insertion(&self, b: Base) -> u32 {
        self.costs[GAP][b.index()]
    }
}

impl Default for PenaltyMatrix {
    /// Transition/transversion costs: A<->G and C<->T substitutions
    /// (transitions) cost 2, transversions 4, indels 8.
    fn default() -> Self {
        Self::new([
            [0, 4, 2, 4, 8],
            [4, 0, 4, 2, 8],
            [2, 4, 0, 4, 8],
            [4, 2, 4, 0, 8],
            [8, 8, 8, 8, 8],
        ])
    }
}

fn decode(seq: &str) -> Result<Vec<Base>, SequenceError> {
    seq.bytes()
        .enumerate()
        .map(|(pos, byte)| Base::from_ascii(byte, pos))
        .collect()
}

/// Minimum global alignment cost between `a` and `b` under `penalty`.
///
/// Same table shape as [`crate::distance::edit_distance`], with the base-case
/// row and column accumulating indel penalties and every transition cost
/// taken from the matrix. Equal bases cost 0 on the diagonal. Fails with
/// [`SequenceError::InvalidBase`] on any character outside {A, C, G, T}.
pub fn global_alignment(a: &str, b: &str, penalty: &PenaltyMatrix) -> Result<u32, SequenceError> {
    let a = decode(a)?;
    let b = decode(b)?;

    let mut dist = vec![vec![0u32; b.len() + 1]; a.len() + 1];
    for i in 1..=a.len() {
        dist[i][0] = dist[i - 1][0] + penalty.deletion(a[i - 1]);
    }
    for j in 1..=b.len() {
        dist[0][j] = dist[0][j - 1] + penalty.insertion(b[j - 1]);
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let insertion = dist[i][j - 1] + penalty.insertion(b[j - 1]);
            let deletion = dist[i - 1][j] + penalty.deletion(a[i - 1]);
            let diagonal = dist[i - 1][j - 1]
                + if a[i - 1] == b[j - 1] {
                    0
                } else {
                    penalty.substitution(a[i - 1], b[j - 1])
                };
            dist[i][j] = insertion.min(deletion).min(diagonal);
        }
    }

    Ok(dist[a.len()][b.len()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::edit_distance;

    #[test]
    fn known_alignment_cost() {
        let cost =
            global_alignment("AAAAAAAACCCCCGGATC", "AAAAAAACCCCGGATG", &PenaltyMatrix::default())
                .unwrap();
        assert_eq!(cost, 20);
    }

    #[test]
    fn unit_penalties_reduce_to_edit_distance() {
        let unit = PenaltyMatrix::unit();
        let pairs = [("ACGT", "AGT"), ("GATTACA", "GCAT"), ("", "ACG"), ("TTTT", "TTTT")];
        for (a, b) in pairs {
            assert_eq!(
                global_alignment(a, b, &unit).unwrap() as usize,
                edit_distance(a, b)
            );
        }
    }

    #[test]
    fn identical_sequences_cost_nothing() {
        let cost = global_alignment("ACGTACGT", "ACGTACGT", &PenaltyMatrix::default()).unwrap();
        assert_eq!(cost, 0);
    }

    #[test]
    fn transitions_cost_less_than_transversions() {
        let penalty = PenaltyMatrix::default();
        let transition = global_alignment("A", "G", &penalty).unwrap();
        let transversion = global_alignment("A", "C", &penalty).unwrap();
        assert_eq!(transition, 2);
        assert_eq!(transversion, 4);
    }

    #[test]
    fn rejects_bases_outside_alphabet() {
        let err = global_alignment("ACNGT", "ACGT", &PenaltyMatrix::default()).unwrap_err();
        assert_eq!(err, SequenceError::InvalidBase { base: 'N', pos: 2 });
    }

    #[test]
    fn empty_against_bases_accumulates_indels() {
        let penalty = PenaltyMatrix::default();
        assert_eq!(global_alignment("", "ACG", &penalty).unwrap(), 24);
        assert_eq!(global_alignment("ACG", "", &penalty).unwrap(), 24);
    }
}
