//! Single-sequence utilities: reverse complement, GC statistics and
//! reading-frame codon scans.

use std::collections::BTreeMap;

use thiserror::Error;

/// Errors raised by fixed-alphabet operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("invalid base {base:?} at position {pos}")]
    InvalidBase { base: char, pos: usize },
    #[error("k-mer length {k} too small, must be at least {min}")]
    InvalidKmerLength { k: usize, min: usize },
}

/// Complement of a single base over {A, C, G, T, N}; N maps to itself.
fn complement(base: char, pos: usize) -> Result<char, SequenceError> {
    match base {
        'A' => Ok('T'),
        'C' => Ok('G'),
        'G' => Ok('C'),
        'T' => Ok('A'),
        'N' => Ok('N'),
        other => Err(SequenceError::InvalidBase { base: other, pos }),
    }
}

/// Reverse complement of `seq`. Fails on the first character outside
/// {A, C, G, T, N}.
pub fn reverse_complement(seq: &str) -> Result<String, SequenceError> {
    let mut rc = String::with_capacity(seq.len());
    for (pos, base) in seq.char_indices().rev() {
        rc.push(complement(base, pos)?);
    }
    Ok(rc)
}

/// Fraction of G/C bases in `seq`; 0.0 for an empty sequence.
pub fn gc_content(seq: &str) -> f64 {
    if seq.is_empty() {
        return 0.0;
    }
    let gc = seq.chars().filter(|&b| b == 'G' || b == 'C').count();
    gc as f64 / seq.len() as f64
}

/// Per-position GC fraction across a read set, sized to the longest read.
/// Positions past the end of shorter reads only count reads that cover them.
pub fn gc_by_position<S: AsRef<str>>(reads: &[S]) -> Vec<f64> {
    let width = reads.iter().map(|r| r.as_ref().len()).max().unwrap_or(0);
    let mut gc = vec![0usize; width];
    let mut total = vec![0usize; width];

    for read in reads {
        for (i, base) in read.as_ref().chars().enumerate() {
            if base == 'G' || base == 'C' {
                gc[i] += 1;
            }
            total[i] += 1;
        }
    }

    gc.iter()
        .zip(&total)
        .map(|(&g, &t)| if t == 0 { 0.0 } else { g as f64 / t as f64 })
        .collect()
}

/// Occurrence count of every character in `seq`, in sorted character order.
pub fn base_counts(seq: &str) -> BTreeMap<char, usize> {
    let mut counts = BTreeMap::new();
    for base in seq.chars() {
        *counts.entry(base).or_insert(0) += 1;
    }
    counts
}

/// Whether the reading frame starting at `frame` (0, 1 or 2) contains a stop
/// codon (TAG, TGA or TAA, case-insensitive).
pub fn has_stop_codon(dna: &str, frame: usize) -> bool {
    debug_assert!(frame < 3, "frame must be 0, 1 or 2");
    let upper = dna.to_ascii_uppercase();
    let bytes = upper.as_bytes();
    let mut i = frame;
    while i + 3 <= bytes.len() {
        if matches!(&bytes[i..i + 3], b"TAG" | b"TGA" | b"TAA") {
            return true;
        }
        i += 3;
    }
    false
}
