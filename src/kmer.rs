//! Sorted k-mer index for exact pattern matching, plus the naive scan it
//! accelerates.

use log::debug;

use crate::sequence::SequenceError;

/// Offset index over every k-length substring of a source text.
///
/// Entries are `(k-mer, offset)` pairs sorted lexicographically by k-mer, so
/// all occurrences of a k-mer form one contiguous group reachable by binary
/// search. Built once, queried many times.
#[derive(Debug, Clone)]
pub struct KmerIndex {
    k: usize,
    entries: Vec<(String, usize)>,
}

impl KmerIndex {
    /// Index every k-mer of `text`. Fails fast on `k == 0`; a text shorter
    /// than `k` yields a valid empty index.
    pub fn new(text: &str, k: usize) -> Result<Self, SequenceError> {
        if k == 0 {
            return Err(SequenceError::InvalidKmerLength { k, min: 1 });
        }

        let mut entries = Vec::new();
        if text.len() >= k {
            entries.reserve(text.len() - k + 1);
            for i in 0..=text.len() - k {
                entries.push((text[i..i + k].to_string(), i));
            }
        }
        entries.sort();
        debug!("indexed {} {k}-mers", entries.len());

        Ok(Self { k, entries })
    }

    /// The k-mer length this index was built with.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Number of indexed k-mers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Offsets where the first `k` characters of `pattern` occur in the
    /// source text, in ascending order. Only the leading k-mer is matched;
    /// see [`Self::query_verified`] for full-pattern hits. A pattern shorter
    /// than `k` has no hits.
    pub fn query(&self, pattern: &str) -> Vec<usize> {
        if pattern.len() < self.k {
            return Vec::new();
        }
        let kmer = &pattern[..self.k];
        let lower = self
            .entries
            .partition_point(|(key, _)| key.as_str() < kmer);
        self.entries[lower..]
            .iter()
            .take_while(|(key, _)| key == kmer)
            .map(|&(_, offset)| offset)
            .collect()
    }

    /// Offsets where the whole `pattern` occurs in `text`, verified by
    /// re-checking the pattern remainder at each candidate from
    /// [`Self::query`]. `text` must be the text the index was built from.
    pub fn query_verified(&self, pattern: &str, text: &str) -> Vec<usize> {
        self.query(pattern)
            .into_iter()
            .filter(|&i| {
                i + pattern.len() <= text.len()
                    && pattern[self.k..] == text[i + self.k..i + pattern.len()]
            })
            .collect()
    }
}

/// Every offset where `pattern` occurs in `text`, by direct character
/// comparison at each candidate position. O(|text| * |pattern|); serves as
/// the oracle for [`KmerIndex::query_verified`]. An empty pattern or a
/// pattern longer than the text has no occurrences.
pub fn naive_match(pattern: &str, text: &str) -> Vec<usize> {
    let pattern = pattern.as_bytes();
    let text = text.as_bytes();
    let mut occurrences = Vec::new();
    if pattern.is_empty() || pattern.len() > text.len() {
        return occurrences;
    }

    for i in 0..=text.len() - pattern.len() {
        if &text[i..i + pattern.len()] == pattern {
            occurrences.push(i);
        }
    }
    occurrences
}
