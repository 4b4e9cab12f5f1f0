//! seqprim: sequence alignment, exact matching and greedy assembly
//! primitives for short DNA reads.
//!
//! The core modules are pure functions over in-memory strings: edit
//! distance and penalty-matrix global alignment, naive suffix/prefix
//! overlap detection, greedy and brute-force shortest common superstring,
//! a sorted k-mer offset index and De Bruijn graph construction. FASTA and
//! FASTQ ingest lives in [`io`]; everything else takes plain sequences.

pub mod alignment;
pub mod assembly;
pub mod debruijn;
pub mod distance;
pub mod io;
pub mod kmer;
pub mod overlap;
pub mod sequence;

pub use alignment::{global_alignment, Base, PenaltyMatrix};
pub use assembly::{brute_force_scs, greedy_scs, pick_maximal_overlap};
pub use debruijn::DeBruijnGraph;
pub use distance::{edit_distance, edit_distance_recursive};
pub use io::{phred33_to_q, quality_histogram, read_fastq, read_genome, FastqRead, IoError};
pub use kmer::{naive_match, KmerIndex};
pub use overlap::{overlap, overlap_map};
pub use sequence::{
    base_counts, gc_by_position, gc_content, has_stop_codon, reverse_complement, SequenceError,
};
