//! FASTA/FASTQ ingest and Phred quality decoding.
//!
//! These are the collaborators that feed sequences to the algorithmic
//! modules; they carry no algorithmic weight of their own. Gzipped inputs
//! are decoded transparently.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use bio::io::{fasta, fastq};
use flate2::read::MultiGzDecoder;
use log::info;
use thiserror::Error;

/// Errors raised while reading sequence files.
#[derive(Error, Debug)]
pub enum IoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse {format} record from {path}")]
    Parse { format: &'static str, path: String },
    #[error("sequence data in {0} is not valid UTF-8")]
    InvalidUtf8(String),
}

/// Phred+33 offset: quality score = character code - 33.
pub const PHRED33_OFFSET: u8 = 33;

/// Number of bins in a [`quality_histogram`].
pub const QUALITY_BINS: usize = 50;

/// A single FASTQ record: read name, sequence and raw quality string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastqRead {
    pub name: String,
    pub seq: String,
    pub qual: String,
}

fn is_gzip(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("gz") || ext.eq_ignore_ascii_case("bgz"))
        .unwrap_or(false)
}

fn open_reader(path: &Path) -> Result<Box<dyn BufRead>, IoError> {
    let file = File::open(path)?;
    if is_gzip(path) {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

fn uppercase_sequence(bytes: &[u8], path: &Path) -> Result<String, IoError> {
    let upper: Vec<u8> = bytes.iter().map(|b| b.to_ascii_uppercase()).collect();
    String::from_utf8(upper).map_err(|_| IoError::InvalidUtf8(path.display().to_string()))
}

/// Read a FASTA file as one sequence per record, uppercased.
pub fn read_fasta_sequences(path: &Path) -> Result<Vec<String>, IoError> {
    let reader = fasta::Reader::new(open_reader(path)?);
    let mut sequences = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|_| IoError::Parse {
            format: "FASTA",
            path: path.display().to_string(),
        })?;
        sequences.push(uppercase_sequence(record.seq(), path)?);
    }
    info!("read {} FASTA records from {}", sequences.len(), path.display());
    Ok(sequences)
}

/// Read a FASTA file as a single genome: every record's sequence
/// concatenated, header lines skipped.
pub fn read_genome(path: &Path) -> Result<String, IoError> {
    Ok(read_fasta_sequences(path)?.concat())
}

/// Read a FASTQ file into parallel (sequence, quality) records.
pub fn read_fastq(path: &Path) -> Result<Vec<FastqRead>, IoError> {
    let reader = fastq::Reader::new(open_reader(path)?);
    let mut reads = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|_| IoError::Parse {
            format: "FASTQ",
            path: path.display().to_string(),
        })?;
        reads.push(FastqRead {
            name: record.id().to_string(),
            seq: uppercase_sequence(record.seq(), path)?,
            qual: String::from_utf8(record.qual().to_vec())
                .map_err(|_| IoError::InvalidUtf8(path.display().to_string()))?,
        });
    }
    info!("read {} FASTQ records from {}", reads.len(), path.display());
    Ok(reads)
}

/// Numeric quality of one Phred+33 encoded character.
pub fn phred33_to_q(encoded: u8) -> u8 {
    encoded.saturating_sub(PHRED33_OFFSET)
}

/// Histogram of decoded quality scores across all quality strings, with
/// [`QUALITY_BINS`] bins. Scores past the last bin are clamped into it.
pub fn quality_histogram<'a, I>(qualities: I) -> [u64; QUALITY_BINS]
where
    I: IntoIterator<Item = &'a str>,
{
    let mut hist = [0u64; QUALITY_BINS];
    for qual in qualities {
        for encoded in qual.bytes() {
            let q = phred33_to_q(encoded) as usize;
            hist[q.min(QUALITY_BINS - 1)] += 1;
        }
    }
    hist
}
