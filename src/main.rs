use std::fs::File;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use serde_json::json;

use seqprim::{
    brute_force_scs, edit_distance, edit_distance_recursive, global_alignment, greedy_scs,
    naive_match, overlap_map, quality_histogram, read_fastq, read_genome, reverse_complement,
    DeBruijnGraph, KmerIndex, PenaltyMatrix,
};

/// Sequence alignment, matching and assembly toolkit.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose/info output (default: quiet)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Debug output
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Summarise a FASTQ file: read count, quality histogram, GC by position
    Stats {
        /// FASTQ file (optionally gzipped)
        fastq: PathBuf,
    },

    /// Find exact occurrences of a pattern in a FASTA genome
    Match {
        /// Pattern to search for
        pattern: String,
        /// FASTA genome file (optionally gzipped)
        genome: PathBuf,
        /// Accelerate the search with a k-mer index of this length
        #[arg(long)]
        kmer: Option<usize>,
    },

    /// Edit distance between two sequences
    EditDistance {
        a: String,
        b: String,
        /// Use the exponential recursive baseline instead of the DP table
        #[arg(long)]
        recursive: bool,
    },

    /// Global alignment cost under the transition/transversion penalty matrix
    Align {
        a: String,
        b: String,
        /// Use uniform unit penalties (reduces to plain edit distance)
        #[arg(long)]
        unit: bool,
    },

    /// All pairwise suffix/prefix overlaps in a read set
    OverlapMap {
        /// Reads file: FASTQ, FASTA or one sequence per line
        reads: PathBuf,
        /// Minimum overlap length
        #[arg(long, short = 'k', default_value_t = 3)]
        min_overlap: usize,
        /// Write the overlap map as JSON to this path
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Assemble reads into an approximate shortest common superstring
    Assemble {
        /// Reads file: FASTQ, FASTA or one sequence per line
        reads: PathBuf,
        /// Minimum overlap length for a merge
        #[arg(long, short = 'k', default_value_t = 2)]
        min_overlap: usize,
        /// Use the exact brute-force search (factorial; small read sets only)
        #[arg(long)]
        brute_force: bool,
        /// Write the assembled sequence as FASTA to this path
        #[arg(long)]
        output_fasta: Option<PathBuf>,
        /// Wrap FASTA lines to this width (0 = no wrap)
        #[arg(long, default_value_t = 60)]
        fasta_line_width: usize,
    },

    /// Build the De Bruijn graph of a sequence
    Debruijn {
        sequence: String,
        /// k-mer length (edges); nodes are (k-1)-mers
        #[arg(long = "kmer-length", short = 'k', default_value_t = 4)]
        k: usize,
        /// Write a Graphviz rendering to this path
        #[arg(long)]
        dot: Option<PathBuf>,
    },

    /// Reverse complement of a sequence
    Revcomp { sequence: String },
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.debug {
        log::LevelFilter::Debug
    } else if cli.verbose {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Error
    };
    env_logger::Builder::new().filter_level(log_level).init();

    if let Err(error) = run(cli.command) {
        eprintln!("Error: {error:?}");
        std::process::exit(1);
    }
}

/// Read a file of sequences: FASTQ or FASTA by extension, otherwise one
/// sequence per line.
fn read_reads(path: &Path) -> Result<Vec<String>> {
    let mut ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_ascii_lowercase())
        .unwrap_or_default();
    if ext == "gz" || ext == "bgz" {
        if let Some(stem) = path.file_stem() {
            ext = Path::new(stem)
                .extension()
                .and_then(|e| e.to_str())
                .map(|s| s.to_ascii_lowercase())
                .unwrap_or_default();
        }
    }

    match ext.as_str() {
        "fastq" | "fq" => {
            let records = read_fastq(path)
                .with_context(|| format!("Failed to parse reads from {}", path.display()))?;
            Ok(records.into_iter().map(|r| r.seq).collect())
        }
        "fasta" | "fa" | "fna" => seqprim::io::read_fasta_sequences(path)
            .with_context(|| format!("Failed to parse reads from {}", path.display())),
        _ => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            let mut sequences = Vec::new();
            for line in std::io::BufReader::new(file).lines() {
                let line = line?;
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    sequences.push(trimmed.to_ascii_uppercase());
                }
            }
            Ok(sequences)
        }
    }
}

fn write_wrapped_fasta(path: &Path, header: &str, seq: &str, width: usize) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut fh = File::create(path)?;
    writeln!(fh, ">{header}")?;
    if width == 0 {
        writeln!(fh, "{seq}")?;
    } else {
        let mut i = 0;
        while i < seq.len() {
            let end = (i + width).min(seq.len());
            writeln!(fh, "{}", &seq[i..end])?;
            i = end;
        }
    }
    Ok(())
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Stats { fastq } => {
            let reads = read_fastq(&fastq)
                .with_context(|| format!("Failed to parse reads from {}", fastq.display()))?;
            println!("reads: {}", reads.len());

            let hist = quality_histogram(reads.iter().map(|r| r.qual.as_str()));
            println!("quality histogram (Phred+33):");
            for (q, &count) in hist.iter().enumerate() {
                if count > 0 {
                    println!("  Q{q:>2}: {count}");
                }
            }

            let seqs: Vec<&str> = reads.iter().map(|r| r.seq.as_str()).collect();
            let gc = seqprim::gc_by_position(&seqs);
            let mean_gc = if gc.is_empty() {
                0.0
            } else {
                gc.iter().sum::<f64>() / gc.len() as f64
            };
            println!("mean GC by position: {mean_gc:.4}");

            let combined = seqs.concat();
            println!("base counts:");
            for (base, count) in seqprim::base_counts(&combined) {
                println!("  {base}: {count}");
            }
        }

        Command::Match { pattern, genome, kmer } => {
            let text = read_genome(&genome)
                .with_context(|| format!("Failed to read genome from {}", genome.display()))?;
            info!("genome length: {} bp", text.len());

            let offsets = match kmer {
                Some(k) => {
                    if pattern.len() < k {
                        bail!("pattern is shorter than the k-mer length {k}");
                    }
                    let index = KmerIndex::new(&text, k)?;
                    info!("k-mer index holds {} entries", index.len());
                    index.query_verified(&pattern, &text)
                }
                None => naive_match(&pattern, &text),
            };
            println!("{} occurrences: {:?}", offsets.len(), offsets);
        }

        Command::EditDistance { a, b, recursive } => {
            let distance = if recursive {
                edit_distance_recursive(&a, &b)
            } else {
                edit_distance(&a, &b)
            };
            println!("{distance}");
        }

        Command::Align { a, b, unit } => {
            let penalty = if unit {
                PenaltyMatrix::unit()
            } else {
                PenaltyMatrix::default()
            };
            let cost = global_alignment(&a, &b, &penalty)?;
            println!("{cost}");
        }

        Command::OverlapMap { reads, min_overlap, json } => {
            if min_overlap == 0 {
                bail!("minimum overlap must be at least 1");
            }
            let sequences = read_reads(&reads)?;
            let map = overlap_map(&sequences, min_overlap);
            for (&(i, j), &olen) in &map {
                println!("{i} -> {j}: {olen}");
            }
            if let Some(path) = json {
                let edges: Vec<_> = map
                    .iter()
                    .map(|(&(i, j), &olen)| json!({"source": i, "target": j, "overlap": olen}))
                    .collect();
                let output = json!({"reads": sequences, "edges": edges});
                let mut file = File::create(&path)?;
                writeln!(file, "{}", serde_json::to_string_pretty(&output)?)?;
                info!("overlap map written to {}", path.display());
            }
        }

        Command::Assemble {
            reads,
            min_overlap,
            brute_force,
            output_fasta,
            fasta_line_width,
        } => {
            if min_overlap == 0 {
                bail!("minimum overlap must be at least 1");
            }
            let sequences = read_reads(&reads)?;
            if sequences.is_empty() {
                bail!("no reads found in {}", reads.display());
            }
            info!("assembling {} reads", sequences.len());

            let assembled = if brute_force {
                if sequences.len() > 10 {
                    bail!(
                        "brute-force search over {} reads is infeasible; use the greedy default",
                        sequences.len()
                    );
                }
                brute_force_scs(&sequences).context("empty read set")?
            } else {
                greedy_scs(sequences, min_overlap)
            };

            if let Some(path) = output_fasta {
                let header = format!(
                    "assembled_from_{}",
                    reads
                        .file_name()
                        .unwrap_or_else(|| "reads".as_ref())
                        .to_string_lossy()
                );
                write_wrapped_fasta(&path, &header, &assembled, fasta_line_width)?;
                info!("assembly written to {}", path.display());
            } else {
                println!("{assembled}");
            }
        }

        Command::Debruijn { sequence, k, dot } => {
            let graph = DeBruijnGraph::build(&sequence, k)?;
            println!(
                "{} nodes, {} edges",
                graph.node_count(),
                graph.edge_count()
            );
            for (src, dst) in graph.edges() {
                println!("{src} -> {dst}");
            }
            if let Some(path) = dot {
                let mut file = File::create(&path)?;
                file.write_all(graph.to_dot().as_bytes())?;
                info!("DOT rendering written to {}", path.display());
            }
        }

        Command::Revcomp { sequence } => {
            println!("{}", reverse_complement(&sequence)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod smoke {
    use super::*;
    use std::io::Write;

    #[test]
    fn assembles_reads_from_plain_lines() {
        let mut tmp = tempfile::NamedTempFile::new().expect("tmpfile");
        writeln!(tmp, "ACCGGGTAGC").unwrap();
        writeln!(tmp, "AGCTTTTGGGGGGGGGA").unwrap();
        writeln!(tmp, "AGCTTGGGGGGGA").unwrap();
        writeln!(tmp, "GGGGGGACCGGGTA").unwrap();

        let out = tempfile::TempDir::new().expect("tmpdir");
        let fasta = out.path().join("assembled.fa");
        let res = run(Command::Assemble {
            reads: tmp.path().to_path_buf(),
            min_overlap: 2,
            brute_force: false,
            output_fasta: Some(fasta.clone()),
            fasta_line_width: 60,
        });
        assert!(res.is_ok());

        let written = std::fs::read_to_string(&fasta).unwrap();
        assert!(written.starts_with('>'));
        assert!(written.contains("AGCTTTTGGGGGGGGGACCGGGTAGCTTGGGGGGGA"));
    }

    #[test]
    fn read_reads_uppercases_plain_lines() {
        let mut tmp = tempfile::NamedTempFile::new().expect("tmpfile");
        writeln!(tmp, "acgt").unwrap();
        writeln!(tmp).unwrap();
        writeln!(tmp, "TTGA").unwrap();

        let reads = read_reads(tmp.path()).unwrap();
        assert_eq!(reads, vec!["ACGT".to_string(), "TTGA".to_string()]);
    }
}
