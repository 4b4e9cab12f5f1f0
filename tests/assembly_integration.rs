//! Integration tests across the alignment, matching and assembly modules.
//!
//! These tests verify that:
//! 1. Greedy assembly produces a superstring covering every input read
//! 2. The brute-force search is a usable correctness oracle for the greedy path
//! 3. Index-accelerated matching agrees with the naive scan on real-shaped data
//! 4. Alignment costs are consistent between the unit and weighted matrices

use seqprim::{
    brute_force_scs, edit_distance, global_alignment, greedy_scs, naive_match,
    reverse_complement, KmerIndex, PenaltyMatrix,
};

fn reads(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn greedy_superstring_covers_every_read() {
    let set = reads(&[
        "ACCGGGTAGC",
        "AGCTTTTGGGGGGGGGA",
        "AGCTTGGGGGGGA",
        "GGGGGGACCGGGTA",
    ]);
    let total: usize = set.iter().map(|r| r.len()).sum();

    let assembled = greedy_scs(set.clone(), 2);
    assert!(assembled.len() <= total);
    for read in &set {
        assert!(
            assembled.contains(read.as_str()),
            "assembled superstring lost read {read}"
        );
    }
}

#[test]
fn greedy_matches_the_brute_force_oracle_on_chained_reads() {
    let set = reads(&[
        "ACCGGGTAGC",
        "AGCTTTTGGGGGGGGGA",
        "AGCTTGGGGGGGA",
        "GGGGGGACCGGGTA",
    ]);
    let exact = brute_force_scs(&set).expect("non-empty set");
    let approx = greedy_scs(set.clone(), 2);
    // On this fully chained set the greedy result is optimal.
    assert_eq!(approx.len(), exact.len());
    for read in &set {
        assert!(exact.contains(read.as_str()));
    }
}

#[test]
fn greedy_never_beats_the_oracle() {
    let sets = [
        vec!["CCT", "CTT", "TGC", "TGG", "GAT", "ATT"],
        vec!["ABC", "BCA", "CAB"],
        vec!["AAAA", "CCCC"],
    ];
    for items in sets {
        let set = reads(&items);
        let exact = brute_force_scs(&set).expect("non-empty set");
        let approx = greedy_scs(set, 1);
        assert!(
            approx.len() >= exact.len(),
            "greedy ({}) shorter than optimum ({})",
            approx.len(),
            exact.len()
        );
    }
}

#[test]
fn index_matching_agrees_with_naive_scan() {
    // Deterministic synthetic genome with repeats, built from chained motifs.
    let motif = "AGCCTCAAGCCTCAAAGGACCTTGGACCAGTC";
    let genome: String = motif.repeat(8);
    let index = KmerIndex::new(&genome, 5).unwrap();

    let patterns = ["AGCCTCAA", "GGACC", "TTTTT", "AGTCAGCC", &genome[10..30]];
    for pattern in patterns {
        assert_eq!(
            index.query_verified(pattern, &genome),
            naive_match(pattern, &genome),
            "pattern {pattern}"
        );
    }

    // No false negatives for any indexed 5-mer.
    for i in 0..=genome.len() - 5 {
        assert!(index.query(&genome[i..i + 5]).contains(&i));
    }
}

#[test]
fn matching_reads_against_their_reverse_complement_strand() {
    let genome = "AGCTTAGCTAGGCTTACGGATCC";
    let read = "GGATCC";
    let rc = reverse_complement(read).unwrap();

    assert_eq!(naive_match(read, genome), vec![17]);
    assert_eq!(rc, "GGATCC"); // palindromic site
    assert_eq!(naive_match(&rc, genome), naive_match(read, genome));
}

#[test]
fn unit_alignment_tracks_edit_distance_on_longer_sequences() {
    let unit = PenaltyMatrix::unit();
    let pairs = [
        ("AGCTAAAGGGTTGGGGCCCCGGGGGGGA", "AGCTAGTTGGCCGGA"),
        ("AAAAAAAACCCCCGGATC", "AAAAAAACCCCGGATG"),
    ];
    for (a, b) in pairs {
        assert_eq!(
            global_alignment(a, b, &unit).unwrap() as usize,
            edit_distance(a, b)
        );
    }
}
