//! De Bruijn graph construction: nodes are (k-1)-mers, edges are k-mers.

use std::collections::BTreeSet;
use std::fmt::Write as _;

use crate::sequence::SequenceError;

/// De Bruijn graph of a single sequence.
///
/// Each k-mer contributes one directed edge from its left (k-1)-mer to its
/// right (k-1)-mer; edges keep left-to-right scan order and repeat with the
/// k-mers, while nodes are deduplicated.
#[derive(Debug, Clone)]
pub struct DeBruijnGraph {
    k: usize,
    nodes: BTreeSet<String>,
    edges: Vec<(String, String)>,
}

impl DeBruijnGraph {
    /// Build the graph from every k-mer of `text`. `k` must be at least 2 so
    /// that a k-mer splits into two (k-1)-mers.
    pub fn build(text: &str, k: usize) -> Result<Self, SequenceError> {
        if k < 2 {
            return Err(SequenceError::InvalidKmerLength { k, min: 2 });
        }

        let mut nodes = BTreeSet::new();
        let mut edges = Vec::new();
        if text.len() >= k {
            for i in 0..=text.len() - k {
                let left = &text[i..i + k - 1];
                let right = &text[i + 1..i + k];
                edges.push((left.to_string(), right.to_string()));
                nodes.insert(left.to_string());
                nodes.insert(right.to_string());
            }
        }

        Ok(Self { k, nodes, edges })
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// Distinct (k-1)-mer nodes in sorted order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(String::as_str)
    }

    /// Edges in left-to-right scan order, one per k-mer occurrence.
    pub fn edges(&self) -> &[(String, String)] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Graphviz rendering of the graph.
    pub fn to_dot(&self) -> String {
        let mut dot = String::from("digraph debruijn {\n");
        for node in &self.nodes {
            let _ = writeln!(dot, "  \"{node}\" [label=\"{node}\"];");
        }
        for (src, dst) in &self.edges {
            let _ = writeln!(dot, "  \"{src}\" -> \"{dst}\";");
        }
        dot.push_str("}\n");
        dot
    }
}
