//! The interval index: lookup maps plus a duplication interval tree.

pub mod node;
pub mod range;
mod reader;
mod writer;

pub use node::{IndexedClade, IndexedLeaf};
pub use range::LabelRange;

use std::collections::HashMap;
use std::io::{Read, Write};

use rust_lapper::{Interval, Lapper};

use crate::error::Error;
use crate::tree::GeneTree;

/// The interval index of one gene tree, freshly built or loaded from disk.
///
/// Holds the four lookup structures the classifiers work from: gene name →
/// leaf, label → leaf, node hash → internal clade, and the interval tree
/// over duplication-node label ranges (value = node hash).
#[derive(Debug)]
pub struct GeneTreeIndex {
    pub leaves:         HashMap<String, IndexedLeaf>,
    pub leaf_labels:    HashMap<u32, IndexedLeaf>,
    pub internal_nodes: HashMap<u32, IndexedClade>,
    duplication_nodes:  Lapper<u32, u32>,
}

impl GeneTreeIndex {
    /// Label the tree's leaves and build the index in memory.
    pub fn build(tree: &GeneTree) -> Self {
        writer::build(tree)
    }

    /// Serialise the three index sections.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<(), Error> {
        writer::write(self, out)
    }

    /// Deserialise an index written by [`GeneTreeIndex::write_to`].
    pub fn read_from<R: Read>(input: &mut R) -> Result<Self, Error> {
        reader::read(input)
    }

    /// Assemble the maps and the interval tree from section records. The
    /// interval tree is bulk-built; duplication ranges become half-open
    /// `Lapper` intervals.
    pub(crate) fn from_parts(
        leaf_records: Vec<IndexedLeaf>,
        clades: Vec<IndexedClade>,
        duplications: Vec<(LabelRange, u32)>,
    ) -> Self {
        let mut leaves = HashMap::with_capacity(leaf_records.len());
        let mut leaf_labels = HashMap::with_capacity(leaf_records.len());
        for leaf in leaf_records {
            leaves.insert(leaf.gene_name.clone(), leaf.clone());
            leaf_labels.insert(leaf.label, leaf);
        }
        let internal_nodes = clades.into_iter().map(|c| (c.node_hash, c)).collect();
        let intervals = duplications
            .into_iter()
            .map(|(range, hash)| Interval { start: range.min, stop: range.max + 1, val: hash })
            .collect();
        Self {
            leaves,
            leaf_labels,
            internal_nodes,
            duplication_nodes: Lapper::new(intervals),
        }
    }

    /// Leaf record for `gene_name`.
    pub fn leaf(&self, gene_name: &str) -> Result<&IndexedLeaf, Error> {
        self.leaves
            .get(gene_name)
            .ok_or_else(|| Error::NotFound(gene_name.to_string()))
    }

    /// Number of duplication intervals in the tree.
    pub fn duplication_count(&self) -> usize {
        self.duplication_nodes.len()
    }

    /// Duplication intervals wholly contained in `range`, merged into
    /// disjoint label ranges so nested and overlapping subtrees coalesce.
    /// Sorted by start label; deterministic for a given index.
    pub fn duplications_within(&self, range: LabelRange) -> Vec<LabelRange> {
        let mut contained: Vec<LabelRange> = self
            .duplication_nodes
            .find(range.min, range.max + 1)
            .filter(|iv| iv.start >= range.min && iv.stop <= range.max + 1)
            .map(|iv| LabelRange::new(iv.start, iv.stop - 1))
            .collect();
        contained.sort_by_key(|r| (r.min, r.max));

        let mut merged: Vec<LabelRange> = Vec::new();
        for range in contained {
            match merged.last_mut() {
                // Nested or overlapping the running interval: extend it.
                Some(last) if range.min <= last.max => last.max = last.max.max(range.max),
                _ => merged.push(range),
            }
        }
        merged
    }

    /// Duplication intervals paired with their node hashes, sorted by
    /// `(start, stop, hash)`, the serialisation order of section three.
    pub(crate) fn duplication_records(&self) -> Vec<(LabelRange, u32)> {
        let mut records: Vec<(LabelRange, u32)> = self
            .duplication_nodes
            .iter()
            .map(|iv| (LabelRange::new(iv.start, iv.stop - 1), iv.val))
            .collect();
        records.sort_by_key(|&(range, hash)| (range.min, range.max, hash));
        records
    }
}
