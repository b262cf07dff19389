//! The in-memory gene tree and its query surface.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write as _};
use std::path::Path;

use crate::classify::{self, OrthologPair, ParalogPair};
use crate::error::Error;
use crate::index::GeneTreeIndex;
use crate::tree::builder;
use crate::tree::node::{GeneTreeNode, NodeType};

/// A rooted gene tree parsed from phyloXML.
///
/// Nodes are stored in an arena (`nodes`); the tree exclusively owns them
/// and every parent/child reference is an arena index. An interval index
/// can be attached with [`GeneTree::build_index`] or
/// [`GeneTree::load_index`]; queries without one return empty results.
pub struct GeneTree {
    pub nodes: Vec<GeneTreeNode>,
    pub root:  usize,
    /// Node hash → arena index, for every leaf.
    pub(crate) leaves_map: HashMap<u32, usize>,
    index: Option<GeneTreeIndex>,
}

impl GeneTree {
    /// Parse a phyloXML document held in memory.
    ///
    /// Fails with [`Error::MalformedInput`] when the document is not XML or
    /// lacks the phyloxml → phylogeny → clade spine.
    pub fn from_phyloxml(xml: &str) -> Result<Self, Error> {
        let doc =
            roxmltree::Document::parse(xml).map_err(|e| Error::MalformedInput(e.to_string()))?;
        let built = builder::build(&doc)?;
        Ok(Self {
            nodes: built.nodes,
            root: built.root,
            leaves_map: built.leaves_map,
            index: None,
        })
    }

    /// Read and parse a phyloXML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let xml = fs::read_to_string(path)?;
        Self::from_phyloxml(&xml)
    }

    // ── Traversal ─────────────────────────────────────────────────────────

    pub fn node(&self, id: usize) -> &GeneTreeNode {
        &self.nodes[id]
    }

    /// Ids of the subtree rooted at `id`, post-order, left children first,
    /// `id` itself last. Iterative, so deep trees cannot overflow the stack.
    pub fn subtree(&self, id: usize) -> Vec<usize> {
        let mut result = Vec::new();
        let mut stack = vec![(id, false)];
        while let Some((current, expanded)) = stack.pop() {
            if expanded {
                result.push(current);
            } else {
                stack.push((current, true));
                for &child in self.nodes[current].children.iter().rev() {
                    stack.push((child, false));
                }
            }
        }
        result
    }

    /// Leaf ids below `id` (including `id` itself when it is a leaf), in
    /// left-to-right order, the order that defines leaf labels.
    pub fn leaves_below(&self, id: usize) -> Vec<usize> {
        self.subtree(id)
            .into_iter()
            .filter(|&n| self.nodes[n].is_leaf())
            .collect()
    }

    /// All leaf ids, in label order.
    pub fn leaves(&self) -> Vec<usize> {
        self.leaves_below(self.root)
    }

    /// Ancestor ids of `id`, nearest first, ending at the root.
    pub fn ancestors(&self, id: usize) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(self.nodes[id].parent, move |&p| self.nodes[p].parent)
    }

    /// Gene names of all leaves, in label order.
    pub fn genes(&self) -> Vec<String> {
        self.leaves()
            .into_iter()
            .filter_map(|id| self.nodes[id].gene_name.clone())
            .collect()
    }

    /// Longest root-to-leaf path, in edges.
    pub fn height(&self) -> usize {
        self.leaves()
            .into_iter()
            .map(|leaf| self.ancestors(leaf).count())
            .max()
            .unwrap_or(0)
    }

    /// Indented textual dump of the tree, one line per clade.
    pub fn format(&self) -> String {
        let mut out = String::new();
        let mut stack = vec![(self.root, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            let node = &self.nodes[id];
            for _ in 0..depth {
                out.push('\t');
            }
            out.push_str("clade");
            match node.node_type {
                NodeType::Speciation => out.push_str(" (speciation)"),
                NodeType::Duplication => {
                    let _ = write!(out, " (duplication {})", node.confidence.unwrap_or(1.0));
                }
                NodeType::Dubious => out.push_str(" (dubious)"),
                _ => {}
            }
            if let Some(name) = &node.gene_name {
                let _ = write!(out, " {name}");
            }
            out.push('\n');
            for &child in node.children.iter().rev() {
                stack.push((child, depth + 1));
            }
        }
        out
    }

    pub(crate) fn leaf_id_by_hash(&self, node_hash: u32) -> Option<usize> {
        self.leaves_map.get(&node_hash).copied()
    }

    pub(crate) fn leaf_id_by_name(&self, gene_name: &str) -> Option<usize> {
        self.leaves()
            .into_iter()
            .find(|&id| self.nodes[id].gene_name.as_deref() == Some(gene_name))
    }

    pub(crate) fn taxonomy_by_hash(&self, node_hash: u32) -> Option<&str> {
        self.leaf_id_by_hash(node_hash)
            .and_then(|id| self.nodes[id].taxonomy.as_deref())
    }

    // ── Index ─────────────────────────────────────────────────────────────

    /// Build the interval index in memory and keep it for queries.
    pub fn build_index(&mut self) {
        self.index = Some(GeneTreeIndex::build(self));
    }

    /// Build the interval index and write it to `path`.
    pub fn write_index<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let index = GeneTreeIndex::build(self);
        let mut out = BufWriter::new(File::create(path)?);
        index.write_to(&mut out)?;
        out.flush()?;
        Ok(())
    }

    /// Load an index previously written with [`GeneTree::write_index`].
    /// Replaces any index already attached.
    pub fn load_index<P: AsRef<Path>>(&mut self, path: P) -> Result<(), Error> {
        let mut input = BufReader::new(File::open(path)?);
        self.index = Some(GeneTreeIndex::read_from(&mut input)?);
        Ok(())
    }

    /// The currently attached index, if any.
    pub fn index(&self) -> Option<&GeneTreeIndex> {
        self.index.as_ref()
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Orthologs of `gene_name`, classified by cardinality.
    ///
    /// Empty when no index is attached or the gene is unknown.
    pub fn orthologs(&self, gene_name: &str) -> Vec<OrthologPair> {
        match &self.index {
            Some(index) => classify::orthologs(self, index, gene_name),
            None => Vec::new(),
        }
    }

    /// Paralogs of `gene_name`, classified within / between species.
    ///
    /// Empty when no index is attached or the gene is unknown.
    pub fn paralogs(&self, gene_name: &str) -> Vec<ParalogPair> {
        match &self.index {
            Some(index) => classify::paralogs(self, index, gene_name),
            None => Vec::new(),
        }
    }

    /// Ortholog names by brute-force tree walk; no index required.
    pub fn orthologs_naive(&self, gene_name: &str) -> Vec<String> {
        classify::naive::orthologs_naive(self, gene_name)
    }

    /// Paralog names by brute-force tree walk; no index required.
    pub fn paralogs_naive(&self, gene_name: &str) -> Vec<String> {
        classify::naive::paralogs_naive(self, gene_name)
    }
}
