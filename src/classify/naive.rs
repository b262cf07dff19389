//! Brute-force reference classifiers.
//!
//! O(L·depth) walks with no index: at each ancestor of the query, the
//! unvisited leaves of its subtree are exactly the leaves whose LCA with
//! the query is that ancestor. Model-accurate, and the oracle the indexed
//! classifiers are tested against.

use std::collections::HashSet;

use crate::tree::{GeneTree, NodeType};

/// Names of all orthologs of `gene_name` (LCA is speciation or dubious).
pub fn orthologs_naive(tree: &GeneTree, gene_name: &str) -> Vec<String> {
    collect(tree, gene_name, &[NodeType::Speciation, NodeType::Dubious])
}

/// Names of all paralogs of `gene_name` (LCA is a duplication).
pub fn paralogs_naive(tree: &GeneTree, gene_name: &str) -> Vec<String> {
    collect(tree, gene_name, &[NodeType::Duplication])
}

fn collect(tree: &GeneTree, gene_name: &str, wanted: &[NodeType]) -> Vec<String> {
    let Some(query_id) = tree.leaf_id_by_name(gene_name) else {
        return Vec::new();
    };
    let mut names = Vec::new();
    let mut seen: HashSet<usize> = HashSet::new();
    seen.insert(query_id);
    for ancestor in tree.ancestors(query_id) {
        let matches = wanted.contains(&tree.node(ancestor).node_type);
        for leaf in tree.leaves_below(ancestor) {
            if seen.insert(leaf) && matches {
                if let Some(name) = &tree.node(leaf).gene_name {
                    names.push(name.clone());
                }
            }
        }
    }
    names
}
