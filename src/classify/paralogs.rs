//! Indexed paralog classification.
//!
//! Same sliding `(curr, prev)` walk as the ortholog classifier, but labels
//! are claimed at duplication ancestors instead: the leaves first reachable
//! at a duplication have that duplication as their LCA with the query.
//! Deeper ancestors claim labels first. Classification compares taxonomy
//! strings; equal strings mean a within-species pair.

use std::collections::HashSet;

use crate::index::{GeneTreeIndex, LabelRange};
use crate::tree::{GeneTree, NodeType};

use super::{ParalogPair, ParalogType};

/// Classify every paralog of `gene_name`. Empty when the gene is unknown.
pub(crate) fn paralogs(
    tree: &GeneTree,
    index: &GeneTreeIndex,
    gene_name: &str,
) -> Vec<ParalogPair> {
    let Ok(query) = index.leaf(gene_name) else {
        return Vec::new();
    };
    let Some(query_id) = tree.leaf_id_by_hash(query.node_hash) else {
        return Vec::new();
    };
    let query_taxon = tree.node(query_id).taxonomy.clone();

    let mut pairs = Vec::new();
    let mut visited: HashSet<u32> = HashSet::new();
    visited.insert(query.label);
    let mut prev = LabelRange::singleton(query.label);

    for ancestor_id in tree.ancestors(query_id) {
        let hash = tree.node(ancestor_id).node_hash;
        let Some(clade) = index.internal_nodes.get(&hash) else {
            continue;
        };
        if clade.node_type == NodeType::Duplication {
            let (left, right) = clade.range.minus(prev);
            for new_range in [left, right].into_iter().flatten() {
                for label in new_range.iter() {
                    if !visited.insert(label) {
                        continue;
                    }
                    let Some(leaf) = index.leaf_labels.get(&label) else {
                        continue;
                    };
                    let paralog_taxon = tree.taxonomy_by_hash(leaf.node_hash).map(str::to_string);
                    let kind = if paralog_taxon.as_deref().unwrap_or_default()
                        == query_taxon.as_deref().unwrap_or_default()
                    {
                        ParalogType::WithinSpecies
                    } else {
                        ParalogType::BetweenSpecies
                    };
                    pairs.push(ParalogPair {
                        gene_name: gene_name.to_string(),
                        taxon: query_taxon.clone(),
                        paralog_name: leaf.gene_name.clone(),
                        paralog_taxon,
                        kind,
                    });
                }
            }
        }
        prev = clade.range;
    }
    pairs
}
