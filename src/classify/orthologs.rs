//! Indexed ortholog classification.
//!
//! The walk from the query leaf to the root keeps a sliding `(curr, prev)`
//! interval pair: `curr` is the interval of the current ancestor, `prev`
//! that of the previous one (initially the query's own label). Labels in
//! `curr \ prev` are exactly the leaves whose LCA with the query is this
//! ancestor. At a speciation (or dubious) ancestor those
//! labels are orthologs; the cardinality of each follows from the count of
//! duplication ancestors passed so far and from whether the label sits in
//! a duplication subtree below the ancestor:
//!
//! |                        | no duplication on path | duplication on path |
//! |------------------------|------------------------|---------------------|
//! | not in dup subtree     | one-to-one             | one-to-many         |
//! | in dup subtree         | one-to-many            | many-to-many        |

use std::collections::HashSet;

use crate::index::{GeneTreeIndex, LabelRange};
use crate::tree::{GeneTree, NodeType};

use super::{OrthologPair, OrthologType};

/// Classify every ortholog of `gene_name`. Empty when the gene is unknown.
pub(crate) fn orthologs(
    tree: &GeneTree,
    index: &GeneTreeIndex,
    gene_name: &str,
) -> Vec<OrthologPair> {
    let Ok(query) = index.leaf(gene_name) else {
        return Vec::new();
    };
    let Some(query_id) = tree.leaf_id_by_hash(query.node_hash) else {
        return Vec::new();
    };
    let query_taxon = tree.node(query_id).taxonomy.clone();

    let mut one_to_one: Vec<u32> = Vec::new();
    let mut one_to_many: Vec<u32> = Vec::new();
    let mut many_to_many: Vec<u32> = Vec::new();
    let mut visited: HashSet<u32> = HashSet::new();
    visited.insert(query.label);

    let mut prev = LabelRange::singleton(query.label);
    let mut dup_on_path = 0u32;

    for ancestor_id in tree.ancestors(query_id) {
        let hash = tree.node(ancestor_id).node_hash;
        let Some(clade) = index.internal_nodes.get(&hash) else {
            continue;
        };
        match clade.node_type {
            NodeType::Duplication => dup_on_path += 1,
            NodeType::Speciation | NodeType::Dubious => {
                let (left, right) = clade.range.minus(prev);
                for new_range in [left, right].into_iter().flatten() {
                    let dup_ranges = index.duplications_within(new_range);
                    let mut assign = |label: u32, in_dup_subtree: bool| {
                        if !visited.insert(label) {
                            return;
                        }
                        let bucket = match (dup_on_path > 0, in_dup_subtree) {
                            (false, false) => &mut one_to_one,
                            (true, true) => &mut many_to_many,
                            _ => &mut one_to_many,
                        };
                        bucket.push(label);
                    };
                    // Walk the range, switching between the merged
                    // duplication subintervals and the gaps around them.
                    let mut next = new_range.min;
                    for dup in &dup_ranges {
                        for label in next..dup.min {
                            assign(label, false);
                        }
                        for label in dup.iter() {
                            assign(label, true);
                        }
                        next = dup.max + 1;
                    }
                    for label in next..=new_range.max {
                        assign(label, false);
                    }
                }
            }
            _ => {}
        }
        prev = clade.range;
    }

    let buckets = [
        (one_to_one, OrthologType::OneToOne),
        (one_to_many, OrthologType::OneToMany),
        (many_to_many, OrthologType::ManyToMany),
    ];
    let mut pairs = Vec::new();
    for (labels, kind) in buckets {
        for label in labels {
            let Some(leaf) = index.leaf_labels.get(&label) else {
                continue;
            };
            pairs.push(OrthologPair {
                gene_name: gene_name.to_string(),
                taxon: query_taxon.clone(),
                ortholog_name: leaf.gene_name.clone(),
                ortholog_taxon: tree.taxonomy_by_hash(leaf.node_hash).map(str::to_string),
                kind,
            });
        }
    }
    pairs
}
