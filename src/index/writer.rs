//! Index construction and serialisation.
//!
//! Labeling is a single post-order pass: leaves receive dense labels in
//! left-to-right order, each internal interval is the hull of its
//! children's, and duplication nodes contribute their interval to the
//! interval tree. Serialisation is section-oriented (leaves, internals,
//! duplications), all integers little-endian `u32`, strings
//! length-prefixed raw bytes.

use std::cmp::Reverse;
use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};
use log::debug;

use crate::error::Error;
use crate::index::{GeneTreeIndex, IndexedClade, IndexedLeaf, LabelRange};
use crate::tree::{GeneTree, NodeType};

/// Label every leaf by DFS order, reduce internal intervals post-order,
/// and collect duplication intervals.
pub(crate) fn build(tree: &GeneTree) -> GeneTreeIndex {
    let mut leaf_records = Vec::new();
    let mut clades = Vec::new();
    let mut duplications = Vec::new();
    let mut ranges: Vec<Option<LabelRange>> = vec![None; tree.nodes.len()];

    // Post-order guarantees every child's range is known before its parent.
    for id in tree.subtree(tree.root) {
        let node = tree.node(id);
        if node.is_leaf() {
            let label = leaf_records.len() as u32;
            ranges[id] = Some(LabelRange::singleton(label));
            leaf_records.push(IndexedLeaf {
                node_hash: node.node_hash,
                label,
                gene_name: node.gene_name.clone().unwrap_or_default(),
            });
        } else {
            let range = node
                .children
                .iter()
                .filter_map(|&child| ranges[child])
                .reduce(|acc, r| acc.hull(r))
                .expect("post-order visit reaches children before their parent");
            ranges[id] = Some(range);
            clades.push(IndexedClade { node_hash: node.node_hash, range, node_type: node.node_type });
            if node.node_type == NodeType::Duplication {
                duplications.push((range, node.node_hash));
            }
        }
    }

    debug!(
        "indexed {} leaves, {} internal nodes, {} duplication intervals",
        leaf_records.len(),
        clades.len(),
        duplications.len()
    );
    GeneTreeIndex::from_parts(leaf_records, clades, duplications)
}

/// Serialise the three sections. Record order is fixed (leaves by label,
/// internals outermost-first, duplications by interval) so byte-identical
/// input yields a byte-identical index.
pub(crate) fn write<W: Write>(index: &GeneTreeIndex, out: &mut W) -> Result<(), Error> {
    // Section 1: leaves, in label order.
    let mut leaves: Vec<&IndexedLeaf> = index.leaf_labels.values().collect();
    leaves.sort_by_key(|leaf| leaf.label);
    out.write_u32::<LittleEndian>(leaves.len() as u32)?;
    for leaf in leaves {
        out.write_u32::<LittleEndian>(u32::from(NodeType::Leaf))?;
        out.write_u32::<LittleEndian>(leaf.label)?;
        out.write_u32::<LittleEndian>(leaf.gene_name.len() as u32)?;
        out.write_all(leaf.gene_name.as_bytes())?;
        out.write_u32::<LittleEndian>(leaf.node_hash)?;
    }

    // Section 2: internal nodes, outermost interval first.
    let mut clades: Vec<&IndexedClade> = index.internal_nodes.values().collect();
    clades.sort_by_key(|clade| (clade.range.min, Reverse(clade.range.max), clade.node_hash));
    out.write_u32::<LittleEndian>(clades.len() as u32)?;
    for clade in &clades {
        out.write_u32::<LittleEndian>(u32::from(clade.node_type))?;
        out.write_u32::<LittleEndian>(clade.range.min)?;
        out.write_u32::<LittleEndian>(clade.range.max)?;
        out.write_u32::<LittleEndian>(clade.node_hash)?;
    }

    // Section 3: duplication intervals.
    let duplications = index.duplication_records();
    out.write_u32::<LittleEndian>(duplications.len() as u32)?;
    for (range, node_hash) in duplications {
        out.write_u32::<LittleEndian>(u32::from(NodeType::Duplication))?;
        out.write_u32::<LittleEndian>(range.min)?;
        out.write_u32::<LittleEndian>(range.max)?;
        out.write_u32::<LittleEndian>(node_hash)?;
    }

    Ok(())
}
