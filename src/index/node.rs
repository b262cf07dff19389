use crate::index::range::LabelRange;
use crate::tree::NodeType;

/// Leaf record of the index: a labelled gene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedLeaf {
    pub node_hash: u32,
    pub label:     u32,
    pub gene_name: String,
}

/// Internal-node record of the index: the label interval beneath a clade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexedClade {
    pub node_hash: u32,
    pub range:     LabelRange,
    pub node_type: NodeType,
}
