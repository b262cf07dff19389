use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Event classification of a clade.
///
/// Derived from the `<events>` annotation while building the tree; the
/// discriminants double as the wire codes of the index file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u32)]
pub enum NodeType {
    /// Child subtrees diverged because their species diverged.
    Speciation = 0,
    /// Child subtrees diverged by gene duplication within one species.
    Duplication = 1,
    /// Duplication with a confidence score ≤ 0; treated as speciation for
    /// ortholog classification, excluded from the duplication interval set.
    Dubious = 2,
    /// Enumerated for wire compatibility; never produced by the builder.
    GeneSplit = 3,
    Leaf = 4,
    /// Internal node with no usable event annotation.
    Other = 5,
}

/// A single `<clade>` of the gene tree.
///
/// Nodes live in the tree's arena; `parent` and `children` are arena
/// indices, which keeps the parent back-references cycle-free.
#[derive(Debug, Clone)]
pub struct GeneTreeNode {
    pub id:        usize,
    pub parent:    Option<usize>,
    pub children:  Vec<usize>,
    pub node_type: NodeType,
    /// Stable hash of the clade's position in the source document.
    pub node_hash: u32,
    /// Gene identifier of a leaf (`<name>` child).
    pub gene_name: Option<String>,
    /// Taxonomy of a leaf (scientific name, falling back to the code).
    pub taxonomy:  Option<String>,
    /// Duplication confidence score, when annotated.
    pub confidence: Option<f64>,
}

impl GeneTreeNode {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
