mod builder;
pub mod genetree;
pub mod node;

pub use genetree::GeneTree;
pub use node::{GeneTreeNode, NodeType};
