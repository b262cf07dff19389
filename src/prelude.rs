//! Convenience re-exports for the most commonly used types.
//!
//! ```rust
//! use orthodex::prelude::*;
//! ```

pub use crate::classify::{OrthologPair, OrthologType, ParalogPair, ParalogType};
pub use crate::error::Error;
pub use crate::index::{GeneTreeIndex, IndexedClade, IndexedLeaf, LabelRange};
pub use crate::tree::{GeneTree, GeneTreeNode, NodeType};
