//! Orthology and paralogy queries over phyloXML gene trees.
//!
//! # Pipeline
//!
//! ```text
//! phyloXML  →  GeneTree (arena)  →  GeneTreeIndex (on disk)  →  classified pairs
//! ```
//!
//! 1. Parse a tree with [`GeneTree::from_file`] or [`GeneTree::from_phyloxml`].
//! 2. Build the interval index in memory with [`GeneTree::build_index`], or
//!    persist it with [`GeneTree::write_index`] and attach it later with
//!    [`GeneTree::load_index`].
//! 3. Query with [`GeneTree::orthologs`] / [`GeneTree::paralogs`]; every hit
//!    comes back classified (one-to-one / one-to-many / many-to-many, or
//!    within- / between-species).
//!
//! Queries are resolved with a handful of interval tree lookups instead of a
//! full tree walk, so repeated queries against a large tree stay cheap.
//!
//! # Example
//!
//! ```rust
//! use orthodex::GeneTree;
//!
//! let xml = r#"<phyloxml><phylogeny><clade>
//!     <events><speciations>1</speciations></events>
//!     <clade><name>ENSG1</name><taxonomy><scientific_name>Homo sapiens</scientific_name></taxonomy></clade>
//!     <clade><name>ENSMUSG1</name><taxonomy><scientific_name>Mus musculus</scientific_name></taxonomy></clade>
//! </clade></phylogeny></phyloxml>"#;
//!
//! let mut tree = GeneTree::from_phyloxml(xml).unwrap();
//! tree.build_index();
//!
//! let hits = tree.orthologs("ENSG1");
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].ortholog_name, "ENSMUSG1");
//! ```
//!
//! # Feature flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `cli`   | Enables the `orthodex` CLI binary (pulls in `clap`). |

pub mod classify;
pub mod error;
pub mod index;
pub mod prelude;
pub mod tree;
pub mod xml;

pub use classify::{OrthologPair, OrthologType, ParalogPair, ParalogType};
pub use error::Error;
pub use index::{GeneTreeIndex, IndexedClade, IndexedLeaf, LabelRange};
pub use tree::{GeneTree, GeneTreeNode, NodeType};
