//! Tree construction from a phyloXML document.
//!
//! The builder walks a [`Cursor`] from the document root down to the first
//! `<clade>` inside the first `<phylogeny>` inside `<phyloxml>`, then
//! recursively materialises one arena node per clade, preserving document
//! order among children. Names, taxonomies and confidence scores are read
//! eagerly so the document can be dropped once the tree is built.

use std::collections::HashMap;

use log::debug;

use crate::error::Error;
use crate::tree::node::{GeneTreeNode, NodeType};
use crate::xml::Cursor;

pub(crate) struct BuiltTree {
    pub nodes:      Vec<GeneTreeNode>,
    pub root:       usize,
    pub leaves_map: HashMap<u32, usize>,
}

/// Locate phyloxml → phylogeny → clade and build the node arena.
pub(crate) fn build(doc: &roxmltree::Document) -> Result<BuiltTree, Error> {
    let mut cursor = Cursor::new(doc);
    cursor.to_root();
    if !cursor.match_element("phyloxml") {
        return Err(Error::MalformedInput("missing <phyloxml> root element".into()));
    }
    descend_to(&mut cursor, "phylogeny")?;
    descend_to(&mut cursor, "clade")?;

    let mut nodes = Vec::new();
    let mut leaves_map = HashMap::new();
    let root = build_clade(&cursor, None, &mut nodes, &mut leaves_map)?;
    debug!("built gene tree: {} nodes, {} leaves", nodes.len(), leaves_map.len());
    Ok(BuiltTree { nodes, root, leaves_map })
}

/// Move to the first child whose name contains `name`, scanning siblings.
fn descend_to(cursor: &mut Cursor, name: &str) -> Result<(), Error> {
    if !cursor.to_first_child() {
        return Err(Error::MalformedInput(format!("missing <{name}> element")));
    }
    while !cursor.match_element(name) {
        if !cursor.to_next_sibling() {
            return Err(Error::MalformedInput(format!("missing <{name}> element")));
        }
    }
    Ok(())
}

/// Build the subtree rooted at the clade under `cursor`; returns its arena id.
fn build_clade(
    cursor: &Cursor,
    parent: Option<usize>,
    nodes: &mut Vec<GeneTreeNode>,
    leaves_map: &mut HashMap<u32, usize>,
) -> Result<usize, Error> {
    let id = nodes.len();
    nodes.push(GeneTreeNode {
        id,
        parent,
        children: Vec::new(),
        node_type: NodeType::Other,
        node_hash: cursor.hash_code(),
        gene_name: None,
        taxonomy: None,
        confidence: None,
    });

    // Child clades, in document order.
    let mut walker = cursor.clone();
    if walker.to_first_child() {
        loop {
            if walker.match_element("clade") {
                let child = build_clade(&walker, Some(id), nodes, leaves_map)?;
                nodes[id].children.push(child);
            }
            if !walker.to_next_sibling() {
                break;
            }
        }
    }

    if nodes[id].children.is_empty() {
        nodes[id].node_type = NodeType::Leaf;
        nodes[id].gene_name = first_child_text(cursor, "name");
        nodes[id].taxonomy = read_taxonomy(cursor);
        leaves_map.insert(nodes[id].node_hash, id);
    } else {
        let mut node_type = NodeType::Other;
        let mut events = cursor.clone();
        if events.to_first_child_named("events") {
            if child_has_text(&events, "speciations") {
                node_type = NodeType::Speciation;
            }
            // When both counters are present, duplication wins.
            if child_has_text(&events, "duplications") {
                node_type = NodeType::Duplication;
            }
        }
        if node_type == NodeType::Duplication {
            let confidence = read_confidence(cursor)?;
            nodes[id].confidence = confidence;
            if matches!(confidence, Some(score) if score <= 0.0) {
                node_type = NodeType::Dubious;
            }
        }
        nodes[id].node_type = node_type;
    }

    Ok(id)
}

/// Text of the first child element matching `name`, if any.
fn first_child_text(cursor: &Cursor, name: &str) -> Option<String> {
    let mut child = cursor.clone();
    if child.to_first_child_named(name) {
        child.text().map(str::to_string)
    } else {
        None
    }
}

/// Whether the first child matching `name` carries non-empty text.
fn child_has_text(cursor: &Cursor, name: &str) -> bool {
    let mut child = cursor.clone();
    child.to_first_child_named(name) && child.text().is_some()
}

/// Taxonomy string of a leaf clade: the `<taxonomy>` child's scientific
/// name, its code, or the element's own text, in that order.
fn read_taxonomy(cursor: &Cursor) -> Option<String> {
    let mut taxonomy = cursor.clone();
    if !taxonomy.to_first_child_named("taxonomy") {
        return None;
    }
    for field in ["scientific_name", "code"] {
        let mut inner = taxonomy.clone();
        if inner.to_first_child_named(field) {
            if let Some(text) = inner.text() {
                return Some(text.to_string());
            }
        }
    }
    taxonomy.text().map(str::to_string)
}

/// The clade's `duplication_confidence_score`, scanning all `<confidence>`
/// children for the matching `type` attribute. A non-numeric value is a
/// malformed document; a missing element leaves the score unknown.
fn read_confidence(cursor: &Cursor) -> Result<Option<f64>, Error> {
    let mut child = cursor.clone();
    if !child.to_first_child() {
        return Ok(None);
    }
    loop {
        if child.match_element("confidence")
            && child.attr("type") == Some("duplication_confidence_score")
        {
            let text = child
                .text()
                .ok_or_else(|| Error::MalformedInput("empty duplication confidence".into()))?;
            let score = text.parse::<f64>().map_err(|_| {
                Error::MalformedInput(format!("non-numeric duplication confidence: {text:?}"))
            })?;
            return Ok(Some(score));
        }
        if !child.to_next_sibling() {
            return Ok(None);
        }
    }
}
