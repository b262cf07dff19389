//! Cursor over a parsed XML document.
//!
//! The tree builder never sees `roxmltree` directly; it navigates through a
//! [`Cursor`], which supports exactly the moves the builder needs: to root /
//! first child / next sibling / parent, plus name, text and attribute reads
//! and a stable per-position hash.
//!
//! Element name matching is case-insensitive substring containment, so
//! namespaced documents (`phy:clade`) and spelling variants are accepted.

use roxmltree::{Document, Node};

/// Stateful navigator over a parsed XML document.
///
/// Cloning a cursor clones only its position; recursive descents clone so
/// sibling walks do not disturb each other.
#[derive(Clone)]
pub struct Cursor<'a, 'input> {
    doc:  &'a Document<'input>,
    node: Option<Node<'a, 'input>>,
}

impl<'a, 'input> Cursor<'a, 'input> {
    /// A cursor positioned on the document's root element.
    pub fn new(doc: &'a Document<'input>) -> Self {
        Self { doc, node: Some(doc.root_element()) }
    }

    /// Move back to the document's root element.
    pub fn to_root(&mut self) {
        self.node = Some(self.doc.root_element());
    }

    /// Move to the first element child. Stays put and returns `false` if
    /// the current element has no element children.
    pub fn to_first_child(&mut self) -> bool {
        match self.node.and_then(|n| n.children().find(|c| c.is_element())) {
            Some(child) => {
                self.node = Some(child);
                true
            }
            None => false,
        }
    }

    /// Move to the first element child whose name matches `name`.
    pub fn to_first_child_named(&mut self, name: &str) -> bool {
        let hit = self
            .node
            .and_then(|n| n.children().find(|c| c.is_element() && name_matches(*c, name)));
        match hit {
            Some(child) => {
                self.node = Some(child);
                true
            }
            None => false,
        }
    }

    /// Move to the next element sibling, skipping text and comment nodes.
    pub fn to_next_sibling(&mut self) -> bool {
        let mut next = self.node.and_then(|n| n.next_sibling());
        while let Some(n) = next {
            if n.is_element() {
                self.node = Some(n);
                return true;
            }
            next = n.next_sibling();
        }
        false
    }

    /// Move to the parent element.
    pub fn to_parent(&mut self) -> bool {
        match self.node.and_then(|n| n.parent()).filter(|p| p.is_element()) {
            Some(parent) => {
                self.node = Some(parent);
                true
            }
            None => false,
        }
    }

    /// Lowercased name of the current element; empty when off-document.
    pub fn element_name(&self) -> String {
        self.node
            .map(|n| n.tag_name().name().to_ascii_lowercase())
            .unwrap_or_default()
    }

    /// Trimmed text content of the current element, if non-empty.
    pub fn text(&self) -> Option<&'a str> {
        self.node
            .and_then(|n| n.text())
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    /// Value of the attribute `name` on the current element.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.node.and_then(|n| n.attribute(name))
    }

    /// Case-insensitive substring match against the current element name.
    pub fn match_element(&self, name: &str) -> bool {
        self.node.map_or(false, |n| name_matches(n, name))
    }

    /// Index of the current node in document order; `None` when off-document.
    pub fn current_index(&self) -> Option<usize> {
        self.node.map(|n| n.id().get() as usize)
    }

    /// Stable per-position hash, injective over positions in one document.
    pub fn hash_code(&self) -> u32 {
        self.node.map(|n| n.id().get() as u32).unwrap_or(u32::MAX)
    }
}

fn name_matches(node: Node, name: &str) -> bool {
    node.tag_name()
        .name()
        .to_ascii_lowercase()
        .contains(&name.to_ascii_lowercase())
}
