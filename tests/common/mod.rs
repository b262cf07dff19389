//! Shared helpers for the integration tests: phyloXML snippet builders and
//! a seeded random gene-tree generator.
#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::Rng;

pub const TAXA: &[&str] = &[
    "Homo sapiens",
    "Mus musculus",
    "Rattus norvegicus",
    "Danio rerio",
    "Gallus gallus",
];

/// A leaf clade with a gene name and a taxonomy.
pub fn leaf(name: &str, taxon: &str) -> String {
    format!(
        "<clade><name>{name}</name>\
         <taxonomy><scientific_name>{taxon}</scientific_name></taxonomy></clade>"
    )
}

/// An internal clade annotated as a speciation event.
pub fn speciation(children: &[String]) -> String {
    internal("<events><speciations>1</speciations></events>", children)
}

/// An internal clade annotated as a duplication event (no confidence).
pub fn duplication(children: &[String]) -> String {
    internal("<events><duplications>1</duplications></events>", children)
}

/// A duplication with an explicit confidence score; a score ≤ 0 makes the
/// clade dubious.
pub fn duplication_with_confidence(score: f64, children: &[String]) -> String {
    let annotation = format!(
        "<events><duplications>1</duplications></events>\
         <confidence type=\"duplication_confidence_score\">{score}</confidence>"
    );
    internal(&annotation, children)
}

/// An internal clade with no event annotation.
pub fn unannotated(children: &[String]) -> String {
    internal("", children)
}

fn internal(annotation: &str, children: &[String]) -> String {
    format!("<clade>{annotation}{}</clade>", children.concat())
}

/// Wrap a root clade in the phyloxml → phylogeny spine.
pub fn phyloxml(root_clade: &str) -> String {
    format!(
        "<phyloxml xmlns=\"http://www.phyloxml.org\">\
         <phylogeny rooted=\"true\">{root_clade}</phylogeny></phyloxml>"
    )
}

/// A random binary gene tree with `n_leaves` leaves named `G0..`, a mix of
/// speciation / duplication / dubious / unannotated internals, and taxa
/// drawn from [`TAXA`]. Deterministic for a given rng state.
pub fn random_tree(rng: &mut StdRng, n_leaves: usize) -> String {
    let mut counter = 0usize;
    let clade = random_clade(rng, n_leaves, &mut counter);
    phyloxml(&clade)
}

fn random_clade(rng: &mut StdRng, n_leaves: usize, counter: &mut usize) -> String {
    if n_leaves == 1 {
        let name = format!("G{}", *counter);
        *counter += 1;
        let taxon = TAXA[rng.random_range(0..TAXA.len())];
        return leaf(&name, taxon);
    }
    let left = rng.random_range(1..n_leaves);
    let children = [
        random_clade(rng, left, counter),
        random_clade(rng, n_leaves - left, counter),
    ];
    match rng.random_range(0..100u32) {
        0..=54 => speciation(&children),
        55..=79 => duplication(&children),
        80..=89 => duplication_with_confidence(0.0, &children),
        _ => unannotated(&children),
    }
}
