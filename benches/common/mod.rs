//! Shared random gene-tree generator for the benchmarks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const TAXA: &[&str] = &["Homo sapiens", "Mus musculus", "Rattus norvegicus", "Danio rerio"];

fn random_clade(rng: &mut StdRng, n_leaves: usize, counter: &mut usize) -> String {
    if n_leaves == 1 {
        let name = format!("G{}", *counter);
        *counter += 1;
        let taxon = TAXA[rng.random_range(0..TAXA.len())];
        return format!(
            "<clade><name>{name}</name>\
             <taxonomy><scientific_name>{taxon}</scientific_name></taxonomy></clade>"
        );
    }
    let left = rng.random_range(1..n_leaves);
    let events = if rng.random_range(0..100u32) < 70 {
        "<events><speciations>1</speciations></events>"
    } else {
        "<events><duplications>1</duplications></events>"
    };
    format!(
        "<clade>{events}{}{}</clade>",
        random_clade(rng, left, counter),
        random_clade(rng, n_leaves - left, counter)
    )
}

/// A random binary gene tree with `n_leaves` leaves, 70% speciation / 30%
/// duplication internals. Deterministic for a given seed.
pub fn random_tree(n_leaves: usize, seed: u64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut counter = 0;
    format!(
        "<phyloxml><phylogeny>{}</phylogeny></phyloxml>",
        random_clade(&mut rng, n_leaves, &mut counter)
    )
}
