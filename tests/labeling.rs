//! Labeling and interval invariants of the index builder.

mod common;

use orthodex::GeneTree;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn indexed(xml: &str) -> GeneTree {
    let mut tree = GeneTree::from_phyloxml(xml).expect("valid phyloXML");
    tree.build_index();
    tree
}

/// Leaf labels are exactly `{0, 1, …, L-1}`: no gaps, no duplicates.
#[test]
fn test_labels_are_dense() {
    let mut rng = StdRng::seed_from_u64(7);
    for &n in &[2usize, 7, 25, 100] {
        let tree = indexed(&common::random_tree(&mut rng, n));
        let index = tree.index().expect("index built");
        let mut labels: Vec<u32> = index.leaf_labels.keys().copied().collect();
        labels.sort_unstable();
        let expected: Vec<u32> = (0..n as u32).collect();
        assert_eq!(labels, expected, "labels must be dense for {n} leaves");
        assert_eq!(index.leaves.len(), n, "one record per gene name");
    }
}

/// Labels follow left-to-right DFS order over the leaves.
#[test]
fn test_labels_follow_dfs_order() {
    let xml = common::phyloxml(&common::speciation(&[
        common::leaf("A", "Homo sapiens"),
        common::speciation(&[
            common::leaf("B", "Mus musculus"),
            common::leaf("C", "Danio rerio"),
        ]),
    ]));
    let tree = indexed(&xml);
    let index = tree.index().expect("index built");
    for (expected, gene) in ["A", "B", "C"].iter().enumerate() {
        assert_eq!(
            index.leaves[*gene].label,
            expected as u32,
            "{gene} should be labelled in DFS order"
        );
    }
}

/// Every descendant leaf's label falls inside its ancestor's interval.
#[test]
fn test_intervals_contain_descendant_leaves() {
    let mut rng = StdRng::seed_from_u64(11);
    for &n in &[5usize, 20, 64] {
        let tree = indexed(&common::random_tree(&mut rng, n));
        let index = tree.index().expect("index built");
        for id in tree.subtree(tree.root) {
            let node = tree.node(id);
            if node.is_leaf() {
                continue;
            }
            let range = index.internal_nodes[&node.node_hash].range;
            for leaf_id in tree.leaves_below(id) {
                let name = tree.node(leaf_id).gene_name.as_deref().expect("leaf name");
                let label = index.leaves[name].label;
                assert!(
                    range.contains(label),
                    "label {label} of {name} outside interval {range:?}"
                );
            }
        }
    }
}

/// Sibling internal nodes carry disjoint intervals.
#[test]
fn test_sibling_intervals_disjoint() {
    let mut rng = StdRng::seed_from_u64(13);
    for &n in &[6usize, 24, 60] {
        let tree = indexed(&common::random_tree(&mut rng, n));
        let index = tree.index().expect("index built");
        for id in tree.subtree(tree.root) {
            let internals: Vec<_> = tree
                .node(id)
                .children
                .iter()
                .filter(|&&c| !tree.node(c).is_leaf())
                .map(|&c| index.internal_nodes[&tree.node(c).node_hash].range)
                .collect();
            for (i, a) in internals.iter().enumerate() {
                for b in &internals[i + 1..] {
                    assert!(a.is_disjoint(*b), "sibling intervals {a:?} and {b:?} overlap");
                }
            }
        }
    }
}

/// The root's interval spans every label.
#[test]
fn test_root_interval_spans_all_labels() {
    let mut rng = StdRng::seed_from_u64(17);
    for &n in &[2usize, 9, 40] {
        let tree = indexed(&common::random_tree(&mut rng, n));
        let index = tree.index().expect("index built");
        let root_range = index.internal_nodes[&tree.node(tree.root).node_hash].range;
        assert_eq!(root_range.min, 0);
        assert_eq!(root_range.max, n as u32 - 1);
    }
}

/// Two builds over byte-identical input serialise to identical bytes.
#[test]
fn test_index_bytes_deterministic() {
    let mut rng = StdRng::seed_from_u64(19);
    let xml = common::random_tree(&mut rng, 30);

    let mut first = Vec::new();
    indexed(&xml)
        .index()
        .expect("index built")
        .write_to(&mut first)
        .expect("write");

    let mut second = Vec::new();
    indexed(&xml)
        .index()
        .expect("index built")
        .write_to(&mut second)
        .expect("write");

    assert_eq!(first, second, "index serialisation must be deterministic");
}
