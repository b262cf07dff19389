//! Index serialisation: round trips, truncation, tolerant reading.

mod common;

use std::fs;

use orthodex::{Error, GeneTree, GeneTreeIndex, NodeType};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn out_path(name: &str) -> String {
    fs::create_dir_all("test_outputs").expect("create test_outputs");
    format!("test_outputs/{name}.gtidx")
}

fn put_u32(buf: &mut Vec<u8>, value: u32) {
    buf.extend_from_slice(&value.to_le_bytes());
}

/// Query results after write → load match querying the in-memory index.
#[test]
fn test_roundtrip_preserves_query_results() {
    let mut rng = StdRng::seed_from_u64(99);
    let xml = common::random_tree(&mut rng, 40);
    let path = out_path("roundtrip");

    let mut built = GeneTree::from_phyloxml(&xml).expect("valid phyloXML");
    built.build_index();
    built.write_index(&path).expect("write index");

    let mut loaded = GeneTree::from_phyloxml(&xml).expect("valid phyloXML");
    loaded.load_index(&path).expect("load index");

    for gene in built.genes() {
        let mut expected: Vec<_> = built
            .orthologs(&gene)
            .into_iter()
            .map(|p| (p.ortholog_name, p.kind))
            .collect();
        let mut actual: Vec<_> = loaded
            .orthologs(&gene)
            .into_iter()
            .map(|p| (p.ortholog_name, p.kind))
            .collect();
        expected.sort();
        actual.sort();
        assert_eq!(actual, expected, "ortholog mismatch for {gene}");

        let mut expected: Vec<_> = built
            .paralogs(&gene)
            .into_iter()
            .map(|p| (p.paralog_name, p.kind))
            .collect();
        let mut actual: Vec<_> = loaded
            .paralogs(&gene)
            .into_iter()
            .map(|p| (p.paralog_name, p.kind))
            .collect();
        expected.sort();
        actual.sort();
        assert_eq!(actual, expected, "paralog mismatch for {gene}");
    }
}

/// An index missing the tail of its duplication section is rejected
/// wholesale with `TruncatedInput`.
#[test]
fn test_truncated_index_rejected() {
    let xml = common::phyloxml(&common::speciation(&[
        common::duplication(&[
            common::leaf("A", "Homo sapiens"),
            common::leaf("B", "Homo sapiens"),
        ]),
        common::duplication(&[
            common::leaf("C", "Mus musculus"),
            common::leaf("D", "Mus musculus"),
        ]),
    ]));
    let path = out_path("truncated");
    let tree = GeneTree::from_phyloxml(&xml).expect("valid phyloXML");
    tree.write_index(&path).expect("write index");

    let bytes = fs::read(&path).expect("read back");
    let cut = bytes.len() - 8;
    let short_path = out_path("truncated_cut");
    fs::write(&short_path, &bytes[..cut]).expect("write truncated");

    let mut reloaded = GeneTree::from_phyloxml(&xml).expect("valid phyloXML");
    let err = reloaded.load_index(&short_path).expect_err("must reject");
    assert!(matches!(err, Error::TruncatedInput), "got {err:?}");
}

/// An empty file fails on the very first section count.
#[test]
fn test_empty_index_rejected() {
    let mut empty: &[u8] = &[];
    let err = GeneTreeIndex::read_from(&mut empty).expect_err("must reject");
    assert!(matches!(err, Error::TruncatedInput), "got {err:?}");
}

/// Records with a known but out-of-place type code are skipped; the rest
/// of the section loads normally.
#[test]
fn test_out_of_place_records_skipped() {
    let mut bytes = Vec::new();
    // Leaf section: one real leaf, one speciation record (internal-shaped).
    put_u32(&mut bytes, 2);
    put_u32(&mut bytes, u32::from(NodeType::Leaf));
    put_u32(&mut bytes, 0); // label
    put_u32(&mut bytes, 1); // name length
    bytes.push(b'A');
    put_u32(&mut bytes, 11); // node hash
    put_u32(&mut bytes, u32::from(NodeType::Speciation));
    put_u32(&mut bytes, 0);
    put_u32(&mut bytes, 1);
    put_u32(&mut bytes, 99);
    // Internal section: one speciation, one stray leaf-coded record.
    put_u32(&mut bytes, 2);
    put_u32(&mut bytes, u32::from(NodeType::Speciation));
    put_u32(&mut bytes, 0);
    put_u32(&mut bytes, 1);
    put_u32(&mut bytes, 50);
    put_u32(&mut bytes, u32::from(NodeType::Leaf));
    put_u32(&mut bytes, 0);
    put_u32(&mut bytes, 0);
    put_u32(&mut bytes, 51);
    // Duplication section: one speciation-coded record, dropped.
    put_u32(&mut bytes, 1);
    put_u32(&mut bytes, u32::from(NodeType::Speciation));
    put_u32(&mut bytes, 0);
    put_u32(&mut bytes, 1);
    put_u32(&mut bytes, 50);

    let index = GeneTreeIndex::read_from(&mut bytes.as_slice()).expect("tolerant load");
    assert_eq!(index.leaves.len(), 1);
    assert_eq!(index.leaf_labels.len(), 1);
    assert_eq!(index.internal_nodes.len(), 1);
    assert_eq!(index.duplication_count(), 0);
}

/// An unknown type code is a format mismatch, not a skip.
#[test]
fn test_unknown_type_code_rejected() {
    let mut bytes = Vec::new();
    put_u32(&mut bytes, 1);
    put_u32(&mut bytes, 99); // no such node type
    put_u32(&mut bytes, 0);
    put_u32(&mut bytes, 1);
    put_u32(&mut bytes, 7);

    let err = GeneTreeIndex::read_from(&mut bytes.as_slice()).expect_err("must reject");
    assert!(matches!(err, Error::FormatMismatch(_)), "got {err:?}");
}

/// Loading a second index replaces the first.
#[test]
fn test_load_replaces_previous_index() {
    let xml = common::phyloxml(&common::speciation(&[
        common::leaf("A", "Homo sapiens"),
        common::leaf("B", "Mus musculus"),
    ]));
    let path = out_path("reload");
    let mut tree = GeneTree::from_phyloxml(&xml).expect("valid phyloXML");
    tree.write_index(&path).expect("write index");

    tree.load_index(&path).expect("first load");
    tree.load_index(&path).expect("second load");
    assert_eq!(tree.orthologs("A").len(), 1);
}

/// A missing index file surfaces as an I/O error.
#[test]
fn test_missing_index_file_is_io_error() {
    let xml = common::phyloxml(&common::speciation(&[
        common::leaf("A", "Homo sapiens"),
        common::leaf("B", "Mus musculus"),
    ]));
    let mut tree = GeneTree::from_phyloxml(&xml).expect("valid phyloXML");
    let err = tree
        .load_index("test_outputs/does_not_exist.gtidx")
        .expect_err("must fail");
    assert!(matches!(err, Error::Io(_)), "got {err:?}");
}
