//! Index deserialisation.
//!
//! The loader is tolerant the way the format demands: a record carrying a
//! known type code that does not belong to its section is skipped, while an
//! unknown code is a [`Error::FormatMismatch`] and a short read is a
//! [`Error::TruncatedInput`]. Partial loads are never exposed.

use std::io::{self, Read};

use byteorder::{LittleEndian, ReadBytesExt};
use log::debug;

use crate::error::Error;
use crate::index::{GeneTreeIndex, IndexedClade, IndexedLeaf, LabelRange};
use crate::tree::NodeType;

pub(crate) fn read<R: Read>(input: &mut R) -> Result<GeneTreeIndex, Error> {
    let leaf_records = read_leaf_section(input)?;
    let clades = read_internal_section(input)?;
    let duplications = read_duplication_section(input)?;
    debug!(
        "loaded index: {} leaves, {} internal nodes, {} duplication intervals",
        leaf_records.len(),
        clades.len(),
        duplications.len()
    );
    Ok(GeneTreeIndex::from_parts(leaf_records, clades, duplications))
}

fn read_u32<R: Read>(input: &mut R) -> Result<u32, Error> {
    input.read_u32::<LittleEndian>().map_err(map_eof)
}

fn map_eof(e: io::Error) -> Error {
    if e.kind() == io::ErrorKind::UnexpectedEof {
        Error::TruncatedInput
    } else {
        Error::Io(e)
    }
}

fn read_node_type<R: Read>(input: &mut R) -> Result<NodeType, Error> {
    let code = read_u32(input)?;
    NodeType::try_from(code)
        .map_err(|_| Error::FormatMismatch(format!("unknown node type code {code}")))
}

fn read_leaf_section<R: Read>(input: &mut R) -> Result<Vec<IndexedLeaf>, Error> {
    let count = read_u32(input)?;
    let mut records = Vec::new();
    for _ in 0..count {
        let node_type = read_node_type(input)?;
        if node_type != NodeType::Leaf {
            // Out-of-place record: consume an internal-shaped body.
            let _ = read_u32(input)?;
            let _ = read_u32(input)?;
            let _ = read_u32(input)?;
            continue;
        }
        let label = read_u32(input)?;
        let name_len = read_u32(input)?;
        let mut name = Vec::new();
        input
            .by_ref()
            .take(u64::from(name_len))
            .read_to_end(&mut name)
            .map_err(map_eof)?;
        if name.len() != name_len as usize {
            return Err(Error::TruncatedInput);
        }
        let gene_name = String::from_utf8(name)
            .map_err(|_| Error::FormatMismatch("gene name is not valid UTF-8".into()))?;
        let node_hash = read_u32(input)?;
        records.push(IndexedLeaf { node_hash, label, gene_name });
    }
    Ok(records)
}

fn read_internal_section<R: Read>(input: &mut R) -> Result<Vec<IndexedClade>, Error> {
    let count = read_u32(input)?;
    let mut clades = Vec::new();
    for _ in 0..count {
        let node_type = read_node_type(input)?;
        let min = read_u32(input)?;
        let max = read_u32(input)?;
        let node_hash = read_u32(input)?;
        if node_type == NodeType::Leaf {
            continue; // out-of-place record
        }
        clades.push(IndexedClade { node_hash, range: LabelRange::new(min, max), node_type });
    }
    Ok(clades)
}

fn read_duplication_section<R: Read>(input: &mut R) -> Result<Vec<(LabelRange, u32)>, Error> {
    let count = read_u32(input)?;
    let mut duplications = Vec::new();
    for _ in 0..count {
        let node_type = read_node_type(input)?;
        let start = read_u32(input)?;
        let stop = read_u32(input)?;
        let node_hash = read_u32(input)?;
        if node_type == NodeType::Duplication {
            duplications.push((LabelRange::new(start, stop), node_hash));
        }
    }
    Ok(duplications)
}
