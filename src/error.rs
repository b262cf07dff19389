use std::io;

use thiserror::Error;

/// Errors produced while parsing trees, reading indexes, or resolving queries.
#[derive(Debug, Error)]
pub enum Error {
    /// The document is XML but does not match the expected
    /// phyloxml → phylogeny → clade structure, or an annotation holds an
    /// unparseable value.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// The index data ended before the declared records could be read.
    #[error("truncated input: unexpected end of index data")]
    TruncatedInput,

    /// The index sections are internally inconsistent.
    #[error("format mismatch: {0}")]
    FormatMismatch(String),

    /// The queried gene is not present in the index.
    #[error("gene not found: {0}")]
    NotFound(String),

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}
