//! Ortholog and paralog classification.
//!
//! Two leaves are orthologs when their lowest common ancestor is a
//! speciation (or dubious) node, paralogs when it is a duplication. The
//! indexed classifiers never walk subtrees: they slide a pair of label
//! intervals up the ancestor path and answer everything else with interval
//! tree lookups. [`naive`] holds the brute-force reference used by the
//! tests and benchmarks.

pub mod naive;
mod orthologs;
mod paralogs;

pub(crate) use orthologs::orthologs;
pub(crate) use paralogs::paralogs;

use std::fmt;

/// Relationship cardinality of an ortholog pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OrthologType {
    OneToOne,
    OneToMany,
    ManyToMany,
}

impl fmt::Display for OrthologType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OrthologType::OneToOne => "1-to-1",
            OrthologType::OneToMany => "1-to-many",
            OrthologType::ManyToMany => "many-to-many",
        })
    }
}

/// Species relationship of a paralog pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ParalogType {
    WithinSpecies,
    BetweenSpecies,
}

impl fmt::Display for ParalogType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ParalogType::WithinSpecies => "within-species",
            ParalogType::BetweenSpecies => "between-species",
        })
    }
}

/// One classified ortholog of a query gene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrthologPair {
    pub gene_name:      String,
    pub taxon:          Option<String>,
    pub ortholog_name:  String,
    pub ortholog_taxon: Option<String>,
    pub kind:           OrthologType,
}

/// One classified paralog of a query gene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParalogPair {
    pub gene_name:     String,
    pub taxon:         Option<String>,
    pub paralog_name:  String,
    pub paralog_taxon: Option<String>,
    pub kind:          ParalogType,
}
