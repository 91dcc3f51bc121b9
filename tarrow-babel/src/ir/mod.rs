//! Node tree for tarrow documents.
//!
//! Parsing formats lower their own representation into this tree once; every
//! serializing format (arrow, json, treeviz) reads from it.

pub mod from_toml;
pub mod nodes;
