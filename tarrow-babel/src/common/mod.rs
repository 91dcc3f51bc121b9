//! Format-agnostic pieces shared by the arrow serializer and the inspect tooling.

pub mod comments;
pub mod identifier;
pub mod symbols;
