//! Arrow dialect conversion tests
//!
//! End-to-end TOML source → arrow text, through the public API.

mod comments;
mod fixtures;
mod scenarios;
