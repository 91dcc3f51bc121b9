//! TOML to arrow dialect conversion
//!
//!     This crate converts TOML configuration documents into the arrow dialect: a small
//!     configuration language where values are bound to names with `->`, tables are
//!     written as `([ ... ])` blocks, and a string `?(name)` refers to an earlier
//!     top-level constant.
//!
//!     This is a pure lib, that is, it powers tarrow-cli but is shell agnostic: no code
//!     should be written that supposes a shell environment, be it std print, env vars etc.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── transforms.rs           # toml → arrow convenience functions
//!     ├── formats
//!     │   ├── toml                # parsing, via the `toml` crate
//!     │   ├── arrow               # the dialect serializer
//!     │   ├── json, treeviz       # node tree inspection
//!     │   └── common              # option parsing
//!     ├── ir                      # Node tree and TOML lowering
//!     └── common                  # identifiers, comments, constants
//!
//! Core Algorithm
//!
//!     Conversion is a single pass over the top-level table (see
//!     ./formats/arrow/serializer.rs). Each key is validated, rendered, and bound in a
//!     symbol table owned by that one conversion. Comments are recovered from the raw
//!     source, since the TOML parser drops them, and re-inserted by position.
//!
//!     The TOML grammar itself is never parsed here: the `toml` crate does that, and
//!     ./ir/from_toml.rs lowers its output into the closed node tree once.
//!
//! Dialect Restrictions
//!
//!     Only numbers, tables and `?(name)` references have a representation. Plain
//!     strings, booleans, datetimes and arrays are rejected with
//!     [`ConversionError::UnsupportedType`] when the conversion reaches them, so an
//!     earlier bad key or reference is reported first. All names must match
//!     `[A-Za-z_][A-Za-z0-9_]*`.
pub mod error;
pub mod format;
pub mod formats;
pub mod registry;
pub mod transforms;

pub mod common;
pub mod ir;

pub use error::{ConversionError, FormatError};
pub use format::Format;
pub use formats::arrow::rendering_rules::RenderRules;
pub use formats::arrow::serializer::{ArrowSerializer, Conversion};
pub use ir::nodes::{Document, Node, Number, Table};
pub use registry::FormatRegistry;
pub use transforms::translate;
