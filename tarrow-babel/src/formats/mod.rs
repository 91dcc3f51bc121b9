//! Format implementations
//!
//! `toml` is the only parsing format. `arrow` is the conversion target; `json` and
//! `treeviz` expose the node tree for inspection.

pub mod arrow;
pub mod common;
pub mod json;
pub mod toml;
pub mod treeviz;

pub use self::arrow::ArrowFormat;
pub use self::json::JsonFormat;
pub use self::toml::TomlFormat;
pub use self::treeviz::TreevizFormat;
