//! Main module for outline library functionality

pub mod extraction;
pub mod formats;
pub mod lines;
pub mod loader;
pub mod parsing;
pub mod tree;

pub use extraction::{extract, Category, Inventory};
pub use loader::{LoaderError, OutlineLoader};
pub use parsing::{parse, parse_str, OutlineParser, ParseReport, ParserOptions};
pub use tree::Document;
