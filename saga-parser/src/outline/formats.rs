//! Output formats
//!
//! - JSON: the document tree pretty-printed with a configurable indent (4 spaces by default),
//!   keys in insertion order.
//! - Lines: one item per line, newline terminated, in set order.
use super::tree::Document;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::collections::BTreeSet;
use thiserror::Error;

pub const DEFAULT_JSON_INDENT: usize = 4;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("serialized JSON is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Serialize the document as pretty JSON with `indent` spaces per level.
pub fn to_json(document: &Document, indent: usize) -> Result<String, FormatError> {
    let indent = " ".repeat(indent);
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    document.serialize(&mut serializer)?;
    Ok(String::from_utf8(buffer)?)
}

pub fn to_lines(items: &BTreeSet<String>) -> String {
    let mut output = String::new();
    for item in items {
        output.push_str(item);
        output.push('\n');
    }
    output
}
