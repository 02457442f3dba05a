//! Outline loading utilities
//!
//! This module provides `OutlineLoader` - a utility for loading outline text from files or
//! strings and running the parser and extractor on it. This is used by both the CLI and tests.
//!
//! # Example
//!
//! ```rust
//! use saga_parser::outline::loader::OutlineLoader;
//!
//! // From file
//! let loader = OutlineLoader::from_path("outline.txt").unwrap();
//! let doc = loader.parse();
//!
//! // From string
//! let inventory = OutlineLoader::from_string("Season 1\n*Pilot\n").inventory();
//! ```

use super::extraction::Inventory;
use super::parsing::{OutlineParser, ParseReport};
use super::tree::Document;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error that can occur when loading outlines
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Outline source with parse shortcuts
pub struct OutlineLoader {
    source: String,
}

impl OutlineLoader {
    /// Load from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| LoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(OutlineLoader { source })
    }

    /// Load from a string
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        OutlineLoader {
            source: source.into(),
        }
    }

    /// The source split into lines, line terminators (`\n` or `\r\n`) removed.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.source.lines()
    }

    /// Parse with the default options.
    pub fn parse(&self) -> Document {
        self.parse_with(&OutlineParser::new()).0
    }

    pub fn parse_with(&self, parser: &OutlineParser) -> (Document, ParseReport) {
        parser.parse_with_report(self.lines())
    }

    /// Parse and collect all three category lists.
    pub fn inventory(&self) -> Inventory {
        Inventory::collect(&self.parse())
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}
