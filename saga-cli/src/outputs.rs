//! CLI artifacts
//!
//! This module defines everything the CLI can produce from one outline: the JSON document and
//! one list per category. Each artifact can be rendered to a string (for `--print`) or written
//! under the output directory with a name derived from the configured base name.

use anyhow::{anyhow, Context, Result};
use saga_config::OutputConfig;
use saga_parser::outline::formats::{to_json, to_lines};
use saga_parser::outline::{Category, Document, Inventory};
use std::fs;
use std::path::{Path, PathBuf};

/// All available artifact names, in write order
pub const AVAILABLE_ARTIFACTS: [&str; 4] = ["json", "characters", "locations", "songs"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    Json,
    List(Category),
}

impl Artifact {
    pub fn all() -> Vec<Artifact> {
        std::iter::once(Artifact::Json)
            .chain(Category::all().into_iter().map(Artifact::List))
            .collect()
    }

    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "json" => Ok(Artifact::Json),
            other => other
                .parse::<Category>()
                .map(Artifact::List)
                .map_err(|e| anyhow!(e)),
        }
    }

    /// e.g. `Casual Roleplay.json`, `Casual Roleplay Songs.txt`
    pub fn file_name(self, base_name: &str) -> String {
        match self {
            Artifact::Json => format!("{}.json", base_name),
            Artifact::List(category) => format!("{} {}.txt", base_name, category.attribute()),
        }
    }
}

pub fn render(
    artifact: Artifact,
    document: &Document,
    inventory: &Inventory,
    json_indent: usize,
) -> Result<String> {
    match artifact {
        Artifact::Json => Ok(to_json(document, json_indent)?),
        Artifact::List(category) => Ok(to_lines(inventory.get(category))),
    }
}

/// Write every artifact into `dir`, returning the written paths.
pub fn write_all(
    dir: &Path,
    output: &OutputConfig,
    document: &Document,
    inventory: &Inventory,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for artifact in Artifact::all() {
        let path = dir.join(artifact.file_name(&output.base_name));
        let contents = render(artifact, document, inventory, output.json_indent)?;
        fs::write(&path, contents)
            .with_context(|| format!("could not write {}", path.display()))?;
        written.push(path);
    }
    Ok(written)
}
