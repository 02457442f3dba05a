//! Outline parsing
//!
//!     Parsing is a single forward pass over the lines. Each line is classified on its own (see
//!     [lines](super::lines)), cleaned, and then placed under the most recent label seen at every
//!     shallower level. Those labels form a path stack: recording a label at some depth discards
//!     every deeper one, so a line can only ever attach to the parent directly above it.
//!
//!     The parser is best-effort and never fails. Lines that cannot be placed are dropped and
//!     reported in a [ParseReport]:
//!
//!         - blank lines
//!         - lines with an unrecognised indentation
//!         - orphaned lines, whose parent level has not been opened yet
//!         - lines whose parent has the wrong shape (a specific under a plain list, a song under
//!           a content that already holds a single song)
//!
//!     Once the tree is built, the reserved template sections are removed from the top level.
use super::lines::{self, LineKind, Unclassified};
use super::tree::{Attribute, Content, Document, Scene, SCENE_SPECIFIC};
use log::debug;
use std::fmt;

/// Top-level sections that are templates rather than real data.
pub const RESERVED_SECTIONS: [&str; 2] = ["Chapter Template", "Extra Songs"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserOptions {
    /// Top-level labels removed after parsing
    pub reserved_sections: Vec<String>,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            reserved_sections: RESERVED_SECTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// A dropped line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based line number
    pub line: usize,
    pub kind: DiagnosticKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    Blank,
    UnrecognizedIndent(usize),
    Orphaned(LineKind),
    ShapeMismatch(LineKind),
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DiagnosticKind::Blank => write!(f, "line {}: blank line", self.line),
            DiagnosticKind::UnrecognizedIndent(n) => {
                write!(f, "line {}: unrecognized indentation of {}", self.line, n)
            }
            DiagnosticKind::Orphaned(kind) => {
                write!(f, "line {}: {} line has no parent", self.line, kind)
            }
            DiagnosticKind::ShapeMismatch(kind) => {
                write!(f, "line {}: {} line does not fit its parent", self.line, kind)
            }
        }
    }
}

impl From<Unclassified> for DiagnosticKind {
    fn from(unclassified: Unclassified) -> Self {
        match unclassified {
            Unclassified::Blank => DiagnosticKind::Blank,
            Unclassified::Indent(n) => DiagnosticKind::UnrecognizedIndent(n),
        }
    }
}

/// Everything the parser dropped, in line order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    diagnostics: Vec<Diagnostic>,
}

impl ParseReport {
    fn push(&mut self, line: usize, kind: DiagnosticKind) {
        let diagnostic = Diagnostic { line, kind };
        debug!("dropped {}", diagnostic);
        self.diagnostics.push(diagnostic);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Diagnostics other than blank lines, which are expected in most outlines.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.kind != DiagnosticKind::Blank)
    }

    pub fn is_clean(&self) -> bool {
        self.warnings().next().is_none()
    }
}

#[derive(Debug, Clone, Default)]
pub struct OutlineParser {
    options: ParserOptions,
}

impl OutlineParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParserOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    pub fn parse<I, S>(&self, lines: I) -> Document
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.parse_with_report(lines).0
    }

    pub fn parse_with_report<I, S>(&self, lines: I) -> (Document, ParseReport)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = TreeBuilder::default();
        let mut report = ParseReport::default();

        for (index, raw) in lines.into_iter().enumerate() {
            let raw = raw.as_ref();
            let outcome = lines::classify(raw)
                .map_err(DiagnosticKind::from)
                .and_then(|kind| builder.apply(kind, raw));
            if let Err(kind) = outcome {
                report.push(index + 1, kind);
            }
        }

        let mut document = builder.document;
        for section in &self.options.reserved_sections {
            document.remove_season(section);
        }
        (document, report)
    }
}

/// Parse lines with the default options.
pub fn parse<I, S>(lines: I) -> Document
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    OutlineParser::new().parse(lines)
}

/// Parse a whole outline source.
pub fn parse_str(source: &str) -> Document {
    parse(source.lines())
}

/// Labels of the currently open node at each depth.
#[derive(Debug, Default)]
struct PathStack {
    labels: Vec<String>,
}

impl PathStack {
    /// The open path, if every level above `depth` is open.
    fn parents(&self, depth: usize) -> Option<&[String]> {
        (self.labels.len() >= depth).then(|| &self.labels[..depth])
    }

    fn enter(&mut self, depth: usize, label: String) {
        self.labels.truncate(depth);
        self.labels.push(label);
    }
}

#[derive(Debug, Default)]
struct TreeBuilder {
    document: Document,
    path: PathStack,
}

impl TreeBuilder {
    fn apply(&mut self, kind: LineKind, raw: &str) -> Result<(), DiagnosticKind> {
        let text = match kind {
            LineKind::Season => lines::clean(lines::strip_bom(raw)),
            _ => lines::clean(raw),
        };
        let depth = kind.depth();
        let parents = self
            .path
            .parents(depth)
            .ok_or(DiagnosticKind::Orphaned(kind))?;

        match kind {
            LineKind::Season => {
                self.document.insert_season(text.clone());
            }
            LineKind::Episode => {
                self.document
                    .season_mut(&parents[0])
                    .ok_or(DiagnosticKind::Orphaned(kind))?
                    .insert_episode(text.clone());
            }
            LineKind::Attribute => {
                self.document
                    .season_mut(&parents[0])
                    .and_then(|season| season.episode_mut(&parents[1]))
                    .ok_or(DiagnosticKind::Orphaned(kind))?
                    .insert_attribute(text.clone());
            }
            LineKind::Content => match attribute_mut(&mut self.document, parents, kind)? {
                Attribute::List(items) => items.push(text.clone()),
                Attribute::Songs(songs) => {
                    songs.insert(text.clone(), Content::default());
                }
            },
            LineKind::Specific => {
                let content = content_mut(&mut self.document, parents, kind)?;
                if parents[3] == SCENE_SPECIFIC {
                    match content {
                        Content::Scenes(scenes) => {
                            scenes.insert(text.clone(), Scene::Pending);
                        }
                        Content::Value(_) => return Err(DiagnosticKind::ShapeMismatch(kind)),
                    }
                } else {
                    *content = Content::Value(text.clone());
                }
            }
            LineKind::SubSpecific => {
                let scene = parents[4].clone();
                match content_mut(&mut self.document, parents, kind)? {
                    Content::Scenes(scenes) => {
                        scenes.insert(scene, Scene::Song(text));
                    }
                    Content::Value(_) => return Err(DiagnosticKind::ShapeMismatch(kind)),
                }
                // Leaf level, nothing to record
                return Ok(());
            }
        }

        self.path.enter(depth, text);
        Ok(())
    }
}

fn attribute_mut<'a>(
    document: &'a mut Document,
    parents: &[String],
    kind: LineKind,
) -> Result<&'a mut Attribute, DiagnosticKind> {
    document
        .season_mut(&parents[0])
        .and_then(|season| season.episode_mut(&parents[1]))
        .and_then(|episode| episode.attribute_mut(&parents[2]))
        .ok_or(DiagnosticKind::Orphaned(kind))
}

fn content_mut<'a>(
    document: &'a mut Document,
    parents: &[String],
    kind: LineKind,
) -> Result<&'a mut Content, DiagnosticKind> {
    match attribute_mut(document, parents, kind)? {
        Attribute::Songs(songs) => songs
            .get_mut(&parents[3])
            .ok_or(DiagnosticKind::Orphaned(kind)),
        Attribute::List(_) => Err(DiagnosticKind::ShapeMismatch(kind)),
    }
}
