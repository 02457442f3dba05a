//! Line Classification
//!
//! Core classification logic for outline lines. A line's kind depends only on its first
//! character and on how much leading whitespace it carries; placement in the tree is the
//! parser's job.
//!
//! | Kind        | First char        | Leading whitespace |
//! |-------------|-------------------|--------------------|
//! | Season      | not `*`, not ` `  | any                |
//! | Episode     | `*`               | 0                  |
//! | Attribute   | ` `               | 3                  |
//! | Content     | ` `               | 6                  |
//! | Specific    | ` `               | 9                  |
//! | SubSpecific | ` `               | 12                 |
use std::fmt;

const BOM: char = '\u{feff}';
const MARKER: char = '*';

/// The six kinds of outline line, from shallowest to deepest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    Season,
    Episode,
    Attribute,
    Content,
    Specific,
    SubSpecific,
}

impl LineKind {
    /// Nesting depth, 0 for seasons.
    pub fn depth(self) -> usize {
        match self {
            LineKind::Season => 0,
            LineKind::Episode => 1,
            LineKind::Attribute => 2,
            LineKind::Content => 3,
            LineKind::Specific => 4,
            LineKind::SubSpecific => 5,
        }
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LineKind::Season => "season",
            LineKind::Episode => "episode",
            LineKind::Attribute => "attribute",
            LineKind::Content => "content",
            LineKind::Specific => "specific",
            LineKind::SubSpecific => "sub-specific",
        };
        f.write_str(name)
    }
}

/// Why a line could not be classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unclassified {
    /// Empty or whitespace only
    Blank,
    /// Starts with a space but the indentation is not 3, 6, 9 or 12
    Indent(usize),
}

/// Determine the kind of a raw (untrimmed) line.
pub fn classify(raw: &str) -> Result<LineKind, Unclassified> {
    if raw.trim().is_empty() {
        return Err(Unclassified::Blank);
    }
    match raw.chars().next() {
        Some(MARKER) => Ok(LineKind::Episode),
        Some(' ') => match leading_whitespace(raw) {
            3 => Ok(LineKind::Attribute),
            6 => Ok(LineKind::Content),
            9 => Ok(LineKind::Specific),
            12 => Ok(LineKind::SubSpecific),
            other => Err(Unclassified::Indent(other)),
        },
        _ => Ok(LineKind::Season),
    }
}

/// Count leading whitespace characters (space, tab, newline, carriage return, form feed,
/// vertical tab).
pub fn leading_whitespace(raw: &str) -> usize {
    raw.chars().take_while(|c| is_outline_whitespace(*c)).count()
}

/// Remove every marker and trim surrounding whitespace.
pub fn clean(raw: &str) -> String {
    let unmarked: String = raw.chars().filter(|c| *c != MARKER).collect();
    unmarked.trim_matches(is_outline_whitespace).to_string()
}

/// Strip a single leading byte-order mark.
pub fn strip_bom(raw: &str) -> &str {
    raw.strip_prefix(BOM).unwrap_or(raw)
}

fn is_outline_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}
