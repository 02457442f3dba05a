//! Item extraction
//!
//! Walks every episode of a document and gathers the unique entries of one category. Results
//! are `BTreeSet`s, so callers always see them in lexicographic order.
//!
//! Characters and locations are the entries of the matching list attribute. Songs come from the
//! `Songs` mapping: a plain entry contributes its song, an entry with scenes contributes the song
//! of each scene. Episodes without the attribute contribute nothing.
use super::tree::{Attribute, Content, Document, SONGS};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Characters,
    Locations,
    Songs,
}

impl Category {
    pub fn all() -> [Category; 3] {
        [Category::Characters, Category::Locations, Category::Songs]
    }

    /// The episode attribute this category is read from.
    pub fn attribute(self) -> &'static str {
        match self {
            Category::Characters => "Characters",
            Category::Locations => "Locations",
            Category::Songs => SONGS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Characters => "characters",
            Category::Locations => "locations",
            Category::Songs => "songs",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::all()
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

/// Collect the unique entries of `category` across the whole document.
pub fn extract(document: &Document, category: Category) -> BTreeSet<String> {
    let mut items = BTreeSet::new();
    for (_, episode) in document.episodes() {
        let Some(attribute) = episode.attribute(category.attribute()) else {
            continue;
        };
        match (category, attribute) {
            (Category::Songs, Attribute::Songs(songs)) => {
                for content in songs.values() {
                    match content {
                        Content::Value(song) => {
                            items.insert(song.clone());
                        }
                        Content::Scenes(scenes) => {
                            items.extend(scenes.values().filter_map(|s| s.song()).map(String::from));
                        }
                    }
                }
            }
            (Category::Songs, Attribute::List(_)) => {}
            (_, Attribute::List(entries)) => items.extend(entries.iter().cloned()),
            (_, Attribute::Songs(_)) => {}
        }
    }
    items
}

/// All three category lists of one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    pub characters: BTreeSet<String>,
    pub locations: BTreeSet<String>,
    pub songs: BTreeSet<String>,
}

impl Inventory {
    pub fn collect(document: &Document) -> Self {
        Self {
            characters: extract(document, Category::Characters),
            locations: extract(document, Category::Locations),
            songs: extract(document, Category::Songs),
        }
    }

    pub fn get(&self, category: Category) -> &BTreeSet<String> {
        match category {
            Category::Characters => &self.characters,
            Category::Locations => &self.locations,
            Category::Songs => &self.songs,
        }
    }
}
