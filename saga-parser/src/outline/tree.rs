//! Document tree
//!
//!     The document tree is the structured form of an outline. It has a fixed shape: seasons hold
//!     episodes, episodes hold attributes, and attributes hold either a plain list of entries or,
//!     for the `Songs` attribute only, a mapping of song entries.
//!
//! Structure:
//!
//!         - Document: season label -> Season
//!         - Season: episode label -> Episode
//!         - Episode: attribute label -> Attribute
//!         - Attribute: List(entries) | Songs(content label -> Content)
//!         - Content: Scenes(scene label -> Scene) | Value(song)
//!         - Scene: Pending | Song(song)
//!
//!     Every mapping keeps insertion order, and inserting an existing label replaces its value in
//!     place. Serialization goes through serde and mirrors the shape above exactly: mappings become
//!     JSON objects, lists become arrays, and a content or scene with no deeper structure becomes
//!     an empty object.
//!
//! Examples:
//!
//! Season 1
//! *Pilot*
//!    Characters
//!       Alice
//!    Songs
//!       Opening
//!          Theme Song
//!       Scene Specific
//!          Rooftop
//!             Night Drive
//!
use indexmap::IndexMap;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Attribute label whose children form a song mapping instead of a list.
pub const SONGS: &str = "Songs";

/// Content label whose specifics are scenes with their own song.
pub const SCENE_SPECIFIC: &str = "Scene Specific";

/// Root of the tree: seasons in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Document {
    seasons: IndexMap<String, Season>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create (or reset) a season and return it.
    pub fn insert_season(&mut self, label: impl Into<String>) -> &mut Season {
        let label = label.into();
        self.seasons.insert(label.clone(), Season::default());
        &mut self.seasons[&label]
    }

    pub fn season(&self, label: &str) -> Option<&Season> {
        self.seasons.get(label)
    }

    pub fn season_mut(&mut self, label: &str) -> Option<&mut Season> {
        self.seasons.get_mut(label)
    }

    /// Remove a season, keeping the order of the remaining ones.
    pub fn remove_season(&mut self, label: &str) -> Option<Season> {
        self.seasons.shift_remove(label)
    }

    pub fn seasons(&self) -> impl Iterator<Item = (&str, &Season)> {
        self.seasons.iter().map(|(label, season)| (label.as_str(), season))
    }

    /// All episodes of all seasons, in document order.
    pub fn episodes(&self) -> impl Iterator<Item = (&str, &Episode)> {
        self.seasons.values().flat_map(Season::episodes)
    }

    pub fn len(&self) -> usize {
        self.seasons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seasons.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Season {
    episodes: IndexMap<String, Episode>,
}

impl Season {
    pub fn insert_episode(&mut self, label: impl Into<String>) -> &mut Episode {
        let label = label.into();
        self.episodes.insert(label.clone(), Episode::default());
        &mut self.episodes[&label]
    }

    pub fn episode(&self, label: &str) -> Option<&Episode> {
        self.episodes.get(label)
    }

    pub fn episode_mut(&mut self, label: &str) -> Option<&mut Episode> {
        self.episodes.get_mut(label)
    }

    pub fn episodes(&self) -> impl Iterator<Item = (&str, &Episode)> {
        self.episodes.iter().map(|(label, episode)| (label.as_str(), episode))
    }

    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Episode {
    attributes: IndexMap<String, Attribute>,
}

impl Episode {
    /// Create (or reset) an attribute, shaped by its label.
    pub fn insert_attribute(&mut self, label: impl Into<String>) -> &mut Attribute {
        let label = label.into();
        let attribute = Attribute::for_label(&label);
        self.attributes.insert(label.clone(), attribute);
        &mut self.attributes[&label]
    }

    pub fn attribute(&self, label: &str) -> Option<&Attribute> {
        self.attributes.get(label)
    }

    pub fn attribute_mut(&mut self, label: &str) -> Option<&mut Attribute> {
        self.attributes.get_mut(label)
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &Attribute)> {
        self.attributes
            .iter()
            .map(|(label, attribute)| (label.as_str(), attribute))
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

/// An episode attribute. Only `Songs` carries nested structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Attribute {
    List(Vec<String>),
    Songs(IndexMap<String, Content>),
}

impl Attribute {
    /// The empty attribute a label starts out as.
    pub fn for_label(label: &str) -> Self {
        if label == SONGS {
            Attribute::Songs(IndexMap::new())
        } else {
            Attribute::List(Vec::new())
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Attribute::List(items) => Some(items),
            Attribute::Songs(_) => None,
        }
    }

    pub fn as_songs(&self) -> Option<&IndexMap<String, Content>> {
        match self {
            Attribute::Songs(songs) => Some(songs),
            Attribute::List(_) => None,
        }
    }
}

/// A song entry: either a single song, or scenes each with their own song.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Content {
    Scenes(IndexMap<String, Scene>),
    Value(String),
}

impl Default for Content {
    fn default() -> Self {
        Content::Scenes(IndexMap::new())
    }
}

/// A scene under `Scene Specific`. Pending until its song line is seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Scene {
    #[default]
    Pending,
    Song(String),
}

impl Scene {
    pub fn song(&self) -> Option<&str> {
        match self {
            Scene::Song(song) => Some(song),
            Scene::Pending => None,
        }
    }
}

impl Serialize for Scene {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Scene::Song(song) => serializer.serialize_str(song),
            Scene::Pending => serializer.serialize_map(Some(0))?.end(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_attribute_shape_follows_label() {
        assert_eq!(Attribute::for_label("Characters"), Attribute::List(vec![]));
        assert_eq!(Attribute::for_label(SONGS), Attribute::Songs(IndexMap::new()));
        // Exact match only
        assert_eq!(Attribute::for_label("songs"), Attribute::List(vec![]));
    }

    #[test]
    fn test_reinserting_a_season_resets_it_in_place() {
        let mut doc = Document::new();
        doc.insert_season("One").insert_episode("Pilot");
        doc.insert_season("Two");
        doc.insert_season("One");

        let labels: Vec<_> = doc.seasons().map(|(label, _)| label).collect();
        assert_eq!(labels, vec!["One", "Two"]);
        assert!(doc.season("One").unwrap().is_empty());
    }

    #[test]
    fn test_remove_season_keeps_order() {
        let mut doc = Document::new();
        doc.insert_season("A");
        doc.insert_season("B");
        doc.insert_season("C");

        assert!(doc.remove_season("B").is_some());
        assert!(doc.remove_season("missing").is_none());
        let labels: Vec<_> = doc.seasons().map(|(label, _)| label).collect();
        assert_eq!(labels, vec!["A", "C"]);
    }

    #[test]
    fn test_serializes_every_shape() {
        let mut doc = Document::new();
        let episode = doc.insert_season("S").insert_episode("E");
        if let Attribute::List(items) = episode.insert_attribute("Characters") {
            items.push("Alice".into());
        }
        if let Attribute::Songs(songs) = episode.insert_attribute(SONGS) {
            songs.insert("Opening".into(), Content::Value("Theme".into()));
            songs.insert("Credits".into(), Content::default());
            let mut scenes = IndexMap::new();
            scenes.insert("Rooftop".into(), Scene::Song("Night Drive".into()));
            scenes.insert("Alley".into(), Scene::Pending);
            songs.insert(SCENE_SPECIFIC.into(), Content::Scenes(scenes));
        }

        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(
            value,
            json!({
                "S": {
                    "E": {
                        "Characters": ["Alice"],
                        "Songs": {
                            "Opening": "Theme",
                            "Credits": {},
                            "Scene Specific": {"Rooftop": "Night Drive", "Alley": {}}
                        }
                    }
                }
            })
        );
    }
}
