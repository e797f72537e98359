//! Manifest types handed to the host navigation renderer.
//!
//! The manifest is an ordered mapping from topic key to entries. It is stored
//! as a `Vec<Section>` so that section order (first appearance in the sorted
//! directory listing) survives serialization.

use serde::Serialize;

/// One navigable page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationEntry {
    /// `"{order}. {title}"` with underscores as spaces.
    pub title: String,
    pub icon: String,
    /// Unique across the whole manifest.
    pub slug: String,
    /// Pages directory joined with the filename.
    pub source_path: String,
}

/// A topic bucket: its key and entries in filename order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// `"{icon} {topic}"`, e.g. `"🐍 Python"`.
    pub key: String,
    pub entries: Vec<NavigationEntry>,
}

/// Topic-grouped navigation, in section creation order.
///
/// Empty when the pages directory is missing or holds no matching files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NavigationManifest {
    pub sections: Vec<Section>,
}

impl NavigationManifest {
    /// Entries for a topic key, if that section exists.
    pub fn get(&self, key: &str) -> Option<&[NavigationEntry]> {
        self.sections
            .iter()
            .find(|s| s.key == key)
            .map(|s| s.entries.as_slice())
    }

    /// Topic keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.key.as_str())
    }

    /// Every entry, section by section.
    pub fn entries(&self) -> impl Iterator<Item = &NavigationEntry> {
        self.sections.iter().flat_map(|s| s.entries.iter())
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
