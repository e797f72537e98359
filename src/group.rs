//! Bucketing of entries into topic sections.
//!
//! The topic key is `"{icon} {topic}"` with underscores in the topic turned
//! into spaces. Keys compare byte-for-byte, so `🐍 Python` and `🐍 python` are
//! different sections. Sections are created in order of first appearance and
//! entries keep the order they were pushed in; the caller feeds them sorted by
//! filename.

use crate::naming::ParsedPageDescriptor;
use crate::types::{NavigationEntry, NavigationManifest, Section};
use std::collections::HashMap;

/// Section key for a descriptor.
pub fn topic_key(descriptor: &ParsedPageDescriptor) -> String {
    format!("{} {}", descriptor.icon, descriptor.topic_text())
}

/// Insertion-ordered builder for [`NavigationManifest`].
#[derive(Debug, Default)]
pub struct TopicGrouper {
    sections: Vec<Section>,
    index: HashMap<String, usize>,
}

impl TopicGrouper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `entry` to the section for `key`, creating the section on first use.
    pub fn push(&mut self, key: String, entry: NavigationEntry) {
        let idx = match self.index.get(&key) {
            Some(&idx) => idx,
            None => {
                self.sections.push(Section {
                    key: key.clone(),
                    entries: Vec::new(),
                });
                self.index.insert(key, self.sections.len() - 1);
                self.sections.len() - 1
            }
        };
        self.sections[idx].entries.push(entry);
    }

    pub fn finish(self) -> NavigationManifest {
        NavigationManifest {
            sections: self.sections,
        }
    }
}
