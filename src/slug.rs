//! URL-safe, manifest-unique page identifiers.
//!
//! A slug starts from the filename stem and keeps only `[A-Za-z0-9_-]`, which
//! drops the emoji icons this naming convention is built around:
//!
//! - `100_🐍_Python_Data_Types.py` → `100__Python_Data_Types`
//! - `7_🎯_🚀.py` → `page_7` (nothing alphabetic survives)
//!
//! Distinct filenames can still collide once glyphs are stripped
//! (`1_🐍_Intro.py` and `1_📊_Intro.py` both become `1__Intro`). [`SlugRegistry`]
//! resolves that by suffixing later arrivals: `1__Intro`, `1__Intro-2`, ...

use crate::naming::ParsedPageDescriptor;
use std::collections::HashSet;

/// Compute the slug candidate for one page, before uniqueness is enforced.
///
/// Falls back to `page_{order}` when the stripped stem has no ASCII letter
/// left, since a bare run of digits and underscores says nothing about the page.
pub fn candidate_slug(descriptor: &ParsedPageDescriptor, extension: &str) -> String {
    let filename = descriptor.raw_filename.as_str();
    let stem = filename
        .strip_suffix(extension)
        .and_then(|s| s.strip_suffix('.'))
        .unwrap_or(filename);

    let cleaned: String = stem
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect();

    if cleaned.chars().any(|c| c.is_ascii_alphabetic()) {
        cleaned
    } else {
        format!("page_{}", descriptor.order)
    }
}

/// Tracks slugs handed out while one manifest is being built.
///
/// Lives for a single build; nothing is shared between builds.
#[derive(Debug, Default)]
pub struct SlugRegistry {
    taken: HashSet<String>,
}

impl SlugRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve `candidate`, or the first free `{candidate}-N` (N ≥ 2) if it is taken.
    pub fn claim(&mut self, candidate: String) -> String {
        if self.taken.insert(candidate.clone()) {
            return candidate;
        }
        let mut n = 2u32;
        loop {
            let suffixed = format!("{candidate}-{n}");
            if self.taken.insert(suffixed.clone()) {
                tracing::debug!(slug = %candidate, resolved = %suffixed, "slug collision");
                return suffixed;
            }
            n += 1;
        }
    }

    /// Number of slugs claimed so far.
    pub fn len(&self) -> usize {
        self.taken.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taken.is_empty()
    }
}
