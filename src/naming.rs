//! Filename parsing for the `{order}_{icon}_{topic}[_{title}].{ext}` convention.
//!
//! Every page file carries its navigation metadata in its name: a numeric
//! prefix, a symbolic icon (usually an emoji), a topic word, and an optional
//! title fragment. This module turns one filename into a [`ParsedPageDescriptor`]
//! or rejects it.
//!
//! ## Topic / Title Split
//!
//! Topic and title are both free-form underscore-delimited text, so the split
//! between them is ambiguous. The topic is matched **non-greedily** and the
//! title fragment **greedily**: the topic is always the first segment after the
//! icon, and everything after it is the title fragment.
//!
//! - `100_🐍_Python_Data_Types.py` → topic `Python`, title fragment `Data_Types`
//! - `1_🐍_Python_Basics.py` → topic `Python`, title fragment `Basics`
//! - `1_Python_Basics.py` → icon `Python`, topic `Basics`, no title fragment
//!
//! No attempt is made to guess semantic word boundaries.
//!
//! ## Display Titles
//!
//! Underscores become spaces and the order number is prepended, so titles stay
//! unique within a section: `200_📊_Streamlit_Text_Elements.py` → "200. Text Elements".
//! Without a title fragment the topic doubles as the title: `1_🐍_Python.py` → "1. Python".

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Matches a filename stem (extension already removed).
///
/// Group 1: order, group 2: icon, group 3: topic (non-greedy), group 4: title fragment.
static PAGE_STEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)_([^_]+)_(.+?)(?:_(.+))?$").unwrap());

/// Result of parsing a page filename like `200_📊_Streamlit_Forms.py`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedPageDescriptor {
    /// Numeric prefix as written (`"007"` stays `"007"`). Display text only, never a sort key.
    pub order: String,
    /// Everything between the first and second underscore.
    pub icon: String,
    /// First segment after the icon.
    pub topic: String,
    /// Remainder after the topic, underscores preserved. `None` when absent.
    pub title_fragment: Option<String>,
    /// The filename this descriptor was parsed from, extension included.
    pub raw_filename: String,
}

impl ParsedPageDescriptor {
    /// Display title: `"{order}. {title_fragment or topic}"` with underscores as spaces.
    pub fn display_title(&self) -> String {
        let base = self.title_fragment.as_deref().unwrap_or(&self.topic);
        format!("{}. {}", self.order, base.replace('_', " "))
    }

    /// Topic text with underscores converted to spaces.
    pub fn topic_text(&self) -> String {
        self.topic.replace('_', " ")
    }
}

/// Parse a page filename following the naming convention.
///
/// `extension` is given without the leading dot. The match is exact and
/// case-sensitive: `Page.PY` is not a `py` page. Returns `None` for anything
/// that doesn't fit; callers skip those files.
///
/// - `"200_Streamlit_Basics_Text_Elements.py"` → order `200`, icon `Streamlit`, topic `Basics`,
///   title fragment `Text_Elements`
/// - `"1_Python_Basics.py"` → order `1`, icon `Python`, topic `Basics`, no title fragment
/// - `"__init__.py"`, `"notes.py"`, `"1_🐍.py"` → `None`
pub fn parse_page_filename(filename: &str, extension: &str) -> Option<ParsedPageDescriptor> {
    let stem = filename
        .strip_suffix(extension)
        .and_then(|s| s.strip_suffix('.'))?;
    let caps = PAGE_STEM.captures(stem)?;

    Some(ParsedPageDescriptor {
        order: caps[1].to_string(),
        icon: caps[2].to_string(),
        topic: caps[3].to_string(),
        title_fragment: caps.get(4).map(|m| m.as_str().to_string()),
        raw_filename: filename.to_string(),
    })
}
