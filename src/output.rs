//! CLI output formatting.
//!
//! Output is information-first: each section header is the topic key, each
//! entry is listed by positional index and title, with the slug and source
//! file as indented context lines.
//!
//! ```text
//! 🐍 Python
//! 001 100. Data Types
//!     Slug: 100__Python_Data_Types
//!     Source: pages/100_🐍_Python_Data_Types.py
//! 002 1. Basics
//!     Slug: 1__Python_Basics
//!     Source: pages/1_🐍_Python_Basics.py
//!
//! 📊 Streamlit
//! 001 210. Forms
//!     ...
//! ```
//!
//! `format_*` functions return lines and do no I/O; `print_*` wrappers write
//! them to stdout.

use crate::types::NavigationManifest;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Render the full manifest as a section/entry tree.
pub fn format_manifest(manifest: &NavigationManifest) -> Vec<String> {
    if manifest.is_empty() {
        return vec!["No pages found".to_string()];
    }

    let mut lines = Vec::new();
    for (i, section) in manifest.sections.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.push(section.key.clone());
        for (pos, entry) in section.entries.iter().enumerate() {
            lines.push(format!("{} {}", format_index(pos + 1), entry.title));
            lines.push(format!("{}Slug: {}", indent(1), entry.slug));
            lines.push(format!("{}Source: {}", indent(1), entry.source_path));
        }
    }
    lines
}

/// One-line totals, e.g. `2 sections, 5 pages`.
pub fn format_summary(manifest: &NavigationManifest) -> String {
    let sections = manifest.len();
    let pages = manifest.entries().count();
    format!(
        "{} {}, {} {}",
        sections,
        plural(sections, "section", "sections"),
        pages,
        plural(pages, "page", "pages")
    )
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 { one } else { many }
}

pub fn print_manifest(manifest: &NavigationManifest) {
    for line in format_manifest(manifest) {
        println!("{}", line);
    }
}
