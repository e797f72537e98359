//! Shared test utilities for the pagenav test suite.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let manifest = build_navigation(tmp.path()).unwrap();
//!
//! let python = find_section(&manifest, "🐍 Python");
//! assert_eq!(entry_titles(python), vec!["100. Data Types", "1. Basics"]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::types::{NavigationEntry, NavigationManifest};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/pages/` to a temp directory and return it.
///
/// The temp directory itself is the pages directory.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/pages");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Create empty placeholder page files in `dir`.
pub fn write_pages(dir: &Path, names: &[&str]) {
    for name in names {
        std::fs::write(dir.join(name), "").unwrap();
    }
}

// =========================================================================
// Manifest lookups — panics with a clear message on miss
// =========================================================================

/// Find a section's entries by topic key. Panics if not found.
pub fn find_section<'a>(manifest: &'a NavigationManifest, key: &str) -> &'a [NavigationEntry] {
    manifest.get(key).unwrap_or_else(|| {
        let keys = section_keys(manifest);
        panic!("section '{key}' not found. Available: {keys:?}")
    })
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// All topic keys in manifest order.
pub fn section_keys(manifest: &NavigationManifest) -> Vec<&str> {
    manifest.keys().collect()
}

/// Entry titles in section order.
pub fn entry_titles(entries: &[NavigationEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.title.as_str()).collect()
}

/// Entry slugs in section order.
pub fn entry_slugs(entries: &[NavigationEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.slug.as_str()).collect()
}
