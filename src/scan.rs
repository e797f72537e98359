//! Directory scanning and manifest assembly.
//!
//! Lists the page files directly inside a pages directory, parses each name,
//! and groups the results into a [`NavigationManifest`]:
//!
//! ```text
//! pages/
//! ├── 1_🐍_Python_Basics.py             # 🐍 Python → "1. Basics"
//! ├── 210_📊_Streamlit_Forms.py         # 📊 Streamlit → "210. Forms"
//! ├── 2_📊_Streamlit_Basics.py          # 📊 Streamlit → "2. Basics"
//! ├── ollama_basics.py                  # no order/icon prefix → skipped
//! ├── __init__.py                       # skipped
//! └── python_basics/                    # directories are never pages
//! ```
//!
//! ## Ordering
//!
//! Filenames are sorted lexically before parsing. That single sort decides
//! both the section order (first appearance) and the entry order inside each
//! section. The numeric `order` field is display text and plays no part:
//! `1000_...` sorts before `200_...`.
//!
//! ## Missing Directory
//!
//! A pages directory that doesn't exist yields an empty manifest. So does one
//! with no matching files. Callers check [`NavigationManifest::is_empty`].
//!
//! Every call rebuilds the manifest from the filesystem; nothing is cached.

use crate::config::NavConfig;
use crate::group::{TopicGrouper, topic_key};
use crate::naming::parse_page_filename;
use crate::slug::{SlugRegistry, candidate_slug};
use crate::types::{NavigationEntry, NavigationManifest};
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to list directory: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// Build the manifest for `dir` using the default page extension.
pub fn build_navigation(dir: &Path) -> Result<NavigationManifest, ScanError> {
    build_navigation_with(dir, &NavConfig::default())
}

/// Build the manifest for `dir` using the extension from `config`.
///
/// `config.pages_dir` is not consulted; the host resolves the directory.
pub fn build_navigation_with(
    dir: &Path,
    config: &NavConfig,
) -> Result<NavigationManifest, ScanError> {
    let extension = config.extension.as_str();
    let filenames = list_page_files(dir, extension)?;

    let mut slugs = SlugRegistry::new();
    let mut grouper = TopicGrouper::new();
    let mut skipped = 0usize;

    for filename in &filenames {
        let Some(descriptor) = parse_page_filename(filename, extension) else {
            tracing::debug!(file = %filename, "skipping page with unrecognized name");
            skipped += 1;
            continue;
        };

        let slug = slugs.claim(candidate_slug(&descriptor, extension));
        let entry = NavigationEntry {
            title: descriptor.display_title(),
            icon: descriptor.icon.clone(),
            slug,
            source_path: dir.join(filename).to_string_lossy().to_string(),
        };
        grouper.push(topic_key(&descriptor), entry);
    }

    let manifest = grouper.finish();
    tracing::info!(
        dir = %dir.display(),
        sections = manifest.len(),
        pages = slugs.len(),
        skipped,
        "built navigation"
    );
    Ok(manifest)
}

/// Names of files directly in `dir` ending in `.{extension}`, sorted lexically.
///
/// Returns an empty list if `dir` doesn't exist; any other failure to stat it
/// is an error. Subdirectories (including symlinks to directories) and names
/// that aren't valid UTF-8 are left out.
pub fn list_page_files(dir: &Path, extension: &str) -> Result<Vec<String>, ScanError> {
    if !dir.try_exists()? {
        tracing::debug!(dir = %dir.display(), "pages directory missing");
        return Ok(Vec::new());
    }
    if !dir.is_dir() {
        return Err(ScanError::NotADirectory(dir.to_path_buf()));
    }

    let suffix = format!(".{extension}");
    let mut names = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        // file_type() doesn't follow links; path().is_dir() does
        if entry.file_type().is_dir() || entry.path().is_dir() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            tracing::debug!(path = %entry.path().display(), "skipping non-UTF-8 filename");
            continue;
        };
        if name.ends_with(&suffix) {
            names.push(name.to_string());
        }
    }

    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use std::collections::HashSet;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn fixture_sections_in_listing_order() {
        let tmp = setup_fixtures();
        let manifest = build_navigation(tmp.path()).unwrap();

        assert_eq!(
            section_keys(&manifest),
            vec![
                "🐍 Python",
                "📊 Streamlit",
                "📚 10",
                "🦙 10",
                "🚀 10",
                "⭐ 10",
            ]
        );
    }

    #[test]
    fn fixture_titles_and_slugs() {
        let tmp = setup_fixtures();
        let manifest = build_navigation(tmp.path()).unwrap();

        let python = find_section(&manifest, "🐍 Python");
        // "100_" sorts before "1_" because '0' < '_'
        assert_eq!(entry_titles(python), vec!["100. Data Types", "1. Basics"]);
        assert_eq!(entry_slugs(python), vec!["100__Python_Data_Types", "1__Python_Basics"]);

        let ollama = find_section(&manifest, "🦙 10");
        assert_eq!(entry_titles(ollama), vec!["500. Steps Ollama Basics Features"]);
    }

    #[test]
    fn fixture_skips_unmatched_and_directories() {
        let tmp = setup_fixtures();
        let manifest = build_navigation(tmp.path()).unwrap();

        let sources: Vec<&str> = manifest.entries().map(|e| e.source_path.as_str()).collect();
        assert!(!sources.iter().any(|s| s.ends_with("ollama_basics.py")));
        assert!(!sources.iter().any(|s| s.ends_with("__init__.py")));
        assert!(!sources.iter().any(|s| s.contains("python_basics")));
        assert!(!sources.iter().any(|s| s.ends_with("README.md")));
    }

    #[test]
    fn source_path_joins_dir_and_filename() {
        let tmp = TempDir::new().unwrap();
        write_pages(tmp.path(), &["1_🐍_Python.py"]);

        let manifest = build_navigation(tmp.path()).unwrap();
        let entry = manifest.entries().next().unwrap();
        assert_eq!(
            entry.source_path,
            tmp.path().join("1_🐍_Python.py").to_string_lossy()
        );
        assert_eq!(entry.icon, "🐍");
    }

    #[test]
    fn missing_directory_gives_empty_manifest() {
        let tmp = TempDir::new().unwrap();
        let manifest = build_navigation(&tmp.path().join("nope")).unwrap();
        assert!(manifest.is_empty());
    }

    #[test]
    fn empty_directory_gives_empty_manifest() {
        let tmp = TempDir::new().unwrap();
        assert!(build_navigation(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn only_unmatched_files_gives_empty_manifest() {
        let tmp = TempDir::new().unwrap();
        write_pages(tmp.path(), &["__init__.py", "helpers.py", "notes.txt"]);
        assert!(build_navigation(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn file_path_is_error() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("pages");
        fs::write(&file, "").unwrap();

        let result = build_navigation(&file);
        assert!(matches!(result, Err(ScanError::NotADirectory(_))));
    }

    #[test]
    fn lexical_not_numeric_order() {
        let tmp = TempDir::new().unwrap();
        write_pages(
            tmp.path(),
            &["200_📊_Streamlit_Forms.py", "1000_📊_Streamlit_Caching.py", "30_📊_Streamlit_Layout.py"],
        );

        let manifest = build_navigation(tmp.path()).unwrap();
        let section = find_section(&manifest, "📊 Streamlit");
        assert_eq!(
            entry_titles(section),
            vec!["1000. Caching", "200. Forms", "30. Layout"]
        );
    }

    #[test]
    fn glyph_collisions_get_unique_slugs() {
        let tmp = TempDir::new().unwrap();
        write_pages(tmp.path(), &["1_🐍_Intro.py", "1_📊_Intro.py", "1_🦙_Intro.py"]);

        let manifest = build_navigation(tmp.path()).unwrap();
        let slugs: Vec<&str> = manifest.entries().map(|e| e.slug.as_str()).collect();
        assert_eq!(slugs.len(), 3);
        let unique: HashSet<&str> = slugs.iter().copied().collect();
        assert_eq!(unique.len(), 3);
        // 🐍 (U+1F40D) < 📊 (U+1F4CA) < 🦙 (U+1F999)
        assert_eq!(slugs, vec!["1__Intro", "1__Intro-2", "1__Intro-3"]);
    }

    #[test]
    fn custom_extension_from_config() {
        let tmp = TempDir::new().unwrap();
        write_pages(tmp.path(), &["1_📄_Guide_Intro.md", "2_🐍_Python.py"]);

        let config = NavConfig {
            extension: "md".into(),
            ..NavConfig::default()
        };
        let manifest = build_navigation_with(tmp.path(), &config).unwrap();
        assert_eq!(section_keys(&manifest), vec!["📄 Guide"]);
        assert_eq!(manifest.entries().next().unwrap().slug, "1__Guide_Intro");
    }

    #[test]
    fn directory_named_like_a_page_is_ignored() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("5_🐍_Python_Pkg.py")).unwrap();
        write_pages(tmp.path(), &["6_🐍_Python_Real.py"]);

        let names = list_page_files(tmp.path(), "py").unwrap();
        assert_eq!(names, vec!["6_🐍_Python_Real.py"]);
    }

    #[cfg(unix)]
    #[test]
    fn symlink_to_directory_is_ignored() {
        let tmp = TempDir::new().unwrap();
        let pkg = tmp.path().join("pkg");
        fs::create_dir_all(&pkg).unwrap();
        std::os::unix::fs::symlink(&pkg, tmp.path().join("5_🐍_Python_Pkg.py")).unwrap();

        let manifest = build_navigation(tmp.path()).unwrap();
        assert!(manifest.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn symlink_to_file_is_listed() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("target.txt");
        fs::write(&target, "").unwrap();
        std::os::unix::fs::symlink(&target, tmp.path().join("5_🐍_Python_Link.py")).unwrap();

        let names = list_page_files(tmp.path(), "py").unwrap();
        assert_eq!(names, vec!["5_🐍_Python_Link.py"]);
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_parent_is_error_not_empty() {
        // Stat through a regular file fails with ENOTDIR, not NotFound
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("plain");
        fs::write(&file, "").unwrap();

        let result = build_navigation(&file.join("pages"));
        assert!(matches!(result, Err(ScanError::Io(_))));
    }

    #[test]
    fn list_filters_extension_and_sorts() {
        let tmp = TempDir::new().unwrap();
        write_pages(tmp.path(), &["b.py", "a.py", "c.pyc", "d.md", "e.py.bak"]);

        let names = list_page_files(tmp.path(), "py").unwrap();
        assert_eq!(names, vec!["a.py", "b.py"]);
    }

    #[test]
    fn rebuild_is_identical() {
        let tmp = setup_fixtures();
        let first = build_navigation(tmp.path()).unwrap();
        let second = build_navigation(tmp.path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn rebuild_sees_new_files() {
        let tmp = TempDir::new().unwrap();
        write_pages(tmp.path(), &["1_🐍_Python.py"]);
        assert_eq!(build_navigation(tmp.path()).unwrap().entries().count(), 1);

        write_pages(tmp.path(), &["2_🐍_Python_More.py"]);
        assert_eq!(build_navigation(tmp.path()).unwrap().entries().count(), 2);
    }
}
