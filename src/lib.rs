//! # pagenav
//!
//! Builds a navigation manifest from a directory of content pages. The
//! filesystem is the data source: each page's filename carries its order,
//! icon, topic and title, and pages sharing an icon and topic form a section.
//!
//! `100_🐍_Python_Data_Types.py` has order `100`, icon `🐍`, topic `Python` and
//! title fragment `Data_Types`. It lands in section `🐍 Python` as
//! "100. Data Types" with slug `100__Python_Data_Types`.
//!
//! # Pipeline
//!
//! ```text
//! list files (sorted) → parse name → slug → group by topic → manifest
//! ```
//!
//! The whole build is a synchronous, read-only function of the directory
//! listing. Nothing is cached between calls, so building twice from the same
//! directory yields identical manifests and concurrent builds share no state.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`naming`] | `{order}_{icon}_{topic}[_{title}].{ext}` filename parser |
//! | [`slug`] | URL-safe slugs and manifest-wide uniqueness |
//! | [`group`] | Topic keys and insertion-ordered sections |
//! | [`scan`] | Directory listing and manifest assembly |
//! | [`types`] | Manifest types handed to the host (`NavigationEntry`, `Section`) |
//! | [`config`] | Optional `pagenav.toml` loading and validation |
//! | [`output`] | CLI output formatting |
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! let manifest = pagenav::build_navigation(Path::new("pages"))?;
//! for section in &manifest.sections {
//!     println!("{}", section.key);
//!     for entry in &section.entries {
//!         println!("  {} → /{}", entry.title, entry.slug);
//!     }
//! }
//! # Ok::<(), pagenav::scan::ScanError>(())
//! ```

pub mod config;
pub mod group;
pub mod naming;
pub mod output;
pub mod scan;
pub mod slug;
pub mod types;

pub use naming::{ParsedPageDescriptor, parse_page_filename};
pub use scan::{ScanError, build_navigation, build_navigation_with};
pub use types::{NavigationEntry, NavigationManifest, Section};

#[cfg(test)]
pub(crate) mod test_helpers;
