//! Example registry: the fixed catalog of showcase components.
//!
//! DESIGN
//! ======
//! The catalog changes only via source edits, so it is registered once at
//! startup and held in definition order. Source text is re-read from disk
//! on every lookup; at this scale a cache would buy nothing. Add new
//! examples to [`ExampleRegistry::builtin`].

use std::path::{Path, PathBuf};

use serde::Serialize;

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Two records share a slug. Caught at construction, before the
    /// registry is ever served.
    #[error("duplicate slug in example registry: {0}")]
    DuplicateSlug(String),

    /// A known slug's backing file could not be read.
    #[error("failed to read source for '{slug}' at {path}: {source}")]
    UnreadableSource {
        slug: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// =============================================================================
// RECORDS
// =============================================================================

/// A single catalog entry. Metadata only; the source text is attached at
/// lookup time.
#[derive(Debug, Clone)]
pub struct ExampleRecord {
    pub component_name: String,
    pub slug: String,
    /// Profile URL of the contributor who submitted the example.
    pub created_by: String,
    /// Source file path, relative to the registry root.
    pub file_path: PathBuf,
    pub description: String,
    pub tags: Vec<String>,
}

/// A catalog entry joined with the verbatim text of its source file.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Example {
    pub component_name: String,
    pub slug: String,
    pub created_by: String,
    pub description: String,
    pub tags: Vec<String>,
    pub code: String,
}

// =============================================================================
// REGISTRY
// =============================================================================

/// Immutable slug -> record table, constructed once at startup.
pub struct ExampleRegistry {
    root: PathBuf,
    records: Vec<ExampleRecord>,
}

impl ExampleRegistry {
    /// Build a registry from explicit records, rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateSlug`] if two records share a slug.
    pub fn new(root: impl Into<PathBuf>, records: Vec<ExampleRecord>) -> Result<Self, RegistryError> {
        let mut seen = std::collections::HashSet::new();
        for record in &records {
            if !seen.insert(record.slug.as_str()) {
                return Err(RegistryError::DuplicateSlug(record.slug.clone()));
            }
        }
        Ok(Self { root: root.into(), records })
    }

    /// The built-in showcase catalog.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateSlug`] if the table is inconsistent.
    pub fn builtin(root: impl Into<PathBuf>) -> Result<Self, RegistryError> {
        Self::new(root, builtin_records())
    }

    /// Registered records in definition order, without source text.
    #[must_use]
    pub fn records(&self) -> &[ExampleRecord] {
        &self.records
    }

    /// All examples in definition order, each with its source text read
    /// from disk. A single unreadable file aborts the whole listing.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnreadableSource`] for the first record
    /// whose backing file cannot be read.
    pub fn examples(&self) -> Result<Vec<Example>, RegistryError> {
        self.records.iter().map(|record| self.load(record)).collect()
    }

    /// Look up one example by slug, reading its source text from disk.
    ///
    /// An unknown slug is `Ok(None)`, never an error.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnreadableSource`] only when the slug is
    /// known but its backing file cannot be read.
    pub fn example_by_slug(&self, slug: &str) -> Result<Option<Example>, RegistryError> {
        self.records
            .iter()
            .find(|record| record.slug == slug)
            .map(|record| self.load(record))
            .transpose()
    }

    fn load(&self, record: &ExampleRecord) -> Result<Example, RegistryError> {
        let path = self.root.join(&record.file_path);
        let code = std::fs::read_to_string(&path).map_err(|source| RegistryError::UnreadableSource {
            slug: record.slug.clone(),
            path,
            source,
        })?;

        Ok(Example {
            component_name: record.component_name.clone(),
            slug: record.slug.clone(),
            created_by: record.created_by.clone(),
            description: record.description.clone(),
            tags: record.tags.clone(),
            code,
        })
    }
}

// =============================================================================
// BUILT-IN CATALOG
// =============================================================================

fn record(
    component_name: &str,
    slug: &str,
    created_by: &str,
    file_path: &str,
    description: &str,
    tags: &[&str],
) -> ExampleRecord {
    ExampleRecord {
        component_name: component_name.to_owned(),
        slug: slug.to_owned(),
        created_by: created_by.to_owned(),
        file_path: Path::new(file_path).to_path_buf(),
        description: description.to_owned(),
        tags: tags.iter().map(|&t| t.to_owned()).collect(),
    }
}

fn builtin_records() -> Vec<ExampleRecord> {
    vec![
        record(
            "X Sidebar",
            "x-sidebar",
            "https://github.com/Abhijit-Jha",
            "site/examples/x-sidebar.tsx",
            "An animated sidebar navigation component inspired by X (formerly Twitter). \
             Features smooth hover effects and individual icon animations.",
            &["Sidebar", "Navigation", "Animation", "Framer Motion"],
        ),
        record(
            "Glass Dock",
            "glass-dock",
            "https://github.com/mayarj-dev",
            "site/examples/glass-dock.tsx",
            "A macOS-style dock with a frosted glass surface and magnifying icons \
             that scale with cursor proximity.",
            &["Dock", "Navigation", "Glassmorphism"],
        ),
        record(
            "Animated Tabs",
            "animated-tabs",
            "https://github.com/Abhijit-Jha",
            "site/examples/animated-tabs.tsx",
            "A tab strip where the active indicator slides between tabs using a \
             shared layout animation.",
            &["Tabs", "Interface", "Animation"],
        ),
    ]
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;
