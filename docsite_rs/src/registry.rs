//! Section registry: the fixed, ordered mapping from section key to fragment path.
//!
//! The registry is validated once at construction and is immutable afterwards.
//! Keys end up verbatim in `id` attributes and `#key` anchors, so anything that
//! would need escaping there is rejected up front.

use crate::error::ConfigError;
use heck::ToTitleCase;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionEntry {
    /// Section identifier, used as the element id.
    pub key: String,
    /// Relative path of the HTML fragment.
    pub path: String,
    /// Navigation label; derived from the key when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl SectionEntry {
    /// Entry without an explicit title.
    pub fn new(key: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            path: path.into(),
            title: None,
        }
    }

    /// Set the navigation label.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Navigation label for this section (`techStack` -> `Tech Stack`).
    pub fn label(&self) -> String {
        match &self.title {
            Some(title) => title.clone(),
            None => self.key.to_title_case(),
        }
    }

    /// In-page anchor pointing at this section.
    pub fn anchor(&self) -> String {
        format!("#{}", self.key)
    }
}

/// Ordered, validated, immutable set of sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<SectionEntry>", into = "Vec<SectionEntry>")]
pub struct SectionRegistry {
    entries: Vec<SectionEntry>,
}

impl SectionRegistry {
    /// Build a registry, preserving the given order.
    pub fn new(entries: Vec<SectionEntry>) -> Result<Self, ConfigError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            validate_key(&entry.key)?;
            if entry.path.trim().is_empty() {
                return Err(ConfigError::EmptyPath(entry.key.clone()));
            }
            if !seen.insert(entry.key.as_str()) {
                return Err(ConfigError::DuplicateKey(entry.key.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// Entries in registry order.
    pub fn iter(&self) -> std::slice::Iter<'_, SectionEntry> {
        self.entries.iter()
    }

    /// Look up an entry by key.
    pub fn get(&self, key: &str) -> Option<&SectionEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no sections are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SectionRegistry {
    /// The documentation site's stock sections.
    fn default() -> Self {
        Self {
            entries: vec![
                SectionEntry::new("features", "sections/features.html"),
                SectionEntry::new("techStack", "sections/tech-stack.html"),
                SectionEntry::new("installation", "sections/installation.html"),
                SectionEntry::new("projectStructure", "sections/project-structure.html"),
                SectionEntry::new("apiIntegration", "sections/api-integration.html")
                    .with_title("API Integration"),
                SectionEntry::new("databaseSchema", "sections/database-schema.html"),
                SectionEntry::new("uiuxDesign", "sections/uiux-design.html")
                    .with_title("UI/UX Design"),
            ],
        }
    }
}

impl TryFrom<Vec<SectionEntry>> for SectionRegistry {
    type Error = ConfigError;

    fn try_from(entries: Vec<SectionEntry>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl From<SectionRegistry> for Vec<SectionEntry> {
    fn from(registry: SectionRegistry) -> Self {
        registry.entries
    }
}

impl<'a> IntoIterator for &'a SectionRegistry {
    type Item = &'a SectionEntry;
    type IntoIter = std::slice::Iter<'a, SectionEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn validate_key(key: &str) -> Result<(), ConfigError> {
    if key.is_empty() {
        return Err(ConfigError::EmptyKey);
    }
    let invalid = key.starts_with('#')
        || key
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '<' | '>' | '&'));
    if invalid {
        return Err(ConfigError::InvalidKey(key.to_string()));
    }
    Ok(())
}
