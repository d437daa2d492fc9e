//! Plugin source configuration.
//!
//! The load pipeline only needs to know where to look and which files to
//! keep; both come from a collaborator implementing [`PluginDefinition`].
//! [`PluginSettings`] is the serde-friendly carrier hosts deserialize their
//! configuration into.

use serde::{Deserialize, Serialize};

/// Where plugins are discovered and which file names qualify.
///
/// `folder` must end with the platform path separator: candidate paths are
/// built by plain concatenation and are never normalized by the scanner.
pub trait PluginDefinition {
    /// Directory scanned (one level, non-recursive) for plugin files.
    fn folder(&self) -> &str;

    /// Substring a file name must contain to count as a plugin candidate.
    /// Empty matches every file in the folder.
    fn pattern(&self) -> &str;
}

/// Plugin section of a host configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginSettings {
    /// Plugin directory, including the trailing separator.
    pub folder: String,

    /// File name substring filter.
    #[serde(default)]
    pub pattern: String,
}

impl PluginSettings {
    /// Create settings from a folder and a file name pattern.
    pub fn new(folder: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            folder: folder.into(),
            pattern: pattern.into(),
        }
    }
}

impl PluginDefinition for PluginSettings {
    fn folder(&self) -> &str {
        &self.folder
    }

    fn pattern(&self) -> &str {
        &self.pattern
    }
}
