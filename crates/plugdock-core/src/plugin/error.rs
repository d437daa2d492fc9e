//! Error types for the plugin load pipeline.

use std::fmt;

use thiserror::Error;

/// Result alias used across the plugin module.
pub type Result<T> = std::result::Result<T, PluginError>;

/// Errors produced while scanning for and loading plugins.
#[derive(Debug, Error)]
pub enum PluginError {
    /// The configured plugin folder could not be listed. Fatal to the whole
    /// call: no loads are attempted.
    #[error("plugin folder {folder} is not readable: {source}")]
    DirectoryRead {
        /// The folder as configured, verbatim.
        folder: String,
        #[source]
        source: std::io::Error,
    },

    /// A candidate could not be opened as a native module. Panics
    /// intercepted by the loader's fault barrier resurface as this variant.
    #[error("load failed: {0}")]
    LoadFailed(String),

    /// The registry refused an otherwise successfully opened module.
    #[error("registration rejected: {0}")]
    Rejected(String),

    /// A symbol lookup on a loaded module came up empty.
    #[error("symbol not found: {0}")]
    SymbolNotFound(String),

    /// One or more candidates in a batch failed.
    #[error(transparent)]
    Aggregate(#[from] AggregateError),
}

/// A single candidate that failed to load.
///
/// `index` is the candidate's zero-based position in the scanned batch; it
/// exists purely for diagnostics and follows the scan order of the folder.
#[derive(Debug)]
pub struct LoadFailure {
    /// Position of the candidate in the batch.
    pub index: usize,
    /// Candidate path as produced by the scanner.
    pub path: String,
    /// What went wrong: open failure, contained panic or registry rejection.
    pub cause: PluginError,
}

impl fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "opening plugin {} ({}): {}", self.index, self.path, self.cause)
    }
}

impl std::error::Error for LoadFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.cause)
    }
}

/// Composite error for a batch in which at least one candidate failed.
///
/// The message states the total failure count followed by each failure on
/// its own line, in encounter order.
#[derive(Debug)]
pub struct AggregateError {
    failures: Vec<LoadFailure>,
}

impl AggregateError {
    /// Build the aggregate from a non-empty failure list. The loader never
    /// constructs an aggregate for a clean batch.
    pub(crate) fn new(failures: Vec<LoadFailure>) -> Self {
        debug_assert!(!failures.is_empty());
        Self { failures }
    }

    /// Per-candidate failures, in encounter order.
    pub fn failures(&self) -> &[LoadFailure] {
        &self.failures
    }
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "plugin loader found {} error(s):", self.failures.len())?;
        for failure in &self.failures {
            write!(f, "\n{failure}")?;
        }
        Ok(())
    }
}

impl std::error::Error for AggregateError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure(index: usize, path: &str, message: &str) -> LoadFailure {
        LoadFailure {
            index,
            path: path.to_string(),
            cause: PluginError::LoadFailed(message.to_string()),
        }
    }

    #[test]
    fn load_failure_display_carries_index_path_and_cause() {
        let text = failure(1, "/plugins/b.so", "bad magic").to_string();
        assert_eq!(text, "opening plugin 1 (/plugins/b.so): load failed: bad magic");
    }

    #[test]
    fn aggregate_display_states_count_and_one_line_per_failure() {
        let aggregate = AggregateError::new(vec![
            failure(0, "/plugins/a.so", "bad magic"),
            failure(2, "/plugins/c.so", "missing symbol table"),
        ]);

        let text = aggregate.to_string();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("plugin loader found 2 error(s):"));
        assert_eq!(
            lines.next(),
            Some("opening plugin 0 (/plugins/a.so): load failed: bad magic")
        );
        assert_eq!(
            lines.next(),
            Some("opening plugin 2 (/plugins/c.so): load failed: missing symbol table")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn aggregate_is_transparent_through_plugin_error() {
        let err = PluginError::from(AggregateError::new(vec![failure(0, "/p/a.so", "boom")]));
        assert!(err.to_string().starts_with("plugin loader found 1 error(s):"));
    }

    #[test]
    fn load_failure_source_is_the_cause() {
        use std::error::Error as _;

        let fail = failure(0, "/plugins/a.so", "bad magic");
        let source = fail.source().expect("cause should be exposed as source");
        assert_eq!(source.to_string(), "load failed: bad magic");
    }
}
