//! Batch plugin loading with per-candidate fault isolation.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use tracing::{info, warn};

use super::error::{AggregateError, LoadFailure, PluginError, Result};
use super::native::NativeOpener;
use super::types::{ModuleOpener, PluginRegistry};

/// Outcome of one load batch.
///
/// `loaded + failures.len()` always equals the number of candidates the
/// loader was given. Constructed fresh per call and returned to the caller;
/// no state survives between batches.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Candidates successfully opened and registered.
    pub loaded: usize,
    /// Candidates that failed, in scan order.
    pub failures: Vec<LoadFailure>,
}

impl BatchReport {
    /// True when every candidate registered.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Collapse the failures into a single aggregate error.
    ///
    /// Returns `None` for a clean batch; an empty aggregate is never
    /// constructed.
    pub fn into_error(self) -> Option<PluginError> {
        if self.failures.is_empty() {
            None
        } else {
            Some(PluginError::Aggregate(AggregateError::new(self.failures)))
        }
    }
}

/// Loads candidate files one by one and hands opened modules to a registry.
///
/// The opener is injected at construction and fixed for the loader's
/// lifetime, so concurrent use on disjoint registries is safe and tests can
/// script open, error and panic behavior without real shared libraries.
pub struct PluginLoader {
    opener: Box<dyn ModuleOpener>,
}

impl PluginLoader {
    /// Loader backed by the process dynamic-loading facility.
    pub fn new() -> Self {
        Self::with_opener(NativeOpener)
    }

    /// Loader backed by a caller-provided opener.
    pub fn with_opener(opener: impl ModuleOpener + 'static) -> Self {
        Self {
            opener: Box::new(opener),
        }
    }

    /// Attempt every candidate in order.
    ///
    /// A failing candidate is recorded and the batch moves on: the blast
    /// radius of one bad plugin is exactly one failure entry.
    pub fn load(&self, candidates: &[String], registry: &mut dyn PluginRegistry) -> BatchReport {
        let mut report = BatchReport::default();
        for (index, path) in candidates.iter().enumerate() {
            match self.open_one(path, registry) {
                Ok(()) => report.loaded += 1,
                Err(cause) => {
                    warn!(index, %path, error = %cause, "plugin failed to load");
                    report.failures.push(LoadFailure {
                        index,
                        path: path.clone(),
                        cause,
                    });
                }
            }
        }
        info!(
            loaded = report.loaded,
            failed = report.failures.len(),
            "plugin batch complete"
        );
        report
    }

    /// Open one candidate and hand it to the registry.
    ///
    /// The whole open-and-register sequence runs behind a fault barrier: a
    /// panic raised by the host loading facility (or the registry) is
    /// intercepted here and converted into an ordinary error. Nothing
    /// outside this function traps panics.
    fn open_one(&self, path: &str, registry: &mut dyn PluginRegistry) -> Result<()> {
        let attempt = panic::catch_unwind(AssertUnwindSafe(|| {
            let module = self.opener.open(path)?;
            registry.register(module)
        }));
        match attempt {
            Ok(outcome) => outcome,
            Err(payload) => Err(contained_fault(payload)),
        }
    }
}

impl Default for PluginLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert an intercepted panic payload into an ordinary error.
///
/// A payload that already is a [`PluginError`] passes through unchanged;
/// string payloads become the error message.
fn contained_fault(payload: Box<dyn Any + Send>) -> PluginError {
    match payload.downcast::<PluginError>() {
        Ok(error) => *error,
        Err(payload) => {
            let message = if let Some(text) = payload.downcast_ref::<String>() {
                text.clone()
            } else if let Some(text) = payload.downcast_ref::<&str>() {
                (*text).to_string()
            } else {
                "unrecognized panic payload".to_string()
            };
            PluginError::LoadFailed(message)
        }
    }
}
