//! Native plugin loading.
//!
//! Plugins are native libraries (.so/.dylib/.dll) discovered on disk and
//! loaded into the running process. Each successfully opened module is
//! handed to a [`PluginRegistry`] for validation and storage; this module
//! owns only the load pipeline itself.
//!
//! ```text
//!   folder + pattern                        per candidate
//! ┌────────────────┐    candidates    ┌──────────────────────┐
//! │    scanner     │ ───────────────► │     PluginLoader     │
//! └────────────────┘                  │   open ─► register   │
//!                                     │    (fault barrier)   │
//!                                     └──────────┬───────────┘
//!                                                ▼
//!                                          BatchReport
//!                                  loaded + failures, scan order
//! ```
//!
//! One malformed plugin never aborts the batch: open errors, registry
//! rejections and panics raised inside the host loading facility all
//! collapse into per-candidate [`LoadFailure`] entries. Only a folder that
//! cannot be listed at all stops the pipeline before any load is attempted.
//!
//! # Usage
//!
//! ```rust,no_run
//! use plugdock_core::{load_plugins, PluginSettings};
//! # use plugdock_core::{DynModule, PluginRegistry};
//! # struct HostRegistry;
//! # impl PluginRegistry for HostRegistry {
//! #     fn register(&mut self, _m: DynModule) -> plugdock_core::plugin::Result<()> { Ok(()) }
//! # }
//!
//! let settings = PluginSettings::new("/var/lib/app/plugins/", "plugin");
//! let mut registry = HostRegistry;
//!
//! let report = load_plugins(&settings, &mut registry)?;
//! println!("{} plugins loaded, {} failed", report.loaded, report.failures.len());
//! # Ok::<(), plugdock_core::PluginError>(())
//! ```

pub mod error;
pub mod loader;
pub mod native;
pub mod scanner;
pub mod types;

pub use error::{AggregateError, LoadFailure, PluginError, Result};
pub use loader::{BatchReport, PluginLoader};
pub use native::{LibraryModule, NativeOpener};
pub use types::{DynModule, ModuleOpener, NativeModule, PluginRegistry};

use crate::config::PluginDefinition;

/// Scan the configured folder and load every matching plugin.
///
/// Fails only when the folder itself cannot be listed; per-candidate
/// failures are collected in the returned [`BatchReport`]. A report with a
/// non-empty failure list may still carry a positive `loaded` count;
/// callers must not read "some plugins failed" as "nothing loaded".
pub fn load_plugins(
    cfg: &dyn PluginDefinition,
    registry: &mut dyn PluginRegistry,
) -> Result<BatchReport> {
    load_plugins_with(cfg, registry, &PluginLoader::new())
}

/// [`load_plugins`] with a caller-provided loader.
///
/// Used by hosts that inject their own [`ModuleOpener`], and by tests that
/// script open, error and panic behavior without real shared libraries.
pub fn load_plugins_with(
    cfg: &dyn PluginDefinition,
    registry: &mut dyn PluginRegistry,
    loader: &PluginLoader,
) -> Result<BatchReport> {
    let candidates = scanner::scan(cfg.folder(), cfg.pattern())?;
    Ok(loader.load(&candidates, registry))
}
