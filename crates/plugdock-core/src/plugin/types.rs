//! Collaborator traits at the pipeline boundary.

use std::os::raw::c_void;

use super::error::Result;

/// Opaque handle to a module loaded into the process.
///
/// Symbol lookup is the only capability. The pipeline never interprets
/// symbols itself; it relinquishes the handle to the registry immediately
/// after a successful registration, and the registry owns all use of the
/// module from then on.
pub trait NativeModule: std::fmt::Debug + Send + Sync {
    /// Resolve an exported symbol by name to its address.
    fn lookup(&self, symbol: &str) -> Result<*mut c_void>;
}

/// Boxed module handle, as handed to the registry.
pub type DynModule = Box<dyn NativeModule>;

/// Host facility that opens a native module at a path.
///
/// The default implementation is [`NativeOpener`](super::native::NativeOpener).
/// Implementations are allowed to panic instead of returning an error; the
/// loader contains either outcome behind its fault barrier. Swapping the
/// opener is how tests exercise open, error and panic behavior without real
/// shared library files.
pub trait ModuleOpener: Send + Sync {
    /// Open the file at `path` as a native module.
    fn open(&self, path: &str) -> Result<DynModule>;
}

/// External collaborator that validates and stores opened modules.
///
/// Called exactly once per successfully opened candidate, synchronously. A
/// returned error is propagated unchanged and reported for that candidate
/// exactly like an open failure.
pub trait PluginRegistry {
    /// Accept a freshly opened module, or reject it with an error.
    fn register(&mut self, module: DynModule) -> Result<()>;
}
