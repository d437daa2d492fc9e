//! libloading-backed host facility.
//!
//! [`NativeOpener`] is the default [`ModuleOpener`]: it opens candidate
//! files with the platform dynamic loader (`dlopen` / `LoadLibrary`) and
//! wraps the result in a [`LibraryModule`] handle.

use std::os::raw::c_void;

use libloading::Library;

use super::error::{PluginError, Result};
use super::types::{DynModule, ModuleOpener, NativeModule};

/// Module handle backed by a [`libloading::Library`].
///
/// The library stays owned by the handle: dropping it unloads the module
/// and invalidates every symbol resolved from it, so the registry that
/// receives the handle controls the module's lifetime.
#[derive(Debug)]
pub struct LibraryModule {
    library: Library,
}

impl NativeModule for LibraryModule {
    fn lookup(&self, symbol: &str) -> Result<*mut c_void> {
        // SAFETY: the symbol is only resolved to an address; interpreting it
        // is up to the caller.
        unsafe {
            let resolved = self
                .library
                .get::<*mut c_void>(symbol.as_bytes())
                .map_err(|_| PluginError::SymbolNotFound(symbol.to_string()))?;
            resolved
                .try_as_raw_ptr()
                .ok_or_else(|| PluginError::SymbolNotFound(symbol.to_string()))
        }
    }
}

/// Default opener: the process dynamic-loading facility.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeOpener;

impl ModuleOpener for NativeOpener {
    fn open(&self, path: &str) -> Result<DynModule> {
        // SAFETY: loading a native library runs its initializers; the host
        // trusts the configured plugin folder by deployment policy.
        let library =
            unsafe { Library::new(path).map_err(|e| PluginError::LoadFailed(e.to_string()))? };
        Ok(Box::new(LibraryModule { library }))
    }
}
