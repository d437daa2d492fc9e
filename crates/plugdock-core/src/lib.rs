//! Core load pipeline for Plugdock.
//!
//! This crate discovers native plugin libraries on disk, loads each one into
//! the running process, and hands every successfully opened module to a
//! registry collaborator for validation and storage. The pipeline is fault
//! isolating: one malformed plugin file costs exactly one failure entry,
//! never the rest of the batch.

pub mod config;
pub mod plugin;

pub use config::{PluginDefinition, PluginSettings};
pub use plugin::{
    load_plugins, load_plugins_with, AggregateError, BatchReport, DynModule, LibraryModule,
    LoadFailure, ModuleOpener, NativeModule, NativeOpener, PluginError, PluginLoader,
    PluginRegistry,
};

/// Re-exports commonly used types.
pub mod prelude {
    pub use crate::config::{PluginDefinition, PluginSettings};
    pub use crate::plugin::{
        load_plugins, load_plugins_with, BatchReport, DynModule, ModuleOpener, NativeModule,
        PluginError, PluginLoader, PluginRegistry, Result,
    };
}
