//! Adapter implementations for SCM routing.
//!
//! Provides the in-memory backend, the error reporters, and the catalog of
//! backends compiled into this crate.

pub mod memory;
pub mod reporter;

pub use memory::{InMemoryScm, InMemoryScmSettings, MEMORY_PLUGIN_NAME};
pub use reporter::{RecordingErrorReporter, TracingErrorReporter};

use crate::scm::{
    domain::PluginOptions,
    ports::{Scm, ScmResult},
    services::PluginCatalog,
};
use std::sync::Arc;

/// Returns a catalog holding every backend built into this crate.
#[must_use]
pub fn builtin_catalog() -> PluginCatalog {
    PluginCatalog::new().with_plugin(MEMORY_PLUGIN_NAME, memory_factory)
}

fn memory_factory(options: &PluginOptions) -> ScmResult<Arc<dyn Scm>> {
    Ok(Arc::new(InMemoryScm::from_options(options)?))
}
