//! Compile-time registry of backend factories.

use crate::scm::{
    domain::PluginOptions,
    ports::{Scm, ScmResult},
};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Plugin name that would alias the router itself.
pub const RESERVED_PLUGIN_NAME: &str = "router";

/// Constructs a backend from its merged options.
///
/// A returned error is a fatal configuration problem, not a skipped plugin.
pub type ScmFactory = Arc<dyn Fn(&PluginOptions) -> ScmResult<Arc<dyn Scm>> + Send + Sync>;

/// Maps plugin names to the factories that build them.
#[derive(Clone, Default)]
pub struct PluginCatalog {
    factories: HashMap<String, ScmFactory>,
}

impl PluginCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a factory under `plugin`, replacing any previous one.
    #[must_use]
    pub fn with_plugin<F>(mut self, plugin: impl Into<String>, factory: F) -> Self
    where
        F: Fn(&PluginOptions) -> ScmResult<Arc<dyn Scm>> + Send + Sync + 'static,
    {
        self.factories.insert(plugin.into(), Arc::new(factory));
        self
    }

    /// Returns the factory for `plugin`.
    #[must_use]
    pub fn factory(&self, plugin: &str) -> Option<&ScmFactory> {
        self.factories.get(plugin)
    }

    /// Returns registered plugin names, sorted.
    #[must_use]
    pub fn plugins(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for PluginCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginCatalog")
            .field("plugins", &self.plugins())
            .finish()
    }
}
