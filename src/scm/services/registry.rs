//! Ordered map from SCM context to backend instance.

use crate::scm::{domain::ScmContext, ports::Scm};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// A registered backend together with its context key.
pub type RegisteredScm = (ScmContext, Arc<dyn Scm>);

/// Registry of loaded backends keyed by SCM context.
///
/// Iteration follows registration order, which the webhook classifier uses
/// as its tie-break. The first registration of a key wins. Reads take a
/// snapshot so no lock is held while a caller awaits a backend.
#[derive(Clone, Default)]
pub struct ContextRegistry {
    state: Arc<RwLock<RegistryState>>,
}

#[derive(Default)]
struct RegistryState {
    entries: Vec<RegisteredScm>,
    index: HashMap<ScmContext, usize>,
}

impl ContextRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a backend under `scm_context`.
    ///
    /// Returns `false` and leaves the registry untouched when the key is
    /// already registered.
    pub fn insert(&self, scm_context: ScmContext, scm: Arc<dyn Scm>) -> bool {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        if state.index.contains_key(&scm_context) {
            return false;
        }
        let position = state.entries.len();
        state.index.insert(scm_context.clone(), position);
        state.entries.push((scm_context, scm));
        true
    }

    /// Returns the backend registered under `scm_context`.
    #[must_use]
    pub fn get(&self, scm_context: &str) -> Option<Arc<dyn Scm>> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state
            .index
            .get(scm_context)
            .and_then(|position| state.entries.get(*position))
            .map(|(_, scm)| Arc::clone(scm))
    }

    /// Returns registered keys in registration order.
    #[must_use]
    pub fn contexts(&self) -> Vec<ScmContext> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.entries.iter().map(|(key, _)| key.clone()).collect()
    }

    /// Returns every registration in registration order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<RegisteredScm> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state
            .entries
            .iter()
            .map(|(key, scm)| (key.clone(), Arc::clone(scm)))
            .collect()
    }

    /// Returns the number of registered backends.
    #[must_use]
    pub fn len(&self) -> usize {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.entries.len()
    }

    /// Returns `true` when no backend is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
