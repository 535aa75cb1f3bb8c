//! Error reporters for failures the router recovers from.

use crate::scm::ports::{ErrorReporter, RouterDiagnostic};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::warn;

/// Reporter that emits each diagnostic as a `tracing` warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, diagnostic: &RouterDiagnostic) {
        match diagnostic {
            RouterDiagnostic::WebhookPredicateFailed { scm_context, error } => {
                warn!(
                    scm_context = %scm_context,
                    error = %error,
                    "webhook predicate failed; treating as not handled"
                );
            }
            RouterDiagnostic::DuplicateContext {
                plugin,
                scm_context,
            } => {
                warn!(
                    plugin = %plugin,
                    scm_context = %scm_context,
                    "duplicate scm context ignored"
                );
            }
            other => {
                warn!(
                    plugin = other.plugin().unwrap_or_default(),
                    reason = %other,
                    "scm plugin skipped"
                );
            }
        }
    }
}

/// Reporter that keeps every diagnostic for later inspection.
#[derive(Debug, Clone, Default)]
pub struct RecordingErrorReporter {
    diagnostics: Arc<RwLock<Vec<RouterDiagnostic>>>,
}

impl RecordingErrorReporter {
    /// Creates an empty reporter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the diagnostics reported so far, oldest first.
    #[must_use]
    pub fn diagnostics(&self) -> Vec<RouterDiagnostic> {
        self.diagnostics
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the number of diagnostics reported so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.diagnostics
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns `true` when nothing has been reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ErrorReporter for RecordingErrorReporter {
    fn report(&self, diagnostic: &RouterDiagnostic) {
        self.diagnostics
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(diagnostic.clone());
    }
}
