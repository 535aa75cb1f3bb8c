//! Error-reporting seam for failures the router absorbs.
//!
//! The router never lets a bad plugin or a failing webhook predicate abort
//! unrelated work. Those failures still need to be seen, so each one is
//! handed to an injected [`ErrorReporter`].

use super::ScmError;
use crate::scm::domain::{ScmContext, ScmDomainError};
use std::fmt;

/// A failure the router recovered from.
#[derive(Debug, Clone)]
pub enum RouterDiagnostic {
    /// No factory is registered for the plugin name.
    UnknownPlugin {
        /// Requested plugin name.
        plugin: String,
    },
    /// The plugin name is reserved for the router itself.
    ReservedPlugin {
        /// Requested plugin name.
        plugin: String,
    },
    /// The backend reported no context key.
    MissingContext {
        /// Plugin that produced the backend.
        plugin: String,
    },
    /// The backend's first context key failed validation.
    MalformedContext {
        /// Plugin that produced the backend.
        plugin: String,
        /// Validation failure.
        error: ScmDomainError,
    },
    /// Another backend already owns the context key.
    DuplicateContext {
        /// Plugin that produced the discarded backend.
        plugin: String,
        /// Contested context key.
        scm_context: ScmContext,
    },
    /// A webhook predicate failed and was counted as "not mine".
    WebhookPredicateFailed {
        /// Backend whose predicate failed.
        scm_context: ScmContext,
        /// Predicate failure.
        error: ScmError,
    },
}

impl RouterDiagnostic {
    /// Returns the plugin name involved, when the diagnostic concerns loading.
    #[must_use]
    pub fn plugin(&self) -> Option<&str> {
        match self {
            Self::UnknownPlugin { plugin }
            | Self::ReservedPlugin { plugin }
            | Self::MissingContext { plugin }
            | Self::MalformedContext { plugin, .. }
            | Self::DuplicateContext { plugin, .. } => Some(plugin),
            Self::WebhookPredicateFailed { .. } => None,
        }
    }
}

impl fmt::Display for RouterDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPlugin { plugin } => {
                write!(f, "scm plugin '{plugin}' is not available")
            }
            Self::ReservedPlugin { plugin } => {
                write!(f, "scm plugin name '{plugin}' is reserved for the router")
            }
            Self::MissingContext { plugin } => {
                write!(f, "scm plugin '{plugin}' reported no scm context")
            }
            Self::MalformedContext { plugin, error } => {
                write!(f, "scm plugin '{plugin}' reported a malformed scm context: {error}")
            }
            Self::DuplicateContext {
                plugin,
                scm_context,
            } => write!(
                f,
                "scm context '{scm_context}' from plugin '{plugin}' is already registered"
            ),
            Self::WebhookPredicateFailed { scm_context, error } => write!(
                f,
                "webhook check failed for scm context '{scm_context}': {error}"
            ),
        }
    }
}

/// Sink for failures the router recovers from.
pub trait ErrorReporter: Send + Sync {
    /// Records one diagnostic.
    fn report(&self, diagnostic: &RouterDiagnostic);
}
