//! Error types for SCM routing configuration and domain validation.

use thiserror::Error;

/// Errors returned while validating router configuration and domain values.
///
/// Every variant is a configuration problem: the router refuses to start
/// rather than run with an ambiguous backend set.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScmDomainError {
    /// A backend reported an empty context key.
    #[error("SCM context must not be empty")]
    EmptyScmContext,

    /// A backend reported a context key containing whitespace or control
    /// characters.
    #[error("SCM context '{0}' contains whitespace or control characters")]
    InvalidScmContext(String),

    /// A descriptor names no plugin.
    #[error("plugin name must not be empty")]
    EmptyPluginName,

    /// A descriptor in array form has no `displayName` in its config.
    #[error("display name is missing for scm config of plugin '{plugin}'")]
    MissingDisplayName {
        /// Plugin named by the offending descriptor.
        plugin: String,
    },

    /// A descriptor's `config` is not a JSON object.
    #[error("config for plugin '{plugin}' must be an object")]
    InvalidOptions {
        /// Plugin named by the offending descriptor.
        plugin: String,
    },

    /// The descriptor block does not have the expected shape.
    #[error("scms config is not in the expected shape: {0}")]
    InvalidDescriptors(String),

    /// No backend registered after processing every descriptor.
    #[error("no scm plugin could be loaded; at least one usable backend is required")]
    NoUsableBackend,
}
