//! Backend loading: factory lookup, construction, and context validation.

use super::{
    catalog::{PluginCatalog, RESERVED_PLUGIN_NAME},
    registry::ContextRegistry,
};
use crate::scm::{
    domain::{PluginOptions, ScmContext},
    ports::{RouterDiagnostic, ScmError},
};

/// Result of one load attempt that did not fail fatally.
#[derive(Debug, Clone)]
pub enum LoadOutcome {
    /// The backend was registered under this context.
    Registered(ScmContext),
    /// The backend was discarded; the registry is unchanged.
    Skipped(RouterDiagnostic),
}

/// Loads one plugin into `registry`.
///
/// Unknown or reserved plugin names, missing or malformed context keys, and
/// duplicate keys are soft failures reported as [`LoadOutcome::Skipped`].
///
/// # Errors
///
/// Returns the factory's error unchanged when the backend cannot be
/// constructed.
pub fn load_plugin(
    catalog: &PluginCatalog,
    registry: &ContextRegistry,
    plugin: &str,
    options: &PluginOptions,
) -> Result<LoadOutcome, ScmError> {
    let plugin_name = plugin.trim();

    if plugin_name == RESERVED_PLUGIN_NAME {
        return Ok(LoadOutcome::Skipped(RouterDiagnostic::ReservedPlugin {
            plugin: plugin_name.to_owned(),
        }));
    }

    let Some(factory) = catalog.factory(plugin_name) else {
        return Ok(LoadOutcome::Skipped(RouterDiagnostic::UnknownPlugin {
            plugin: plugin_name.to_owned(),
        }));
    };

    let scm = factory(options)?;

    let Some(raw_context) = scm.scm_contexts().into_iter().next() else {
        return Ok(LoadOutcome::Skipped(RouterDiagnostic::MissingContext {
            plugin: plugin_name.to_owned(),
        }));
    };

    let scm_context = match ScmContext::new(raw_context) {
        Ok(scm_context) => scm_context,
        Err(error) => {
            return Ok(LoadOutcome::Skipped(RouterDiagnostic::MalformedContext {
                plugin: plugin_name.to_owned(),
                error,
            }));
        }
    };

    if registry.insert(scm_context.clone(), scm) {
        Ok(LoadOutcome::Registered(scm_context))
    } else {
        Ok(LoadOutcome::Skipped(RouterDiagnostic::DuplicateContext {
            plugin: plugin_name.to_owned(),
            scm_context,
        }))
    }
}
