//! Application services for loading SCM backends and routing calls to them.

mod aggregate;
mod catalog;
mod classifier;
mod loader;
mod passthrough;
mod registry;
mod router;

pub use aggregate::{fan_out, merge_in_order};
pub use catalog::{PluginCatalog, RESERVED_PLUGIN_NAME, ScmFactory};
pub use classifier::classify_webhook;
pub use loader::{LoadOutcome, load_plugin};
pub use registry::{ContextRegistry, RegisteredScm};
pub use router::{ScmRouter, ScmRouterError, ScmRouterResult};
