//! Settings accepted by the in-memory backend.

use crate::scm::{
    domain::{ConfigMap, PluginOptions, ReadOnlyInfo},
    ports::{ScmError, ScmResult},
};
use serde::{Deserialize, Serialize};

/// Plugin name the in-memory backend is registered under.
pub const MEMORY_PLUGIN_NAME: &str = "memory";

/// Context prefix for in-memory backends.
pub const MEMORY_PROVIDER: &str = "memory";

const DEFAULT_HOSTNAME: &str = "memory.local";
const DEFAULT_DISPLAY_NAME: &str = "In-memory SCM";
const DEFAULT_EVENT_HEADER: &str = "x-memory-event";

/// Configuration for [`super::InMemoryScm`], read from plugin options.
///
/// Unknown keys are ignored so the shared options block can carry settings
/// meant for other backends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InMemoryScmSettings {
    /// Host the backend serves; also forms its context key.
    pub hostname: String,
    /// Human-readable backend name.
    pub display_name: String,
    /// Header whose presence marks a webhook as ours.
    pub webhook_event_header: String,
    /// Secret for the optional `x-memory-signature` body check.
    pub webhook_secret: Option<String>,
    /// Read-only mode settings.
    pub read_only: ReadOnlyInfo,
    /// Logins treated as enterprise members.
    pub enterprise_users: Vec<String>,
    /// Whether deploy keys are generated for new pipelines.
    pub auto_deploy_key_generation: bool,
    /// Notification settings returned by bell configuration.
    pub bell: ConfigMap,
}

impl Default for InMemoryScmSettings {
    fn default() -> Self {
        Self {
            hostname: DEFAULT_HOSTNAME.to_owned(),
            display_name: DEFAULT_DISPLAY_NAME.to_owned(),
            webhook_event_header: DEFAULT_EVENT_HEADER.to_owned(),
            webhook_secret: None,
            read_only: ReadOnlyInfo::default(),
            enterprise_users: Vec::new(),
            auto_deploy_key_generation: false,
            bell: ConfigMap::new(),
        }
    }
}

impl InMemoryScmSettings {
    /// Creates default settings for `hostname`.
    #[must_use]
    pub fn for_hostname(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            ..Self::default()
        }
    }

    /// Reads settings from merged plugin options.
    ///
    /// # Errors
    ///
    /// Returns [`ScmError::Backend`] when a known key has the wrong type.
    pub fn from_options(options: &PluginOptions) -> ScmResult<Self> {
        serde_json::from_value(options.clone().into_value()).map_err(ScmError::backend)
    }

    /// Returns the context key for these settings.
    #[must_use]
    pub fn scm_context(&self) -> String {
        format!("{MEMORY_PROVIDER}:{}", self.hostname)
    }
}
