//! Backend descriptors and router configuration.
//!
//! A descriptor names a plugin and carries the options used to construct
//! it. Two input shapes are accepted: the array form, where every entry
//! must carry its own `displayName`, and the legacy map form keyed by
//! display name.

use super::ScmDomainError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Option key holding a backend's human-readable name.
pub const DISPLAY_NAME_KEY: &str = "displayName";

/// Free-form plugin settings, always a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PluginOptions(Map<String, Value>);

impl PluginOptions {
    /// Creates an empty option set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing JSON object.
    #[must_use]
    pub const fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Converts a JSON value into options.
    ///
    /// `null` is treated as an empty option set.
    ///
    /// # Errors
    ///
    /// Returns [`ScmDomainError::InvalidOptions`] when the value is neither an
    /// object nor `null`.
    pub fn from_value(plugin: &str, value: Value) -> Result<Self, ScmDomainError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Ok(Self::new()),
            _ => Err(ScmDomainError::InvalidOptions {
                plugin: plugin.to_owned(),
            }),
        }
    }

    /// Sets a single option, replacing any previous value.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Returns the raw value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns the value for `key` when it is a string.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Returns the configured display name, if present and non-blank.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.get_str(DISPLAY_NAME_KEY)
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    /// Layers these options over `shared`.
    ///
    /// Keys present here win; keys only present in `shared` are inherited.
    #[must_use]
    pub fn layered_over(&self, shared: &Self) -> Self {
        let mut merged = shared.0.clone();
        merged.extend(self.0.iter().map(|(key, value)| (key.clone(), value.clone())));
        Self(merged)
    }

    /// Returns the underlying JSON object.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consumes the options, returning a JSON object value.
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

/// A validated request to load one backend plugin.
#[derive(Debug, Clone, PartialEq)]
pub struct ScmDescriptor {
    plugin: String,
    config: PluginOptions,
}

impl ScmDescriptor {
    /// Creates an array-form descriptor.
    ///
    /// The plugin name is trimmed. The config must carry a non-blank
    /// `displayName`.
    ///
    /// # Errors
    ///
    /// Returns [`ScmDomainError::EmptyPluginName`] when the plugin name is
    /// blank, or [`ScmDomainError::MissingDisplayName`] when the config has no
    /// display name.
    pub fn new(plugin: impl Into<String>, config: PluginOptions) -> Result<Self, ScmDomainError> {
        let plugin_name = normalize_plugin(plugin.into())?;
        if config.display_name().is_none() {
            return Err(ScmDomainError::MissingDisplayName {
                plugin: plugin_name,
            });
        }
        Ok(Self {
            plugin: plugin_name,
            config,
        })
    }

    /// Creates a legacy map-form descriptor.
    ///
    /// `display_name` is the map key; it fills in `displayName` when the
    /// config does not provide one.
    ///
    /// # Errors
    ///
    /// Returns [`ScmDomainError::EmptyPluginName`] when the plugin name is
    /// blank, or [`ScmDomainError::MissingDisplayName`] when neither the key
    /// nor the config supplies a display name.
    pub fn from_legacy(
        display_name: &str,
        plugin: impl Into<String>,
        config: PluginOptions,
    ) -> Result<Self, ScmDomainError> {
        let with_name = if config.display_name().is_some() {
            config
        } else {
            config.with(DISPLAY_NAME_KEY, display_name.trim())
        };
        Self::new(plugin, with_name)
    }

    /// Returns the plugin name.
    #[must_use]
    pub fn plugin(&self) -> &str {
        &self.plugin
    }

    /// Returns the plugin-specific options.
    #[must_use]
    pub const fn config(&self) -> &PluginOptions {
        &self.config
    }
}

fn normalize_plugin(raw: String) -> Result<String, ScmDomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ScmDomainError::EmptyPluginName);
    }
    Ok(trimmed.to_owned())
}

/// Router construction input: descriptors plus options shared by all of them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouterConfig {
    shared: PluginOptions,
    descriptors: Vec<ScmDescriptor>,
}

#[derive(Deserialize)]
struct RawRouterConfig {
    #[serde(default)]
    ecosystem: Option<Map<String, Value>>,
    scms: RawDescriptors,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDescriptors {
    List(Vec<RawDescriptor>),
    Legacy(Map<String, Value>),
}

#[derive(Deserialize)]
struct RawDescriptor {
    plugin: String,
    #[serde(default)]
    config: Value,
}

impl RouterConfig {
    /// Creates a configuration from validated descriptors.
    #[must_use]
    pub fn new(descriptors: Vec<ScmDescriptor>) -> Self {
        Self {
            shared: PluginOptions::new(),
            descriptors,
        }
    }

    /// Sets options merged underneath every descriptor's own config.
    #[must_use]
    pub fn with_shared(mut self, shared: PluginOptions) -> Self {
        self.shared = shared;
        self
    }

    /// Parses a configuration document.
    ///
    /// Accepts `{"ecosystem": {...}, "scms": [...]}` or the legacy form
    /// `{"scms": {"<displayName>": {...}}}`. Legacy entries keep the order in
    /// which they appear in the document.
    ///
    /// # Errors
    ///
    /// Returns [`ScmDomainError::InvalidDescriptors`] when the document does
    /// not match either shape, or the descriptor validation errors of
    /// [`ScmDescriptor::new`] for individual entries.
    pub fn from_value(value: Value) -> Result<Self, ScmDomainError> {
        let raw: RawRouterConfig = serde_json::from_value(value)
            .map_err(|err| ScmDomainError::InvalidDescriptors(err.to_string()))?;

        let descriptors = match raw.scms {
            RawDescriptors::List(entries) => entries
                .into_iter()
                .map(|entry| {
                    let config = PluginOptions::from_value(&entry.plugin, entry.config)?;
                    ScmDescriptor::new(entry.plugin, config)
                })
                .collect::<Result<Vec<_>, _>>()?,
            RawDescriptors::Legacy(entries) => entries
                .into_iter()
                .map(|(display_name, raw_entry)| {
                    let entry: RawDescriptor = serde_json::from_value(raw_entry)
                        .map_err(|err| ScmDomainError::InvalidDescriptors(err.to_string()))?;
                    let config = PluginOptions::from_value(&entry.plugin, entry.config)?;
                    ScmDescriptor::from_legacy(&display_name, entry.plugin, config)
                })
                .collect::<Result<Vec<_>, _>>()?,
        };

        Ok(Self {
            shared: PluginOptions(raw.ecosystem.unwrap_or_default()),
            descriptors,
        })
    }

    /// Returns the shared options.
    #[must_use]
    pub const fn shared(&self) -> &PluginOptions {
        &self.shared
    }

    /// Returns the descriptors in load order.
    #[must_use]
    pub fn descriptors(&self) -> &[ScmDescriptor] {
        &self.descriptors
    }
}
