//! Inbound webhook inputs and the normalized hook event.

use super::ScmContext;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// HTTP headers of an inbound webhook.
///
/// Header names are stored lowercased so lookups are case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WebhookHeaders(BTreeMap<String, String>);

impl WebhookHeaders {
    /// Creates an empty header set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a header, replacing an existing value with the same name.
    #[must_use]
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Inserts a header, replacing an existing value with the same name.
    pub fn insert(&mut self, name: &str, value: impl Into<String>) {
        self.0.insert(name.to_ascii_lowercase(), value.into());
    }

    /// Returns the value of the named header.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    /// Returns `true` when the named header is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(&name.to_ascii_lowercase())
    }

    /// Iterates headers as `(lowercased name, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for WebhookHeaders {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut headers = Self::new();
        for (name, value) in iter {
            headers.insert(name.as_ref(), value);
        }
        headers
    }
}

/// Raw body of an inbound webhook.
///
/// Kept as bytes so backends can verify signatures over the exact payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebhookPayload(Vec<u8>);

impl WebhookPayload {
    /// Wraps raw payload bytes.
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Serializes a JSON document into a payload.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        Self(value.to_string().into_bytes())
    }

    /// Returns the raw bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Parses the payload as JSON.
    ///
    /// # Errors
    ///
    /// Returns the parser error when the body is not valid JSON.
    pub fn json(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_slice(&self.0)
    }
}

/// Category of a normalized webhook event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HookType {
    /// Pull request opened, updated, or closed.
    Pr,
    /// Push to a branch.
    Repo,
    /// Tag created.
    Tag,
    /// Release published.
    Release,
    /// Connectivity check sent when a webhook is installed.
    Ping,
}

impl HookType {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pr => "pr",
            Self::Repo => "repo",
            Self::Tag => "tag",
            Self::Release => "release",
            Self::Ping => "ping",
        }
    }
}

impl fmt::Display for HookType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Provider-independent view of a parsed webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedHook {
    /// Backend that produced this event.
    pub scm_context: ScmContext,
    /// Event category.
    pub hook_type: HookType,
    /// Provider action, e.g. `opened`, `synchronized`, `push`.
    pub action: String,
    /// Target branch.
    pub branch: String,
    /// Clone URL of the repository.
    pub checkout_url: String,
    /// Provider-assigned delivery identifier.
    pub hook_id: String,
    /// Head commit SHA.
    pub sha: String,
    /// User who triggered the event.
    pub username: String,
    /// Pull request number for `pr` events.
    #[serde(default)]
    pub pr_num: Option<u64>,
    /// Pull request ref for `pr` events.
    #[serde(default)]
    pub pr_ref: Option<String>,
    /// Message of the head commit, when the provider sends it.
    #[serde(default)]
    pub last_commit_message: Option<String>,
    /// Files touched by the event, when the provider sends them.
    #[serde(default)]
    pub changed_files: Vec<String>,
}
