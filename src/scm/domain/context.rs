//! Validated SCM context key.

use super::ScmDomainError;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Opaque key identifying one backend instance, such as `github:github.com`.
///
/// Keys are reported by backends themselves. The router only requires that a
/// key is non-empty and free of whitespace and control characters; the
/// internal structure is the backend's business.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ScmContext(String);

impl ScmContext {
    /// Creates a validated context key.
    ///
    /// # Errors
    ///
    /// Returns [`ScmDomainError::EmptyScmContext`] when the value is empty
    /// or [`ScmDomainError::InvalidScmContext`] when it contains whitespace
    /// or control characters.
    pub fn new(value: impl Into<String>) -> Result<Self, ScmDomainError> {
        let raw = value.into();

        if raw.is_empty() {
            return Err(ScmDomainError::EmptyScmContext);
        }

        if raw
            .chars()
            .any(|c| c.is_whitespace() || c.is_control())
        {
            return Err(ScmDomainError::InvalidScmContext(raw));
        }

        Ok(Self(raw))
    }

    /// Returns the context key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the provider prefix before the first colon, if any.
    ///
    /// `github:github.com` yields `github`; a key without a colon yields
    /// the whole key.
    #[must_use]
    pub fn provider(&self) -> &str {
        self.0.split_once(':').map_or(self.0.as_str(), |(provider, _)| provider)
    }
}

impl TryFrom<String> for ScmContext {
    type Error = ScmDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ScmContext> for String {
    fn from(value: ScmContext) -> Self {
        value.0
    }
}

impl AsRef<str> for ScmContext {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for ScmContext {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScmContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
