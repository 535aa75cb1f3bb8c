//! Value types returned by SCM capabilities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shell command that checks out source for a build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutCommand {
    /// Step name shown in build logs.
    pub name: String,
    /// Shell command to run.
    pub command: String,
}

/// Repository metadata resolved from an SCM URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecoratedUrl {
    /// Repository name in `owner/repo` form.
    pub name: String,
    /// Branch encoded in the URI.
    pub branch: String,
    /// Browsable repository URL.
    pub url: String,
    /// Source subdirectory, empty for the repository root.
    #[serde(default)]
    pub root_dir: String,
}

/// Display metadata for a provider user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoratedAuthor {
    /// Avatar image URL.
    pub avatar: String,
    /// Full name.
    pub name: String,
    /// Login name.
    pub username: String,
    /// Profile URL.
    pub url: String,
}

/// Display metadata for a commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoratedCommit {
    /// Commit message.
    pub message: String,
    /// Browsable commit URL.
    pub url: String,
    /// Commit author.
    pub author: DecoratedAuthor,
    /// Commit committer.
    pub committer: DecoratedAuthor,
}

/// A user's access level on one repository.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permissions {
    /// Administrative access.
    pub admin: bool,
    /// Write access.
    pub push: bool,
    /// Read access.
    pub pull: bool,
}

/// A user's membership in an organization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgPermissions {
    /// Organization owner.
    pub admin: bool,
    /// Organization member.
    pub member: bool,
}

/// A comment posted on a pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrComment {
    /// Provider comment identifier.
    pub comment_id: String,
    /// Creation time.
    pub create_time: DateTime<Utc>,
    /// Author login.
    pub username: String,
}

/// A deploy key installed on a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployKey {
    /// Provider key identifier.
    pub id: String,
    /// Key title shown in the provider UI.
    pub title: String,
    /// Public half, installed on the repository.
    pub public_key: String,
    /// Private half, returned once to the caller.
    pub private_key: String,
}

/// A repository branch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Branch {
    /// Branch name.
    pub name: String,
}

/// A pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequest {
    /// Pull request number.
    pub number: u64,
    /// Short name, e.g. `PR-12`.
    pub name: String,
    /// Head ref to check out.
    pub ref_name: String,
    /// Head commit SHA.
    pub sha: String,
    /// Title.
    pub title: String,
    /// Author login.
    pub username: String,
    /// Browsable URL.
    pub url: String,
    /// Branch the pull request targets.
    pub base_branch: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Whether the pull request has been merged.
    #[serde(default)]
    pub merged: bool,
}

/// Read-only mode settings of a backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadOnlyInfo {
    /// Whether the backend refuses write operations.
    pub enabled: bool,
    /// Account used for read access.
    #[serde(default)]
    pub username: Option<String>,
    /// Token used for read access.
    #[serde(default)]
    pub access_token: Option<String>,
    /// Clone protocol, e.g. `https` or `ssh`.
    #[serde(default)]
    pub clone_type: Option<String>,
}

/// Build outcome reported as a commit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BuildStatus {
    /// Waiting to start.
    Queued,
    /// In progress.
    Running,
    /// Finished successfully.
    Success,
    /// Finished with a failure.
    Failure,
    /// Cancelled before completion.
    Aborted,
    /// Finished with warnings.
    Unstable,
}

impl BuildStatus {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Queued => "QUEUED",
            Self::Running => "RUNNING",
            Self::Success => "SUCCESS",
            Self::Failure => "FAILURE",
            Self::Aborted => "ABORTED",
            Self::Unstable => "UNSTABLE",
        }
    }
}

impl fmt::Display for BuildStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of git ref.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefType {
    /// A branch head.
    Branch,
    /// A tag.
    Tag,
}

/// A file to commit when opening a pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrFile {
    /// Repository-relative path.
    pub name: String,
    /// New file contents.
    pub content: String,
}
