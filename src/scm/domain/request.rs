//! Request types for SCM capabilities.
//!
//! Every request carries an optional `scm_context` naming the backend that
//! should serve it. The router reads only that field; everything else is
//! passed through to the backend untouched.

use super::{BuildStatus, HookType, PrFile, RefType};
use serde::{Deserialize, Serialize};

/// A request addressed to one backend by SCM context.
pub trait ScopedRequest {
    /// Returns the SCM context the request targets, if any.
    fn scm_context(&self) -> Option<&str>;
}

impl ScopedRequest for str {
    fn scm_context(&self) -> Option<&str> {
        Some(self)
    }
}

impl<T: ScopedRequest + ?Sized> ScopedRequest for &T {
    fn scm_context(&self) -> Option<&str> {
        (**self).scm_context()
    }
}

macro_rules! scoped_requests {
    ($($name:ident),+ $(,)?) => {
        $(
            impl ScopedRequest for $name {
                fn scm_context(&self) -> Option<&str> {
                    self.scm_context.as_deref()
                }
            }
        )+
    };
}

scoped_requests!(
    ContextRequest,
    EnterpriseUserRequest,
    ParseUrlRequest,
    CheckoutRequest,
    DecorateUrlRequest,
    DecorateCommitRequest,
    DecorateAuthorRequest,
    PermissionsRequest,
    OrgPermissionsRequest,
    CommitShaRequest,
    CommitRefShaRequest,
    PrCommentRequest,
    CommitStatusRequest,
    DeployKeyRequest,
    AddWebhookRequest,
    FileRequest,
    ChangedFilesRequest,
    BranchListRequest,
    OpenedPrsRequest,
    PrInfoRequest,
    OpenPrRequest,
);

/// Request carrying nothing but the target context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextRequest {
    /// Target backend.
    pub scm_context: Option<String>,
}

impl ContextRequest {
    /// Creates a request for the given context.
    #[must_use]
    pub fn new(scm_context: impl Into<String>) -> Self {
        Self {
            scm_context: Some(scm_context.into()),
        }
    }
}

/// Asks whether a user belongs to the backend's enterprise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnterpriseUserRequest {
    /// Target backend.
    pub scm_context: Option<String>,
    /// Access token.
    pub token: String,
    /// User login.
    pub login: String,
}

/// Resolves a checkout URL to an SCM URI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseUrlRequest {
    /// Target backend.
    pub scm_context: Option<String>,
    /// Clone URL, optionally suffixed with `#branch`.
    pub checkout_url: String,
    /// Access token.
    pub token: String,
    /// Source subdirectory.
    #[serde(default)]
    pub root_dir: Option<String>,
}

/// Asks for the command that checks out a build's source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    /// Target backend.
    pub scm_context: Option<String>,
    /// Host to clone from.
    pub host: String,
    /// Repository owner.
    pub org: String,
    /// Repository name.
    pub repo: String,
    /// Branch to check out.
    pub branch: String,
    /// Commit to reset to.
    pub sha: String,
    /// Pull request ref to merge, for PR builds.
    #[serde(default)]
    pub pr_ref: Option<String>,
    /// Source subdirectory.
    #[serde(default)]
    pub root_dir: Option<String>,
}

/// Resolves display metadata for an SCM URI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecorateUrlRequest {
    /// Target backend.
    pub scm_context: Option<String>,
    /// SCM URI.
    pub scm_uri: String,
    /// Access token.
    pub token: String,
}

/// Resolves display metadata for a commit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecorateCommitRequest {
    /// Target backend.
    pub scm_context: Option<String>,
    /// SCM URI.
    pub scm_uri: String,
    /// Commit SHA.
    pub sha: String,
    /// Access token.
    pub token: String,
}

/// Resolves display metadata for a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecorateAuthorRequest {
    /// Target backend.
    pub scm_context: Option<String>,
    /// User login.
    pub username: String,
    /// Access token.
    pub token: String,
}

/// Reads a user's permissions on a repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionsRequest {
    /// Target backend.
    pub scm_context: Option<String>,
    /// SCM URI.
    pub scm_uri: String,
    /// Access token identifying the user.
    pub token: String,
}

/// Reads a user's membership in an organization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgPermissionsRequest {
    /// Target backend.
    pub scm_context: Option<String>,
    /// Organization name.
    pub organization: String,
    /// User login.
    pub username: String,
    /// Access token.
    pub token: String,
}

/// Reads the head SHA of a repository branch or pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitShaRequest {
    /// Target backend.
    pub scm_context: Option<String>,
    /// SCM URI.
    pub scm_uri: String,
    /// Access token.
    pub token: String,
    /// Pull request number; the branch head is read when absent.
    #[serde(default)]
    pub pr_num: Option<u64>,
}

/// Reads the SHA a named ref points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitRefShaRequest {
    /// Target backend.
    pub scm_context: Option<String>,
    /// Access token.
    pub token: String,
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Ref name without the `refs/...` prefix.
    pub ref_name: String,
    /// Kind of ref.
    pub ref_type: RefType,
}

/// Posts a comment on a pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrCommentRequest {
    /// Target backend.
    pub scm_context: Option<String>,
    /// SCM URI.
    pub scm_uri: String,
    /// Access token.
    pub token: String,
    /// Pull request number.
    pub pr_num: u64,
    /// Comment body.
    pub comment: String,
}

/// Sets a status check on a commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitStatusRequest {
    /// Target backend.
    pub scm_context: Option<String>,
    /// SCM URI.
    pub scm_uri: String,
    /// Access token.
    pub token: String,
    /// Commit SHA.
    pub sha: String,
    /// Build outcome.
    pub build_status: BuildStatus,
    /// Job the status belongs to.
    pub job_name: String,
    /// Link to the build.
    pub url: String,
    /// Optional status description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Installs a deploy key on a repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployKeyRequest {
    /// Target backend.
    pub scm_context: Option<String>,
    /// SCM URI.
    pub scm_uri: String,
    /// Access token.
    pub token: String,
}

/// Installs or updates a webhook on a repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddWebhookRequest {
    /// Target backend.
    pub scm_context: Option<String>,
    /// SCM URI.
    pub scm_uri: String,
    /// Access token.
    pub token: String,
    /// URL the provider should deliver events to.
    pub webhook_url: String,
    /// Provider event names to subscribe to; backend defaults when empty.
    #[serde(default)]
    pub actions: Vec<String>,
}

/// Reads one file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRequest {
    /// Target backend.
    pub scm_context: Option<String>,
    /// SCM URI.
    pub scm_uri: String,
    /// Access token.
    pub token: String,
    /// Repository-relative path.
    pub path: String,
    /// Ref to read at; the URI's branch when absent.
    #[serde(default)]
    pub ref_name: Option<String>,
}

/// Lists files changed by an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangedFilesRequest {
    /// Target backend.
    pub scm_context: Option<String>,
    /// Event category.
    pub hook_type: HookType,
    /// SCM URI.
    pub scm_uri: String,
    /// Access token.
    pub token: String,
    /// Pull request number for `pr` events.
    #[serde(default)]
    pub pr_num: Option<u64>,
    /// Files listed in the webhook payload, for push events.
    #[serde(default)]
    pub hook_files: Vec<String>,
}

/// Lists branches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchListRequest {
    /// Target backend.
    pub scm_context: Option<String>,
    /// SCM URI.
    pub scm_uri: String,
    /// Access token.
    pub token: String,
}

/// Lists open pull requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenedPrsRequest {
    /// Target backend.
    pub scm_context: Option<String>,
    /// SCM URI.
    pub scm_uri: String,
    /// Access token.
    pub token: String,
}

/// Reads one pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrInfoRequest {
    /// Target backend.
    pub scm_context: Option<String>,
    /// SCM URI.
    pub scm_uri: String,
    /// Access token.
    pub token: String,
    /// Pull request number.
    pub pr_num: u64,
}

/// Commits files to a new branch and opens a pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenPrRequest {
    /// Target backend.
    pub scm_context: Option<String>,
    /// Clone URL, optionally suffixed with `#branch` for the base branch.
    pub checkout_url: String,
    /// Access token.
    pub token: String,
    /// Files to commit.
    pub files: Vec<PrFile>,
    /// Pull request title.
    pub title: String,
    /// Commit message and pull request body.
    pub message: String,
}
