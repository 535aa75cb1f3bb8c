//! Capability port every SCM backend implements.

use crate::scm::domain::{
    AddWebhookRequest, Branch, BranchListRequest, ChangedFilesRequest, CheckoutCommand,
    CheckoutRequest, CommitRefShaRequest, CommitShaRequest, CommitStatusRequest, ConfigMap,
    ContextRequest, DecorateAuthorRequest, DecorateCommitRequest, DecorateUrlRequest,
    DecoratedAuthor, DecoratedCommit, DecoratedUrl, DeployKey, DeployKeyRequest,
    EnterpriseUserRequest, FileRequest, OpenPrRequest, OpenedPrsRequest, OrgPermissions,
    OrgPermissionsRequest, ParseUrlRequest, ParsedHook, Permissions, PermissionsRequest,
    PrComment, PrCommentRequest, PrInfoRequest, PullRequest, ReadOnlyInfo, WebhookHeaders,
    WebhookPayload,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for SCM capability calls.
pub type ScmResult<T> = Result<T, ScmError>;

/// Capability contract shared by every backend and by the router itself.
///
/// Synchronous methods answer from configuration without I/O. Everything
/// else may call out to the provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Scm: Send + Sync {
    /// Returns the context keys this backend serves.
    ///
    /// Backends are single-context; the router honours only the first key.
    fn scm_contexts(&self) -> Vec<String>;

    /// Returns the context key this backend would use for `hostname`.
    ///
    /// # Errors
    ///
    /// The router returns [`ScmError::UnknownHostname`] when no registered
    /// backend claims the hostname.
    fn scm_context_for_hostname(&self, hostname: &str) -> ScmResult<String>;

    /// Returns the human-readable backend name.
    ///
    /// # Errors
    ///
    /// The router returns [`ScmError::NotImplemented`] for unknown contexts.
    fn display_name(&self, request: &ContextRequest) -> ScmResult<String>;

    /// Returns the backend's read-only mode settings.
    ///
    /// # Errors
    ///
    /// The router returns [`ScmError::NotImplemented`] for unknown contexts.
    fn read_only_info(&self, request: &ContextRequest) -> ScmResult<ReadOnlyInfo>;

    /// Returns whether a user belongs to the backend's enterprise.
    ///
    /// # Errors
    ///
    /// The router returns [`ScmError::NotImplemented`] for unknown contexts.
    fn is_enterprise_user(&self, request: &EnterpriseUserRequest) -> ScmResult<bool>;

    /// Returns whether deploy keys are generated automatically for new
    /// pipelines.
    ///
    /// # Errors
    ///
    /// The router returns [`ScmError::NotImplemented`] for unknown contexts.
    fn auto_deploy_key_generation_enabled(&self, request: &ContextRequest) -> ScmResult<bool>;

    /// Returns the mapping from provider event names to normalized hook
    /// actions.
    ///
    /// # Errors
    ///
    /// The router returns [`ScmError::NotImplemented`] for unknown contexts.
    fn webhook_events_mapping(&self, request: &ContextRequest) -> ScmResult<ConfigMap>;

    /// Returns internal usage statistics keyed by backend.
    ///
    /// # Errors
    ///
    /// Returns the backend's failure; the router fails on the first one.
    fn stats(&self) -> ScmResult<ConfigMap>;

    /// Returns whether this backend recognizes the webhook as its own.
    ///
    /// # Errors
    ///
    /// Backend failures are treated as `false` by the router's classifier.
    async fn can_handle_webhook(
        &self,
        headers: &WebhookHeaders,
        payload: &WebhookPayload,
    ) -> ScmResult<bool>;

    /// Parses a webhook into a normalized event.
    ///
    /// Returns `Ok(None)` for events the backend deliberately ignores.
    ///
    /// # Errors
    ///
    /// Returns backend failures; the router returns
    /// [`ScmError::NoWebhookHandler`] when no backend claims the webhook.
    async fn parse_hook(
        &self,
        headers: &WebhookHeaders,
        payload: &WebhookPayload,
    ) -> ScmResult<Option<ParsedHook>>;

    /// Resolves a checkout URL into an SCM URI.
    ///
    /// # Errors
    ///
    /// Returns backend failures or [`ScmError::NotImplemented`].
    async fn parse_url(&self, request: &ParseUrlRequest) -> ScmResult<String>;

    /// Produces the command that checks out a build's source.
    ///
    /// # Errors
    ///
    /// Returns backend failures or [`ScmError::NotImplemented`].
    async fn checkout_command(&self, request: &CheckoutRequest) -> ScmResult<CheckoutCommand>;

    /// Resolves display metadata for an SCM URI.
    ///
    /// # Errors
    ///
    /// Returns backend failures or [`ScmError::NotImplemented`].
    async fn decorate_url(&self, request: &DecorateUrlRequest) -> ScmResult<DecoratedUrl>;

    /// Resolves display metadata for a commit.
    ///
    /// # Errors
    ///
    /// Returns backend failures or [`ScmError::NotImplemented`].
    async fn decorate_commit(&self, request: &DecorateCommitRequest)
    -> ScmResult<DecoratedCommit>;

    /// Resolves display metadata for a user.
    ///
    /// # Errors
    ///
    /// Returns backend failures or [`ScmError::NotImplemented`].
    async fn decorate_author(&self, request: &DecorateAuthorRequest)
    -> ScmResult<DecoratedAuthor>;

    /// Reads a user's permissions on a repository.
    ///
    /// # Errors
    ///
    /// Returns backend failures or [`ScmError::NotImplemented`].
    async fn permissions(&self, request: &PermissionsRequest) -> ScmResult<Permissions>;

    /// Reads a user's membership in an organization.
    ///
    /// # Errors
    ///
    /// Returns backend failures or [`ScmError::NotImplemented`].
    async fn org_permissions(&self, request: &OrgPermissionsRequest)
    -> ScmResult<OrgPermissions>;

    /// Reads the head SHA of a branch or pull request.
    ///
    /// # Errors
    ///
    /// Returns backend failures or [`ScmError::NotImplemented`].
    async fn commit_sha(&self, request: &CommitShaRequest) -> ScmResult<String>;

    /// Reads the SHA a named ref points at.
    ///
    /// # Errors
    ///
    /// Returns backend failures or [`ScmError::NotImplemented`].
    async fn commit_ref_sha(&self, request: &CommitRefShaRequest) -> ScmResult<String>;

    /// Posts a comment on a pull request.
    ///
    /// Returns `Ok(None)` when the backend skips commenting.
    ///
    /// # Errors
    ///
    /// Returns backend failures or [`ScmError::NotImplemented`].
    async fn add_pr_comment(&self, request: &PrCommentRequest) -> ScmResult<Option<PrComment>>;

    /// Sets a status check on a commit.
    ///
    /// # Errors
    ///
    /// Returns backend failures or [`ScmError::NotImplemented`].
    async fn update_commit_status(&self, request: &CommitStatusRequest) -> ScmResult<()>;

    /// Installs a deploy key and returns it, private half included.
    ///
    /// # Errors
    ///
    /// Returns backend failures or [`ScmError::NotImplemented`].
    async fn add_deploy_key(&self, request: &DeployKeyRequest) -> ScmResult<DeployKey>;

    /// Installs or updates a webhook.
    ///
    /// # Errors
    ///
    /// Returns backend failures or [`ScmError::NotImplemented`].
    async fn add_webhook(&self, request: &AddWebhookRequest) -> ScmResult<()>;

    /// Reads one file.
    ///
    /// # Errors
    ///
    /// Returns backend failures or [`ScmError::NotImplemented`].
    async fn file(&self, request: &FileRequest) -> ScmResult<String>;

    /// Lists files changed by an event.
    ///
    /// # Errors
    ///
    /// Returns backend failures or [`ScmError::NotImplemented`].
    async fn changed_files(&self, request: &ChangedFilesRequest) -> ScmResult<Vec<String>>;

    /// Lists branches.
    ///
    /// # Errors
    ///
    /// Returns backend failures or [`ScmError::NotImplemented`].
    async fn branch_list(&self, request: &BranchListRequest) -> ScmResult<Vec<Branch>>;

    /// Lists open pull requests.
    ///
    /// # Errors
    ///
    /// Returns backend failures or [`ScmError::NotImplemented`].
    async fn opened_prs(&self, request: &OpenedPrsRequest) -> ScmResult<Vec<PullRequest>>;

    /// Reads one pull request.
    ///
    /// # Errors
    ///
    /// Returns backend failures or [`ScmError::NotImplemented`].
    async fn pr_info(&self, request: &PrInfoRequest) -> ScmResult<PullRequest>;

    /// Commits files to a new branch and opens a pull request.
    ///
    /// # Errors
    ///
    /// Returns backend failures or [`ScmError::NotImplemented`].
    async fn open_pr(&self, request: &OpenPrRequest) -> ScmResult<PullRequest>;

    /// Returns the OAuth configuration block used by the login handshake.
    ///
    /// # Errors
    ///
    /// Returns backend failures; the router fails on the first one.
    async fn bell_configuration(&self) -> ScmResult<ConfigMap>;
}

/// Errors returned by SCM capability calls.
#[derive(Debug, Clone, Error)]
pub enum ScmError {
    /// The request names no registered SCM context.
    #[error("not implemented for this scm context")]
    NotImplemented,

    /// No registered backend recognized the webhook.
    #[error("there is no suitable webhook handler for this payload")]
    NoWebhookHandler,

    /// No registered backend claims the hostname.
    #[error("no scm context is registered for hostname '{0}'")]
    UnknownHostname(String),

    /// The requested repository object does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The provider rejected the call with an HTTP-like status.
    #[error("provider error {status}: {message}")]
    Provider {
        /// Provider status code.
        status: u16,
        /// Provider message.
        message: String,
    },

    /// Opaque backend failure.
    #[error("scm backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl ScmError {
    /// Wraps an arbitrary backend error.
    #[must_use]
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }

    /// Creates a provider error with a status code.
    #[must_use]
    pub fn provider(status: u16, message: impl Into<String>) -> Self {
        Self::Provider {
            status,
            message: message.into(),
        }
    }

    /// Returns the HTTP status a transport layer should answer with.
    ///
    /// An unmatched webhook maps to `400` so the sender sees a rejection
    /// rather than a server fault.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotImplemented => 501,
            Self::NoWebhookHandler => 400,
            Self::UnknownHostname(_) | Self::NotFound(_) => 404,
            Self::Provider { status, .. } => *status,
            Self::Backend(_) => 500,
        }
    }
}
