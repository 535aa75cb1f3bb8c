//! Domain model for SCM backend routing.
//!
//! The domain covers context keys, backend descriptors, webhook inputs, and
//! the request and response values exchanged with backends. Nothing here
//! performs I/O or knows which backends exist.

mod context;
mod descriptor;
mod error;
mod models;
mod request;
mod webhook;

pub use context::ScmContext;
pub use descriptor::{DISPLAY_NAME_KEY, PluginOptions, RouterConfig, ScmDescriptor};
pub use error::ScmDomainError;
pub use models::{
    Branch, BuildStatus, CheckoutCommand, DecoratedAuthor, DecoratedCommit, DecoratedUrl,
    DeployKey, OrgPermissions, Permissions, PrComment, PrFile, PullRequest, ReadOnlyInfo, RefType,
};
pub use request::{
    AddWebhookRequest, BranchListRequest, ChangedFilesRequest, CheckoutRequest,
    CommitRefShaRequest, CommitShaRequest, CommitStatusRequest, ContextRequest,
    DecorateAuthorRequest, DecorateCommitRequest, DecorateUrlRequest, DeployKeyRequest,
    EnterpriseUserRequest, FileRequest, OpenPrRequest, OpenedPrsRequest, OrgPermissionsRequest,
    ParseUrlRequest, PermissionsRequest, PrCommentRequest, PrInfoRequest, ScopedRequest,
};
pub use webhook::{HookType, ParsedHook, WebhookHeaders, WebhookPayload};

/// JSON object returned by fan-out capabilities such as bell configuration
/// and stats.
pub type ConfigMap = serde_json::Map<String, serde_json::Value>;
