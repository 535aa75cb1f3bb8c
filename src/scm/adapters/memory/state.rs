//! Mutable state behind the in-memory backend.

use crate::scm::{
    domain::{BuildStatus, DecoratedAuthor, DeployKey, OrgPermissions, Permissions, PullRequest},
    ports::{ScmError, ScmResult},
};
use serde::Serialize;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// One capability call observed by the backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordedCall {
    /// Capability name, e.g. `commit_sha`.
    pub method: &'static str,
    /// The request as it was received.
    pub request: Value,
}

/// A commit status written through `update_commit_status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitStatusRecord {
    /// Repository in `owner/repo` form.
    pub repository: String,
    /// Commit SHA.
    pub sha: String,
    /// Build outcome.
    pub build_status: BuildStatus,
    /// Job the status belongs to.
    pub job_name: String,
    /// Link to the build.
    pub url: String,
    /// Status description.
    pub description: Option<String>,
}

/// A pull request comment written through `add_pr_comment`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRecord {
    /// Repository in `owner/repo` form.
    pub repository: String,
    /// Pull request number.
    pub pr_num: u64,
    /// Provider comment identifier.
    pub comment_id: String,
    /// Comment body.
    pub comment: String,
}

/// A webhook installed through `add_webhook`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookRecord {
    /// Repository in `owner/repo` form.
    pub repository: String,
    /// Delivery URL.
    pub webhook_url: String,
    /// Subscribed actions.
    pub actions: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub(super) struct BranchState {
    pub(super) sha: String,
    pub(super) files: BTreeMap<String, String>,
}

#[derive(Debug, Clone)]
pub(super) struct PullRequestState {
    pub(super) pull_request: PullRequest,
    pub(super) files: Vec<String>,
}

#[derive(Debug, Clone)]
pub(super) struct RepositoryState {
    pub(super) default_branch: String,
    pub(super) branches: BTreeMap<String, BranchState>,
    pub(super) tags: BTreeMap<String, String>,
    pub(super) collaborators: HashMap<String, Permissions>,
    pub(super) pull_requests: BTreeMap<u64, PullRequestState>,
}

impl RepositoryState {
    pub(super) fn new(default_branch: &str, head_sha: &str) -> Self {
        let mut branches = BTreeMap::new();
        branches.insert(
            default_branch.to_owned(),
            BranchState {
                sha: head_sha.to_owned(),
                files: BTreeMap::new(),
            },
        );
        Self {
            default_branch: default_branch.to_owned(),
            branches,
            tags: BTreeMap::new(),
            collaborators: HashMap::new(),
            pull_requests: BTreeMap::new(),
        }
    }

    pub(super) fn branch(&self, name: &str) -> ScmResult<&BranchState> {
        self.branches
            .get(name)
            .ok_or_else(|| ScmError::NotFound(format!("branch '{name}'")))
    }

    pub(super) fn pull_request(&self, number: u64) -> ScmResult<&PullRequestState> {
        self.pull_requests
            .get(&number)
            .ok_or_else(|| ScmError::NotFound(format!("pull request #{number}")))
    }

    pub(super) fn next_pr_number(&self) -> u64 {
        self.pull_requests
            .keys()
            .next_back()
            .map_or(1, |last| last.saturating_add(1))
    }
}

#[derive(Debug, Clone)]
pub(super) struct CommitState {
    pub(super) message: String,
    pub(super) author: String,
    pub(super) committer: String,
}

#[derive(Debug, Default)]
pub(super) struct MemoryState {
    pub(super) repositories: BTreeMap<String, RepositoryState>,
    pub(super) commits: HashMap<String, CommitState>,
    pub(super) users: HashMap<String, DecoratedAuthor>,
    pub(super) organizations: HashMap<String, HashMap<String, OrgPermissions>>,
    pub(super) comments: Vec<CommentRecord>,
    pub(super) statuses: Vec<CommitStatusRecord>,
    pub(super) deploy_keys: Vec<(String, DeployKey)>,
    pub(super) webhooks: Vec<WebhookRecord>,
    pub(super) calls: Vec<RecordedCall>,
    pub(super) failures: HashMap<&'static str, ScmError>,
    pub(super) webhook_verdict: Option<ScmResult<bool>>,
    pub(super) failed_calls: u64,
}

impl MemoryState {
    pub(super) fn repository(&self, full_name: &str) -> ScmResult<&RepositoryState> {
        self.repositories
            .get(full_name)
            .ok_or_else(|| ScmError::NotFound(format!("repository '{full_name}'")))
    }

    pub(super) fn repository_mut(&mut self, full_name: &str) -> ScmResult<&mut RepositoryState> {
        self.repositories
            .get_mut(full_name)
            .ok_or_else(|| ScmError::NotFound(format!("repository '{full_name}'")))
    }
}
