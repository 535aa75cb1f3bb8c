//! [`Scm`] implementation for the router.
//!
//! Each capability resolves the target backend and calls the same method
//! with the caller's request. Results and errors are returned as the backend
//! produced them.

use super::{aggregate::merge_in_order, router::ScmRouter};
use crate::scm::{
    domain::{
        AddWebhookRequest, Branch, BranchListRequest, ChangedFilesRequest, CheckoutCommand,
        CheckoutRequest, CommitRefShaRequest, CommitShaRequest, CommitStatusRequest, ConfigMap,
        ContextRequest, DecorateAuthorRequest, DecorateCommitRequest, DecorateUrlRequest,
        DecoratedAuthor, DecoratedCommit, DecoratedUrl, DeployKey, DeployKeyRequest,
        EnterpriseUserRequest, FileRequest, OpenPrRequest, OpenedPrsRequest, OrgPermissions,
        OrgPermissionsRequest, ParseUrlRequest, ParsedHook, Permissions, PermissionsRequest,
        PrComment, PrCommentRequest, PrInfoRequest, PullRequest, ReadOnlyInfo, WebhookHeaders,
        WebhookPayload,
    },
    ports::{ErrorReporter, Scm, ScmError, ScmResult},
};
use async_trait::async_trait;

#[async_trait]
impl<R> Scm for ScmRouter<R>
where
    R: ErrorReporter + 'static,
{
    fn scm_contexts(&self) -> Vec<String> {
        self.contexts().into_iter().map(String::from).collect()
    }

    fn scm_context_for_hostname(&self, hostname: &str) -> ScmResult<String> {
        self.registry()
            .snapshot()
            .into_iter()
            .find(|(scm_context, scm)| {
                scm.scm_context_for_hostname(hostname)
                    .is_ok_and(|claimed| claimed == scm_context.as_str())
            })
            .map(|(scm_context, _)| scm_context.into())
            .ok_or_else(|| ScmError::UnknownHostname(hostname.to_owned()))
    }

    fn display_name(&self, request: &ContextRequest) -> ScmResult<String> {
        self.scm_for(request)?.display_name(request)
    }

    fn read_only_info(&self, request: &ContextRequest) -> ScmResult<ReadOnlyInfo> {
        self.scm_for(request)?.read_only_info(request)
    }

    fn is_enterprise_user(&self, request: &EnterpriseUserRequest) -> ScmResult<bool> {
        self.scm_for(request)?.is_enterprise_user(request)
    }

    fn auto_deploy_key_generation_enabled(&self, request: &ContextRequest) -> ScmResult<bool> {
        self.scm_for(request)?.auto_deploy_key_generation_enabled(request)
    }

    fn webhook_events_mapping(&self, request: &ContextRequest) -> ScmResult<ConfigMap> {
        self.scm_for(request)?.webhook_events_mapping(request)
    }

    fn stats(&self) -> ScmResult<ConfigMap> {
        let candidates = self.registry().snapshot();
        merge_in_order(candidates.iter().map(|(_, scm)| scm.stats()))
    }

    async fn can_handle_webhook(
        &self,
        headers: &WebhookHeaders,
        payload: &WebhookPayload,
    ) -> ScmResult<bool> {
        match self.choose_webhook_scm(headers, payload).await {
            Ok(_) => Ok(true),
            Err(ScmError::NoWebhookHandler) => Ok(false),
            Err(err) => Err(err),
        }
    }

    async fn parse_hook(
        &self,
        headers: &WebhookHeaders,
        payload: &WebhookPayload,
    ) -> ScmResult<Option<ParsedHook>> {
        self.choose_webhook_scm(headers, payload)
            .await?
            .parse_hook(headers, payload)
            .await
    }

    async fn parse_url(&self, request: &ParseUrlRequest) -> ScmResult<String> {
        self.choose_scm(request).await?.parse_url(request).await
    }

    async fn checkout_command(&self, request: &CheckoutRequest) -> ScmResult<CheckoutCommand> {
        self.choose_scm(request)
            .await?
            .checkout_command(request)
            .await
    }

    async fn decorate_url(&self, request: &DecorateUrlRequest) -> ScmResult<DecoratedUrl> {
        self.choose_scm(request).await?.decorate_url(request).await
    }

    async fn decorate_commit(
        &self,
        request: &DecorateCommitRequest,
    ) -> ScmResult<DecoratedCommit> {
        self.choose_scm(request)
            .await?
            .decorate_commit(request)
            .await
    }

    async fn decorate_author(
        &self,
        request: &DecorateAuthorRequest,
    ) -> ScmResult<DecoratedAuthor> {
        self.choose_scm(request)
            .await?
            .decorate_author(request)
            .await
    }

    async fn permissions(&self, request: &PermissionsRequest) -> ScmResult<Permissions> {
        self.choose_scm(request).await?.permissions(request).await
    }

    async fn org_permissions(
        &self,
        request: &OrgPermissionsRequest,
    ) -> ScmResult<OrgPermissions> {
        self.choose_scm(request)
            .await?
            .org_permissions(request)
            .await
    }

    async fn commit_sha(&self, request: &CommitShaRequest) -> ScmResult<String> {
        self.choose_scm(request).await?.commit_sha(request).await
    }

    async fn commit_ref_sha(&self, request: &CommitRefShaRequest) -> ScmResult<String> {
        self.choose_scm(request)
            .await?
            .commit_ref_sha(request)
            .await
    }

    async fn add_pr_comment(&self, request: &PrCommentRequest) -> ScmResult<Option<PrComment>> {
        self.choose_scm(request)
            .await?
            .add_pr_comment(request)
            .await
    }

    async fn update_commit_status(&self, request: &CommitStatusRequest) -> ScmResult<()> {
        self.choose_scm(request)
            .await?
            .update_commit_status(request)
            .await
    }

    async fn add_deploy_key(&self, request: &DeployKeyRequest) -> ScmResult<DeployKey> {
        self.choose_scm(request)
            .await?
            .add_deploy_key(request)
            .await
    }

    async fn add_webhook(&self, request: &AddWebhookRequest) -> ScmResult<()> {
        self.choose_scm(request).await?.add_webhook(request).await
    }

    async fn file(&self, request: &FileRequest) -> ScmResult<String> {
        self.choose_scm(request).await?.file(request).await
    }

    async fn changed_files(&self, request: &ChangedFilesRequest) -> ScmResult<Vec<String>> {
        self.choose_scm(request)
            .await?
            .changed_files(request)
            .await
    }

    async fn branch_list(&self, request: &BranchListRequest) -> ScmResult<Vec<Branch>> {
        self.choose_scm(request).await?.branch_list(request).await
    }

    async fn opened_prs(&self, request: &OpenedPrsRequest) -> ScmResult<Vec<PullRequest>> {
        self.choose_scm(request).await?.opened_prs(request).await
    }

    async fn pr_info(&self, request: &PrInfoRequest) -> ScmResult<PullRequest> {
        self.choose_scm(request).await?.pr_info(request).await
    }

    async fn open_pr(&self, request: &OpenPrRequest) -> ScmResult<PullRequest> {
        self.choose_scm(request).await?.open_pr(request).await
    }

    async fn bell_configuration(&self) -> ScmResult<ConfigMap> {
        self.all_scm(|scm| async move { scm.bell_configuration().await })
            .await
    }
}
