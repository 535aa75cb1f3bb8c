//! Tests for per-context dispatch through a router of in-memory backends.

use super::helpers::{Fleet, GITHUB, GITLAB, HEAD, REPO, fleet};
use rstest::rstest;
use scm_router::scm::{
    domain::{
        BuildStatus, CommitStatusRequest, ContextRequest, FileRequest, HookType, OpenPrRequest,
        PrCommentRequest, PrFile, WebhookHeaders, WebhookPayload,
    },
    ports::{Scm, ScmError},
};
use serde_json::json;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn calls_reach_only_the_addressed_backend(fleet: Fleet) {
    fleet
        .gitlab
        .put_file(REPO, "main", "screwdriver.yaml", "jobs: {}")
        .expect("file should be stored");

    let content = fleet
        .router
        .file(&FileRequest {
            scm_context: Some(GITLAB.to_owned()),
            scm_uri: "gitlab.test:acme/widgets:main".to_owned(),
            token: "alice".to_owned(),
            path: "screwdriver.yaml".to_owned(),
            ref_name: None,
        })
        .await
        .expect("file should be read");

    assert_eq!(content, "jobs: {}");
    assert_eq!(fleet.gitlab.calls_to("file").len(), 1);
    assert!(fleet.github.calls_to("file").is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn pull_request_workflow_runs_against_one_backend(fleet: Fleet) {
    let opened = fleet
        .router
        .open_pr(&OpenPrRequest {
            scm_context: Some(GITHUB.to_owned()),
            checkout_url: "https://github.test/acme/widgets.git".to_owned(),
            token: "alice".to_owned(),
            files: vec![PrFile {
                name: "CHANGELOG.md".to_owned(),
                content: "## 1.0.0".to_owned(),
            }],
            title: "Release 1.0.0".to_owned(),
            message: "release".to_owned(),
        })
        .await
        .expect("pull request should open");

    let comment = fleet
        .router
        .add_pr_comment(&PrCommentRequest {
            scm_context: Some(GITHUB.to_owned()),
            scm_uri: "github.test:acme/widgets:main".to_owned(),
            token: "alice".to_owned(),
            pr_num: opened.number,
            comment: "Build passed".to_owned(),
        })
        .await
        .expect("comment should be added");
    fleet
        .router
        .update_commit_status(&CommitStatusRequest {
            scm_context: Some(GITHUB.to_owned()),
            scm_uri: "github.test:acme/widgets:main".to_owned(),
            token: "alice".to_owned(),
            sha: opened.sha.clone(),
            build_status: BuildStatus::Success,
            job_name: "main".to_owned(),
            url: "https://cd.acme.test/builds/1".to_owned(),
            description: None,
        })
        .await
        .expect("status should be recorded");

    assert!(comment.is_some());
    assert_eq!(fleet.github.comments().len(), 1);
    assert_eq!(fleet.github.commit_statuses().len(), 1);
    assert!(fleet.gitlab.calls().is_empty());
}

#[rstest]
fn backend_failure_surfaces_through_the_router(fleet: Fleet) {
    fleet
        .github
        .fail_on("display_name", ScmError::provider(503, "maintenance"));

    let failed = fleet.router.display_name(&ContextRequest::new(GITHUB));
    let healthy = fleet.router.display_name(&ContextRequest::new(GITLAB));

    assert!(matches!(failed, Err(ScmError::Provider { status: 503, .. })));
    assert_eq!(healthy.expect("gitlab should answer"), "gitlab.test (memory)");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn webhook_is_parsed_by_the_backend_that_claims_it(fleet: Fleet) {
    let headers = WebhookHeaders::new()
        .with("X-GitLab-Event", "repo")
        .with("x-memory-delivery", "delivery-9");
    let payload = WebhookPayload::from_json(&json!({
        "repository": REPO,
        "branch": "main",
        "sha": HEAD,
        "username": "alice"
    }));

    let hook = fleet
        .router
        .parse_hook(&headers, &payload)
        .await
        .expect("webhook should be routed")
        .expect("push events produce a hook");

    assert_eq!(hook.scm_context.as_str(), GITLAB);
    assert_eq!(hook.hook_type, HookType::Repo);
    assert_eq!(fleet.github.calls_to("can_handle_webhook").len(), 1);
    assert!(fleet.github.calls_to("parse_hook").is_empty());
    assert_eq!(fleet.gitlab.calls_to("parse_hook").len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn webhook_without_known_event_header_is_rejected(fleet: Fleet) {
    let headers = WebhookHeaders::new().with("x-bitbucket-event", "repo");
    let payload = WebhookPayload::from_json(&json!({ "repository": REPO }));

    let claimed = fleet
        .router
        .can_handle_webhook(&headers, &payload)
        .await
        .expect("classification should not fail");
    let parsed = fleet.router.parse_hook(&headers, &payload).await;

    assert!(!claimed);
    assert!(matches!(parsed, Err(ScmError::NoWebhookHandler)));
}

#[rstest]
fn hostname_resolves_to_the_serving_backend(fleet: Fleet) {
    let resolved = fleet
        .router
        .scm_context_for_hostname("gitlab.test")
        .expect("hostname should resolve");

    assert_eq!(resolved, GITLAB);
}
