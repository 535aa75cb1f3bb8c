//! When steps for webhook routing scenarios.

use super::world::{WebhookWorld, run_async};
use rstest_bdd_macros::when;
use scm_router::scm::{
    domain::{WebhookHeaders, WebhookPayload},
    ports::Scm,
};
use serde_json::json;

fn push_payload() -> WebhookPayload {
    WebhookPayload::from_json(&json!({
        "repository": "acme/widgets",
        "branch": "main",
        "sha": "abc123",
        "username": "alice"
    }))
}

fn deliver(world: &mut WebhookWorld, headers: &WebhookHeaders) -> Result<(), eyre::Report> {
    let outcome = run_async(world.router()?.parse_hook(headers, &push_payload()));
    world.outcome = Some(outcome);
    Ok(())
}

#[when("a push webhook arrives with header {header}")]
fn push_webhook_with_header(world: &mut WebhookWorld, header: String) -> Result<(), eyre::Report> {
    let headers = WebhookHeaders::new().with(&header, "repo");
    deliver(world, &headers)
}

#[when("a push webhook arrives carrying every event header")]
fn push_webhook_with_every_header(world: &mut WebhookWorld) -> Result<(), eyre::Report> {
    let headers = world
        .backends
        .values()
        .map(|scm| (scm.settings().webhook_event_header.clone(), "repo".to_owned()))
        .collect::<WebhookHeaders>();
    deliver(world, &headers)
}
