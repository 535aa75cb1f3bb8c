//! Then steps for webhook routing scenarios.

use super::world::WebhookWorld;
use eyre::eyre;
use rstest_bdd_macros::then;
use scm_router::scm::{domain::ParsedHook, ports::ScmError};

fn parsed_hook(world: &WebhookWorld) -> Result<&ParsedHook, eyre::Report> {
    match world.outcome.as_ref() {
        Some(Ok(Some(hook))) => Ok(hook),
        Some(Ok(None)) => Err(eyre!("webhook was claimed but produced no hook")),
        Some(Err(err)) => Err(eyre!("webhook routing failed: {err}")),
        None => Err(eyre!("no webhook was delivered")),
    }
}

#[then("the hook is attributed to {scm_context}")]
fn hook_is_attributed(world: &WebhookWorld, scm_context: String) -> Result<(), eyre::Report> {
    let hook = parsed_hook(world)?;
    if hook.scm_context.as_str() != scm_context {
        return Err(eyre!(
            "expected hook from {scm_context}, got {}",
            hook.scm_context
        ));
    }
    Ok(())
}

#[then("the backend for {hostname} checked the webhook {count:usize} times")]
fn backend_checked_webhook(
    world: &WebhookWorld,
    hostname: String,
    count: usize,
) -> Result<(), eyre::Report> {
    let checks = world.backend(&hostname)?.calls_to("can_handle_webhook").len();
    if checks != count {
        return Err(eyre!("expected {count} checks on {hostname}, got {checks}"));
    }
    Ok(())
}

#[then("the webhook is rejected with status {status:u16}")]
fn webhook_is_rejected(world: &WebhookWorld, status: u16) -> Result<(), eyre::Report> {
    match world.outcome.as_ref() {
        Some(Err(err @ ScmError::NoWebhookHandler)) if err.status_code() == status => Ok(()),
        Some(other) => Err(eyre!("expected rejection with {status}, got {other:?}")),
        None => Err(eyre!("no webhook was delivered")),
    }
}

#[then("no backend parsed the webhook")]
fn no_backend_parsed(world: &WebhookWorld) -> Result<(), eyre::Report> {
    let parsers: Vec<&String> = world
        .backends
        .iter()
        .filter(|(_, scm)| !scm.calls_to("parse_hook").is_empty())
        .map(|(hostname, _)| hostname)
        .collect();
    if parsers.is_empty() {
        Ok(())
    } else {
        Err(eyre!("webhook was parsed by {parsers:?}"))
    }
}

#[then("{count:usize} diagnostics are reported")]
fn diagnostics_reported(world: &WebhookWorld, count: usize) -> Result<(), eyre::Report> {
    let reported = world.reporter.len();
    if reported != count {
        return Err(eyre!("expected {count} diagnostics, got {reported}"));
    }
    Ok(())
}
