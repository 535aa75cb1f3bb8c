//! Webhook classification: find the backend that owns an inbound webhook.

use super::registry::RegisteredScm;
use crate::scm::{
    domain::{WebhookHeaders, WebhookPayload},
    ports::{ErrorReporter, RouterDiagnostic, Scm, ScmError, ScmResult},
};
use std::sync::Arc;
use tracing::debug;

/// Returns the first candidate whose predicate claims the webhook.
///
/// Candidates are asked strictly in order and the scan stops at the first
/// `true`, so registration order decides between backends that would both
/// claim an ambiguous payload. A failing predicate counts as `false` and is
/// handed to `reporter`.
///
/// # Errors
///
/// Returns [`ScmError::NoWebhookHandler`] when no candidate claims the
/// webhook.
pub async fn classify_webhook(
    candidates: &[RegisteredScm],
    headers: &WebhookHeaders,
    payload: &WebhookPayload,
    reporter: &dyn ErrorReporter,
) -> ScmResult<Arc<dyn Scm>> {
    for (scm_context, scm) in candidates {
        match scm.can_handle_webhook(headers, payload).await {
            Ok(true) => {
                debug!(scm_context = %scm_context, "webhook claimed");
                return Ok(Arc::clone(scm));
            }
            Ok(false) => {}
            Err(error) => reporter.report(&RouterDiagnostic::WebhookPredicateFailed {
                scm_context: scm_context.clone(),
                error,
            }),
        }
    }

    debug!(candidates = candidates.len(), "no backend claimed webhook");
    Err(ScmError::NoWebhookHandler)
}
