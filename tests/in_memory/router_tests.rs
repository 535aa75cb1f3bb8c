//! Tests for building routers over the built-in in-memory plugin.

use rstest::rstest;
use scm_router::scm::{
    adapters::{MEMORY_PLUGIN_NAME, RecordingErrorReporter, TracingErrorReporter, builtin_catalog},
    domain::{ContextRequest, ScmDomainError},
    ports::{RouterDiagnostic, Scm},
    services::{ScmRouter, ScmRouterError},
};
use serde_json::json;
use std::sync::Arc;

#[rstest]
fn document_with_two_hosts_registers_both() {
    let reporter = RecordingErrorReporter::new();
    let router = ScmRouter::from_value(
        json!({
            "ecosystem": { "webhookEventHeader": "x-acme-event" },
            "scms": [
                {
                    "plugin": MEMORY_PLUGIN_NAME,
                    "config": { "displayName": "Primary", "hostname": "git.acme.test" }
                },
                {
                    "plugin": MEMORY_PLUGIN_NAME,
                    "config": { "displayName": "Mirror", "hostname": "mirror.acme.test" }
                }
            ]
        }),
        builtin_catalog(),
        Arc::new(reporter.clone()),
    )
    .expect("router should construct");

    assert_eq!(
        router.scm_contexts(),
        vec!["memory:git.acme.test", "memory:mirror.acme.test"]
    );
    let name = router
        .display_name(&ContextRequest::new("memory:mirror.acme.test"))
        .expect("display name should resolve");
    assert_eq!(name, "Mirror");
    assert!(reporter.is_empty());
}

#[rstest]
fn repeated_hostname_is_registered_once() {
    let reporter = RecordingErrorReporter::new();
    let router = ScmRouter::from_value(
        json!({
            "scms": [
                {
                    "plugin": "memory",
                    "config": { "displayName": "One", "hostname": "git.acme.test" }
                },
                {
                    "plugin": "memory",
                    "config": { "displayName": "Two", "hostname": "git.acme.test" }
                }
            ]
        }),
        builtin_catalog(),
        Arc::new(reporter.clone()),
    )
    .expect("router should construct");

    assert_eq!(router.contexts().len(), 1);
    let name = router
        .display_name(&ContextRequest::new("memory:git.acme.test"))
        .expect("display name should resolve");
    assert_eq!(name, "One");
    assert!(matches!(
        reporter.diagnostics().as_slice(),
        [RouterDiagnostic::DuplicateContext { .. }]
    ));
}

#[rstest]
fn legacy_document_names_backends_by_key() {
    let router = ScmRouter::from_value(
        json!({
            "scms": {
                "Acme Git": { "plugin": "memory", "config": { "hostname": "git.acme.test" } }
            }
        }),
        builtin_catalog(),
        Arc::new(TracingErrorReporter),
    )
    .expect("router should construct");

    let name = router
        .display_name(&ContextRequest::new("memory:git.acme.test"))
        .expect("display name should resolve");
    assert_eq!(name, "Acme Git");
}

#[rstest]
fn document_of_only_unknown_plugins_has_no_usable_backend() {
    let reporter = RecordingErrorReporter::new();
    let result = ScmRouter::from_value(
        json!({
            "scms": [
                { "plugin": "subversion", "config": { "displayName": "SVN" } },
                { "plugin": "router", "config": { "displayName": "Nested" } }
            ]
        }),
        builtin_catalog(),
        Arc::new(reporter.clone()),
    );

    assert!(matches!(
        result,
        Err(ScmRouterError::Domain(ScmDomainError::NoUsableBackend))
    ));
    assert_eq!(reporter.len(), 2);
}

#[rstest]
fn mistyped_backend_settings_abort_construction() {
    let result = ScmRouter::from_value(
        json!({
            "scms": [
                { "plugin": "memory", "config": { "displayName": "Bad", "hostname": 7 } }
            ]
        }),
        builtin_catalog(),
        Arc::new(TracingErrorReporter),
    );

    assert!(matches!(
        result,
        Err(ScmRouterError::PluginConstruction { plugin, .. }) if plugin == "memory"
    ));
}

#[rstest]
fn legacy_document_registers_backends_in_document_order() {
    let document: serde_json::Value = serde_json::from_str(
        r#"{
            "scms": {
                "Zeta SCM": { "plugin": "memory", "config": { "hostname": "first.test" } },
                "Alpha SCM": { "plugin": "memory", "config": { "hostname": "second.test" } }
            }
        }"#,
    )
    .expect("document should parse");

    let router = ScmRouter::from_value(
        document,
        builtin_catalog(),
        Arc::new(RecordingErrorReporter::new()),
    )
    .expect("router should construct");

    assert_eq!(
        router.scm_contexts(),
        vec!["memory:first.test", "memory:second.test"]
    );
}
