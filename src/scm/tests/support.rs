//! Shared builders for router unit tests.

use crate::scm::{
    adapters::RecordingErrorReporter,
    domain::{
        DISPLAY_NAME_KEY, HookType, ParsedHook, PluginOptions, RouterConfig, ScmContext,
        ScmDescriptor,
    },
    ports::{MockScm, Scm},
    services::{PluginCatalog, ScmRouter, ScmRouterResult},
};
use std::sync::Arc;

/// Router type used throughout the unit tests.
pub type TestRouter = ScmRouter<RecordingErrorReporter>;

/// Creates a mock backend that reports `scm_context` as its only key.
pub fn mock_scm(scm_context: &str) -> MockScm {
    let mut scm = MockScm::new();
    scm.expect_scm_contexts()
        .return_const(vec![scm_context.to_owned()]);
    scm
}

/// Creates options carrying only a display name.
pub fn options(display_name: &str) -> PluginOptions {
    PluginOptions::new().with(DISPLAY_NAME_KEY, display_name)
}

/// Creates an array-form descriptor for `plugin`.
pub fn descriptor(plugin: &str) -> ScmDescriptor {
    ScmDescriptor::new(plugin, options(plugin)).expect("descriptor should be valid")
}

/// Wraps a backend in a factory that always hands out the same instance.
pub fn with_backend(catalog: PluginCatalog, plugin: &str, scm: Arc<dyn Scm>) -> PluginCatalog {
    catalog.with_plugin(plugin, move |_| Ok(Arc::clone(&scm)))
}

/// Builds a router over `backends`, loaded in the given order as plugins
/// `mock0`, `mock1`, and so on.
pub fn router_over(
    backends: Vec<MockScm>,
) -> (ScmRouterResult<TestRouter>, RecordingErrorReporter) {
    let mut catalog = PluginCatalog::new();
    let mut descriptors = Vec::new();
    for (index, backend) in backends.into_iter().enumerate() {
        let plugin = format!("mock{index}");
        catalog = with_backend(catalog, &plugin, Arc::new(backend));
        descriptors.push(descriptor(&plugin));
    }
    let reporter = RecordingErrorReporter::new();
    let router = ScmRouter::new(
        RouterConfig::new(descriptors),
        catalog,
        Arc::new(reporter.clone()),
    );
    (router, reporter)
}

/// Builds a router that must construct successfully.
pub fn router(backends: Vec<MockScm>) -> (TestRouter, RecordingErrorReporter) {
    let (router, reporter) = router_over(backends);
    (router.expect("router should construct"), reporter)
}

/// Creates a minimal parsed push hook for `scm_context`.
pub fn push_hook(scm_context: &str) -> ParsedHook {
    ParsedHook {
        scm_context: ScmContext::new(scm_context).expect("valid context"),
        hook_type: HookType::Repo,
        action: "push".to_owned(),
        branch: "main".to_owned(),
        checkout_url: "https://example.com/org/repo.git".to_owned(),
        hook_id: "delivery-1".to_owned(),
        sha: "abc123".to_owned(),
        username: "octocat".to_owned(),
        pr_num: None,
        pr_ref: None,
        last_commit_message: None,
        changed_files: Vec::new(),
    }
}
