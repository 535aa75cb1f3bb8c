//! Shared helpers for in-memory router integration tests.

use rstest::fixture;
use scm_router::scm::{
    adapters::{InMemoryScm, InMemoryScmSettings, RecordingErrorReporter},
    domain::{DISPLAY_NAME_KEY, PluginOptions, RouterConfig, ScmDescriptor},
    ports::{Scm, ScmResult},
    services::{PluginCatalog, ScmRouter},
};
use serde_json::{Map, Value, json};
use std::sync::Arc;

/// Router type used by the integration tests.
pub type MemoryRouter = ScmRouter<RecordingErrorReporter>;

/// Repository seeded into both backends.
pub const REPO: &str = "acme/widgets";

/// Head commit of the seeded repository's default branch.
pub const HEAD: &str = "0123456789abcdef0123456789abcdef01234567";

/// Context of the GitHub-like backend.
pub const GITHUB: &str = "memory:github.test";

/// Context of the GitLab-like backend.
pub const GITLAB: &str = "memory:gitlab.test";

/// Two in-memory backends behind one router, with handles kept for
/// inspection.
pub struct Fleet {
    /// Router over both backends.
    pub router: MemoryRouter,
    /// Diagnostics reported by the router.
    pub reporter: RecordingErrorReporter,
    /// Backend registered first.
    pub github: InMemoryScm,
    /// Backend registered second.
    pub gitlab: InMemoryScm,
}

/// Creates a backend for `hostname` that recognizes `event_header` and
/// reports `bell` as its notification settings.
pub fn backend(hostname: &str, event_header: &str, bell: Value) -> InMemoryScm {
    let settings = InMemoryScmSettings {
        display_name: format!("{hostname} (memory)"),
        webhook_event_header: event_header.to_owned(),
        bell: object(bell),
        ..InMemoryScmSettings::for_hostname(hostname)
    };
    let scm = InMemoryScm::new(settings);
    scm.add_repository(REPO, "main", HEAD);
    scm
}

/// Unwraps a JSON object, treating anything else as empty.
pub fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// Adds a plugin that hands out a clone of `scm`.
pub fn register(catalog: PluginCatalog, plugin: &str, scm: &InMemoryScm) -> PluginCatalog {
    let handle = scm.clone();
    catalog.with_plugin(plugin, move |_: &PluginOptions| -> ScmResult<Arc<dyn Scm>> {
        Ok(Arc::new(handle.clone()))
    })
}

/// Creates a descriptor whose display name equals the plugin name.
pub fn descriptor(plugin: &str) -> ScmDescriptor {
    ScmDescriptor::new(plugin, PluginOptions::new().with(DISPLAY_NAME_KEY, plugin))
        .expect("descriptor should be valid")
}

/// Provides the two-backend fleet.
#[fixture]
pub fn fleet() -> Fleet {
    let github = backend(
        "github.test",
        "x-github-event",
        json!({ "github": { "slack": "#builds" } }),
    );
    let gitlab = backend(
        "gitlab.test",
        "x-gitlab-event",
        json!({ "gitlab": { "email": "ci@acme.test" } }),
    );
    let catalog = register(register(PluginCatalog::new(), "github", &github), "gitlab", &gitlab);
    let reporter = RecordingErrorReporter::new();
    let router = ScmRouter::new(
        RouterConfig::new(vec![descriptor("github"), descriptor("gitlab")]),
        catalog,
        Arc::new(reporter.clone()),
    )
    .expect("router should construct");

    Fleet {
        router,
        reporter,
        github,
        gitlab,
    }
}
