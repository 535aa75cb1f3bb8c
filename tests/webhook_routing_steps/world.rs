//! World state for webhook routing BDD scenarios.

use std::collections::BTreeMap;
use std::sync::Arc;

use eyre::eyre;
use rstest::fixture;
use scm_router::scm::{
    adapters::{InMemoryScm, InMemoryScmSettings, RecordingErrorReporter},
    domain::{DISPLAY_NAME_KEY, ParsedHook, PluginOptions, RouterConfig, ScmDescriptor},
    ports::{Scm, ScmResult},
    services::{PluginCatalog, ScmRouter},
};
use tracing_subscriber::EnvFilter;

pub type WebhookRouter = ScmRouter<RecordingErrorReporter>;

/// World state for webhook routing tests.
#[derive(Default)]
pub struct WebhookWorld {
    pub router: Option<WebhookRouter>,
    pub reporter: RecordingErrorReporter,
    pub backends: BTreeMap<String, InMemoryScm>,
    pub outcome: Option<ScmResult<Option<ParsedHook>>>,
}

impl WebhookWorld {
    pub fn router(&self) -> Result<&WebhookRouter, eyre::Report> {
        self.router
            .as_ref()
            .ok_or_else(|| eyre!("router should be built"))
    }

    pub fn backend(&self, hostname: &str) -> Result<&InMemoryScm, eyre::Report> {
        self.backends
            .get(hostname)
            .ok_or_else(|| eyre!("no backend for {hostname}"))
    }

    /// Builds a router with one in-memory backend per hostname, registered
    /// in the given order. Each backend recognises `x-<name>-event`, where
    /// `<name>` is the first hostname label.
    pub fn build(&mut self, hostnames: &[&str]) -> Result<(), eyre::Report> {
        let mut catalog = PluginCatalog::new();
        let mut descriptors = Vec::new();
        for &hostname in hostnames {
            let name = hostname.split('.').next().unwrap_or(hostname);
            let settings = InMemoryScmSettings {
                webhook_event_header: format!("x-{name}-event"),
                ..InMemoryScmSettings::for_hostname(hostname)
            };
            let scm = InMemoryScm::new(settings);
            scm.add_repository("acme/widgets", "main", "abc123");
            let handle = scm.clone();
            catalog = catalog.with_plugin(
                name,
                move |_: &PluginOptions| -> ScmResult<Arc<dyn Scm>> { Ok(Arc::new(handle.clone())) },
            );
            descriptors.push(ScmDescriptor::new(
                name,
                PluginOptions::new().with(DISPLAY_NAME_KEY, name),
            )?);
            self.backends.insert(hostname.to_owned(), scm);
        }

        let router = ScmRouter::new(
            RouterConfig::new(descriptors),
            catalog,
            Arc::new(self.reporter.clone()),
        )?;
        self.router = Some(router);
        Ok(())
    }
}

#[fixture]
pub fn world() -> WebhookWorld {
    let _subscriber_installed = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .is_ok();
    WebhookWorld::default()
}

pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
