//! Router that presents every loaded backend as one SCM.
//!
//! Provides [`ScmRouter`], which loads backends from descriptors and picks
//! the backend for each call: by explicit context, by webhook ownership, or
//! all of them for fan-out reads.

use super::{
    aggregate::fan_out,
    catalog::PluginCatalog,
    classifier::classify_webhook,
    loader::{self, LoadOutcome},
    registry::ContextRegistry,
};
use crate::scm::{
    domain::{
        ConfigMap, PluginOptions, RouterConfig, ScmContext, ScmDomainError, ScopedRequest,
        WebhookHeaders, WebhookPayload,
    },
    ports::{ErrorReporter, Scm, ScmError, ScmResult},
};
use std::future::Future;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors raised while building or extending the router.
#[derive(Debug, Error)]
pub enum ScmRouterError {
    /// Configuration is invalid or left no usable backend.
    #[error(transparent)]
    Domain(#[from] ScmDomainError),

    /// A backend factory failed; the whole construction is aborted.
    #[error("failed to construct scm plugin '{plugin}': {source}")]
    PluginConstruction {
        /// Plugin whose factory failed.
        plugin: String,
        /// Factory error.
        #[source]
        source: ScmError,
    },
}

/// Result type for router construction.
pub type ScmRouterResult<T> = Result<T, ScmRouterError>;

/// Registry-and-dispatch engine over a set of SCM backends.
///
/// The router implements [`Scm`] itself, so callers can hold it wherever a
/// single backend is expected.
pub struct ScmRouter<R>
where
    R: ErrorReporter,
{
    registry: ContextRegistry,
    catalog: PluginCatalog,
    shared: PluginOptions,
    reporter: Arc<R>,
}

impl<R> ScmRouter<R>
where
    R: ErrorReporter,
{
    /// Builds a router and loads every descriptor in order.
    ///
    /// Plugins that cannot be resolved, report a bad context, or reuse a
    /// registered context are skipped and reported.
    ///
    /// # Errors
    ///
    /// Returns [`ScmRouterError::PluginConstruction`] when a backend factory
    /// fails, or [`ScmDomainError::NoUsableBackend`] when nothing registered.
    pub fn new(
        config: RouterConfig,
        catalog: PluginCatalog,
        reporter: Arc<R>,
    ) -> ScmRouterResult<Self> {
        let router = Self {
            registry: ContextRegistry::new(),
            catalog,
            shared: config.shared().clone(),
            reporter,
        };

        for descriptor in config.descriptors() {
            router.load_plugin(descriptor.plugin(), descriptor.config())?;
        }

        if router.registry.is_empty() {
            return Err(ScmDomainError::NoUsableBackend.into());
        }

        Ok(router)
    }

    /// Parses a configuration document and builds a router from it.
    ///
    /// # Errors
    ///
    /// Returns configuration errors from [`RouterConfig::from_value`] and
    /// every error of [`Self::new`].
    pub fn from_value(
        value: serde_json::Value,
        catalog: PluginCatalog,
        reporter: Arc<R>,
    ) -> ScmRouterResult<Self> {
        Self::new(RouterConfig::from_value(value)?, catalog, reporter)
    }

    /// Loads one more backend.
    ///
    /// `config` is layered over the router's shared options. Returns the new
    /// context, or `None` when the plugin was skipped and reported.
    ///
    /// # Errors
    ///
    /// Returns [`ScmRouterError::PluginConstruction`] when the backend
    /// factory fails.
    pub fn load_plugin(
        &self,
        plugin: &str,
        config: &PluginOptions,
    ) -> ScmRouterResult<Option<ScmContext>> {
        let options = config.layered_over(&self.shared);
        match loader::load_plugin(&self.catalog, &self.registry, plugin, &options) {
            Ok(LoadOutcome::Registered(scm_context)) => {
                info!(
                    plugin = plugin.trim(),
                    provider = scm_context.provider(),
                    scm_context = %scm_context,
                    "registered scm plugin"
                );
                Ok(Some(scm_context))
            }
            Ok(LoadOutcome::Skipped(diagnostic)) => {
                self.reporter.report(&diagnostic);
                Ok(None)
            }
            Err(source) => Err(ScmRouterError::PluginConstruction {
                plugin: plugin.trim().to_owned(),
                source,
            }),
        }
    }

    /// Returns registered contexts in registration order.
    #[must_use]
    pub fn contexts(&self) -> Vec<ScmContext> {
        self.registry.contexts()
    }

    /// Returns the backend registry.
    #[must_use]
    pub const fn registry(&self) -> &ContextRegistry {
        &self.registry
    }

    /// Resolves the backend for a request without suspending.
    ///
    /// # Errors
    ///
    /// Returns [`ScmError::NotImplemented`] when the request has no context
    /// or names an unregistered one.
    pub fn scm_for<Q>(&self, request: &Q) -> ScmResult<Arc<dyn Scm>>
    where
        Q: ScopedRequest + ?Sized,
    {
        request
            .scm_context()
            .and_then(|scm_context| self.registry.get(scm_context))
            .ok_or(ScmError::NotImplemented)
    }

    /// Resolves the backend for a request.
    ///
    /// # Errors
    ///
    /// Returns [`ScmError::NotImplemented`] when the request has no context
    /// or names an unregistered one.
    #[expect(
        clippy::unused_async,
        reason = "callers rely on a uniform asynchronous resolution contract"
    )]
    pub async fn choose_scm<Q>(&self, request: &Q) -> ScmResult<Arc<dyn Scm>>
    where
        Q: ScopedRequest + ?Sized,
    {
        self.scm_for(request)
    }

    /// Finds the backend that owns an inbound webhook.
    ///
    /// # Errors
    ///
    /// Returns [`ScmError::NoWebhookHandler`] when no backend claims it.
    pub async fn choose_webhook_scm(
        &self,
        headers: &WebhookHeaders,
        payload: &WebhookPayload,
    ) -> ScmResult<Arc<dyn Scm>> {
        let candidates = self.registry.snapshot();
        classify_webhook(&candidates, headers, payload, &*self.reporter).await
    }

    /// Runs `operation` against every backend and merges the results.
    ///
    /// # Errors
    ///
    /// Returns the first failure in registration order.
    pub async fn all_scm<F, Fut>(&self, operation: F) -> ScmResult<ConfigMap>
    where
        F: Fn(Arc<dyn Scm>) -> Fut,
        Fut: Future<Output = ScmResult<ConfigMap>>,
    {
        let candidates = self.registry.snapshot();
        fan_out(&candidates, operation).await
    }
}
