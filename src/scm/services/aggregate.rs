//! Fan-out aggregation across every registered backend.

use super::registry::RegisteredScm;
use crate::scm::{
    domain::ConfigMap,
    ports::{Scm, ScmResult},
};
use futures::future::join_all;
use std::future::Future;
use std::sync::Arc;

/// Runs `operation` against every candidate and merges the results.
///
/// All calls are awaited together. Merging then walks the results in
/// registration order: later keys overwrite earlier ones, and the first
/// failure in that order is returned instead of any partial map.
///
/// # Errors
///
/// Returns the first failure in registration order.
pub async fn fan_out<F, Fut>(candidates: &[RegisteredScm], operation: F) -> ScmResult<ConfigMap>
where
    F: Fn(Arc<dyn Scm>) -> Fut,
    Fut: Future<Output = ScmResult<ConfigMap>>,
{
    let results = join_all(candidates.iter().map(|(_, scm)| operation(Arc::clone(scm)))).await;
    merge_in_order(results)
}

/// Shallow-merges per-backend maps, stopping at the first failure.
///
/// # Errors
///
/// Returns the first failure yielded by `results`.
pub fn merge_in_order(
    results: impl IntoIterator<Item = ScmResult<ConfigMap>>,
) -> ScmResult<ConfigMap> {
    results
        .into_iter()
        .try_fold(ConfigMap::new(), |mut merged, result| {
            merged.extend(result?);
            Ok(merged)
        })
}
