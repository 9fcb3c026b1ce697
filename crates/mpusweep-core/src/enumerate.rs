//! Bucket enumeration grouped by region.

use std::collections::BTreeMap;

use mpusweep_model::AwsRegion;
use tracing::debug;

use crate::client::StorageClient;
use crate::error::SweepResult;

/// List every bucket and group the names by the region each bucket lives in.
///
/// The listing follows continuation tokens until exhausted, then resolves
/// each bucket's region through the per-bucket location lookup. A failed
/// lookup on any bucket aborts the whole enumeration; errors are never
/// skipped silently. Region keys come back in deterministic order.
pub async fn buckets_by_region(
    storage: &dyn StorageClient,
) -> SweepResult<BTreeMap<AwsRegion, Vec<String>>> {
    let mut names = Vec::new();
    let mut continuation_token = None;

    loop {
        let page = storage.list_buckets(continuation_token.take()).await?;
        names.extend(page.buckets.into_iter().map(|bucket| bucket.name));
        match page.continuation_token {
            Some(token) => continuation_token = Some(token),
            None => break,
        }
    }
    debug!(count = names.len(), "listed buckets");

    let mut by_region: BTreeMap<AwsRegion, Vec<String>> = BTreeMap::new();
    for name in names {
        let region = storage.bucket_region(&name).await?;
        by_region.entry(region).or_default().push(name);
    }

    Ok(by_region)
}
