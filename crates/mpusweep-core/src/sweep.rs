//! Sweep orchestration: lifecycle reading, the conditional replace-write,
//! and the per-run summary.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use mpusweep_model::{AwsRegion, LifecycleRule};
use tracing::debug;

use crate::client::{AccountClient, StorageClient, StorageClientFactory};
use crate::error::{SweepError, SweepResult};
use crate::merge::{self, MergePlan};
use crate::region::RegionPolicy;

/// What happened to one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// An existing rule already aborts incomplete multipart uploads; nothing
    /// was written.
    AlreadyCovered,
    /// A rule with the desired ID already exists; nothing was written.
    AlreadyPresentById,
    /// The desired rule was appended and the full set written back.
    Appended,
}

/// Read a bucket's current lifecycle rule set.
///
/// A bucket without any lifecycle configuration yields an empty set; every
/// other error propagates, so a missing bucket or a denied read never looks
/// like a bucket with no rules.
pub async fn read_rules(
    storage: &dyn StorageClient,
    bucket: &str,
) -> SweepResult<Vec<LifecycleRule>> {
    match storage.lifecycle_rules(bucket).await {
        Ok(rules) => Ok(rules),
        Err(SweepError::NoSuchLifecycleConfiguration { .. }) => Ok(Vec::new()),
        Err(err) => Err(err),
    }
}

/// Ensure `desired` is present on `bucket`, appending it when neither an
/// equivalent capability nor the ID already exists.
///
/// The read-modify-write cycle is one logical operation per bucket but
/// carries no concurrency token; a concurrent writer can race it.
pub async fn ensure_rule(
    storage: &dyn StorageClient,
    bucket: &str,
    desired: &LifecycleRule,
) -> SweepResult<MergeOutcome> {
    let current = read_rules(storage, bucket).await?;

    match merge::plan(&current, desired) {
        MergePlan::AlreadyCovered => {
            debug!(bucket = %bucket, "existing rule already aborts incomplete multipart uploads");
            Ok(MergeOutcome::AlreadyCovered)
        }
        MergePlan::AlreadyPresentById => {
            debug!(bucket = %bucket, "rule ID already present");
            Ok(MergeOutcome::AlreadyPresentById)
        }
        MergePlan::Append(rules) => {
            storage.put_lifecycle_rules(bucket, rules).await?;
            debug!(bucket = %bucket, "appended lifecycle rule");
            Ok(MergeOutcome::Appended)
        }
    }
}

/// One sweep run: the default storage client, the regional client factory,
/// the region policy, and the rule to ensure.
#[derive(Debug)]
pub struct Sweep {
    storage: Arc<dyn StorageClient>,
    factory: Arc<dyn StorageClientFactory>,
    policy: RegionPolicy,
    desired: LifecycleRule,
}

impl Sweep {
    /// Assemble a sweep from its collaborators.
    #[must_use]
    pub fn new(
        storage: Arc<dyn StorageClient>,
        account: Arc<dyn AccountClient>,
        factory: Arc<dyn StorageClientFactory>,
        desired: LifecycleRule,
    ) -> Self {
        Self {
            storage,
            factory,
            policy: RegionPolicy::new(account),
            desired,
        }
    }

    /// Enumerate every bucket, grouped by region.
    pub async fn buckets_by_region(&self) -> SweepResult<BTreeMap<AwsRegion, Vec<String>>> {
        crate::enumerate::buckets_by_region(self.storage.as_ref()).await
    }

    /// Storage client to use for buckets in `region`: the default client
    /// unless the region is opt-in, in which case a region-bound client.
    pub async fn client_for(&self, region: &AwsRegion) -> SweepResult<Arc<dyn StorageClient>> {
        if self.policy.requires_regional_endpoint(region).await? {
            self.factory.for_region(region)
        } else {
            Ok(Arc::clone(&self.storage))
        }
    }

    /// Ensure the desired rule on one bucket through the given client.
    pub async fn ensure_rule(
        &self,
        storage: &dyn StorageClient,
        bucket: &str,
    ) -> SweepResult<MergeOutcome> {
        ensure_rule(storage, bucket, &self.desired).await
    }
}

/// Per-outcome counts for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepSummary {
    /// Buckets already covered by an abort rule.
    pub covered: usize,
    /// Buckets where the rule ID already existed.
    pub present: usize,
    /// Buckets the rule was appended to.
    pub appended: usize,
}

impl SweepSummary {
    /// Record one bucket's outcome.
    pub fn record(&mut self, outcome: MergeOutcome) {
        match outcome {
            MergeOutcome::AlreadyCovered => self.covered += 1,
            MergeOutcome::AlreadyPresentById => self.present += 1,
            MergeOutcome::Appended => self.appended += 1,
        }
    }

    /// Total number of buckets processed.
    #[must_use]
    pub fn total(&self) -> usize {
        self.covered + self.present + self.appended
    }
}

impl fmt::Display for SweepSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} appended, {} already covered, {} already present by ID ({} buckets)",
            self.appended,
            self.covered,
            self.present,
            self.total()
        )
    }
}
