//! Client traits for the storage and account collaborators.
//!
//! Every pipeline component takes its client handle as an explicit
//! parameter; there is no implicit global client. Implementations classify
//! wire errors into [`SweepError`](crate::SweepError) variants before
//! returning them, in particular the absent-lifecycle-configuration case.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use mpusweep_model::{AwsRegion, Bucket, LifecycleRule, RegionOptStatus};

use crate::error::SweepResult;

/// One page of a bucket listing.
#[derive(Debug, Clone, Default)]
pub struct BucketPage {
    /// Buckets in this page.
    pub buckets: Vec<Bucket>,
    /// Token for the next page; `None` when the listing is exhausted.
    pub continuation_token: Option<String>,
}

/// Object storage client covering the operations the sweep needs.
#[async_trait]
pub trait StorageClient: Send + Sync + fmt::Debug {
    /// List one page of buckets, starting from `continuation_token`.
    async fn list_buckets(&self, continuation_token: Option<String>) -> SweepResult<BucketPage>;

    /// Resolve the region a bucket lives in.
    ///
    /// Implementations normalize the absent/null location marker to
    /// [`AwsRegion::DEFAULT`](mpusweep_model::AwsRegion::DEFAULT).
    async fn bucket_region(&self, bucket: &str) -> SweepResult<AwsRegion>;

    /// Read a bucket's current lifecycle rule set.
    ///
    /// A bucket without any lifecycle configuration yields
    /// [`SweepError::NoSuchLifecycleConfiguration`](crate::SweepError::NoSuchLifecycleConfiguration),
    /// never a silent empty set; the lifecycle reader decides how to treat it.
    async fn lifecycle_rules(&self, bucket: &str) -> SweepResult<Vec<LifecycleRule>>;

    /// Replace a bucket's entire lifecycle rule set.
    ///
    /// The storage API has no append primitive; the full set is always
    /// re-submitted.
    async fn put_lifecycle_rules(
        &self,
        bucket: &str,
        rules: Vec<LifecycleRule>,
    ) -> SweepResult<()>;
}

/// Factory producing storage clients bound to a specific regional endpoint.
///
/// Used for buckets in opt-in regions, which are not reachable through the
/// default endpoint.
pub trait StorageClientFactory: Send + Sync + fmt::Debug {
    /// Build (or reuse) a client bound to `region`.
    fn for_region(&self, region: &AwsRegion) -> SweepResult<Arc<dyn StorageClient>>;
}

/// Account-level client for region classification.
#[async_trait]
pub trait AccountClient: Send + Sync + fmt::Debug {
    /// Query the opt-in status of a region.
    async fn region_opt_status(&self, region: &AwsRegion) -> SweepResult<RegionOptStatus>;
}
