//! In-memory client fakes for unit tests.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use mpusweep_model::{AwsRegion, Bucket, LifecycleRule, RegionOptStatus};
use parking_lot::Mutex;

use crate::client::{AccountClient, BucketPage, StorageClient, StorageClientFactory};
use crate::error::{SweepError, SweepResult};

/// In-memory storage client recording every replace-write.
#[derive(Debug, Default)]
pub(crate) struct FakeStorage {
    buckets: Vec<String>,
    regions: HashMap<String, AwsRegion>,
    rules: Mutex<HashMap<String, Vec<LifecycleRule>>>,
    denied_locations: HashSet<String>,
    page_size: Option<usize>,
    puts: Mutex<Vec<(String, Vec<LifecycleRule>)>>,
    list_calls: AtomicUsize,
}

impl FakeStorage {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add a bucket with no lifecycle configuration.
    pub(crate) fn with_bucket(mut self, name: &str, region: impl Into<String>) -> Self {
        self.buckets.push(name.to_owned());
        self.regions
            .insert(name.to_owned(), AwsRegion::new(region.into()));
        self
    }

    /// Seed a bucket's lifecycle configuration.
    pub(crate) fn with_rules(self, name: &str, rules: Vec<LifecycleRule>) -> Self {
        self.rules.lock().insert(name.to_owned(), rules);
        self
    }

    /// Page the bucket listing instead of returning it whole.
    pub(crate) fn with_page_size(mut self, size: usize) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Make the location lookup for `name` fail with access denied.
    pub(crate) fn with_denied_location(mut self, name: &str) -> Self {
        self.denied_locations.insert(name.to_owned());
        self
    }

    /// Every replace-write issued so far, in order.
    pub(crate) fn puts(&self) -> Vec<(String, Vec<LifecycleRule>)> {
        self.puts.lock().clone()
    }

    /// Number of listing pages served.
    pub(crate) fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StorageClient for FakeStorage {
    async fn list_buckets(&self, continuation_token: Option<String>) -> SweepResult<BucketPage> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);

        let start = continuation_token
            .as_deref()
            .map_or(0, |token| token.parse().expect("fake token"));
        let end = self
            .page_size
            .map_or(self.buckets.len(), |size| {
                (start + size).min(self.buckets.len())
            });

        Ok(BucketPage {
            buckets: self.buckets[start..end]
                .iter()
                .map(|name| Bucket {
                    name: name.clone(),
                    creation_date: None,
                })
                .collect(),
            continuation_token: (end < self.buckets.len()).then(|| end.to_string()),
        })
    }

    async fn bucket_region(&self, bucket: &str) -> SweepResult<AwsRegion> {
        if self.denied_locations.contains(bucket) {
            return Err(SweepError::AccessDenied {
                context: format!("GetBucketLocation on {bucket}"),
            });
        }
        self.regions
            .get(bucket)
            .cloned()
            .ok_or_else(|| SweepError::NoSuchBucket {
                bucket: bucket.to_owned(),
            })
    }

    async fn lifecycle_rules(&self, bucket: &str) -> SweepResult<Vec<LifecycleRule>> {
        if !self.regions.contains_key(bucket) {
            return Err(SweepError::NoSuchBucket {
                bucket: bucket.to_owned(),
            });
        }
        self.rules.lock().get(bucket).cloned().ok_or_else(|| {
            SweepError::NoSuchLifecycleConfiguration {
                bucket: bucket.to_owned(),
            }
        })
    }

    async fn put_lifecycle_rules(
        &self,
        bucket: &str,
        rules: Vec<LifecycleRule>,
    ) -> SweepResult<()> {
        self.puts.lock().push((bucket.to_owned(), rules.clone()));
        self.rules.lock().insert(bucket.to_owned(), rules);
        Ok(())
    }
}

/// In-memory account client counting opt-status queries.
#[derive(Debug, Default)]
pub(crate) struct FakeAccount {
    statuses: HashMap<String, RegionOptStatus>,
    calls: AtomicUsize,
}

impl FakeAccount {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_status(mut self, region: &str, status: RegionOptStatus) -> Self {
        self.statuses.insert(region.to_owned(), status);
        self
    }

    /// Number of opt-status queries served.
    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AccountClient for FakeAccount {
    async fn region_opt_status(&self, region: &AwsRegion) -> SweepResult<RegionOptStatus> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .statuses
            .get(region.as_str())
            .copied()
            .unwrap_or(RegionOptStatus::Enabled))
    }
}

/// Factory recording which regions were requested.
#[derive(Debug)]
pub(crate) struct FakeFactory {
    client: Arc<FakeStorage>,
    requested: Mutex<Vec<AwsRegion>>,
}

impl FakeFactory {
    pub(crate) fn new(client: Arc<FakeStorage>) -> Self {
        Self {
            client,
            requested: Mutex::new(Vec::new()),
        }
    }

    /// Regions a client was requested for, in order.
    pub(crate) fn requested(&self) -> Vec<AwsRegion> {
        self.requested.lock().clone()
    }
}

impl StorageClientFactory for FakeFactory {
    fn for_region(&self, region: &AwsRegion) -> SweepResult<Arc<dyn StorageClient>> {
        self.requested.lock().push(region.clone());
        Ok(Arc::clone(&self.client) as Arc<dyn StorageClient>)
    }
}
