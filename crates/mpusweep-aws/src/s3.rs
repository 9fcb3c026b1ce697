//! S3-backed storage client and regional client factory.

use std::sync::Arc;

use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::types::BucketLifecycleConfiguration;
use mpusweep_core::{BucketPage, StorageClient, StorageClientFactory, SweepResult};
use mpusweep_model::{AwsRegion, LifecycleRule};
use tracing::debug;

use crate::convert;
use crate::error::classify_sdk_error;

/// Storage client backed by an S3 client.
#[derive(Debug, Clone)]
pub struct AwsStorageClient {
    client: Client,
}

impl AwsStorageClient {
    /// Wrap an existing S3 client.
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a client from a loaded SDK config.
    #[must_use]
    pub fn from_conf(config: &aws_config::SdkConfig) -> Self {
        Self::new(Client::new(config))
    }
}

#[async_trait]
impl StorageClient for AwsStorageClient {
    async fn list_buckets(&self, continuation_token: Option<String>) -> SweepResult<BucketPage> {
        let output = self
            .client
            .list_buckets()
            .set_continuation_token(continuation_token)
            .send()
            .await
            .map_err(|err| classify_sdk_error("ListBuckets", None, err))?;

        let buckets = output
            .buckets
            .unwrap_or_default()
            .into_iter()
            .map(convert::bucket_from_sdk)
            .collect::<SweepResult<Vec<_>>>()?;

        Ok(BucketPage {
            buckets,
            continuation_token: output.continuation_token,
        })
    }

    async fn bucket_region(&self, bucket: &str) -> SweepResult<AwsRegion> {
        let output = self
            .client
            .get_bucket_location()
            .bucket(bucket)
            .send()
            .await
            .map_err(|err| classify_sdk_error("GetBucketLocation", Some(bucket), err))?;

        Ok(convert::location_to_region(
            output.location_constraint.as_ref(),
        ))
    }

    async fn lifecycle_rules(&self, bucket: &str) -> SweepResult<Vec<LifecycleRule>> {
        let output = self
            .client
            .get_bucket_lifecycle_configuration()
            .bucket(bucket)
            .send()
            .await
            .map_err(|err| {
                classify_sdk_error("GetBucketLifecycleConfiguration", Some(bucket), err)
            })?;

        Ok(output
            .rules
            .unwrap_or_default()
            .into_iter()
            .map(convert::rule_from_sdk)
            .collect())
    }

    async fn put_lifecycle_rules(
        &self,
        bucket: &str,
        rules: Vec<LifecycleRule>,
    ) -> SweepResult<()> {
        let rules = rules
            .iter()
            .map(convert::rule_to_sdk)
            .collect::<SweepResult<Vec<_>>>()?;
        let configuration = BucketLifecycleConfiguration::builder()
            .set_rules(Some(rules))
            .build()
            .map_err(convert::build_err)?;

        self.client
            .put_bucket_lifecycle_configuration()
            .bucket(bucket)
            .lifecycle_configuration(configuration)
            .send()
            .await
            .map_err(|err| {
                classify_sdk_error("PutBucketLifecycleConfiguration", Some(bucket), err)
            })?;

        debug!(bucket = %bucket, "put_bucket_lifecycle_configuration completed");
        Ok(())
    }
}

/// Factory building S3 clients bound to a specific region from a shared SDK
/// config.
#[derive(Debug)]
pub struct AwsStorageClientFactory {
    config: aws_config::SdkConfig,
}

impl AwsStorageClientFactory {
    /// Create a factory from a loaded SDK config.
    #[must_use]
    pub fn new(config: aws_config::SdkConfig) -> Self {
        Self { config }
    }
}

impl StorageClientFactory for AwsStorageClientFactory {
    fn for_region(&self, region: &AwsRegion) -> SweepResult<Arc<dyn StorageClient>> {
        let config = aws_sdk_s3::config::Builder::from(&self.config)
            .region(aws_sdk_s3::config::Region::new(region.as_str().to_owned()))
            .build();

        debug!(region = %region, "built region-bound storage client");
        Ok(Arc::new(AwsStorageClient::new(Client::from_conf(config))))
    }
}
