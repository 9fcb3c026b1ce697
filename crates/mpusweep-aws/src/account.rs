//! Account-backed region opt-in queries.

use async_trait::async_trait;
use aws_sdk_account::Client;
use mpusweep_core::{AccountClient, SweepResult};
use mpusweep_model::{AwsRegion, RegionOptStatus};

use crate::error::classify_sdk_error;

/// Account client backed by the AWS Account API.
#[derive(Debug, Clone)]
pub struct AwsAccountClient {
    client: Client,
}

impl AwsAccountClient {
    /// Wrap an existing account client.
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
impl AccountClient for AwsAccountClient {
    async fn region_opt_status(&self, region: &AwsRegion) -> SweepResult<RegionOptStatus> {
        let output = self
            .client
            .get_region_opt_status()
            .region_name(region.as_str())
            .send()
            .await
            .map_err(|err| classify_sdk_error("GetRegionOptStatus", None, err))?;

        // An absent status is treated as explicitly enabled, i.e. opt-in.
        Ok(output
            .region_opt_status
            .as_ref()
            .map_or(RegionOptStatus::Enabled, |status| {
                RegionOptStatus::parse(status.as_str())
            }))
    }
}
