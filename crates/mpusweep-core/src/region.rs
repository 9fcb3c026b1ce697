//! Region opt-in classification.

use std::collections::HashMap;
use std::sync::Arc;

use mpusweep_model::AwsRegion;
use parking_lot::RwLock;
use tracing::debug;

use crate::client::AccountClient;
use crate::error::SweepResult;

/// Resolves whether a region requires a dedicated regional endpoint.
///
/// Answers are cached for the lifetime of the policy; the region set is
/// small and static within one run, so each region costs at most one
/// account API query.
#[derive(Debug)]
pub struct RegionPolicy {
    account: Arc<dyn AccountClient>,
    cache: RwLock<HashMap<AwsRegion, bool>>,
}

impl RegionPolicy {
    /// Create a policy backed by the given account client.
    #[must_use]
    pub fn new(account: Arc<dyn AccountClient>) -> Self {
        Self {
            account,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Whether buckets in `region` must be addressed through a regional
    /// endpoint rather than the default one.
    pub async fn requires_regional_endpoint(&self, region: &AwsRegion) -> SweepResult<bool> {
        if let Some(&required) = self.cache.read().get(region) {
            return Ok(required);
        }

        let status = self.account.region_opt_status(region).await?;
        let required = status.requires_regional_endpoint();
        debug!(
            region = %region,
            status = status.as_str(),
            required,
            "resolved region opt-in status"
        );

        self.cache.write().insert(region.clone(), required);
        Ok(required)
    }
}
