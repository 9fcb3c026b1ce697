//! Sweep configuration.
//!
//! Configuration values are loaded from environment variables. The desired
//! lifecycle rule is a deployment constant; its ID and day threshold can be
//! overridden for non-standard deployments.

use mpusweep_model::{
    AbortIncompleteMultipartUpload, ExpirationStatus, LifecycleRule, LifecycleRuleFilter,
};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// ID of the lifecycle rule this tool appends.
pub const DEFAULT_RULE_ID: &str = "delete-incomplete-mpu-7days";

/// Days after initiation before an incomplete multipart upload is aborted.
pub const DEFAULT_ABORT_DAYS: i32 = 7;

/// Sweep configuration.
///
/// All fields have sensible defaults. Configuration can be loaded from
/// environment variables via [`SweepConfig::from_env`].
#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct SweepConfig {
    /// Default AWS region used for the global client and the credential chain.
    #[builder(default = String::from("us-east-1"))]
    pub default_region: String,

    /// Log level filter string (e.g. `"info"`, `"debug"`).
    #[builder(default = String::from("info"))]
    pub log_level: String,

    /// ID of the lifecycle rule to append.
    #[builder(default = String::from(DEFAULT_RULE_ID))]
    pub rule_id: String,

    /// Day threshold for the abort-incomplete-multipart-upload action.
    #[builder(default = DEFAULT_ABORT_DAYS)]
    pub abort_days: i32,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            default_region: String::from("us-east-1"),
            log_level: String::from("info"),
            rule_id: String::from(DEFAULT_RULE_ID),
            abort_days: DEFAULT_ABORT_DAYS,
        }
    }
}

impl SweepConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads the following environment variables (falling back to defaults):
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `DEFAULT_REGION` | `us-east-1` |
    /// | `LOG_LEVEL` | `info` |
    /// | `LIFECYCLE_RULE_ID` | `delete-incomplete-mpu-7days` |
    /// | `ABORT_DAYS` | `7` |
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("DEFAULT_REGION") {
            config.default_region = v;
        }
        if let Ok(v) = std::env::var("LOG_LEVEL") {
            config.log_level = v;
        }
        if let Ok(v) = std::env::var("LIFECYCLE_RULE_ID") {
            config.rule_id = v;
        }
        if let Ok(v) = std::env::var("ABORT_DAYS") {
            if let Ok(n) = v.parse::<i32>() {
                config.abort_days = n;
            }
        }

        config
    }

    /// Build the lifecycle rule this deployment wants on every bucket:
    /// enabled, matching all objects, aborting incomplete multipart uploads
    /// after [`abort_days`](Self::abort_days) days.
    #[must_use]
    pub fn desired_rule(&self) -> LifecycleRule {
        LifecycleRule {
            id: Some(self.rule_id.clone()),
            status: ExpirationStatus::Enabled,
            filter: Some(LifecycleRuleFilter {
                prefix: Some(String::new()),
                ..LifecycleRuleFilter::default()
            }),
            abort_incomplete_multipart_upload: Some(AbortIncompleteMultipartUpload {
                days_after_initiation: Some(self.abort_days),
            }),
            ..LifecycleRule::default()
        }
    }
}
