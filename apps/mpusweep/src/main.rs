//! mpusweep - ensure every S3 bucket aborts incomplete multipart uploads.
//!
//! Enumerates all buckets the credentials can see, grouped by region, and
//! idempotently appends a lifecycle rule aborting incomplete multipart
//! uploads after a retention window. Buckets already covered by an
//! equivalent rule (any ID) or already carrying the rule ID are left
//! untouched. Runs once, sequentially, and exits; progress is printed per
//! bucket, with a summary at the end.
//!
//! # Usage
//!
//! ```text
//! mpusweep
//! ```
//!
//! Credentials come from the default AWS credential chain.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `DEFAULT_REGION` | `us-east-1` | Region for the global client |
//! | `LIFECYCLE_RULE_ID` | `delete-incomplete-mpu-7days` | ID of the appended rule |
//! | `ABORT_DAYS` | `7` | Days before incomplete uploads are aborted |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

use std::sync::Arc;

use anyhow::{Context, Result};
use aws_config::BehaviorVersion;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mpusweep_aws::{AwsAccountClient, AwsStorageClient, AwsStorageClientFactory};
use mpusweep_core::{MergeOutcome, Sweep, SweepConfig, SweepSummary};

/// Tool version reported at startup.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` config value.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = SweepConfig::from_env();

    init_tracing(&config.log_level)?;

    info!(
        default_region = %config.default_region,
        rule_id = %config.rule_id,
        abort_days = config.abort_days,
        version = VERSION,
        "starting mpusweep",
    );

    let sdk_config = aws_config::defaults(BehaviorVersion::latest())
        .region(aws_config::Region::new(config.default_region.clone()))
        .load()
        .await;

    let storage = Arc::new(AwsStorageClient::from_conf(&sdk_config));
    let account = Arc::new(AwsAccountClient::from_conf(&sdk_config));
    let factory = Arc::new(AwsStorageClientFactory::new(sdk_config));

    let sweep = Sweep::new(storage, account, factory, config.desired_rule());

    let buckets = sweep
        .buckets_by_region()
        .await
        .context("failed to enumerate buckets")?;
    info!(regions = buckets.len(), "enumerated buckets");

    let mut summary = SweepSummary::default();
    for (region, names) in &buckets {
        let client = sweep
            .client_for(region)
            .await
            .with_context(|| format!("failed to build a client for region {region}"))?;

        for name in names {
            let outcome = sweep
                .ensure_rule(client.as_ref(), name)
                .await
                .with_context(|| format!("failed to reconcile bucket {name}"))?;
            summary.record(outcome);

            match outcome {
                MergeOutcome::AlreadyCovered => println!(
                    "Bucket '{name}' already has a rule aborting incomplete multipart uploads."
                ),
                MergeOutcome::AlreadyPresentById => println!(
                    "Rule '{}' already exists in bucket '{name}'. No action taken.",
                    config.rule_id
                ),
                MergeOutcome::Appended => {
                    println!("Appended lifecycle rule '{}' to bucket '{name}'.", config.rule_id);
                }
            }
        }
    }

    println!("Sweep complete: {summary}");
    Ok(())
}
