//! Lifecycle rule reconciliation for mpusweep.
//!
//! This crate holds the sequential pipeline that ensures every bucket carries
//! a rule aborting incomplete multipart uploads: bucket enumeration grouped
//! by region, region opt-in classification, lifecycle reading, and the
//! append-without-clobbering rule merger. Cloud API access goes through the
//! client traits in [`client`]; implementations live elsewhere.
//!
//! # Architecture
//!
//! ```text
//! enumerate (buckets grouped by region)
//!        |
//!        v
//! region (opt-in classification, cached)
//!        |
//!        v
//! sweep::read_rules (absent configuration -> empty set)
//!        |
//!        v
//! merge::plan + conditional replace-write
//! ```
//!
//! The read-modify-write cycle carries no optimistic-concurrency token: two
//! concurrent runs against the same bucket can race, and one write can
//! overwrite the other's rule. The tool is a single-operator batch run.

pub mod client;
pub mod config;
pub mod enumerate;
pub mod error;
pub mod merge;
pub mod region;
pub mod sweep;

#[cfg(test)]
pub(crate) mod test_util;

pub use client::{AccountClient, BucketPage, StorageClient, StorageClientFactory};
pub use config::SweepConfig;
pub use error::{SweepError, SweepResult};
pub use sweep::{MergeOutcome, Sweep, SweepSummary};
