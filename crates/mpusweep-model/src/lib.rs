//! Domain types for mpusweep.
//!
//! This crate defines the lifecycle-rule record family mirroring the S3 wire
//! shape, plus the region types used to classify where a bucket lives. The
//! rule records carry the complete field set of the wire shape so a
//! read-modify-write cycle preserves rules this tool did not author.

mod region;
mod types;

pub use region::{AwsRegion, RegionOptStatus};
pub use types::{
    AbortIncompleteMultipartUpload, Bucket, ExpirationStatus, LifecycleExpiration, LifecycleRule,
    LifecycleRuleAndOperator, LifecycleRuleFilter, NoncurrentVersionExpiration,
    NoncurrentVersionTransition, Tag, Transition,
};
