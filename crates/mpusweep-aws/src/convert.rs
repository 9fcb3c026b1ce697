//! Conversions between domain records and AWS SDK types.
//!
//! The domain records cover the full S3 lifecycle wire shape, so both
//! directions are field-for-field: a rule read from a bucket and written
//! back is byte-equivalent on the wire.

use aws_sdk_s3::types as sdk;
use aws_smithy_types::error::operation::BuildError;
use mpusweep_core::{SweepError, SweepResult};
use mpusweep_model::{
    AbortIncompleteMultipartUpload, AwsRegion, Bucket, ExpirationStatus, LifecycleExpiration,
    LifecycleRule, LifecycleRuleAndOperator, LifecycleRuleFilter, NoncurrentVersionExpiration,
    NoncurrentVersionTransition, Tag, Transition,
};

/// Normalize a bucket location constraint to a region.
///
/// The listing API reports `us-east-1` as an absent (or empty) constraint;
/// both normalize to [`AwsRegion::DEFAULT`].
pub(crate) fn location_to_region(constraint: Option<&sdk::BucketLocationConstraint>) -> AwsRegion {
    match constraint {
        Some(constraint) if !constraint.as_str().is_empty() => AwsRegion::new(constraint.as_str()),
        _ => AwsRegion::default(),
    }
}

/// Convert a listed SDK bucket into a domain bucket.
pub(crate) fn bucket_from_sdk(bucket: sdk::Bucket) -> SweepResult<Bucket> {
    Ok(Bucket {
        name: bucket.name.ok_or_else(|| SweepError::InvalidResponse {
            context: "bucket listing entry without a name".to_owned(),
        })?,
        creation_date: bucket.creation_date.and_then(datetime_from_sdk),
    })
}

// The legacy top-level prefix is deprecated in the SDK but still appears on
// pre-filter rules and must round-trip.
#[allow(deprecated)]
pub(crate) fn rule_from_sdk(rule: sdk::LifecycleRule) -> LifecycleRule {
    LifecycleRule {
        id: rule.id,
        status: ExpirationStatus::parse(rule.status.as_str()),
        prefix: rule.prefix,
        filter: rule.filter.map(filter_from_sdk),
        abort_incomplete_multipart_upload: rule
            .abort_incomplete_multipart_upload
            .map(|abort| AbortIncompleteMultipartUpload {
                days_after_initiation: abort.days_after_initiation,
            }),
        expiration: rule.expiration.map(expiration_from_sdk),
        transitions: rule
            .transitions
            .unwrap_or_default()
            .into_iter()
            .map(transition_from_sdk)
            .collect(),
        noncurrent_version_transitions: rule
            .noncurrent_version_transitions
            .unwrap_or_default()
            .into_iter()
            .map(noncurrent_transition_from_sdk)
            .collect(),
        noncurrent_version_expiration: rule.noncurrent_version_expiration.map(|expiration| {
            NoncurrentVersionExpiration {
                newer_noncurrent_versions: expiration.newer_noncurrent_versions,
                noncurrent_days: expiration.noncurrent_days,
            }
        }),
    }
}

#[allow(deprecated)]
pub(crate) fn rule_to_sdk(rule: &LifecycleRule) -> SweepResult<sdk::LifecycleRule> {
    sdk::LifecycleRule::builder()
        .set_id(rule.id.clone())
        .status(sdk::ExpirationStatus::from(rule.status.as_str()))
        .set_prefix(rule.prefix.clone())
        .set_filter(rule.filter.as_ref().map(filter_to_sdk).transpose()?)
        .set_abort_incomplete_multipart_upload(rule.abort_incomplete_multipart_upload.as_ref().map(
            |abort| {
                sdk::AbortIncompleteMultipartUpload::builder()
                    .set_days_after_initiation(abort.days_after_initiation)
                    .build()
            },
        ))
        .set_expiration(rule.expiration.as_ref().map(expiration_to_sdk))
        .set_transitions(
            (!rule.transitions.is_empty())
                .then(|| rule.transitions.iter().map(transition_to_sdk).collect()),
        )
        .set_noncurrent_version_transitions(
            (!rule.noncurrent_version_transitions.is_empty()).then(|| {
                rule.noncurrent_version_transitions
                    .iter()
                    .map(noncurrent_transition_to_sdk)
                    .collect()
            }),
        )
        .set_noncurrent_version_expiration(rule.noncurrent_version_expiration.as_ref().map(
            |expiration| {
                sdk::NoncurrentVersionExpiration::builder()
                    .set_newer_noncurrent_versions(expiration.newer_noncurrent_versions)
                    .set_noncurrent_days(expiration.noncurrent_days)
                    .build()
            },
        ))
        .build()
        .map_err(build_err)
}

fn filter_from_sdk(filter: sdk::LifecycleRuleFilter) -> LifecycleRuleFilter {
    LifecycleRuleFilter {
        and: filter.and.map(|and| LifecycleRuleAndOperator {
            object_size_greater_than: and.object_size_greater_than,
            object_size_less_than: and.object_size_less_than,
            prefix: and.prefix,
            tags: and
                .tags
                .unwrap_or_default()
                .into_iter()
                .map(tag_from_sdk)
                .collect(),
        }),
        object_size_greater_than: filter.object_size_greater_than,
        object_size_less_than: filter.object_size_less_than,
        prefix: filter.prefix,
        tag: filter.tag.map(tag_from_sdk),
    }
}

fn filter_to_sdk(filter: &LifecycleRuleFilter) -> SweepResult<sdk::LifecycleRuleFilter> {
    let and = filter
        .and
        .as_ref()
        .map(|and| -> SweepResult<_> {
            Ok(sdk::LifecycleRuleAndOperator::builder()
                .set_object_size_greater_than(and.object_size_greater_than)
                .set_object_size_less_than(and.object_size_less_than)
                .set_prefix(and.prefix.clone())
                .set_tags(
                    (!and.tags.is_empty())
                        .then(|| and.tags.iter().map(tag_to_sdk).collect::<Result<_, _>>())
                        .transpose()
                        .map_err(build_err)?,
                )
                .build())
        })
        .transpose()?;

    Ok(sdk::LifecycleRuleFilter::builder()
        .set_and(and)
        .set_object_size_greater_than(filter.object_size_greater_than)
        .set_object_size_less_than(filter.object_size_less_than)
        .set_prefix(filter.prefix.clone())
        .set_tag(
            filter
                .tag
                .as_ref()
                .map(tag_to_sdk)
                .transpose()
                .map_err(build_err)?,
        )
        .build())
}

fn tag_from_sdk(tag: sdk::Tag) -> Tag {
    Tag {
        key: tag.key,
        value: tag.value,
    }
}

fn tag_to_sdk(tag: &Tag) -> Result<sdk::Tag, BuildError> {
    sdk::Tag::builder()
        .key(tag.key.clone())
        .value(tag.value.clone())
        .build()
}

fn expiration_from_sdk(expiration: sdk::LifecycleExpiration) -> LifecycleExpiration {
    LifecycleExpiration {
        date: expiration.date.and_then(datetime_from_sdk),
        days: expiration.days,
        expired_object_delete_marker: expiration.expired_object_delete_marker,
    }
}

fn expiration_to_sdk(expiration: &LifecycleExpiration) -> sdk::LifecycleExpiration {
    sdk::LifecycleExpiration::builder()
        .set_date(expiration.date.as_ref().map(datetime_to_sdk))
        .set_days(expiration.days)
        .set_expired_object_delete_marker(expiration.expired_object_delete_marker)
        .build()
}

fn transition_from_sdk(transition: sdk::Transition) -> Transition {
    Transition {
        date: transition.date.and_then(datetime_from_sdk),
        days: transition.days,
        storage_class: transition
            .storage_class
            .map(|class| class.as_str().to_owned()),
    }
}

fn transition_to_sdk(transition: &Transition) -> sdk::Transition {
    sdk::Transition::builder()
        .set_date(transition.date.as_ref().map(datetime_to_sdk))
        .set_days(transition.days)
        .set_storage_class(
            transition
                .storage_class
                .as_deref()
                .map(sdk::TransitionStorageClass::from),
        )
        .build()
}

fn noncurrent_transition_from_sdk(
    transition: sdk::NoncurrentVersionTransition,
) -> NoncurrentVersionTransition {
    NoncurrentVersionTransition {
        newer_noncurrent_versions: transition.newer_noncurrent_versions,
        noncurrent_days: transition.noncurrent_days,
        storage_class: transition
            .storage_class
            .map(|class| class.as_str().to_owned()),
    }
}

fn noncurrent_transition_to_sdk(
    transition: &NoncurrentVersionTransition,
) -> sdk::NoncurrentVersionTransition {
    sdk::NoncurrentVersionTransition::builder()
        .set_newer_noncurrent_versions(transition.newer_noncurrent_versions)
        .set_noncurrent_days(transition.noncurrent_days)
        .set_storage_class(
            transition
                .storage_class
                .as_deref()
                .map(sdk::TransitionStorageClass::from),
        )
        .build()
}

fn datetime_from_sdk(value: aws_smithy_types::DateTime) -> Option<chrono::DateTime<chrono::Utc>> {
    chrono::DateTime::from_timestamp(value.secs(), value.subsec_nanos())
}

fn datetime_to_sdk(value: &chrono::DateTime<chrono::Utc>) -> aws_smithy_types::DateTime {
    aws_smithy_types::DateTime::from_secs_and_nanos(
        value.timestamp(),
        value.timestamp_subsec_nanos(),
    )
}

pub(crate) fn build_err(err: BuildError) -> SweepError {
    SweepError::Internal(anyhow::Error::new(err))
}
