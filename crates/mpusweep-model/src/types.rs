//! Lifecycle configuration records mirroring the S3 wire shape.
//!
//! Field coverage is deliberately complete: whatever a bucket already carries
//! must survive a read-modify-write cycle untouched. Storage classes are kept
//! as plain strings rather than enums so unrecognized classes round-trip.

/// A bucket as returned by the listing API.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bucket {
    /// Bucket name, unique within the partition.
    pub name: String,
    /// Creation timestamp, when the listing API reports one.
    pub creation_date: Option<chrono::DateTime<chrono::Utc>>,
}

/// Whether a lifecycle rule is currently applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExpirationStatus {
    /// The rule is applied.
    Enabled,
    /// The rule is present but not applied.
    #[default]
    Disabled,
}

impl ExpirationStatus {
    /// Get the wire representation of this status.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Enabled => "Enabled",
            Self::Disabled => "Disabled",
        }
    }

    /// Parse the wire representation; anything other than `Enabled` is
    /// treated as disabled.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value == "Enabled" {
            Self::Enabled
        } else {
            Self::Disabled
        }
    }
}

/// S3 LifecycleRule.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LifecycleRule {
    /// Rule identifier, unique within a bucket's rule set.
    pub id: Option<String>,
    /// Whether the rule is applied.
    pub status: ExpirationStatus,
    /// Legacy top-level prefix (pre-filter rules still carry it).
    pub prefix: Option<String>,
    /// Scope predicate selecting the objects the rule applies to.
    pub filter: Option<LifecycleRuleFilter>,
    /// Action: abort incomplete multipart uploads after a day threshold.
    pub abort_incomplete_multipart_upload: Option<AbortIncompleteMultipartUpload>,
    /// Action: expire current object versions.
    pub expiration: Option<LifecycleExpiration>,
    /// Actions: transition current versions between storage classes.
    pub transitions: Vec<Transition>,
    /// Actions: transition noncurrent versions between storage classes.
    pub noncurrent_version_transitions: Vec<NoncurrentVersionTransition>,
    /// Action: expire noncurrent object versions.
    pub noncurrent_version_expiration: Option<NoncurrentVersionExpiration>,
}

impl LifecycleRule {
    /// Whether this rule carries an abort-incomplete-multipart-upload action
    /// block, regardless of its ID or status.
    #[must_use]
    pub fn aborts_incomplete_multipart_uploads(&self) -> bool {
        self.abort_incomplete_multipart_upload.is_some()
    }
}

/// S3 AbortIncompleteMultipartUpload action block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AbortIncompleteMultipartUpload {
    /// Days after initiation before an incomplete upload is aborted.
    pub days_after_initiation: Option<i32>,
}

/// S3 LifecycleExpiration action block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LifecycleExpiration {
    /// Expire at a fixed date.
    pub date: Option<chrono::DateTime<chrono::Utc>>,
    /// Expire this many days after object creation.
    pub days: Option<i32>,
    /// Remove expired object delete markers.
    pub expired_object_delete_marker: Option<bool>,
}

/// S3 LifecycleRuleFilter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LifecycleRuleFilter {
    /// Conjunction of multiple predicates.
    pub and: Option<LifecycleRuleAndOperator>,
    /// Minimum object size in bytes.
    pub object_size_greater_than: Option<i64>,
    /// Maximum object size in bytes.
    pub object_size_less_than: Option<i64>,
    /// Key prefix match.
    pub prefix: Option<String>,
    /// Single tag match.
    pub tag: Option<Tag>,
}

/// S3 LifecycleRuleAndOperator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LifecycleRuleAndOperator {
    /// Minimum object size in bytes.
    pub object_size_greater_than: Option<i64>,
    /// Maximum object size in bytes.
    pub object_size_less_than: Option<i64>,
    /// Key prefix match.
    pub prefix: Option<String>,
    /// Tags that must all be present.
    pub tags: Vec<Tag>,
}

/// S3 Tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tag {
    /// Tag key.
    pub key: String,
    /// Tag value.
    pub value: String,
}

/// S3 Transition action block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transition {
    /// Transition at a fixed date.
    pub date: Option<chrono::DateTime<chrono::Utc>>,
    /// Transition this many days after object creation.
    pub days: Option<i32>,
    /// Target storage class, carried verbatim.
    pub storage_class: Option<String>,
}

/// S3 NoncurrentVersionTransition action block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoncurrentVersionTransition {
    /// Number of newer noncurrent versions to retain.
    pub newer_noncurrent_versions: Option<i32>,
    /// Days after becoming noncurrent before the transition.
    pub noncurrent_days: Option<i32>,
    /// Target storage class, carried verbatim.
    pub storage_class: Option<String>,
}

/// S3 NoncurrentVersionExpiration action block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoncurrentVersionExpiration {
    /// Number of newer noncurrent versions to retain.
    pub newer_noncurrent_versions: Option<i32>,
    /// Days after becoming noncurrent before expiration.
    pub noncurrent_days: Option<i32>,
}
