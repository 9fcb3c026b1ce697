//! The rule merger.
//!
//! Decides whether a bucket's rule set already satisfies the desired rule
//! and, when it does not, produces the full replacement set. Two independent
//! checks run in order: capability first (any rule with an
//! abort-incomplete-multipart-upload action, whatever its ID), then identity
//! (a rule with the desired ID, whatever its actions). The identity check
//! exists to keep rule IDs unique within the set; the storage API rejects
//! duplicates at write time.

use mpusweep_model::LifecycleRule;

/// Outcome of planning a merge against a bucket's current rule set.
#[derive(Debug, Clone, PartialEq)]
pub enum MergePlan {
    /// An existing rule already aborts incomplete multipart uploads.
    AlreadyCovered,
    /// A rule with the desired ID already exists.
    AlreadyPresentById,
    /// The desired rule is missing; submit this full set as one
    /// replace-write. Existing rules are preserved verbatim, in order, with
    /// the desired rule appended last.
    Append(Vec<LifecycleRule>),
}

/// Plan the merge of `desired` into `current`.
#[must_use]
pub fn plan(current: &[LifecycleRule], desired: &LifecycleRule) -> MergePlan {
    if current
        .iter()
        .any(LifecycleRule::aborts_incomplete_multipart_uploads)
    {
        return MergePlan::AlreadyCovered;
    }

    if desired.id.is_some() && current.iter().any(|rule| rule.id == desired.id) {
        return MergePlan::AlreadyPresentById;
    }

    let mut rules = current.to_vec();
    rules.push(desired.clone());
    MergePlan::Append(rules)
}
