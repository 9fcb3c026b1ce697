//! Region identifiers and opt-in classification.

use std::fmt;

/// AWS Region identifier.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct AwsRegion(String);

impl AwsRegion {
    /// Default region, also the normalized value for the absent/null location
    /// marker returned by the bucket listing API.
    pub const DEFAULT: &str = "us-east-1";

    /// Create a new region.
    #[must_use]
    pub fn new(region: impl Into<String>) -> Self {
        Self(region.into())
    }

    /// Get the region as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for AwsRegion {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

impl fmt::Display for AwsRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opt-in status of a region, as reported by the account API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum RegionOptStatus {
    /// Region is reachable through the default/global endpoint.
    EnabledByDefault,
    /// Region was explicitly enabled for the account (opt-in).
    Enabled,
    /// Region is disabled (or in a transitional enabling/disabling state).
    Disabled,
}

impl RegionOptStatus {
    /// Parse the wire representation of an opt status.
    ///
    /// Transitional states fold into [`RegionOptStatus::Disabled`]. Unknown
    /// strings fold into [`RegionOptStatus::Enabled`] so that anything other
    /// than an explicit `ENABLED_BY_DEFAULT` routes through a regional
    /// endpoint.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "ENABLED_BY_DEFAULT" => Self::EnabledByDefault,
            "DISABLED" | "DISABLING" | "ENABLING" => Self::Disabled,
            _ => Self::Enabled,
        }
    }

    /// Get the wire representation of this status.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::EnabledByDefault => "ENABLED_BY_DEFAULT",
            Self::Enabled => "ENABLED",
            Self::Disabled => "DISABLED",
        }
    }

    /// Whether buckets in a region with this status must be addressed through
    /// a dedicated regional endpoint rather than the default one.
    #[must_use]
    pub fn requires_regional_endpoint(&self) -> bool {
        !matches!(self, Self::EnabledByDefault)
    }
}
