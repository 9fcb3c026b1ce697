//! SDK error classification.

use aws_smithy_runtime_api::client::result::SdkError;
use aws_smithy_types::error::metadata::ProvideErrorMetadata;
use mpusweep_core::SweepError;

/// Classify an SDK error into a [`SweepError`] variant.
///
/// Known service error codes map to structured variants so callers never
/// inspect wire codes themselves; everything else (transport failures,
/// throttling, unexpected service errors) wraps into
/// [`SweepError::Internal`] with the failing operation as context.
pub(crate) fn classify_sdk_error<E, R>(
    operation: &'static str,
    bucket: Option<&str>,
    err: SdkError<E, R>,
) -> SweepError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
    R: std::fmt::Debug + Send + Sync + 'static,
{
    let code = err.as_service_error().and_then(ProvideErrorMetadata::code);

    match code {
        Some("NoSuchLifecycleConfiguration") => SweepError::NoSuchLifecycleConfiguration {
            bucket: bucket.unwrap_or_default().to_owned(),
        },
        Some("NoSuchBucket") => SweepError::NoSuchBucket {
            bucket: bucket.unwrap_or_default().to_owned(),
        },
        Some("AccessDenied") => SweepError::AccessDenied {
            context: match bucket {
                Some(bucket) => format!("{operation} on {bucket}"),
                None => operation.to_owned(),
            },
        },
        _ => SweepError::Internal(anyhow::Error::new(err).context(format!("{operation} failed"))),
    }
}
