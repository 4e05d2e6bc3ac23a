pub mod store_error;

pub use store_error::StoreError;

/// Top-level error type for the Trellis pipeline.
///
/// Subsystem errors (`StoreError`) convert into this via `#[from]` so
/// engines can propagate with `?` regardless of which layer failed.
#[derive(Debug, thiserror::Error)]
pub enum TrellisError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("intent matcher failed: {message}")]
    Matcher { message: String },

    #[error("synthesis failed: {message}")]
    Synthesis { message: String },

    #[error("tenant configuration unavailable for {tenant_id}")]
    TenantConfigUnavailable { tenant_id: String },

    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience alias used throughout the workspace.
pub type TrellisResult<T> = Result<T, TrellisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_converts_to_trellis_error() {
        fn propagates() -> TrellisResult<()> {
            Err(StoreError::Unavailable {
                reason: "connection refused".to_string(),
            })?;
            Ok(())
        }
        let err = propagates().unwrap_err();
        assert!(matches!(err, TrellisError::Store(_)));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn error_messages_include_context() {
        let err = TrellisError::TenantConfigUnavailable {
            tenant_id: "tenant-7".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "tenant configuration unavailable for tenant-7"
        );
    }
}
