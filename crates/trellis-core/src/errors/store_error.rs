/// Store-layer errors for sample persistence and aggregate queries.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("query failed: {message}")]
    QueryFailed { message: String },

    #[error("batch insert of {count} samples failed: {reason}")]
    BatchInsertFailed { count: usize, reason: String },

    #[error("store unavailable: {reason}")]
    Unavailable { reason: String },
}
