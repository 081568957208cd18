//! Upload error types.

/// Errors produced during an upload attempt.
///
/// `Init`, `Part` and `Finalize` name the pipeline stage that
/// failed; the remaining variants are transport- or runtime-level
/// and get folded into a stage error by the coordinator.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("init failed: {0}")]
    Init(String),

    #[error("part {index} upload failed: {message}")]
    Part { index: usize, message: String },

    #[error("finalize failed: {0}")]
    Finalize(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("source read failed: {0}")]
    Transfer(#[from] reelpush_transfer::TransferError),

    #[error("cancelled")]
    Cancelled,

    #[error("task join error: {0}")]
    TaskJoin(String),
}
