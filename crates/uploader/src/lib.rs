//! Parallel chunked upload coordinator.
//!
//! Drives a full upload attempt: init the session on the control
//! plane, push parts to their presigned destinations with bounded
//! parallelism, aggregate progress, reorder receipts, finalize.
//! One failure anywhere aborts the attempt; callers retry by
//! starting a brand-new attempt.

mod api;
mod coordinator;
mod error;
mod http;
mod types;

pub use api::UploadApi;
pub use coordinator::UploadCoordinator;
pub use error::UploadError;
pub use http::HttpUploadApi;
pub use types::UploadRequest;
