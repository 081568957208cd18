//! Wire types for the Reelpush upload API.
//!
//! All JSON payloads use camelCase field names to match the backend
//! API contract. This crate is a leaf: types only, no I/O.

pub mod messages;
pub mod types;

pub use messages::{
    CompleteUploadRequest, CompleteUploadResponse, CompletedPart, InitUploadRequest,
    InitUploadResponse,
};
pub use types::{UploadOutcome, UploadPhase, UploadProgress};
