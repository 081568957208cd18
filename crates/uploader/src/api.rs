//! Transport abstraction for the upload endpoints.

use std::future::Future;
use std::pin::Pin;

use reelpush_protocol::messages::{
    CompleteUploadRequest, CompleteUploadResponse, InitUploadRequest, InitUploadResponse,
};

use crate::error::UploadError;

/// Abstract transport to the upload control plane and part storage.
///
/// The coordinator talks only to this trait; [`crate::HttpUploadApi`]
/// is the production implementation. Keeping transport behind a trait
/// keeps the pipeline testable with recording mocks.
pub trait UploadApi: Send + Sync {
    /// Opens an upload session and returns the presigned destinations.
    fn init_upload<'a>(
        &'a self,
        req: &'a InitUploadRequest,
    ) -> Pin<Box<dyn Future<Output = Result<InitUploadResponse, UploadError>> + Send + 'a>>;

    /// PUTs one part's bytes to its presigned destination.
    ///
    /// Returns the entity tag from the response, if the storage
    /// backend provided one (surrounding quotes already stripped).
    fn put_part<'a>(
        &'a self,
        url: &'a str,
        body: Vec<u8>,
    ) -> Pin<Box<dyn Future<Output = Result<Option<String>, UploadError>> + Send + 'a>>;

    /// Commits the session from the ordered receipt list.
    fn complete_upload<'a>(
        &'a self,
        req: &'a CompleteUploadRequest,
    ) -> Pin<Box<dyn Future<Output = Result<CompleteUploadResponse, UploadError>> + Send + 'a>>;

    /// Single-request fallback: posts the whole file as one
    /// multipart form instead of chunking.
    fn upload_direct<'a>(
        &'a self,
        project_id: &'a str,
        file_name: &'a str,
        content_type: &'a str,
        data: Vec<u8>,
    ) -> Pin<Box<dyn Future<Output = Result<CompleteUploadResponse, UploadError>> + Send + 'a>>;
}
