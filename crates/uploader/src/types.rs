use std::path::PathBuf;

use reelpush_transfer::{DEFAULT_CHUNK_SIZE, DEFAULT_PARALLELISM};

/// Fallback file name when the source path has no final component.
const DEFAULT_FILE_NAME: &str = "video.mp4";

/// Describes one upload attempt.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    /// Local file to upload.
    pub source_path: PathBuf,
    /// Project (container) the asset belongs to.
    pub project_id: String,
    /// Explicit file name; derived from `source_path` when `None`.
    pub file_name: Option<String>,
    /// MIME type reported to the control plane.
    pub content_type: String,
    /// Part size in bytes.
    pub chunk_size: u64,
    /// Maximum parts in flight per batch.
    pub parallelism: usize,
}

impl UploadRequest {
    /// Creates a request with the default chunk size (5 MiB),
    /// parallelism (3) and content type (`video/mp4`).
    pub fn new(source_path: impl Into<PathBuf>, project_id: impl Into<String>) -> Self {
        Self {
            source_path: source_path.into(),
            project_id: project_id.into(),
            file_name: None,
            content_type: "video/mp4".into(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            parallelism: DEFAULT_PARALLELISM,
        }
    }

    /// The file name sent to the control plane.
    pub fn resolved_file_name(&self) -> String {
        if let Some(name) = &self.file_name {
            return name.clone();
        }
        self.source_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string())
    }
}
