//! Upload coordinator: batch-parallel part uploads over one attempt.
//!
//! One coordinator drives one attempt through
//! `Preparing → Uploading → Finalizing → {Completed | Failed}`.
//! Failed attempts are not resumed; a retry builds a new coordinator
//! with a fresh plan and session.

use std::sync::Mutex;

use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use reelpush_protocol::messages::{
    CompleteUploadRequest, CompleteUploadResponse, CompletedPart, InitUploadRequest,
};
use reelpush_protocol::{UploadOutcome, UploadPhase};
use reelpush_transfer::{PartSpec, ProgressCallback, ProgressNotifier, plan, read_part};

use crate::api::UploadApi;
use crate::error::UploadError;
use crate::types::UploadRequest;

/// Coordinates one chunked upload attempt.
pub struct UploadCoordinator<'a> {
    api: &'a dyn UploadApi,
    cancel: CancellationToken,
}

impl<'a> UploadCoordinator<'a> {
    /// Creates a coordinator with its own cancellation token.
    pub fn new(api: &'a dyn UploadApi) -> Self {
        Self::with_cancel(api, CancellationToken::new())
    }

    /// Creates a coordinator driven by an external cancellation token.
    pub fn with_cancel(api: &'a dyn UploadApi, cancel: CancellationToken) -> Self {
        Self { api, cancel }
    }

    /// Returns a handle that cancels this attempt when triggered.
    ///
    /// Cancellation stops new batches from being scheduled; parts
    /// already in flight settle first.
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Runs the full chunked pipeline: init, batched part PUTs,
    /// receipt reorder, commit.
    ///
    /// Never returns `Err`; all failures are folded into a
    /// `success: false` outcome after a final `Failed` snapshot.
    pub async fn upload(
        &self,
        request: &UploadRequest,
        on_progress: Option<ProgressCallback>,
    ) -> UploadOutcome {
        let total_size = match tokio::fs::metadata(&request.source_path).await {
            Ok(meta) => meta.len(),
            Err(e) => {
                error!(path = %request.source_path.display(), error = %e, "cannot stat source");
                return UploadOutcome::failed(format!("source read failed: {e}"));
            }
        };

        let parts = plan(total_size, request.chunk_size);
        let notifier = ProgressNotifier::new(total_size, parts.len() as u32, on_progress);
        notifier.set_phase(UploadPhase::Preparing);

        match self.run(request, &parts, total_size, &notifier).await {
            Ok(resp) => {
                notifier.set_phase(UploadPhase::Completed);
                info!(asset_id = %resp.asset_id, bytes = total_size, "upload completed");
                UploadOutcome::succeeded(resp.url, resp.asset_id)
            }
            Err(e) => {
                notifier.set_phase(UploadPhase::Failed);
                error!(error = %e, "upload failed");
                UploadOutcome::failed(e.to_string())
            }
        }
    }

    async fn run(
        &self,
        request: &UploadRequest,
        parts: &[PartSpec],
        total_size: u64,
        notifier: &ProgressNotifier,
    ) -> Result<CompleteUploadResponse, UploadError> {
        let file_name = request.resolved_file_name();

        // Init: obtain the session and one presigned URL per part.
        self.check_cancelled()?;
        let init_req = InitUploadRequest {
            project_id: request.project_id.clone(),
            file_name: file_name.clone(),
            file_size: total_size,
            total_chunks: parts.len() as u32,
            content_type: request.content_type.clone(),
        };
        let session = self
            .api
            .init_upload(&init_req)
            .await
            .map_err(stage_error(UploadError::Init))?;

        if session.upload_urls.len() != parts.len() {
            return Err(UploadError::Init(format!(
                "expected {} upload URLs, got {}",
                parts.len(),
                session.upload_urls.len()
            )));
        }

        info!(
            upload_id = %session.upload_id,
            parts = parts.len(),
            total_bytes = total_size,
            "upload session initialized"
        );

        // Upload parts in batches of at most `parallelism`. The next
        // batch starts only after every part of the previous one has
        // settled.
        notifier.set_phase(UploadPhase::Uploading);
        let receipts = Mutex::new(Vec::with_capacity(parts.len()));

        for batch in parts.chunks(request.parallelism.max(1)) {
            self.check_cancelled()?;

            let uploads = batch.iter().map(|spec| {
                self.upload_part(request, spec, &session.upload_urls[spec.index], notifier, &receipts)
            });
            for result in futures_util::future::join_all(uploads).await {
                result?;
            }
        }

        // Finalize: receipts arrive in completion order, the commit
        // call requires plan order.
        notifier.set_phase(UploadPhase::Finalizing);
        self.check_cancelled()?;

        let mut completed: Vec<CompletedPart> = receipts.into_inner().unwrap();
        completed.sort_by_key(|p| p.part_number);

        let complete_req = CompleteUploadRequest {
            upload_id: session.upload_id,
            project_id: request.project_id.clone(),
            file_name,
            parts: completed,
        };
        self.api
            .complete_upload(&complete_req)
            .await
            .map_err(stage_error(UploadError::Finalize))
    }

    /// Reads one part's range and PUTs it to its destination.
    async fn upload_part(
        &self,
        request: &UploadRequest,
        spec: &PartSpec,
        url: &str,
        notifier: &ProgressNotifier,
        receipts: &Mutex<Vec<CompletedPart>>,
    ) -> Result<(), UploadError> {
        let data = tokio::task::spawn_blocking({
            let path = request.source_path.clone();
            let spec = spec.clone();
            move || read_part(&path, &spec)
        })
        .await
        .map_err(|e| UploadError::TaskJoin(e.to_string()))??;

        let etag = self.api.put_part(url, data).await.map_err(|e| match e {
            UploadError::Cancelled => UploadError::Cancelled,
            e => UploadError::Part {
                index: spec.index,
                message: e.to_string(),
            },
        })?;

        if etag.is_none() {
            debug!(part = spec.index, "part response carried no etag");
        }
        receipts.lock().unwrap().push(CompletedPart {
            part_number: spec.index as u32 + 1,
            etag: etag.unwrap_or_default(),
        });
        notifier.part_done(spec.size_bytes);
        Ok(())
    }

    /// Single-request fallback: posts the whole file in one multipart
    /// form instead of chunking. Progress jumps 0 → 100.
    pub async fn upload_simple(
        &self,
        request: &UploadRequest,
        on_progress: Option<ProgressCallback>,
    ) -> UploadOutcome {
        let inner = async {
            self.check_cancelled()?;
            let data = tokio::fs::read(&request.source_path)
                .await
                .map_err(reelpush_transfer::TransferError::Io)?;
            Ok::<_, UploadError>(data)
        };

        let data = match inner.await {
            Ok(d) => d,
            Err(e) => return UploadOutcome::failed(e.to_string()),
        };

        let total = data.len() as u64;
        let notifier = ProgressNotifier::new(total, 1, on_progress);
        notifier.set_phase(UploadPhase::Uploading);

        match self
            .api
            .upload_direct(
                &request.project_id,
                &request.resolved_file_name(),
                &request.content_type,
                data,
            )
            .await
        {
            Ok(resp) => {
                notifier.part_done(total);
                notifier.set_phase(UploadPhase::Completed);
                UploadOutcome::succeeded(resp.url, resp.asset_id)
            }
            Err(e) => {
                notifier.set_phase(UploadPhase::Failed);
                UploadOutcome::failed(e.to_string())
            }
        }
    }

    fn check_cancelled(&self) -> Result<(), UploadError> {
        if self.cancel.is_cancelled() {
            Err(UploadError::Cancelled)
        } else {
            Ok(())
        }
    }
}

/// Wraps a transport error in a stage error, letting `Cancelled`
/// through unchanged.
fn stage_error(stage: fn(String) -> UploadError) -> impl Fn(UploadError) -> UploadError {
    move |e| match e {
        UploadError::Cancelled => UploadError::Cancelled,
        e => stage(e.to_string()),
    }
}
