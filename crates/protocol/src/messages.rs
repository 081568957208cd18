use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Request payloads
// ---------------------------------------------------------------------------

/// Starts a new chunked upload session on the control plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitUploadRequest {
    pub project_id: String,
    pub file_name: String,
    pub file_size: u64,
    pub total_chunks: u32,
    pub content_type: String,
}

/// Finalizes a chunked upload.
///
/// `parts` must be sorted ascending by `part_number` — the backend
/// assembles the object in the order given here, not in the order
/// parts arrived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteUploadRequest {
    pub upload_id: String,
    pub project_id: String,
    pub file_name: String,
    pub parts: Vec<CompletedPart>,
}

/// Receipt for one successfully uploaded part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedPart {
    /// 1-based part number (plan index + 1).
    pub part_number: u32,
    /// Entity tag from the part PUT response. Empty when the storage
    /// backend returned no `ETag` header.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub etag: String,
}

// ---------------------------------------------------------------------------
// Response payloads
// ---------------------------------------------------------------------------

/// Response to [`InitUploadRequest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitUploadResponse {
    pub upload_id: String,
    /// One presigned destination per part, in plan order.
    pub upload_urls: Vec<String>,
}

/// Response to [`CompleteUploadRequest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteUploadResponse {
    pub url: String,
    pub asset_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_request_uses_camel_case() {
        let req = InitUploadRequest {
            project_id: "p1".into(),
            file_name: "video.mp4".into(),
            file_size: 12_000_000,
            total_chunks: 3,
            content_type: "video/mp4".into(),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"projectId\""));
        assert!(json.contains("\"fileName\""));
        assert!(json.contains("\"fileSize\""));
        assert!(json.contains("\"totalChunks\""));
        assert!(json.contains("\"contentType\""));
    }

    #[test]
    fn init_response_parses() {
        let json = r#"{"uploadId":"u-42","uploadUrls":["https://a/0","https://a/1"]}"#;
        let resp: InitUploadResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.upload_id, "u-42");
        assert_eq!(resp.upload_urls.len(), 2);
    }

    #[test]
    fn complete_request_roundtrip() {
        let req = CompleteUploadRequest {
            upload_id: "u-42".into(),
            project_id: "p1".into(),
            file_name: "video.mp4".into(),
            parts: vec![
                CompletedPart {
                    part_number: 1,
                    etag: "abc".into(),
                },
                CompletedPart {
                    part_number: 2,
                    etag: "def".into(),
                },
            ],
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"partNumber\":1"));
        let parsed: CompleteUploadRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(req, parsed);
    }

    #[test]
    fn completed_part_empty_etag_omitted() {
        let part = CompletedPart {
            part_number: 1,
            etag: String::new(),
        };
        let json = serde_json::to_string(&part).unwrap();
        assert!(!json.contains("etag"));
        // And a payload without the field still parses.
        let parsed: CompletedPart = serde_json::from_str(r#"{"partNumber":7}"#).unwrap();
        assert_eq!(parsed.part_number, 7);
        assert!(parsed.etag.is_empty());
    }

    #[test]
    fn complete_response_parses() {
        let json = r#"{"url":"https://cdn/clip.mp4","assetId":"asset-9"}"#;
        let resp: CompleteUploadResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.url, "https://cdn/clip.mp4");
        assert_eq!(resp.asset_id, "asset-9");
    }
}
