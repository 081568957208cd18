use serde::{Deserialize, Serialize};

/// Phase of an upload attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadPhase {
    Preparing,
    Uploading,
    Finalizing,
    Completed,
    Failed,
}

/// Point-in-time progress of one upload attempt.
///
/// `uploaded_bytes` and `current_part_count` never decrease across
/// snapshots delivered within a single attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadProgress {
    pub total_bytes: u64,
    pub uploaded_bytes: u64,
    /// Rounded integer percentage, 0..=100.
    pub percentage: u8,
    pub current_part_count: u32,
    pub total_part_count: u32,
    pub phase: UploadPhase,
}

/// Terminal result of one upload attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadOutcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UploadOutcome {
    /// Builds a successful outcome from the finalize response.
    pub fn succeeded(url: String, asset_id: String) -> Self {
        Self {
            success: true,
            url: Some(url),
            asset_id: Some(asset_id),
            error: None,
        }
    }

    /// Builds a failed outcome with an error message.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            url: None,
            asset_id: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&UploadPhase::Uploading).unwrap(),
            "\"uploading\""
        );
        assert_eq!(
            serde_json::to_string(&UploadPhase::Failed).unwrap(),
            "\"failed\""
        );
    }

    #[test]
    fn progress_roundtrip() {
        let p = UploadProgress {
            total_bytes: 100,
            uploaded_bytes: 40,
            percentage: 40,
            current_part_count: 2,
            total_part_count: 5,
            phase: UploadPhase::Uploading,
        };
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("\"uploadedBytes\":40"));
        assert!(json.contains("\"totalPartCount\":5"));
        let parsed: UploadProgress = serde_json::from_str(&json).unwrap();
        assert_eq!(p, parsed);
    }

    #[test]
    fn outcome_failed_omits_url_fields() {
        let o = UploadOutcome::failed("part 1 upload failed");
        let json = serde_json::to_string(&o).unwrap();
        assert!(!json.contains("\"url\""));
        assert!(!json.contains("assetId"));
        assert!(json.contains("\"error\""));
    }

    #[test]
    fn outcome_succeeded_carries_asset() {
        let o = UploadOutcome::succeeded("https://cdn/v.mp4".into(), "a-1".into());
        assert!(o.success);
        assert_eq!(o.asset_id.as_deref(), Some("a-1"));
        assert!(o.error.is_none());
    }
}
