//! `reqwest` implementation of [`UploadApi`].
//!
//! Init and complete calls carry the bearer credential; part PUTs go
//! to pre-authorized destinations and carry none.

use std::future::Future;
use std::pin::Pin;

use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE, ETAG};
use reqwest::multipart;
use tracing::debug;

use reelpush_protocol::messages::{
    CompleteUploadRequest, CompleteUploadResponse, InitUploadRequest, InitUploadResponse,
};

use crate::api::UploadApi;
use crate::error::UploadError;

/// HTTP transport to the upload API.
pub struct HttpUploadApi {
    http: reqwest::Client,
    base_url: String,
    bearer_token: String,
}

impl HttpUploadApi {
    /// Creates a client for `base_url` authenticating with `token`.
    pub fn new(base_url: &str, token: &str) -> Result<Self, UploadError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            bearer_token: token.to_string(),
        })
    }

    /// POSTs `body` as JSON to an authenticated control-plane endpoint
    /// and parses the JSON response.
    async fn post_json<Req, Resp>(&self, endpoint: &str, body: &Req) -> Result<Resp, UploadError>
    where
        Req: serde::Serialize,
        Resp: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.bearer_token)
            .json(body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(UploadError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(resp.json().await?)
    }
}

impl UploadApi for HttpUploadApi {
    fn init_upload<'a>(
        &'a self,
        req: &'a InitUploadRequest,
    ) -> Pin<Box<dyn Future<Output = Result<InitUploadResponse, UploadError>> + Send + 'a>> {
        Box::pin(async move { self.post_json("/upload/init-chunked", req).await })
    }

    fn put_part<'a>(
        &'a self,
        url: &'a str,
        body: Vec<u8>,
    ) -> Pin<Box<dyn Future<Output = Result<Option<String>, UploadError>> + Send + 'a>> {
        Box::pin(async move {
            let len = body.len();
            let resp = self
                .http
                .put(url)
                .header(CONTENT_TYPE, "application/octet-stream")
                .header(CONTENT_LENGTH, len)
                .body(body)
                .send()
                .await?;

            let status = resp.status();
            if !status.is_success() {
                let body = resp.text().await.unwrap_or_default();
                return Err(UploadError::Api {
                    status: status.as_u16(),
                    body,
                });
            }

            let etag = resp
                .headers()
                .get(ETAG)
                .and_then(|v| v.to_str().ok())
                .map(strip_etag_quotes);
            debug!(bytes = len, etag = ?etag, "part stored");
            Ok(etag)
        })
    }

    fn complete_upload<'a>(
        &'a self,
        req: &'a CompleteUploadRequest,
    ) -> Pin<Box<dyn Future<Output = Result<CompleteUploadResponse, UploadError>> + Send + 'a>> {
        Box::pin(async move { self.post_json("/upload/complete-chunked", req).await })
    }

    fn upload_direct<'a>(
        &'a self,
        project_id: &'a str,
        file_name: &'a str,
        content_type: &'a str,
        data: Vec<u8>,
    ) -> Pin<Box<dyn Future<Output = Result<CompleteUploadResponse, UploadError>> + Send + 'a>> {
        Box::pin(async move {
            let part = multipart::Part::bytes(data)
                .file_name(file_name.to_string())
                .mime_str(content_type)?;
            let form = multipart::Form::new()
                .part("file", part)
                .text("projectId", project_id.to_string());

            let url = format!("{}/upload/video", self.base_url);
            let resp = self
                .http
                .post(&url)
                .bearer_auth(&self.bearer_token)
                .multipart(form)
                .send()
                .await?;

            let status = resp.status();
            if !status.is_success() {
                let body = resp.text().await.unwrap_or_default();
                return Err(UploadError::Api {
                    status: status.as_u16(),
                    body,
                });
            }

            Ok(resp.json().await?)
        })
    }
}

/// Strips the surrounding quotes an `ETag` header usually carries.
fn strip_etag_quotes(raw: &str) -> String {
    raw.trim_matches('"').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_quoted_etag() {
        assert_eq!(strip_etag_quotes("\"abc123\""), "abc123");
    }

    #[test]
    fn leaves_unquoted_etag_alone() {
        assert_eq!(strip_etag_quotes("abc123"), "abc123");
    }

    #[test]
    fn base_url_trailing_slash_normalized() {
        let api = HttpUploadApi::new("https://api.example.com/", "t").unwrap();
        assert_eq!(api.base_url, "https://api.example.com");
    }
}
