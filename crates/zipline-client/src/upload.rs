//! One-shot archive submission over HTTP

use std::path::Path;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use zipline_core::prelude::*;
use zipline_core::SessionId;

/// Fallback shown when a rejection carries no decodable message
const DEFAULT_UPLOAD_ERROR: &str = "Upload failed.";

/// Characters that must be escaped inside a URL path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

#[derive(Debug, Deserialize)]
struct UploadAccepted {
    session_id: String,
}

#[derive(Debug, Deserialize)]
struct UploadRejected {
    error: String,
}

/// HTTP client for the one-shot archive submission.
///
/// Form-level validation (single file, `.zip` suffix) happens before this
/// client is ever invoked; the server re-validates on its side and its
/// rejection message is passed through untouched.
#[derive(Debug, Clone)]
pub struct UploadClient {
    http: Client,
    base_url: Url,
}

impl UploadClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            http: Client::new(),
            base_url,
        }
    }

    /// Submit the archive, yielding the session identifier on acceptance.
    ///
    /// # Errors
    ///
    /// - [`Error::ArchiveNotFound`] if the path has no readable file name.
    /// - [`Error::Io`] if reading the archive fails.
    /// - [`Error::Transport`] for connection-level failures.
    /// - [`Error::Upload`] when the service rejects the archive; the
    ///   message is the server's own, or a generic fallback.
    pub async fn submit(&self, archive: &Path) -> Result<SessionId> {
        let filename = archive
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| Error::archive_not_found(archive))?
            .to_string();

        let bytes = tokio::fs::read(archive).await.map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                Error::archive_not_found(archive)
            } else {
                Error::Io(err)
            }
        })?;

        let url = self
            .base_url
            .join("tools/upload")
            .map_err(|_| Error::invalid_url(self.base_url.as_str()))?;

        debug!("uploading {} ({} bytes) to {}", filename, bytes.len(), url);

        let response = self
            .http
            .post(url)
            .query(&[("filename", filename.as_str())])
            .body(bytes)
            .send()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        let ok = response.status().is_success();
        let body = response.text().await.unwrap_or_default();
        parse_upload_response(ok, &body)
    }
}

/// Decode the upload response body.
///
/// Success bodies carry `{"session_id": ".."}`; rejections carry
/// `{"error": ".."}` with a generic fallback when the body is missing or
/// undecodable.
fn parse_upload_response(ok: bool, body: &str) -> Result<SessionId> {
    if ok {
        let accepted: UploadAccepted = serde_json::from_str(body)
            .map_err(|_| Error::transport("malformed upload response"))?;
        Ok(SessionId::new(accepted.session_id))
    } else {
        let message = serde_json::from_str::<UploadRejected>(body)
            .map(|r| r.error)
            .unwrap_or_else(|_| DEFAULT_UPLOAD_ERROR.to_string());
        Err(Error::upload(message))
    }
}

/// Build the download link for a completed run's archive.
///
/// The controller never fetches the archive itself; it only derives the
/// reference shown in the results view.
pub fn download_url(base: &Url, archive_name: &str) -> Result<Url> {
    let encoded = utf8_percent_encode(archive_name, PATH_SEGMENT).to_string();
    base.join(&format!("tools/download-all/{encoded}"))
        .map_err(|_| Error::invalid_url(base.as_str()))
}
