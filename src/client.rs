//! `/upload` へのmultipart送信
//!
//! 送信結果は共通ライブラリの`interpret_response`で解釈する

use crate::config::Config;
use crate::error::{OnboardError, Result};
use brand_onboarding_common::{
    interpret_response, transport_error, upload_url, FileHandle, RowOutcome, UploadError,
    TEMPLATE_CONTENT_TYPE, UPLOAD_FIELD,
};
use reqwest::multipart::{Form, Part};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// ローカルファイルのハンドル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFile {
    pub path: PathBuf,
}

impl LocalFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FileHandle for LocalFile {
    fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

/// アップロードクライアント
pub struct UploadClient {
    http: reqwest::Client,
    url: String,
}

impl UploadClient {
    /// # Arguments
    /// * `server` - 接続先のオリジン（例: "http://localhost:5000"）
    /// * `config` - タイムアウト設定
    pub fn new(server: &str, config: &Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| OnboardError::HttpClient(e.to_string()))?;

        Ok(Self {
            http,
            url: upload_url(server),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// ファイルを1回だけ送信し、行ごとの結果を返す
    pub async fn upload(&self, file: &LocalFile) -> std::result::Result<Vec<RowOutcome>, UploadError> {
        let bytes = tokio::fs::read(file.path())
            .await
            .map_err(|e| transport_error(&e.to_string()))?;

        tracing::debug!(file = %file.path().display(), size = bytes.len(), "multipart送信");

        let part = Part::bytes(bytes)
            .file_name(file.file_name())
            .mime_str(TEMPLATE_CONTENT_TYPE)
            .map_err(|e| transport_error(&e.to_string()))?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        let response = self
            .http
            .post(&self.url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| transport_error(&e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| transport_error(&e.to_string()))?;

        tracing::debug!(status, body_len = body.len(), "レスポンス受信");

        interpret_response(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_file_name() {
        assert_eq!(LocalFile::new("/tmp/uploads/brands.csv").file_name(), "brands.csv");
        assert_eq!(LocalFile::new("data.txt").file_name(), "data.txt");
    }

    #[test]
    fn test_client_url() {
        let client = UploadClient::new("http://localhost:5000/", &Config::default()).unwrap();
        assert_eq!(client.url(), "http://localhost:5000/upload");
    }
}
