//! エラー型定義

use thiserror::Error;

/// アップロード失敗時の画面表示用メッセージ
pub const SELECT_FILE_PROMPT: &str = "Please select a CSV file.";
pub const GENERIC_SERVER_ERROR: &str = "Server error";
pub const GENERIC_UPLOAD_ERROR: &str = "Error uploading file";

/// アップロード操作のエラー
///
/// Displayがそのまま画面に表示される文言になる
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("{}", SELECT_FILE_PROMPT)]
    NoFileSelected,

    #[error("{}", SELECT_FILE_PROMPT)]
    NotCsv { file_name: String },

    /// 非2xxレスポンス
    #[error("{0}")]
    Server(String),

    /// リクエストが完了しなかった（接続失敗・レスポンス解析失敗）
    #[error("{0}")]
    Transport(String),
}

/// エラー分類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UserInput,
    ServerReported,
    Transport,
}

impl UploadError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            UploadError::NoFileSelected | UploadError::NotCsv { .. } => ErrorKind::UserInput,
            UploadError::Server(_) => ErrorKind::ServerReported,
            UploadError::Transport(_) => ErrorKind::Transport,
        }
    }

    /// ネットワークに出る前に検出されたエラーか
    pub fn is_user_input(&self) -> bool {
        self.kind() == ErrorKind::UserInput
    }
}
