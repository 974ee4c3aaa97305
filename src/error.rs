use brand_onboarding_common::UploadError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OnboardError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("HTTPクライアントの初期化に失敗: {0}")]
    HttpClient(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error(transparent)]
    Upload(#[from] UploadError),
}

impl OnboardError {
    /// プロセスの終了コード（入力ミスは2、それ以外は1）
    pub fn exit_code(&self) -> i32 {
        match self {
            OnboardError::Upload(e) if e.is_user_input() => 2,
            OnboardError::FileNotFound(_) | OnboardError::Prompt(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, OnboardError>;
