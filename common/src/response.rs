//! `/upload` レスポンスの解釈
//!
//! HTTPステータスと本文から、行ごとの結果またはエラーを取り出す

use serde_json::Value;

use crate::error::{UploadError, GENERIC_SERVER_ERROR, GENERIC_UPLOAD_ERROR};
use crate::types::{display_text, is_truthy, RowOutcome};

/// 2xxか
pub fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// レスポンスを解釈する
///
/// # Arguments
/// * `status` - HTTPステータスコード
/// * `body` - レスポンス本文
///
/// # Returns
/// * `Ok(Vec<RowOutcome>)` - サーバーの返した順の行結果
/// * `Err(UploadError::Server)` - 非2xx
/// * `Err(UploadError::Transport)` - 2xxだが本文がJSONでない
pub fn interpret_response(status: u16, body: &str) -> Result<Vec<RowOutcome>, UploadError> {
    if !is_success_status(status) {
        return Err(UploadError::Server(server_error_message(body)));
    }
    parse_row_outcomes(body)
}

/// 非2xxレスポンスの本文から表示用メッセージを取り出す
///
/// `{"error": "..."}` の値がなければ汎用メッセージ
pub fn server_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|data| data.get("error").filter(|v| is_truthy(v)).map(display_text))
        .unwrap_or_else(|| GENERIC_SERVER_ERROR.to_string())
}

/// 2xxレスポンスの本文を行結果として読む
///
/// 配列以外のJSONは結果なしとして扱う
pub fn parse_row_outcomes(body: &str) -> Result<Vec<RowOutcome>, UploadError> {
    let data: Value =
        serde_json::from_str(body).map_err(|e| transport_error(&e.to_string()))?;

    match data {
        Value::Array(items) => Ok(items.into_iter().map(RowOutcome::from).collect()),
        _ => Ok(Vec::new()),
    }
}

/// 通信失敗のエラー（メッセージが空なら汎用メッセージ）
pub fn transport_error(message: &str) -> UploadError {
    let message = message.trim();
    if message.is_empty() {
        UploadError::Transport(GENERIC_UPLOAD_ERROR.to_string())
    } else {
        UploadError::Transport(message.to_string())
    }
}
