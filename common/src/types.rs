//! アップロード結果の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - FileHandle: ホスト側のファイルハンドル（ブラウザのFile、ローカルパス）
//! - RowOutcome: サーバーが返す1行分の処理結果

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 選択されたファイルのハンドル
///
/// 検証はファイル名の拡張子のみ。中身は読まない
pub trait FileHandle: Clone {
    fn file_name(&self) -> String;
}

/// 1行分の処理結果の種別
#[derive(Debug, Clone, PartialEq)]
pub enum OutcomeKind {
    /// ブランド作成成功。payloadはサーバーの返した値そのまま
    Success { result: Option<Value> },
    /// 行単位のエラー。兄弟行には影響しない
    Error { message: String },
}

/// サーバーが返す1行分の処理結果
///
/// JSON形式: `{"brand": ..., "result": ...}` または `{"brand": ..., "error": ...}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub struct RowOutcome {
    pub brand: Option<String>,
    pub kind: OutcomeKind,
}

impl RowOutcome {
    pub fn success(brand: impl Into<String>, result: Value) -> Self {
        Self {
            brand: Some(brand.into()),
            kind: OutcomeKind::Success { result: Some(result) },
        }
    }

    pub fn error(brand: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            brand: Some(brand.into()),
            kind: OutcomeKind::Error { message: message.into() },
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.kind, OutcomeKind::Error { .. })
    }
}

/// JavaScriptの真偽判定と同じ基準で「値あり」とみなすか
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// 表示用テキスト（文字列はそのまま、それ以外はJSON表記）
pub(crate) fn display_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl From<Value> for RowOutcome {
    fn from(value: Value) -> Self {
        let Value::Object(mut fields) = value else {
            // オブジェクト以外の要素は名前なしの成功行として扱う
            return Self {
                brand: None,
                kind: OutcomeKind::Success { result: None },
            };
        };

        let brand = fields
            .get("brand")
            .filter(|v| is_truthy(v))
            .map(display_text);

        let kind = match fields.remove("error") {
            Some(error) if is_truthy(&error) => OutcomeKind::Error {
                message: display_text(&error),
            },
            _ => OutcomeKind::Success {
                result: fields.remove("result"),
            },
        };

        Self { brand, kind }
    }
}

impl From<RowOutcome> for Value {
    fn from(outcome: RowOutcome) -> Self {
        let mut fields = Map::new();
        if let Some(brand) = outcome.brand {
            fields.insert("brand".into(), Value::String(brand));
        }
        match outcome.kind {
            OutcomeKind::Error { message } => {
                fields.insert("error".into(), Value::String(message));
            }
            OutcomeKind::Success { result: Some(result) } => {
                fields.insert("result".into(), result);
            }
            OutcomeKind::Success { result: None } => {}
        }
        Value::Object(fields)
    }
}
