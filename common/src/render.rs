//! 結果テーブルの表示モデル
//!
//! 行ごとに ブランド名 / ステータス / 詳細 の3列を作る。
//! 並び替え・絞り込みはしない

use serde_json::Value;

use crate::types::{OutcomeKind, RowOutcome};

pub const RESULTS_HEADING: &str = "Processing Results";
pub const COLUMN_HEADERS: [&str; 3] = ["Brand", "Status", "Details"];
pub const UNKNOWN_BRAND: &str = "Unknown";

/// 行ステータス
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStatus {
    Success,
    Error,
}

impl RowStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RowStatus::Success => "Success",
            RowStatus::Error => "Error",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            RowStatus::Success => "success-text",
            RowStatus::Error => "error-text",
        }
    }
}

/// テーブルの1行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub brand: String,
    pub status: RowStatus,
    pub details: String,
}

impl From<&RowOutcome> for ResultRow {
    fn from(outcome: &RowOutcome) -> Self {
        let brand = outcome
            .brand
            .clone()
            .unwrap_or_else(|| UNKNOWN_BRAND.to_string());

        let (status, details) = match &outcome.kind {
            OutcomeKind::Error { message } => (RowStatus::Error, message.clone()),
            OutcomeKind::Success { result } => (
                RowStatus::Success,
                result.as_ref().map(pretty_json).unwrap_or_default(),
            ),
        };

        Self { brand, status, details }
    }
}

/// 2スペースインデントで整形
pub fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// 結果が空ならテーブル自体を出さない
pub fn result_rows(outcomes: &[RowOutcome]) -> Option<Vec<ResultRow>> {
    if outcomes.is_empty() {
        return None;
    }
    Some(outcomes.iter().map(ResultRow::from).collect())
}

/// 成功・失敗件数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutcomeSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl OutcomeSummary {
    pub fn of(outcomes: &[RowOutcome]) -> Self {
        let failed = outcomes.iter().filter(|o| o.is_error()).count();
        Self {
            total: outcomes.len(),
            succeeded: outcomes.len() - failed,
            failed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::interpret_response;
    use serde_json::json;

    #[test]
    fn test_rows_from_mixed_response() {
        let body = r#"[{"brand":"Acme","result":{"id":1}}, {"brand":"Beta","error":"bad email"}]"#;
        let outcomes = interpret_response(200, body).unwrap();
        let rows = result_rows(&outcomes).expect("テーブルが表示されない");

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].brand, "Acme");
        assert_eq!(rows[0].status.label(), "Success");
        assert_eq!(rows[0].details, "{\n  \"id\": 1\n}");
        assert_eq!(rows[1].brand, "Beta");
        assert_eq!(rows[1].status.label(), "Error");
        assert_eq!(rows[1].details, "bad email");
    }

    #[test]
    fn test_empty_results_render_no_table() {
        assert!(result_rows(&[]).is_none());
    }

    #[test]
    fn test_missing_brand_uses_fallback() {
        let outcomes = vec![RowOutcome::from(json!({"error": "Missing required values: brand_name"}))];
        let rows = result_rows(&outcomes).unwrap();
        assert_eq!(rows[0].brand, "Unknown");
        assert_eq!(rows[0].status, RowStatus::Error);
        assert_eq!(rows[0].status.css_class(), "error-text");
    }

    #[test]
    fn test_success_without_payload_has_empty_details() {
        let rows = result_rows(&[RowOutcome::from(json!({"brand": "Acme"}))]).unwrap();
        assert_eq!(rows[0].status, RowStatus::Success);
        assert_eq!(rows[0].details, "");
    }

    #[test]
    fn test_nested_payload_pretty_printed() {
        let payload = json!({"data": {"brand": {"id": "b-1", "tags": ["a", "b"]}}});
        let rows = result_rows(&[RowOutcome::success("Acme", payload.clone())]).unwrap();
        assert_eq!(rows[0].details, serde_json::to_string_pretty(&payload).unwrap());
        assert!(rows[0].details.contains("\n    \"brand\": {"));
    }

    #[test]
    fn test_outcome_summary() {
        let outcomes = vec![
            RowOutcome::success("Acme", json!(1)),
            RowOutcome::error("Beta", "bad email"),
            RowOutcome::error("Gamma", "duplicate"),
        ];
        assert_eq!(
            OutcomeSummary::of(&outcomes),
            OutcomeSummary { total: 3, succeeded: 1, failed: 2 }
        );
        assert_eq!(OutcomeSummary::of(&[]), OutcomeSummary::default());
    }
}
