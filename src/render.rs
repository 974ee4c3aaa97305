//! ターミナル向けの画面描画

use brand_onboarding_common::render::{COLUMN_HEADERS, RESULTS_HEADING};
use brand_onboarding_common::{result_rows, FileHandle, OutcomeSummary, ResultRow, ViewState};

/// 画面全体（メッセージ・エラー・結果テーブル）をテキストにする
pub fn render_view<F: FileHandle>(state: &ViewState<F>) -> String {
    let mut out = String::new();

    if let Some(message) = &state.message {
        out.push_str(message);
        out.push('\n');
    }

    if let Some(error) = state.error() {
        out.push_str(&format!("✖ {}\n", error));
    }

    if let Some(rows) = state.results().and_then(result_rows) {
        out.push('\n');
        out.push_str(RESULTS_HEADING);
        out.push('\n');
        out.push_str(&render_table(&rows));

        let summary = state.results().map(OutcomeSummary::of).unwrap_or_default();
        out.push_str(&format!(
            "\n{}件中 成功 {}件 / エラー {}件\n",
            summary.total, summary.succeeded, summary.failed
        ));
    }

    out
}

/// 結果テーブル
///
/// 詳細列が複数行の場合は2行目以降を詳細列の位置に揃える
pub fn render_table(rows: &[ResultRow]) -> String {
    let brand_width = rows
        .iter()
        .map(|r| r.brand.chars().count())
        .chain(std::iter::once(COLUMN_HEADERS[0].len()))
        .max()
        .unwrap_or(0);
    let status_width = rows
        .iter()
        .map(|r| r.status.label().len())
        .chain(std::iter::once(COLUMN_HEADERS[1].len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format_line(COLUMN_HEADERS[0], brand_width, COLUMN_HEADERS[1], status_width, COLUMN_HEADERS[2]));
    out.push_str(&format!(
        "{}-+-{}-+-{}\n",
        "-".repeat(brand_width),
        "-".repeat(status_width),
        "-".repeat(COLUMN_HEADERS[2].len())
    ));

    for row in rows {
        let mut details = row.details.lines();
        let first = details.next().unwrap_or("");
        out.push_str(&format_line(&row.brand, brand_width, row.status.label(), status_width, first));
        for line in details {
            out.push_str(&format_line("", brand_width, "", status_width, line));
        }
    }

    out
}

fn format_line(brand: &str, brand_width: usize, status: &str, status_width: usize, details: &str) -> String {
    let line = format!(
        "{} | {} | {}",
        pad(brand, brand_width),
        pad(status, status_width),
        details
    );
    format!("{}\n", line.trim_end())
}

/// 文字数基準で右側を空白で埋める
fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}
