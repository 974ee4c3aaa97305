//! 結果テーブルコンポーネント

use leptos::prelude::*;
use brand_onboarding_common::render::{COLUMN_HEADERS, RESULTS_HEADING};
use brand_onboarding_common::{result_rows, ResultRow, RowStatus};
use crate::app::OnboardingState;

#[component]
pub fn ResultsTable(state: ReadSignal<OnboardingState, LocalStorage>) -> impl IntoView {
    // 結果が空ならテーブルごと出さない
    let rows = move || state.with(|s| s.results().and_then(result_rows));

    move || {
        rows().map(|rows| {
            view! {
                <div class="App-card results-container">
                    <h3>{RESULTS_HEADING}</h3>
                    <table class="results-table">
                        <thead>
                            <tr>
                                {COLUMN_HEADERS
                                    .into_iter()
                                    .map(|header| view! { <th>{header}</th> })
                                    .collect_view()}
                            </tr>
                        </thead>
                        <tbody>
                            {rows
                                .into_iter()
                                .map(|row| view! { <ResultRowView row=row /> })
                                .collect_view()}
                        </tbody>
                    </table>
                </div>
            }
        })
    }
}

#[component]
fn ResultRowView(row: ResultRow) -> impl IntoView {
    let status = row.status;
    let details = match status {
        RowStatus::Error => view! {
            <div class="error-details">
                <span class="error-text">{row.details}</span>
            </div>
        }
        .into_any(),
        RowStatus::Success => view! { <pre class="result-data">{row.details}</pre> }.into_any(),
    };

    view! {
        <tr>
            <td>{row.brand}</td>
            <td>
                <span class={status.css_class()}>{status.label()}</span>
            </td>
            <td>{details}</td>
        </tr>
    }
}
