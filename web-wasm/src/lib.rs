//! Brand Onboarding Web App (Leptos + WASM)
//!
//! CSVを選んで同一オリジンの`/upload`へ送り、行ごとの結果を表に出す。
//! 状態遷移は共通ライブラリの`ViewState`、ここは表示と副作用のみ

pub mod api;
pub mod app;
pub mod components;
pub mod export;

pub use app::{App, BrowserFile, OnboardingState};

use wasm_bindgen::prelude::*;

/// エントリーポイント（Trunkが読み込み時に呼ぶ）
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
