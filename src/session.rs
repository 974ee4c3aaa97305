//! ターミナル版オンボーディング画面
//!
//! 状態遷移は共通ライブラリの`ViewState`に任せ、
//! ここではファイル送信などの副作用だけを行う

use crate::client::{LocalFile, UploadClient};
use brand_onboarding_common::ViewState;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

#[derive(Debug, Default)]
pub struct OnboardingSession {
    state: ViewState<LocalFile>,
}

impl OnboardingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState<LocalFile> {
        &self.state
    }

    pub fn into_state(self) -> ViewState<LocalFile> {
        self.state
    }

    fn apply(&mut self, transition: impl FnOnce(ViewState<LocalFile>) -> ViewState<LocalFile>) {
        let current = std::mem::take(&mut self.state);
        self.state = transition(current);
    }

    pub fn select_file(&mut self, file: Option<LocalFile>) {
        if let Some(file) = &file {
            tracing::info!(path = %file.path().display(), "ファイル選択");
        }
        self.apply(|state| state.select_file(file));
    }

    /// 送信してから結果を反映する
    ///
    /// 送信が不要な場合（未選択・拡張子違い・送信中）は状態だけ更新して戻る
    pub async fn submit(&mut self, client: &UploadClient, progress: ProgressBar) {
        let current = std::mem::take(&mut self.state);
        let (next, to_send) = current.submit();
        self.state = next;

        let Some(file) = to_send else {
            tracing::warn!(message = ?self.state.message, error = ?self.state.error(), "送信を中止");
            return;
        };

        tracing::info!(url = client.url(), "アップロード開始");
        progress.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        progress.set_message("Processing...");
        progress.enable_steady_tick(Duration::from_millis(100));

        let outcome = client.upload(&file).await;
        progress.finish_and_clear();

        match &outcome {
            Ok(rows) => tracing::info!(rows = rows.len(), "アップロード完了"),
            Err(e) => tracing::error!(error = %e, kind = ?e.kind(), "アップロード失敗"),
        }

        self.apply(|state| state.settle(outcome));
    }
}

/// スピナーを出さない送信用
pub fn hidden_progress() -> ProgressBar {
    ProgressBar::hidden()
}
