//! `upload` コマンド本体
//!
//! 送信 → 画面描画 → 結果保存 までを行い、最終状態を返す

use crate::client::{LocalFile, UploadClient};
use crate::error::{OnboardError, Result};
use crate::render::render_view;
use crate::session::OnboardingSession;
use brand_onboarding_common::ViewState;
use indicatif::ProgressBar;
use std::io::Write;
use std::path::{Path, PathBuf};

/// アップロード完了時の結果
#[derive(Debug)]
pub struct UploadReport {
    pub state: ViewState<LocalFile>,
    /// `--output`で保存した先
    pub saved_to: Option<PathBuf>,
}

/// CSVを送信し、画面を`out`に描画する
///
/// # Returns
/// * `Ok(UploadReport)` - 送信成功（行単位のエラーは含みうる）
/// * `Err(OnboardError::FileNotFound)` - ローカルにファイルがない
/// * `Err(OnboardError::Upload)` - 画面がエラー状態で終わった（描画済み）
pub async fn run_upload(
    client: &UploadClient,
    path: &Path,
    output: Option<&Path>,
    progress: ProgressBar,
    out: &mut impl Write,
) -> Result<UploadReport> {
    if !path.is_file() {
        return Err(OnboardError::FileNotFound(path.display().to_string()));
    }

    let mut session = OnboardingSession::new();
    session.select_file(Some(LocalFile::new(path)));
    session.submit(client, progress).await;

    let state = session.into_state();
    writeln!(out)?;
    write!(out, "{}", render_view(&state))?;

    if let Some(err) = state.error() {
        return Err(err.clone().into());
    }

    let saved_to = match (output, state.results()) {
        (Some(output), Some(rows)) => {
            let json = serde_json::to_string_pretty(rows)?;
            std::fs::write(output, json)?;
            tracing::info!(path = %output.display(), rows = rows.len(), "結果を保存");
            writeln!(out, "✔ 結果を保存: {}", output.display())?;
            Some(output.to_path_buf())
        }
        _ => None,
    };

    Ok(UploadReport { state, saved_to })
}
