//! オンボーディング画面の状態遷移
//!
//! 画面の状態は1つの`ViewState`で表し、イベントごとに
//! `self`を消費して新しい状態を返す。
//!
//! アップロードの流れ:
//! Idle → Loading → {Completed, Failed} → （再選択・再送信）

use crate::error::UploadError;
use crate::types::{FileHandle, RowOutcome};
use crate::upload::is_csv_file_name;

pub const UPLOADING_MESSAGE: &str = "Uploading and processing file...";
pub const PROCESSED_MESSAGE: &str = "File processed successfully.";

/// アップロードの進行状態
#[derive(Debug, Clone, Default, PartialEq)]
pub enum UploadPhase {
    #[default]
    Idle,
    Loading,
    Completed(Vec<RowOutcome>),
    Failed(UploadError),
}

/// ナビゲーションのタブ
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Onboarding,
    Dashboard,
    Settings,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Onboarding, Tab::Dashboard, Tab::Settings];

    /// ナビゲーションボタンの表示名
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Onboarding => "Create Brands",
            Tab::Dashboard => "Tool 2",
            Tab::Settings => "Tool 3",
        }
    }

    /// 未実装タブの表示内容（オンボーディングはNone）
    pub fn placeholder(&self) -> Option<PlaceholderContent> {
        match self {
            Tab::Onboarding => None,
            Tab::Dashboard => Some(PlaceholderContent {
                title: "Thing 2",
                heading: "Coming...sometime",
                body: "Some other thing that will do things that suck doing manually.",
            }),
            Tab::Settings => Some(PlaceholderContent {
                title: "Tool 3",
                heading: "Coming...eventually",
                body: "Some other OTHER thing that will do things that suck doing manually.",
            }),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.placeholder().is_some()
    }
}

/// 未実装タブの文言
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderContent {
    pub title: &'static str,
    pub heading: &'static str,
    pub body: &'static str,
}

impl PlaceholderContent {
    pub const TAGLINE: &'static str = "Something else eventually";
}

/// 配色テーマ（見た目のみ）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Green,
    Modern,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Green => Theme::Modern,
            Theme::Modern => Theme::Green,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Green => "green",
            Theme::Modern => "modern",
        }
    }

    pub fn css_class(&self) -> String {
        format!("theme-{}", self.as_str())
    }

    /// 切替ボタンの表示名（切替先を示す）
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Green => "Light Theme",
            Theme::Modern => "Green Theme",
        }
    }

    pub fn toggle_aria_label(&self) -> &'static str {
        match self {
            Theme::Green => "Switch to light theme",
            Theme::Modern => "Switch to green theme",
        }
    }
}

/// オンボーディング画面の状態
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState<F> {
    pub selected_file: Option<F>,
    pub message: Option<String>,
    pub phase: UploadPhase,
    pub active_tab: Tab,
    pub theme: Theme,
}

impl<F> Default for ViewState<F> {
    fn default() -> Self {
        Self {
            selected_file: None,
            message: None,
            phase: UploadPhase::Idle,
            active_tab: Tab::Onboarding,
            theme: Theme::Green,
        }
    }
}

impl<F: FileHandle> ViewState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, UploadPhase::Loading)
    }

    /// 表示する結果（完了時のみ）
    pub fn results(&self) -> Option<&[RowOutcome]> {
        match &self.phase {
            UploadPhase::Completed(rows) => Some(rows),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&UploadError> {
        match &self.phase {
            UploadPhase::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// アップロードボタンを押せるか
    pub fn can_submit(&self) -> bool {
        self.selected_file.is_some() && !self.is_loading()
    }

    /// ファイル選択
    ///
    /// 前回のメッセージ・エラー・結果を消す。
    /// 送信中はリクエストが残っているのでLoadingのまま
    pub fn select_file(self, file: Option<F>) -> Self {
        let phase = if self.is_loading() {
            UploadPhase::Loading
        } else {
            UploadPhase::Idle
        };
        Self {
            selected_file: file,
            message: None,
            phase,
            ..self
        }
    }

    /// アップロード開始
    ///
    /// リクエストを出すべきときだけ送信対象のファイルを返す
    pub fn submit(self) -> (Self, Option<F>) {
        if self.is_loading() {
            return (self, None);
        }

        let Some(file) = self.selected_file.clone() else {
            // 未選択はエラーではなく案内メッセージとして出す
            let next = Self {
                message: Some(UploadError::NoFileSelected.to_string()),
                ..self
            };
            return (next, None);
        };

        let file_name = file.file_name();
        if !is_csv_file_name(&file_name) {
            let next = Self {
                phase: UploadPhase::Failed(UploadError::NotCsv { file_name }),
                ..self
            };
            return (next, None);
        }

        let next = Self {
            message: Some(UPLOADING_MESSAGE.to_string()),
            phase: UploadPhase::Loading,
            ..self
        };
        (next, Some(file))
    }

    /// リクエスト完了（成功・失敗どちらでも必ずLoadingを抜ける）
    pub fn settle(self, outcome: Result<Vec<RowOutcome>, UploadError>) -> Self {
        if !self.is_loading() {
            return self;
        }

        match outcome {
            Ok(rows) => Self {
                message: Some(PROCESSED_MESSAGE.to_string()),
                phase: UploadPhase::Completed(rows),
                ..self
            },
            Err(err) => Self {
                phase: UploadPhase::Failed(err),
                ..self
            },
        }
    }

    pub fn switch_tab(self, tab: Tab) -> Self {
        Self { active_tab: tab, ..self }
    }

    pub fn toggle_theme(self) -> Self {
        Self {
            theme: self.theme.toggled(),
            ..self
        }
    }
}
