use crate::error::{OnboardError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 接続先を上書きする環境変数
pub const SERVER_ENV: &str = "BRAND_ONBOARDING_SERVER";

pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub server_url: String,
    /// 未設定ならタイムアウトなし
    pub timeout_seconds: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.into(),
            timeout_seconds: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| OnboardError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("brand-onboarding").join("config.json"))
    }

    /// 接続先の決定（引数 > 環境変数 > 設定ファイル）
    pub fn resolve_server(&self, cli_override: Option<&str>) -> String {
        if let Some(server) = cli_override.filter(|s| !s.trim().is_empty()) {
            return server.to_string();
        }

        if let Ok(server) = std::env::var(SERVER_ENV) {
            if !server.trim().is_empty() {
                return server;
            }
        }

        self.server_url.clone()
    }

    pub fn set_server(&mut self, url: String) -> Result<()> {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(OnboardError::Config(format!(
                "サーバーURLは http:// または https:// で始めてください: {}",
                url
            )));
        }
        self.server_url = url;
        self.save()
    }
}
