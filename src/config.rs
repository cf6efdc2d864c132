use crate::error::{InterviewClientError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 接続先URLを上書きする環境変数
pub const BASE_URL_ENV: &str = "INTERVIEW_SERVICE_URL";

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 面接サービスのURL
    pub base_url: String,
    /// レポート保存先フォルダ
    pub report_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            report_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| InterviewClientError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("interview-client").join("config.json"))
    }

    /// 接続先URL（優先順: 引数 > 環境変数 > 設定ファイル）
    pub fn resolve_base_url(&self, cli_override: Option<&str>) -> Result<String> {
        let env_value = std::env::var(BASE_URL_ENV).ok();
        let url = cli_override
            .map(str::to_string)
            .or(env_value.filter(|v| !v.trim().is_empty()))
            .unwrap_or_else(|| self.base_url.clone());

        normalize_base_url(&url)
    }
}

/// URLの末尾スラッシュを除き、スキームを確認
pub fn normalize_base_url(url: &str) -> Result<String> {
    let url = url.trim().trim_end_matches('/').to_string();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(InterviewClientError::Config(format!(
            "URLは http:// または https:// で始めてください: {}",
            url
        )));
    }
    Ok(url)
}
