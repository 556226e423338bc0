use crate::error::{DocParserError, Result};
use docparser_common::ApiConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// ベースURLを上書きする環境変数
pub const API_URL_ENV: &str = "DOCPARSER_API_URL";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub api_url: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 設定ファイルを読む（無ければ既定値）
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
            .ok_or_else(|| DocParserError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("docparser").join("config.json"))
    }

    /// ベースURLを検証して設定（保存は `save` で行う）
    pub fn set_api_url(&mut self, url: &str) -> Result<()> {
        let api = ApiConfig::new(url)?;
        self.api_url = Some(api.base_url().to_string());
        Ok(())
    }

    /// 接続設定を解決
    ///
    /// 優先順位: 環境変数 → 設定ファイル → 既定値
    pub fn api_config(&self) -> Result<ApiConfig> {
        self.resolve(std::env::var(API_URL_ENV).ok())
    }

    fn resolve(&self, env_url: Option<String>) -> Result<ApiConfig> {
        let url = env_url
            .filter(|url| !url.trim().is_empty())
            .or_else(|| self.api_url.clone());

        match url {
            Some(url) => Ok(ApiConfig::new(&url)?),
            None => Ok(ApiConfig::default()),
        }
    }
}
