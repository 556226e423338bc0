//! 抽出APIの接続設定

use crate::error::{Error, Result};

/// アップロードエンドポイントのパス
pub const UPLOAD_PATH: &str = "/api/upload/";

/// multipartのファイルフィールド名
pub const FIELD_FILE: &str = "file";

/// multipartの説明フィールド名
pub const FIELD_DESCRIPTION: &str = "description";

/// ベースURLが未設定のときの既定値
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// API接続設定
///
/// 起動時に一度だけ解決し、クライアント生成時に渡す。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// 前後の空白と末尾の `/` を取り除いて生成
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(Error::Config("APIのベースURLが空です".into()));
        }

        Ok(Self {
            base_url: base_url.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/api/upload/`
    pub fn upload_url(&self) -> String {
        format!("{}{}", self.base_url, UPLOAD_PATH)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_url() {
        let config = ApiConfig::new("https://api.example.com").expect("設定失敗");
        assert_eq!(config.upload_url(), "https://api.example.com/api/upload/");
    }

    #[test]
    fn test_trailing_slash_and_whitespace_trimmed() {
        let config = ApiConfig::new("  http://127.0.0.1:8000// \n").expect("設定失敗");
        assert_eq!(config.base_url(), "http://127.0.0.1:8000");
        assert_eq!(config.upload_url(), "http://127.0.0.1:8000/api/upload/");
    }

    #[test]
    fn test_empty_url_rejected() {
        assert!(matches!(ApiConfig::new("   "), Err(Error::Config(_))));
        assert!(matches!(ApiConfig::new("/"), Err(Error::Config(_))));
    }

    #[test]
    fn test_default() {
        assert_eq!(ApiConfig::default().upload_url(), "http://localhost:8000/api/upload/");
    }
}
