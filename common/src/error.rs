//! エラー型定義

use thiserror::Error;

/// アラート文言: 入力不足
pub const VALIDATION_ALERT: &str = "Please select a file and provide a description";

/// アラート文言: 送信失敗
pub const UPLOAD_FAILED_ALERT: &str = "Upload failed";

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("PDFファイルが選択されていません")]
    MissingFile,

    #[error("抽出内容の説明が空です")]
    BlankDescription,

    #[error("送信中のリクエストがあります")]
    InFlight,

    #[error("リクエストはキャンセルされました")]
    Cancelled,

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// 送信前の入力チェックで発生したエラーか
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::MissingFile | Error::BlankDescription)
    }

    /// ユーザーに表示するアラート文言
    ///
    /// 二重送信とキャンセルは画面に出さない（None）。
    pub fn alert_message(&self) -> Option<&'static str> {
        match self {
            Error::MissingFile | Error::BlankDescription => Some(VALIDATION_ALERT),
            Error::InFlight | Error::Cancelled => None,
            _ => Some(UPLOAD_FAILED_ALERT),
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
