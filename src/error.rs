use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocParserError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("抽出エラー: {0}")]
    Extraction(#[from] docparser_common::Error),
}

impl DocParserError {
    /// 抽出処理側のエラー（入力不足・通信・レスポンス不正など）
    pub fn as_extraction(&self) -> Option<&docparser_common::Error> {
        match self {
            DocParserError::Extraction(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DocParserError>;
