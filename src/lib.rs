//! doc parser ネイティブクライアント
//!
//! Web版と同じ抽出API（`POST {base}/api/upload/`）をreqwestで呼び出す。

pub mod client;
pub mod config;
pub mod error;

pub use client::ExtractionClient;
pub use config::Config;
pub use error::{DocParserError, Result};
