//! doc parser Common Library
//!
//! Web(WASM)とネイティブクライアントで共有される型とユーティリティ

pub mod types;
pub mod error;
pub mod config;
pub mod parser;
pub mod export;
pub mod markdown;
pub mod state;
pub mod cancel;

pub use types::{DataPoint, ExtractionResult, FileMeta, UploadRequest};
pub use error::{Error, Result, UPLOAD_FAILED_ALERT, VALIDATION_ALERT};
pub use config::{ApiConfig, DEFAULT_API_URL, FIELD_DESCRIPTION, FIELD_FILE, UPLOAD_PATH};
pub use parser::{parse_extraction_response, parse_upload_response};
pub use export::{to_csv, CSV_FILE_NAME, CSV_MIME_TYPE};
pub use markdown::render_markdown;
pub use state::{FormState, ShellState};
pub use cancel::CancelToken;
