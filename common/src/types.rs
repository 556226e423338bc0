//! 抽出結果の型定義
//!
//! WebとネイティブクライアントのCommon型:
//! - DataPoint: 抽出された項目と値の組
//! - ExtractionResult: APIレスポンス（Markdown + DataPoint配列）
//! - FileMeta / UploadRequest: 送信するファイルと説明

use serde::{Deserialize, Serialize};

/// 抽出された項目（Field/Value）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataPoint {
    pub field: String,
    pub value: String,
}

impl DataPoint {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// 抽出APIのレスポンス
///
/// `data_points` はサーバーが返した順序のまま保持する（並べ替え・重複排除なし）。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub markdown: String,
    pub data_points: Vec<DataPoint>,
}

impl ExtractionResult {
    pub fn is_empty(&self) -> bool {
        self.markdown.is_empty() && self.data_points.is_empty()
    }
}

/// 選択されたファイルの情報
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMeta {
    pub name: String,
    /// バイト数
    pub size: u64,
}

impl FileMeta {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    /// サイズ表示（MB、小数2桁）
    pub fn size_label(&self) -> String {
        format!("{:.2} MB", self.size as f64 / 1024.0 / 1024.0)
    }
}

/// 検証済みの送信内容
///
/// `FormState::validate` からのみ生成される。
/// descriptionは入力されたまま（trimしない）送信する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub file: FileMeta,
    pub description: String,
}
