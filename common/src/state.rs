//! 画面状態
//!
//! - FormState: アップロードフォーム（ファイル選択・説明・ドラッグ・送信中）
//! - ShellState: アプリ全体（表示中の抽出結果）
//!
//! DOMに依存しないため、送信可否や二重送信防止をネイティブでテストできる。

use crate::error::{Error, Result};
use crate::types::{ExtractionResult, FileMeta, UploadRequest};

/// アップロードフォームの状態
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub selected_file: Option<FileMeta>,
    pub description: String,
    pub is_dragging: bool,
    pub loading: bool,
}

impl FormState {
    /// ファイルを選択（前の選択は置き換え）
    pub fn select_file(&mut self, file: FileMeta) {
        self.selected_file = Some(file);
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn drag_enter(&mut self) {
        self.is_dragging = true;
    }

    pub fn drag_leave(&mut self) {
        self.is_dragging = false;
    }

    /// ドロップ処理
    ///
    /// ファイルが含まれないドロップでは既存の選択を残す。
    pub fn drop_file(&mut self, file: Option<FileMeta>) {
        self.is_dragging = false;
        if let Some(file) = file {
            self.select_file(file);
        }
    }

    /// 送信ボタンを表示するか
    pub fn can_submit(&self) -> bool {
        self.selected_file.is_some() && !self.description.trim().is_empty()
    }

    /// 送信内容を検証
    pub fn validate(&self) -> Result<UploadRequest> {
        let file = self.selected_file.clone().ok_or(Error::MissingFile)?;
        if self.description.trim().is_empty() {
            return Err(Error::BlankDescription);
        }

        Ok(UploadRequest {
            file,
            description: self.description.clone(),
        })
    }

    /// 送信開始
    ///
    /// 送信中なら `Error::InFlight` を返し、リクエストは発行しない。
    /// 検証に通れば `loading` を立てる。
    pub fn begin_submit(&mut self) -> Result<UploadRequest> {
        if self.loading {
            return Err(Error::InFlight);
        }
        let request = self.validate()?;
        self.loading = true;
        Ok(request)
    }

    /// 送信終了（成功・失敗とも）
    pub fn finish_submit(&mut self) {
        self.loading = false;
    }
}

/// アプリ全体の状態
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShellState {
    pub result: Option<ExtractionResult>,
}

impl ShellState {
    /// 結果がまだ無い間はプレースホルダーを表示
    pub fn show_placeholder(&self) -> bool {
        self.result.is_none()
    }

    /// アップロード完了（既存の結果は上書き）
    pub fn complete(&mut self, result: ExtractionResult) {
        self.result = Some(result);
    }
}
