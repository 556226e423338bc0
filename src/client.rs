//! 抽出APIクライアント（reqwest + multipart）

use std::path::Path;

use docparser_common::{
    parse_upload_response, ApiConfig, CancelToken, Error, ExtractionResult, FileMeta, FormState,
    FIELD_DESCRIPTION, FIELD_FILE,
};
use reqwest::multipart::{Form, Part};

use crate::error::{DocParserError, Result};

const PDF_MIME_TYPE: &str = "application/pdf";

#[derive(Debug, Clone)]
pub struct ExtractionClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ExtractionClient {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_http_client(reqwest::Client::new(), config)
    }

    pub fn with_http_client(http: reqwest::Client, config: ApiConfig) -> Self {
        Self { http, config }
    }

    pub fn upload_url(&self) -> String {
        self.config.upload_url()
    }

    /// PDFファイルを読み込んで送信
    pub async fn upload_file(
        &self,
        path: &Path,
        description: &str,
        cancel: &CancelToken,
    ) -> Result<ExtractionResult> {
        if !path.is_file() {
            return Err(DocParserError::FileNotFound(path.display().to_string()));
        }

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "document.pdf".to_string());
        let bytes = tokio::fs::read(path).await?;

        self.upload_bytes(&file_name, bytes, description, cancel).await
    }

    /// PDFのバイト列と説明を送信
    ///
    /// 1回の送信につきリクエストは1回（リトライなし）。
    /// 検証に失敗した場合・キャンセル済みの場合は送信しない。
    pub async fn upload_bytes(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        description: &str,
        cancel: &CancelToken,
    ) -> Result<ExtractionResult> {
        let mut form = FormState::default();
        form.select_file(FileMeta::new(file_name, bytes.len() as u64));
        form.set_description(description);
        let request = form.validate()?;
        cancel.check()?;

        let part = Part::bytes(bytes)
            .file_name(request.file.name.clone())
            .mime_str(PDF_MIME_TYPE)
            .map_err(network)?;
        let multipart = Form::new()
            .part(FIELD_FILE, part)
            .text(FIELD_DESCRIPTION, request.description);

        log::info!(
            "アップロード開始: {} ({}) -> {}",
            request.file.name,
            request.file.size_label(),
            self.upload_url()
        );

        let response = self
            .http
            .post(self.upload_url())
            .multipart(multipart)
            .send()
            .await
            .map_err(network)?;
        cancel.check()?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(network)?;
        cancel.check()?;

        match parse_upload_response(status, &body) {
            Ok(result) => {
                log::info!("抽出完了: {}件", result.data_points.len());
                Ok(result)
            }
            Err(e) => {
                log::error!("Upload failed: {}", e);
                Err(e.into())
            }
        }
    }
}

fn network(e: reqwest::Error) -> DocParserError {
    DocParserError::Extraction(Error::Network(e.to_string()))
}
