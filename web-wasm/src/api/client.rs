//! 抽出API連携（fetch + FormData）
//!
//! `POST {base}/api/upload/` に PDF と説明を multipart で送信し、
//! レスポンスを ExtractionResult にパースする。

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};
use docparser_common::{
    parse_upload_response, ApiConfig, CancelToken, Error, ExtractionResult, Result,
    FIELD_DESCRIPTION, FIELD_FILE,
};

/// ビルド時に埋め込むベースURL
const BUILD_API_URL: Option<&str> = option_env!("DOCPARSER_API_URL");

/// ビルド時の環境変数からAPI設定を解決
///
/// 未設定・不正な場合は既定値（localhost:8000）を使う。
pub fn build_config() -> ApiConfig {
    resolve_config(BUILD_API_URL)
}

fn resolve_config(value: Option<&str>) -> ApiConfig {
    match value.map(ApiConfig::new) {
        Some(Ok(config)) => config,
        Some(Err(e)) => {
            log::warn!("DOCPARSER_API_URL を無視します: {}", e);
            ApiConfig::default()
        }
        None => ApiConfig::default(),
    }
}

/// 抽出APIクライアント
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn upload_url(&self) -> String {
        self.config.upload_url()
    }

    /// PDFと説明を送信して抽出結果を得る
    ///
    /// リトライ・タイムアウトなし。レスポンス受信後にキャンセル済みなら
    /// `Error::Cancelled` を返し、結果は捨てる。
    pub async fn upload(
        &self,
        file: &File,
        description: &str,
        cancel: &CancelToken,
    ) -> Result<ExtractionResult> {
        let form = FormData::new().map_err(js_error)?;
        form.append_with_blob_and_filename(FIELD_FILE, file, &file.name())
            .map_err(js_error)?;
        form.append_with_str(FIELD_DESCRIPTION, description)
            .map_err(js_error)?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&form);

        let url = self.upload_url();
        let request = Request::new_with_str_and_init(&url, &opts).map_err(js_error)?;

        let window = web_sys::window()
            .ok_or_else(|| Error::Network("window がありません".into()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error)?;
        cancel.check()?;

        let resp: Response = resp_value.dyn_into().map_err(js_error)?;
        let status = resp.status();
        let text = JsFuture::from(resp.text().map_err(js_error)?)
            .await
            .map_err(js_error)?;
        cancel.check()?;

        let body = text.as_string().unwrap_or_default();
        log::debug!("{} -> HTTP {} ({} bytes)", url, status, body.len());

        parse_upload_response(status, &body)
    }
}

fn js_error(value: JsValue) -> Error {
    Error::Network(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_url_from_config() {
        let config = ApiConfig::new("https://extract.example.com/").expect("設定失敗");
        let client = ApiClient::new(config);
        assert_eq!(client.upload_url(), "https://extract.example.com/api/upload/");
    }

    #[test]
    fn test_resolve_config_unset() {
        assert_eq!(resolve_config(None), ApiConfig::default());
    }

    #[test]
    fn test_resolve_config_value() {
        let config = resolve_config(Some("http://10.0.0.5:9000"));
        assert_eq!(config.upload_url(), "http://10.0.0.5:9000/api/upload/");
    }

    #[test]
    fn test_resolve_config_blank_falls_back() {
        assert_eq!(resolve_config(Some("  ")), ApiConfig::default());
    }
}
