//! CSVダウンロード（WASM版）
//!
//! Blob + オブジェクトURL + 非表示の <a download> でファイル保存させる

use gloo::timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};
use docparser_common::{to_csv, DataPoint, CSV_FILE_NAME, CSV_MIME_TYPE};

/// DataPoint配列をCSVとして保存
pub fn save_csv(data_points: &[DataPoint]) -> Result<(), String> {
    let csv = to_csv(data_points).map_err(|e| e.to_string())?;

    download_text(&csv, CSV_FILE_NAME, CSV_MIME_TYPE)
        .map_err(|e| format!("CSV保存失敗: {:?}", e))?;

    log::info!("{} を保存 ({}行)", CSV_FILE_NAME, data_points.len());
    Ok(())
}

/// ダウンロード開始後、オブジェクトURLを解放するまでの猶予（ミリ秒）
pub const REVOKE_DELAY_MS: u32 = 1_000;

/// テキストをファイルとしてダウンロードさせる
///
/// オブジェクトURLはクリックから [`REVOKE_DELAY_MS`] 後に解放する。
pub fn download_text(content: &str, file_name: &str, mime_type: &str) -> Result<(), JsValue> {
    let parts = js_sys::Array::of1(&JsValue::from_str(content));
    let options = BlobPropertyBag::new();
    options.set_type(mime_type);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document がありません"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("body がありません"))?;

    let link: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    link.set_href(&url);
    link.set_download(file_name);
    link.style().set_property("visibility", "hidden")?;

    body.append_child(&link)?;
    link.click();
    body.remove_child(&link)?;

    Timeout::new(REVOKE_DELAY_MS, move || {
        if let Err(e) = Url::revoke_object_url(&url) {
            log::warn!("オブジェクトURLの解放に失敗: {:?}", e);
        }
    })
    .forget();

    Ok(())
}
