//! アップロードフォームコンポーネント
//!
//! PDFの選択（ドラッグ&ドロップ / ファイル選択）と抽出内容の説明を受け取り、
//! 抽出APIに送信する。送信中はボタンを無効化し、二重送信しない。

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{DragEvent, File, HtmlInputElement};
use docparser_common::{CancelToken, Error, ExtractionResult, FileMeta, FormState};
use crate::api::ApiClient;

#[component]
pub fn UploadForm<F>(
    client: ApiClient,
    on_upload_complete: F,
) -> impl IntoView
where
    F: Fn(ExtractionResult) + Send + Sync + 'static + Clone,
{
    let form = RwSignal::new(FormState::default());
    // web_sys::File はスレッド間で共有できないためローカルに保持
    let file_handle = StoredValue::new_local(None::<File>);

    // アンマウント後に届いた結果は捨てる
    let cancel = CancelToken::new();
    on_cleanup({
        let cancel = cancel.clone();
        move || cancel.cancel()
    });

    let on_drag_enter = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        form.update(FormState::drag_enter);
    };

    let on_drag_leave = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        form.update(FormState::drag_leave);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();

        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        let meta = file.as_ref().map(file_meta);
        if file.is_some() {
            file_handle.set_value(file);
        }
        form.update(|f| f.drop_file(meta));
    };

    let on_file_change = move |ev| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            let meta = file_meta(&file);
            file_handle.set_value(Some(file));
            form.update(|f| f.select_file(meta));
        }
    };

    let on_submit = move |_: leptos::ev::MouseEvent| {
        let request = match form.try_update(FormState::begin_submit) {
            Some(Ok(request)) => request,
            Some(Err(err)) => {
                notify(&err);
                return;
            }
            None => return,
        };

        let Some(file) = file_handle.get_value() else {
            form.update(FormState::finish_submit);
            notify(&Error::MissingFile);
            return;
        };

        log::info!(
            "アップロード開始: {} ({})",
            request.file.name,
            request.file.size_label()
        );

        let client = client.clone();
        let cancel = cancel.clone();
        let on_upload_complete = on_upload_complete.clone();
        spawn_local(async move {
            let outcome = client.upload(&file, &request.description, &cancel).await;

            if cancel.is_cancelled() {
                log::warn!("フォーム破棄後のレスポンスを破棄: {}", request.file.name);
                return;
            }
            form.update(FormState::finish_submit);

            match outcome {
                Ok(result) => {
                    log::info!("抽出完了: {}件", result.data_points.len());
                    on_upload_complete(result);
                }
                Err(err) => notify(&err),
            }
        });
    };

    let is_loading = move || form.with(|f| f.loading);

    view! {
        <div class="upload-container">
            <div class="upload-header">
                <h2>"PDF Data Extraction"</h2>
                <p>"Upload your PDF and describe what you want to extract"</p>
            </div>

            <div class="upload-content">
                <div class="upload-box file-upload-box">
                    <div class="box-header">
                        <div class="box-icon">"📄"</div>
                        <h3>"Upload PDF File"</h3>
                    </div>

                    <div
                        class=move || {
                            if form.with(|f| f.is_dragging) {
                                "upload-area dragging"
                            } else {
                                "upload-area"
                            }
                        }
                        on:dragenter=on_drag_enter
                        on:dragover=on_drag_enter
                        on:dragleave=on_drag_leave
                        on:drop=on_drop
                    >
                        <div class="upload-icon">"⬆️"</div>
                        <div class="upload-text">
                            <p class="upload-title">"Drop your PDF here"</p>
                            <p class="upload-subtitle">"or click to browse files"</p>
                        </div>
                        <label class="upload-button">
                            "Choose File"
                            <input type="file" accept=".pdf" hidden=true on:change=on_file_change />
                        </label>
                    </div>

                    {move || form.with(|f| f.selected_file.clone()).map(|file| {
                        let size = file.size_label();
                        view! {
                            <div class="file-info">
                                <div class="file-icon">"✅"</div>
                                <div class="file-details">
                                    <p class="file-name">{file.name}</p>
                                    <p class="file-size">{size}</p>
                                </div>
                            </div>
                        }
                    })}
                </div>

                <div class="upload-box description-box">
                    <div class="box-header">
                        <div class="box-icon">"🎯"</div>
                        <h3>"Extraction Instructions"</h3>
                    </div>

                    <div class="description-content">
                        <label for="description">
                            "Describe the structure and type of data you want to extract:"
                        </label>
                        <textarea
                            id="description"
                            rows="4"
                            placeholder="e.g., Extract contact information including name, email, phone number, and address from this resume..."
                            prop:value=move || form.with(|f| f.description.clone())
                            on:input=move |ev| {
                                form.update(|f| f.set_description(event_target_value(&ev)));
                            }
                        />
                        <div class="description-tips">
                            <p>"💡 " <strong>"Tip:"</strong> " Be specific about what fields you want to extract"</p>
                        </div>
                    </div>
                </div>
            </div>

            <Show when=move || form.with(FormState::can_submit)>
                <div class="submit-section">
                    <button
                        class="extract-button"
                        disabled=is_loading
                        on:click=on_submit.clone()
                    >
                        {move || if is_loading() {
                            view! {
                                <span class="loading-spinner"></span>
                                "Extracting Data..."
                            }
                            .into_any()
                        } else {
                            view! {
                                <span class="button-icon">"🔍"</span>
                                "Extract Data"
                            }
                            .into_any()
                        }}
                    </button>
                </div>
            </Show>
        </div>
    }
}

fn file_meta(file: &File) -> FileMeta {
    FileMeta::new(file.name(), file.size() as u64)
}

/// エラーをログに出し、必要ならアラートを表示
fn notify(err: &Error) {
    match err {
        Error::InFlight | Error::Cancelled => log::debug!("{}", err),
        err if err.is_validation() => log::warn!("{}", err),
        err => log::error!("Upload failed: {}", err),
    }

    if let Some(message) = err.alert_message() {
        gloo::dialogs::alert(message);
    }
}
