//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use docparser_common::{ExtractionResult, ShellState};
use crate::api::{build_config, ApiClient};
use crate::components::{
    header::Header,
    upload_form::UploadForm,
    result_view::ResultView,
};

/// 結果が無い間に表示するメッセージ
pub const PLACEHOLDER_MESSAGE: &str = "Upload a PDF to see the extracted content and data points";

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let client = ApiClient::new(build_config());
    log::info!("抽出API: {}", client.upload_url());

    let shell = RwSignal::new(ShellState::default());

    view! { <AppShell client=client shell=shell /> }
}

/// ナビバー・フォーム・結果表示をまとめた画面本体
///
/// クライアントと画面状態は外から渡す（`App` はビルド時設定で組み立てる）。
#[component]
pub fn AppShell(client: ApiClient, shell: RwSignal<ShellState>) -> impl IntoView {
    // アップロード完了ハンドラ
    let on_upload_complete = move |result: ExtractionResult| {
        shell.update(|s| s.complete(result));
    };

    view! {
        <div class="app">
            <Header />

            <main class="main-content">
                <UploadForm client=client on_upload_complete=on_upload_complete />

                <Show
                    when=move || !shell.with(ShellState::show_placeholder)
                    fallback=|| view! {
                        <div class="placeholder-message">
                            <p>{PLACEHOLDER_MESSAGE}</p>
                        </div>
                    }
                >
                    {move || shell.with(|s| s.result.clone()).map(|result| view! {
                        <ResultView result=result />
                    })}
                </Show>
            </main>
        </div>
    }
}
