//! 抽出結果コンポーネント
//!
//! DataPointの表（CSV保存ボタン付き）とMarkdownのドキュメント表示

use leptos::prelude::*;
use docparser_common::{render_markdown, ExtractionResult};
use crate::export::save_csv;

#[component]
pub fn ResultView(result: ExtractionResult) -> impl IntoView {
    let ExtractionResult { markdown, data_points } = result;
    let html = render_markdown(&markdown);

    // 受け取った順に1行ずつ（並べ替えなし）
    let rows = data_points
        .iter()
        .map(|point| {
            view! {
                <tr>
                    <td class="field-cell">{point.field.clone()}</td>
                    <td class="value-cell">{point.value.clone()}</td>
                </tr>
            }
        })
        .collect_view();

    let on_save_csv = move |_| {
        if let Err(e) = save_csv(&data_points) {
            log::error!("{}", e);
        }
    };

    view! {
        <div class="result-sections">
            <div class="card">
                <div class="section-header">
                    <h2 class="section-title">"Extracted Data Points"</h2>
                    <button class="save-csv-button" on:click=on_save_csv>
                        <span class="button-icon">"📊"</span>
                        "Save as CSV"
                    </button>
                </div>
                <div class="table-container">
                    <table class="result-table">
                        <thead>
                            <tr>
                                <th>"Field"</th>
                                <th>"Value"</th>
                            </tr>
                        </thead>
                        <tbody>{rows}</tbody>
                    </table>
                </div>
            </div>

            <div class="card">
                <h2 class="section-title">"Document View"</h2>
                <div class="markdown-content" inner_html=html></div>
            </div>
        </div>
    }
}
