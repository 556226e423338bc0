//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="navbar">
            <div class="navbar-title">"doc parser"</div>
        </header>
    }
}
