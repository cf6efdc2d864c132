//! プログレスバーコンポーネント

use leptos::prelude::*;

/// `width` はCSSの値そのもの（"33%"、"NaN%" など）
#[component]
pub fn ProgressBar(width: Signal<String>) -> impl IntoView {
    view! {
        <div id="progress" class="progress-container">
            <div class="progress-bar">
                <div
                    id="progress-fill"
                    class="progress-fill"
                    style=move || format!("width: {}", width.get())
                />
            </div>
        </div>
    }
}
