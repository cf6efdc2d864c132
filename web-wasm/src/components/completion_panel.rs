//! 完了パネル（お礼とレポートダウンロード）

use interview_common::CompletionPanel as Panel;
use leptos::prelude::*;

/// ダウンロードは何度でも押せる（毎回サービスから取得し直す）
#[component]
pub fn CompletionPanel<FD>(panel: Panel, on_download: FD) -> impl IntoView
where
    FD: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <p class="thank-you">{panel.message.clone()}</p>
        <button
            class="btn"
            on:click={
                let on_download = on_download.clone();
                move |_| on_download(())
            }
        >
            {panel.download_label.clone()}
        </button>
    }
}
