//! メインアプリケーションコンポーネント
//!
//! 画面状態は `InterviewController` が持ち、ここではシグナルに載せて描画するだけ。
//! 通信の失敗はコンソールへ出し、画面はそのまま残す。

use leptos::prelude::*;
use leptos::task::spawn_local;
use interview_common::{
    AnswerRequest, Error, InterviewController, InterviewTransport, ReportRequest, Result,
    StartRequest, REPORT_FILE_NAME,
};
use crate::api::interview::{fresh_session_id, js_error, FetchTransport};
use crate::components::{
    completion_panel::CompletionPanel,
    header::Header,
    name_entry::NameEntry,
    progress_bar::ProgressBar,
    question_card::QuestionCard,
};
use crate::export::download::trigger_download;

const REPORT_MIME_TYPE: &str = "application/pdf";

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let controller = RwSignal::new(InterviewController::new());
    let transport = FetchTransport::same_origin();
    let (name, set_name) = signal(String::new());

    let view_state = Memo::new(move |_| controller.with(|c| c.view().clone()));
    // 設問が変わったときだけカードを作り直す（回答欄を保持するため）
    let question = Memo::new(move |_| view_state.with(|v| v.question.clone()));
    let completion = Memo::new(move |_| view_state.with(|v| v.completion.clone()));

    // 開始ハンドラ
    let on_start = {
        let transport = transport.clone();
        move |_: ()| {
            let candidate = name.get_untracked();
            let Some(begun) =
                controller.try_update(|c| c.begin_start(&candidate, fresh_session_id()))
            else {
                return;
            };
            match begun {
                Ok(request) => {
                    let transport = transport.clone();
                    spawn_local(async move {
                        if let Err(err) = start(&transport, controller, request).await {
                            report_failure("start interview", &err);
                        }
                    });
                }
                Err(err) => report_failure("start interview", &err),
            }
        }
    };

    // 回答送信ハンドラ
    let on_submit = {
        let transport = transport.clone();
        move |answer: String| match controller.with_untracked(|c| c.begin_answer(&answer)) {
            Ok(request) => {
                let transport = transport.clone();
                spawn_local(async move {
                    if let Err(err) = submit(&transport, controller, request).await {
                        report_failure("submit answer", &err);
                    }
                });
            }
            Err(err) => report_failure("submit answer", &err),
        }
    };

    // レポートダウンロードハンドラ（押すたびに取得し直す）
    let on_download = move |_: ()| match controller.with_untracked(|c| c.report_request()) {
        Ok(request) => {
            let transport = transport.clone();
            spawn_local(async move {
                if let Err(err) = download(&transport, request).await {
                    report_failure("download report", &err);
                }
            });
        }
        Err(err) => report_failure("download report", &err),
    };

    view! {
        <div class="container">
            <Header />

            <NameEntry
                name=name
                set_name=set_name
                start_visible=Signal::derive(move || view_state.with(|v| v.start_visible))
                on_start=on_start
            />

            <Show when=move || view_state.with(|v| v.intro.is_some())>
                <p id="intro">{move || view_state.with(|v| v.intro.clone().unwrap_or_default())}</p>
            </Show>

            <Show when=move || view_state.with(|v| v.progress_visible)>
                <ProgressBar width=Signal::derive(move || view_state.with(|v| v.progress_width())) />
            </Show>

            <div id="qa-area">
                {move || {
                    if let Some(panel) = completion.get() {
                        view! { <CompletionPanel panel=panel on_download=on_download.clone() /> }
                            .into_any()
                    } else if let Some(card) = question.get() {
                        view! { <QuestionCard card=card on_submit=on_submit.clone() /> }.into_any()
                    } else {
                        ().into_any()
                    }
                }}
            </div>
        </div>
    }
}

async fn start(
    transport: &FetchTransport,
    controller: RwSignal<InterviewController>,
    request: StartRequest,
) -> Result<()> {
    let reply = transport.start_interview(&request).await?;
    controller.update(|c| {
        c.apply_start(reply);
    });
    Ok(())
}

async fn submit(
    transport: &FetchTransport,
    controller: RwSignal<InterviewController>,
    request: AnswerRequest,
) -> Result<()> {
    let reply = transport.answer(&request).await?;
    controller
        .try_update(|c| c.apply_answer(reply).map(|_| ()))
        .unwrap_or(Ok(()))
}

async fn download(transport: &FetchTransport, request: ReportRequest) -> Result<()> {
    let bytes = transport.download_report(&request).await?;
    trigger_download(&bytes, REPORT_FILE_NAME, REPORT_MIME_TYPE).map_err(js_error)
}

fn report_failure(action: &str, err: &Error) {
    gloo::console::error!(format!("Failed to {}: {}", action, err));
}
