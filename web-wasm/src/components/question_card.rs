//! 設問カード
//!
//! カードごとに回答欄を持つため、新しい設問が来ると回答欄は空になる。

use interview_common::QuestionCard as Card;
use leptos::prelude::*;

#[component]
pub fn QuestionCard<FS>(card: Card, on_submit: FS) -> impl IntoView
where
    FS: Fn(String) + 'static + Clone + Send + Sync,
{
    let (answer, set_answer) = signal(String::new());

    view! {
        <div class="qa-card">
            <h3>{card.heading()}</h3>
            <p>{card.text.clone()}</p>
            <textarea
                id="answer"
                prop:value=move || answer.get()
                on:input=move |ev| {
                    set_answer.set(event_target_value(&ev));
                }
            />
            <button
                class="btn"
                on:click={
                    let on_submit = on_submit.clone();
                    move |_| on_submit(answer.get_untracked())
                }
            >
                "Submit Answer"
            </button>
        </div>
    }
}
