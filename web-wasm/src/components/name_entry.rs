//! 候補者名入力・開始ボタン

use leptos::prelude::*;

#[component]
pub fn NameEntry<FS>(
    name: ReadSignal<String>,
    set_name: WriteSignal<String>,
    start_visible: Signal<bool>,
    on_start: FS,
) -> impl IntoView
where
    FS: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="form-group">
            <label for="name">"Your name"</label>
            <input
                type="text"
                id="name"
                placeholder="Candidate"
                prop:value=move || name.get()
                on:input=move |ev| {
                    set_name.set(event_target_value(&ev));
                }
            />
            <Show when=move || start_visible.get()>
                <button
                    id="start-btn"
                    class="btn btn-primary"
                    on:click={
                        let on_start = on_start.clone();
                        move |_| on_start(())
                    }
                >
                    "Start Interview"
                </button>
            </Show>
        </div>
    }
}
