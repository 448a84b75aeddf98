//! New Todo Form Component
//!
//! Text input with live character counter, busy-aware submit button,
//! inline validation message and transient success banners.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{store_set_input, use_view_store, ViewStateStoreFields};

#[component]
pub fn NewTodoForm(max_len: usize) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_view_store();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.add_item(store.input().get_untracked());
    };

    view! {
        <form class="todo-form" on:submit=on_submit>
            <For
                each=move || store.notices().get()
                key=|notice| notice.id
                children=move |notice| {
                    view! { <div class="message success">"✅ " {notice.message}</div> }
                }
            />

            <div class="input-row">
                <input
                    type="text"
                    class="todo-input"
                    placeholder="What needs to be done?"
                    prop:value=move || store.input().get()
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        ctx.update_char_count(&text);
                        store_set_input(&store, text);
                    }
                />
                <button
                    type="submit"
                    class="add-btn"
                    disabled=move || store.submit_busy().get()
                >
                    <span class="btn-text" style:display=move || if store.submit_busy().get() { "none" } else { "inline-block" }>
                        "Add"
                    </span>
                    <span class="btn-spinner" style:display=move || if store.submit_busy().get() { "inline-block" } else { "none" }></span>
                </button>
            </div>

            <div class="form-meta">
                <span class="char-count">
                    {move || store.char_count().get()} "/" {max_len}
                </span>
                {move || store.input_error().get().map(|message| view! {
                    <span class="message error">{message}</span>
                })}
            </div>
        </form>
    }
}
