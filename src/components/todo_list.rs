//! Todo List Component
//!
//! Shows exactly one of the loading, empty, error and list panels. Item text
//! arrives already escaped from the controller and is inserted as markup.
//! The error panel carries the recent log history for diagnosis.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::render::Panel;
use crate::store::{use_view_store, ViewStateStoreFields};

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_view_store();

    view! {
        <section class="todo-section">
            <div class="list-header">
                <span class="todo-count">{move || store.count_label().get()}</span>
                <button class="refresh-btn" on:click=move |_| ctx.reload()>"🔄 Refresh"</button>
            </div>

            {move || match store.panel().get() {
                Panel::Loading => view! {
                    <div class="loading-state">"Loading todos..."</div>
                }.into_any(),
                Panel::Empty => view! {
                    <div class="empty-state">"No todos yet. Add one above!"</div>
                }.into_any(),
                Panel::Error(message) => view! {
                    <div class="error-state">
                        <p>
                            {message} " "
                            <button class="retry-link" on:click=move |_| ctx.reload()>"Try again"</button>
                        </p>
                        <details class="log-details">
                            <summary>"Show log"</summary>
                            <pre class="log-lines">{rolling_logger::recent_lines().join("\n")}</pre>
                        </details>
                    </div>
                }.into_any(),
                Panel::List => view! {
                    <ul class="todo-list">
                        <For
                            each=move || store.rows().get()
                            key=|row| (row.id, row.timestamp.clone())
                            children=move |row| {
                                view! {
                                    <li class="todo-item">
                                        <div class="todo-content">
                                            <div class="todo-text" inner_html=row.text_html></div>
                                            <div class="todo-meta">
                                                <span class="todo-id">"#" {row.id}</span>
                                                <span>"•"</span>
                                                <span>{row.timestamp}</span>
                                            </div>
                                        </div>
                                    </li>
                                }
                            }
                        />
                    </ul>
                }.into_any(),
            }}
        </section>
    }
}
