//! Todo Sync Frontend App
//!
//! Builds the view store and the sync controller, then lays out the page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::HttpTodoApi;
use crate::components::{NewTodoForm, StatusBar, TodoList};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::identity::browser_client_id;
use crate::storage::BrowserStorage;
use crate::store::{ViewState, ViewSurface};
use crate::sync::SyncController;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(ViewState::new());
    provide_context(store);

    let max_len = config.max_text_len;
    let surface = ViewSurface::new(store, config.success_banner_ms);
    let controller = SyncController::new(
        config,
        HttpTodoApi,
        surface,
        &BrowserStorage,
        browser_client_id,
    );
    let ctx = AppContext::new(controller);
    provide_context(ctx);

    // Probe endpoints and load on mount
    Effect::new(move |_| ctx.start());

    view! {
        <div class="container">
            <StatusBar />
            <h1>"📝 Todo List"</h1>
            <NewTodoForm max_len=max_len />
            <TodoList />
        </div>
    }
}
