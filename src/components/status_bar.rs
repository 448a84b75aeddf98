//! Status Bar Component
//!
//! Connectivity banner, active endpoint and the shortened client identity.

use leptos::prelude::*;

use crate::store::{use_view_store, ViewStateStoreFields};

#[component]
pub fn StatusBar() -> impl IntoView {
    let store = use_view_store();

    view! {
        <header class="status-bar">
            <span class=move || store.banner().get().class>
                {move || store.banner().get().text}
            </span>
            <span class="api-url">
                {move || store.banner().get().endpoint.unwrap_or_default()}
            </span>
            <span class="user-info">{move || store.identity().get()}</span>
        </header>
    }
}
