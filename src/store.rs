//! View State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is the
//! browser implementation of the controller's `Surface`: the controller
//! writes snapshots into it and components read them.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::render::{Banner, ItemRow, Panel};
use crate::sync::Surface;

/// Success banner waiting for its timeout
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub message: String,
}

/// Everything the page displays, with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ViewState {
    /// Connectivity banner
    pub banner: Banner,
    /// Shortened client identity
    pub identity: String,
    /// Current input text
    pub input: String,
    pub char_count: usize,
    /// Inline validation message under the form
    pub input_error: Option<String>,
    pub submit_busy: bool,
    pub notices: Vec<Notice>,
    pub next_notice_id: u32,
    pub panel: Panel,
    pub rows: Vec<ItemRow>,
    pub count_label: String,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            count_label: "0 todos".to_string(),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type ViewStore = Store<ViewState>;

/// Get the view store from context
pub fn use_view_store() -> ViewStore {
    expect_context::<ViewStore>()
}

/// `Surface` backed by the view store
#[derive(Clone, Copy)]
pub struct ViewSurface {
    store: ViewStore,
    notice_ms: u32,
}

impl ViewSurface {
    pub fn new(store: ViewStore, notice_ms: u32) -> Self {
        Self { store, notice_ms }
    }
}

impl Surface for ViewSurface {
    fn set_connectivity(&self, banner: &Banner) {
        *self.store.banner().write() = banner.clone();
    }

    fn set_identity(&self, display: &str) {
        *self.store.identity().write() = display.to_string();
    }

    fn set_char_count(&self, count: usize) {
        *self.store.char_count().write() = count;
    }

    fn show_panel(&self, panel: Panel) {
        *self.store.panel().write() = panel;
    }

    fn render_list(&self, rows: Vec<ItemRow>, count_label: String) {
        *self.store.rows().write() = rows;
        *self.store.count_label().write() = count_label;
    }

    fn show_success(&self, message: &str) {
        let store = self.store;
        let id = store_push_notice(&store, message);

        let delay = self.notice_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            store_remove_notice(&store, id);
        });
    }

    fn set_submit_busy(&self, busy: bool) {
        *self.store.submit_busy().write() = busy;
    }

    fn clear_input(&self) {
        store_clear_input(&self.store);
    }

    fn set_input_error(&self, message: Option<&str>) {
        *self.store.input_error().write() = message.map(str::to_string);
    }
}

// ========================
// Store Helper Functions
// ========================

/// Append a success notice, returning its id
pub fn store_push_notice(store: &ViewStore, message: &str) -> u32 {
    let counter = store.next_notice_id();
    let id = {
        let mut next = counter.write();
        *next = next.wrapping_add(1);
        *next
    };
    store.notices().write().push(Notice {
        id,
        message: message.to_string(),
    });
    id
}

pub fn store_remove_notice(store: &ViewStore, id: u32) {
    store.notices().write().retain(|n| n.id != id);
}

pub fn store_clear_input(store: &ViewStore) {
    store.input().write().clear();
}

pub fn store_set_input(store: &ViewStore, text: String) {
    *store.input().write() = text;
}
