//! Application Context
//!
//! Gives components a handle to the sync controller via the Leptos Context
//! API. The controller is `Rc`-based, so it lives in local (non-`Send`)
//! storage and is cloned out for each task.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::debug;

use crate::api::HttpTodoApi;
use crate::store::ViewSurface;
use crate::sync::SyncController;

pub type AppController = SyncController<HttpTodoApi, ViewSurface>;

#[derive(Clone, Copy)]
pub struct AppContext {
    controller: StoredValue<AppController, LocalStorage>,
}

impl AppContext {
    pub fn new(controller: AppController) -> Self {
        Self {
            controller: StoredValue::new_local(controller),
        }
    }

    pub fn controller(&self) -> AppController {
        self.controller.get_value()
    }

    /// Probe and populate the page
    pub fn start(&self) {
        let controller = self.controller();
        spawn_local(async move { controller.start().await });
    }

    /// Manual refresh / retry
    pub fn reload(&self) {
        let controller = self.controller();
        spawn_local(async move { controller.load_items().await });
    }

    /// Submit the form's text
    pub fn add_item(&self, text: String) {
        let controller = self.controller();
        spawn_local(async move {
            if let Err(e) = controller.add_item(&text).await {
                debug!("Add rejected: {}", e);
            }
        });
    }

    pub fn update_char_count(&self, text: &str) {
        self.controller().update_char_count(text);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
