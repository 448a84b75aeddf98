//! Sync Layer - Controller
//!
//! `SyncController` owns the cached item list, the client identity and the
//! session's endpoint selection. It is a cheap `Rc` handle: clone it into
//! event handlers and `spawn_local` tasks. No `RefCell` borrow is ever held
//! across an `.await`.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::Utc;
use log::{debug, error, info, warn};

use crate::config::AppConfig;
use crate::identity::{resolve_identity, ClientIdentity};
use crate::models::Item;
use crate::render::{count_label, item_rows, short_identity, Panel};
use crate::sync::{
    ApiError, Connectivity, KeyValueStore, ListState, Surface, SyncError, TodoApi,
    ValidationError,
};

pub const OFFLINE_MESSAGE: &str = "Unable to connect to any backend server";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load todos. Please try again.";
pub const ADD_FAILED_MESSAGE: &str = "Failed to add todo";
pub const ADDED_MESSAGE: &str = "Todo added successfully!";

/// Trim and length-check user input
pub fn validate_text(raw: &str, max_len: usize) -> Result<String, ValidationError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(ValidationError::Empty);
    }
    let len = text.chars().count();
    if len > max_len {
        return Err(ValidationError::TooLong { len, max: max_len });
    }
    Ok(text.to_string())
}

#[derive(Default)]
struct SessionState {
    items: Vec<Item>,
    connectivity: Connectivity,
    list: ListState,
}

struct Inner<A, P> {
    config: AppConfig,
    identity: ClientIdentity,
    api: A,
    surface: P,
    state: RefCell<SessionState>,
}

pub struct SyncController<A, P> {
    inner: Rc<Inner<A, P>>,
}

impl<A, P> Clone for SyncController<A, P> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<A: TodoApi, P: Surface> SyncController<A, P> {
    /// Build a controller, resolving the client identity from `storage`.
    pub fn new<S, F>(config: AppConfig, api: A, surface: P, storage: &S, generate_id: F) -> Self
    where
        S: KeyValueStore + ?Sized,
        F: FnOnce() -> String,
    {
        let identity = resolve_identity(storage, &config.storage_key, generate_id);
        Self {
            inner: Rc::new(Inner {
                config,
                identity,
                api,
                surface,
                state: RefCell::new(SessionState::default()),
            }),
        }
    }

    // ========================
    // Accessors
    // ========================

    pub fn identity(&self) -> &ClientIdentity {
        &self.inner.identity
    }

    pub fn items(&self) -> Vec<Item> {
        self.inner.state.borrow().items.clone()
    }

    pub fn list_state(&self) -> ListState {
        self.inner.state.borrow().list.clone()
    }

    pub fn connectivity(&self) -> Connectivity {
        self.inner.state.borrow().connectivity.clone()
    }

    pub fn active_endpoint(&self) -> Option<String> {
        self.inner.state.borrow().connectivity.endpoint().map(str::to_string)
    }

    // ========================
    // Operations
    // ========================

    /// Initial page population: identity, empty view, probe, first load.
    pub async fn start(&self) {
        let surface = &self.inner.surface;
        surface.set_identity(&short_identity(self.inner.identity.as_str()));
        surface.set_char_count(0);
        surface.set_connectivity(&self.connectivity().banner());
        self.render();

        if let Connectivity::Connected(_) = self.probe_endpoints().await {
            self.load_items().await;
        }
    }

    /// Try candidates in priority order, keeping the first that answers.
    pub async fn probe_endpoints(&self) -> Connectivity {
        let status = self.probe().await;
        if status == Connectivity::Offline {
            self.fail(OFFLINE_MESSAGE);
        }
        status
    }

    /// Reload the list. Dropped if a load is already in flight.
    pub async fn load_items(&self) {
        if !self.begin_loading() {
            debug!("Load already in flight, dropping request");
            return;
        }
        let _loading = LoadingGuard { controller: self };
        self.inner.surface.show_panel(Panel::Loading);

        let endpoint = match self.active_endpoint() {
            Some(endpoint) => endpoint,
            None => match self.probe().await {
                Connectivity::Connected(endpoint) => endpoint,
                _ => {
                    self.finish_loading(ListState::Error(OFFLINE_MESSAGE.to_string()));
                    return;
                }
            },
        };

        match self
            .fetch_with_fallback(&endpoint, self.inner.identity.as_str())
            .await
        {
            Ok(items) => {
                debug!("Loaded {} todos from {}", items.len(), endpoint);
                self.replace_items(items);
                self.reaffirm(&endpoint);
            }
            Err(e) => {
                error!("Failed to load todos: {}", e);
                self.finish_loading(ListState::Error(LOAD_FAILED_MESSAGE.to_string()));
            }
        }
    }

    /// Validate and submit a new item, then reload the list.
    pub async fn add_item(&self, raw_text: &str) -> Result<(), SyncError> {
        let surface = &self.inner.surface;
        let text = match validate_text(raw_text, self.inner.config.max_text_len) {
            Ok(text) => text,
            Err(e) => {
                surface.set_input_error(Some(&e.to_string()));
                return Err(e.into());
            }
        };
        surface.set_input_error(None);

        let Some(endpoint) = self.submit_endpoint() else {
            self.fail(OFFLINE_MESSAGE);
            return Err(SyncError::Offline);
        };

        let busy = BusyGuard::new(surface);
        let result = self
            .inner
            .api
            .create_item(&endpoint, self.inner.identity.as_str(), &text)
            .await;
        drop(busy);

        match result {
            Ok(()) => {
                info!("Added todo ({} chars) via {}", text.chars().count(), endpoint);
                surface.clear_input();
                surface.set_char_count(0);
                surface.show_success(ADDED_MESSAGE);
                self.load_items().await;
                Ok(())
            }
            Err(e) => {
                error!("Failed to add todo: {}", e);
                let message = e.server_message().unwrap_or(ADD_FAILED_MESSAGE).to_string();
                self.fail(&message);
                Err(e.into())
            }
        }
    }

    /// Project the cached list and list state onto the surface.
    pub fn render(&self) {
        let (rows, label, panel) = {
            let state = self.inner.state.borrow();
            let panel = match &state.list {
                ListState::Loading => Panel::Loading,
                ListState::Error(message) => Panel::Error(message.clone()),
                ListState::Idle | ListState::Populated | ListState::Empty => {
                    if state.items.is_empty() {
                        Panel::Empty
                    } else {
                        Panel::List
                    }
                }
            };
            (
                item_rows(&state.items, Utc::now()),
                count_label(state.items.len()),
                panel,
            )
        };
        self.inner.surface.render_list(rows, label);
        self.inner.surface.show_panel(panel);
    }

    pub fn update_char_count(&self, raw_text: &str) {
        self.inner.surface.set_char_count(raw_text.chars().count());
    }

    // ========================
    // Internals
    // ========================

    async fn probe(&self) -> Connectivity {
        self.set_connectivity(Connectivity::Probing);
        for endpoint in &self.inner.config.endpoints {
            match self.inner.api.probe(endpoint).await {
                Ok(()) => {
                    info!("Connected to {}", endpoint);
                    let status = Connectivity::Connected(endpoint.clone());
                    self.set_connectivity(status.clone());
                    return status;
                }
                Err(e) => warn!("Failed to connect to {}: {}", endpoint, e),
            }
        }
        error!("No backend reachable ({} candidates)", self.inner.config.endpoints.len());
        self.set_connectivity(Connectivity::Offline);
        Connectivity::Offline
    }

    /// Client-scoped read, then at most one unscoped read.
    async fn fetch_with_fallback(
        &self,
        endpoint: &str,
        client_id: &str,
    ) -> Result<Vec<Item>, ApiError> {
        match self.inner.api.list_items(endpoint, Some(client_id)).await {
            Ok(items) => Ok(items),
            Err(e) => {
                warn!("Scoped load failed ({}), trying unscoped list", e);
                self.inner.api.list_items(endpoint, None).await
            }
        }
    }

    fn begin_loading(&self) -> bool {
        let mut state = self.inner.state.borrow_mut();
        if state.list.is_loading() {
            return false;
        }
        state.list = ListState::Loading;
        true
    }

    fn finish_loading(&self, next: ListState) {
        self.inner.state.borrow_mut().list = next;
        self.render();
    }

    fn replace_items(&self, items: Vec<Item>) {
        {
            let mut state = self.inner.state.borrow_mut();
            state.list = if items.is_empty() {
                ListState::Empty
            } else {
                ListState::Populated
            };
            state.items = items;
        }
        self.render();
    }

    fn reaffirm(&self, endpoint: &str) {
        if self.inner.state.borrow().connectivity.endpoint() == Some(endpoint) {
            return;
        }
        self.set_connectivity(Connectivity::Connected(endpoint.to_string()));
    }

    fn set_connectivity(&self, status: Connectivity) {
        let banner = status.banner();
        self.inner.state.borrow_mut().connectivity = status;
        self.inner.surface.set_connectivity(&banner);
    }

    fn submit_endpoint(&self) -> Option<String> {
        self.active_endpoint()
            .or_else(|| self.inner.config.endpoints.first().cloned())
    }

    /// Surface an error. An in-flight load keeps its state and will
    /// re-render when it completes.
    fn fail(&self, message: &str) {
        let loading = {
            let mut state = self.inner.state.borrow_mut();
            if state.list.is_loading() {
                true
            } else {
                state.list = ListState::Error(message.to_string());
                false
            }
        };
        if loading {
            self.inner.surface.show_panel(Panel::Error(message.to_string()));
        } else {
            self.render();
        }
    }
}

/// Leaves `Loading` on every exit path, including a dropped future.
struct LoadingGuard<'a, A: TodoApi, P: Surface> {
    controller: &'a SyncController<A, P>,
}

impl<A: TodoApi, P: Surface> Drop for LoadingGuard<'_, A, P> {
    fn drop(&mut self) {
        let reset = {
            let mut state = self.controller.inner.state.borrow_mut();
            if state.list.is_loading() {
                state.list = ListState::Idle;
                true
            } else {
                false
            }
        };
        if reset {
            self.controller.render();
        }
    }
}

/// Holds the submit control busy until dropped.
struct BusyGuard<'a, P: Surface> {
    surface: &'a P,
}

impl<'a, P: Surface> BusyGuard<'a, P> {
    fn new(surface: &'a P) -> Self {
        surface.set_submit_busy(true);
        Self { surface }
    }
}

impl<P: Surface> Drop for BusyGuard<'_, P> {
    fn drop(&mut self) {
        self.surface.set_submit_busy(false);
    }
}
