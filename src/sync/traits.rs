//! Sync Layer - Collaborator Traits
//!
//! Everything the controller talks to is injected through these, so the
//! browser implementations can be swapped for fakes in tests.

use async_trait::async_trait;

use crate::models::Item;
use crate::render::{Banner, ItemRow, Panel};
use crate::sync::ApiError;

/// Remote item store
///
/// Calls run on the browser's single thread, so futures are not `Send`.
#[async_trait(?Send)]
pub trait TodoApi {
    /// Read probe used to pick a reachable endpoint
    async fn probe(&self, base: &str) -> Result<(), ApiError>;

    /// List items, scoped to `client_id` when given
    async fn list_items(&self, base: &str, client_id: Option<&str>) -> Result<Vec<Item>, ApiError>;

    /// Create an item for `client_id`
    async fn create_item(&self, base: &str, client_id: &str, text: &str) -> Result<(), ApiError>;
}

/// Durable key-value storage (localStorage in the browser)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
}

/// Presentation surface the controller renders into
pub trait Surface {
    fn set_connectivity(&self, banner: &Banner);
    fn set_identity(&self, display: &str);
    fn set_char_count(&self, count: usize);
    /// Show exactly one of the loading/empty/error/list panels
    fn show_panel(&self, panel: Panel);
    fn render_list(&self, rows: Vec<ItemRow>, count_label: String);
    /// Transient banner; the surface removes it on its own
    fn show_success(&self, message: &str);
    fn set_submit_busy(&self, busy: bool);
    fn clear_input(&self);
    fn set_input_error(&self, message: Option<&str>);
}
