//! Sync Layer
//!
//! The controller mediating between the remote item store and the
//! presentation surface:
//! - traits: injected collaborators (storage, item store, surface)
//! - state: connectivity and list-loading state machines
//! - error: typed failures
//! - controller: `SyncController` itself

mod controller;
mod error;
mod state;
mod traits;

pub use controller::*;
pub use error::*;
pub use state::*;
pub use traits::*;
