//! Sync Layer - State Machines
//!
//! Connectivity: `Unknown -> Probing -> Connected(endpoint) | Offline`.
//! List loading: `Idle -> Loading -> Populated | Empty | Error`; entering
//! `Loading` while already `Loading` is suppressed (single-flight).

use crate::render::Banner;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Connectivity {
    #[default]
    Unknown,
    Probing,
    Connected(String),
    Offline,
}

impl Connectivity {
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            Connectivity::Connected(endpoint) => Some(endpoint.as_str()),
            _ => None,
        }
    }

    pub fn banner(&self) -> Banner {
        let (text, class) = match self {
            Connectivity::Unknown => ("⏳ Checking backend...", "backend-status"),
            Connectivity::Probing => ("🔄 Connecting...", "backend-status"),
            Connectivity::Connected(_) => ("🔌 Connected", "backend-status"),
            Connectivity::Offline => ("❌ Backend offline", "backend-status error"),
        };
        Banner {
            text: text.to_string(),
            class: class.to_string(),
            endpoint: self.endpoint().map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListState {
    #[default]
    Idle,
    Loading,
    Populated,
    Empty,
    /// Retryable; carries the user-facing message
    Error(String),
}

impl ListState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ListState::Loading)
    }
}

