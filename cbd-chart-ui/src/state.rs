//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! Any signal change re-renders the selected page from scratch.

use cbd_pages::{Dashboard, FilterSelection, Page};
use dioxus::prelude::*;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded tables and map (None until loaded)
    pub dashboard: Signal<Option<Dashboard>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Currently selected page
    pub page: Signal<Page>,
    /// Season and month selections of the stations page
    pub filters: Signal<FilterSelection>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            dashboard: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            page: Signal::new(Page::default()),
            filters: Signal::new(FilterSelection::default()),
        }
    }
}
