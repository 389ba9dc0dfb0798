//! Loading spinner component.

use dioxus::prelude::*;

/// Shown while the embedded tables are loaded into the in-memory database.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #666;",
            "Loading Citi Bike data..."
        }
    }
}
