//! Sidebar dropdown for choosing the dashboard page.

use crate::state::AppState;
use cbd_pages::page::PAGE_SELECTOR_LABEL;
use cbd_pages::Page;
use dioxus::prelude::*;

/// Page dropdown selector.
/// Lists the five pages in fixed order and updates `page` on change.
/// Switching to a different page resets the filters to every option.
#[component]
pub fn PageSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.page)();

    let on_change = move |evt: Event<FormData>| {
        let Some(page) = Page::from_label(&evt.value()) else {
            return;
        };
        let previous = (state.page)();
        let reset = state.dashboard.read().as_ref().map(|dashboard| {
            state.filters.read().for_page_change(&dashboard.db, previous, page)
        });
        match reset {
            Some(Ok(filters)) => state.filters.set(filters),
            Some(Err(e)) => log::error!("[CBD] page_selector: failed to reset filters: {:#}", e),
            None => {}
        }
        state.page.set(page);
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "page-select",
                style: "display: block; font-weight: bold; margin-bottom: 4px;",
                "{PAGE_SELECTOR_LABEL}"
            }
            select {
                id: "page-select",
                style: "width: 100%;",
                onchange: on_change,
                for page in Page::ALL {
                    option {
                        value: "{page.label()}",
                        selected: page == selected,
                        "{page.label()}"
                    }
                }
            }
        }
    }
}
