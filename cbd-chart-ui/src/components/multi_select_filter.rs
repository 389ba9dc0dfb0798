//! Checkbox multi-select for one sidebar filter.

use crate::state::AppState;
use cbd_data::season::Season;
use cbd_pages::filters::{FilterControl, FilterKind};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct MultiSelectFilterProps {
    pub control: FilterControl,
}

/// One checkbox per option; toggling updates the matching selection in AppState.
#[component]
pub fn MultiSelectFilter(props: MultiSelectFilterProps) -> Element {
    let state = use_context::<AppState>();
    let kind = props.control.kind;

    rsx! {
        fieldset {
            style: "margin: 8px 0; border: none; padding: 0;",
            legend {
                style: "font-weight: bold; margin-bottom: 4px;",
                "{props.control.label}"
            }
            for option in props.control.options.iter().cloned() {
                label {
                    key: "{option.value}",
                    style: "display: block; font-size: 14px;",
                    input {
                        r#type: "checkbox",
                        checked: option.selected,
                        onchange: {
                            let value = option.value.clone();
                            let mut filters = state.filters;
                            move |_| match kind {
                                FilterKind::Season => {
                                    if let Ok(season) = value.parse::<Season>() {
                                        filters.write().toggle_season(season);
                                    }
                                }
                                FilterKind::Month => {
                                    if let Ok(month) = value.parse::<u32>() {
                                        filters.write().toggle_month(month);
                                    }
                                }
                            }
                        },
                    }
                    " {option.label}"
                }
            }
        }
    }
}
