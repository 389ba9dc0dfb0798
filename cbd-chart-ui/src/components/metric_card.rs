//! Headline metric display.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct MetricCardProps {
    pub label: String,
    pub value: String,
}

/// Bold label above a large value, e.g. "Total Bike Trips per season" / "2,35M".
#[component]
pub fn MetricCard(props: MetricCardProps) -> Element {
    rsx! {
        div {
            style: "flex: 1; padding: 8px 0;",
            p {
                style: "margin: 0 0 4px 0; font-size: 14px; font-weight: bold;",
                "{props.label}"
            }
            p {
                style: "margin: 0; font-size: 32px;",
                "{props.value}"
            }
        }
    }
}
