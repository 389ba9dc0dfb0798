//! Section header above a chart or narrative block.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Section title
    pub title: String,
    /// Optional caption under the title (e.g., the map's caption)
    #[props(default = String::new())]
    pub caption: String,
}

/// Header for page sections showing the title and optional caption.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin: 16px 0 8px 0;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 20px;",
                "{props.title}"
            }
            if !props.caption.is_empty() {
                p {
                    style: "margin: 0; font-size: 14px; color: #666;",
                    "{props.caption}"
                }
            }
        }
    }
}
