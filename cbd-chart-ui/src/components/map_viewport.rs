//! Fixed-height viewport for the prebuilt map document.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct MapViewportProps {
    /// Complete HTML document, embedded verbatim
    pub html: String,
    /// Viewport height in pixels
    #[props(default = 900)]
    pub height: u32,
    #[props(default = true)]
    pub scrolling: bool,
}

/// Iframe whose `srcdoc` is the map document; the map's own scripts run
/// inside the frame.
#[component]
pub fn MapViewport(props: MapViewportProps) -> Element {
    let overflow = if props.scrolling { "auto" } else { "hidden" };
    let scrolling = if props.scrolling { "yes" } else { "no" };

    rsx! {
        div {
            style: "width: 100%; height: {props.height}px; overflow: {overflow}; border: 1px solid #e0e0e0;",
            iframe {
                title: "map",
                "srcdoc": "{props.html}",
                "scrolling": "{scrolling}",
                "sandbox": "allow-forms allow-modals allow-popups allow-same-origin allow-scripts allow-downloads",
                style: "width: 100%; height: {props.height}px; border: none;",
            }
        }
    }
}
