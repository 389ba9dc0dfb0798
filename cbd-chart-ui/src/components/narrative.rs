//! Narrative text panels.

use cbd_pages::content::{bold_runs, Block};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct NarrativeProps {
    pub blocks: &'static [Block],
}

/// Renders headings, paragraphs, bullets and centred images in order.
#[component]
pub fn Narrative(props: NarrativeProps) -> Element {
    rsx! {
        div {
            for block in props.blocks.iter() {
                NarrativeBlock { block: *block }
            }
        }
    }
}

#[component]
fn NarrativeBlock(block: Block) -> Element {
    match block {
        Block::Heading(level, text) => {
            let size = if level <= 4 { 20 } else { 17 };
            rsx! {
                p {
                    style: "font-size: {size}px; font-weight: bold; margin: 16px 0 8px 0;",
                    RichText { text }
                }
            }
        }
        Block::Paragraph(text) => rsx! {
            p {
                style: "margin: 8px 0; line-height: 1.5;",
                RichText { text }
            }
        },
        Block::Bullet(text) => rsx! {
            p {
                style: "margin: 4px 0;",
                "- "
                RichText { text }
            }
        },
        Block::Image { src, alt, width } => rsx! {
            div {
                style: "display: flex; justify-content: center; margin: 16px 0;",
                img {
                    src: "{src}",
                    alt: "{alt}",
                    style: "max-width: {width}px; width: 100%;",
                }
            }
        },
    }
}

/// Text with `**bold**` runs rendered as `<strong>`.
#[component]
fn RichText(text: &'static str) -> Element {
    rsx! {
        for (bold, run) in bold_runs(text) {
            if bold {
                strong { "{run}" }
            } else {
                span { "{run}" }
            }
        }
    }
}
