//! Reusable Dioxus RSX components for the Citi Bike dashboard.

mod chart_container;
mod chart_header;
mod error_display;
mod loading_spinner;
mod map_viewport;
mod metric_card;
mod multi_select_filter;
mod narrative;
mod page_selector;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use map_viewport::MapViewport;
pub use metric_card::MetricCard;
pub use multi_select_filter::MultiSelectFilter;
pub use narrative::Narrative;
pub use page_selector::PageSelector;
