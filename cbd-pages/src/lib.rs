//! Page router and page view models for the Citi Bike dashboard.
//!
//! A page render is `render(page, dashboard, filters) -> PageView`, called
//! fresh on every interaction. The loaded tables are shared read-only by
//! every page; the only per-interaction state is the selected page and the
//! two sidebar filters.

pub mod content;
pub mod dashboard;
pub mod filters;
pub mod page;
pub mod view;

pub use dashboard::Dashboard;
pub use filters::{FilterSelection, StationMetrics};
pub use page::Page;
pub use view::{render, PageView};
