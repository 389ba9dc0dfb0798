//! New York Citi Bike Strategy Dashboard
//!
//! Five pages selected from the sidebar: intro, most popular stations (with
//! season/month filters and trip-total metrics), weather vs. bike usage,
//! the prebuilt interactive map, and recommendations.
//!
//! Data flow:
//! 1. `build.rs` copies the four inputs into OUT_DIR.
//! 2. `include_str!`/`include_bytes!` embed them into the WASM binary.
//! 3. On mount: parse every input and load the in-memory SQLite store once.
//! 4. On page or filter change: re-render the selected page from the store
//!    and redraw its chart via D3.js.

use cbd_chart::bar::BAR_CHART_HEIGHT;
use cbd_chart::dual_axis::LINE_CHART_HEIGHT;
use cbd_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, LoadingSpinner, MapViewport, MetricCard,
    MultiSelectFilter, Narrative, PageSelector,
};
use cbd_chart_ui::js_bridge;
use cbd_chart_ui::state::AppState;
use cbd_data::config::DatasetPaths;
use cbd_data::loader::Datasets;
use cbd_pages::content::{MONTH_METRIC_LABEL, SEASON_METRIC_LABEL};
use cbd_pages::page::{DASHBOARD_TITLE, SIDEBAR_TITLE};
use cbd_pages::{render, Dashboard, FilterSelection, PageView};
use dioxus::prelude::*;
use std::path::PathBuf;

const TOP_STATIONS_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/top_stations.csv"));
// Plain or gzip-compressed; the loader sniffs the magic bytes.
const REDUCED_TRIPS: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/reduced_trips.bin"));
const DAILY_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/daily_trips_temp.csv"));
const MAP_HTML: &str = include_str!(concat!(env!("OUT_DIR"), "/map.html"));

/// DOM ids for the D3 chart container divs.
const BAR_CHART_ID: &str = "top-stations-chart";
const DUAL_AXIS_CHART_ID: &str = "trips-temperature-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("citibike-dashboard-root"))
        .launch(App);
}

/// Files the embedded inputs were copied from.
fn embedded_origin() -> DatasetPaths {
    DatasetPaths {
        top_stations: PathBuf::from(env!("CBD_TOP_STATIONS_SOURCE")),
        reduced_trips: PathBuf::from(env!("CBD_REDUCED_TRIPS_SOURCE")),
        daily: PathBuf::from(env!("CBD_DAILY_SOURCE")),
        map_html: PathBuf::from(env!("CBD_MAP_SOURCE")),
    }
}

/// Parse the embedded inputs and build the store plus the initial filters.
fn load_dashboard() -> anyhow::Result<(Dashboard, FilterSelection)> {
    let datasets = Datasets::from_sources_at(
        &embedded_origin(),
        TOP_STATIONS_CSV,
        REDUCED_TRIPS,
        DAILY_CSV,
        MAP_HTML,
    )?;
    let dashboard = Dashboard::from_datasets(&datasets)?;
    let filters = dashboard.default_filters()?;
    Ok((dashboard, filters))
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: Load every input once on mount ───
    use_effect(move || {
        match load_dashboard() {
            Ok((dashboard, filters)) => {
                log::info!("[CBD] dashboard: datasets loaded");
                state.filters.set(filters);
                state.dashboard.set(Some(dashboard));
            }
            Err(e) => {
                log::error!("[CBD] dashboard: {:#}", e);
                state.error_msg.set(Some(format!("{:#}", e)));
            }
        }
        state.loading.set(false);

        // Initialize D3 chart scripts (one-time)
        js_bridge::init_charts();
    });

    // Re-runs whenever the dashboard, page or filters change.
    let view = use_memo(move || {
        let page = (state.page)();
        let filters = (state.filters)();
        let dashboard = state.dashboard.read().clone()?;
        Some(render(page, &dashboard, &filters).map_err(|e| format!("{:#}", e)))
    });

    // ─── Effect 2: Draw the chart of the rendered page ───
    use_effect(move || match view() {
        Some(Ok(PageView::Stations(stations))) => {
            js_bridge::destroy_chart(BAR_CHART_ID);
            js_bridge::render_bar_chart(BAR_CHART_ID, &stations.chart);
        }
        Some(Ok(PageView::Weather(weather))) => {
            js_bridge::destroy_chart(DUAL_AXIS_CHART_ID);
            js_bridge::render_dual_axis_chart(DUAL_AXIS_CHART_ID, &weather.chart);
        }
        _ => {}
    });

    let current = view();
    let controls = match &current {
        Some(Ok(v)) => v.filter_controls().to_vec(),
        _ => Vec::new(),
    };

    // ─── Render ───
    rsx! {
        div {
            style: "display: flex; min-height: 100vh; font-family: system-ui, -apple-system, sans-serif;",

            div {
                style: "width: 260px; flex-shrink: 0; padding: 16px; background: #f0f2f6;",
                h2 {
                    style: "margin: 0 0 12px 0; font-size: 22px;",
                    "{SIDEBAR_TITLE}"
                }
                PageSelector {}
                for control in controls {
                    MultiSelectFilter { key: "{control.label}", control }
                }
            }

            div {
                style: "flex: 1; max-width: 1000px; margin: 0 auto; padding: 16px 24px;",
                h1 {
                    style: "margin: 0 0 16px 0; font-size: 32px;",
                    "{DASHBOARD_TITLE}"
                }

                if let Some(err) = state.error_msg.read().as_ref() {
                    ErrorDisplay { message: err.clone() }
                }

                if *state.loading.read() {
                    LoadingSpinner {}
                } else {
                    {match current {
                        Some(Ok(page_view)) => rsx! { PageBody { view: page_view } },
                        Some(Err(message)) => rsx! { ErrorDisplay { message } },
                        None => rsx! {},
                    }}
                }
            }
        }
    }
}

/// Body of the selected page. Exactly one variant is shown at a time.
#[component]
fn PageBody(view: PageView) -> Element {
    match view {
        PageView::Intro { blocks } => rsx! {
            Narrative { blocks }
        },
        PageView::Stations(stations) => rsx! {
            ChartHeader { title: stations.header.to_string() }
            div {
                style: "display: flex; gap: 16px; max-width: 66%;",
                MetricCard {
                    label: SEASON_METRIC_LABEL.to_string(),
                    value: stations.metrics.season_text.clone(),
                }
                MetricCard {
                    label: MONTH_METRIC_LABEL.to_string(),
                    value: stations.metrics.month_text.clone(),
                }
            }
            ChartContainer {
                id: BAR_CHART_ID.to_string(),
                min_height: BAR_CHART_HEIGHT,
            }
            Narrative { blocks: stations.insights }
        },
        PageView::Weather(weather) => rsx! {
            ChartHeader { title: weather.header.to_string() }
            ChartContainer {
                id: DUAL_AXIS_CHART_ID.to_string(),
                min_height: LINE_CHART_HEIGHT,
            }
            Narrative { blocks: weather.insights }
        },
        PageView::Map(map) => rsx! {
            ChartHeader {
                title: map.header.to_string(),
                caption: map.caption.to_string(),
            }
            MapViewport {
                html: map.html.clone(),
                height: map.height,
                scrolling: map.scrolling,
            }
            Narrative { blocks: map.insights }
        },
        PageView::Recommendations { header, blocks } => rsx! {
            ChartHeader { title: header.to_string() }
            Narrative { blocks }
        },
    }
}
