//! `render(page, dashboard, filters) -> PageView`.
//!
//! Rendering is a pure read of the shared tables: it never changes the
//! dashboard, and each call produces exactly one page variant.

use crate::content::{
    self, Block, MAP_CAPTION, MAP_HEADER, MAP_VIEWPORT_HEIGHT, STATIONS_HEADER, WEATHER_HEADER,
};
use crate::dashboard::Dashboard;
use crate::filters::{filter_controls, FilterControl, FilterSelection, StationMetrics};
use crate::page::Page;
use cbd_chart::bar::{build_station_bar_chart, BarChartSpec};
use cbd_chart::dual_axis::{build_trips_temperature_chart, DualAxisChartSpec};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationsView {
    pub header: &'static str,
    pub filters: Vec<FilterControl>,
    pub metrics: StationMetrics,
    pub chart: BarChartSpec,
    pub insights: &'static [Block],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherView {
    pub header: &'static str,
    pub chart: DualAxisChartSpec,
    pub insights: &'static [Block],
}

/// The prebuilt map shown verbatim in a fixed-height scrolling viewport.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub header: &'static str,
    pub caption: &'static str,
    pub html: String,
    pub height: u32,
    pub scrolling: bool,
    pub insights: &'static [Block],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PageView {
    Intro { blocks: &'static [Block] },
    Stations(StationsView),
    Weather(WeatherView),
    Map(MapView),
    Recommendations { header: &'static str, blocks: &'static [Block] },
}

impl PageView {
    pub fn page(&self) -> Page {
        match self {
            PageView::Intro { .. } => Page::Intro,
            PageView::Stations(_) => Page::Stations,
            PageView::Weather(_) => Page::Weather,
            PageView::Map(_) => Page::Map,
            PageView::Recommendations { .. } => Page::Recommendations,
        }
    }

    /// Sidebar filter controls belonging to this view (empty off the stations page).
    pub fn filter_controls(&self) -> &[FilterControl] {
        match self {
            PageView::Stations(view) => &view.filters,
            _ => &[],
        }
    }
}

pub fn render(page: Page, dashboard: &Dashboard, filters: &FilterSelection) -> anyhow::Result<PageView> {
    log::debug!("[CBD] render: {}", page.slug());
    let view = match page {
        Page::Intro => PageView::Intro {
            blocks: content::INTRO,
        },
        Page::Stations => {
            let db = &dashboard.db;
            PageView::Stations(StationsView {
                header: STATIONS_HEADER,
                filters: filter_controls(db, filters)?,
                metrics: StationMetrics::compute(db, filters)?,
                chart: build_station_bar_chart(&db.query_top_stations()?),
                insights: content::STATIONS_INSIGHTS,
            })
        }
        Page::Weather => PageView::Weather(WeatherView {
            header: WEATHER_HEADER,
            chart: build_trips_temperature_chart(&dashboard.db.query_daily_series()?),
            insights: content::WEATHER_INSIGHTS,
        }),
        Page::Map => PageView::Map(MapView {
            header: MAP_HEADER,
            caption: MAP_CAPTION,
            html: dashboard.map.as_str().to_string(),
            height: MAP_VIEWPORT_HEIGHT,
            scrolling: true,
            insights: content::MAP_INSIGHTS,
        }),
        Page::Recommendations => PageView::Recommendations {
            header: content::RECOMMENDATIONS_HEADER,
            blocks: content::RECOMMENDATIONS,
        },
    };
    Ok(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cbd_data::loader::Datasets;
    use cbd_data::season::Season;

    const MAP_HTML: &str = "<html><head><script>kepler()</script></head><body></body></html>";

    fn sample_dashboard() -> Dashboard {
        let datasets = Datasets::from_sources(
            ",start_station_name,value\n0,W 21 St & 6 Ave,129016\n1,1 Ave & E 68 St,118000\n",
            b",ride_id\n0,A1\n",
            "date,bike_rides_daily,avgTemp,Season,month\n\
             2022-01-01,100,2.0,Winter,1\n\
             2022-07-01,500,28.0,Summer,7\n",
            MAP_HTML,
        )
        .unwrap();
        Dashboard::from_datasets(&datasets).unwrap()
    }

    #[test]
    fn test_each_page_renders_only_itself() {
        let dashboard = sample_dashboard();
        let filters = dashboard.default_filters().unwrap();
        for page in Page::ALL {
            let view = render(page, &dashboard, &filters).unwrap();
            assert_eq!(view.page(), page);
            if page == Page::Stations {
                assert_eq!(view.filter_controls().len(), 2);
            } else {
                assert!(view.filter_controls().is_empty(), "{} shows filters", page);
            }
        }
    }

    #[test]
    fn test_stations_view() {
        let dashboard = sample_dashboard();
        let filters = FilterSelection {
            seasons: vec![Season::Summer],
            months: vec![1, 7],
        };
        let view = render(Page::Stations, &dashboard, &filters).unwrap();
        let PageView::Stations(stations) = view else {
            panic!("expected stations view");
        };
        assert_eq!(stations.metrics.season_total, 500);
        assert_eq!(stations.metrics.season_text, "0,00M");
        assert_eq!(stations.chart.categories(), vec!["W 21 St & 6 Ave", "1 Ave & E 68 St"]);
    }

    #[test]
    fn test_weather_view_has_one_point_per_day() {
        let dashboard = sample_dashboard();
        let view = render(Page::Weather, &dashboard, &FilterSelection::default()).unwrap();
        let PageView::Weather(weather) = view else {
            panic!("expected weather view");
        };
        assert_eq!(weather.chart.trips().points.len(), 2);
        assert_eq!(weather.chart.right_axis.range, Some([0.0, 30.0]));
    }

    #[test]
    fn test_map_view_embeds_html_verbatim() {
        let dashboard = sample_dashboard();
        let view = render(Page::Map, &dashboard, &FilterSelection::default()).unwrap();
        let PageView::Map(map) = view else {
            panic!("expected map view");
        };
        assert_eq!(map.html, MAP_HTML);
        assert_eq!(map.height, 900);
        assert!(map.scrolling);
    }

    #[test]
    fn test_render_does_not_touch_tables() {
        let dashboard = sample_dashboard();
        let before = dashboard.db.query_table_counts().unwrap();
        let filters = FilterSelection::default();
        for page in Page::ALL {
            render(page, &dashboard, &filters).unwrap();
        }
        assert_eq!(dashboard.db.query_table_counts().unwrap(), before);
    }
}
