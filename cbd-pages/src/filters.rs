//! Sidebar filters of the stations page and the two headline metrics.
//!
//! The season and month filters are applied one after the other, each
//! starting again from the full daily table and each replacing the working
//! view. The season metric therefore reflects only the season selection and
//! the month metric only the month selection; the view left behind is the
//! month-filtered one. The filters are never intersected.

use crate::content::{MONTH_FILTER_LABEL, SEASON_FILTER_LABEL};
use crate::page::Page;
use cbd_data::daily_aggregate::DailyAggregateRow;
use cbd_data::season::Season;
use cbd_db::Database;
use cbd_utils::dates::month_abbrev;
use cbd_utils::metrics::format_millions;
use serde::Serialize;

/// Current selection of both multi-select filters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FilterSelection {
    pub seasons: Vec<Season>,
    pub months: Vec<u32>,
}

impl FilterSelection {
    /// Every available option selected, which is the initial state.
    pub fn all(db: &Database) -> anyhow::Result<FilterSelection> {
        Ok(FilterSelection {
            seasons: db.query_season_options()?,
            months: db.query_month_options()?,
        })
    }

    /// Selection in effect after navigating from `from` to `to`.
    ///
    /// The filter widgets exist only while the stations page is shown, so
    /// any actual page change brings them back with every option selected.
    pub fn for_page_change(&self, db: &Database, from: Page, to: Page) -> anyhow::Result<FilterSelection> {
        if from == to {
            Ok(self.clone())
        } else {
            FilterSelection::all(db)
        }
    }

    /// Add the season if missing, remove it otherwise.
    pub fn toggle_season(&mut self, season: Season) {
        toggle(&mut self.seasons, season);
    }

    /// Add the month if missing, remove it otherwise.
    pub fn toggle_month(&mut self, month: u32) {
        toggle(&mut self.months, month);
    }
}

fn toggle<T: PartialEq>(values: &mut Vec<T>, value: T) {
    if let Some(pos) = values.iter().position(|v| *v == value) {
        values.remove(pos);
    } else {
        values.push(value);
    }
}

/// Headline metrics of the stations page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationMetrics {
    pub season_total: u64,
    pub month_total: u64,
    /// `season_total` in millions, e.g. `"2,35M"`.
    pub season_text: String,
    pub month_text: String,
}

impl StationMetrics {
    pub fn compute(db: &Database, selection: &FilterSelection) -> anyhow::Result<StationMetrics> {
        let season_total = db.query_total_trips_by_season(&selection.seasons)?;
        let month_total = db.query_total_trips_by_month(&selection.months)?;
        Ok(StationMetrics {
            season_total,
            month_total,
            season_text: format_millions(season_total as f64),
            month_text: format_millions(month_total as f64),
        })
    }
}

/// The daily view left after both filters ran: the month-filtered rows.
pub fn working_view(db: &Database, selection: &FilterSelection) -> anyhow::Result<Vec<DailyAggregateRow>> {
    db.query_daily_by_month(&selection.months)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FilterKind {
    Season,
    Month,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    /// Value used when toggling (`"Summer"`, `"7"`).
    pub value: String,
    /// Text shown next to the checkbox.
    pub label: String,
    pub selected: bool,
}

/// A multi-select control as displayed in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterControl {
    pub kind: FilterKind,
    pub label: &'static str,
    pub options: Vec<FilterOption>,
}

/// Season and month controls, options in first-appearance order.
pub fn filter_controls(db: &Database, selection: &FilterSelection) -> anyhow::Result<Vec<FilterControl>> {
    let seasons = db
        .query_season_options()?
        .into_iter()
        .map(|s| FilterOption {
            value: s.as_str().to_string(),
            label: s.as_str().to_string(),
            selected: selection.seasons.contains(&s),
        })
        .collect();
    let months = db
        .query_month_options()?
        .into_iter()
        .map(|m| FilterOption {
            value: m.to_string(),
            label: month_abbrev(m).map(str::to_string).unwrap_or_else(|| m.to_string()),
            selected: selection.months.contains(&m),
        })
        .collect();
    Ok(vec![
        FilterControl {
            kind: FilterKind::Season,
            label: SEASON_FILTER_LABEL,
            options: seasons,
        },
        FilterControl {
            kind: FilterKind::Month,
            label: MONTH_FILTER_LABEL,
            options: months,
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_day_db() -> Database {
        let db = Database::new().unwrap();
        db.load_daily_aggregates(
            "date,bike_rides_daily,avgTemp,Season,month\n\
             2022-01-01,100,2.0,Winter,1\n\
             2022-07-01,500,28.0,Summer,7\n",
        )
        .unwrap();
        db
    }

    #[test]
    fn test_summer_only_rounds_to_zero_millions() {
        let db = two_day_db();
        let selection = FilterSelection {
            seasons: vec![Season::Summer],
            months: vec![1, 7],
        };
        let metrics = StationMetrics::compute(&db, &selection).unwrap();
        assert_eq!(metrics.season_total, 500);
        assert_eq!(metrics.season_text, "0,00M");
        assert_eq!(metrics.month_total, 600);
    }

    #[test]
    fn test_empty_selection_is_zero() {
        let db = two_day_db();
        let metrics = StationMetrics::compute(&db, &FilterSelection::default()).unwrap();
        assert_eq!(metrics.season_total, 0);
        assert_eq!(metrics.month_total, 0);
        assert_eq!(metrics.season_text, "0,00M");
        assert_eq!(metrics.month_text, "0,00M");
    }

    #[test]
    fn test_filters_are_not_intersected() {
        let db = two_day_db();
        // Winter only and July only: an intersection would be empty.
        let selection = FilterSelection {
            seasons: vec![Season::Winter],
            months: vec![7],
        };
        let metrics = StationMetrics::compute(&db, &selection).unwrap();
        assert_eq!(metrics.season_total, 100);
        assert_eq!(metrics.month_total, 500);

        let view = working_view(&db, &selection).unwrap();
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].season, Season::Summer);
    }

    #[test]
    fn test_all_selects_every_option() {
        let db = two_day_db();
        let selection = FilterSelection::all(&db).unwrap();
        assert_eq!(selection.seasons, vec![Season::Winter, Season::Summer]);
        assert_eq!(selection.months, vec![1, 7]);
    }

    #[test]
    fn test_toggle() {
        let mut selection = FilterSelection {
            seasons: vec![Season::Winter, Season::Summer],
            months: vec![1],
        };
        selection.toggle_season(Season::Winter);
        assert_eq!(selection.seasons, vec![Season::Summer]);
        selection.toggle_season(Season::Winter);
        assert_eq!(selection.seasons, vec![Season::Summer, Season::Winter]);
        selection.toggle_month(1);
        assert!(selection.months.is_empty());
    }

    #[test]
    fn test_leaving_stations_restores_every_option() {
        let db = two_day_db();
        let mut selection = FilterSelection::all(&db).unwrap();
        selection.toggle_season(Season::Winter);
        selection.toggle_month(7);
        let narrowed = StationMetrics::compute(&db, &selection).unwrap();
        assert_eq!(narrowed.season_total, 500);
        assert_eq!(narrowed.month_total, 100);

        let on_intro = selection.for_page_change(&db, Page::Stations, Page::Intro).unwrap();
        let back = on_intro.for_page_change(&db, Page::Intro, Page::Stations).unwrap();
        assert_eq!(back, FilterSelection::all(&db).unwrap());
        let metrics = StationMetrics::compute(&db, &back).unwrap();
        assert_eq!(metrics.season_total, 600);
        assert_eq!(metrics.month_total, 600);
        let controls = filter_controls(&db, &back).unwrap();
        assert!(controls.iter().all(|c| c.options.iter().all(|o| o.selected)));
    }

    #[test]
    fn test_reselecting_same_page_keeps_selection() {
        let db = two_day_db();
        let selection = FilterSelection {
            seasons: vec![Season::Summer],
            months: vec![1],
        };
        let kept = selection.for_page_change(&db, Page::Stations, Page::Stations).unwrap();
        assert_eq!(kept, selection);
    }

    #[test]
    fn test_filter_controls_mark_selection() {
        let db = two_day_db();
        let selection = FilterSelection {
            seasons: vec![Season::Summer],
            months: vec![],
        };
        let controls = filter_controls(&db, &selection).unwrap();
        assert_eq!(controls.len(), 2);
        assert_eq!(controls[0].kind, FilterKind::Season);
        assert_eq!(controls[0].options[0].value, "Winter");
        assert!(!controls[0].options[0].selected);
        assert!(controls[0].options[1].selected);
        assert_eq!(controls[1].options[1].label, "Jul");
        assert!(controls[1].options.iter().all(|o| !o.selected));
    }
}
