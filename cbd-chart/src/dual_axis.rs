//! Dual-axis line chart: daily trips (left axis) and average temperature
//! (right axis) over the year.

use cbd_data::daily_aggregate::DailyAggregateRow;
use cbd_utils::dates::{format_date, month_abbrev};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

pub const LINE_CHART_TITLE: &str = "Daily Bike Trips and Average Temperature in New York in 2022";
pub const LINE_CHART_WIDTH: u32 = 900;
pub const LINE_CHART_HEIGHT: u32 = 500;
pub const LINE_WIDTH: f64 = 2.0;
pub const X_TITLE: &str = "Month";
pub const X_TICK_FORMAT: &str = "%b";

pub const TRIPS_SERIES_NAME: &str = "Daily Bike Trips";
pub const TRIPS_AXIS_TITLE: &str = "Daily Bike Trips";
pub const TRIPS_COLOR: &str = "#1f3b73";
pub const TEMPERATURE_SERIES_NAME: &str = "Daily Temperature";
pub const TEMPERATURE_AXIS_TITLE: &str = "Average Temperature (°C)";
pub const TEMPERATURE_COLOR: &str = "#2ca6a4";

/// Trips axis range is `[min * TRIPS_RANGE_LOW, max * TRIPS_RANGE_HIGH]`.
pub const TRIPS_RANGE_LOW: f64 = 0.9;
pub const TRIPS_RANGE_HIGH: f64 = 1.05;
/// Temperature axis range is `[min - pad, max + pad]` in degrees.
pub const TEMPERATURE_RANGE_PAD: f64 = 2.0;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AxisSide {
    Left,
    Right,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Point {
    /// `YYYY-MM-DD`
    pub date: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LineSeries {
    pub name: String,
    pub color: String,
    pub width: f64,
    pub axis: AxisSide,
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ValueAxis {
    pub title: String,
    /// Title and tick label colour; matches the series drawn against it.
    pub color: String,
    /// `None` when the table is empty.
    pub range: Option<[f64; 2]>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MonthTick {
    pub date: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimeAxis {
    pub title: String,
    pub tick_format: String,
    /// One tick on the first day of every month inside the date domain.
    pub ticks: Vec<MonthTick>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Legend {
    pub orientation: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DualAxisChartSpec {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub x_axis: TimeAxis,
    pub left_axis: ValueAxis,
    pub right_axis: ValueAxis,
    pub series: Vec<LineSeries>,
    pub legend: Legend,
}

impl DualAxisChartSpec {
    pub fn trips(&self) -> &LineSeries {
        &self.series[0]
    }

    pub fn temperature(&self) -> &LineSeries {
        &self.series[1]
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// `[min * 0.9, max * 1.05]` of daily trips.
pub fn trips_range(rows: &[DailyAggregateRow]) -> Option<[f64; 2]> {
    min_max(rows.iter().map(|r| r.trip_count as f64))
        .map(|(lo, hi)| [lo * TRIPS_RANGE_LOW, hi * TRIPS_RANGE_HIGH])
}

/// `[min - 2, max + 2]` of average temperature.
pub fn temperature_range(rows: &[DailyAggregateRow]) -> Option<[f64; 2]> {
    min_max(rows.iter().map(|r| r.average_temperature))
        .map(|(lo, hi)| [lo - TEMPERATURE_RANGE_PAD, hi + TEMPERATURE_RANGE_PAD])
}

/// First-of-month ticks between the earliest and latest date, inclusive.
pub fn month_ticks(rows: &[DailyAggregateRow]) -> Vec<MonthTick> {
    let (first, last) = match (rows.iter().map(|r| r.date).min(), rows.iter().map(|r| r.date).max()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Vec::new(),
    };
    let mut ticks = Vec::new();
    let mut cursor = NaiveDate::from_ymd_opt(first.year(), first.month(), 1);
    while let Some(tick) = cursor {
        if tick > last {
            break;
        }
        if tick >= first {
            ticks.push(MonthTick {
                date: format_date(&tick),
                label: month_abbrev(tick.month()).unwrap_or_default().to_string(),
            });
        }
        cursor = if tick.month() == 12 {
            NaiveDate::from_ymd_opt(tick.year() + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(tick.year(), tick.month() + 1, 1)
        };
    }
    ticks
}

fn series(
    name: &str,
    color: &str,
    axis: AxisSide,
    rows: &[DailyAggregateRow],
    value: impl Fn(&DailyAggregateRow) -> f64,
) -> LineSeries {
    LineSeries {
        name: name.to_string(),
        color: color.to_string(),
        width: LINE_WIDTH,
        axis,
        points: rows
            .iter()
            .map(|r| Point {
                date: format_date(&r.date),
                value: value(r),
            })
            .collect(),
    }
}

/// Both series share the x domain: one point per input row, in input order.
pub fn build_trips_temperature_chart(rows: &[DailyAggregateRow]) -> DualAxisChartSpec {
    log::debug!("[CBD] chart: dual-axis chart over {} days", rows.len());
    DualAxisChartSpec {
        title: LINE_CHART_TITLE.to_string(),
        width: LINE_CHART_WIDTH,
        height: LINE_CHART_HEIGHT,
        x_axis: TimeAxis {
            title: X_TITLE.to_string(),
            tick_format: X_TICK_FORMAT.to_string(),
            ticks: month_ticks(rows),
        },
        left_axis: ValueAxis {
            title: TRIPS_AXIS_TITLE.to_string(),
            color: TRIPS_COLOR.to_string(),
            range: trips_range(rows),
        },
        right_axis: ValueAxis {
            title: TEMPERATURE_AXIS_TITLE.to_string(),
            color: TEMPERATURE_COLOR.to_string(),
            range: temperature_range(rows),
        },
        series: vec![
            series(TRIPS_SERIES_NAME, TRIPS_COLOR, AxisSide::Left, rows, |r| {
                r.trip_count as f64
            }),
            series(
                TEMPERATURE_SERIES_NAME,
                TEMPERATURE_COLOR,
                AxisSide::Right,
                rows,
                |r| r.average_temperature,
            ),
        ],
        legend: Legend {
            orientation: "h".to_string(),
            x: 0.5,
            y: -0.25,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cbd_data::season::Season;

    fn day(month: u32, d: u32, trips: u64, temp: f64) -> DailyAggregateRow {
        DailyAggregateRow {
            date: NaiveDate::from_ymd_opt(2022, month, d).unwrap(),
            trip_count: trips,
            average_temperature: temp,
            season: Season::Winter,
            month,
        }
    }

    fn full_year() -> Vec<DailyAggregateRow> {
        let start = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
        start
            .iter_days()
            .take(365)
            .enumerate()
            .map(|(i, date)| DailyAggregateRow {
                date,
                trip_count: 20_000 + i as u64 * 100,
                average_temperature: -5.0 + (i % 40) as f64,
                season: Season::Winter,
                month: date.month(),
            })
            .collect()
    }

    #[test]
    fn test_series_share_domain() {
        let rows = full_year();
        let spec = build_trips_temperature_chart(&rows);
        assert_eq!(spec.trips().points.len(), rows.len());
        assert_eq!(spec.temperature().points.len(), rows.len());
        for (a, b) in spec.trips().points.iter().zip(&spec.temperature().points) {
            assert_eq!(a.date, b.date);
        }
        assert_eq!(spec.trips().axis, AxisSide::Left);
        assert_eq!(spec.temperature().axis, AxisSide::Right);
    }

    #[test]
    fn test_axis_ranges() {
        let rows = vec![day(1, 1, 100, 2.0), day(7, 1, 500, 28.0)];
        let spec = build_trips_temperature_chart(&rows);
        let [lo, hi] = spec.left_axis.range.unwrap();
        assert!((lo - 90.0).abs() < 1e-9);
        assert!((hi - 525.0).abs() < 1e-9);
        assert_eq!(spec.right_axis.range, Some([0.0, 30.0]));
    }

    #[test]
    fn test_axis_colours_match_series() {
        let spec = build_trips_temperature_chart(&[day(1, 1, 1, 1.0)]);
        assert_eq!(spec.left_axis.color, spec.trips().color);
        assert_eq!(spec.right_axis.color, spec.temperature().color);
    }

    #[test]
    fn test_month_ticks_cover_year() {
        let spec = build_trips_temperature_chart(&full_year());
        let labels: Vec<&str> = spec.x_axis.ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"]
        );
        assert_eq!(spec.x_axis.ticks[1].date, "2022-02-01");
    }

    #[test]
    fn test_mid_month_start_skips_that_month_tick() {
        let rows = vec![day(1, 15, 1, 1.0), day(3, 2, 1, 1.0)];
        let labels: Vec<String> = month_ticks(&rows).into_iter().map(|t| t.label).collect();
        assert_eq!(labels, vec!["Feb", "Mar"]);
    }

    #[test]
    fn test_points_keep_input_order() {
        let rows = vec![day(7, 1, 500, 28.0), day(1, 1, 100, 2.0)];
        let spec = build_trips_temperature_chart(&rows);
        assert_eq!(spec.trips().points[0].date, "2022-07-01");
        assert_eq!(spec.trips().points[1].value, 100.0);
    }

    #[test]
    fn test_empty_table() {
        let spec = build_trips_temperature_chart(&[]);
        assert!(spec.trips().points.is_empty());
        assert!(spec.left_axis.range.is_none());
        assert!(spec.right_axis.range.is_none());
        assert!(spec.x_axis.ticks.is_empty());
    }
}
