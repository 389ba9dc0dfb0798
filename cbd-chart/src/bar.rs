//! Bar chart of the top start stations.

use crate::colorscale::{gnbu, normalize};
use cbd_data::station_ranking::StationRankingRow;
use serde::Serialize;

pub const BAR_CHART_TITLE: &str = "Top 15 Citi Bike most popular start stations in New York in 2022";
pub const BAR_X_TITLE: &str = "Start stations";
pub const BAR_Y_TITLE: &str = "Number of trips";
pub const BAR_CHART_WIDTH: u32 = 900;
pub const BAR_CHART_HEIGHT: u32 = 600;
pub const BAR_COLOR_SCALE: &str = "GnBu";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: u64,
    /// Fill colour from the continuous scale, `#rrggbb`.
    pub color: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BarChartSpec {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub width: u32,
    pub height: u32,
    pub color_scale: String,
    /// One bar per input row, in input order.
    pub bars: Vec<Bar>,
}

impl BarChartSpec {
    pub fn categories(&self) -> Vec<&str> {
        self.bars.iter().map(|b| b.label.as_str()).collect()
    }
}

/// Bar per station: x = station name, y = trip count, colour by trip count.
pub fn build_station_bar_chart(rows: &[StationRankingRow]) -> BarChartSpec {
    let values: Vec<f64> = rows.iter().map(|r| r.trip_count as f64).collect();
    let positions = normalize(&values);
    let bars = rows
        .iter()
        .zip(positions)
        .map(|(row, t)| Bar {
            label: row.station_name.clone(),
            value: row.trip_count,
            color: gnbu(t),
        })
        .collect();

    BarChartSpec {
        title: BAR_CHART_TITLE.to_string(),
        x_title: BAR_X_TITLE.to_string(),
        y_title: BAR_Y_TITLE.to_string(),
        width: BAR_CHART_WIDTH,
        height: BAR_CHART_HEIGHT,
        color_scale: BAR_COLOR_SCALE.to_string(),
        bars,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colorscale::luminance;

    fn station(name: &str, trips: u64) -> StationRankingRow {
        StationRankingRow {
            station_name: name.to_string(),
            trip_count: trips,
        }
    }

    #[test]
    fn test_category_order_matches_input() {
        let rows = vec![station("B", 10), station("A", 30), station("C", 20)];
        let spec = build_station_bar_chart(&rows);
        assert_eq!(spec.categories(), vec!["B", "A", "C"]);
        let values: Vec<u64> = spec.bars.iter().map(|b| b.value).collect();
        assert_eq!(values, vec![10, 30, 20]);
    }

    #[test]
    fn test_more_trips_means_darker_bar() {
        let rows = vec![
            station("W 21 St & 6 Ave", 129016),
            station("West St & Chambers St", 123214),
            station("Broadway & W 58 St", 104213),
            station("1 Ave & E 68 St", 98000),
        ];
        let spec = build_station_bar_chart(&rows);
        let lum: Vec<f64> = spec.bars.iter().map(|b| luminance(&b.color).unwrap()).collect();
        for pair in lum.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
        assert_eq!(spec.bars[0].color, "#084081");
        assert_eq!(spec.bars[3].color, "#f7fcf0");
    }

    #[test]
    fn test_equal_counts_share_a_colour() {
        let rows = vec![station("A", 5), station("B", 5)];
        let spec = build_station_bar_chart(&rows);
        assert_eq!(spec.bars[0].color, spec.bars[1].color);
    }

    #[test]
    fn test_empty_table_has_no_bars() {
        let spec = build_station_bar_chart(&[]);
        assert!(spec.bars.is_empty());
        assert_eq!(spec.title, BAR_CHART_TITLE);
    }

    #[test]
    fn test_serializes_camel_case() {
        let spec = build_station_bar_chart(&[station("A", 1)]);
        let json = crate::to_json(&spec).unwrap();
        assert!(json.contains("\"xTitle\":\"Start stations\""));
        assert!(json.contains("\"colorScale\":\"GnBu\""));
    }
}
