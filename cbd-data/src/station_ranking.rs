use crate::columns::{cell, line_of, parse_count, require_column};
use anyhow::Context;
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

/// Header names accepted for the station name column.
pub const STATION_NAME_COLUMNS: [&str; 2] = ["start_station_name", "station_name"];
/// Header names accepted for the trip count column.
pub const TRIP_COUNT_COLUMNS: [&str; 2] = ["value", "trip_count"];

/// One entry of the precomputed top-15 start station ranking.
///
/// Rows are kept in file order, which is rank order.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct StationRankingRow {
    pub station_name: String,
    pub trip_count: u64,
}

impl StationRankingRow {
    /// Parse the top-15 ranking CSV.
    ///
    /// Expected (with headers): `,start_station_name,value` where the leading
    /// column is the dataframe index and is ignored.
    pub fn parse_station_ranking_csv(csv_object: &str) -> anyhow::Result<Vec<StationRankingRow>> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(csv_object.as_bytes());
        let headers = rdr.headers()?.clone();
        let name_idx = require_column(&headers, &STATION_NAME_COLUMNS)?;
        let count_idx = require_column(&headers, &TRIP_COUNT_COLUMNS)?;

        let mut rows = Vec::new();
        for result in rdr.records() {
            let record = result?;
            let line = line_of(&record);
            let station_name = cell(&record, name_idx, "station name")
                .with_context(|| format!("line {}", line))?
                .to_string();
            let trip_count = parse_count(cell(&record, count_idx, "trip count")?)
                .with_context(|| format!("line {}: bad trip count", line))?;
            rows.push(StationRankingRow {
                station_name,
                trip_count,
            });
        }
        log::info!("[CBD] loader: parsed {} station ranking rows", rows.len());
        Ok(rows)
    }
}
