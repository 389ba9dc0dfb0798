use crate::columns::{cell, find_column, line_of, parse_count, require_column};
use crate::season::Season;
use anyhow::{anyhow, bail, Context};
use cbd_utils::dates::{parse_date, parse_month};
use chrono::{Datelike, NaiveDate};
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const DATE_COLUMNS: [&str; 2] = ["date", "Date"];
pub const TRIP_COUNT_COLUMNS: [&str; 2] = ["bike_rides_daily", "trip_count"];
pub const TEMPERATURE_COLUMNS: [&str; 2] = ["avgTemp", "average_temperature"];
pub const SEASON_COLUMNS: [&str; 2] = ["Season", "season"];
pub const MONTH_COLUMNS: [&str; 1] = ["month"];

/// One calendar day of aggregated ridership.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct DailyAggregateRow {
    pub date: NaiveDate,
    pub trip_count: u64,
    /// Average temperature in degrees Celsius.
    pub average_temperature: f64,
    pub season: Season,
    /// Calendar month, 1-12.
    pub month: u32,
}

impl DailyAggregateRow {
    /// Parse the daily aggregate CSV.
    ///
    /// Expected (with headers): `date,bike_rides_daily,avgTemp,Season,month`.
    /// The date lives in the dataframe index column, so a leading column with
    /// an empty header is read as the date when no `date` header exists.
    ///
    /// Fails if a date repeats or if the dates span more than one year.
    pub fn parse_daily_aggregate_csv(csv_object: &str) -> anyhow::Result<Vec<DailyAggregateRow>> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(csv_object.as_bytes());
        let headers = rdr.headers()?.clone();

        let date_idx = match find_column(&headers, &DATE_COLUMNS) {
            Some(idx) => idx,
            None if headers.get(0).map(|h| h.trim().is_empty()).unwrap_or(false) => 0,
            None => bail!("missing date column (expected 'date' or a leading index column)"),
        };
        let trips_idx = require_column(&headers, &TRIP_COUNT_COLUMNS)?;
        let temp_idx = require_column(&headers, &TEMPERATURE_COLUMNS)?;
        let season_idx = require_column(&headers, &SEASON_COLUMNS)?;
        let month_idx = require_column(&headers, &MONTH_COLUMNS)?;

        let mut rows: Vec<DailyAggregateRow> = Vec::new();
        let mut seen: HashSet<NaiveDate> = HashSet::new();
        for result in rdr.records() {
            let record = result?;
            let line = line_of(&record);
            let row = Self::from_record(&record, date_idx, trips_idx, temp_idx, season_idx, month_idx)
                .with_context(|| format!("line {}", line))?;
            if !seen.insert(row.date) {
                bail!("line {}: duplicate date {}", line, row.date);
            }
            rows.push(row);
        }

        if let Some(first) = rows.first() {
            let year = first.date.year();
            if let Some(other) = rows.iter().find(|r| r.date.year() != year) {
                bail!(
                    "daily aggregates must cover a single year, found {} and {}",
                    year,
                    other.date.year()
                );
            }
        }

        log::info!("[CBD] loader: parsed {} daily aggregate rows", rows.len());
        Ok(rows)
    }

    fn from_record(
        record: &csv::StringRecord,
        date_idx: usize,
        trips_idx: usize,
        temp_idx: usize,
        season_idx: usize,
        month_idx: usize,
    ) -> anyhow::Result<DailyAggregateRow> {
        let date = parse_date(cell(record, date_idx, "date")?)?;
        let trip_count = parse_count(cell(record, trips_idx, "bike_rides_daily")?)?;
        let temp_str = cell(record, temp_idx, "avgTemp")?;
        let average_temperature = temp_str
            .parse::<f64>()
            .map_err(|_| anyhow!("invalid temperature '{}'", temp_str))?;
        let season = cell(record, season_idx, "Season")?.parse::<Season>()?;
        let month = parse_month(cell(record, month_idx, "month")?)?;
        Ok(DailyAggregateRow {
            date,
            trip_count,
            average_temperature,
            season,
            month,
        })
    }
}
