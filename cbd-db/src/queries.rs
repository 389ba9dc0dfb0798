//! Typed query methods for reading the dashboard tables back.
//!
//! # Filters
//!
//! The season and month filters are membership predicates over
//! `daily_aggregates`. An empty selection matches nothing, so its total is 0.
//! Options are returned in order of first appearance in the daily table,
//! which is also the default (all selected) order shown in the sidebar.

use crate::models::{DailySpan, TableCounts};
use crate::Database;
use anyhow::Context;
use cbd_data::daily_aggregate::DailyAggregateRow;
use cbd_data::season::Season;
use cbd_data::station_ranking::StationRankingRow;
use cbd_utils::dates::parse_date;
use rusqlite::{params_from_iter, ToSql};

const DAILY_COLUMNS: &str = "date, trip_count, average_temperature, season, month";

/// Raw daily row as stored in SQLite.
type DailyRecord = (String, i64, f64, String, u32);

fn placeholders(n: usize) -> String {
    (1..=n).map(|i| format!("?{}", i)).collect::<Vec<_>>().join(", ")
}

fn to_daily_row(record: DailyRecord) -> anyhow::Result<DailyAggregateRow> {
    let (date, trip_count, average_temperature, season, month) = record;
    Ok(DailyAggregateRow {
        date: parse_date(&date)?,
        trip_count: trip_count as u64,
        average_temperature,
        season: season.parse::<Season>()?,
        month,
    })
}

impl Database {
    // ───────────────────── Station Queries ─────────────────────

    /// Top stations in rank (file) order.
    pub fn query_top_stations(&self) -> anyhow::Result<Vec<StationRankingRow>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT station_name, trip_count FROM station_ranking ORDER BY rank",
        )?;
        let rows = stmt
            .query_map([], |row| {
                let trip_count: i64 = row.get(1)?;
                Ok(StationRankingRow {
                    station_name: row.get(0)?,
                    trip_count: trip_count as u64,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("[CBD] query: query_top_stations returned {} records", rows.len());
        Ok(rows)
    }

    // ───────────────────── Daily Queries ─────────────────────

    /// Every daily row in file order.
    pub fn query_daily_series(&self) -> anyhow::Result<Vec<DailyAggregateRow>> {
        self.query_daily_where("1 = 1", Vec::<Box<dyn ToSql>>::new())
    }

    /// Daily rows whose season is in `seasons`.
    pub fn query_daily_by_season(&self, seasons: &[Season]) -> anyhow::Result<Vec<DailyAggregateRow>> {
        let params: Vec<Box<dyn ToSql>> = seasons
            .iter()
            .map(|s| Box::new(s.as_str()) as Box<dyn ToSql>)
            .collect();
        let clause = format!("season IN ({})", placeholders(params.len()));
        self.query_daily_where(&clause, params)
    }

    /// Daily rows whose month is in `months`.
    pub fn query_daily_by_month(&self, months: &[u32]) -> anyhow::Result<Vec<DailyAggregateRow>> {
        let params: Vec<Box<dyn ToSql>> = months
            .iter()
            .map(|m| Box::new(*m) as Box<dyn ToSql>)
            .collect();
        let clause = format!("month IN ({})", placeholders(params.len()));
        self.query_daily_where(&clause, params)
    }

    fn query_daily_where(
        &self,
        clause: &str,
        params: Vec<Box<dyn ToSql>>,
    ) -> anyhow::Result<Vec<DailyAggregateRow>> {
        let conn = self.conn.borrow();
        let sql = format!(
            "SELECT {} FROM daily_aggregates WHERE {} ORDER BY row_order",
            DAILY_COLUMNS, clause
        );
        let mut stmt = conn.prepare(&sql)?;
        let records = stmt
            .query_map(params_from_iter(params.iter()), |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?, row.get(4)?))
            })?
            .collect::<Result<Vec<DailyRecord>, _>>()?;
        records
            .into_iter()
            .map(to_daily_row)
            .collect::<anyhow::Result<Vec<_>>>()
            .context("corrupt daily aggregate row")
    }

    /// Sum of daily trips over rows whose season is in `seasons` (0 when empty).
    pub fn query_total_trips_by_season(&self, seasons: &[Season]) -> anyhow::Result<u64> {
        let values: Vec<&str> = seasons.iter().map(|s| s.as_str()).collect();
        self.sum_trips_where("season", &values)
    }

    /// Sum of daily trips over rows whose month is in `months` (0 when empty).
    pub fn query_total_trips_by_month(&self, months: &[u32]) -> anyhow::Result<u64> {
        self.sum_trips_where("month", months)
    }

    fn sum_trips_where<T: ToSql>(&self, column: &str, values: &[T]) -> anyhow::Result<u64> {
        if values.is_empty() {
            log::debug!("[CBD] query: empty {} selection, total is 0", column);
            return Ok(0);
        }
        let conn = self.conn.borrow();
        let sql = format!(
            "SELECT COALESCE(SUM(trip_count), 0) FROM daily_aggregates WHERE {} IN ({})",
            column,
            placeholders(values.len())
        );
        let total: i64 = conn.query_row(&sql, params_from_iter(values.iter()), |row| row.get(0))?;
        Ok(total as u64)
    }

    /// Distinct seasons in order of first appearance.
    pub fn query_season_options(&self) -> anyhow::Result<Vec<Season>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT season FROM daily_aggregates GROUP BY season ORDER BY MIN(row_order)",
        )?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        names.iter().map(|n| n.parse::<Season>()).collect()
    }

    /// Distinct months in order of first appearance.
    pub fn query_month_options(&self) -> anyhow::Result<Vec<u32>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT month FROM daily_aggregates GROUP BY month ORDER BY MIN(row_order)",
        )?;
        let months = stmt
            .query_map([], |row| row.get::<_, u32>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(months)
    }

    /// First/last date and day count, or `None` for an empty table.
    pub fn query_daily_span(&self) -> anyhow::Result<Option<DailySpan>> {
        let conn = self.conn.borrow();
        let (first, last, days): (Option<String>, Option<String>, i64) = conn.query_row(
            "SELECT MIN(date), MAX(date), COUNT(*) FROM daily_aggregates",
            [],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )?;
        match (first, last) {
            (Some(first), Some(last)) => Ok(Some(DailySpan {
                first_date: parse_date(&first)?,
                last_date: parse_date(&last)?,
                days: days as usize,
            })),
            _ => Ok(None),
        }
    }

    // ───────────────────── Reduced Trip Queries ─────────────────────

    pub fn query_reduced_trip_count(&self) -> anyhow::Result<usize> {
        let conn = self.conn.borrow();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM reduced_trips", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    pub fn query_reduced_trip_columns(&self) -> anyhow::Result<Vec<String>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare("SELECT name FROM reduced_trip_columns ORDER BY position")?;
        let names = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(names)
    }

    pub fn query_table_counts(&self) -> anyhow::Result<TableCounts> {
        let conn = self.conn.borrow();
        let count = |table: &str| -> anyhow::Result<usize> {
            let n: i64 = conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
                row.get(0)
            })?;
            Ok(n as usize)
        };
        Ok(TableCounts {
            station_ranking: count("station_ranking")?,
            daily_aggregates: count("daily_aggregates")?,
            reduced_trips: count("reduced_trips")?,
        })
    }
}
