//! Query result model structs.
//!
//! Row types come from `cbd-data`; this module holds the aggregate shapes
//! that only exist as query results.

use chrono::NaiveDate;
use serde::Serialize;

/// First and last day covered by the daily aggregates.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DailySpan {
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
    /// Number of daily rows.
    pub days: usize,
}

/// Row counts per table, used by the dataset check command.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct TableCounts {
    pub station_ranking: usize,
    pub daily_aggregates: usize,
    pub reduced_trips: usize,
}
