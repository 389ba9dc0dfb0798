//! SQL schema definitions for the in-memory SQLite database.
//!
//! The schema is applied as a single batch when the database is initialized.

/// Returns the full SQL schema as a single batch string.
///
/// - `station_ranking` - Top-15 start stations; `rank` preserves file order
/// - `daily_aggregates` - One row per day; `row_order` preserves file order
/// - `reduced_trips` / `reduced_trip_columns` - Opaque reduced trip records
///
/// Season and month filters are plain `IN (...)` predicates over
/// `daily_aggregates`; totals are `SUM(trip_count)` over the matching rows.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS station_ranking (
        rank INTEGER PRIMARY KEY,
        station_name TEXT NOT NULL,
        trip_count INTEGER NOT NULL
    );

    CREATE TABLE IF NOT EXISTS daily_aggregates (
        date TEXT PRIMARY KEY,
        row_order INTEGER NOT NULL,
        trip_count INTEGER NOT NULL,
        average_temperature REAL NOT NULL,
        season TEXT NOT NULL,
        month INTEGER NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_daily_season ON daily_aggregates(season);
    CREATE INDEX IF NOT EXISTS idx_daily_month ON daily_aggregates(month);

    CREATE TABLE IF NOT EXISTS reduced_trip_columns (
        position INTEGER PRIMARY KEY,
        name TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS reduced_trips (
        row_order INTEGER PRIMARY KEY,
        row_index TEXT NOT NULL,
        record TEXT NOT NULL
    );
    "#
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn schema_is_valid_sql() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema())
            .expect("Schema SQL should be valid");
    }

    #[test]
    fn schema_creates_all_tables() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();

        let expected_tables = [
            "station_ranking",
            "daily_aggregates",
            "reduced_trip_columns",
            "reduced_trips",
        ];

        for table in &expected_tables {
            let count: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?1",
                    [table],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "Table '{}' should exist", table);
        }
    }

    #[test]
    fn schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();
        conn.execute_batch(create_schema())
            .expect("Applying schema twice should succeed due to IF NOT EXISTS");
    }
}
