//! Data loading functions for populating the in-memory SQLite database.
//!
//! Each `load_*` method parses its input with the `cbd-data` parsers and
//! inserts the rows. Parsing happens before any insert, so a malformed file
//! leaves its table untouched.
//!
//! # Formats
//!
//! - **Station ranking** (has headers): `,start_station_name,value`
//! - **Daily aggregates** (has headers): `date,bike_rides_daily,avgTemp,Season,month`
//! - **Reduced trips** (has headers, optionally gzipped): `,<any columns...>`

use crate::Database;
use cbd_data::daily_aggregate::DailyAggregateRow;
use cbd_data::loader::Datasets;
use cbd_data::reduced_trip::ReducedTripTable;
use cbd_data::station_ranking::StationRankingRow;
use cbd_utils::dates::format_date;
use rusqlite::{params, Connection};

impl Database {
    /// Load the top-15 station ranking from CSV string. Returns the row count.
    pub fn load_station_ranking(&self, csv_data: &str) -> anyhow::Result<usize> {
        let rows = StationRankingRow::parse_station_ranking_csv(csv_data)?;
        self.insert_station_ranking(&rows)
    }

    /// Load daily aggregates from CSV string. Returns the row count.
    pub fn load_daily_aggregates(&self, csv_data: &str) -> anyhow::Result<usize> {
        let rows = DailyAggregateRow::parse_daily_aggregate_csv(csv_data)?;
        self.insert_daily_aggregates(&rows)
    }

    /// Load the reduced trips table from raw (plain or gzipped) CSV bytes.
    pub fn load_reduced_trips(&self, bytes: &[u8]) -> anyhow::Result<usize> {
        let table = ReducedTripTable::from_bytes(bytes)?;
        self.insert_reduced_trips(&table)
    }

    /// Insert every tabular dataset of an already parsed [`Datasets`].
    ///
    /// All three tables are written in one transaction; a failure in any of
    /// them leaves the store as it was.
    pub fn load_datasets(&self, datasets: &Datasets) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let tx = conn.unchecked_transaction()?;
        write_station_ranking(&tx, &datasets.top_stations)?;
        write_daily_aggregates(&tx, &datasets.daily)?;
        write_reduced_trips(&tx, &datasets.reduced_trips)?;
        tx.commit()?;
        Ok(())
    }

    pub fn insert_station_ranking(&self, rows: &[StationRankingRow]) -> anyhow::Result<usize> {
        let conn = self.conn.borrow();
        let tx = conn.unchecked_transaction()?;
        let n = write_station_ranking(&tx, rows)?;
        tx.commit()?;
        Ok(n)
    }

    pub fn insert_daily_aggregates(&self, rows: &[DailyAggregateRow]) -> anyhow::Result<usize> {
        let conn = self.conn.borrow();
        let tx = conn.unchecked_transaction()?;
        let n = write_daily_aggregates(&tx, rows)?;
        tx.commit()?;
        Ok(n)
    }

    pub fn insert_reduced_trips(&self, table: &ReducedTripTable) -> anyhow::Result<usize> {
        let conn = self.conn.borrow();
        let tx = conn.unchecked_transaction()?;
        let n = write_reduced_trips(&tx, table)?;
        tx.commit()?;
        Ok(n)
    }
}

fn write_station_ranking(conn: &Connection, rows: &[StationRankingRow]) -> anyhow::Result<usize> {
    let mut stmt = conn.prepare(
        "INSERT INTO station_ranking (rank, station_name, trip_count) VALUES (?1, ?2, ?3)",
    )?;
    for (rank, row) in rows.iter().enumerate() {
        stmt.execute(params![rank as i64, row.station_name, row.trip_count as i64])?;
    }
    log::info!("[CBD] db: inserted {} station ranking rows", rows.len());
    Ok(rows.len())
}

fn write_daily_aggregates(conn: &Connection, rows: &[DailyAggregateRow]) -> anyhow::Result<usize> {
    let mut stmt = conn.prepare(
        "INSERT INTO daily_aggregates (date, row_order, trip_count, average_temperature, season, month)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )?;
    for (order, row) in rows.iter().enumerate() {
        stmt.execute(params![
            format_date(&row.date),
            order as i64,
            row.trip_count as i64,
            row.average_temperature,
            row.season.as_str(),
            row.month,
        ])?;
    }
    log::info!("[CBD] db: inserted {} daily aggregate rows", rows.len());
    Ok(rows.len())
}

fn write_reduced_trips(conn: &Connection, table: &ReducedTripTable) -> anyhow::Result<usize> {
    {
        let mut stmt = conn.prepare(
            "INSERT OR REPLACE INTO reduced_trip_columns (position, name) VALUES (?1, ?2)",
        )?;
        for (position, name) in table.headers.iter().enumerate() {
            stmt.execute(params![position as i64, name])?;
        }
    }
    let mut stmt = conn.prepare(
        "INSERT INTO reduced_trips (row_order, row_index, record) VALUES (?1, ?2, ?3)",
    )?;
    let offset: i64 = conn.query_row("SELECT COUNT(*) FROM reduced_trips", [], |row| row.get(0))?;
    for (order, row) in table.rows.iter().enumerate() {
        let record = serde_json::to_string(&row.values)?;
        stmt.execute(params![offset + order as i64, row.index, record])?;
    }
    log::info!("[CBD] db: inserted {} reduced trip rows", table.len());
    Ok(table.len())
}

#[cfg(test)]
mod tests {
    use crate::Database;
    use cbd_data::loader::Datasets;

    #[test]
    fn load_station_ranking_counts_rows() {
        let db = Database::new().unwrap();
        let n = db
            .load_station_ranking(",start_station_name,value\n0,A,3\n1,B,2\n2,C,1\n")
            .unwrap();
        assert_eq!(n, 3);
    }

    #[test]
    fn malformed_daily_csv_inserts_nothing() {
        let db = Database::new().unwrap();
        let csv_data = "\
date,bike_rides_daily,avgTemp,Season,month
2022-01-01,1,0.0,Winter,1
2022-01-02,x,0.0,Winter,1
";
        assert!(db.load_daily_aggregates(csv_data).is_err());
        assert!(db.query_daily_series().unwrap().is_empty());
    }

    #[test]
    fn loading_same_day_twice_fails() {
        let db = Database::new().unwrap();
        let csv_data = "date,bike_rides_daily,avgTemp,Season,month\n2022-01-01,1,0.0,Winter,1\n";
        db.load_daily_aggregates(csv_data).unwrap();
        assert!(db.load_daily_aggregates(csv_data).is_err());
    }

    #[test]
    fn failed_batch_rolls_back_earlier_rows() {
        let db = Database::new().unwrap();
        db.load_daily_aggregates("date,bike_rides_daily,avgTemp,Season,month\n2022-01-02,5,1.0,Winter,1\n")
            .unwrap();
        let batch = "\
date,bike_rides_daily,avgTemp,Season,month
2022-01-01,1,0.0,Winter,1
2022-01-02,2,0.0,Winter,1
";
        assert!(db.load_daily_aggregates(batch).is_err());
        let series = db.query_daily_series().unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].trip_count, 5);
    }

    #[test]
    fn load_datasets_is_all_or_nothing() {
        let db = Database::new().unwrap();
        let daily = "date,bike_rides_daily,avgTemp,Season,month\n2022-01-01,1,0.0,Winter,1\n";
        db.load_daily_aggregates(daily).unwrap();
        let datasets = Datasets::from_sources(
            ",start_station_name,value\n0,A,3\n1,B,2\n",
            b",ride_id\n0,A1\n",
            daily,
            "<html></html>",
        )
        .unwrap();
        assert!(db.load_datasets(&datasets).is_err());
        let counts = db.query_table_counts().unwrap();
        assert_eq!(counts.station_ranking, 0);
        assert_eq!(counts.daily_aggregates, 1);
        assert_eq!(counts.reduced_trips, 0);
    }

    #[test]
    fn load_reduced_trips_keeps_cells() {
        let db = Database::new().unwrap();
        let n = db
            .load_reduced_trips(b",ride_id,member_casual\n0,A1,member\n1,B2,casual\n")
            .unwrap();
        assert_eq!(n, 2);
        assert_eq!(db.query_reduced_trip_count().unwrap(), 2);
        assert_eq!(
            db.query_reduced_trip_columns().unwrap(),
            vec!["ride_id".to_string(), "member_casual".to_string()]
        );
    }
}
