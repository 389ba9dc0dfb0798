use crate::filters::FilterSelection;
use anyhow::Context;
use cbd_data::config::DatasetPaths;
use cbd_data::loader::Datasets;
use cbd_data::map_document::MapDocument;
use cbd_db::Database;

/// Everything a page render reads: the loaded tables and the map document.
///
/// Built once per process and never mutated afterwards.
#[derive(Clone, PartialEq)]
pub struct Dashboard {
    pub db: Database,
    pub map: MapDocument,
}

impl Dashboard {
    pub fn from_datasets(datasets: &Datasets) -> anyhow::Result<Dashboard> {
        let db = Database::new()?;
        db.load_datasets(datasets)
            .context("failed to load datasets into the dashboard store")?;
        Ok(Dashboard {
            db,
            map: datasets.map.clone(),
        })
    }

    /// Read every input from disk and build the store.
    pub fn load(paths: &DatasetPaths) -> anyhow::Result<Dashboard> {
        let datasets = Datasets::load(paths)?;
        Self::from_datasets(&datasets)
    }

    /// Initial filter state: every season and month selected.
    pub fn default_filters(&self) -> anyhow::Result<FilterSelection> {
        FilterSelection::all(&self.db)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_datasets_keeps_row_counts() {
        let datasets = Datasets::from_sources(
            ",start_station_name,value\n0,A,3\n1,B,2\n",
            b",ride_id\n0,A1\n1,B2\n2,C3\n",
            "date,bike_rides_daily,avgTemp,Season,month\n2022-01-01,1,0.0,Winter,1\n",
            "<html></html>",
        )
        .unwrap();
        let dashboard = Dashboard::from_datasets(&datasets).unwrap();
        let counts = dashboard.db.query_table_counts().unwrap();
        assert_eq!(counts.station_ranking, 2);
        assert_eq!(counts.reduced_trips, 3);
        assert_eq!(counts.daily_aggregates, 1);
        assert_eq!(dashboard.map.as_str(), "<html></html>");
    }
}
