//! One-shot loading of all dashboard inputs.
//!
//! Any missing or malformed file is fatal: the error names the dataset and
//! its path, and nothing is partially loaded.

use crate::config::DatasetPaths;
use crate::daily_aggregate::DailyAggregateRow;
use crate::map_document::MapDocument;
use crate::reduced_trip::ReducedTripTable;
use crate::station_ranking::StationRankingRow;
use anyhow::Context;
use std::fs;
use std::path::Path;

/// All four inputs, read-only once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Datasets {
    pub top_stations: Vec<StationRankingRow>,
    pub reduced_trips: ReducedTripTable,
    pub daily: Vec<DailyAggregateRow>,
    pub map: MapDocument,
}

impl Datasets {
    /// Read and parse every dataset from disk.
    pub fn load(paths: &DatasetPaths) -> anyhow::Result<Datasets> {
        let top_csv = read_text(&paths.top_stations, "top-15 stations CSV")?;
        let reduced_bytes = fs::read(&paths.reduced_trips).with_context(|| {
            format!("failed to read reduced trips CSV at {}", paths.reduced_trips.display())
        })?;
        let daily_csv = read_text(&paths.daily, "daily aggregate CSV")?;
        let map_html = read_text(&paths.map_html, "map HTML")?;
        parse_all(Some(paths), &top_csv, &reduced_bytes, &daily_csv, &map_html)
    }

    /// Parse datasets already held in memory (e.g. embedded at build time).
    pub fn from_sources(
        top_stations_csv: &str,
        reduced_trips: &[u8],
        daily_csv: &str,
        map_html: &str,
    ) -> anyhow::Result<Datasets> {
        parse_all(None, top_stations_csv, reduced_trips, daily_csv, map_html)
    }

    /// Like [`Datasets::from_sources`], with `origin` naming the file each
    /// input was taken from so parse errors can point at it.
    pub fn from_sources_at(
        origin: &DatasetPaths,
        top_stations_csv: &str,
        reduced_trips: &[u8],
        daily_csv: &str,
        map_html: &str,
    ) -> anyhow::Result<Datasets> {
        parse_all(Some(origin), top_stations_csv, reduced_trips, daily_csv, map_html)
    }
}

fn parse_all(
    origin: Option<&DatasetPaths>,
    top_stations_csv: &str,
    reduced_trips: &[u8],
    daily_csv: &str,
    map_html: &str,
) -> anyhow::Result<Datasets> {
    let top_stations = StationRankingRow::parse_station_ranking_csv(top_stations_csv).with_context(|| {
        parse_failure("top-15 stations CSV", origin.map(|o| o.top_stations.as_path()))
    })?;
    let reduced_trips = ReducedTripTable::from_bytes(reduced_trips).with_context(|| {
        parse_failure("reduced trips CSV", origin.map(|o| o.reduced_trips.as_path()))
    })?;
    let daily = DailyAggregateRow::parse_daily_aggregate_csv(daily_csv)
        .with_context(|| parse_failure("daily aggregate CSV", origin.map(|o| o.daily.as_path())))?;
    let map = MapDocument::new(map_html);

    log::info!(
        "[CBD] loader: loaded {} stations, {} reduced trips, {} days, {} byte map",
        top_stations.len(),
        reduced_trips.len(),
        daily.len(),
        map.len()
    );
    Ok(Datasets {
        top_stations,
        reduced_trips,
        daily,
        map,
    })
}

fn read_text(path: &Path, what: &str) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {} at {}", what, path.display()))
}

fn parse_failure(what: &str, path: Option<&Path>) -> String {
    match path {
        Some(path) => format!("failed to parse {} at {}", what, path.display()),
        None => format!("failed to parse {}", what),
    }
}
