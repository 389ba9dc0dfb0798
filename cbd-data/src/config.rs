//! Dataset locations.
//!
//! Defaults point at the `fixtures/` directory. The CLI flags and the
//! dashboard build script read the `CBD_*` variables below as overrides.

use std::path::PathBuf;

pub const TOP_STATIONS_ENV: &str = "CBD_TOP_STATIONS_CSV";
pub const REDUCED_TRIPS_ENV: &str = "CBD_REDUCED_TRIPS_CSV";
pub const DAILY_ENV: &str = "CBD_DAILY_CSV";
pub const MAP_HTML_ENV: &str = "CBD_MAP_HTML";

pub const DEFAULT_TOP_STATIONS: &str = "fixtures/top15_start_NY_2022.csv";
pub const DEFAULT_REDUCED_TRIPS: &str = "fixtures/df_1_reduced_data.csv.gz";
pub const DEFAULT_DAILY: &str = "fixtures/df_daily_trips_temp.csv";
pub const DEFAULT_MAP_HTML: &str = "fixtures/NY_2022_CityBike_Map.html";

/// Paths of the four dashboard inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetPaths {
    pub top_stations: PathBuf,
    pub reduced_trips: PathBuf,
    pub daily: PathBuf,
    pub map_html: PathBuf,
}

impl Default for DatasetPaths {
    fn default() -> Self {
        Self {
            top_stations: PathBuf::from(DEFAULT_TOP_STATIONS),
            reduced_trips: PathBuf::from(DEFAULT_REDUCED_TRIPS),
            daily: PathBuf::from(DEFAULT_DAILY),
            map_html: PathBuf::from(DEFAULT_MAP_HTML),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_into_fixtures() {
        let paths = DatasetPaths::default();
        for path in [&paths.top_stations, &paths.reduced_trips, &paths.daily, &paths.map_html] {
            assert!(path.starts_with("fixtures"), "{}", path.display());
        }
        assert_eq!(paths.reduced_trips.extension().and_then(|e| e.to_str()), Some("gz"));
    }
}
