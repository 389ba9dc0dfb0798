//! Command implementations for the Citi Bike dashboard CLI.
//!
//! Every subcommand loads the four dashboard inputs from disk, builds the
//! same in-memory store the web dashboard uses, and prints a plain-text or
//! JSON rendition of it.

use cbd_data::config::{
    DatasetPaths, DAILY_ENV, DEFAULT_DAILY, DEFAULT_MAP_HTML, DEFAULT_REDUCED_TRIPS,
    DEFAULT_TOP_STATIONS, MAP_HTML_ENV, REDUCED_TRIPS_ENV, TOP_STATIONS_ENV,
};
use cbd_data::season::Season;
use cbd_pages::{Dashboard, FilterSelection};
use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

pub mod chart;
pub mod check;
pub mod page;
pub mod summary;

/// Locations of the dashboard inputs. Flags win over `CBD_*` variables.
#[derive(Args, Debug, Clone)]
pub struct DatasetArgs {
    /// Top-15 start stations CSV
    #[arg(long, env = TOP_STATIONS_ENV, default_value = DEFAULT_TOP_STATIONS)]
    pub top_stations: PathBuf,

    /// Reduced trip sample CSV (plain or gzip-compressed)
    #[arg(long, env = REDUCED_TRIPS_ENV, default_value = DEFAULT_REDUCED_TRIPS)]
    pub reduced_trips: PathBuf,

    /// Daily trips and temperature CSV
    #[arg(long, env = DAILY_ENV, default_value = DEFAULT_DAILY)]
    pub daily: PathBuf,

    /// Prebuilt interactive map HTML document
    #[arg(long, env = MAP_HTML_ENV, default_value = DEFAULT_MAP_HTML)]
    pub map_html: PathBuf,
}

impl DatasetArgs {
    pub fn paths(&self) -> DatasetPaths {
        DatasetPaths {
            top_stations: self.top_stations.clone(),
            reduced_trips: self.reduced_trips.clone(),
            daily: self.daily.clone(),
            map_html: self.map_html.clone(),
        }
    }

    pub fn load(&self) -> anyhow::Result<Dashboard> {
        Dashboard::load(&self.paths())
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Top start stations bar chart
    Bar,
    /// Daily trips and temperature dual-axis chart
    Weather,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the season and month trip totals for a filter selection
    Summary {
        #[command(flatten)]
        datasets: DatasetArgs,

        /// Season to select (repeatable); defaults to every season in the data
        #[arg(long = "season", value_parser = parse_season_arg)]
        seasons: Vec<Season>,

        /// Month to select as a number or name (repeatable); defaults to every month
        #[arg(long = "month", value_parser = parse_month_arg)]
        months: Vec<u32>,
    },

    /// Write a chart specification as JSON
    Chart {
        #[command(flatten)]
        datasets: DatasetArgs,

        #[arg(value_enum)]
        kind: ChartKind,

        /// Output path; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Load every input and report what was found
    Check {
        #[command(flatten)]
        datasets: DatasetArgs,
    },

    /// Render one dashboard page as plain text
    Page {
        #[command(flatten)]
        datasets: DatasetArgs,

        /// Page label (e.g. "Weather component and bike usage") or short name (e.g. "weather")
        page: String,
    },
}

fn parse_season_arg(s: &str) -> Result<Season, String> {
    s.parse::<Season>().map_err(|e| e.to_string())
}

fn parse_month_arg(s: &str) -> Result<u32, String> {
    cbd_utils::dates::parse_month(s).map_err(|e| e.to_string())
}

/// Empty selections fall back to every option present in the data.
pub fn selection_or_all(
    dashboard: &Dashboard,
    seasons: Vec<Season>,
    months: Vec<u32>,
) -> anyhow::Result<FilterSelection> {
    let all = dashboard.default_filters()?;
    Ok(FilterSelection {
        seasons: if seasons.is_empty() { all.seasons } else { seasons },
        months: if months.is_empty() { all.months } else { months },
    })
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Summary {
            datasets,
            seasons,
            months,
        } => summary::run_summary(&datasets, seasons, months),
        Command::Chart {
            datasets,
            kind,
            output,
        } => chart::run_chart(&datasets, kind, output.as_deref()),
        Command::Check { datasets } => check::run_check(&datasets),
        Command::Page { datasets, page } => page::run_page(&datasets, &page),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use cbd_data::loader::Datasets;
    use cbd_pages::Dashboard;

    pub const MAP_HTML: &str = "<html><body><div id=\"map\"></div></body></html>";

    pub fn sample_dashboard() -> Dashboard {
        let datasets = Datasets::from_sources(
            ",start_station_name,value\n\
             0,W 21 St & 6 Ave,129016\n\
             1,1 Ave & E 68 St,118000\n",
            b",ride_id,rideable_type\n0,A1,classic_bike\n1,B2,electric_bike\n",
            "date,bike_rides_daily,avgTemp,Season,month\n\
             2022-01-01,1000000,2.0,Winter,1\n\
             2022-01-02,500000,3.0,Winter,1\n\
             2022-07-01,2000000,28.0,Summer,7\n\
             2022-10-01,750000,15.0,Fall,10\n",
            MAP_HTML,
        )
        .unwrap();
        Dashboard::from_datasets(&datasets).unwrap()
    }
}
