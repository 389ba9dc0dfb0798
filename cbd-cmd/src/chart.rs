//! `chart`: dump a chart specification as JSON.

use crate::{ChartKind, DatasetArgs};
use anyhow::Context;
use cbd_chart::bar::build_station_bar_chart;
use cbd_chart::dual_axis::build_trips_temperature_chart;
use cbd_pages::Dashboard;
use log::info;
use std::path::Path;

pub fn run_chart(args: &DatasetArgs, kind: ChartKind, output: Option<&Path>) -> anyhow::Result<()> {
    let dashboard = args.load()?;
    let json = chart_json(&dashboard, kind)?;
    match output {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("failed to write chart to {}", path.display()))?;
            info!("Chart written to {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

/// Pretty-printed spec of the requested chart, built from the full tables.
pub fn chart_json(dashboard: &Dashboard, kind: ChartKind) -> anyhow::Result<String> {
    let json = match kind {
        ChartKind::Bar => {
            let spec = build_station_bar_chart(&dashboard.db.query_top_stations()?);
            serde_json::to_string_pretty(&spec)?
        }
        ChartKind::Weather => {
            let spec = build_trips_temperature_chart(&dashboard.db.query_daily_series()?);
            serde_json::to_string_pretty(&spec)?
        }
    };
    Ok(json)
}
