//! `check`: load every input and report what was found.

use crate::DatasetArgs;
use cbd_pages::Dashboard;
use cbd_utils::dates::{format_date, month_abbrev};
use log::info;

pub fn run_check(args: &DatasetArgs) -> anyhow::Result<()> {
    let paths = args.paths();
    info!("Checking datasets: {:?}", paths);
    let dashboard = Dashboard::load(&paths)?;
    print!("{}", render_check(&dashboard)?);
    Ok(())
}

pub fn render_check(dashboard: &Dashboard) -> anyhow::Result<String> {
    let db = &dashboard.db;
    let counts = db.query_table_counts()?;
    let columns = db.query_reduced_trip_columns()?;
    let seasons: Vec<&str> = db.query_season_options()?.iter().map(|s| s.as_str()).collect();
    let months: Vec<&str> = db
        .query_month_options()?
        .into_iter()
        .filter_map(month_abbrev)
        .collect();

    let mut out = String::new();
    out.push_str(&format!("top stations:   {} rows\n", counts.station_ranking));
    match db.query_daily_span()? {
        Some(span) => out.push_str(&format!(
            "daily:          {} rows, {} .. {}\n",
            span.days,
            format_date(&span.first_date),
            format_date(&span.last_date)
        )),
        None => out.push_str("daily:          0 rows\n"),
    }
    out.push_str(&format!(
        "reduced trips:  {} rows, {} columns\n",
        counts.reduced_trips,
        columns.len()
    ));
    out.push_str(&format!("map document:   {} bytes\n", dashboard.map.len()));
    out.push_str(&format!("seasons:        {}\n", seasons.join(", ")));
    out.push_str(&format!("months:         {}\n", months.join(", ")));
    Ok(out)
}
