//! `summary`: the two headline metrics of the stations page.

use crate::{selection_or_all, DatasetArgs};
use cbd_data::season::Season;
use cbd_pages::content::{MONTH_METRIC_LABEL, SEASON_METRIC_LABEL};
use cbd_pages::filters::working_view;
use cbd_pages::{Dashboard, FilterSelection, StationMetrics};
use cbd_utils::dates::month_abbrev;
use log::info;

pub fn run_summary(args: &DatasetArgs, seasons: Vec<Season>, months: Vec<u32>) -> anyhow::Result<()> {
    let dashboard = args.load()?;
    let selection = selection_or_all(&dashboard, seasons, months)?;
    info!(
        "Summarising {} season(s) and {} month(s)",
        selection.seasons.len(),
        selection.months.len()
    );
    print!("{}", render_summary(&dashboard, &selection)?);
    Ok(())
}

pub fn render_summary(dashboard: &Dashboard, selection: &FilterSelection) -> anyhow::Result<String> {
    let metrics = StationMetrics::compute(&dashboard.db, selection)?;
    let counts = dashboard.db.query_table_counts()?;
    let view = working_view(&dashboard.db, selection)?;

    let seasons: Vec<&str> = selection.seasons.iter().map(|s| s.as_str()).collect();
    let months: Vec<&str> = selection
        .months
        .iter()
        .filter_map(|m| month_abbrev(*m))
        .collect();

    let mut out = String::new();
    out.push_str(&format!("Seasons: {}\n", seasons.join(", ")));
    out.push_str(&format!("Months:  {}\n", months.join(", ")));
    out.push_str(&format!(
        "{}: {} ({} trips)\n",
        SEASON_METRIC_LABEL, metrics.season_text, metrics.season_total
    ));
    out.push_str(&format!(
        "{}: {} ({} trips)\n",
        MONTH_METRIC_LABEL, metrics.month_text, metrics.month_total
    ));
    out.push_str(&format!("Working view: {} days\n", view.len()));
    out.push_str(&format!(
        "Rows: {} stations, {} days, {} sampled trips\n",
        counts.station_ranking, counts.daily_aggregates, counts.reduced_trips
    ));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_dashboard;

    #[test]
    fn test_summary_uses_each_filter_separately() {
        let dashboard = sample_dashboard();
        let selection = FilterSelection {
            seasons: vec![Season::Winter],
            months: vec![7],
        };
        let text = render_summary(&dashboard, &selection).unwrap();
        assert!(text.contains("Total Bike Trips per season: 1,50M (1500000 trips)"));
        assert!(text.contains("Total Bike Trips per month: 2,00M (2000000 trips)"));
        assert!(text.contains("Months:  Jul"));
        assert!(text.contains("Working view: 1 days"));
        assert!(text.contains("Rows: 2 stations, 4 days, 2 sampled trips"));
    }

    #[test]
    fn test_summary_empty_selection_is_zero() {
        let dashboard = sample_dashboard();
        let text = render_summary(&dashboard, &FilterSelection::default()).unwrap();
        assert!(text.contains("per season: 0,00M (0 trips)"));
        assert!(text.contains("per month: 0,00M (0 trips)"));
    }
}
