//! `page`: render one dashboard page as plain text.

use crate::DatasetArgs;
use cbd_pages::content::{plain_text, Block, MONTH_METRIC_LABEL, SEASON_METRIC_LABEL};
use cbd_pages::filters::FilterControl;
use cbd_pages::page::DASHBOARD_TITLE;
use cbd_pages::{render, Dashboard, FilterSelection, Page, PageView};

pub fn run_page(args: &DatasetArgs, label: &str) -> anyhow::Result<()> {
    let page: Page = label.parse()?;
    let dashboard = args.load()?;
    let filters = dashboard.default_filters()?;
    print!("{}", render_page_text(page, &dashboard, &filters)?);
    Ok(())
}

pub fn render_page_text(page: Page, dashboard: &Dashboard, filters: &FilterSelection) -> anyhow::Result<String> {
    let view = render(page, dashboard, filters)?;
    let mut out = format!("{}\n\n", DASHBOARD_TITLE);

    for control in view.filter_controls() {
        push_filter(&mut out, control);
    }

    match &view {
        PageView::Intro { blocks } => push_blocks(&mut out, blocks),
        PageView::Stations(stations) => {
            out.push_str(&format!("## {}\n\n", stations.header));
            out.push_str(&format!("{}: {}\n", SEASON_METRIC_LABEL, stations.metrics.season_text));
            out.push_str(&format!("{}: {}\n\n", MONTH_METRIC_LABEL, stations.metrics.month_text));
            out.push_str(&format!("[chart] {}\n", stations.chart.title));
            let categories = stations.chart.categories();
            let width = categories.iter().map(|c| c.chars().count()).max().unwrap_or(0);
            for (label, bar) in categories.iter().zip(&stations.chart.bars) {
                out.push_str(&format!("  {:<width$}  {:>10}\n", label, bar.value, width = width));
            }
            out.push('\n');
            push_blocks(&mut out, stations.insights);
        }
        PageView::Weather(weather) => {
            out.push_str(&format!("## {}\n\n", weather.header));
            out.push_str(&format!("[chart] {}\n", weather.chart.title));
            for series in &weather.chart.series {
                out.push_str(&format!("  {} ({} points)\n", series.name, series.points.len()));
            }
            out.push('\n');
            push_blocks(&mut out, weather.insights);
        }
        PageView::Map(map) => {
            out.push_str(&format!("## {}\n\n", map.header));
            out.push_str(&format!("{}\n", map.caption));
            out.push_str(&format!("[map] {} bytes, {}px viewport\n\n", map.html.len(), map.height));
            push_blocks(&mut out, map.insights);
        }
        PageView::Recommendations { header, blocks } => {
            out.push_str(&format!("## {}\n\n", header));
            push_blocks(&mut out, blocks);
        }
    }
    Ok(out)
}

fn push_filter(out: &mut String, control: &FilterControl) {
    let selected: Vec<&str> = control
        .options
        .iter()
        .filter(|o| o.selected)
        .map(|o| o.label.as_str())
        .collect();
    out.push_str(&format!("{}: {}\n", control.label, selected.join(", ")));
}

fn push_blocks(out: &mut String, blocks: &[Block]) {
    for block in blocks {
        match block {
            Block::Heading(level, text) => {
                out.push_str(&format!("{} {}\n\n", "#".repeat(*level as usize), plain_text(text)))
            }
            Block::Paragraph(text) => out.push_str(&format!("{}\n\n", plain_text(text))),
            Block::Bullet(text) => out.push_str(&format!("- {}\n", plain_text(text))),
            Block::Image { alt, .. } => out.push_str(&format!("[image: {}]\n\n", alt)),
        }
    }
}
