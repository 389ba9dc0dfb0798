//! Static narrative panels for each page.

use serde::Serialize;

/// One narrative element. `**` marks bold runs inside text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Block {
    Heading(u8, &'static str),
    Paragraph(&'static str),
    Bullet(&'static str),
    Image {
        src: &'static str,
        alt: &'static str,
        width: u32,
    },
}

pub const STATIONS_HEADER: &str = "Most popular Citi Bike start stations in 2022";
pub const WEATHER_HEADER: &str = "Weather component and bike usage";
pub const MAP_HEADER: &str = "Interactive map with aggregated bike trips";
pub const MAP_CAPTION: &str = "CitiBike Trips in New York in 2022";
pub const RECOMMENDATIONS_HEADER: &str = "Conclusion and Recommendations";

pub const SEASON_FILTER_LABEL: &str = "Select the season";
pub const MONTH_FILTER_LABEL: &str = "Select the month";
pub const SEASON_METRIC_LABEL: &str = "Total Bike Trips per season";
pub const MONTH_METRIC_LABEL: &str = "Total Bike Trips per month";

/// Height of the embedded map viewport in pixels.
pub const MAP_VIEWPORT_HEIGHT: u32 = 900;

pub const INTRO: &[Block] = &[
    Block::Image {
        src: "assets/CitiBike_pic_6.png",
        alt: "Citi Bike logo",
        width: 300,
    },
    Block::Heading(
        4,
        "Dashboard explores CitiBike's company usage patterns in 2022 to reveal when and where \
         imbalances occur, helping identify opportunities to improve distribution efficiency and \
         enhance the overall rider experience.",
    ),
    Block::Heading(5, "Who is Citi Bike?"),
    Block::Paragraph(
        "**Citi Bike** - New York City's flagship bike-sharing program, offering residents and \
         visitors a fast, sustainable alternative to traditional transportation. **Since its \
         launch in 2013**, the system has expanded into one of the largest in the world, serving \
         Manhattan, Brooklyn, Queens, and parts of the Bronx with thousands of bikes and docking \
         stations. **As ridership continues to grow, so do the operational challenges: stations \
         frequently run empty in high-demand areas while others remain full, limiting users \
         ability to pick up or return bikes**.",
    ),
    Block::Image {
        src: "assets/CitiBike_pic_1.jpg",
        alt: "Citi Bike docking station",
        width: 1000,
    },
    Block::Paragraph(
        "The **purpose** of this project is to pinpoint the operational bottlenecks that lead to \
         bike shortages and station imbalances, helping decision-makers quickly identify \
         distribution bottlenecks and guide strategic improvements to bike availability across \
         New York City.",
    ),
    Block::Heading(5, "Dashboard consist next **sections**:"),
    Block::Bullet("**Most popular stations**"),
    Block::Bullet("**Weather component and bike usage**"),
    Block::Bullet("**Interactive map with aggregated bike trips**"),
    Block::Bullet("**Recommendations**"),
    Block::Image {
        src: "assets/CitiBike_pic_2.jpg",
        alt: "Citi Bike riders",
        width: 1000,
    },
    Block::Paragraph(
        "For analysis were used the Citi Bike database for 2022 \
         (https://s3.amazonaws.com/tripdata/index.html) and NOAA's weather data \
         (https://www.noaa.gov/).",
    ),
];

pub const STATIONS_INSIGHTS: &[Block] = &[
    Block::Paragraph(
        "The bar chart highlights the start stations with the highest bike-trip volumes, showing \
         a strong concentration of activity at a small number of central locations.",
    ),
    Block::Paragraph(
        "**Most popular starting points** in NY in 2022 (**W 21 St & 6 Ave**, **1 Ave & E 68 St**, \
         **Broadway & W 58 St**, and **West St & Chambers St**) stand out clearly (marked by blue \
         color), with significantly taller bars than the rest.",
    ),
    Block::Paragraph(
        "This contrast underscores how heavily riders rely on a few key departure stations, \
         particularly in **central Manhattan, where these stations consistently generate the \
         highest volumes of Citi Bike trips**.",
    ),
    Block::Paragraph(
        "To further explore these patterns, please use the interactive map available through the \
         sidebar selection box.",
    ),
];

pub const WEATHER_INSIGHTS: &[Block] = &[
    Block::Paragraph(
        "This dual-axis line chart demonstrates a strong, temperature-driven pattern in bike \
         usage: **as temperatures rise, daily ridership increases**, and **as temperatures fall, \
         usage drops sharply**.",
    ),
    Block::Paragraph(
        "This indicates that **Citi Bike shortages are primarily a warm-season issue**, \
         concentrated between **May and October**.",
    ),
    Block::Paragraph(
        "Across many cities, and reflected in this dataset, summer ridership reaches peak levels \
         (around 100%), while winter usage typically falls to **30-50%** of that peak, depending \
         on weather conditions and holiday periods.",
    ),
];

pub const MAP_INSIGHTS: &[Block] = &[
    Block::Paragraph(
        "The Kepler map visualizes Citi Bike start stations (depicted as green dots), and end \
         stations (blue dots). Connection color intensity reflects route popularity: brighter \
         (yellow) indicate more trips, while darker (violet) represents fewer trips.",
    ),
    Block::Heading(
        4,
        "By using the filter on the left-hand side of the map, you can check whether the most \
         popular start stations also appear in the most frequently traveled routes. Map \
         demonstrate that:",
    ),
    Block::Bullet("**The densest clusters appear in Midtown and Lower Manhattan, driven by commuter flows and tourism.**"),
    Block::Bullet("**Strong recreational patterns are visible around Central Park and the Hudson River Greenway.**"),
    Block::Bullet("**Route density drops sharply outside Manhattan due to lower station density and less bike infrastructure.**"),
    Block::Bullet("**Outer boroughs (Queens, Bronx, deeper Brooklyn) show far fewer connections.**"),
    Block::Bullet("**Jersey City and Roosevelt Island appear as small, isolated pockets of activity.**"),
    Block::Bullet("**Overall, the map shows that Citi Bike demand is highly concentrated in Manhattan's core, with short, repetitive, high-volume trips.**"),
    Block::Bullet("**These patterns suggest that Citi Bike rebalancing and fleet distribution should prioritize central Manhattan and the highlighted corridors.**"),
];

pub const RECOMMENDATIONS: &[Block] = &[
    Block::Image {
        src: "assets/CitiBike_pic_4.jpg",
        alt: "Citi Bike fleet",
        width: 500,
    },
    Block::Heading(
        4,
        "The analysis indicates that Citi Bike should prioritize the following strategic \
         objectives moving forward:",
    ),
    Block::Heading(5, "🚲 Increase docking capacity at top stations to reduce congestion and ensure bikes are consistently available."),
    Block::Heading(5, "🔄 Implement dynamic bike rebalancing, especially during morning and evening peak hours when demand shifts rapidly."),
    Block::Heading(5, "❄️ Adjust docking stations space seasonally: stations don't need to be fully stocked during winter months."),
    Block::Heading(5, "🌞 Plan for seasonal surges: waterfront and leisure-area demand spikes in warm months, so use modular stations that can scale up for summer."),
    Block::Heading(5, "📈 Stock bikes more heavily in warmer months to meet higher demand, and reduce supply in winter and late autumn to lower logistics costs."),
    Block::Heading(5, "🚨 Use automated alerts to dispatch rebalancing crews when station levels cross critical thresholds."),
    Block::Image {
        src: "assets/CitiBike_pic_5.png",
        alt: "Citi Bike station at night",
        width: 500,
    },
];

/// Split text on `**` markers into `(is_bold, run)` pairs, dropping empty runs.
pub fn bold_runs(text: &str) -> Vec<(bool, &str)> {
    text.split("**")
        .enumerate()
        .filter(|(_, run)| !run.is_empty())
        .map(|(i, run)| (i % 2 == 1, run))
        .collect()
}

/// Text with the bold markers removed.
pub fn plain_text(text: &str) -> String {
    text.replace("**", "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_runs() {
        let runs = bold_runs("The **purpose** of this");
        assert_eq!(runs, vec![(false, "The "), (true, "purpose"), (false, " of this")]);
        assert_eq!(bold_runs("**all bold**"), vec![(true, "all bold")]);
        assert!(bold_runs("").is_empty());
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(plain_text("**Citi Bike** - program"), "Citi Bike - program");
    }

    #[test]
    fn test_bold_markers_are_balanced() {
        for blocks in [INTRO, STATIONS_INSIGHTS, WEATHER_INSIGHTS, MAP_INSIGHTS, RECOMMENDATIONS] {
            for block in blocks {
                let text = match block {
                    Block::Heading(_, t) | Block::Paragraph(t) | Block::Bullet(t) => t,
                    Block::Image { .. } => continue,
                };
                assert_eq!(text.matches("**").count() % 2, 0, "unbalanced: {}", text);
            }
        }
    }
}
