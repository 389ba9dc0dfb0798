//! Shared utility functions for CBD crates.

/// Date utility functions
pub mod dates {
    use anyhow::{anyhow, bail};
    use chrono::{NaiveDate, NaiveDateTime};

    /// Month abbreviations used for chart tick labels (`%b`).
    pub const MONTH_ABBREVIATIONS: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];

    const MONTH_NAMES: [&str; 12] = [
        "january",
        "february",
        "march",
        "april",
        "may",
        "june",
        "july",
        "august",
        "september",
        "october",
        "november",
        "december",
    ];

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format.
    ///
    /// Timestamps written by dataframe exports ("YYYY-MM-DD HH:MM:SS" or the
    /// ISO `T` form) are accepted as well; the time part is dropped.
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        let s = s.trim();
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(date);
        }
        for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
                return Ok(dt.date());
            }
        }
        Err(anyhow!("invalid date '{}', expected YYYY-MM-DD", s))
    }

    /// Three-letter abbreviation for a month number (1 = "Jan").
    pub fn month_abbrev(month: u32) -> Option<&'static str> {
        match month {
            1..=12 => Some(MONTH_ABBREVIATIONS[(month - 1) as usize]),
            _ => None,
        }
    }

    /// Parse a month given as a number (1-12), a full English name or a
    /// three-letter abbreviation. Case-insensitive.
    pub fn parse_month(s: &str) -> anyhow::Result<u32> {
        let s = s.trim();
        if let Ok(n) = s.parse::<u32>() {
            if (1..=12).contains(&n) {
                return Ok(n);
            }
            bail!("month {} out of range 1-12", n);
        }
        // Dataframe exports sometimes write integer columns as floats.
        if let Some(n) = s.strip_suffix(".0").and_then(|n| n.parse::<u32>().ok()) {
            if (1..=12).contains(&n) {
                return Ok(n);
            }
        }
        let lower = s.to_ascii_lowercase();
        MONTH_NAMES
            .iter()
            .position(|name| *name == lower || (lower.len() == 3 && name.starts_with(&lower)))
            .map(|i| i as u32 + 1)
            .ok_or_else(|| anyhow!("invalid month '{}'", s))
    }

}

/// Formatting of the headline trip metrics.
pub mod metrics {
    /// Format a trip total in millions with two decimals and a comma as the
    /// decimal separator, e.g. `2_354_000.0` -> `"2,35M"`.
    pub fn format_millions(total: f64) -> String {
        format!("{:.2}M", total / 1_000_000.0).replace('.', ",")
    }

    #[cfg(test)]
    mod tests {
        use super::format_millions;

        #[test]
        fn test_format_millions() {
            assert_eq!(format_millions(2_354_000.0), "2,35M");
            assert_eq!(format_millions(29_838_806.0), "29,84M");
            assert_eq!(format_millions(0.0), "0,00M");
        }

        #[test]
        fn test_small_totals_round_to_zero() {
            assert_eq!(format_millions(500.0), "0,00M");
            assert_eq!(format_millions(4_999.0), "0,00M");
            assert_eq!(format_millions(5_001.0), "0,01M");
        }
    }
}
