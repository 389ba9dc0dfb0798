//! Header lookup and cell parsing shared by the CSV loaders.
//!
//! The upstream tables are dataframe exports: they carry a leading index
//! column (often with an empty header) and may write integer columns as
//! floats (`1234.0`).

use anyhow::{anyhow, bail};
use csv::StringRecord;

/// Find the first header matching any of `names` (exact match after trimming).
pub fn find_column(headers: &StringRecord, names: &[&str]) -> Option<usize> {
    names
        .iter()
        .find_map(|name| headers.iter().position(|h| h.trim() == *name))
}

/// Like [`find_column`] but fails with the accepted names when nothing matches.
pub fn require_column(headers: &StringRecord, names: &[&str]) -> anyhow::Result<usize> {
    find_column(headers, names).ok_or_else(|| {
        anyhow!(
            "missing column (expected one of: {}), found headers: {}",
            names.join(", "),
            headers.iter().collect::<Vec<_>>().join(", ")
        )
    })
}

/// Get a trimmed cell or fail naming the column.
pub fn cell<'a>(record: &'a StringRecord, index: usize, column: &str) -> anyhow::Result<&'a str> {
    record
        .get(index)
        .map(str::trim)
        .ok_or_else(|| anyhow!("row has no '{}' cell", column))
}

/// Parse a non-negative count written either as an integer or an integral float.
pub fn parse_count(s: &str) -> anyhow::Result<u64> {
    let s = s.trim();
    if let Ok(n) = s.parse::<u64>() {
        return Ok(n);
    }
    match s.parse::<f64>() {
        Ok(f) if f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 => Ok(f as u64),
        Ok(_) => bail!("'{}' is not a non-negative whole number", s),
        Err(_) => bail!("invalid count '{}'", s),
    }
}

/// Line number of a record for error messages (1-based, header is line 1).
pub fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_column_prefers_first_name() {
        let headers = StringRecord::from(vec!["", "trip_count", "bike_rides_daily"]);
        assert_eq!(find_column(&headers, &["bike_rides_daily", "trip_count"]), Some(2));
        assert_eq!(find_column(&headers, &["avgTemp"]), None);
    }

    #[test]
    fn test_require_column_reports_expected_names() {
        let headers = StringRecord::from(vec!["a", "b"]);
        let err = require_column(&headers, &["value", "trip_count"]).unwrap_err();
        assert!(err.to_string().contains("value, trip_count"));
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("1234").unwrap(), 1234);
        assert_eq!(parse_count("1234.0").unwrap(), 1234);
        assert!(parse_count("12.5").is_err());
        assert!(parse_count("-3").is_err());
        assert!(parse_count("abc").is_err());
    }
}
