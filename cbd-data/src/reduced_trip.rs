use anyhow::Context;
use csv::ReaderBuilder;
use flate2::read::MultiGzDecoder;
use serde::Serialize;
use std::io::Read;

/// Leading bytes of a gzip stream.
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// One row of the reduced per-trip table.
///
/// No chart consumes these rows; they are kept as raw cells.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct ReducedTripRow {
    /// Value of the dataframe index column.
    pub index: String,
    pub values: Vec<String>,
}

/// The reduced per-trip table with its column names (index column excluded).
#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize)]
pub struct ReducedTripTable {
    pub headers: Vec<String>,
    pub rows: Vec<ReducedTripRow>,
}

impl ReducedTripTable {
    /// Parse the table from raw file bytes, gunzipping first when the bytes
    /// start with the gzip magic number.
    pub fn from_bytes(bytes: &[u8]) -> anyhow::Result<ReducedTripTable> {
        if is_gzip(bytes) {
            let mut decoded = Vec::new();
            MultiGzDecoder::new(bytes)
                .read_to_end(&mut decoded)
                .context("failed to decompress reduced trips table")?;
            Self::parse_reduced_trip_csv(&decoded)
        } else {
            Self::parse_reduced_trip_csv(bytes)
        }
    }

    /// Parse plain CSV bytes. Every row must have as many cells as the header.
    pub fn parse_reduced_trip_csv(csv_bytes: &[u8]) -> anyhow::Result<ReducedTripTable> {
        let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(csv_bytes);
        let headers: Vec<String> = rdr
            .headers()?
            .iter()
            .skip(1)
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for result in rdr.records() {
            let record = result?;
            let mut cells = record.iter();
            let index = cells.next().unwrap_or("").trim().to_string();
            rows.push(ReducedTripRow {
                index,
                values: cells.map(|c| c.to_string()).collect(),
            });
        }
        log::info!(
            "[CBD] loader: parsed {} reduced trip rows ({} columns)",
            rows.len(),
            headers.len()
        );
        Ok(ReducedTripTable { headers, rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub fn is_gzip(bytes: &[u8]) -> bool {
    bytes.starts_with(&GZIP_MAGIC)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    const TRIPS: &str = "\
,ride_id,start_station_name,end_station_name,member_casual
0,A1,W 21 St & 6 Ave,1 Ave & E 68 St,member
1,B2,Broadway & W 58 St,West St & Chambers St,casual
";

    fn gzip(data: &[u8]) -> Vec<u8> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data).unwrap();
        encoder.finish().unwrap()
    }

    #[test]
    fn test_parse_plain_csv() {
        let table = ReducedTripTable::from_bytes(TRIPS.as_bytes()).unwrap();
        assert_eq!(table.headers.len(), 4);
        assert_eq!(table.headers[0], "ride_id");
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[1].index, "1");
        assert_eq!(table.rows[1].values[3], "casual");
    }

    #[test]
    fn test_parse_gzip_csv() {
        let compressed = gzip(TRIPS.as_bytes());
        assert!(is_gzip(&compressed));
        let table = ReducedTripTable::from_bytes(&compressed).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0].values[0], "A1");
    }

    #[test]
    fn test_ragged_row_fails() {
        let csv_data = ",a,b\n0,1,2\n1,1\n";
        assert!(ReducedTripTable::from_bytes(csv_data.as_bytes()).is_err());
    }
}
