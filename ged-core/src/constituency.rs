use crate::error::{GedError, Result};
use csv::{ReaderBuilder, Trim, WriterBuilder};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Column holding the constituency name.
pub const NAME_COLUMN: &str = "PARLIAMENTARY NAME";
/// Column holding the number of registered electors.
pub const TOTAL_ELECTORS_COLUMN: &str = "TOTAL ELECTORS";
/// Column holding the Malay population share (0-100).
pub const MALAY_COLUMN: &str = "MALAY (%)";
/// Column holding the Chinese population share (0-100).
pub const CHINESE_COLUMN: &str = "CHINESE (%)";

/// The columns kept from the aggregate dataset; everything else is dropped on load.
pub const REQUIRED_COLUMNS: [&str; 4] = [
    NAME_COLUMN,
    TOTAL_ELECTORS_COLUMN,
    MALAY_COLUMN,
    CHINESE_COLUMN,
];

/// Embedded CSV with the ten-constituency sample used by the pie charts
/// and the elector range filter.
pub static SAMPLE_CSV: &str = include_str!("../../fixtures/sample_constituencies.csv");

/// A parliamentary constituency with its elector count and population shares.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ConstituencyRecord {
    #[serde(rename = "PARLIAMENTARY NAME")]
    pub name: String,
    #[serde(rename = "TOTAL ELECTORS")]
    pub total_electors: u64,
    /// Malay population share in percent
    #[serde(rename = "MALAY (%)")]
    pub malay_pct: f64,
    /// Chinese population share in percent
    #[serde(rename = "CHINESE (%)")]
    pub chinese_pct: f64,
}

impl ConstituencyRecord {
    pub fn new(name: &str, total_electors: u64, malay_pct: f64, chinese_pct: f64) -> Self {
        Self {
            name: name.to_string(),
            total_electors,
            malay_pct,
            chinese_pct,
        }
    }
}

/// Parse a CSV string into constituency records.
///
/// The header row is required and columns are matched by name, so the full
/// aggregate dataset (dozens of columns) and the four-column sample both
/// parse the same way. Columns other than [`REQUIRED_COLUMNS`] are ignored.
pub fn parse_constituency_csv(csv_data: &str) -> Result<Vec<ConstituencyRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(csv_data.as_bytes());

    let headers = rdr.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(GedError::MissingColumn(column.to_string()));
        }
    }

    let mut records = Vec::new();
    for result in rdr.deserialize() {
        let record: ConstituencyRecord = result?;
        records.push(record);
    }
    log::debug!("[GED] parsed {} constituency records", records.len());
    Ok(records)
}

/// The fixed ten-row sample, parsed from the embedded fixture.
pub fn sample_constituencies() -> Result<Vec<ConstituencyRecord>> {
    parse_constituency_csv(SAMPLE_CSV)
}

/// Write records as CSV with the standard four-column header.
pub fn write_constituency_csv<W: Write>(records: &[ConstituencyRecord], writer: W) -> Result<()> {
    let mut wtr = WriterBuilder::new().has_headers(true).from_writer(writer);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_has_ten_rows() {
        let sample = sample_constituencies().unwrap();
        assert_eq!(sample.len(), 10);
        assert_eq!(sample[0], ConstituencyRecord::new("BANGI", 303430, 48.43, 36.96));
        assert_eq!(sample[9].name, "PETALING JAYA");
        assert_eq!(sample[9].total_electors, 195148);
    }

    #[test]
    fn extra_columns_are_ignored() {
        let csv = "STATE,PARLIAMENTARY NAME,TOTAL ELECTORS,MALAY (%),CHINESE (%),INDIAN (%)\n\
                   SELANGOR,KLANG,208913,26.65,52.77,19.80\n";
        let records = parse_constituency_csv(csv).unwrap();
        assert_eq!(records, vec![ConstituencyRecord::new("KLANG", 208913, 26.65, 52.77)]);
    }

    #[test]
    fn fields_are_trimmed() {
        let csv = "PARLIAMENTARY NAME, TOTAL ELECTORS ,MALAY (%),CHINESE (%)\n GOMBAK , 206744 ,69.94, 10.86\n";
        let records = parse_constituency_csv(csv).unwrap();
        assert_eq!(records[0].name, "GOMBAK");
        assert_eq!(records[0].total_electors, 206744);
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let csv = "PARLIAMENTARY NAME,TOTAL ELECTORS,MALAY (%)\nBANGI,303430,48.43\n";
        match parse_constituency_csv(csv) {
            Err(GedError::MissingColumn(column)) => assert_eq!(column, "CHINESE (%)"),
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn non_numeric_electors_is_an_error() {
        let csv = "PARLIAMENTARY NAME,TOTAL ELECTORS,MALAY (%),CHINESE (%)\nBANGI,lots,48.43,36.96\n";
        assert!(matches!(
            parse_constituency_csv(csv),
            Err(GedError::CsvParse(_))
        ));
    }

    #[test]
    fn header_only_yields_empty_table() {
        let csv = "PARLIAMENTARY NAME,TOTAL ELECTORS,MALAY (%),CHINESE (%)\n";
        assert!(parse_constituency_csv(csv).unwrap().is_empty());
    }

    #[test]
    fn written_csv_parses_back() {
        let sample = sample_constituencies().unwrap();
        let mut buf = Vec::new();
        write_constituency_csv(&sample[..3], &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("PARLIAMENTARY NAME,TOTAL ELECTORS,MALAY (%),CHINESE (%)"));
        assert_eq!(parse_constituency_csv(&text).unwrap(), sample[..3].to_vec());
    }
}
