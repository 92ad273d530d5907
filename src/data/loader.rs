use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::StringRecord;
use serde::Deserialize;
use thiserror::Error;

use super::model::{Dataset, Record};

/// Format of the `date_col` column.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Header names every input file must carry.
pub const REQUIRED_COLUMNS: [&str; 5] = ["date_col", "VOM_CAT", "agency_name", "trips_num", "VRM"];

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Anything that stops the dataset from loading. All of these are fatal.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("opening {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("reading CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV missing '{0}' column")]
    MissingColumn(&'static str),

    #[error("line {line}: '{value}' is not a YYYY-MM-DD date")]
    InvalidDate { line: u64, value: String },

    #[error("line {line}: {column} = {value} is not a non-negative number")]
    InvalidValue {
        line: u64,
        column: &'static str,
        value: f64,
    },

    #[error("line {line}: '{column}' is empty")]
    EmptyField { line: u64, column: &'static str },

    #[error("dataset has no rows")]
    Empty,
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the monthly dataset from a CSV file.
pub fn load_file(path: &Path) -> Result<Dataset, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_reader(file)
}

/// Load the monthly dataset from any CSV source.
///
/// Expected layout (extra columns are ignored):
///
/// ```text
/// date_col,VOM_CAT,agency_name,trips_num,VRM
/// 2010-01-01,50-200 peak vehicles,City of Tallahassee,412345,198765.5
/// ```
///
/// The whole load is rejected on the first bad row.
pub fn load_reader<R: Read>(source: R) -> Result<Dataset, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    ensure_required_columns(&headers)?;

    let mut records = Vec::new();
    let mut row = StringRecord::new();
    while reader.read_record(&mut row)? {
        let line = row.position().map_or(0, |p| p.line());
        let raw: RawRow = row.deserialize(Some(&headers))?;
        records.push(raw.validate(line)?);
    }

    Dataset::from_records(records)
}

fn ensure_required_columns(headers: &StringRecord) -> Result<(), LoadError> {
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn(column));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Row validation
// ---------------------------------------------------------------------------

/// A CSV row as it appears on disk, before validation.
#[derive(Debug, Deserialize)]
struct RawRow {
    date_col: String,
    #[serde(rename = "VOM_CAT")]
    category: String,
    agency_name: String,
    trips_num: f64,
    #[serde(rename = "VRM")]
    vrm: f64,
}

impl RawRow {
    fn validate(self, line: u64) -> Result<Record, LoadError> {
        let date = NaiveDate::parse_from_str(&self.date_col, DATE_FORMAT).map_err(|_| {
            LoadError::InvalidDate {
                line,
                value: self.date_col.clone(),
            }
        })?;

        if self.category.is_empty() {
            return Err(LoadError::EmptyField { line, column: "VOM_CAT" });
        }
        if self.agency_name.is_empty() {
            return Err(LoadError::EmptyField { line, column: "agency_name" });
        }

        Ok(Record {
            date,
            category: self.category,
            agency_name: self.agency_name,
            trips: non_negative(self.trips_num, line, "trips_num")?,
            vehicle_revenue_miles: non_negative(self.vrm, line, "VRM")?,
        })
    }
}

fn non_negative(value: f64, line: u64, column: &'static str) -> Result<f64, LoadError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(LoadError::InvalidValue { line, column, value })
    }
}
