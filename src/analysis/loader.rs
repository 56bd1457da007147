use log::{debug, info};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use super::Dataset;
use crate::error::LoadError;
use crate::types::RentalRecord;

/// Required columns and the header names accepted for each.
const REQUIRED_COLUMNS: &[(&str, &[&str])] = &[
    ("dteday", &["dteday", "date"]),
    ("season", &["season"]),
    ("year", &["year", "yr"]),
    ("month", &["month", "mnth"]),
    ("holiday", &["holiday"]),
    ("weekday", &["weekday"]),
    ("workingday", &["workingday"]),
    ("weather_situation", &["weather_situation", "weathersit"]),
    ("casual", &["casual"]),
    ("registered", &["registered"]),
    ("count", &["count", "cnt"]),
];

/// Load the rental dataset from a CSV file.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset, LoadError> {
    let path = path.as_ref();
    let start_time = Instant::now();

    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = Dataset::new(read_records(file)?)?;

    info!(
        "Loaded {} rows ({}) from {} in {}ms",
        dataset.len(),
        dataset.bounds(),
        path.display(),
        start_time.elapsed().as_millis()
    );
    Ok(dataset)
}

/// Parse and validate rental rows from any CSV source.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<RentalRecord>, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    debug!("dataset columns: {:?}", headers);
    check_columns(&headers)?;

    let mut records = Vec::new();
    for row in rdr.deserialize() {
        let record: RentalRecord = row?;
        if record.casual.checked_add(record.registered) != Some(record.count) {
            return Err(LoadError::CountMismatch {
                date: record.date,
                count: record.count,
                casual: record.casual,
                registered: record.registered,
            });
        }
        records.push(record);
    }
    Ok(records)
}

fn check_columns(headers: &csv::StringRecord) -> Result<(), LoadError> {
    for (column, accepted) in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| accepted.contains(&h)) {
            return Err(LoadError::MissingColumn(*column));
        }
    }
    Ok(())
}
