//! Error types for loading, configuration and chart rendering.

use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while reading the rental dataset. All of them are fatal.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed dataset: {0}")]
    Csv(#[from] csv::Error),
    #[error("dataset is missing required column `{0}`")]
    MissingColumn(&'static str),
    #[error("row {date}: count {count} != casual {casual} + registered {registered}")]
    CountMismatch {
        date: NaiveDate,
        count: u64,
        casual: u64,
        registered: u64,
    },
    #[error("date {0} appears more than once")]
    DuplicateDate(NaiveDate),
    #[error("dataset contains no rows")]
    Empty,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown locale `{0}` (expected `en` or `id`)")]
    UnknownLocale(String),
}

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("drawing failed: {0}")]
    Drawing(String),
    #[error("pixel buffer does not match {width}x{height}")]
    BufferSize { width: u32, height: u32 },
    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
