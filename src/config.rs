//! Dashboard configuration: input path, display strings and chart sizes.
//!
//! Everything here used to be hardcoded in the report script. A config file only
//! needs to name the keys it changes; the rest falls back to [`Config::default`].

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

pub const DEFAULT_DATA_PATH: &str = "data/clean_day.csv";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data_path: PathBuf,
    pub locale: Labels,
    pub chart: ChartSize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            locale: Labels::default(),
            chart: ChartSize::default(),
        }
    }
}

impl Config {
    /// Read a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Pixel size of one chart panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSize {
    pub width: u32,
    pub height: u32,
}

impl Default for ChartSize {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 480,
        }
    }
}

/// User-facing strings of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub title: String,
    pub filter_heading: String,
    pub start_date: String,
    pub end_date: String,
    pub reset: String,
    pub daily_heading: String,
    pub casual_metric: String,
    pub registered_metric: String,
    pub total_metric: String,
    pub monthly_heading: String,
    pub monthly_title: String,
    pub season_heading: String,
    pub season_title: String,
    pub registered_series: String,
    pub casual_series: String,
    pub weather_heading: String,
    pub weather_title: String,
    pub holiday_weekday_heading: String,
    pub holiday_title: String,
    pub weekday_title: String,
    pub empty_range: String,
    /// Axis labels for January..December
    pub month_names: Vec<String>,
    /// Footer line; omitted when empty
    pub caption: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self::english()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Labels {
    pub fn english() -> Self {
        Self {
            title: "Bike Rental Dashboard".into(),
            filter_heading: "Date Range".into(),
            start_date: "From".into(),
            end_date: "To".into(),
            reset: "Full range".into(),
            daily_heading: "Daily Rentals".into(),
            casual_metric: "Casual User".into(),
            registered_metric: "Registered User".into(),
            total_metric: "Total User".into(),
            monthly_heading: "Monthly Rentals".into(),
            monthly_title: "Bikes rented by month and year".into(),
            season_heading: "Rentals by Season".into(),
            season_title: "Rentals per season by user type".into(),
            registered_series: "Registered".into(),
            casual_series: "Casual".into(),
            weather_heading: "Rentals by Weather".into(),
            weather_title: "Rentals per weather situation".into(),
            holiday_weekday_heading: "Holiday and Rentals by Day".into(),
            holiday_title: "Number of Rents based on Holiday".into(),
            weekday_title: "Number of Rents based on Weekday".into(),
            empty_range: "No rentals in the selected range".into(),
            month_names: strings(&[
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ]),
            caption: String::new(),
        }
    }

    pub fn indonesian() -> Self {
        Self {
            title: "Dasbor Penyewaan Sepeda".into(),
            filter_heading: "Rentang Waktu".into(),
            start_date: "Dari".into(),
            end_date: "Sampai".into(),
            reset: "Semua tanggal".into(),
            daily_heading: "Penyewaan Harian".into(),
            casual_metric: "Pengguna Kasual".into(),
            registered_metric: "Pengguna Terdaftar".into(),
            total_metric: "Total Pengguna".into(),
            monthly_heading: "Penyewaan Bulanan".into(),
            monthly_title: "Jumlah sepeda yang disewakan berdasarkan Bulan dan tahun".into(),
            season_heading: "Penyewaan per Musim".into(),
            season_title: "Jumlah penyewaan per musim berdasarkan jenis pengguna".into(),
            registered_series: "Terdaftar".into(),
            casual_series: "Kasual".into(),
            weather_heading: "Penyewaan berdasarkan Cuaca".into(),
            weather_title: "Jumlah penyewaan berdasarkan kondisi cuaca".into(),
            holiday_weekday_heading: "Hari Libur dan Penyewaan per Hari".into(),
            holiday_title: "Jumlah penyewaan berdasarkan hari libur".into(),
            weekday_title: "Jumlah penyewaan berdasarkan hari".into(),
            empty_range: "Tidak ada penyewaan pada rentang ini".into(),
            month_names: strings(&[
                "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
            ]),
            caption: String::new(),
        }
    }

    /// Look up a bundled preset by locale code.
    pub fn preset(code: &str) -> Result<Self, ConfigError> {
        match code.to_ascii_lowercase().as_str() {
            "en" => Ok(Self::english()),
            "id" => Ok(Self::indonesian()),
            _ => Err(ConfigError::UnknownLocale(code.to_string())),
        }
    }

    /// Axis label for a zero-based month index.
    pub fn month_name(&self, index: usize) -> String {
        self.month_names
            .get(index)
            .cloned()
            .unwrap_or_else(|| (index + 1).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let config = Config::from_json(r#"{ "data_path": "other.csv" }"#).unwrap();
        assert_eq!(config.data_path, PathBuf::from("other.csv"));
        assert_eq!(config.locale, Labels::english());
        assert_eq!(config.chart, ChartSize::default());
    }

    #[test]
    fn test_partial_labels_override() {
        let config =
            Config::from_json(r#"{ "locale": { "title": "Rentals" }, "chart": { "width": 640 } }"#)
                .unwrap();
        assert_eq!(config.locale.title, "Rentals");
        assert_eq!(config.locale.casual_metric, "Casual User");
        assert_eq!(config.chart.width, 640);
        assert_eq!(config.chart.height, ChartSize::default().height);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "data_path": "day.csv" }}"#).unwrap();
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.data_path, PathBuf::from("day.csv"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load("/nonexistent/bikestats.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            Config::from_json("{ not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_presets() {
        assert_eq!(Labels::preset("EN").unwrap(), Labels::english());
        assert_eq!(
            Labels::preset("id").unwrap().monthly_title,
            "Jumlah sepeda yang disewakan berdasarkan Bulan dan tahun"
        );
        assert!(matches!(
            Labels::preset("fr"),
            Err(ConfigError::UnknownLocale(_))
        ));
    }

    #[test]
    fn test_month_name_fallback() {
        let labels = Labels::indonesian();
        assert_eq!(labels.month_name(4), "Mei");
        assert_eq!(labels.month_name(12), "13");
    }
}
