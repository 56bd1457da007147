//! # Bike Rental Dashboard Library
//!
//! `bikestats` loads a cleaned daily bike-rental dataset, filters it by date
//! range and aggregates rentals along its categorical dimensions (season, month,
//! weekday, working day, holiday, weather). The aggregates drive an interactive
//! dashboard of metrics and charts.
//!
//! ## Features
//!
//! - CSV loading with schema and `count == casual + registered` checks
//! - Inclusive date-range filtering clamped to the dataset bounds
//! - Nine group-and-sum aggregations sharing one table shape
//! - Chart rendering to bitmaps with plotters, shown in an egui window or
//!   exported as PNG files
//! - Configurable input path and display strings (English and Indonesian presets)
//!
//! ## Example
//!
//! ```no_run
//! use bikestats::analysis::{load_dataset, Session};
//! use bikestats::types::DateRange;
//! use chrono::NaiveDate;
//!
//! let dataset = load_dataset("data/clean_day.csv").unwrap();
//! let mut session = Session::new(dataset);
//!
//! let january = DateRange::new(
//!     NaiveDate::from_ymd_opt(2011, 1, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2011, 1, 31).unwrap(),
//! );
//! let report = session.on_filter_change(january);
//! println!("{} rentals", report.metrics.total);
//! ```

pub mod analysis;
pub mod app;
pub mod config;
pub mod error;
pub mod plotting;
pub mod types;
pub mod utils;

// Re-export main types for convenience
pub use analysis::{Report, Session};
pub use app::App as DashboardApp;
pub use config::{Config, Labels};
pub use types::{AggregateTable, DateRange, RentalRecord};
