use chrono::NaiveDate;
use log::debug;
use std::time::Instant;

use super::aggregate::*;
use super::dataset::FilteredView;
use crate::types::{AggregateTable, DateRange, Measure, MonthKey};

/// The three headline numbers of the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Metrics {
    pub casual: u64,
    pub registered: u64,
    pub total: u64,
}

/// Everything one render pass needs: the nine aggregates of a filtered view plus
/// the derived metrics. Rebuilt from scratch on every filter change.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub range: DateRange,
    pub row_count: usize,
    pub daily: AggregateTable<NaiveDate>,
    pub daily_casual: AggregateTable<NaiveDate>,
    pub daily_registered: AggregateTable<NaiveDate>,
    pub season: AggregateTable<String>,
    pub monthly: AggregateTable<MonthKey>,
    pub weekday: AggregateTable<String>,
    pub workingday: AggregateTable<String>,
    pub holiday: AggregateTable<String>,
    pub weather: AggregateTable<String>,
    pub metrics: Metrics,
}

impl Report {
    pub fn build(view: &FilteredView<'_>) -> Self {
        let start_time = Instant::now();
        let records = view.records;

        let daily = daily_rentals(records);
        let daily_casual = daily_casual_rentals(records);
        let daily_registered = daily_registered_rentals(records);

        let metrics = Metrics {
            casual: daily_casual.total(Measure::Casual),
            registered: daily_registered.total(Measure::Registered),
            total: daily.total(Measure::Count),
        };

        let report = Self {
            range: view.range,
            row_count: records.len(),
            daily,
            daily_casual,
            daily_registered,
            season: season_rentals(records),
            monthly: monthly_rentals(records),
            weekday: weekday_rentals(records),
            workingday: workingday_rentals(records),
            holiday: holiday_rentals(records),
            weather: weather_rentals(records),
            metrics,
        };

        debug!(
            "report for {}: {} rows, {} months, {} seasons, {} weather groups in {}us",
            report.range,
            report.row_count,
            report.monthly.len(),
            report.season.len(),
            report.weather.len(),
            start_time.elapsed().as_micros()
        );
        report
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    /// Plain-text rendering of the metrics and every aggregate table.
    pub fn summary(&self) -> String {
        let mut out = format!(
            "Range: {}\nRows: {}\nCasual: {}\nRegistered: {}\nTotal: {}\n",
            self.range,
            self.row_count,
            self.metrics.casual,
            self.metrics.registered,
            self.metrics.total
        );
        for table in [
            self.season.to_string(),
            self.monthly.to_string(),
            self.weekday.to_string(),
            self.workingday.to_string(),
            self.holiday.to_string(),
            self.weather.to_string(),
        ] {
            out.push('\n');
            out.push_str(&table);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tests::{date, sample_records};
    use crate::analysis::Dataset;

    #[test]
    fn test_metrics_from_example_rows() {
        let dataset = Dataset::new(sample_records()).unwrap();
        let report = Report::build(&dataset.filter(dataset.bounds()));

        assert_eq!(
            report.metrics,
            Metrics {
                casual: 12,
                registered: 48,
                total: 60
            }
        );
        assert_eq!(report.row_count, 3);
        assert!(!report.is_empty());
    }

    #[test]
    fn test_single_day_report() {
        let dataset = Dataset::new(sample_records()).unwrap();
        let report = Report::build(&dataset.filter(DateRange::day(date("2011-01-02"))));

        assert_eq!(report.daily.len(), 1);
        assert_eq!(report.daily.column(Measure::Count), vec![20]);
        assert_eq!(report.metrics.total, 20);
    }

    #[test]
    fn test_inverted_range_report_is_zero() {
        let dataset = Dataset::new(sample_records()).unwrap();
        let report = Report::build(
            &dataset.filter(DateRange::new(date("2011-01-03"), date("2011-01-01"))),
        );

        assert!(report.is_empty());
        assert_eq!(report.metrics, Metrics::default());
        assert!(report.daily.is_empty());
        assert!(report.season.is_empty());
        assert!(report.monthly.is_empty());
        assert!(report.weekday.is_empty());
        assert!(report.workingday.is_empty());
        assert!(report.holiday.is_empty());
        assert!(report.weather.is_empty());
    }

    #[test]
    fn test_summary_lists_metrics_and_tables() {
        let dataset = Dataset::new(sample_records()).unwrap();
        let summary = Report::build(&dataset.filter(dataset.bounds())).summary();

        assert!(summary.contains("Total: 60"));
        assert!(summary.contains("weather_situation"));
        assert!(summary.contains("Misty/Cloudy"));
        assert!(summary.contains("Jan 2011"));
    }
}
