use log::{info, warn};
use std::time::Instant;

use super::{Dataset, Report};
use crate::types::DateRange;

/// One user's view of the dashboard: its own dataset, the active date filter and
/// the report computed for it.
///
/// Changing the filter is an explicit event that recomputes the whole report
/// synchronously. Nothing is shared between sessions.
#[derive(Debug, Clone)]
pub struct Session {
    dataset: Dataset,
    range: DateRange,
    report: Report,
}

impl Session {
    /// Start a session showing the full date range.
    pub fn new(dataset: Dataset) -> Self {
        let range = dataset.bounds();
        Self::with_range(dataset, range)
    }

    /// Start a session with an initial filter, clamped to the dataset bounds.
    pub fn with_range(dataset: Dataset, range: DateRange) -> Self {
        let range = range.clamp_to(dataset.bounds());
        let report = Report::build(&dataset.filter(range));
        Self {
            dataset,
            range,
            report,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn bounds(&self) -> DateRange {
        self.dataset.bounds()
    }

    /// The active filter, after clamping.
    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn report(&self) -> &Report {
        &self.report
    }

    /// Apply a new date filter and recompute every aggregate.
    pub fn on_filter_change(&mut self, range: DateRange) -> &Report {
        let start_time = Instant::now();
        let clamped = range.clamp_to(self.bounds());
        if clamped != range && !range.is_empty() {
            warn!("date filter {} clamped to {}", range, clamped);
        }

        self.range = clamped;
        self.report = Report::build(&self.dataset.filter(clamped));

        info!(
            "Recomputed report for {} ({} rows) in {}us",
            clamped,
            self.report.row_count,
            start_time.elapsed().as_micros()
        );
        &self.report
    }

    /// Go back to the full date range.
    pub fn reset_filter(&mut self) -> &Report {
        let bounds = self.bounds();
        self.on_filter_change(bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tests::{date, sample_records};
    use crate::types::Measure;

    fn session() -> Session {
        Session::new(Dataset::new(sample_records()).unwrap())
    }

    #[test]
    fn test_defaults_to_full_range() {
        let session = session();
        assert_eq!(session.range(), session.bounds());
        assert_eq!(session.report().metrics.total, 60);
    }

    #[test]
    fn test_filter_change_recomputes() {
        let mut session = session();
        let report = session.on_filter_change(DateRange::day(date("2011-01-02")));
        assert_eq!(report.metrics.total, 20);
        assert_eq!(report.metrics.casual, 4);
        assert_eq!(session.range(), DateRange::day(date("2011-01-02")));
    }

    #[test]
    fn test_filter_is_clamped_to_bounds() {
        let mut session = session();
        session.on_filter_change(DateRange::new(date("2010-01-01"), date("2011-01-02")));
        assert_eq!(
            session.range(),
            DateRange::new(date("2011-01-01"), date("2011-01-02"))
        );
        assert_eq!(session.report().metrics.total, 30);
    }

    #[test]
    fn test_inverted_filter_gives_zero() {
        let mut session = session();
        let report =
            session.on_filter_change(DateRange::new(date("2011-01-03"), date("2011-01-02")));
        assert!(report.is_empty());
        assert_eq!(report.metrics.total, 0);
        assert_eq!(report.weather.total(Measure::Count), 0);
    }

    #[test]
    fn test_reset_restores_full_totals() {
        let mut session = session();
        session.on_filter_change(DateRange::day(date("2011-01-01")));
        let report = session.reset_filter();
        assert_eq!(report.metrics.total, 60);
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut first = session();
        let second = session();
        first.on_filter_change(DateRange::day(date("2011-01-03")));
        assert_eq!(first.report().metrics.total, 30);
        assert_eq!(second.report().metrics.total, 60);
    }
}
