//! Shared fixtures and cross-module property checks for the analysis layer.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use super::aggregate::*;
use super::{Dataset, Report};
use crate::types::{DateRange, Measure, RentalRecord};

/// Three days with counts 10, 20, 30 (casual 2/4/6, registered 8/16/24).
pub const SAMPLE_CSV: &str = "\
dteday,season,year,month,holiday,weekday,workingday,weather_situation,casual,registered,count
2011-01-01,Spring,2011,Jan,0,Sat,0,Misty/Cloudy,2,8,10
2011-01-02,Spring,2011,Jan,0,Sun,0,Clear,4,16,20
2011-01-03,Spring,2011,Jan,0,Mon,1,Clear,6,24,30
";

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn record(
    day: &str,
    year: i32,
    month: &str,
    season: &str,
    casual: u64,
    registered: u64,
) -> RentalRecord {
    RentalRecord {
        date: date(day),
        season: season.to_string(),
        year,
        month: month.to_string(),
        holiday: "0".to_string(),
        weekday: "Mon".to_string(),
        workingday: "1".to_string(),
        weather_situation: "Clear".to_string(),
        casual,
        registered,
        count: casual + registered,
    }
}

pub fn sample_records() -> Vec<RentalRecord> {
    super::read_records(SAMPLE_CSV.as_bytes()).unwrap()
}

/// Two full years of synthetic daily rows starting 2011-01-01.
pub fn two_year_records() -> Vec<RentalRecord> {
    let start = date("2011-01-01");
    (0..731)
        .map(|i| {
            let day = start + Duration::days(i);
            let season = match day.month() {
                12 | 1 | 2 => "Winter",
                3..=5 => "Spring",
                6..=8 => "Summer",
                _ => "Fall",
            };
            let holiday = i % 37 == 0;
            let weekend = matches!(day.weekday(), Weekday::Sat | Weekday::Sun);
            let casual = (i as u64 * 13) % 500;
            let registered = 1000 + (i as u64 * 29) % 3000;
            RentalRecord {
                date: day,
                season: season.to_string(),
                year: day.year(),
                month: day.format("%b").to_string(),
                holiday: if holiday { "1" } else { "0" }.to_string(),
                weekday: day.format("%a").to_string(),
                workingday: if holiday || weekend { "0" } else { "1" }.to_string(),
                weather_situation: ["Clear", "Misty/Cloudy", "Light Rain"][(i * 7 % 3) as usize]
                    .to_string(),
                casual,
                registered,
                count: casual + registered,
            }
        })
        .collect()
}

fn two_year_dataset() -> Dataset {
    Dataset::new(two_year_records()).unwrap()
}

fn intervals() -> Vec<DateRange> {
    vec![
        DateRange::new(date("2011-01-01"), date("2012-12-31")),
        DateRange::new(date("2011-03-15"), date("2011-09-30")),
        DateRange::new(date("2011-12-20"), date("2012-01-10")),
        DateRange::day(date("2012-02-29")),
        DateRange::new(date("2012-06-01"), date("2012-05-01")),
    ]
}

#[test]
fn test_daily_count_equals_casual_plus_registered() {
    let dataset = two_year_dataset();
    for range in intervals() {
        let view = dataset.filter(range);
        let count = daily_rentals(view.records).total(Measure::Count);
        let casual = daily_casual_rentals(view.records).total(Measure::Casual);
        let registered = daily_registered_rentals(view.records).total(Measure::Registered);
        assert_eq!(count, casual + registered, "range {}", range);
    }
}

#[test]
fn test_every_grouping_is_a_partition() {
    let dataset = two_year_dataset();
    for range in intervals() {
        let view = dataset.filter(range);
        let total: u64 = view.records.iter().map(|r| r.count).sum();
        let rows = view.records.len();

        assert_eq!(daily_rentals(view.records).len(), rows);
        assert_eq!(weekday_rentals(view.records).total(Measure::Count), total);
        assert_eq!(workingday_rentals(view.records).total(Measure::Count), total);
        assert_eq!(holiday_rentals(view.records).total(Measure::Count), total);
        assert_eq!(weather_rentals(view.records).total(Measure::Count), total);
        assert_eq!(monthly_rentals(view.records).total(Measure::Count), total);
        let seasons = season_rentals(view.records);
        assert_eq!(
            seasons.total(Measure::Registered) + seasons.total(Measure::Casual),
            total
        );
    }
}

#[test]
fn test_monthly_order_over_two_years() {
    let dataset = two_year_dataset();
    let monthly = monthly_rentals(dataset.records());
    assert_eq!(monthly.len(), 24);

    let order: Vec<(i32, usize)> = monthly
        .keys()
        .map(|k| (k.year, k.month_index().unwrap()))
        .collect();
    let expected: Vec<(i32, usize)> = [2011, 2012]
        .iter()
        .flat_map(|&year| (0..12).map(move |m| (year, m)))
        .collect();
    assert_eq!(order, expected);
}

#[test]
fn test_narrowing_never_increases_totals() {
    let dataset = two_year_dataset();
    let wide_range = DateRange::new(date("2011-02-01"), date("2012-10-31"));
    let narrow_range = DateRange::new(date("2011-05-01"), date("2012-03-31"));
    let wide = Report::build(&dataset.filter(wide_range));
    let narrow = Report::build(&dataset.filter(narrow_range));

    assert!(narrow.metrics.total <= wide.metrics.total);
    assert!(narrow.metrics.casual <= wide.metrics.casual);
    assert!(narrow.metrics.registered <= wide.metrics.registered);
    for row in &narrow.season.rows {
        let wide_row = wide.season.rows.iter().find(|w| w.key == row.key).unwrap();
        assert!(row.values[0] <= wide_row.values[0]);
        assert!(row.values[1] <= wide_row.values[1]);
    }
}

#[test]
fn test_full_range_reproduces_unfiltered_totals() {
    let dataset = two_year_dataset();
    let unfiltered = Report::build(&super::FilteredView {
        range: dataset.bounds(),
        records: dataset.records(),
    });
    let full = Report::build(&dataset.filter(dataset.bounds()));
    assert_eq!(full, unfiltered);
    assert_eq!(
        full.metrics.total,
        dataset.records().iter().map(|r| r.count).sum::<u64>()
    );
}

#[test]
fn test_inverted_interval_zeroes_everything() {
    let dataset = two_year_dataset();
    let inverted = DateRange::new(date("2012-06-01"), date("2012-05-01"));
    let report = Report::build(&dataset.filter(inverted));
    assert!(report.is_empty());
    assert_eq!(report.metrics.total, 0);
    assert_eq!(report.metrics.casual, 0);
    assert_eq!(report.metrics.registered, 0);
    assert_eq!(report.season.total(Measure::Registered), 0);
}
