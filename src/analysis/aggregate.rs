//! Group-and-sum aggregations over a (filtered) slice of rental records.
//!
//! Every function returns an [`AggregateTable`] with the grouping key as a named
//! column and one summed column per measure.

use chrono::NaiveDate;

use crate::types::{AggregateTable, Measure, MonthKey, RentalRecord};
use crate::utils::group_sum;

/// Total rentals per day.
pub fn daily_rentals(records: &[RentalRecord]) -> AggregateTable<NaiveDate> {
    group_sum(records, "dteday", |r| r.date, &[Measure::Count])
}

/// Casual rentals per day.
pub fn daily_casual_rentals(records: &[RentalRecord]) -> AggregateTable<NaiveDate> {
    group_sum(records, "dteday", |r| r.date, &[Measure::Casual])
}

/// Registered rentals per day.
pub fn daily_registered_rentals(records: &[RentalRecord]) -> AggregateTable<NaiveDate> {
    group_sum(records, "dteday", |r| r.date, &[Measure::Registered])
}

/// Registered and casual rentals per season (in that column order).
pub fn season_rentals(records: &[RentalRecord]) -> AggregateTable<String> {
    group_sum(
        records,
        "season",
        |r| r.season.clone(),
        &[Measure::Registered, Measure::Casual],
    )
}

/// Total rentals per month, ordered by year and then calendar month.
pub fn monthly_rentals(records: &[RentalRecord]) -> AggregateTable<MonthKey> {
    group_sum(
        records,
        "month",
        |r| MonthKey::new(r.year, r.month.clone()),
        &[Measure::Count],
    )
}

pub fn weekday_rentals(records: &[RentalRecord]) -> AggregateTable<String> {
    group_sum(records, "weekday", |r| r.weekday.clone(), &[Measure::Count])
}

pub fn workingday_rentals(records: &[RentalRecord]) -> AggregateTable<String> {
    group_sum(
        records,
        "workingday",
        |r| r.workingday.clone(),
        &[Measure::Count],
    )
}

pub fn holiday_rentals(records: &[RentalRecord]) -> AggregateTable<String> {
    group_sum(records, "holiday", |r| r.holiday.clone(), &[Measure::Count])
}

pub fn weather_rentals(records: &[RentalRecord]) -> AggregateTable<String> {
    group_sum(
        records,
        "weather_situation",
        |r| r.weather_situation.clone(),
        &[Measure::Count],
    )
}
