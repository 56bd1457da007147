//! # Common Types
//!
//! This module contains the types shared by the aggregation and presentation
//! layers: the daily rental record, the inclusive date interval used as the
//! dashboard filter, and the uniform grouped table every aggregation returns.

use chrono::{Month, NaiveDate};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// One row of the cleaned daily dataset.
///
/// Column names follow the cleaned CSV export (`dteday`, `weather_situation`, ...);
/// the raw UCI names (`weathersit`, `yr`, `mnth`, `cnt`) are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalRecord {
    /// Calendar day, unique across the dataset
    #[serde(rename = "dteday", alias = "date")]
    pub date: NaiveDate,
    pub season: String,
    #[serde(alias = "yr")]
    pub year: i32,
    /// Month label (`Jan`..`Dec`)
    #[serde(alias = "mnth")]
    pub month: String,
    pub holiday: String,
    pub weekday: String,
    pub workingday: String,
    #[serde(alias = "weathersit")]
    pub weather_situation: String,
    pub casual: u64,
    pub registered: u64,
    /// Always `casual + registered`
    #[serde(alias = "cnt")]
    pub count: u64,
}

/// Inclusive date interval. An interval whose start is after its end is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// A single-day interval.
    pub fn day(date: NaiveDate) -> Self {
        Self::new(date, date)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Intersect with `bounds`. A range that does not overlap `bounds` stays empty.
    pub fn clamp_to(&self, bounds: DateRange) -> DateRange {
        DateRange {
            start: self.start.max(bounds.start),
            end: self.end.min(bounds.end),
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} .. {}", self.start, self.end)
    }
}

/// The numeric columns of a [`RentalRecord`] that aggregations sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Measure {
    Count,
    Casual,
    Registered,
}

impl Measure {
    /// Column name, as it appears in the input file and in aggregate tables.
    pub fn name(&self) -> &'static str {
        match self {
            Measure::Count => "count",
            Measure::Casual => "casual",
            Measure::Registered => "registered",
        }
    }

    pub fn of(&self, record: &RentalRecord) -> u64 {
        match self {
            Measure::Count => record.count,
            Measure::Casual => record.casual,
            Measure::Registered => record.registered,
        }
    }
}

/// Grouping key of the monthly aggregate.
///
/// Orders by year, then by calendar position of the month label, so `Feb` sorts
/// before `Jan` of the following year but after `Jan` of the same year.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: String,
}

impl MonthKey {
    pub fn new(year: i32, month: impl Into<String>) -> Self {
        Self {
            year,
            month: month.into(),
        }
    }

    /// Zero-based calendar index (`Jan` = 0), `None` for unrecognised labels.
    pub fn month_index(&self) -> Option<usize> {
        month_index(&self.month)
    }
}

/// Calendar index of a month label. Accepts abbreviated and full English names.
pub fn month_index(label: &str) -> Option<usize> {
    label
        .trim()
        .parse::<Month>()
        .ok()
        .map(|m| m.number_from_month() as usize - 1)
}

impl Ord for MonthKey {
    fn cmp(&self, other: &Self) -> Ordering {
        // Unknown labels go after December
        let rank = |k: &MonthKey| k.month_index().unwrap_or(12);
        self.year
            .cmp(&other.year)
            .then_with(|| rank(self).cmp(&rank(other)))
            .then_with(|| self.month.cmp(&other.month))
    }
}

impl PartialOrd for MonthKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month, self.year)
    }
}

/// One group of an [`AggregateTable`]: the key plus one sum per measure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateRow<K> {
    pub key: K,
    pub values: Vec<u64>,
}

/// A grouped table: one named key column and one summed column per measure.
///
/// Every aggregation returns this shape, so presentation code reads any result
/// through the same accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateTable<K> {
    pub key_name: &'static str,
    pub measures: Vec<Measure>,
    pub rows: Vec<AggregateRow<K>>,
}

impl<K> AggregateTable<K> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn position(&self, measure: Measure) -> Option<usize> {
        self.measures.iter().position(|m| *m == measure)
    }

    /// Value of `measure` in `row`, `None` if the table does not carry it.
    pub fn value(&self, row: &AggregateRow<K>, measure: Measure) -> Option<u64> {
        self.position(measure)
            .and_then(|idx| row.values.get(idx).copied())
    }

    /// All values of one measure column in row order (empty if absent).
    pub fn column(&self, measure: Measure) -> Vec<u64> {
        match self.position(measure) {
            Some(idx) => self.rows.iter().map(|row| row.values[idx]).collect(),
            None => Vec::new(),
        }
    }

    /// Sum of a measure column. Zero for an empty table or an absent measure.
    pub fn total(&self, measure: Measure) -> u64 {
        self.column(measure)
            .into_iter()
            .fold(0, u64::saturating_add)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.rows.iter().map(|row| &row.key)
    }
}

impl<K: fmt::Display> fmt::Display for AggregateTable<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<20}", self.key_name)?;
        for measure in &self.measures {
            write!(f, "{:>12}", measure.name())?;
        }
        writeln!(f)?;
        for row in &self.rows {
            write!(f, "{:<20}", row.key.to_string())?;
            for value in &row.values {
                write!(f, "{:>12}", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
