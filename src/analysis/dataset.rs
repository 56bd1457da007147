use crate::error::LoadError;
use crate::types::{DateRange, RentalRecord};

/// The loaded, read-only rental table.
///
/// Records are kept sorted by date, which makes every date filter a contiguous
/// slice of the table.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<RentalRecord>,
    bounds: DateRange,
}

/// Rows of a [`Dataset`] whose date lies inside `range`. Borrowed, never copied.
#[derive(Debug, Clone, Copy)]
pub struct FilteredView<'a> {
    pub range: DateRange,
    pub records: &'a [RentalRecord],
}

impl FilteredView<'_> {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Dataset {
    /// Build a dataset, rejecting empty input and repeated dates.
    pub fn new(mut records: Vec<RentalRecord>) -> Result<Self, LoadError> {
        records.sort_by_key(|r| r.date);

        if let Some(pair) = records.windows(2).find(|pair| pair[0].date == pair[1].date) {
            return Err(LoadError::DuplicateDate(pair[0].date));
        }

        let (first, last) = match (records.first(), records.last()) {
            (Some(first), Some(last)) => (first.date, last.date),
            _ => return Err(LoadError::Empty),
        };

        Ok(Self {
            records,
            bounds: DateRange::new(first, last),
        })
    }

    pub fn records(&self) -> &[RentalRecord] {
        &self.records
    }

    /// `[min(date), max(date)]` of the whole table.
    pub fn bounds(&self) -> DateRange {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows with `range.start <= date <= range.end`. Empty for an inverted range.
    pub fn filter(&self, range: DateRange) -> FilteredView<'_> {
        if range.is_empty() {
            return FilteredView {
                range,
                records: &self.records[..0],
            };
        }

        let lo = self.records.partition_point(|r| r.date < range.start);
        let hi = self.records.partition_point(|r| r.date <= range.end);

        FilteredView {
            range,
            records: &self.records[lo..hi],
        }
    }
}
