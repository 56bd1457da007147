use std::collections::BTreeMap;

use crate::types::{AggregateRow, AggregateTable, Measure, RentalRecord};

/// Group `records` by `key` and sum each of `measures` per group.
///
/// Groups come out in ascending key order. Every record lands in exactly one group.
pub fn group_sum<K, F>(
    records: &[RentalRecord],
    key_name: &'static str,
    key: F,
    measures: &[Measure],
) -> AggregateTable<K>
where
    K: Ord,
    F: Fn(&RentalRecord) -> K,
{
    let mut groups: BTreeMap<K, Vec<u64>> = BTreeMap::new();

    for record in records {
        let sums = groups
            .entry(key(record))
            .or_insert_with(|| vec![0; measures.len()]);
        for (sum, measure) in sums.iter_mut().zip(measures) {
            *sum = sum.saturating_add(measure.of(record));
        }
    }

    AggregateTable {
        key_name,
        measures: measures.to_vec(),
        rows: groups
            .into_iter()
            .map(|(key, values)| AggregateRow { key, values })
            .collect(),
    }
}
