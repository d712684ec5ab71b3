//! Single-pass aggregates over record lists.
//!
//! Views compute their stat cards from these: a count of records matching a
//! predicate, a sum of a numeric field, or its average. An average over an
//! empty list is `None` rather than a division by zero; views render it as
//! "N/A".

use rust_decimal::Decimal;

/// Count the records for which `predicate` holds.
pub fn count_where<'a, T: 'a>(
    records: impl IntoIterator<Item = &'a T>,
    predicate: impl Fn(&T) -> bool,
) -> usize {
    records.into_iter().filter(|&record| predicate(record)).count()
}

/// Sum a numeric field across all records. Zero for an empty list.
pub fn sum_by<'a, T: 'a>(
    records: impl IntoIterator<Item = &'a T>,
    value: impl Fn(&T) -> Decimal,
) -> Decimal {
    records.into_iter().map(value).sum()
}

/// Average a numeric field across all records.
///
/// Returns `None` for an empty list. The result is exact; round at display
/// time.
pub fn average_by<'a, T: 'a>(
    records: impl IntoIterator<Item = &'a T>,
    value: impl Fn(&T) -> Decimal,
) -> Option<Decimal> {
    let (count, total) = records
        .into_iter()
        .fold((0_u64, Decimal::ZERO), |(count, total), record| {
            (count + 1, total + value(record))
        });

    (count > 0).then(|| total / Decimal::from(count))
}
