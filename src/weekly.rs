use crate::utils::{round2, week_start};
use crate::{EventKind, TimelineEntry, WeekBucket};

/// Buckets a date-sorted timeline into calendar weeks (Sunday through
/// Saturday) and sums income and expense per bucket.
///
/// Buckets appear in order of first appearance in the input, keyed and
/// labelled by the Sunday starting each week. A week with only incomes still
/// reports `total_expense: 0.0`, and vice versa.
pub fn aggregate_by_week(entries: &[TimelineEntry]) -> Vec<WeekBucket> {
    let mut buckets: Vec<WeekBucket> = Vec::new();

    for entry in entries {
        let start = week_start(entry.event.date);
        if buckets.last().map(|b| b.week_start) != Some(start) {
            buckets.push(WeekBucket {
                week_start: start,
                label: format!("Week of {}", start.format("%b %-d")),
                total_income: 0.0,
                total_expense: 0.0,
            });
        }
        if let Some(bucket) = buckets.last_mut() {
            match entry.event.kind {
                EventKind::Income => bucket.total_income += entry.event.amount,
                EventKind::Expense => bucket.total_expense += entry.event.amount,
            }
        }
    }

    for bucket in &mut buckets {
        bucket.total_income = round2(bucket.total_income);
        bucket.total_expense = round2(bucket.total_expense);
    }
    buckets
}
