use crate::schema::{Frequency, RecurringItem};
use crate::utils::{add_months, add_years, months_between, years_between};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single concrete date on which an item's amount is due or received.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Occurrence {
    pub date: NaiveDate,
    pub amount: f64,
}

/// Advances a start date by the given number of whole periods.
///
/// Monthly and annual advancement is always computed from the original start
/// date, so the day-of-month anchor survives short months: Jan 31 advanced by
/// 1 and 2 months yields Feb 28 and Mar 31, not Feb 28 then Mar 28.
/// `OneTime` has no period and ignores `periods`.
pub fn advance(start: NaiveDate, frequency: Frequency, periods: i64) -> NaiveDate {
    match frequency {
        Frequency::Weekly | Frequency::BiWeekly => {
            let days = frequency.period_days().unwrap_or(0);
            start + Duration::days(days * periods)
        }
        Frequency::Monthly => add_months(start, periods),
        Frequency::Annually => add_years(start, periods),
        Frequency::OneTime => start,
    }
}

/// Largest `k` with `advance(start, frequency, k) <= reference`, computed
/// analytically so a start date years in the past costs the same as one last
/// week. Negative when the reference precedes the start.
pub(crate) fn whole_periods_elapsed(
    start: NaiveDate,
    frequency: Frequency,
    reference: NaiveDate,
) -> i64 {
    match frequency {
        Frequency::Weekly | Frequency::BiWeekly => {
            let period = frequency.period_days().unwrap_or(7);
            (reference - start).num_days().div_euclid(period)
        }
        Frequency::Monthly => {
            let mut k = months_between(start, reference);
            if advance(start, frequency, k) > reference {
                k -= 1;
            }
            k
        }
        Frequency::Annually => {
            let mut k = years_between(start, reference);
            if advance(start, frequency, k) > reference {
                k -= 1;
            }
            k
        }
        Frequency::OneTime => 0,
    }
}

/// Index of the first occurrence on or after the reference date.
fn first_period_index(start: NaiveDate, frequency: Frequency, reference: NaiveDate) -> i64 {
    if start >= reference {
        return 0;
    }
    let elapsed = whole_periods_elapsed(start, frequency, reference);
    if advance(start, frequency, elapsed) >= reference {
        elapsed
    } else {
        elapsed + 1
    }
}

/// Returns the first occurrence of an item on or after the reference date:
/// the smallest date reachable from `start` by whole periods that is not
/// before `reference`.
///
/// `OneTime` items return their start date unchanged, even when it is in the
/// past; downstream consumers decide how to treat an already-elapsed
/// occurrence (the timeline builder filters them out).
pub fn resolve_first_occurrence(
    start: NaiveDate,
    frequency: Frequency,
    reference: NaiveDate,
) -> NaiveDate {
    if frequency == Frequency::OneTime || start >= reference {
        return start;
    }
    advance(start, frequency, first_period_index(start, frequency, reference))
}

/// All occurrence dates in `[reference, horizon]`, ascending. `OneTime` emits
/// at most one date, which may precede the reference date.
pub fn enumerate_occurrence_dates(
    start: NaiveDate,
    frequency: Frequency,
    reference: NaiveDate,
    horizon: NaiveDate,
) -> Vec<NaiveDate> {
    if frequency == Frequency::OneTime {
        return if start <= horizon {
            vec![start]
        } else {
            Vec::new()
        };
    }

    let mut dates = Vec::new();
    let mut k = first_period_index(start, frequency, reference);
    loop {
        let date = advance(start, frequency, k);
        if date > horizon {
            break;
        }
        dates.push(date);
        k += 1;
    }
    dates
}

/// Occurrence stream for an income or bill, pairing each date with the item's
/// per-occurrence amount.
pub fn enumerate_occurrences(
    item: &RecurringItem,
    reference: NaiveDate,
    horizon: NaiveDate,
) -> Vec<Occurrence> {
    enumerate_occurrence_dates(item.start_date, item.frequency, reference, horizon)
        .into_iter()
        .map(|date| Occurrence {
            date,
            amount: item.amount,
        })
        .collect()
}
