use crate::amortization::remaining_balance;
use crate::recurrence::{enumerate_occurrence_dates, enumerate_occurrences};
use crate::schema::{ForecastConfig, RecurringItem};
use crate::utils::round2;
use crate::{CashEvent, EventKind, TimelineEntry};
use chrono::{Duration, NaiveDate};

/// Forecast window length in calendar days.
pub const DEFAULT_HORIZON_DAYS: i64 = 90;

pub fn horizon_date(reference: NaiveDate, horizon_days: i64) -> NaiveDate {
    reference + Duration::days(horizon_days)
}

/// Merges every income, bill, and debt occurrence inside the forecast window
/// into one chronological stream and folds a running balance over it.
///
/// Same-date events keep a deterministic order: incomes, then bills, then
/// debts, each in input order. Events are collected in that order and the
/// sort is stable, so the tie-break falls out of the merge itself.
///
/// The balance accumulates at full precision; each entry carries the
/// post-application balance rounded to two decimals. Events dated before the
/// reference date (possible only for past one-time items) are excluded, since
/// the starting balance already reflects them. Debt payments are capped at
/// the debt's remaining balance as of the reference date, with the final
/// payment clipped; settled debts contribute nothing.
pub fn build_timeline(
    config: &ForecastConfig,
    reference: NaiveDate,
    horizon_days: i64,
) -> Vec<TimelineEntry> {
    let horizon = horizon_date(reference, horizon_days);
    let mut events: Vec<CashEvent> = Vec::new();

    for item in &config.incomes {
        push_item_events(&mut events, item, EventKind::Income, reference, horizon);
    }
    for item in &config.bills {
        push_item_events(&mut events, item, EventKind::Expense, reference, horizon);
    }
    for debt in &config.debts {
        let mut remaining = remaining_balance(debt, reference);
        if remaining <= 0.0 || debt.payment_amount <= 0.0 {
            continue;
        }
        for date in enumerate_occurrence_dates(debt.start_date, debt.frequency, reference, horizon)
        {
            if date < reference {
                continue;
            }
            if remaining <= 0.0 {
                break;
            }
            let amount = debt.payment_amount.min(remaining);
            remaining -= amount;
            events.push(CashEvent {
                date,
                description: debt.name.clone(),
                amount,
                kind: EventKind::Expense,
            });
        }
    }

    events.sort_by_key(|event| event.date);

    let mut balance = config.starting_balance;
    events
        .into_iter()
        .map(|event| {
            let delta = match event.kind {
                EventKind::Income => event.amount,
                EventKind::Expense => -event.amount,
            };
            balance += delta;
            TimelineEntry {
                running_balance: round2(balance),
                event,
            }
        })
        .collect()
}

fn push_item_events(
    events: &mut Vec<CashEvent>,
    item: &RecurringItem,
    kind: EventKind,
    reference: NaiveDate,
    horizon: NaiveDate,
) {
    for occurrence in enumerate_occurrences(item, reference, horizon) {
        if occurrence.date < reference {
            continue;
        }
        events.push(CashEvent {
            date: occurrence.date,
            description: item.name.clone(),
            amount: occurrence.amount,
            kind,
        });
    }
}
