use crate::recurrence::whole_periods_elapsed;
use crate::schema::{Debt, Frequency};
use chrono::NaiveDate;

/// Cumulative amount paid toward a debt as of the given date, clipped so the
/// total never exceeds `total_owed`.
///
/// A recurring payment due at `advance(start, k)` counts as made once the
/// following cycle has begun, i.e. once `advance(start, k + 1)` is on or
/// before `as_of`. The count of settled payments is therefore the number of
/// whole periods elapsed between the start date and `as_of`, computed
/// analytically rather than by replaying the schedule date by date.
///
/// One-time debts have no cycle: the single payment counts as soon as its
/// date arrives.
pub fn payments_made(debt: &Debt, as_of: NaiveDate) -> f64 {
    if debt.total_owed <= 0.0 || debt.payment_amount <= 0.0 {
        return 0.0;
    }

    if debt.frequency == Frequency::OneTime {
        return if debt.start_date <= as_of {
            debt.payment_amount.min(debt.total_owed)
        } else {
            0.0
        };
    }

    if debt.start_date > as_of {
        return 0.0;
    }

    let settled = whole_periods_elapsed(debt.start_date, debt.frequency, as_of).max(0);
    (settled as f64 * debt.payment_amount).min(debt.total_owed)
}

/// Remaining balance on a debt as of the given date: `total_owed` less all
/// payments made, never below zero. Uses the same period-advancement rule as
/// the occurrence enumerator, so the dates it settles against are exactly the
/// dates the timeline shows as expenses.
pub fn remaining_balance(debt: &Debt, as_of: NaiveDate) -> f64 {
    (debt.total_owed - payments_made(debt, as_of)).max(0.0)
}

/// Number of scheduled payments still owed after `as_of`, including the final
/// clipped one. One-time debts report one until their date passes.
pub fn payments_remaining(debt: &Debt, as_of: NaiveDate) -> u64 {
    if debt.payment_amount <= 0.0 {
        return 0;
    }
    let remaining = remaining_balance(debt, as_of);
    (remaining / debt.payment_amount).ceil() as u64
}
