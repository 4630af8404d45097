//! # Cash-Flow Forecaster
//!
//! A library for projecting a personal cash-flow timeline and weekly
//! income/expense summary from a starting balance and a set of recurring or
//! one-time incomes, bills, and debts.
//!
//! ## Core Concepts
//!
//! - **Occurrence**: a single concrete date on which an item's amount is due
//!   or received, derived from its start date and frequency
//! - **Horizon**: the end of the forecast window (reference date + 90 days by
//!   default)
//! - **Running balance**: the account balance after applying every event up
//!   to and including a point in the date-sorted timeline
//! - **Amortization**: a debt's remaining balance, computed by replaying its
//!   payment schedule up to a cutoff date
//!
//! The engine is stateless and pure: it reads an immutable [`ForecastConfig`]
//! snapshot plus an explicit reference date (never the system clock), returns
//! derived structures, and retains nothing between calls. Re-running with
//! identical inputs yields identical output.
//!
//! ## Example
//!
//! ```rust,ignore
//! use cashflow_forecaster::*;
//! use chrono::NaiveDate;
//!
//! let config = ForecastConfig {
//!     starting_balance: 5000.0,
//!     incomes: vec![RecurringItem {
//!         id: "paycheck".to_string(),
//!         name: "Paycheck".to_string(),
//!         amount: 2000.0,
//!         frequency: Frequency::BiWeekly,
//!         start_date: NaiveDate::from_ymd_opt(2025, 6, 13).unwrap(),
//!     }],
//!     bills: vec![],
//!     debts: vec![],
//! };
//!
//! let today = NaiveDate::from_ymd_opt(2025, 6, 6).unwrap();
//! let report = forecast_cash_flow(&config, today).unwrap();
//! ```

pub mod amortization;
pub mod error;
pub mod ingestion;
pub mod recurrence;
pub mod schema;
pub mod timeline;
pub mod utils;
pub mod weekly;

pub use amortization::{payments_made, payments_remaining, remaining_balance};
pub use error::{ForecastError, Result};
pub use ingestion::*;
pub use recurrence::{
    advance, enumerate_occurrence_dates, enumerate_occurrences, resolve_first_occurrence,
    Occurrence,
};
pub use schema::*;
pub use timeline::{build_timeline, horizon_date, DEFAULT_HORIZON_DAYS};
pub use utils::*;
pub use weekly::aggregate_by_week;

use chrono::NaiveDate;
use log::{debug, info};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Income,
    Expense,
}

/// A dated money movement derived from one item occurrence. Ephemeral: built
/// fresh on every forecast, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashEvent {
    pub date: NaiveDate,
    pub description: String,
    pub amount: f64,
    pub kind: EventKind,
}

/// A cash event plus the account balance after applying it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub event: CashEvent,
    /// Balance after this entry, rounded to two decimals for display. The
    /// fold itself carries full precision between entries.
    pub running_balance: f64,
}

/// Income and expense totals for one calendar week (Sunday through Saturday).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekBucket {
    /// The Sunday beginning this week; buckets are keyed by it.
    pub week_start: NaiveDate,
    pub label: String,
    pub total_income: f64,
    pub total_expense: f64,
}

/// Per-debt payoff progress as of the reference date, for "remaining owed"
/// displays alongside the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtSummary {
    pub id: String,
    pub name: String,
    pub total_owed: f64,
    pub paid_to_date: f64,
    pub remaining_balance: f64,
}

/// Everything one forecast run derives: the merged timeline, its weekly
/// aggregation, and per-debt summaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastReport {
    pub reference_date: NaiveDate,
    pub horizon_date: NaiveDate,
    pub starting_balance: f64,
    pub timeline: Vec<TimelineEntry>,
    pub weekly: Vec<WeekBucket>,
    pub debts: Vec<DebtSummary>,
}

pub struct CashFlowForecaster;

impl CashFlowForecaster {
    /// Runs a forecast over the default 90-day horizon.
    pub fn forecast(config: &ForecastConfig, reference_date: NaiveDate) -> Result<ForecastReport> {
        Self::forecast_with_horizon(config, reference_date, DEFAULT_HORIZON_DAYS)
    }

    pub fn forecast_with_horizon(
        config: &ForecastConfig,
        reference_date: NaiveDate,
        horizon_days: i64,
    ) -> Result<ForecastReport> {
        if horizon_days < 1 {
            return Err(ForecastError::InvalidHorizon(horizon_days));
        }
        validate_config_integrity(config)?;

        info!(
            "Forecasting {} days of cash flow from {}",
            horizon_days, reference_date
        );
        debug!(
            "Configuration contains {} incomes, {} bills, and {} debts",
            config.incomes.len(),
            config.bills.len(),
            config.debts.len()
        );

        let timeline = build_timeline(config, reference_date, horizon_days);
        let weekly = aggregate_by_week(&timeline);
        let debts = config
            .debts
            .iter()
            .map(|debt| DebtSummary {
                id: debt.id.clone(),
                name: debt.name.clone(),
                total_owed: debt.total_owed,
                paid_to_date: round2(payments_made(debt, reference_date)),
                remaining_balance: round2(remaining_balance(debt, reference_date)),
            })
            .collect();

        debug!("Derived {} timeline entries", timeline.len());

        Ok(ForecastReport {
            reference_date,
            horizon_date: horizon_date(reference_date, horizon_days),
            starting_balance: config.starting_balance,
            timeline,
            weekly,
            debts,
        })
    }
}

pub fn forecast_cash_flow(
    config: &ForecastConfig,
    reference_date: NaiveDate,
) -> Result<ForecastReport> {
    CashFlowForecaster::forecast(config, reference_date)
}

pub fn forecast_with_horizon(
    config: &ForecastConfig,
    reference_date: NaiveDate,
    horizon_days: i64,
) -> Result<ForecastReport> {
    CashFlowForecaster::forecast_with_horizon(config, reference_date, horizon_days)
}

fn validate_config_integrity(config: &ForecastConfig) -> Result<()> {
    if !config.starting_balance.is_finite() {
        return Err(ForecastError::ValidationError {
            item: "starting_balance".to_string(),
            details: format!("must be a finite number, got {}", config.starting_balance),
        });
    }

    for item in config.incomes.iter().chain(config.bills.iter()) {
        validate_amount(&item.name, "amount", item.amount)?;
    }
    for debt in &config.debts {
        validate_amount(&debt.name, "total_owed", debt.total_owed)?;
        validate_amount(&debt.name, "payment_amount", debt.payment_amount)?;
    }

    Ok(())
}

fn validate_amount(item: &str, field: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ForecastError::ValidationError {
            item: item.to_string(),
            details: format!("{} must be a non-negative finite number, got {}", field, value),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_config() -> ForecastConfig {
        ForecastConfig {
            starting_balance: 5000.0,
            incomes: vec![RecurringItem {
                id: "paycheck".to_string(),
                name: "Paycheck".to_string(),
                amount: 2000.0,
                frequency: Frequency::BiWeekly,
                start_date: ymd(2025, 6, 13),
            }],
            bills: vec![RecurringItem {
                id: "rent".to_string(),
                name: "Rent".to_string(),
                amount: 1200.0,
                frequency: Frequency::Monthly,
                start_date: ymd(2025, 6, 1),
            }],
            debts: vec![Debt {
                id: "car-loan".to_string(),
                name: "Car Loan".to_string(),
                total_owed: 15000.0,
                payment_amount: 350.0,
                frequency: Frequency::Monthly,
                start_date: ymd(2025, 6, 15),
            }],
        }
    }

    #[test]
    fn test_end_to_end_forecast() {
        let report = forecast_cash_flow(&sample_config(), ymd(2025, 6, 6)).unwrap();

        assert_eq!(report.horizon_date, ymd(2025, 9, 4));

        // 6 paychecks, 3 rent charges (Jul/Aug/Sep 1), 3 loan payments
        // (Jun/Jul/Aug 15).
        assert_eq!(report.timeline.len(), 12);
        assert_eq!(report.timeline[0].event.description, "Paycheck");
        assert_eq!(report.timeline[0].running_balance, 7000.0);

        let last = report.timeline.last().unwrap();
        // 5000 + 6*2000 - 3*1200 - 3*350
        assert_eq!(last.running_balance, 12350.0);

        assert!(!report.weekly.is_empty());
        let income_total: f64 = report.weekly.iter().map(|w| w.total_income).sum();
        assert_eq!(income_total, 12000.0);

        assert_eq!(report.debts.len(), 1);
        assert_eq!(report.debts[0].remaining_balance, 15000.0);
        assert_eq!(report.debts[0].paid_to_date, 0.0);
    }

    #[test]
    fn test_empty_config_produces_empty_report() {
        let config = ForecastConfig {
            starting_balance: 5000.0,
            incomes: vec![],
            bills: vec![],
            debts: vec![],
        };
        let report = forecast_cash_flow(&config, ymd(2025, 6, 6)).unwrap();
        assert!(report.timeline.is_empty());
        assert!(report.weekly.is_empty());
        assert!(report.debts.is_empty());
    }

    #[test]
    fn test_negative_amount_rejected() {
        let mut config = sample_config();
        config.bills[0].amount = -1200.0;
        let err = forecast_cash_flow(&config, ymd(2025, 6, 6)).unwrap_err();
        assert!(matches!(err, ForecastError::ValidationError { .. }));
    }

    #[test]
    fn test_non_finite_debt_rejected() {
        let mut config = sample_config();
        config.debts[0].total_owed = f64::NAN;
        assert!(forecast_cash_flow(&config, ymd(2025, 6, 6)).is_err());
    }

    #[test]
    fn test_invalid_horizon_rejected() {
        let config = sample_config();
        let err = forecast_with_horizon(&config, ymd(2025, 6, 6), 0).unwrap_err();
        assert!(matches!(err, ForecastError::InvalidHorizon(0)));
    }

    #[test]
    fn test_report_serializes() {
        let report = forecast_cash_flow(&sample_config(), ymd(2025, 6, 6)).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"income\""));
        assert!(json.contains("Paycheck"));
    }
}
