use crate::error::{ForecastError, Result};
use crate::schema::{Debt, ForecastConfig, Frequency, RecurringItem};
use chrono::NaiveDate;

/// An income or bill exactly as a form or persistence layer produces it:
/// string-typed frequency and date, possibly missing amount.
#[derive(Debug, Clone)]
pub struct RawItemRecord {
    pub id: String,
    pub name: String,
    pub amount: Option<f64>,
    pub frequency: String,
    pub start_date: String,
}

#[derive(Debug, Clone)]
pub struct RawDebtRecord {
    pub id: String,
    pub name: String,
    pub total_owed: Option<f64>,
    pub payment_amount: Option<f64>,
    pub frequency: String,
    pub start_date: String,
}

/// Parses a user-facing frequency string. Unknown values are rejected here,
/// before they can reach the enumerator: an unrecognized frequency has no
/// period-advance step, so letting one through would stall enumeration.
pub fn parse_frequency(value: &str) -> Result<Frequency> {
    match value.trim().to_lowercase().as_str() {
        "weekly" => Ok(Frequency::Weekly),
        "bi-weekly" | "biweekly" => Ok(Frequency::BiWeekly),
        "monthly" => Ok(Frequency::Monthly),
        "annually" | "yearly" => Ok(Frequency::Annually),
        "one-time" | "onetime" | "once" => Ok(Frequency::OneTime),
        _ => Err(ForecastError::UnknownFrequency(value.to_string())),
    }
}

pub fn parse_start_date(field: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| ForecastError::InvalidDate {
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Lenient amount policy: missing, non-finite, or negative values become
/// zero. The engine assumes non-negative decimals, so the coercion happens
/// here rather than deeper in.
fn coerce_amount(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}

pub fn resolve_item(raw: &RawItemRecord) -> Result<RecurringItem> {
    Ok(RecurringItem {
        id: raw.id.clone(),
        name: raw.name.clone(),
        amount: coerce_amount(raw.amount),
        frequency: parse_frequency(&raw.frequency)?,
        start_date: parse_start_date(&format!("{}.start_date", raw.name), &raw.start_date)?,
    })
}

pub fn resolve_debt(raw: &RawDebtRecord) -> Result<Debt> {
    Ok(Debt {
        id: raw.id.clone(),
        name: raw.name.clone(),
        total_owed: coerce_amount(raw.total_owed),
        payment_amount: coerce_amount(raw.payment_amount),
        frequency: parse_frequency(&raw.frequency)?,
        start_date: parse_start_date(&format!("{}.start_date", raw.name), &raw.start_date)?,
    })
}

/// Assembles a validated snapshot from raw records. Fails on the first
/// unparseable frequency or date; amounts follow the lenient policy above.
pub fn resolve_config(
    starting_balance: f64,
    incomes: &[RawItemRecord],
    bills: &[RawItemRecord],
    debts: &[RawDebtRecord],
) -> Result<ForecastConfig> {
    Ok(ForecastConfig {
        starting_balance: if starting_balance.is_finite() {
            starting_balance
        } else {
            0.0
        },
        incomes: incomes.iter().map(resolve_item).collect::<Result<_>>()?,
        bills: bills.iter().map(resolve_item).collect::<Result<_>>()?,
        debts: debts.iter().map(resolve_debt).collect::<Result<_>>()?,
    })
}
