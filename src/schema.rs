use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Frequency {
    #[schemars(description = "Repeats every 7 days from the start date")]
    Weekly,

    #[schemars(description = "Repeats every 14 days from the start date")]
    BiWeekly,

    #[schemars(
        description = "Repeats on the same day of each month; days that do not exist in a shorter month clamp to its last day (Jan 31 -> Feb 28)"
    )]
    Monthly,

    #[schemars(
        description = "Repeats on the same month and day each year; Feb 29 clamps to Feb 28 in non-leap years"
    )]
    Annually,

    #[schemars(description = "Occurs exactly once, on the start date")]
    OneTime,
}

impl Frequency {
    /// Fixed period length in days, for the day-count frequencies only.
    pub fn period_days(&self) -> Option<i64> {
        match self {
            Frequency::Weekly => Some(7),
            Frequency::BiWeekly => Some(14),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Frequency::Weekly => "Weekly",
            Frequency::BiWeekly => "Bi-Weekly",
            Frequency::Monthly => "Monthly",
            Frequency::Annually => "Annually",
            Frequency::OneTime => "One-Time",
        }
    }
}

/// An income or a bill. Which of the two it is depends on the collection it
/// is supplied in, not on the record itself.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RecurringItem {
    #[schemars(description = "Caller-assigned unique identifier for this item")]
    pub id: String,

    #[schemars(description = "Display name (e.g. 'Paycheck', 'Rent')")]
    pub name: String,

    #[schemars(
        description = "Amount received (income) or due (bill) per occurrence. Must be non-negative."
    )]
    pub amount: f64,

    #[schemars(description = "How often the item occurs")]
    pub frequency: Frequency,

    #[schemars(
        description = "Date of the first occurrence, in YYYY-MM-DD. May be in the past; the engine resolves the next occurrence relative to the reference date."
    )]
    pub start_date: NaiveDate,
}

/// A debt paid down on a schedule. Cumulative payments never exceed
/// `total_owed`; the final payment is clipped to the remaining balance.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Debt {
    #[schemars(description = "Caller-assigned unique identifier for this debt")]
    pub id: String,

    #[schemars(description = "Display name (e.g. 'Car Loan')")]
    pub name: String,

    #[schemars(description = "Original principal owed. Must be non-negative.")]
    pub total_owed: f64,

    #[schemars(description = "Amount paid per occurrence. Must be non-negative.")]
    pub payment_amount: f64,

    #[schemars(description = "How often a payment is made")]
    pub frequency: Frequency,

    #[schemars(description = "Date of the first scheduled payment, in YYYY-MM-DD")]
    pub start_date: NaiveDate,
}

/// The immutable snapshot of account state a caller hands to the engine.
/// The engine never mutates it and retains nothing between calls.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ForecastConfig {
    #[schemars(description = "Account balance as of the reference date")]
    pub starting_balance: f64,

    #[schemars(description = "Recurring and one-time incomes")]
    pub incomes: Vec<RecurringItem>,

    #[schemars(description = "Recurring and one-time bills")]
    pub bills: Vec<RecurringItem>,

    #[schemars(description = "Debts paid down on a schedule")]
    pub debts: Vec<Debt>,
}

impl ForecastConfig {
    pub fn generate_json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(ForecastConfig)
    }

    pub fn schema_as_json() -> Result<String, serde_json::Error> {
        let schema = Self::generate_json_schema();
        serde_json::to_string_pretty(&schema)
    }
}
