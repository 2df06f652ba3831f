mod category;
mod errors;
mod period;
mod registration;
mod transaction;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub use category::{default_categories, find_category, CategoryDef, PLACEHOLDER_CATEGORY};
pub use errors::{PeriodError, ValidationError};
pub use period::Period;
pub use registration::{NewTransaction, ValidTransaction};
pub use transaction::{parse_record_date, Transaction, TransactionRecord};

/// Direction of a transaction. The stored form keeps the wire names used by
/// the mobile client (`positive` / `negative`).
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    #[serde(rename = "positive", alias = "income")]
    Income,
    #[serde(rename = "negative", alias = "expense")]
    Expense
}

impl Display for TransactionType {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Income => write!(formatter, "income"),
            TransactionType::Expense => write!(formatter, "expense")
        }
    }
}

impl FromStr for TransactionType {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "income" | "positive" => Ok(TransactionType::Income),
            "expense" | "negative" => Ok(TransactionType::Expense),
            _ => Err(ValidationError::TypeNotSelected)
        }
    }
}
