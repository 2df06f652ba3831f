use chrono::{DateTime, SecondsFormat, Utc};
use std::str::FromStr;

use crate::models::errors::ValidationError;
use crate::models::{find_category, CategoryDef, TransactionRecord, TransactionType, PLACEHOLDER_CATEGORY};
use crate::types::{Amount, AmountError, CategoryKey, RawAmount, TransactionId};

/// The register form as the user filled it in.
#[derive(Debug, Clone, Default)]
pub struct NewTransaction {
    pub name: String,
    /// Raw text of the amount field.
    pub amount: String,
    pub transaction_type: Option<TransactionType>,
    pub category: Option<CategoryKey>
}

/// A form that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidTransaction {
    pub name: String,
    pub amount: Amount,
    pub transaction_type: TransactionType,
    pub category: CategoryKey
}

impl NewTransaction {
    /// Checks the form in the order the user sees the fields: name and
    /// amount first, then the type toggle, then the category picker.
    pub fn validate(&self, categories: &[CategoryDef]) -> Result<ValidTransaction, ValidationError> {
        let name = self.name.trim();

        if name.is_empty() {
            return Err(ValidationError::NameRequired)
        }

        let amount = match Amount::from_str(&self.amount) {
            Ok(amount) if amount.is_zero() => return Err(ValidationError::AmountNotPositive),
            Ok(amount) => amount,
            Err(AmountError::Empty) => return Err(ValidationError::AmountRequired),
            Err(AmountError::Negative(_)) => return Err(ValidationError::AmountNotPositive),
            Err(_) => return Err(ValidationError::AmountNotNumeric)
        };

        let Some(transaction_type) = self.transaction_type else {
            return Err(ValidationError::TypeNotSelected)
        };

        let category = match self.category.as_deref().map(str::trim) {
            None | Some("") | Some(PLACEHOLDER_CATEGORY) => return Err(ValidationError::CategoryNotSelected),
            Some(key) => key
        };

        if find_category(categories, category).is_none() {
            return Err(ValidationError::UnknownCategory(category.to_string()))
        }

        Ok(ValidTransaction {
            name: name.to_string(),
            amount,
            transaction_type,
            category: category.to_string()
        })
    }
}

impl ValidTransaction {
    pub fn into_record(self, id: TransactionId, date: DateTime<Utc>) -> TransactionRecord {
        TransactionRecord {
            id,
            name: self.name,
            amount: RawAmount::from(self.amount.value()),
            transaction_type: self.transaction_type,
            category: self.category,
            date: date.to_rfc3339_opts(SecondsFormat::Millis, true)
        }
    }
}
