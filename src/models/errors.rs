use crate::types::CategoryKey;
use thiserror::Error;

/// Reasons a registration form is rejected before anything is stored.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,
    #[error("Amount is required")]
    AmountRequired,
    #[error("Enter a numeric amount")]
    AmountNotNumeric,
    #[error("Amount must be greater than zero")]
    AmountNotPositive,
    #[error("Select the transaction type")]
    TypeNotSelected,
    #[error("Select the category")]
    CategoryNotSelected,
    #[error("Category [{0}] does not exist")]
    UnknownCategory(CategoryKey)
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PeriodError {
    #[error("Month [{0}] is out of range, expected 1-12")]
    InvalidMonth(u32),
    #[error("Period [{0}] is invalid, expected YYYY-MM")]
    InvalidFormat(String)
}
