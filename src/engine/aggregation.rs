//! Locale-free arithmetic over a user's transactions.
//!
//! Every function here is a pure transform of its inputs: nothing is read
//! from the clock and the input slice is never modified.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use chrono::NaiveDateTime;

use crate::models::{CategoryDef, Period, Transaction, TransactionType};
use crate::types::{Amount, CategoryKey};

/// All-time totals per transaction type.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct TypeTotals {
    pub income: Decimal,
    pub expense: Decimal,
    /// `income - expense`.
    pub net: Decimal,
    pub last_income: Option<NaiveDateTime>,
    pub last_expense: Option<NaiveDateTime>
}

/// Expense total of one category within a period.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CategoryTotal {
    pub key: CategoryKey,
    pub name: String,
    pub color: String,
    /// Always greater than zero.
    pub total: Decimal,
    /// Share of the period's expenses, rounded to a whole percent.
    pub percent: u32
}

pub fn summarize_by_type(transactions: &[Transaction]) -> TypeTotals {
    let income = sum(transactions.iter().filter(|transaction| transaction.is(TransactionType::Income)));
    let expense = sum(transactions.iter().filter(|transaction| transaction.is(TransactionType::Expense)));

    TypeTotals {
        income,
        expense,
        net: income - expense,
        last_income: last_transaction_date(transactions, TransactionType::Income),
        last_expense: last_transaction_date(transactions, TransactionType::Expense)
    }
}

/// Latest date among the transactions of the given type. Transactions whose
/// date could not be read are ignored; `None` means there is nothing to show.
pub fn last_transaction_date(transactions: &[Transaction], transaction_type: TransactionType) -> Option<NaiveDateTime> {
    transactions.iter()
        .filter(|transaction| transaction.is(transaction_type))
        .filter_map(|transaction| transaction.date)
        .max()
}

/// Expense breakdown for one calendar month.
///
/// Categories are reported in table order. A category with nothing spent in
/// the period is left out, so an empty period yields an empty list.
pub fn summarize_by_category(transactions: &[Transaction], period: Period, categories: &[CategoryDef]) -> Vec<CategoryTotal> {
    let expenses: Vec<&Transaction> = transactions.iter()
        .filter(|transaction| transaction.is(TransactionType::Expense))
        .filter(|transaction| transaction.date.is_some_and(|date| period.contains(date)))
        .collect();

    let period_total = sum(expenses.iter().copied());

    categories.iter()
        .filter_map(|category| {
            let total = sum(expenses.iter().copied().filter(|expense| expense.category == category.key));

            if total.is_zero() {
                return None
            }

            Some(CategoryTotal {
                key: category.key.clone(),
                name: category.name.clone(),
                color: category.color.clone(),
                total,
                percent: percent_of(total, period_total)
            })
        })
        .collect()
}

fn sum<'a>(transactions: impl Iterator<Item = &'a Transaction>) -> Decimal {
    let mut total = Amount::ZERO;

    for transaction in transactions {
        total += transaction.amount;
    }

    total.value()
}

/// The share is capped at 100: a period total that stopped growing on
/// overflow can be smaller than one of its parts.
fn percent_of(part: Decimal, whole: Decimal) -> u32 {
    part.checked_div(whole)
        .map(|ratio| ratio.min(Decimal::ONE))
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .map(|percent| percent.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|percent| percent.to_u32())
        .unwrap_or(0)
}
