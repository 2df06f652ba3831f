use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::engine::aggregation::{summarize_by_category, summarize_by_type, CategoryTotal, TypeTotals};
use crate::engine::format::Formatter;
use crate::models::{CategoryDef, Period, Transaction, TransactionType};
use crate::types::{CategoryKey, TransactionId};

/// One highlight card: a formatted total and a line about its latest
/// transaction.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct PeriodHighlight {
    pub total: Decimal,
    pub amount: String,
    /// `None` when there is no transaction to describe.
    pub last_date: Option<NaiveDateTime>,
    pub last_transaction: String
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Highlights {
    pub entries: PeriodHighlight,
    pub expenses: PeriodHighlight,
    pub total: PeriodHighlight
}

impl Highlights {
    pub fn build(totals: &TypeTotals, formatter: &Formatter) -> Self {
        Self {
            entries: PeriodHighlight {
                total: totals.income,
                amount: formatter.currency(totals.income),
                last_date: totals.last_income,
                last_transaction: formatter.last_income_label(totals.last_income)
            },
            expenses: PeriodHighlight {
                total: totals.expense,
                amount: formatter.currency(totals.expense),
                last_date: totals.last_expense,
                last_transaction: formatter.last_expense_label(totals.last_expense)
            },
            total: PeriodHighlight {
                total: totals.net,
                amount: formatter.currency(totals.net),
                last_date: totals.last_income,
                last_transaction: formatter.interval_label(totals.last_income)
            }
        }
    }
}

/// A category row of the monthly breakdown, ready to be charted.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct CategorySummary {
    pub key: CategoryKey,
    pub name: String,
    pub color: String,
    pub total: Decimal,
    pub total_formatted: String,
    pub percent: String
}

impl CategorySummary {
    pub fn build(category_total: &CategoryTotal, formatter: &Formatter) -> Self {
        Self {
            key: category_total.key.clone(),
            name: category_total.name.clone(),
            color: category_total.color.clone(),
            total: category_total.total,
            total_formatted: formatter.currency(category_total.total),
            percent: formatter.percent(category_total.percent)
        }
    }
}

/// A row of the dashboard listing.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct TransactionView {
    pub id: TransactionId,
    pub name: String,
    pub amount: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub category: CategoryKey,
    pub date: String
}

impl TransactionView {
    pub fn build(transaction: &Transaction, formatter: &Formatter) -> Self {
        Self {
            id: transaction.id.clone(),
            name: transaction.name.clone(),
            amount: formatter.currency(transaction.amount.value()),
            transaction_type: transaction.transaction_type,
            category: transaction.category.clone(),
            date: formatter.short_date(transaction.date)
        }
    }
}

/// Everything the main screen shows.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Dashboard {
    pub highlights: Highlights,
    /// Listing in stored order.
    pub transactions: Vec<TransactionView>
}

impl Dashboard {
    pub fn build(transactions: &[Transaction], formatter: &Formatter) -> Self {
        Self {
            highlights: Highlights::build(&summarize_by_type(transactions), formatter),
            transactions: transactions.iter()
                .map(|transaction| TransactionView::build(transaction, formatter))
                .collect()
        }
    }
}

/// The monthly category breakdown.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Resume {
    pub period: String,
    pub label: String,
    pub categories: Vec<CategorySummary>
}

impl Resume {
    pub fn build(transactions: &[Transaction], period: Period, categories: &[CategoryDef], formatter: &Formatter) -> Self {
        Self {
            period: period.to_string(),
            label: formatter.month_year(period),
            categories: summarize_by_category(transactions, period, categories).iter()
                .map(|category_total| CategorySummary::build(category_total, formatter))
                .collect()
        }
    }
}
