use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::models::TransactionType;
use crate::types::{Amount, CategoryKey, RawAmount, TransactionId};

/// A transaction as persisted in the store.
///
/// Every field except `type` tolerates being absent or holding the wrong
/// JSON type so that a partially written entry still deserializes; the
/// values are interpreted later by [`Transaction::from_record`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: TransactionId,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default)]
    pub amount: RawAmount,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    #[serde(default, deserialize_with = "lenient_string")]
    pub category: CategoryKey,
    /// ISO-8601 date-time as written by the client.
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String
}

/// Strings are taken as is and numbers by their JSON text. Anything else
/// reads as empty.
fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Number(number) => number.to_string(),
        _ => String::default()
    })
}

/// A record after the boundary checks, ready for aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: TransactionId,
    pub name: String,
    /// Zero when the stored amount could not be read.
    pub amount: Amount,
    pub transaction_type: TransactionType,
    pub category: CategoryKey,
    /// `None` when the stored date could not be read.
    pub date: Option<NaiveDateTime>
}

impl Transaction {
    pub fn from_record(record: &TransactionRecord) -> Self {
        let date = parse_record_date(&record.date);

        if date.is_none() {
            debug!("Transaction [{}] has an unreadable date [{}]", record.id, record.date);
        }

        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            amount: Amount::parse_or_zero(&record.amount),
            transaction_type: record.transaction_type,
            category: record.category.clone(),
            date
        }
    }

    pub fn is(&self, transaction_type: TransactionType) -> bool {
        self.transaction_type == transaction_type
    }
}

impl From<&TransactionRecord> for Transaction {
    fn from(record: &TransactionRecord) -> Self {
        Transaction::from_record(record)
    }
}

/// Reads a stored date. Offsets are normalized to UTC; values without an
/// offset are taken as already being UTC.
pub fn parse_record_date(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    if let Ok(date_time) = DateTime::parse_from_rfc3339(value) {
        return Some(date_time.naive_utc())
    }

    if let Ok(date_time) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(date_time)
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}
