use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;
use tokio::task::spawn_blocking;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::engine::errors::RegisterError;
use crate::engine::format::{Formatter, Locale};
use crate::engine::views::{Dashboard, Resume};
use crate::models::{default_categories, CategoryDef, NewTransaction, Period, Transaction, TransactionRecord};
use crate::storage::{Storage, StorageError};

const DATA_KEY_PREFIX: &str = "@gofinances:transactions_user:";

/// Loads a user's transactions from the store and turns them into the data
/// the dashboard, resume and register screens need.
///
/// The tracker keeps no state between calls: every method re-reads the
/// whole list and recomputes from scratch.
pub struct Tracker<S: Storage> {
    storage: Arc<S>,
    categories: Arc<Vec<CategoryDef>>,
    formatter: Formatter
}

impl<S: Storage> Tracker<S> {
    /// Creates a tracker over the given store with the built-in category
    /// table and the default locale.
    pub fn new(storage: Arc<S>) -> Self {
        Self {
            storage,
            categories: Arc::new(default_categories()),
            formatter: Formatter::default()
        }
    }

    pub fn with_categories(mut self, categories: Vec<CategoryDef>) -> Self {
        self.categories = Arc::new(categories);
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.formatter = Formatter::new(locale);
        self
    }

    pub fn categories(&self) -> &[CategoryDef] {
        &self.categories
    }

    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    /// Store key holding the transactions of one user.
    pub fn data_key(user_id: &str) -> String {
        format!("{DATA_KEY_PREFIX}{user_id}")
    }

    /// Reads every transaction of the user.
    ///
    /// A missing key and a failed read both come back as an empty history.
    /// Entries that are not transaction records are skipped.
    pub async fn load(&self, user_id: &str) -> Vec<Transaction> {
        let key = Self::data_key(user_id);

        let values = match self.read(key.clone()).await {
            Ok(Some(values)) => values,
            Ok(None) => {
                debug!("No transactions stored under [{key}]");
                return Vec::new()
            },
            Err(error) => {
                error!("Reading [{key}] failed, showing an empty history: {error}");
                return Vec::new()
            }
        };

        decode(values)
    }

    pub async fn dashboard(&self, user_id: &str) -> Dashboard {
        let transactions = self.load(user_id).await;
        Dashboard::build(&transactions, &self.formatter)
    }

    pub async fn resume(&self, user_id: &str, period: Period) -> Resume {
        let transactions = self.load(user_id).await;
        Resume::build(&transactions, period, &self.categories, &self.formatter)
    }

    /// Validates the form and appends the new transaction to the user's list.
    ///
    /// Nothing is read or written when validation fails. Entries already in
    /// the store are written back exactly as they were read.
    pub async fn register(&self, user_id: &str, form: &NewTransaction) -> Result<TransactionRecord, RegisterError> {
        let valid = form.validate(&self.categories)?;
        let record = valid.into_record(Uuid::new_v4().to_string(), Utc::now());
        let value = serde_json::to_value(&record).map_err(StorageError::from)?;

        let key = Self::data_key(user_id);
        let mut values = self.read(key.clone()).await?.unwrap_or_default();
        values.push(value);

        let storage = self.storage.clone();
        let write_key = key.clone();
        spawn_blocking(move || storage.set(&write_key, values)).await??;

        info!("Transaction [{}]:[{}] saved under [{key}]", record.id, record.transaction_type);

        Ok(record)
    }

    async fn read(&self, key: String) -> Result<Option<Vec<Value>>, RegisterError> {
        let storage = self.storage.clone();
        let values = spawn_blocking(move || storage.get(&key)).await??;
        Ok(values)
    }
}

fn decode(values: Vec<Value>) -> Vec<Transaction> {
    values.into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value::<TransactionRecord>(value) {
            Ok(record) => Some(Transaction::from_record(&record)),
            Err(error) => {
                warn!("Skipping stored entry [{index}]: {error}");
                None
            }
        })
        .collect()
}
