use crate::types::errors::AmountError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::AddAssign;
use std::str::FromStr;
use tracing::{error, warn};

/// An amount exactly as it was found in the store.
///
/// Records written by older clients carry the amount either as a JSON string
/// (the form submitted by the register screen) or as a JSON number. Anything
/// else is kept so it can be reported and written back untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Number(Number),
    Text(String),
    Other(Value)
}

impl Default for RawAmount {
    fn default() -> Self {
        RawAmount::Other(Value::Null)
    }
}

impl From<&str> for RawAmount {
    fn from(value: &str) -> Self {
        RawAmount::Text(value.to_string())
    }
}

impl From<Decimal> for RawAmount {
    fn from(value: Decimal) -> Self {
        RawAmount::Text(value.to_string())
    }
}

/// A non-negative monetary magnitude. Direction is carried by the
/// transaction type, never by the sign of the amount.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Amount = Amount(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(AmountError::Negative(value.to_string()));
        }

        Ok(Amount(value))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn checked_add(self, rhs: Amount) -> Option<Amount> {
        self.0.checked_add(rhs.0).map(Amount)
    }

    /// Interprets a stored amount strictly.
    pub fn from_raw(raw: &RawAmount) -> Result<Self, AmountError> {
        match raw {
            RawAmount::Text(text) => Amount::from_str(text),
            RawAmount::Number(number) => Amount::from_number(number),
            RawAmount::Other(value) => Err(AmountError::UnsupportedValue(value.to_string()))
        }
    }

    /// Interprets a stored amount, treating anything unusable as zero.
    ///
    /// This is the single place where a malformed record is allowed to
    /// degrade instead of failing: the record still counts as a transaction,
    /// it just contributes nothing to any total.
    pub fn parse_or_zero(raw: &RawAmount) -> Self {
        Amount::from_raw(raw).unwrap_or_else(|error| {
            warn!("Treating amount as zero: {error}");
            Amount::ZERO
        })
    }

    fn from_number(number: &Number) -> Result<Self, AmountError> {
        let text = number.to_string();
        let value = Decimal::from_str(&text)
            .or_else(|_| Decimal::from_scientific(&text))
            .map_err(|_| AmountError::InvalidFormat(text.clone()))?;

        Amount::new(value)
    }
}

impl AddAssign<Amount> for Amount {
    fn add_assign(&mut self, rhs: Amount) {
        if let Some(new_val) = self.checked_add(rhs) {
            self.0 = new_val.0;
        } else {
            error!("Amount AddAssign error: Overflow")
        }
    }
}

impl Display for Amount {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(AmountError::Empty);
        }

        let unsigned = value.strip_prefix('+').unwrap_or(value);

        if !unsigned.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | 'e' | 'E'))
            || !unsigned.chars().any(|c| c.is_ascii_digit()) {
            return Err(AmountError::InvalidFormat(value.to_string()));
        }

        let parsed = if unsigned.contains(['e', 'E']) {
            Decimal::from_scientific(unsigned)
        } else {
            Decimal::from_str(unsigned)
        };

        let parsed = parsed.map_err(|error| {
            match error {
                rust_decimal::Error::ExceedsMaximumPossibleValue
                | rust_decimal::Error::LessThanMinimumPossibleValue => AmountError::Overflow,
                _ => AmountError::InvalidFormat(value.to_string())
            }
        })?;

        Amount::new(parsed)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}
