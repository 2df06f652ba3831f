mod amount;
mod errors;

pub use amount::{Amount, RawAmount};
pub use errors::AmountError;

pub type UserId = String;
pub type TransactionId = String;
pub type CategoryKey = String;
