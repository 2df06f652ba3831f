use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("Amount error: value is empty")]
    Empty,
    #[error("Amount error: invalid format [{0}]")]
    InvalidFormat(String),
    #[error("Amount error: negative value [{0}]")]
    Negative(String),
    #[error("Amount error: unsupported value [{0}]")]
    UnsupportedValue(String),
    #[error("Amount error: Overflow")]
    Overflow
}
