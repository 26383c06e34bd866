use rust_decimal::Decimal;
use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[source] toml::ser::Error),
}

/// Errors surfaced by the odds provider boundary.
///
/// Clone-able so a single fetch failure can be shared between concurrent
/// callers of the quote store's single-flight `refresh()`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("provider returned HTTP {status}")]
    Status { status: u16 },

    #[error("failed to decode provider response: {0}")]
    Decode(String),

    #[error("refresh cancelled")]
    Cancelled,
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        ProviderError::Request(err.to_string())
    }
}

impl From<url::ParseError> for ProviderError {
    fn from(err: url::ParseError) -> Self {
        ProviderError::Request(format!("invalid provider url: {err}"))
    }
}

/// Invalid inputs at the live recalculation boundary.
///
/// Quotes coming through the provider are validated at decode, so the pure
/// calculators never see these; only user-typed numbers can trip them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("stake must be positive, got {stake}")]
    InvalidStake { stake: Decimal },

    #[error("decimal price must be greater than 1.0, got {price}")]
    InvalidPrice { price: Decimal },

    #[error("commission {commission} leaves no effective lay price at {lay_price}")]
    CommissionTooHigh {
        commission: Decimal,
        lay_price: Decimal,
    },

    #[error("outcome slot {slot} out of range for a three-outcome market")]
    InvalidSlot { slot: usize },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
