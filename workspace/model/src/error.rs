use rust_decimal::Decimal;
use thiserror::Error;

/// Error types for the period data store
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// The same period label appears twice in one collection
    #[error("Duplicate period '{period}' in {collection}")]
    DuplicatePeriod { collection: String, period: String },

    /// A monetary field that must be a magnitude is negative
    #[error("Negative {field} for '{period}' in {collection}: {amount}")]
    NegativeAmount {
        collection: String,
        period: String,
        field: &'static str,
        amount: Decimal,
    },

    /// Balance sheet violates assets = liabilities + equity
    #[error("Balance sheet '{period}' does not balance: assets {assets}, liabilities + equity {funding}")]
    Unbalanced {
        period: String,
        assets: Decimal,
        funding: Decimal,
    },

    /// The balancing equity position came out negative
    #[error("Balance sheet '{period}' has negative retained earnings: {amount}")]
    NegativeBalancingPosition { period: String, amount: Decimal },

    /// No collection exists for the requested company
    #[error("Unknown company: {0}")]
    UnknownCompany(String),
}

/// Type alias for Result with ModelError
pub type Result<T> = std::result::Result<T, ModelError>;
