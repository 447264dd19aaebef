//! Error types for courier pricing

use crate::parcel::ParcelType;
use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Pricing errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid parcel size: {height} x {width} x {depth} (every dimension must be > 0)")]
    InvalidParcelDimension {
        height: Decimal,
        width: Decimal,
        depth: Decimal,
    },

    #[error("Invalid parcel weight: {0} (must not be negative)")]
    InvalidParcelWeight(Decimal),

    /// A rate lookup found no entry for the category. Unreachable with a
    /// validated configuration.
    #[error("Invalid parcel type: no rate entry for {0}")]
    InvalidParcelType(ParcelType),

    /// A monetary amount left the representable `Decimal` range
    #[error("Arithmetic overflow while computing {0}")]
    Arithmetic(&'static str),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_norway::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}
