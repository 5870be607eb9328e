use std::fmt;

/// Errors surfaced by request validation, scheduling and cancellation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuctionCoreError {
    InvalidAmount,
    InvalidPrice,
    ReserveAboveStartingPrice,
    SameAssetPair,
    UnknownAsset(String),
    AuctionNotFound,
    AuctionEnded,
    EntropyUnavailable,
}

impl fmt::Display for AuctionCoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAmount => write!(f, "amount to sell must be a positive number"),
            Self::InvalidPrice => write!(f, "prices must be positive numbers"),
            Self::ReserveAboveStartingPrice => {
                write!(f, "reserve price cannot exceed starting price")
            }
            Self::SameAssetPair => {
                write!(f, "asset to sell and asset to receive must differ")
            }
            Self::UnknownAsset(ticker) => write!(f, "unknown asset \"{}\"", ticker),
            Self::AuctionNotFound => write!(f, "no auction found with this id"),
            Self::AuctionEnded => write!(f, "auction has already ended"),
            Self::EntropyUnavailable => write!(f, "system entropy source is unavailable"),
        }
    }
}

impl std::error::Error for AuctionCoreError {}

/// Errors of the persistence boundary.
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Serialization(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "auction storage i/o error: {}", e),
            Self::Serialization(e) => write!(f, "auction storage serialization error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Serialization(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e)
    }
}
