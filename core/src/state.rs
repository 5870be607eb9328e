use crate::error::AuctionCoreError;
use crate::NONCE_LEN;

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Assets that can be auctioned off or received.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Asset {
    Eth,
    Tia,
    Btc,
}

impl Asset {
    /// Human readable name shown next to the ticker in selection lists.
    pub fn full_name(self) -> &'static str {
        match self {
            Self::Eth => "Ethereum",
            Self::Tia => "Celestia",
            Self::Btc => "Bitcoin",
        }
    }

    pub fn ticker(self) -> &'static str {
        match self {
            Self::Eth => "eth",
            Self::Tia => "tia",
            Self::Btc => "btc",
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ticker().to_uppercase())
    }
}

impl FromStr for Asset {
    type Err = AuctionCoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "eth" => Ok(Self::Eth),
            "tia" => Ok(Self::Tia),
            "btc" => Ok(Self::Btc),
            other => Err(AuctionCoreError::UnknownAsset(other.to_string())),
        }
    }
}

/// A user's auction submission as collected by the input form.
///
/// Requests are ephemeral; they must pass
/// [`check_request`](crate::assertions::check_request) before any scheduling
/// takes place.
#[derive(Debug, Clone, PartialEq)]
pub struct AuctionRequest {
    /// The asset being sold.
    pub asset_to_sell: Asset,
    /// The asset received in exchange.
    pub asset_to_receive: Asset,
    /// Total amount of `asset_to_sell` put up for auction.
    pub amount_to_sell: f64,
    /// Price (in `asset_to_receive` per unit) at the start of the auction.
    pub start_price: f64,
    /// Floor price the auction decays towards.
    pub reserve_price: f64,
    /// Total duration of the sum of sub-auctions, in seconds.
    pub duration_secs: u64,
}

/// One of the N sequential, minimally overlapping mini-auctions that
/// together fulfill a single request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubAuctionDescriptor {
    /// First block of the sub-auction. Shared by all slices of a request so
    /// that they start simultaneously.
    pub start_height: u64,
    /// Last block of the sub-auction, strictly increasing with slice index.
    pub end_height: u64,
    /// Amount of the sold asset allocated to this slice (total / N).
    pub input_amount: f64,
    /// Output received if the slice clears at the starting price.
    pub max_output: f64,
    /// Output received if the slice clears at the reserve price.
    pub min_output: f64,
    /// Random bytes distinguishing otherwise identical slices.
    pub nonce: [u8; NONCE_LEN],
}

/// A persisted auction. Created atomically on submission, removed only by
/// explicit cancellation while not yet ended, never mutated in place.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuctionRecord {
    /// Random identifier token.
    pub id: String,
    /// The asset being sold.
    pub asset_to_sell: Asset,
    /// The asset received in exchange.
    pub asset_to_receive: Asset,
    /// Total amount to sell across all sub-auctions.
    pub amount_to_sell: f64,
    /// Sub-auction descriptors in slice index order.
    pub sub_auctions: Vec<SubAuctionDescriptor>,
    /// Total duration in seconds.
    pub duration_secs: u64,
    /// First block of the auction.
    pub start_block: u64,
    /// Price at the start of the auction.
    pub start_price: f64,
    /// Price at the end of the auction.
    pub end_price: f64,
}
