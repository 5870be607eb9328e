//! Core library for configuring and tracking Dutch auction sell orders.
//!
//! A user request is split into a sequence of overlapping sub-auctions
//! expressed in block-height coordinates, and persisted records are projected
//! back into a lifecycle status and progress percentage for display.
mod error;

/// Checks for validating auction requests before scheduling.
pub mod assertions;
/// Injectable source of raw entropy for nonces and overlap jitter.
pub mod entropy;
/// Projection of persisted auction records into UI-facing status data.
pub mod frontend;
/// Partitioning of a validated request into sub-auction descriptors.
pub mod scheduler;
/// Data structures that describe auction requests and persisted records.
pub mod state;
/// Persistence boundary for the ordered list of auction records.
pub mod store;
/// Range mapping and duration slider utilities.
pub mod utils;

pub use error::{AuctionCoreError, StoreError};

/// Block time of the target chain. We assume 12 seconds for simplicity.
pub const BLOCK_TIME_SECONDS: u64 = 12;
/// Number of blocks produced per minute.
pub const BLOCKS_PER_MINUTE: u64 = 60 / BLOCK_TIME_SECONDS;
/// Delay between submission and the first block of the auction, giving the
/// user a window to cancel.
pub const START_DELAY_MINUTES: u64 = 5;
/// Minimum number of sub-auctions a request is split into.
pub const MIN_SUB_AUCTIONS: u64 = 1;
/// Maximum number of sub-auctions a request is split into, bounding the
/// fixed per-sub-auction fee cost regardless of the requested duration.
pub const MAX_SUB_AUCTIONS: u64 = 30;
/// Length of a sub-auction nonce in bytes. The nonce only guarantees
/// uniqueness, it is not cryptographically binding.
pub const NONCE_LEN: usize = 10;
/// Number of random bytes in an auction record id.
pub const AUCTION_ID_BYTES: usize = 16;
/// Fallback duration for unknown slider positions (10 minutes).
pub const DEFAULT_DURATION_SECS: u64 = 600;
/// Longest selectable total duration (96 hours).
pub const MAX_TOTAL_DURATION_SECS: u64 = 345_600;
/// Name of the key-value slot holding the serialized auction list.
pub const STORAGE_SLOT: &str = "auctions-storage";
