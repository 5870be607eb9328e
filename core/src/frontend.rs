use crate::error::AuctionCoreError;
use crate::state::AuctionRecord;
use crate::BLOCK_TIME_SECONDS;

use serde::{Deserialize, Serialize};

use std::fmt;

/// Lifecycle state of a persisted auction. Forward-only in wall-clock time
/// and recomputed on every call, never stored.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum AuctionStatus {
    Queued,
    Active,
    Ended,
}

impl fmt::Display for AuctionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = match self {
            Self::Queued => "queued",
            Self::Active => "active",
            Self::Ended => "ended",
        };
        write!(f, "{}", status)
    }
}

/// UI-facing projection of a persisted auction record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontendAuction {
    pub status: AuctionStatus,
    /// Integer percentage in [0, 100].
    pub progress: u8,
    /// Approximated start of the auction (unix seconds).
    pub start_timestamp: i64,
    /// Approximated end of the auction (unix seconds).
    pub end_timestamp: i64,
}

/// Maps a block height to a wall-clock timestamp as a linear approximation
/// from the given chain genesis reference.
pub fn height_to_timestamp(genesis: i64, height: u64) -> i64 {
    genesis + (BLOCK_TIME_SECONDS * height) as i64
}

/// Derives status and progress for a record at the given wall-clock time.
///
/// `genesis` anchors the height-to-time approximation; there is no real
/// chain clock in this core.
pub fn project(record: &AuctionRecord, genesis: i64, now: i64) -> FrontendAuction {
    let start_timestamp = height_to_timestamp(genesis, record.start_block);
    let end_timestamp = start_timestamp + record.duration_secs as i64;

    let status = if now < start_timestamp {
        AuctionStatus::Queued
    } else if now < end_timestamp {
        AuctionStatus::Active
    } else {
        AuctionStatus::Ended
    };

    FrontendAuction {
        status,
        progress: progress(start_timestamp, end_timestamp, now),
        start_timestamp,
        end_timestamp,
    }
}

fn progress(start_timestamp: i64, end_timestamp: i64, now: i64) -> u8 {
    if now <= start_timestamp {
        0
    } else if now >= end_timestamp {
        100
    } else {
        let elapsed = (now - start_timestamp) as f64;
        let window = (end_timestamp - start_timestamp) as f64;
        (100.0 * elapsed / window).round() as u8
    }
}

/// Removes the record with the given id from the list, provided it has not
/// ended yet. Ended auctions can no longer be cancelled.
pub fn try_cancel(
    records: &mut Vec<AuctionRecord>,
    auction_id: &str,
    genesis: i64,
    now: i64,
) -> Result<(), AuctionCoreError> {
    let index = records
        .iter()
        .position(|record| record.id == auction_id)
        .ok_or(AuctionCoreError::AuctionNotFound)?;

    if project(&records[index], genesis, now).status == AuctionStatus::Ended {
        return Err(AuctionCoreError::AuctionEnded);
    }

    records.remove(index);
    Ok(())
}
