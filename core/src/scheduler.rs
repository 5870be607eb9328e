use crate::assertions::check_request;
use crate::entropy::RandomSource;
use crate::error::AuctionCoreError;
use crate::state::{AuctionRecord, AuctionRequest, SubAuctionDescriptor};
use crate::utils::{map_value_to_range, InputRange, Range};
use crate::{
    AUCTION_ID_BYTES, BLOCKS_PER_MINUTE, BLOCK_TIME_SECONDS, MAX_SUB_AUCTIONS,
    MAX_TOTAL_DURATION_SECS, MIN_SUB_AUCTIONS, START_DELAY_MINUTES,
};

/// Number of sub-auctions a request of the given total duration is split
/// into. Linear in the duration and clamped to the representable range by
/// construction, so even a 96 hour auction pays at most
/// [`MAX_SUB_AUCTIONS`] fixed per-auction fees.
pub fn number_of_auctions(duration_secs: u64) -> u64 {
    map_value_to_range(
        InputRange {
            value: duration_secs as f64,
            min: 0.0,
            max: MAX_TOTAL_DURATION_SECS as f64,
        },
        Range {
            min: MIN_SUB_AUCTIONS as f64,
            max: MAX_SUB_AUCTIONS as f64,
        },
    ) as u64
}

/// Splits a validated request into sub-auction descriptors.
///
/// All slices share the same start height, a fixed delay of
/// [`START_DELAY_MINUTES`] from submission that leaves the user a window to
/// cancel. End heights grow with the slice index plus a random sub-minute
/// overlap so consecutive windows slightly overlap instead of leaving gaps.
pub fn schedule_sub_auctions(
    request: &AuctionRequest,
    current_height: u64,
    random: &mut dyn RandomSource,
) -> Result<Vec<SubAuctionDescriptor>, AuctionCoreError> {
    let number_of_auctions = number_of_auctions(request.duration_secs);
    let per_slice_amount = request.amount_to_sell / number_of_auctions as f64;
    let per_slice_duration_secs = request.duration_secs / number_of_auctions;
    let blocks_per_slice = per_slice_duration_secs.div_ceil(BLOCK_TIME_SECONDS);
    let start_height = current_height + BLOCKS_PER_MINUTE * START_DELAY_MINUTES;

    let mut sub_auctions = Vec::with_capacity(number_of_auctions as usize);
    for index in 0..number_of_auctions {
        let mut jitter = [0_u8; 1];
        random.fill_bytes(&mut jitter)?;
        let overlap_blocks = u64::from(jitter[0]) % BLOCKS_PER_MINUTE;

        sub_auctions.push(SubAuctionDescriptor {
            start_height,
            end_height: (index + 1) * blocks_per_slice + overlap_blocks,
            input_amount: per_slice_amount,
            max_output: per_slice_amount * request.start_price,
            min_output: per_slice_amount * request.reserve_price,
            nonce: random.nonce()?,
        });
    }

    Ok(sub_auctions)
}

/// Validates a request and turns it into a persistable record.
///
/// Validation failures abort before any randomness is consumed.
pub fn create_auction_record(
    request: &AuctionRequest,
    current_height: u64,
    random: &mut dyn RandomSource,
) -> Result<AuctionRecord, AuctionCoreError> {
    check_request(request)?;

    let sub_auctions = schedule_sub_auctions(request, current_height, random)?;
    let mut id_bytes = [0_u8; AUCTION_ID_BYTES];
    random.fill_bytes(&mut id_bytes)?;

    Ok(AuctionRecord {
        id: hex::encode(id_bytes),
        asset_to_sell: request.asset_to_sell,
        asset_to_receive: request.asset_to_receive,
        amount_to_sell: request.amount_to_sell,
        sub_auctions,
        duration_secs: request.duration_secs,
        start_block: current_height + BLOCKS_PER_MINUTE * START_DELAY_MINUTES,
        start_price: request.start_price,
        end_price: request.reserve_price,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::entropy::CyclingRandom;
    use crate::state::Asset;
    use crate::utils::DURATION_TABLE;

    fn request(duration_secs: u64) -> AuctionRequest {
        AuctionRequest {
            asset_to_sell: Asset::Eth,
            asset_to_receive: Asset::Tia,
            amount_to_sell: 100.0,
            start_price: 5.0,
            reserve_price: 3.0,
            duration_secs,
        }
    }

    #[test]
    fn auction_count_is_bounded_and_monotonic() {
        let mut previous = 0;
        for (_, duration_secs) in DURATION_TABLE {
            let count = number_of_auctions(duration_secs);
            assert!((MIN_SUB_AUCTIONS..=MAX_SUB_AUCTIONS).contains(&count));
            assert!(count >= previous);
            previous = count;
        }
        assert_eq!(number_of_auctions(0), MIN_SUB_AUCTIONS);
        assert_eq!(number_of_auctions(MAX_TOTAL_DURATION_SECS), MAX_SUB_AUCTIONS);
    }

    #[test]
    fn one_hour_auction_is_a_single_slice() {
        let mut random = CyclingRandom::new();
        let slices = schedule_sub_auctions(&request(3600), 0, &mut random).unwrap();
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].input_amount, 100.0);
        assert_eq!(slices[0].max_output, 500.0);
        assert_eq!(slices[0].min_output, 300.0);
        assert_eq!(slices[0].start_height, BLOCKS_PER_MINUTE * START_DELAY_MINUTES);
    }

    #[test]
    fn end_heights_are_strictly_increasing() {
        for (_, duration_secs) in DURATION_TABLE {
            let mut random = CyclingRandom::new();
            let slices = schedule_sub_auctions(&request(duration_secs), 0, &mut random).unwrap();
            for pair in slices.windows(2) {
                assert!(
                    pair[0].end_height < pair[1].end_height,
                    "end heights not increasing for duration {}",
                    duration_secs
                );
            }
        }
    }

    #[test]
    fn slice_amounts_sum_to_total() {
        for (_, duration_secs) in DURATION_TABLE {
            let mut random = CyclingRandom::new();
            let slices = schedule_sub_auctions(&request(duration_secs), 0, &mut random).unwrap();
            let sum: f64 = slices.iter().map(|s| s.input_amount).sum();
            assert!((sum - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn overlap_stays_below_one_minute_of_blocks() {
        let mut random = CyclingRandom::new();
        let slices = schedule_sub_auctions(&request(MAX_TOTAL_DURATION_SECS), 0, &mut random)
            .unwrap();
        let blocks_per_slice = (MAX_TOTAL_DURATION_SECS / 30).div_ceil(BLOCK_TIME_SECONDS);
        for (index, slice) in slices.iter().enumerate() {
            let overlap = slice.end_height - (index as u64 + 1) * blocks_per_slice;
            assert!(overlap < BLOCKS_PER_MINUTE);
        }
    }

    #[test]
    fn record_carries_request_fields() {
        let mut random = CyclingRandom::new();
        let record = create_auction_record(&request(3600), 10, &mut random).unwrap();
        assert_eq!(record.id.len(), AUCTION_ID_BYTES * 2);
        assert_eq!(record.asset_to_sell, Asset::Eth);
        assert_eq!(record.asset_to_receive, Asset::Tia);
        assert_eq!(record.amount_to_sell, 100.0);
        assert_eq!(record.duration_secs, 3600);
        assert_eq!(record.start_block, 10 + BLOCKS_PER_MINUTE * START_DELAY_MINUTES);
        assert_eq!(record.start_price, 5.0);
        assert_eq!(record.end_price, 3.0);
        assert_eq!(record.sub_auctions.len(), 1);
    }

    #[test]
    fn invalid_request_consumes_no_randomness() {
        let mut random = CyclingRandom::new();
        let mut invalid = request(3600);
        invalid.reserve_price = 10.0;
        let error = create_auction_record(&invalid, 0, &mut random).unwrap_err();
        assert_eq!(error, AuctionCoreError::ReserveAboveStartingPrice);
        assert_eq!(random.bytes_drawn, 0);
    }

    #[test]
    fn nonces_are_drawn_per_slice() {
        let mut random = CyclingRandom::new();
        let slices = schedule_sub_auctions(&request(MAX_TOTAL_DURATION_SECS), 0, &mut random)
            .unwrap();
        assert_eq!(slices.len(), MAX_SUB_AUCTIONS as usize);
        for pair in slices.windows(2) {
            assert_ne!(pair[0].nonce, pair[1].nonce);
        }
        // one jitter byte plus one nonce per slice
        assert_eq!(
            random.bytes_drawn,
            MAX_SUB_AUCTIONS as usize * (1 + crate::NONCE_LEN)
        );
    }
}
