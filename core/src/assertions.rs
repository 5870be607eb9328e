use crate::error::AuctionCoreError;
use crate::state::AuctionRequest;

/// Runs all request checks. A request that passes may be scheduled without
/// any further error path.
pub fn check_request(request: &AuctionRequest) -> Result<(), AuctionCoreError> {
    check_asset_pair(request)?;
    check_amount(request.amount_to_sell)?;
    check_prices(request.start_price, request.reserve_price)?;
    Ok(())
}

pub fn check_asset_pair(request: &AuctionRequest) -> Result<(), AuctionCoreError> {
    if request.asset_to_sell == request.asset_to_receive {
        return Err(AuctionCoreError::SameAssetPair);
    }
    Ok(())
}

pub fn check_amount(amount: f64) -> Result<(), AuctionCoreError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(AuctionCoreError::InvalidAmount);
    }
    Ok(())
}

pub fn check_prices(start_price: f64, reserve_price: f64) -> Result<(), AuctionCoreError> {
    if !start_price.is_finite()
        || !reserve_price.is_finite()
        || start_price <= 0.0
        || reserve_price <= 0.0
    {
        return Err(AuctionCoreError::InvalidPrice);
    }
    if reserve_price > start_price {
        return Err(AuctionCoreError::ReserveAboveStartingPrice);
    }
    Ok(())
}
