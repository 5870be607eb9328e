use dutch_auction_core::state::Asset;

use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(about = "Configure and track Dutch auction sell orders")]
pub struct AuctionCliOpt {
    #[structopt(
        long,
        help("Path of the auction storage file (defaults to the storage slot in the home directory)")
    )]
    pub store: Option<PathBuf>,
    #[structopt(subcommand)]
    pub command: Command,
}

#[derive(Debug, StructOpt)]
pub enum Command {
    /// Validates the given parameters and queues a new auction
    Create {
        #[structopt(long, help("Asset to sell (eth, tia, btc)"))]
        sell: Asset,
        #[structopt(long, help("Asset to receive (eth, tia, btc)"))]
        receive: Asset,
        #[structopt(long, help("Amount of the sold asset to auction off"))]
        amount: f64,
        #[structopt(long = "start-price", help("Price at the start of the auction"))]
        start_price: f64,
        #[structopt(long = "reserve-price", help("Lowest acceptable price"))]
        reserve_price: f64,
        #[structopt(
            long,
            default_value = "25",
            help("Duration slider position (0, 12.5, 25, 37.5, 50, 62.5, 75, 87.5 or 100)")
        )]
        duration: f64,
        #[structopt(long = "current-height", default_value = "0", help("Current block height"))]
        current_height: u64,
    },
    /// Lists persisted auctions with their status and progress
    List,
    /// Cancels a queued or active auction
    Cancel {
        #[structopt(long, help("Id of the auction to cancel"))]
        id: String,
    },
}
