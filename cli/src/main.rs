mod cli_opts;

use cli_opts::{AuctionCliOpt, Command};

use dutch_auction_core::entropy::OsRandom;
use dutch_auction_core::frontend::{project, try_cancel};
use dutch_auction_core::scheduler::create_auction_record;
use dutch_auction_core::state::AuctionRequest;
use dutch_auction_core::store::{AuctionStore, JsonFileStore};
use dutch_auction_core::utils::duration_from_slider;
use dutch_auction_core::START_DELAY_MINUTES;

use env_logger::Env;
use log::{error, info};
use structopt::StructOpt;

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Artificial delay simulating a pending submission (milliseconds).
const SUBMISSION_DELAY: u64 = 2000;

#[tokio::main]
async fn main() {
    let opt = AuctionCliOpt::from_args();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Err(e) = try_main(opt).await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn try_main(opt: AuctionCliOpt) -> Result<(), anyhow::Error> {
    let store = match opt.store {
        Some(path) => JsonFileStore::new(path),
        None => {
            let base = std::env::var_os("HOME")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."));
            JsonFileStore::in_dir(&base)
        }
    };

    match opt.command {
        Command::Create {
            sell,
            receive,
            amount,
            start_price,
            reserve_price,
            duration,
            current_height,
        } => {
            let request = AuctionRequest {
                asset_to_sell: sell,
                asset_to_receive: receive,
                amount_to_sell: amount,
                start_price,
                reserve_price,
                duration_secs: duration_from_slider(duration),
            };
            let record = create_auction_record(&request, current_height, &mut OsRandom)?;

            info!("starting auction");
            tokio::time::sleep(std::time::Duration::from_millis(SUBMISSION_DELAY)).await;

            let mut records = store.load()?;
            records.push(record.clone());
            store.save(&records)?;

            info!(
                "auction \"{}\" created: {} sub-auction(s) queued to start in {} minutes",
                record.id,
                record.sub_auctions.len(),
                START_DELAY_MINUTES
            );
        }
        Command::List => {
            let records = store.load()?;
            if records.is_empty() {
                info!("no auctions found");
                return Ok(());
            }
            let now = unix_now()?;
            for record in &records {
                // no real chain clock is available, so the height-to-time
                // approximation is anchored at the current time
                let view = project(record, now, now);
                println!(
                    "{}    {} {} -> {} - {} {}    status: {}    progress: {}%    start: {}    end: {}",
                    record.id,
                    record.amount_to_sell,
                    record.asset_to_sell,
                    record.amount_to_sell * record.end_price,
                    record.amount_to_sell * record.start_price,
                    record.asset_to_receive,
                    view.status,
                    view.progress,
                    view.start_timestamp,
                    view.end_timestamp,
                );
            }
        }
        Command::Cancel { id } => {
            let mut records = store.load()?;
            let now = unix_now()?;
            try_cancel(&mut records, &id, now, now)?;
            store.save(&records)?;
            info!("auction \"{}\" cancelled", id);
        }
    }

    Ok(())
}

fn unix_now() -> Result<i64, anyhow::Error> {
    let elapsed = SystemTime::now().duration_since(UNIX_EPOCH)?;
    Ok(elapsed.as_secs() as i64)
}
