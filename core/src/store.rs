use crate::error::StoreError;
use crate::state::AuctionRecord;
use crate::STORAGE_SLOT;

use std::cell::RefCell;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// The persistence boundary: the ordered list of auction records is the sole
/// source of truth and is read and written as a whole (single writer,
/// last-writer-wins).
pub trait AuctionStore {
    /// Loads the persisted records. An absent slot yields an empty list.
    fn load(&self) -> Result<Vec<AuctionRecord>, StoreError>;
    /// Replaces the persisted records with the given list.
    fn save(&self, records: &[AuctionRecord]) -> Result<(), StoreError>;
}

/// File-backed store keeping the whole list as one self-describing JSON
/// document under the named storage slot.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Places the storage slot file in the given directory.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            path: dir.join(format!("{}.json", STORAGE_SLOT)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AuctionStore for JsonFileStore {
    fn load(&self) -> Result<Vec<AuctionRecord>, StoreError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, records: &[AuctionRecord]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_vec_pretty(records)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// In-memory store for tests and demos.
#[derive(Default)]
pub struct MemoryStore {
    records: RefCell<Vec<AuctionRecord>>,
}

impl AuctionStore for MemoryStore {
    fn load(&self) -> Result<Vec<AuctionRecord>, StoreError> {
        Ok(self.records.borrow().clone())
    }

    fn save(&self, records: &[AuctionRecord]) -> Result<(), StoreError> {
        *self.records.borrow_mut() = records.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::state::{Asset, SubAuctionDescriptor};
    use crate::NONCE_LEN;

    fn sample_record() -> AuctionRecord {
        AuctionRecord {
            id: "a1b2c3".to_string(),
            asset_to_sell: Asset::Btc,
            asset_to_receive: Asset::Eth,
            amount_to_sell: 2.5,
            sub_auctions: vec![
                SubAuctionDescriptor {
                    start_height: 25,
                    end_height: 300,
                    input_amount: 1.25,
                    max_output: 6.25,
                    min_output: 3.75,
                    nonce: [1; NONCE_LEN],
                },
                SubAuctionDescriptor {
                    start_height: 25,
                    end_height: 602,
                    input_amount: 1.25,
                    max_output: 6.25,
                    min_output: 3.75,
                    nonce: [2; NONCE_LEN],
                },
            ],
            duration_secs: 7200,
            start_block: 25,
            start_price: 5.0,
            end_price: 3.0,
        }
    }

    #[test]
    fn file_store_round_trips_records() {
        let dir = std::env::temp_dir().join("auction-store-round-trip-test");
        let store = JsonFileStore::in_dir(&dir);
        // leftover state from a previous run
        let _ = fs::remove_file(store.path());

        assert!(store.load().unwrap().is_empty());

        let records = vec![sample_record()];
        store.save(&records).unwrap();
        let reloaded = store.load().unwrap();
        assert_eq!(reloaded, records);

        fs::remove_file(store.path()).unwrap();
    }

    #[test]
    fn memory_store_round_trips_records() {
        let store = MemoryStore::default();
        assert!(store.load().unwrap().is_empty());

        let records = vec![sample_record(), sample_record()];
        store.save(&records).unwrap();
        assert_eq!(store.load().unwrap(), records);

        store.save(&[]).unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn json_preserves_every_field() {
        let record = sample_record();
        let json = serde_json::to_string(&vec![record.clone()]).unwrap();
        let reloaded: Vec<AuctionRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(reloaded, vec![record]);
    }
}
