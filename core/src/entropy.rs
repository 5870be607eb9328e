use crate::error::AuctionCoreError;
use crate::NONCE_LEN;

/// Capability for drawing raw entropy.
///
/// The scheduler consumes at most `MAX_SUB_AUCTIONS` nonces of [`NONCE_LEN`]
/// bytes plus one jitter byte per slice per submission, so implementations
/// must be safe to call repeatedly without exhausting the underlying source.
pub trait RandomSource {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), AuctionCoreError>;

    /// Draws a random nonce to distinguish otherwise identical sub-auctions.
    fn nonce(&mut self) -> Result<[u8; NONCE_LEN], AuctionCoreError> {
        let mut nonce = [0_u8; NONCE_LEN];
        self.fill_bytes(&mut nonce)?;
        Ok(nonce)
    }
}

/// Operating system entropy source.
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), AuctionCoreError> {
        getrandom::getrandom(dest).map_err(|_| AuctionCoreError::EntropyUnavailable)
    }
}

/// Deterministic source for tests: emits a cycling byte counter and records
/// how many bytes were drawn.
#[cfg(test)]
pub struct CyclingRandom {
    next: u8,
    pub bytes_drawn: usize,
}

#[cfg(test)]
impl CyclingRandom {
    pub fn new() -> Self {
        Self {
            next: 0,
            bytes_drawn: 0,
        }
    }
}

#[cfg(test)]
impl RandomSource for CyclingRandom {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), AuctionCoreError> {
        for byte in dest.iter_mut() {
            *byte = self.next;
            self.next = self.next.wrapping_add(1);
        }
        self.bytes_drawn += dest.len();
        Ok(())
    }
}
