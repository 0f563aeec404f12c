//! Shared test helpers.

use rand::{Error, RngCore};

/// RNG wrapper that counts word draws, so tests observe how much
/// entropy a descent actually consumed instead of deriving it.
pub struct CountingRng<R> {
    inner: R,
    /// Number of `next_u32`/`next_u64` draws taken so far.
    pub draws: u64,
}

impl<R: RngCore> CountingRng<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, draws: 0 }
    }
}

impl<R: RngCore> RngCore for CountingRng<R> {
    fn next_u32(&mut self) -> u32 {
        self.draws += 1;
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.draws += 1;
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.inner.try_fill_bytes(dest)
    }
}
