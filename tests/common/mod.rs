//! Shared fixture for the collection suite.
//!
//! Each test builds its own [`CollectionFixture`]; the random source is owned
//! by the fixture and explicitly seeded, so no test depends on process-wide
//! state and every run sees the same data.

use copy_dyn_vec::CopyDynVec;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seed used by [`CollectionFixture::new`].
pub const DEFAULT_SEED: u64 = 0x00c0_11ec_7100_5eed;

/// Owns the collection under test and the generator feeding it.
pub struct CollectionFixture {
    pub collection: CopyDynVec<i32>,
    rng: ChaCha8Rng,
}

impl CollectionFixture {
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            collection: CopyDynVec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Appends `count` pseudorandom values in `0..100`.
    ///
    /// # Panics
    ///
    /// Panics if `count == 0`; a fixture call that adds nothing is a test bug.
    pub fn add_entries(&mut self, count: usize) {
        assert!(count > 0, "add_entries needs a positive count");
        for _ in 0..count {
            let value = self.rng.random_range(0..100);
            self.collection.push(value);
        }
    }
}
