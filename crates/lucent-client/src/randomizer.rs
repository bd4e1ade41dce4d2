//! Shuffling of candidate identifiers for random ordering.

use lucent_proto::Value;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Permutes a list of identifiers in place.
pub trait ListRandomizer {
    /// Reorder `ids` in place.
    fn randomize(&self, ids: &mut [Value]);
}

impl<R: ListRandomizer + ?Sized> ListRandomizer for &R {
    fn randomize(&self, ids: &mut [Value]) {
        (**self).randomize(ids)
    }
}

/// Uniform random permutation from the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShuffleRandomizer;

impl ListRandomizer for ShuffleRandomizer {
    fn randomize(&self, ids: &mut [Value]) {
        ids.shuffle(&mut rand::thread_rng());
    }
}

/// Reproducible permutation driven by a fixed seed.
///
/// Successive calls continue the same random stream, so two randomizers built
/// from the same seed produce the same sequence of permutations.
#[derive(Debug)]
pub struct SeededRandomizer {
    rng: Mutex<StdRng>,
}

impl SeededRandomizer {
    /// Create a randomizer from `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl ListRandomizer for SeededRandomizer {
    fn randomize(&self, ids: &mut [Value]) {
        ids.shuffle(&mut *self.rng.lock());
    }
}
