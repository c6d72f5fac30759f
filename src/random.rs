// Randomness source injected into the bot
//
// Either the thread-local generator (seeded once per thread from OS entropy)
// or a single seeded generator shared behind a lock for reproducible games.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

pub enum RandomSource {
    Thread,
    Seeded(Mutex<StdRng>),
}

impl RandomSource {
    /// Builds a seeded source when a seed is given, the thread-local one otherwise
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => RandomSource::Seeded(Mutex::new(StdRng::seed_from_u64(seed))),
            None => RandomSource::Thread,
        }
    }

    /// Lends a generator to `f` for the duration of one decision
    pub fn with_rng<T>(&self, f: impl FnOnce(&mut dyn RngCore) -> T) -> T {
        match self {
            RandomSource::Thread => {
                let mut rng = rand::rng();
                f(&mut rng)
            }
            RandomSource::Seeded(rng) => {
                let mut guard = rng.lock();
                f(&mut *guard)
            }
        }
    }
}

impl std::fmt::Debug for RandomSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RandomSource::Thread => f.write_str("RandomSource::Thread"),
            RandomSource::Seeded(_) => f.write_str("RandomSource::Seeded"),
        }
    }
}
