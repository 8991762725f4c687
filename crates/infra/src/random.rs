// crates/infra/src/random.rs
use draw_numbers_ports::random::RandomSource;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Thread-local RNG adapter; the default source for interactive draws.
#[derive(Default)]
pub struct ThreadRngSource {
    rng: ThreadRng,
}

impl ThreadRngSource {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl RandomSource for ThreadRngSource {
    fn next_in(&mut self, low: i64, high: i64) -> i64 {
        self.rng.gen_range(low..=high)
    }
}

/// Deterministic source for reproducible draws.
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededSource {
    fn next_in(&mut self, low: i64, high: i64) -> i64 {
        self.rng.gen_range(low..=high)
    }
}
