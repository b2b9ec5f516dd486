#![allow(dead_code)]

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

/// Seeded random source so a failing run can be replayed from its seed.
pub struct Fuzzer {
    pub seed: u64,
    rng: Xoshiro256StarStar,
}

impl Fuzzer {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Xoshiro256StarStar::seed_from_u64(seed),
        }
    }

    pub fn random_int(&mut self, min: i32, max: i32) -> i32 {
        self.rng.gen_range(min..=max)
    }

    pub fn values(&mut self, len: usize, max: i32) -> Vec<i32> {
        (0..len).map(|_| self.random_int(0, max)).collect()
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}

/// Height bound of an AVL tree with `len` nodes.
pub fn avl_height_bound(len: usize) -> u32 {
    (1.4405 * ((len + 2) as f64).log2() - 0.3277).floor() as u32
}
