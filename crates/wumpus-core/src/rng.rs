//! Deterministic RNG helpers.
//!
//! Small and dependency-free, **not** cryptographic. Everything random in a game (map layout,
//! exploration order) draws from an injected `DeterministicRng`, so a seed replays a game exactly.

pub trait DeterministicRng {
    fn next_u64(&mut self) -> u64;

    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Uniform value in `0..bound`. Returns 0 when `bound` is 0.
    fn next_below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        // Rejection sampling keeps small bounds unbiased.
        let threshold = u32::MAX - (u32::MAX % bound);
        loop {
            let x = self.next_u32();
            if x < threshold {
                return x % bound;
            }
        }
    }

    fn next_index(&mut self, len: usize) -> usize {
        self.next_below(len.min(u32::MAX as usize) as u32) as usize
    }

    /// Fisher-Yates shuffle.
    fn shuffle<T>(&mut self, items: &mut [T])
    where
        Self: Sized,
    {
        for i in (1..items.len()).rev() {
            let j = self.next_index(i + 1);
            items.swap(i, j);
        }
    }
}

impl<R: DeterministicRng + ?Sized> DeterministicRng for Box<R> {
    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }
}

/// SplitMix64: good seeding RNG and small deterministic generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Independent generator for one consumer (`stream`) of a game seed.
    pub fn for_stream(seed: u64, stream: u64) -> Self {
        Self::new(derive_seed(seed, stream))
    }
}

impl DeterministicRng for SplitMix64 {
    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E3779B97F4A7C15);
        mix64(self.state)
    }
}

pub fn mix64(mut x: u64) -> u64 {
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D049BB133111EB);
    x ^ (x >> 31)
}

pub fn derive_seed(game_seed: u64, stream: u64) -> u64 {
    mix64(game_seed ^ mix64(stream.wrapping_add(0x9E3779B97F4A7C15)))
}

/// Stream used for map generation.
pub const WORLD_STREAM: u64 = 1;
/// Stream used for the agent's exploration order.
pub const AGENT_STREAM: u64 = 2;
