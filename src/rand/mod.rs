//! Random number generation.
//!
//! Generators never reach for a global RNG. They take a [`RandomSource`],
//! which is implemented for every [`RngCore`]: the default [`Rand`] below,
//! `rand::rngs::OsRng`, or a seeded `StdRng` in tests.

mod hw;
mod primes;

use std::cell::Cell;

use ::rand::rngs::OsRng;
use ::rand::{Rng, RngCore};

use primes::PRIMES;

/// Capability to draw uniform integers.
pub trait RandomSource {
    /// Uniform integer in `[0, n)`. `n` must be non-zero.
    fn next_below(&mut self, n: usize) -> usize;
}

impl<R: RngCore> RandomSource for R {
    #[inline]
    fn next_below(&mut self, n: usize) -> usize {
        self.gen_range(0..n)
    }
}

// =============================================================================
// Entropy source selection
// =============================================================================

/// Where the binary takes its randomness from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Source {
    /// [`Rand`]: hardware counter mixed into a per-thread state.
    #[default]
    Hardware,
    /// The operating system RNG.
    Os,
}

impl Source {
    pub fn from_urandom_flag(urandom: bool) -> Self {
        if urandom { Source::Os } else { Source::Hardware }
    }

    pub fn name(self) -> &'static str {
        match self {
            Source::Hardware => hw::SOURCE,
            Source::Os => "os rng",
        }
    }

    pub fn rng(self) -> Box<dyn RandomSource> {
        match self {
            Source::Hardware => Box::new(Rand),
            Source::Os => Box::new(OsRng),
        }
    }
}

// =============================================================================
// RNG
// =============================================================================

const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

thread_local! {
    static STATE: Cell<u64> = Cell::new(hw::entropy().wrapping_add(GOLDEN_GAMMA));
}

/// Default generator. Each thread owns its own state, so handles can be
/// created freely and used from any number of threads at once.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rand;

impl Rand {
    #[inline]
    pub fn get() -> u64 {
        STATE.with(|cell| {
            let state = cell.get();
            let ent = hw::entropy();

            // Mix entropy into prime selection
            let mixed = state ^ ent;
            let idx = ((mixed ^ (mixed >> 32)) % PRIMES.len() as u64) as usize;

            // State transition: rotate, multiply by prime, XOR entropy.
            // The gamma step keeps the state moving when the counter is flat.
            let new_state = state
                .rotate_left(17)
                .wrapping_mul(PRIMES[idx])
                .wrapping_add(GOLDEN_GAMMA)
                ^ ent;
            cell.set(new_state);

            finalize(new_state)
        })
    }
}

/// SplitMix64 output finalizer.
#[inline(always)]
fn finalize(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

impl RngCore for Rand {
    fn next_u32(&mut self) -> u32 {
        (Rand::get() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        Rand::get()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        rand_core::impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
