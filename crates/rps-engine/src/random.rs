//! Seeded pseudo-random number generator
//!
//! Deterministic PRNG so that a session can be replayed from its seed.
//! Uses xorshift64* and plugs into `rand` through `RngCore`/`SeedableRng`,
//! so the engine stays generic over any `rand::Rng`.

use rand::{Error, RngCore, SeedableRng};

/// Substituted for an all-zero state, which xorshift never leaves
const NONZERO_STATE: u64 = 0x9e3779b97f4a7c15;

/// Seeded random number generator
///
/// Deterministic: same seed = same sequence
#[derive(Clone, Debug)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Create a new RNG from a 32-byte seed
    pub fn new(seed: &[u8; 32]) -> Self {
        let mut state = 0u64;
        for (i, chunk) in seed.chunks(8).enumerate() {
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(chunk);
            state ^= u64::from_le_bytes(bytes).wrapping_add(i as u64);
        }
        if state == 0 {
            state = NONZERO_STATE;
        }

        let mut rng = Self { state };
        for _ in 0..8 {
            rng.step();
        }
        rng
    }

    fn step(&mut self) -> u64 {
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(0x2545f4914f6cdd1d)
    }
}

impl RngCore for SeededRng {
    fn next_u32(&mut self) -> u32 {
        (self.step() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.step()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for SeededRng {
    type Seed = [u8; 32];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(&seed)
    }
}
