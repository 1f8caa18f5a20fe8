//! Seeded pseudo-random numbers for hand-drawn jitter.
//!
//! Every piece of randomness in a cloud outline comes from a generator keyed
//! by a string, so the same shape always renders the same wobble.

/// A stream of pseudo-random draws.
pub trait Generator {
    /// Next draw, in `[-1, 1)`.
    fn next_f64(&mut self) -> f64;
}

/// Factory for generators keyed by a seed string.
///
/// Implementations must be deterministic: two generators built from the same
/// seed produce the same sequence of draws.
pub trait RandomSource {
    type Gen: Generator;

    /// Create a fresh generator for `seed`.
    fn generator(&self, seed: &str) -> Self::Gen;
}

/// Default random source: a xorshift128 generator seeded from the UTF-16
/// code units of the seed string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Xorshift;

impl RandomSource for Xorshift {
    type Gen = XorshiftRng;

    fn generator(&self, seed: &str) -> XorshiftRng {
        XorshiftRng::new(seed)
    }
}

/// Xorshift generator state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XorshiftRng {
    x: i32,
    y: i32,
    z: i32,
    w: i32,
}

/// Number of warm-up rounds run after the seed has been mixed in.
const WARMUP_ROUNDS: usize = 64;

impl XorshiftRng {
    /// Create a generator keyed by `seed`.
    pub fn new(seed: &str) -> Self {
        let mut rng = Self { x: 0, y: 0, z: 0, w: 0 };
        let units: Vec<u16> = seed.encode_utf16().collect();
        for k in 0..units.len() + WARMUP_ROUNDS {
            rng.x ^= units.get(k).copied().map_or(0, i32::from);
            rng.step();
        }
        rng
    }

    fn step(&mut self) -> i32 {
        let t = self.x ^ self.x.wrapping_shl(11);
        self.x = self.y;
        self.y = self.z;
        self.z = self.w;
        // Logical shifts on the unsigned view, stored back as signed.
        let tu = t as u32;
        let mix = ((self.w as u32) >> 19) ^ tu ^ (tu >> 8);
        self.w = ((self.w as u32) ^ mix) as i32;
        self.w
    }
}

impl Generator for XorshiftRng {
    fn next_f64(&mut self) -> f64 {
        let w = self.step();
        (f64::from(w) / 4_294_967_296.0) * 2.0
    }
}

/// Shorthand for a generator from the default [`Xorshift`] source.
pub fn rng(seed: &str) -> XorshiftRng {
    Xorshift.generator(seed)
}
