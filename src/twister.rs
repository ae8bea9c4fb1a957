use super::prime;
use super::word::Word;
use super::{Error, RngCore, SeedableRng};
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

/// Scalar seed applied before the first extraction if none was given.
pub const DEFAULT_SEED: i64 = 5489;

/// Scalar seed that array seeding starts from.
pub const ARRAY_SEED: i64 = 19650218;

/// Mersenne Twister over words of type `W`, with `N` words of state
/// and feedback tap at offset `M`.
///
/// Period is 2**19937 - 1 for both standard parameter sets.
/// Not suitable for cryptographic use: the full state can be recovered from `N` outputs.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound(serialize = "W: Serialize", deserialize = "W: Deserialize<'de>")))]
#[derive(Clone, Eq, PartialEq)]
pub struct MersenneTwister<W: Word, const N: usize, const M: usize> {
    /// Circular state buffer.
    #[cfg_attr(feature = "serde", serde(with = "crate::words"))]
    state: [W; N],
    /// Words left in the current block, plus one. Regeneration happens when it reaches 0.
    left: usize,
    /// Index of the next word to extract.
    next: usize,
    /// Whether a seed has been applied.
    seeded: bool,
}

// As recommended, this Debug implementation does not expose internal state.
impl<W: Word, const N: usize, const M: usize> core::fmt::Debug for MersenneTwister<W, N, M> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "MersenneTwister {{}}")
    }
}

impl<W: Word, const N: usize, const M: usize> Default for MersenneTwister<W, N, M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Word, const N: usize, const M: usize> MersenneTwister<W, N, M> {

    /// Creates an unseeded generator.
    /// The default seed is applied on first extraction.
    pub fn new() -> Self {
        MersenneTwister { state: [W::ZERO; N], left: 1, next: 0, seeded: false }
    }

    /// Creates a generator seeded with a scalar.
    pub fn with_seed(seed: i64) -> Self {
        let mut mt = Self::new();
        mt.seed(seed);
        mt
    }

    /// Creates a generator seeded with a key.
    ///
    /// # Panics
    /// If `key` is empty.
    pub fn with_key(key: &[W]) -> Self {
        let mut mt = Self::new();
        mt.seed_array(key);
        mt
    }

    /// Creates a generator with a scalar seed drawn from the operating system.
    #[cfg(feature = "getrandom")]
    pub fn try_from_entropy() -> Result<Self, Error> {
        let mt = Self::from_rng(super::OsRng)?;
        log::debug!("seeded {}-word Mersenne Twister from entropy", N);
        Ok(mt)
    }

    /// Returns whether a seed has been applied, explicitly or by default.
    #[inline]
    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    /// Initializes state from a scalar seed. Only the low word of `seed` is used.
    /// The next extraction regenerates the state.
    pub fn seed(&mut self, seed: i64) {
        self.state[0] = W::from_seed(seed);
        for j in 1 .. N {
            self.state[j] = W::init_step(self.state[j - 1], j);
        }
        self.left = 1;
        self.seeded = true;
    }

    /// Initializes state from a key of any length.
    /// Every word of the key influences the whole state.
    ///
    /// # Panics
    /// If `key` is empty.
    pub fn seed_array(&mut self, key: &[W]) {
        assert!(!key.is_empty(), "Mersenne Twister key must not be empty");
        self.seed(ARRAY_SEED);

        let mut i = 1;
        let mut j = 0;
        for _ in 0 .. N.max(key.len()) {
            self.state[i] = W::mix_forward(self.state[i], self.state[i - 1], key[j], j);
            i += 1;
            j += 1;
            if i >= N {
                self.state[0] = self.state[N - 1];
                i = 1;
            }
            if j >= key.len() {
                j = 0;
            }
        }
        for _ in 0 .. N - 1 {
            self.state[i] = W::mix_backward(self.state[i], self.state[i - 1], i);
            i += 1;
            if i >= N {
                self.state[0] = self.state[N - 1];
                i = 1;
            }
        }

        // MSB is 1, so the state cannot be all zero.
        self.state[0] = W::SIGN_BIT;
        self.left = 1;
        self.seeded = true;
    }

    #[inline]
    fn twist(upper: W, lower: W) -> W {
        let y = (upper & W::UPPER_MASK) | (lower & W::LOWER_MASK);
        if y & W::ONE == W::ONE {
            (y >> 1) ^ W::MATRIX_A
        } else {
            y >> 1
        }
    }

    /// Regenerates all N words of state in place.
    fn regenerate(&mut self) {
        if !self.seeded {
            log::trace!("applying default seed {}", DEFAULT_SEED);
            self.seed(DEFAULT_SEED);
        }

        let s = &mut self.state;
        // Words from i + M onward have not been regenerated yet.
        for i in 0 .. N - M {
            s[i] = s[i + M] ^ Self::twist(s[i], s[i + 1]);
        }
        // Feedback now comes from words regenerated in this pass.
        for i in N - M .. N - 1 {
            s[i] = s[i + M - N] ^ Self::twist(s[i], s[i + 1]);
        }
        s[N - 1] = s[M - 1] ^ Self::twist(s[N - 1], s[0]);

        self.left = N;
        self.next = 0;
    }

    /// Returns the next untempered state word.
    #[inline]
    fn next_raw(&mut self) -> W {
        self.left -= 1;
        if self.left == 0 {
            self.regenerate();
        }
        let y = self.state[self.next];
        self.next += 1;
        y
    }

    /// Generates the next tempered word.
    #[inline]
    pub fn next_word(&mut self) -> W {
        self.next_raw().temper()
    }

    /// Generates a non-negative signed integer by clearing the sign bit of the next word.
    #[inline]
    pub fn next_int(&mut self) -> W::Signed {
        self.next_word().to_non_negative()
    }

    /// Generates a number in [0, n) as the next word modulo `n`.
    ///
    /// # Panics
    /// If `n` is zero.
    #[inline]
    pub fn next_below(&mut self, n: W) -> W {
        self.next_word() % n
    }

    /// Generates a real in [0, 1].
    #[inline]
    pub fn next_real1(&mut self) -> f64 {
        self.next_word().to_real1()
    }

    /// Generates a real in [0, 1).
    #[inline]
    pub fn next_real2(&mut self) -> f64 {
        self.next_word().to_real2()
    }

    /// Generates a real in (0, 1).
    #[inline]
    pub fn next_real3(&mut self) -> f64 {
        self.next_word().to_real3()
    }

    /// Discards `count` words. Equivalent to calling `next_word` `count` times.
    pub fn discard(&mut self, mut count: u64) {
        while count > 0 {
            let available = (self.left - 1) as u64;
            if available == 0 {
                self.next_raw();
                count -= 1;
            } else {
                let skip = available.min(count);
                self.left -= skip as usize;
                self.next += skip as usize;
                count -= skip;
            }
        }
    }

    /// Discards a prime number of words, with the prime picked using `entropy`.
    /// Returns the number of words discarded.
    pub fn try_warmup_from<R: RngCore>(&mut self, entropy: &mut R) -> Result<u64, Error> {
        let mut bytes = [0u8; 2];
        entropy.try_fill_bytes(&mut bytes)?;
        let count = prime::next_prime(u16::from_le_bytes(bytes) as u64 | 0x8000);
        log::debug!("warming up Mersenne Twister: discarding {} words", count);
        self.discard(count);
        Ok(count)
    }

    /// Discards a prime number of words, with the prime picked using operating system entropy.
    /// Returns the number of words discarded.
    #[cfg(feature = "getrandom")]
    pub fn try_warmup(&mut self) -> Result<u64, Error> {
        self.try_warmup_from(&mut super::OsRng)
    }
}

/// Minimal generator surface shared by both word widths.
pub trait Twister {
    type Word;

    /// Initializes state from a scalar seed.
    fn seed(&mut self, seed: i64);

    /// Initializes state from a key.
    fn seed_array(&mut self, key: &[Self::Word]);

    /// Skips ahead by `count` words.
    fn discard(&mut self, count: u64);

    /// Generates the next word.
    fn next_word(&mut self) -> Self::Word;

    /// Generates a word in [0, n).
    fn next_below(&mut self, n: Self::Word) -> Self::Word;
}

impl<W: Word, const N: usize, const M: usize> Twister for MersenneTwister<W, N, M> {
    type Word = W;

    fn seed(&mut self, seed: i64) {
        MersenneTwister::seed(self, seed)
    }

    fn seed_array(&mut self, key: &[W]) {
        MersenneTwister::seed_array(self, key)
    }

    fn discard(&mut self, count: u64) {
        MersenneTwister::discard(self, count)
    }

    fn next_word(&mut self) -> W {
        MersenneTwister::next_word(self)
    }

    fn next_below(&mut self, n: W) -> W {
        MersenneTwister::next_below(self, n)
    }
}

impl<W: Word, const N: usize, const M: usize> SeedableRng for MersenneTwister<W, N, M> {
    type Seed = [u8; 8];

    /// Creates a generator from a little-endian scalar seed.
    fn from_seed(seed: Self::Seed) -> Self {
        Self::with_seed(i64::from_le_bytes(seed))
    }

    /// Applies `state` directly as the scalar seed.
    fn seed_from_u64(state: u64) -> Self {
        Self::with_seed(state as i64)
    }
}
