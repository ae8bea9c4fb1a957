#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

// WELL512a by Panneton, L'Ecuyer and Matsumoto.
// -32-bit output, 16-word state
// -period 2**512 - 1
// A much smaller alternative to the Mersenne Twister.

const R: usize = 16;
const M1: usize = 13;
const M2: usize = 9;

/// WELL512a non-cryptographic RNG. 32-bit output, 512-bit state.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Eq, PartialEq)]
pub struct Well512a {
    /// State words.
    state: [u32; R],
    /// Index of the current word.
    index: usize,
}

// As recommended, this Debug implementation does not expose internal state.
impl core::fmt::Debug for Well512a {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "Well512a {{}}")
    }
}

#[inline] fn mat0pos(t: u32, v: u32) -> u32 {
    v ^ (v >> t)
}

#[inline] fn mat0neg(t: u32, v: u32) -> u32 {
    v ^ (v << t)
}

#[inline] fn mat3neg(t: u32, v: u32) -> u32 {
    v << t
}

#[inline] fn mat4neg(t: u32, b: u32, v: u32) -> u32 {
    v ^ ((v << t) & b)
}

impl Well512a {

    /// Creates a new WELL512a RNG from 16 state words.
    /// The all-zero state is a fixed point and produces only zeros.
    pub fn new(state: [u32; R]) -> Self {
        Well512a { state, index: 0 }
    }

    #[inline] fn at(&self, offset: usize) -> u32 {
        self.state[(self.index + offset) & (R - 1)]
    }

    /// Generates the next 32-bit random number.
    #[inline]
    pub fn next(&mut self) -> u32 {
        let z0 = self.at(R - 1);
        let z1 = mat0neg(16, self.at(0)) ^ mat0neg(15, self.at(M1));
        let z2 = mat0pos(11, self.at(M2));
        let v1 = z1 ^ z2;
        self.state[self.index] = v1;
        let v0 = mat0neg(2, z0) ^ mat0neg(18, z1) ^ mat3neg(28, z2) ^ mat4neg(5, 0xda44_2d24, v1);
        self.index = (self.index + R - 1) & (R - 1);
        self.state[self.index] = v0;
        v0
    }

    /// Generates a real in [0, 1).
    #[inline]
    pub fn next_real(&mut self) -> f64 {
        self.next() as f64 * 2.32830643653869628906e-10
    }
}

use super::{RngCore, Error};

impl RngCore for Well512a {
    fn next_u32(&mut self) -> u32 {
        self.next()
    }

    fn next_u64(&mut self) -> u64 {
        rand_core::impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        rand_core::impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
