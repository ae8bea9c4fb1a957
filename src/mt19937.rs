use super::MersenneTwister;
use super::{Error, RngCore};

// MT19937 features
// -32-bit output, 624 words of state
// -period 2**19937 - 1
// -623-dimensional equidistribution to 32-bit accuracy

/// MT19937 non-cryptographic RNG. 32-bit output, 624-word state.
pub type Mt19937 = MersenneTwister<u32, 624, 397>;

impl Mt19937 {

    /// Generates a number in [0, 2**31 - 1] from the high 31 bits of the next word.
    #[inline]
    pub fn next_int31(&mut self) -> i32 {
        (self.next_word() >> 1) as i32
    }

    /// Generates a real in [0, 1) with 53-bit resolution from two words.
    #[inline]
    pub fn next_res53(&mut self) -> f64 {
        let a = self.next_word() >> 5;
        let b = self.next_word() >> 6;
        (a as f64 * 67108864.0 + b as f64) * (1.0 / 9007199254740992.0)
    }
}

impl RngCore for Mt19937 {
    fn next_u32(&mut self) -> u32 {
        self.next_word()
    }

    // Low word first.
    fn next_u64(&mut self) -> u64 {
        let lo = self.next_word() as u64;
        let hi = self.next_word() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let bytes = dest.len();
        let mut i = 0;
        while i < bytes {
            let x = self.next_word();
            let j = bytes.min(i + 4);
            // Always use Little-Endian.
            dest[i .. j].copy_from_slice(&x.to_le_bytes()[0 .. (j - i)]);
            i = j;
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
