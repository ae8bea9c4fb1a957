use super::MersenneTwister;
use super::{Error, RngCore};

/// MT19937-64 non-cryptographic RNG. 64-bit output, 312-word state.
pub type Mt19937_64 = MersenneTwister<u64, 312, 156>;

impl Mt19937_64 {

    /// Generates a number in [0, 2**63 - 1] from the high 63 bits of the next word.
    /// Matches `genrand64_int63` of the C reference, which shifts rather than
    /// masking the sign bit; use `next_int` for the masked form.
    #[inline]
    pub fn next_int63(&mut self) -> i64 {
        (self.next_word() >> 1) as i64
    }
}

impl RngCore for Mt19937_64 {
    fn next_u32(&mut self) -> u32 {
        self.next_word() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_word()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let bytes = dest.len();
        let mut i = 0;
        while i < bytes {
            let x = self.next_word();
            let j = bytes.min(i + 8);
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

#[cfg(test)] mod tests {
    use super::*;
    use super::super::*;

    #[test] fn default_seed_vectors() {
        let mut mt = Mt19937_64::new();
        assert_eq!(14514284786278117030, mt.next_word());
        mt.discard(9998);
        assert_eq!(9981545732273789042, mt.next_word());
    }

    #[test] fn scalar_seed_vectors() {
        let seeds_and_values = [
            (1, [2469588189546311528, 2516265689700432462, 8323445853463659930, 387828560950575246, 6472927700900931384u64]),
            (1112, [2030023689557577270, 17891585337015847365, 10964359332531572785, 7461730276270468400, 9580021312583915945]),
            (2223, [14826023173755866876, 7155474859988725726, 9451480599440685931, 7860867063210863592, 1592382917952193713]),
        ];
        for (seed, values) in seeds_and_values.iter() {
            let mut mt = Mt19937_64::with_seed(*seed);
            for &x in values.iter() {
                assert_eq!(x, mt.next_word());
            }
        }
    }

    #[test] fn array_seed_vectors() {
        let expected = [
            7266447313870364031, 4946485549665804864, 16945909448695747420,
            16394063075524226720, 4873882236456199058u64,
        ];
        let mut mt = Mt19937_64::with_key(&[0x12345, 0x23456, 0x34567, 0x45678]);
        for &x in expected.iter() {
            assert_eq!(x, mt.next_word());
        }
    }

    #[test] fn key_longer_than_state() {
        // Computed with an independent MT19937-64 implementation.
        let key: Vec<u64> = (0 .. 500u64).map(|i| i.wrapping_mul(0x9e37_79b9_7f4a_7c15)).collect();
        let mut mt = Mt19937_64::with_key(&key);
        let expected = [
            6359758217816882845, 1687801238381946691, 8462541847902445757,
            279173830058322235, 1539498943015979417u64,
        ];
        for &x in expected.iter() {
            assert_eq!(x, mt.next_word());
        }

        let mut mt = Mt19937_64::with_key(&key);
        mt.discard(313);
        let expected = [
            3115366851269868150, 14924373419063922772, 484801784387011628,
            4767978354514556605, 6614097802603189948u64,
        ];
        for &x in expected.iter() {
            assert_eq!(x, mt.next_word());
        }
    }

    #[test] fn negative_seed_uses_twos_complement() {
        let mut a = Mt19937_64::with_seed(-1);
        let mut b = Mt19937_64::seed_from_u64(u64::MAX);
        for _ in 0 .. 400 {
            assert_eq!(a.next_word(), b.next_word());
        }
    }

    #[test] fn derived_outputs_follow_words() {
        let mut words = Mt19937_64::with_seed(77);
        let mut mt = Mt19937_64::with_seed(77);

        let w = words.next_word();
        assert_eq!((w >> 11) as f64 * (1.0 / 9007199254740991.0), mt.next_real1());
        let w = words.next_word();
        assert_eq!((w >> 11) as f64 / 9007199254740992.0, mt.next_real2());
        let w = words.next_word();
        assert_eq!(((w >> 12) as f64 + 0.5) / 4503599627370496.0, mt.next_real3());
        let w = words.next_word();
        assert_eq!((w >> 1) as i64, mt.next_int63());
        let w = words.next_word();
        assert_eq!((w & !(1 << 63)) as i64, mt.next_int());
        let w = words.next_word();
        assert_eq!(w % 1000, mt.next_below(1000));
        assert_eq!(words.next_word() as u32, mt.next_u32());
    }

    #[test] fn fill_bytes_matches_words() {
        let mut words = Mt19937_64::with_seed(9);
        let mut mt = Mt19937_64::with_seed(9);
        let mut buffer = [0u8; 20];
        mt.try_fill_bytes(&mut buffer).unwrap();
        let mut expected = [0u8; 24];
        for i in 0 .. 3 {
            expected[i * 8 .. (i + 1) * 8].copy_from_slice(&words.next_u64().to_le_bytes());
        }
        assert_eq!(&expected[0 .. 20], &buffer[..]);
    }
}
