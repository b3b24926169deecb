//! Small game RNG for quiz letter picks and word-bank shuffles.
//!
//! Prototype-grade randomness (not crypto secure): a stepped 32-bit linear
//! congruential generator, seeded from `getrandom` when the `rng` feature
//! is enabled and from the performance clock otherwise.

pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub fn seeded(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Seed from the best entropy the host offers.
    pub fn from_entropy() -> Self {
        #[cfg(feature = "rng")]
        {
            let mut bytes = [0u8; 4];
            if getrandom::getrandom(&mut bytes).is_ok() {
                return Self::seeded(u32::from_le_bytes(bytes));
            }
        }
        let now = web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0);
        Self::seeded(now as u32 ^ 0x5eed_d075)
    }

    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        self.state
    }

    /// Uniform-enough index in `0..len`; 0 for an empty range.
    pub fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.next_u32() as usize % len
    }

    /// In-place Fisher-Yates shuffle.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.index(i + 1);
            items.swap(i, j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_stays_in_range() {
        let mut rng = Lcg::seeded(42);
        for len in 1..40 {
            for _ in 0..100 {
                assert!(rng.index(len) < len);
            }
        }
    }

    #[test]
    fn index_of_empty_range_is_zero() {
        assert_eq!(Lcg::seeded(7).index(0), 0);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = Lcg::seeded(1234);
        let mut items: Vec<u32> = (0..36).collect();
        rng.shuffle(&mut items);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..36).collect::<Vec<u32>>());
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = Lcg::seeded(1);
        let mut b = Lcg::seeded(2);
        let pick_a: Vec<usize> = (0..8).map(|_| a.index(26)).collect();
        let pick_b: Vec<usize> = (0..8).map(|_| b.index(26)).collect();
        assert_ne!(pick_a, pick_b);
    }
}
