//! Seeded randomness consumed by the float generator
//!
//! Every primitive consumes exactly one 64-bit word. Ranges are mapped with
//! a widening multiply instead of rejection sampling, so how much entropy a
//! draw uses never depends on what was drawn, and a seed replays the same
//! stream of floats no matter which branches were taken.

use rand::RngCore;

/// Reproducible source of random draws
pub trait RandomSource {
    /// One raw 64-bit word
    fn draw_u64(&mut self) -> u64;

    /// Uniform integer in `low..=high`
    fn next_int(&mut self, low: u64, high: u64) -> u64 {
        debug_assert!(low <= high);
        let span = u128::from(high - low) + 1;
        low + ((u128::from(self.draw_u64()) * span) >> 64) as u64
    }

    /// Fair coin
    fn next_bool(&mut self) -> bool {
        self.draw_u64() >> 63 == 1
    }

    /// Uniform double in `low..high` with 53 bits of resolution
    fn next_float(&mut self, low: f64, high: f64) -> f64 {
        let unit = (self.draw_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64);
        low + (high - low) * unit
    }

    /// Uniform element of a non-empty slice
    ///
    /// # Panics
    ///
    /// Panics if `items` is empty.
    fn pick_from<T: Copy>(&mut self, items: &[T]) -> T {
        assert!(!items.is_empty(), "pick_from needs at least one item");
        items[self.next_int(0, items.len() as u64 - 1) as usize]
    }
}

impl<R: RngCore + ?Sized> RandomSource for R {
    #[inline(always)]
    fn draw_u64(&mut self) -> u64 {
        self.next_u64()
    }
}
