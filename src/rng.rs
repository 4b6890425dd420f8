//! The RNG oracle the core consumes.
//!
//! Threading the RNG capability through the context, rather than reaching
//! for a thread/process-global generator, means a caller can seed a
//! `SmallRng` and get deterministic replay of a whole mutation session.

use rand::Rng;

/// Uniform integer and byte-fill oracle required by every operator.
pub trait MangleRng {
    /// Inclusive uniform integer in `[lo, hi]`.
    fn rnd(&mut self, lo: u64, hi: u64) -> u64;
    /// Uniform full-range `u64`.
    fn rnd64(&mut self) -> u64;
    /// Uniform printable byte in `[0x20, 0x7E]`.
    fn rnd_printable(&mut self) -> u8;
    /// Fill `dst` with uniform random bytes.
    fn rnd_buf(&mut self, dst: &mut [u8]);
    /// Fill `dst` with uniform printable bytes.
    fn rnd_buf_printable(&mut self, dst: &mut [u8]);
}

impl<T: Rng> MangleRng for T {
    fn rnd(&mut self, lo: u64, hi: u64) -> u64 {
        self.gen_range(lo..=hi)
    }

    fn rnd64(&mut self) -> u64 {
        self.gen()
    }

    fn rnd_printable(&mut self) -> u8 {
        self.gen_range(0x20u8..=0x7E)
    }

    fn rnd_buf(&mut self, dst: &mut [u8]) {
        self.fill(dst)
    }

    fn rnd_buf_printable(&mut self, dst: &mut [u8]) {
        for b in dst.iter_mut() {
            *b = self.gen_range(0x20u8..=0x7E);
        }
    }
}
