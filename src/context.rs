//! The mutation context and the bounds-checked buffer primitives shared by
//! every operator.

use crate::buffer::ResizableBuffer;
use crate::error::{ContextError, MangleError};
use crate::rng::MangleRng;

/// Everything a mutation session needs: the buffer, its logical size, the
/// dictionary, the stacking policy, and the RNG oracle.
///
/// `B` is the injected buffer-storage primitive (see [`ResizableBuffer`]);
/// `R` is the injected RNG oracle (anything implementing [`MangleRng`],
/// which every `rand::Rng` gets for free).
pub struct MutationContext<B: ResizableBuffer, R: MangleRng> {
    buffer: B,
    size: usize,
    max_file_sz: usize,
    dictionary: Vec<Vec<u8>>,
    mutations_per_run: u32,
    only_printable: bool,
    rng: R,
}

impl<B: ResizableBuffer, R: MangleRng> MutationContext<B, R> {
    /// Builds a context over `buffer`, with `size` initial logical bytes.
    ///
    /// `size` must be in `1..=buffer.max_size()`; violating this is a
    /// caller mistake, reported as a [`ContextError`] rather than a panic
    /// since a fuzzer driver typically wires this up from untrusted CLI
    /// input.
    pub fn new(
        buffer: B,
        size: usize,
        dictionary: Vec<Vec<u8>>,
        mutations_per_run: u32,
        only_printable: bool,
        rng: R,
    ) -> Result<Self, ContextError> {
        let max_file_sz = buffer.max_size();
        if size == 0 || size > max_file_sz {
            return Err(ContextError::InitialSizeOutOfRange { size, max_file_sz });
        }
        Ok(Self {
            buffer,
            size,
            max_file_sz,
            dictionary,
            mutations_per_run,
            only_printable,
            rng,
        })
    }

    /// Current logical length.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Hard upper bound on `size`.
    #[inline]
    pub fn max_size(&self) -> usize {
        self.max_file_sz
    }

    /// Upper bound on stacked operator count per session.
    #[inline]
    pub fn mutations_per_run(&self) -> u32 {
        self.mutations_per_run
    }

    /// Whether every written byte must land in `[0x20, 0x7E]`.
    #[inline]
    pub fn only_printable(&self) -> bool {
        self.only_printable
    }

    /// The dictionary entries available to `Dictionary`/`DictionaryInsert`.
    #[inline]
    pub fn dictionary(&self) -> &[Vec<u8>] {
        &self.dictionary
    }

    /// The logical content, `buffer[..size]`.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.buffer.as_slice()[..self.size]
    }

    #[inline]
    pub(crate) fn rng(&mut self) -> &mut R {
        &mut self.rng
    }

    #[inline]
    fn buf_mut(&mut self) -> &mut [u8] {
        self.buffer.as_mut_slice()
    }

    /// Writes up to `sz` bytes of `src` into the buffer at `off`, clamped so
    /// that `off + sz <= size`. Returns the number of bytes actually
    /// written, since callers that turn the write printable afterward must
    /// coerce exactly that many bytes and no more (see SPEC_FULL.md, Design
    /// Decisions).
    pub(crate) fn overwrite(&mut self, src: &[u8], off: usize, sz: usize) -> usize {
        let size = self.size;
        let max_to_copy = size.saturating_sub(off);
        let sz = sz.min(max_to_copy).min(src.len());
        self.buf_mut()[off..off + sz].copy_from_slice(&src[..sz]);
        sz
    }

    /// Overlap-safe move of up to `len` bytes from `off_from` to `off_to`.
    ///
    /// No-ops if either offset is `>= size`. Otherwise clamps `len` to both
    /// `size - off_from - 1` and `size - off_to - 1` -- the final byte of
    /// the buffer is deliberately never a source or destination of a move.
    /// This is intentional, not a bug to fix: fixing it would change which
    /// bytes Expand/Shrink/DictionaryInsert touch.
    pub(crate) fn mv(&mut self, off_from: usize, off_to: usize, len: usize) {
        let size = self.size;
        if off_from >= size || off_to >= size {
            return;
        }
        let len_from = size - off_from - 1;
        let len_to = size - off_to - 1;
        let len = len.min(len_from).min(len_to);
        if len == 0 {
            return;
        }
        self.buf_mut().copy_within(off_from..off_from + len, off_to);
    }

    /// Grows the buffer by up to `len` bytes at `off`, filling the new
    /// region with fresh random bytes (printable if `printable`).
    ///
    /// No-ops if already at `max_file_sz`.
    pub(crate) fn inflate(
        &mut self,
        off: usize,
        len: usize,
        printable: bool,
    ) -> Result<(), MangleError<B::Error>> {
        if self.size >= self.max_file_sz {
            return Ok(());
        }
        let len = len.min(self.max_file_sz - self.size);
        let new_size = self.size + len;
        self.buffer.resize(new_size).map_err(MangleError::Resize)?;
        self.size = new_size;
        // Shift the old content out of the way. Passing the post-resize
        // size as `mv`'s `len` means "as much as fits" -- `mv`'s own clamp
        // computes the real amount.
        self.mv(off, off + len, new_size);
        if printable {
            self.rng.rnd_buf_printable(&mut self.buffer.as_mut_slice()[off..off + len]);
        } else {
            self.rng.rnd_buf(&mut self.buffer.as_mut_slice()[off..off + len]);
        }
        Ok(())
    }

    /// Adjusts the logical size directly, used by `Shrink` and `Resize`.
    pub(crate) fn set_size(&mut self, new_size: usize) -> Result<(), MangleError<B::Error>> {
        self.buffer.resize(new_size).map_err(MangleError::Resize)?;
        self.size = new_size;
        Ok(())
    }

    /// Fills `buffer[off..off+len]` with fresh random bytes, printable if
    /// requested. Used by `Resize`, which (unlike `Inflate`) never needs to
    /// shift existing content out of the way -- it only ever appends.
    pub(crate) fn fill_tail_random(&mut self, off: usize, len: usize, printable: bool) {
        let dst = &mut self.buffer.as_mut_slice()[off..off + len];
        if printable {
            self.rng.rnd_buf_printable(dst);
        } else {
            self.rng.rnd_buf(dst);
        }
    }

    /// Folds `len` bytes starting at `off` into the printable range.
    ///
    /// Callers pass the length an `overwrite` actually wrote, not the
    /// length they asked for -- see SPEC_FULL.md's Design Decisions for why
    /// that distinction matters near the end of the buffer.
    pub(crate) fn coerce_printable(&mut self, off: usize, len: usize) {
        crate::util::turn_to_printable(&mut self.buf_mut()[off..off + len]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::VecBuffer;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn ctx(initial: &[u8], max: usize) -> MutationContext<VecBuffer, SmallRng> {
        let buf = VecBuffer::from_initial(initial, max);
        MutationContext::new(buf, initial.len(), Vec::new(), 6, false, SmallRng::seed_from_u64(1))
            .unwrap()
    }

    #[test]
    fn rejects_zero_initial_size() {
        let buf = VecBuffer::new(4);
        let err = MutationContext::new(buf, 0, Vec::new(), 6, false, SmallRng::seed_from_u64(1));
        assert!(err.is_err());
    }

    #[test]
    fn overwrite_clamps_to_size() {
        let mut c = ctx(b"ABCDE", 8);
        let written = c.overwrite(b"XYZ", 3, 3);
        assert_eq!(written, 2); // size=5, off=3 -> room for 2 bytes
        assert_eq!(c.bytes(), b"ABCXY");
    }

    #[test]
    fn move_never_touches_final_byte() {
        let mut c = ctx(b"ABCDE", 8);
        // off_from=0, off_to=1, len=5 (full size) should only move 3 bytes
        // (size - off_to - 1 = 5-1-1=3), leaving the last byte untouched.
        c.mv(0, 1, 5);
        assert_eq!(c.bytes(), b"AABCE");
    }

    #[test]
    fn move_noops_when_offset_out_of_range() {
        let mut c = ctx(b"ABCDE", 8);
        c.mv(5, 0, 3);
        assert_eq!(c.bytes(), b"ABCDE");
    }

    #[test]
    fn inflate_noops_at_capacity() {
        let mut c = ctx(b"ABCD", 4);
        c.inflate(0, 4, false).unwrap();
        assert_eq!(c.size(), 4);
    }
}
