//! The sixteen primitive mutation operators.
//!
//! Each operator is a pure function over `(context, printable)`. None of
//! them retain aliases into the buffer after returning; all bounds-checking
//! happens through [`MutationContext`]'s `overwrite`/`mv`/`inflate`
//! primitives, never through raw indexing past `size`.

use crate::buffer::ResizableBuffer;
use crate::context::MutationContext;
use crate::error::MangleError;
use crate::rng::MangleRng;

type OpResult<B> = Result<(), MangleError<<B as ResizableBuffer>::Error>>;

const MAX_BIT_INDEX: u64 = 7;

pub(crate) fn bit<B: ResizableBuffer, R: MangleRng>(
    ctx: &mut MutationContext<B, R>,
    printable: bool,
) -> OpResult<B> {
    let off = rand_off(ctx);
    let b = ctx.rng().rnd(0, MAX_BIT_INDEX) as u32;
    flip_bit(ctx, off, b);
    if printable {
        ctx.coerce_printable(off, 1);
    }
    Ok(())
}

fn flip_bit<B: ResizableBuffer, R: MangleRng>(ctx: &mut MutationContext<B, R>, off: usize, bit: u32) {
    let cur = ctx.bytes()[off];
    let flipped = cur ^ (1u8 << bit);
    ctx.overwrite(&[flipped], off, 1);
}

pub(crate) fn bytes<B: ResizableBuffer, R: MangleRng>(
    ctx: &mut MutationContext<B, R>,
    printable: bool,
) -> OpResult<B> {
    let off = rand_off(ctx);
    // Always draw a full 8-byte value, even though only `to_copy` bytes
    // end up written, so RNG consumption stays the same regardless of
    // how many bytes this call happens to copy.
    let mut draw = [0u8; 8];
    if printable {
        ctx.rng().rnd_buf_printable(&mut draw);
    } else {
        ctx.rng().rnd_buf(&mut draw);
    }
    let to_copy = ctx.rng().rnd(1, 8) as usize;
    // `draw` was already filled printable above when requested, so the
    // subset copied out of it needs no further coercion.
    ctx.overwrite(&draw, off, to_copy);
    Ok(())
}

pub(crate) fn magic<B: ResizableBuffer, R: MangleRng>(
    ctx: &mut MutationContext<B, R>,
    printable: bool,
) -> OpResult<B> {
    let off = rand_off(ctx);
    let idx = ctx.rng().rnd(0, crate::magic::MAGIC_VALUES.len() as u64 - 1) as usize;
    let entry = crate::magic::MAGIC_VALUES[idx];
    let written = ctx.overwrite(entry.bytes(), off, entry.size as usize);
    if printable {
        ctx.coerce_printable(off, written);
    }
    Ok(())
}

pub(crate) fn inc_byte<B: ResizableBuffer, R: MangleRng>(
    ctx: &mut MutationContext<B, R>,
    printable: bool,
) -> OpResult<B> {
    let off = rand_off(ctx);
    let cur = ctx.bytes()[off];
    let next = if printable {
        rotate_printable(cur, 1)
    } else {
        cur.wrapping_add(1)
    };
    ctx.overwrite(&[next], off, 1);
    Ok(())
}

pub(crate) fn dec_byte<B: ResizableBuffer, R: MangleRng>(
    ctx: &mut MutationContext<B, R>,
    printable: bool,
) -> OpResult<B> {
    let off = rand_off(ctx);
    let cur = ctx.bytes()[off];
    let next = if printable {
        rotate_printable(cur, -1)
    } else {
        cur.wrapping_sub(1)
    };
    ctx.overwrite(&[next], off, 1);
    Ok(())
}

pub(crate) fn neg_byte<B: ResizableBuffer, R: MangleRng>(
    ctx: &mut MutationContext<B, R>,
    printable: bool,
) -> OpResult<B> {
    let off = rand_off(ctx);
    let cur = ctx.bytes()[off];
    let next = if printable {
        94 - (cur - 32) + 32
    } else {
        !cur
    };
    ctx.overwrite(&[next], off, 1);
    Ok(())
}

/// Rotates a printable byte by `delta` (+1 or -1) within `[0x20, 0x7E]`,
/// modulus 95. Assumes `b` is already printable, which holds whenever
/// `only_printable` has been true for the life of the buffer (invariant 3).
fn rotate_printable(b: u8, delta: i32) -> u8 {
    let v = b as i32 - 0x20;
    let rotated = (v + delta).rem_euclid(95);
    (rotated + 0x20) as u8
}

pub(crate) fn add_sub<B: ResizableBuffer, R: MangleRng>(
    ctx: &mut MutationContext<B, R>,
    printable: bool,
) -> OpResult<B> {
    let size = ctx.size();
    let off = rand_off(ctx);
    let exp = ctx.rng().rnd(0, 3) as u32;
    let mut var_len = 1usize << exp; // 1, 2, 4, or 8
    if size - off < var_len {
        var_len = 1;
    }
    let delta = ctx.rng().rnd(0, 8192) as i64 - 4096;
    // bit == 1 -> native byte order, bit == 0 -> foreign (swap around the add).
    let native = ctx.rng().rnd64() & 1 == 1;
    let swap = !native;

    let scratch = {
        let src = ctx.bytes();
        match var_len {
            1 => addsub_apply::<i8>(src, off, delta, swap),
            2 => addsub_apply::<i16>(src, off, delta, swap),
            4 => addsub_apply::<i32>(src, off, delta, swap),
            8 => addsub_apply::<i64>(src, off, delta, swap),
            _ => unreachable!("var_len is always one of 1, 2, 4, 8"),
        }
    };
    let written = ctx.overwrite(&scratch[..var_len], off, var_len);
    if printable {
        ctx.coerce_printable(off, written);
    }
    Ok(())
}

/// Reads a `T` at `off` in little-endian, optionally byte-swapping around
/// the wrapping add to exercise the "foreign endianness" path, and returns
/// the little-endian bytes of the result padded out to 8 bytes.
fn addsub_apply<T: AddSubInt>(src: &[u8], off: usize, delta: i64, swap: bool) -> [u8; 8] {
    let v = T::read_le(&src[off..off + T::LEN]);
    let added = if swap {
        v.swap_bytes().wrapping_add(T::from_delta(delta)).swap_bytes()
    } else {
        v.wrapping_add(T::from_delta(delta))
    };
    let mut out = [0u8; 8];
    added.write_le(&mut out[..T::LEN]);
    out
}

trait AddSubInt: Copy {
    const LEN: usize;
    fn read_le(bytes: &[u8]) -> Self;
    fn write_le(self, out: &mut [u8]);
    fn swap_bytes(self) -> Self;
    fn wrapping_add(self, rhs: Self) -> Self;
    fn from_delta(delta: i64) -> Self;
}

macro_rules! impl_addsub_int {
    ($ty:ty) => {
        impl AddSubInt for $ty {
            const LEN: usize = std::mem::size_of::<$ty>();
            fn read_le(bytes: &[u8]) -> Self {
                let mut a = [0u8; std::mem::size_of::<$ty>()];
                a.copy_from_slice(bytes);
                <$ty>::from_le_bytes(a)
            }
            fn write_le(self, out: &mut [u8]) {
                out.copy_from_slice(&self.to_le_bytes());
            }
            fn swap_bytes(self) -> Self {
                <$ty>::swap_bytes(self)
            }
            fn wrapping_add(self, rhs: Self) -> Self {
                <$ty>::wrapping_add(self, rhs)
            }
            fn from_delta(delta: i64) -> Self {
                delta as $ty
            }
        }
    };
}

impl_addsub_int!(i8);
impl_addsub_int!(i16);
impl_addsub_int!(i32);
impl_addsub_int!(i64);

/// `Dictionary` never coerces what it writes to printable, even when
/// `printable` is set; only the space-growing `DictionaryInsert` variant
/// pre-fills its *new* bytes printable, and even then the dictionary
/// entry itself is spliced in verbatim afterward, not re-coerced. This is
/// intentional: dictionary entries are caller-supplied content, not
/// generated filler, so they are never mangled into printable form.
pub(crate) fn dictionary<B: ResizableBuffer, R: MangleRng>(
    ctx: &mut MutationContext<B, R>,
    printable: bool,
) -> OpResult<B> {
    if ctx.dictionary().is_empty() {
        return bit(ctx, printable);
    }
    let off = rand_off(ctx);
    let idx = ctx.rng().rnd(0, ctx.dictionary().len() as u64 - 1) as usize;
    let entry = ctx.dictionary()[idx].clone();
    ctx.overwrite(&entry, off, entry.len());
    Ok(())
}

pub(crate) fn dictionary_insert<B: ResizableBuffer, R: MangleRng>(
    ctx: &mut MutationContext<B, R>,
    printable: bool,
) -> OpResult<B> {
    if ctx.dictionary().is_empty() {
        return bit(ctx, printable);
    }
    let off = rand_off(ctx);
    let idx = ctx.rng().rnd(0, ctx.dictionary().len() as u64 - 1) as usize;
    let entry = ctx.dictionary()[idx].clone();
    ctx.inflate(off, entry.len(), printable)?;
    ctx.overwrite(&entry, off, entry.len());
    Ok(())
}

pub(crate) fn mem_move<B: ResizableBuffer, R: MangleRng>(
    ctx: &mut MutationContext<B, R>,
    _printable: bool,
) -> OpResult<B> {
    let size = ctx.size();
    let off_from = ctx.rng().rnd(0, size as u64 - 1) as usize;
    let off_to = ctx.rng().rnd(0, size as u64 - 1) as usize;
    let len = ctx.rng().rnd(0, size as u64) as usize;
    ctx.mv(off_from, off_to, len);
    Ok(())
}

pub(crate) fn mem_set<B: ResizableBuffer, R: MangleRng>(
    ctx: &mut MutationContext<B, R>,
    printable: bool,
) -> OpResult<B> {
    let off = rand_off(ctx);
    let sz = ctx.rng().rnd(1, (ctx.size() - off) as u64) as usize;
    let val = if printable {
        ctx.rng().rnd_printable()
    } else {
        ctx.rng().rnd(0, 255) as u8
    };
    let fill = vec![val; sz];
    ctx.overwrite(&fill, off, sz);
    Ok(())
}

pub(crate) fn random<B: ResizableBuffer, R: MangleRng>(
    ctx: &mut MutationContext<B, R>,
    printable: bool,
) -> OpResult<B> {
    let off = rand_off(ctx);
    let len = ctx.rng().rnd(1, (ctx.size() - off) as u64) as usize;
    let mut draw = vec![0u8; len];
    if printable {
        ctx.rng().rnd_buf_printable(&mut draw);
    } else {
        ctx.rng().rnd_buf(&mut draw);
    }
    ctx.overwrite(&draw, off, len);
    Ok(())
}

pub(crate) fn clone_byte<B: ResizableBuffer, R: MangleRng>(
    ctx: &mut MutationContext<B, R>,
    _printable: bool,
) -> OpResult<B> {
    let off1 = rand_off(ctx);
    let off2 = rand_off(ctx);
    let b1 = ctx.bytes()[off1];
    let b2 = ctx.bytes()[off2];
    ctx.overwrite(&[b2], off1, 1);
    ctx.overwrite(&[b1], off2, 1);
    Ok(())
}

pub(crate) fn expand<B: ResizableBuffer, R: MangleRng>(
    ctx: &mut MutationContext<B, R>,
    printable: bool,
) -> OpResult<B> {
    let off = rand_off(ctx);
    let len = ctx.rng().rnd(1, (ctx.size() - off) as u64) as usize;
    ctx.inflate(off, len, printable)
}

pub(crate) fn shrink<B: ResizableBuffer, R: MangleRng>(
    ctx: &mut MutationContext<B, R>,
    _printable: bool,
) -> OpResult<B> {
    if ctx.size() <= 1 {
        return Ok(());
    }
    let len = ctx.rng().rnd(1, (ctx.size() - 1) as u64) as usize;
    let off = ctx.rng().rnd(0, len as u64) as usize;
    let new_size = ctx.size() - len;
    ctx.set_size(new_size)?;
    // Same trick as Inflate: pass the post-shrink size as `mv`'s `len` and
    // let its own clamp compute the real amount.
    ctx.mv(off + len, off, new_size);
    Ok(())
}

pub(crate) fn ascii_val<B: ResizableBuffer, R: MangleRng>(
    ctx: &mut MutationContext<B, R>,
    _printable: bool,
) -> OpResult<B> {
    // Printable is not consulted: decimal digits and `-` are already
    // printable ASCII.
    let val = ctx.rng().rnd64() as i64;
    let text = val.to_string();
    let off = rand_off(ctx);
    ctx.overwrite(text.as_bytes(), off, text.len());
    Ok(())
}

#[inline]
fn rand_off<B: ResizableBuffer, R: MangleRng>(ctx: &mut MutationContext<B, R>) -> usize {
    let size = ctx.size() as u64;
    ctx.rng().rnd(0, size - 1) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::VecBuffer;
    use crate::context::MutationContext;

    /// A scripted RNG that returns a fixed sequence of `rnd`/`rnd64` values,
    /// used to pin down scenario-level behavior (S1-S6 in SPEC_FULL.md).
    struct Scripted {
        values: std::collections::VecDeque<u64>,
    }

    impl Scripted {
        fn new(values: &[u64]) -> Self {
            Self {
                values: values.iter().copied().collect(),
            }
        }
    }

    impl crate::rng::MangleRng for Scripted {
        fn rnd(&mut self, _lo: u64, _hi: u64) -> u64 {
            self.values.pop_front().expect("scripted RNG exhausted")
        }
        fn rnd64(&mut self) -> u64 {
            self.values.pop_front().expect("scripted RNG exhausted")
        }
        fn rnd_printable(&mut self) -> u8 {
            0x21
        }
        fn rnd_buf(&mut self, dst: &mut [u8]) {
            for b in dst.iter_mut() {
                *b = self.values.pop_front().unwrap_or(0) as u8;
            }
        }
        fn rnd_buf_printable(&mut self, dst: &mut [u8]) {
            for b in dst.iter_mut() {
                *b = (self.values.pop_front().unwrap_or(b'X' as u64) as u8 % 95) + 0x20;
            }
        }
    }

    fn scripted_ctx(
        initial: &[u8],
        max: usize,
        printable: bool,
        values: &[u64],
    ) -> MutationContext<VecBuffer, Scripted> {
        let buf = VecBuffer::from_initial(initial, max);
        MutationContext::new(buf, initial.len(), Vec::new(), 6, printable, Scripted::new(values))
            .unwrap()
    }

    #[test]
    fn s1_bit_flip() {
        // off=1, bit=3: 0xBB ^ (1<<3) = 0xBB ^ 0x08 = 0xB3
        let mut c = scripted_ctx(&[0xAA, 0xBB, 0xCC], 8, false, &[1, 3]);
        bit(&mut c, false).unwrap();
        assert_eq!(c.bytes(), &[0xAA, 0xB3, 0xCC]);
    }

    #[test]
    fn s2_magic_four_byte_be_one() {
        let idx = crate::magic::MAGIC_VALUES
            .iter()
            .position(|e| e.size == 4 && e.bytes() == [0x00, 0x00, 0x00, 0x01])
            .expect("table must contain the 4-byte BE magic for 1");
        let mut c = scripted_ctx(&[0u8; 8], 8, false, &[2, idx as u64]);
        magic(&mut c, false).unwrap();
        assert_eq!(c.bytes(), &[0, 0, 0, 0, 0, 1, 0, 0]);
    }

    #[test]
    fn s3_addsub_16_native() {
        // off=0, var_len exponent=1 (2 bytes), delta draw=0 -> delta=-4096+0..
        // we want delta=-5, so rnd(0,8192) must yield 4091; native path (bit=1).
        let mut c = scripted_ctx(&[0x01, 0x00], 8, false, &[0, 1, 4091, 1]);
        add_sub(&mut c, false).unwrap();
        assert_eq!(c.bytes(), &[0xFC, 0xFF]);
    }

    #[test]
    fn s4_shrink() {
        // len=2, off=1 -> new_size=3, and mv's off_from (off+len=3) lands
        // exactly on the new size, so `mv`'s own bounds check no-ops it:
        // the result is just a truncation to the first 3 bytes, not a
        // pull-back of the tail. This is an intentional consequence of the
        // off-by-one clamp in `mv`, not a bug.
        let mut c = scripted_ctx(b"ABCDE", 8, false, &[2, 1]);
        shrink(&mut c, false).unwrap();
        assert_eq!(c.size(), 3);
        assert_eq!(c.bytes(), b"ABC");
    }

    #[test]
    fn shrink_moves_tail_back_when_it_fits() {
        // size=10, len=3, off=1 -> new_size=7; off+len=4 < 7, so `mv` does
        // run, but its own off-by-one clamp (relative to the *new*,
        // already-shrunk size) limits it to 2 bytes, not the full
        // remaining tail. Only E and F get pulled back over the gap.
        let mut c = scripted_ctx(b"ABCDEFGHIJ", 16, false, &[3, 1]);
        shrink(&mut c, false).unwrap();
        assert_eq!(c.size(), 7);
        assert_eq!(c.bytes(), b"AEFDEFG");
    }

    #[test]
    fn s6_empty_dictionary_falls_back_to_bit() {
        let mut scripted = scripted_ctx(&[0xAA, 0xBB, 0xCC], 8, false, &[1, 3]);
        let mut via_bit = scripted_ctx(&[0xAA, 0xBB, 0xCC], 8, false, &[1, 3]);
        dictionary_insert(&mut scripted, false).unwrap();
        bit(&mut via_bit, false).unwrap();
        assert_eq!(scripted.bytes(), via_bit.bytes());
    }

    #[test]
    fn clone_byte_swaps_the_chosen_pair() {
        let mut c = scripted_ctx(b"ABCDE", 8, false, &[1, 3]);
        clone_byte(&mut c, false).unwrap();
        assert_eq!(c.bytes(), b"ADCBE");
    }

    #[test]
    fn clone_byte_applied_twice_is_the_identity() {
        let mut c = scripted_ctx(b"ABCDE", 8, false, &[1, 3, 1, 3]);
        clone_byte(&mut c, false).unwrap();
        clone_byte(&mut c, false).unwrap();
        assert_eq!(c.bytes(), b"ABCDE");
    }

    #[test]
    fn dictionary_empty_fallback_matches_bit_for_insert_too() {
        let mut a = scripted_ctx(&[1, 2, 3, 4], 8, false, &[2, 5]);
        let mut b = scripted_ctx(&[1, 2, 3, 4], 8, false, &[2, 5]);
        dictionary(&mut a, false).unwrap();
        bit(&mut b, false).unwrap();
        assert_eq!(a.bytes(), b.bytes());
    }
}
