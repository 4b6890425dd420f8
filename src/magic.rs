//! Static table of "interesting" integer constants, grouped by width and by
//! native/big-endian/little-endian intent.
//!
//! 220 entries across four width groups (1/2/4/8 bytes), each further split
//! into native/big-endian/little-endian forms. `val` always holds 8 bytes
//! regardless of `size`; only the first `size` bytes are meaningful.

/// One entry of the magic-value table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MagicEntry {
    pub val: [u8; 8],
    pub size: u8,
}

impl MagicEntry {
    /// The meaningful prefix of `val`.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.val[..self.size as usize]
    }
}

/// The full magic-value table, in source order: 1B, 2B NE/BE/LE, 4B NE/BE/LE, 8B NE/BE/LE.
pub static MAGIC_VALUES: &[MagicEntry] = &[
    MagicEntry { val: [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 1 },
    MagicEntry { val: [0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 1 },
    MagicEntry { val: [0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 1 },
    MagicEntry { val: [0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 1 },
    MagicEntry { val: [0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 1 },
    MagicEntry { val: [0x05, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 1 },
    MagicEntry { val: [0x06, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 1 },
    MagicEntry { val: [0x07, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 1 },
    MagicEntry { val: [0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 1 },
    MagicEntry { val: [0x09, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 1 },
    MagicEntry { val: [0x0A, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 1 },
    MagicEntry { val: [0x0B, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 1 },
    MagicEntry { val: [0x0C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 1 },
    MagicEntry { val: [0x0D, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 1 },
    MagicEntry { val: [0x0E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 1 },
    MagicEntry { val: [0x0F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 1 },
    MagicEntry { val: [0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 1 },
    MagicEntry { val: [0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 1 },
    MagicEntry { val: [0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 1 },
    MagicEntry { val: [0x7E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 1 },
    MagicEntry { val: [0x7F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 1 },
    MagicEntry { val: [0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 1 },
    MagicEntry { val: [0x81, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 1 },
    MagicEntry { val: [0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 1 },
    MagicEntry { val: [0xFE, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 1 },
    MagicEntry { val: [0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 1 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x01, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x80, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x00, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x00, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x00, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x00, 0x05, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x00, 0x06, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x00, 0x07, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x00, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x00, 0x09, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x00, 0x0A, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x00, 0x0B, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x00, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x00, 0x0D, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x00, 0x0E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x00, 0x0F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x00, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x00, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x00, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x00, 0x7E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x00, 0x7F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x00, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x00, 0x81, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x00, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x00, 0xFE, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x00, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x7E, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x7F, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x80, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0xFF, 0xFE, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x05, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x06, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x07, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x09, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x0A, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x0B, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x0C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x0D, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x0E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x0F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x7E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x7F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x81, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0xFE, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0xFF, 0x7E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0xFF, 0x7F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x00, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x01, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0xFE, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 2 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x01, 0x01, 0x01, 0x01, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x80, 0x80, 0x80, 0x80, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0x05, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0x06, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0x07, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0x08, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0x09, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0x0A, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0x0B, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0x0D, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0x0E, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0x0F, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0x10, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0x20, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0x40, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0x7E, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0x7F, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0x80, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0x81, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0xC0, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0xFE, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0xFF, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x7E, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x7F, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x80, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0xFF, 0xFF, 0xFF, 0xFE, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x05, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x06, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x07, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x09, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x0A, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x0B, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x0C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x0D, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x0E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x0F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x7E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x7F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x81, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0xFE, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0xFF, 0xFF, 0xFF, 0x7E, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0xFF, 0xFF, 0xFF, 0x7F, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0x80, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x01, 0x00, 0x00, 0x80, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0xFE, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00], size: 4 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 8 },
    MagicEntry { val: [0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01], size: 8 },
    MagicEntry { val: [0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80], size: 8 },
    MagicEntry { val: [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF], size: 8 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01], size: 8 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02], size: 8 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03], size: 8 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x04], size: 8 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x05], size: 8 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x06], size: 8 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07], size: 8 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x08], size: 8 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x09], size: 8 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0A], size: 8 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0B], size: 8 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0C], size: 8 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0D], size: 8 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0E], size: 8 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0F], size: 8 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10], size: 8 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x20], size: 8 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x40], size: 8 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7E], size: 8 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7F], size: 8 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80], size: 8 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x81], size: 8 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xC0], size: 8 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFE], size: 8 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF], size: 8 },
    MagicEntry { val: [0x7E, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF], size: 8 },
    MagicEntry { val: [0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF], size: 8 },
    MagicEntry { val: [0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 8 },
    MagicEntry { val: [0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01], size: 8 },
    MagicEntry { val: [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE], size: 8 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 8 },
    MagicEntry { val: [0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 8 },
    MagicEntry { val: [0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 8 },
    MagicEntry { val: [0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 8 },
    MagicEntry { val: [0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 8 },
    MagicEntry { val: [0x05, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 8 },
    MagicEntry { val: [0x06, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 8 },
    MagicEntry { val: [0x07, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 8 },
    MagicEntry { val: [0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 8 },
    MagicEntry { val: [0x09, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 8 },
    MagicEntry { val: [0x0A, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 8 },
    MagicEntry { val: [0x0B, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 8 },
    MagicEntry { val: [0x0C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 8 },
    MagicEntry { val: [0x0D, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 8 },
    MagicEntry { val: [0x0E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 8 },
    MagicEntry { val: [0x0F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 8 },
    MagicEntry { val: [0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 8 },
    MagicEntry { val: [0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 8 },
    MagicEntry { val: [0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 8 },
    MagicEntry { val: [0x7E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 8 },
    MagicEntry { val: [0x7F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 8 },
    MagicEntry { val: [0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 8 },
    MagicEntry { val: [0x81, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 8 },
    MagicEntry { val: [0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 8 },
    MagicEntry { val: [0xFE, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 8 },
    MagicEntry { val: [0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], size: 8 },
    MagicEntry { val: [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7E], size: 8 },
    MagicEntry { val: [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F], size: 8 },
    MagicEntry { val: [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80], size: 8 },
    MagicEntry { val: [0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80], size: 8 },
    MagicEntry { val: [0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF], size: 8 },];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_220_entries() {
        assert_eq!(MAGIC_VALUES.len(), 220);
    }

    #[test]
    fn group_counts_match_spec() {
        let by_size = |s: u8| MAGIC_VALUES.iter().filter(|e| e.size == s).count();
        assert_eq!(by_size(1), 26);
        assert_eq!(by_size(2), 4 + 27 + 31);
        assert_eq!(by_size(4), 4 + 31 + 31);
        assert_eq!(by_size(8), 4 + 31 + 31);
    }

    #[test]
    fn one_byte_magics_start_the_table() {
        assert_eq!(MAGIC_VALUES[0].bytes(), &[0x00]);
        assert_eq!(MAGIC_VALUES[25].bytes(), &[0xFF]);
    }

    #[test]
    fn last_entry_is_8_byte_le_wraparound() {
        let last = MAGIC_VALUES.last().unwrap();
        assert_eq!(last.size, 8);
        assert_eq!(
            last.bytes(),
            &[0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]
        );
    }
}
