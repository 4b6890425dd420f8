//! The injected buffer-storage primitive.
//!
//! Buffer ownership and growth policy are factored out behind
//! [`ResizableBuffer`] so the mutation core never decides an allocation
//! strategy itself -- it only ever asks the trait to adjust the logical
//! length.

use std::convert::Infallible;

/// A byte region of fixed capacity `max_size()`, with an externally tracked
/// logical length that [`MutationContext`](crate::context::MutationContext)
/// grows and shrinks via `resize`.
pub trait ResizableBuffer {
    /// Error a concrete implementation can signal back from `resize`.
    type Error: std::error::Error + 'static;

    /// Hard capacity; `resize` is never asked to grow past this.
    fn max_size(&self) -> usize;

    /// Adjust the logical length. Bytes beyond the previous length are
    /// left with whatever content was already there; the core always
    /// overwrites them with fresh random data before an operator returns.
    fn resize(&mut self, new_size: usize) -> Result<(), Self::Error>;

    /// The full capacity as a read-only slice.
    fn as_slice(&self) -> &[u8];

    /// The full capacity as a mutable slice.
    fn as_mut_slice(&mut self) -> &mut [u8];
}

/// The default [`ResizableBuffer`]: a `Vec<u8>` pre-allocated to
/// `max_file_sz` at construction time.
///
/// Because the capacity never changes after construction, `resize` is a
/// bookkeeping no-op and can never fail.
#[derive(Debug, Clone)]
pub struct VecBuffer {
    bytes: Vec<u8>,
}

impl VecBuffer {
    /// Allocates a buffer with `max_file_sz` addressable bytes, all zeroed.
    pub fn new(max_file_sz: usize) -> Self {
        Self {
            bytes: vec![0u8; max_file_sz],
        }
    }

    /// Allocates a buffer of `max_file_sz` bytes and copies `initial` into
    /// its front; `initial.len()` must not exceed `max_file_sz`.
    pub fn from_initial(initial: &[u8], max_file_sz: usize) -> Self {
        assert!(initial.len() <= max_file_sz);
        let mut bytes = vec![0u8; max_file_sz];
        bytes[..initial.len()].copy_from_slice(initial);
        Self { bytes }
    }
}

impl ResizableBuffer for VecBuffer {
    type Error = Infallible;

    fn max_size(&self) -> usize {
        self.bytes.len()
    }

    fn resize(&mut self, _new_size: usize) -> Result<(), Self::Error> {
        Ok(())
    }

    fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_initial_copies_prefix_and_zero_fills_rest() {
        let buf = VecBuffer::from_initial(b"abc", 8);
        assert_eq!(buf.as_slice(), b"abc\0\0\0\0\0");
        assert_eq!(buf.max_size(), 8);
    }

    #[test]
    fn resize_never_fails() {
        let mut buf = VecBuffer::new(4);
        assert!(buf.resize(2).is_ok());
        assert!(buf.resize(4).is_ok());
    }
}
