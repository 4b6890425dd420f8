use thiserror::Error;

/// Contract violations at `MutationContext` construction time.
///
/// These are caller mistakes, not conditions the mutator itself can run
/// into once a context exists.
#[derive(Error, Debug)]
pub enum ContextError {
    #[error("initial size {size} is out of range 1..={max_file_sz}")]
    InitialSizeOutOfRange { size: usize, max_file_sz: usize },
    #[error("buffer capacity {capacity} is smaller than max_file_sz {max_file_sz}")]
    CapacityTooSmall { capacity: usize, max_file_sz: usize },
}

/// Failure surfaced by a mutation session.
///
/// The core has no recoverable error conditions of its own; the only thing
/// that can go wrong is the injected [`crate::ResizableBuffer`] refusing a
/// resize. The core does not attempt to restore the prior size on this path.
#[derive(Error, Debug)]
pub enum MangleError<E: std::error::Error + 'static> {
    #[error("buffer resize failed: {0}")]
    Resize(#[source] E),
}
