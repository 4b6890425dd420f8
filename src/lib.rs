//! Byte-buffer mutation core for feedback-driven fuzzing.
//!
//! `mangle_content` is the sole entry point: given a [`MutationContext`], it
//! stacks a random number of independent operators (bit flips, magic-value
//! overwrites, arithmetic deltas, dictionary splices, structural
//! inflate/shrink) on top of a distinguished resize step. Everything the
//! crate needs from its surroundings -- an RNG stream, a resizable byte
//! store, a dictionary -- is taken as a generic parameter or plain data, not
//! assumed global state. Process supervision, coverage feedback, corpus
//! selection, dictionary loading and CLI/config parsing live outside this
//! crate; see `src/bin/mangle_bench.rs` for a minimal driver that plays those
//! roles.

pub mod buffer;
pub mod context;
pub mod error;
pub mod magic;
pub mod mutation;
pub mod rng;
pub mod util;

pub use buffer::{ResizableBuffer, VecBuffer};
pub use context::MutationContext;
pub use error::{ContextError, MangleError};
pub use mutation::mangle_content;
pub use rng::MangleRng;
