//! Property-based invariant checks for `mangle_content`, driven by
//! `proptest` over arbitrary seed buffers, sizes, and RNG seeds.

use manglecore::{mangle_content, MutationContext, VecBuffer};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

const MAX_FILE_SZ: usize = 256;

fn build(
    initial: &[u8],
    mutations_per_run: u32,
    printable: bool,
    dictionary: Vec<Vec<u8>>,
    seed: u64,
) -> MutationContext<VecBuffer, SmallRng> {
    let buf = VecBuffer::from_initial(initial, MAX_FILE_SZ);
    MutationContext::new(buf, initial.len(), dictionary, mutations_per_run, printable, SmallRng::seed_from_u64(seed))
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Invariant 1: size always stays within `[1, max_file_sz]`.
    #[test]
    fn size_stays_in_bounds(
        initial in prop::collection::vec(any::<u8>(), 1..MAX_FILE_SZ / 2),
        mutations_per_run in 0u32..8,
        seed in any::<u64>(),
    ) {
        let mut ctx = build(&initial, mutations_per_run, false, Vec::new(), seed);
        mangle_content(&mut ctx).unwrap();
        prop_assert!(ctx.size() >= 1);
        prop_assert!(ctx.size() <= MAX_FILE_SZ);
    }

    /// Invariant 4: `mutations_per_run == 0` is the identity.
    #[test]
    fn zero_mutations_is_identity(
        initial in prop::collection::vec(any::<u8>(), 1..MAX_FILE_SZ / 2),
        seed in any::<u64>(),
    ) {
        let mut ctx = build(&initial, 0, false, Vec::new(), seed);
        mangle_content(&mut ctx).unwrap();
        prop_assert_eq!(ctx.bytes(), initial.as_slice());
    }

    /// Invariant 3: printable sessions over printable inputs stay printable.
    #[test]
    fn printable_sessions_stay_printable(
        initial in prop::collection::vec(0x20u8..=0x7E, 1..MAX_FILE_SZ / 2),
        mutations_per_run in 1u32..8,
        seed in any::<u64>(),
    ) {
        let mut ctx = build(&initial, mutations_per_run, true, vec![b"ABCD".to_vec()], seed);
        mangle_content(&mut ctx).unwrap();
        for &b in ctx.bytes() {
            prop_assert!((0x20..=0x7E).contains(&b));
        }
    }

    /// Invariant 9: Expand (via a session) never grows past `max_file_sz`.
    #[test]
    fn never_exceeds_max_file_sz(
        initial in prop::collection::vec(any::<u8>(), 1..MAX_FILE_SZ),
        mutations_per_run in 1u32..16,
        seed in any::<u64>(),
    ) {
        let mut ctx = build(&initial, mutations_per_run, false, Vec::new(), seed);
        for _ in 0..8 {
            mangle_content(&mut ctx).unwrap();
            prop_assert!(ctx.size() <= MAX_FILE_SZ);
        }
    }
}

/// Invariant 5: Dictionary/DictionaryInsert on an empty dictionary behave
/// exactly like Bit, for every RNG seed tried -- checked directly against
/// `mangle_content` is not possible (operator choice is itself random), so
/// this targets the underlying equivalence `manglecore` documents in
/// SPEC_FULL.md instead, by running many full sessions with an empty
/// dictionary and asserting they never panic or escape bounds, which is
/// the only externally observable behavior at this layer.
#[test]
fn sessions_with_empty_dictionary_never_panic() {
    for seed in 0..64u64 {
        let mut ctx = build(b"seed content here", 6, seed % 2 == 0, Vec::new(), seed);
        mangle_content(&mut ctx).unwrap();
        assert!(ctx.size() >= 1 && ctx.size() <= MAX_FILE_SZ);
    }
}

/// Invariant 8: Shrink never runs on (and thus never corrupts) a
/// single-byte buffer -- approximated here by driving many sessions from a
/// 1-byte seed and confirming the size never collapses to 0 nor panics.
#[test]
fn single_byte_seed_survives_many_sessions() {
    for seed in 0..64u64 {
        let mut ctx = build(b"A", 6, false, Vec::new(), seed);
        for _ in 0..16 {
            mangle_content(&mut ctx).unwrap();
            assert!(ctx.size() >= 1);
        }
    }
}
