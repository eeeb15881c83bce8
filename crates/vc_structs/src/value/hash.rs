use core::hash::BuildHasher;

use foldhash::fast::{FixedState, FoldHasher};

/// Seed shared by every [`FixedHashState`].
const FIXED_HASH_STATE: FixedState = FixedState::with_seed(0x95EE04C4F326B271);

/// Hasher produced by [`FixedHashState`].
pub type FixedHasher = FoldHasher<'static>;

/// A deterministic [`BuildHasher`] for [`ValueMap`](crate::ValueMap).
///
/// Every instance hashes with the same seed, so it works without a source
/// of randomness in `no_std` builds.
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHashState;

impl BuildHasher for FixedHashState {
    type Hasher = FixedHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        FIXED_HASH_STATE.build_hasher()
    }
}
