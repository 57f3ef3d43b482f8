//! Fast, deterministic hasher for the face bookkeeping of [`ConvexHull3d`](crate::ConvexHull3d).

use core::hash::BuildHasher;
use foldhash::fast::{FixedState, FoldHasher};

/// Seed for [`FixedHasher`]. Any constant works; it only has to stay the same
/// between runs so that hull construction never depends on hasher state.
const FIXED_STATE: FixedState = FixedState::with_seed(0x9e37_79b9_7f4a_7c15);

/// Hasher builder with a fixed seed, used for the set of queued faces.
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHasher;

impl BuildHasher for FixedHasher {
    type Hasher = FoldHasher<'static>;

    #[inline]
    fn build_hasher(&self) -> Self::Hasher {
        FIXED_STATE.build_hasher()
    }
}

#[cfg(test)]
mod tests {
    use core::hash::BuildHasher;

    use super::FixedHasher;

    #[test]
    fn hashes_are_stable() {
        let key = [2usize, 4, 7];
        assert_eq!(FixedHasher.hash_one(key), FixedHasher.hash_one(key));
        assert_ne!(FixedHasher.hash_one(key), FixedHasher.hash_one([2usize, 7, 4]));
    }
}
