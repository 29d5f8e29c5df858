//! Random generators for [`shuffle`](crate::transform::shuffle) and
//! [`cut`](crate::transform::cut).

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Creates a generator from a fixed seed.
///
/// The same seed always yields the same shuffles and cuts.
///
/// ```
/// use cardeck::{seeded_rng, transform};
///
/// let a = cardeck::new(&mut [&mut transform::shuffle(&mut seeded_rng(7))]);
/// let b = cardeck::new(&mut [&mut transform::shuffle(&mut seeded_rng(7))]);
/// assert_eq!(a, b);
/// ```
#[must_use]
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Creates a generator seeded from the operating system.
///
/// Each call yields an independent generator. Not suitable for anything
/// that needs cryptographic guarantees.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[must_use]
pub fn entropy_rng() -> ChaCha8Rng {
    ChaCha8Rng::from_os_rng()
}
