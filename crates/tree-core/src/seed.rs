//! Deterministic random streams.
//!
//! Every layer draws from its own stream derived from the scene seed, so a
//! rebuild with the same seed reproduces the same layout. Photos are keyed by
//! their index alone, which keeps earlier photos in place when more are added.

use rand::rngs::StdRng;
use rand::SeedableRng;

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Stream identifiers for the independently seeded layers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum Stream {
    Foliage = 1,
    Ornaments = 2,
    FairyLights = 3,
    Ribbon = 4,
    Star = 5,
    Atmosphere = 6,
    Photos = 7,
    Sparkles = 8,
}

#[inline]
fn mix(seed: u64, salt: u64) -> u64 {
    // splitmix64 finaliser
    let mut z = seed ^ salt.wrapping_mul(GOLDEN_GAMMA);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

pub fn stream_rng(seed: u64, stream: Stream) -> StdRng {
    StdRng::seed_from_u64(mix(seed, stream as u64))
}

/// Generator for the photo at `index`; independent of how many photos exist.
pub fn photo_rng(index: usize) -> StdRng {
    StdRng::seed_from_u64(mix(Stream::Photos as u64, index as u64 + 1))
}
