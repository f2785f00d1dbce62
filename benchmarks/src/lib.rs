//! Shared inputs for bisect benchmark suites.
//!
//! Inputs are generated, never random, and each has a content digest so a
//! reported timing can be tied to the exact data it ran on.

use bisect_harness::config::ListingConfig;
use bisect_harness::listing::OrderedListing;
use bisect_kernel::proof::canon::canonical_json_bytes;
use bisect_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};

/// Sequence lengths every size-parameterized group runs at.
pub const SIZES: &[usize] = &[16, 1_024, 65_536, 1_048_576];

/// `len` strictly increasing even numbers: `0, 2, 4, ...`.
///
/// Odd targets miss, even targets below `2 * len` hit.
#[must_use]
pub fn even_sequence(len: usize) -> Vec<u64> {
    (0..len as u64).map(|i| i * 2).collect()
}

/// Targets spread across an [`even_sequence`] of `len`: first, last, middle
/// hits plus a miss below, inside, and above the range.
#[must_use]
pub fn probe_targets(len: usize) -> Vec<u64> {
    let top = (len as u64).saturating_sub(1) * 2;
    vec![0, top, top / 2 & !1, top / 2 | 1, top + 1, u64::MAX]
}

/// A listing of `len` generated image names under the default config.
#[must_use]
pub fn synthetic_listing(len: usize) -> OrderedListing {
    let names = (0..len).map(|i| {
        if i % 2 == 0 {
            format!("IMG_{i:07}.jpg")
        } else {
            format!("IMG_{i:07}.png")
        }
    });
    OrderedListing::from_names(names, &ListingConfig::default())
}

/// Content digest of a generated sequence, for pinning benchmark inputs.
///
/// # Panics
///
/// Panics if the sequence cannot be canonicalized. Benchmark setup failures
/// are fatal.
#[must_use]
pub fn input_digest(sequence: &[u64]) -> ContentHash {
    let value = serde_json::Value::from(sequence.to_vec());
    let bytes = canonical_json_bytes(&value).expect("integers always canonicalize");
    canonical_hash(HashDomain::BenchInput, &bytes)
}
