//! Typed domain separators for canonical hashing.
//!
//! Every digest in the workspace is computed under a [`HashDomain`], so two
//! artifacts of different kinds can never share a hash even when their bytes
//! coincide. Adding a domain is one line in the list below; the enum,
//! `as_bytes()`, `ALL` and `Display` are generated together.

/// Declares `HashDomain`, `as_bytes()`, `ALL`, and `Display` from one list.
macro_rules! define_hash_domains {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => $bytes:expr
        ),+ $(,)?
    ) => {
        /// Typed domain separator for [`super::hash::canonical_hash`].
        ///
        /// Each variant maps to a unique, null-terminated byte string that is
        /// fed to SHA-256 ahead of the payload.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum HashDomain {
            $(
                $(#[$meta])*
                $variant,
            )+
        }

        impl HashDomain {
            /// The raw domain-separator bytes (null-terminated).
            #[must_use]
            pub const fn as_bytes(&self) -> &'static [u8] {
                match self {
                    $( Self::$variant => $bytes, )+
                }
            }

            /// All domain variants in declaration order.
            pub const ALL: &[HashDomain] = &[
                $( Self::$variant, )+
            ];
        }

        impl core::fmt::Display for HashDomain {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match self {
                    $( Self::$variant => write!(f, stringify!($variant)), )+
                }
            }
        }
    };
}

define_hash_domains! {
    // Probe
    /// Canonical JSON of a recorded `ProbeTraceV1`.
    ProbeTrace => b"BISECT::PROBE_TRACE::V1\0",

    // Harness
    /// Canonical JSON name list of an `OrderedListing`.
    ListingSnapshot => b"BISECT::LISTING_SNAPSHOT::V1\0",

    /// Canonical JSON of a `ListingConfig`.
    ListingConfig => b"BISECT::LISTING_CONFIG::V1\0",

    /// Canonical JSON of a `SearchWitnessV1` report.
    SearchWitness => b"BISECT::SEARCH_WITNESS::V1\0",

    // Benchmarks
    /// Benchmark input fingerprint.
    BenchInput => b"BISECT::BENCH_INPUT::V1\0",
}
