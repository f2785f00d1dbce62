//! Proof module: canonical JSON and domain-separated content hashing.
//!
//! Independent of `halving`; nothing in the search loop hashes or allocates.

pub mod canon;
pub mod hash;
pub mod hash_domain;
