//! Bisect Kernel: ordered search and the proof primitives around it.
//!
//! # API Surface
//!
//! - [`halving::search`] -- locate a target in a non-decreasing slice
//! - [`halving::search_observed`] -- the same loop, reporting every probe
//! - [`proof::hash::canonical_hash`] -- domain-separated SHA-256 of canonical bytes
//!
//! # Module Dependency Direction
//!
//! `halving` and `proof` do not depend on each other. The search loop is pure:
//! no allocation, no I/O, no logging.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod halving;
pub mod proof;
