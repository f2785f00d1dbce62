//! Halving module: binary elimination over non-decreasing sequences.
//!
//! [`search`] is the entry point. Every variant routes through the single
//! loop in [`search::search_observed`]; the untraced forms pass [`NoProbe`],
//! so recording a trace can never change which index is returned.
//!
//! # Halving convention
//!
//! The candidate range is inclusive `[low, high]` and the probe is the lower
//! midpoint, `low + (high - low) / 2`. When several elements equal the target,
//! the first one the halving path lands on is returned. That index is not
//! necessarily the first or last occurrence; callers must not depend on which
//! duplicate they get.

pub mod observe;
pub mod search;

pub use observe::{NoProbe, Probe, ProbeObserver, ProbeOrdering};
pub use search::{probe_budget, search, search_by, search_by_key, search_observed};
