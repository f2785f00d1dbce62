//! Bisect Probe: recorded, hashable, replayable halving paths.
//!
//! This crate observes the kernel's search loop; it never reimplements it.
//! It depends only on `bisect_kernel`.
//!
//! # Crate dependency graph
//!
//! ```text
//! bisect_kernel  ←  bisect_probe  ←  bisect_harness
//! (search, proof)   (trace, replay)   (listing, witness)
//! ```
//!
//! # Key types
//!
//! - [`ProbeRecorder`]: `ProbeObserver` that records each step
//! - [`ProbeTraceV1`]: the recorded path, canonical JSON + digest
//! - [`ReplayVerdict`]: result of re-running a trace against its input

#![forbid(unsafe_code)]

pub mod error;
pub mod recorder;
pub mod replay;
pub mod trace;

pub use error::ProbeError;
pub use recorder::{trace_search, trace_search_by, ProbeRecorder};
pub use replay::{replay_verify, replay_verify_by, ReplayVerdict};
pub use trace::{ProbeOutcomeV1, ProbeStepV1, ProbeTraceV1, TRACE_SCHEMA_VERSION};
