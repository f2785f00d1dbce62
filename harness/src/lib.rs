//! Bisect Harness: the presentation-side view-model around ordered search.
//!
//! The harness holds what a file browser shows: a filtered, sorted list of
//! names and a selection. Lookups are delegated to the kernel; the harness
//! adds configuration, logging, and hashed witnesses of individual lookups.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod listing;
pub mod witness;
