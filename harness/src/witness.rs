//! Search witness: a canonical, hashed record of one listing lookup.
//!
//! [`build_witness`] traces a query against a listing and commits to the
//! listing snapshot, the query, the probe path and the outcome in one
//! canonical JSON report. [`SearchWitnessV1::verify`] re-derives everything
//! from the report bytes and a listing, and replays the recorded probes.
//!
//! # Report shape
//!
//! ```text
//! {"collation", "listing_digest", "listing_len", "outcome", "query",
//!  "schema_version", "trace", "trace_digest"}
//! ```

use bisect_kernel::proof::canon::canonical_json_bytes;
use bisect_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use bisect_probe::{replay_verify_by, ProbeError, ProbeOutcomeV1, ProbeTraceV1, ReplayVerdict};
use serde_json::{json, Value};

use crate::listing::{ListingError, OrderedListing};

/// Schema tag written into every witness report.
pub const WITNESS_SCHEMA_VERSION: &str = "search_witness.v1";

/// Errors building or verifying a witness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WitnessError {
    /// Snapshotting the listing failed.
    Listing(ListingError),
    /// The embedded trace could not be serialized, parsed, or replayed.
    Probe(ProbeError),
    /// Report bytes are not a witness report.
    Malformed { detail: String },
    /// Recomputed digest differs from the one carried by the witness.
    DigestMismatch { expected: String, actual: String },
    /// The report was built from a different listing or query.
    BindingMismatch { field: &'static str, detail: String },
}

impl std::fmt::Display for WitnessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Listing(e) => write!(f, "listing: {e}"),
            Self::Probe(e) => write!(f, "probe trace: {e}"),
            Self::Malformed { detail } => write!(f, "malformed witness: {detail}"),
            Self::DigestMismatch { expected, actual } => {
                write!(f, "witness digest mismatch: expected {expected}, got {actual}")
            }
            Self::BindingMismatch { field, detail } => {
                write!(f, "witness {field} does not match: {detail}")
            }
        }
    }
}

impl std::error::Error for WitnessError {}

impl From<ListingError> for WitnessError {
    fn from(e: ListingError) -> Self {
        Self::Listing(e)
    }
}

impl From<ProbeError> for WitnessError {
    fn from(e: ProbeError) -> Self {
        Self::Probe(e)
    }
}

/// Canonical report bytes plus their digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchWitnessV1 {
    pub bytes: Vec<u8>,
    pub digest: ContentHash,
    pub outcome: ProbeOutcomeV1,
}

/// Trace `query` against `listing` and package the result.
///
/// Same listing and query always produce the same bytes and digest.
///
/// # Errors
///
/// Returns [`WitnessError`] if the listing snapshot or trace cannot be
/// serialized.
pub fn build_witness(
    listing: &OrderedListing,
    query: &str,
) -> Result<SearchWitnessV1, WitnessError> {
    let trace = listing.trace_find(query);
    let listing_digest = listing.snapshot_digest()?;
    let trace_digest = trace.digest()?;

    let report = json!({
        "schema_version": WITNESS_SCHEMA_VERSION,
        "collation": listing.collation().as_str(),
        "listing_digest": listing_digest.as_str(),
        "listing_len": listing.len(),
        "query": query,
        "outcome": outcome_json(trace.outcome),
        "trace": trace.to_json_value(),
        "trace_digest": trace_digest.as_str(),
    });
    let bytes = canonical_json_bytes(&report).map_err(ProbeError::from)?;
    let digest = canonical_hash(HashDomain::SearchWitness, &bytes);

    tracing::debug!(
        query,
        outcome = ?trace.outcome,
        probes = trace.steps.len(),
        digest = %digest,
        "search witness built"
    );

    Ok(SearchWitnessV1 {
        bytes,
        digest,
        outcome: trace.outcome,
    })
}

impl SearchWitnessV1 {
    /// Check this witness against `listing` and `query`.
    ///
    /// Verifies, in order: the digest over the bytes, the schema, the
    /// listing bindings (digest, collation, length), the query, the trace
    /// digest, and finally replays the
    /// embedded trace against the listing's names.
    ///
    /// # Errors
    ///
    /// Returns [`WitnessError`] for any binding or structural failure. A
    /// trace that is well-formed but replays differently is reported as
    /// [`ReplayVerdict::Divergence`] instead.
    pub fn verify(
        &self,
        listing: &OrderedListing,
        query: &str,
    ) -> Result<ReplayVerdict, WitnessError> {
        let actual = canonical_hash(HashDomain::SearchWitness, &self.bytes);
        if actual != self.digest {
            return Err(WitnessError::DigestMismatch {
                expected: self.digest.to_string(),
                actual: actual.to_string(),
            });
        }

        let report: Value =
            serde_json::from_slice(&self.bytes).map_err(|e| WitnessError::Malformed {
                detail: e.to_string(),
            })?;
        if report["schema_version"] != WITNESS_SCHEMA_VERSION {
            return Err(WitnessError::Malformed {
                detail: format!("schema_version {}", report["schema_version"]),
            });
        }

        let listing_digest = listing.snapshot_digest()?;
        expect_field(&report, "listing_digest", listing_digest.as_str())?;
        expect_field(&report, "collation", listing.collation().as_str())?;
        match report["listing_len"].as_u64() {
            Some(len) if usize::try_from(len).ok() == Some(listing.len()) => {}
            Some(len) => {
                return Err(WitnessError::BindingMismatch {
                    field: "listing_len",
                    detail: format!("report has {len}, listing has {}", listing.len()),
                })
            }
            None => {
                return Err(WitnessError::Malformed {
                    detail: "missing listing_len".into(),
                })
            }
        }
        expect_field(&report, "query", query)?;

        let trace = ProbeTraceV1::from_json_value(&report["trace"])?;
        expect_field(&report, "trace_digest", trace.digest()?.as_str())?;
        if report["outcome"] != outcome_json(trace.outcome) {
            return Err(WitnessError::Malformed {
                detail: "outcome disagrees with embedded trace".into(),
            });
        }

        let collation = listing.collation();
        Ok(replay_verify_by(&trace, listing.names(), |probe| {
            collation.compare(probe, query)
        })?)
    }
}

fn outcome_json(outcome: ProbeOutcomeV1) -> Value {
    match outcome {
        ProbeOutcomeV1::Found { index } => json!({"type": "found", "index": index}),
        ProbeOutcomeV1::Absent => json!({"type": "absent"}),
    }
}

fn expect_field(report: &Value, field: &'static str, expected: &str) -> Result<(), WitnessError> {
    match report[field].as_str() {
        Some(found) if found == expected => Ok(()),
        Some(found) => Err(WitnessError::BindingMismatch {
            field,
            detail: format!("report has {found:?}, expected {expected:?}"),
        }),
        None => Err(WitnessError::Malformed {
            detail: format!("missing {field}"),
        }),
    }
}
