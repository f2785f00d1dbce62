//! `ProbeTraceV1`: the recorded halving path of one search.
//!
//! The trace is a normative artifact: its canonical JSON bytes are hashed
//! under [`HashDomain::ProbeTrace`], and a parsed trace is checked against
//! the halving rules before anyone trusts it.
//!
//! # Wire shape
//!
//! ```text
//! {"len":6,
//!  "outcome":{"index":3,"type":"found"},
//!  "schema_version":"probe_trace.v1",
//!  "steps":[{"high":5,"low":0,"mid":2,"ordering":"less","step":0}, ...]}
//! ```

use bisect_kernel::halving::{probe_budget, ProbeOrdering};
use bisect_kernel::proof::canon::canonical_json_bytes;
use bisect_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use serde_json::{json, Value};

use crate::error::ProbeError;

/// Schema tag written into every trace.
pub const TRACE_SCHEMA_VERSION: &str = "probe_trace.v1";

/// One recorded probe. `low..=high` is the candidate range before the probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeStepV1 {
    pub step: usize,
    pub low: usize,
    pub high: usize,
    pub mid: usize,
    pub ordering: ProbeOrdering,
}

/// Result of the traced search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcomeV1 {
    Found { index: usize },
    Absent,
}

impl From<Option<usize>> for ProbeOutcomeV1 {
    fn from(result: Option<usize>) -> Self {
        match result {
            Some(index) => Self::Found { index },
            None => Self::Absent,
        }
    }
}

impl ProbeOutcomeV1 {
    #[must_use]
    pub fn index(self) -> Option<usize> {
        match self {
            Self::Found { index } => Some(index),
            Self::Absent => None,
        }
    }
}

/// A complete probe trace for a sequence of `len` elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeTraceV1 {
    pub len: usize,
    pub steps: Vec<ProbeStepV1>,
    pub outcome: ProbeOutcomeV1,
}

impl ProbeTraceV1 {
    /// The search result this trace ends in.
    #[must_use]
    pub fn result(&self) -> Option<usize> {
        self.outcome.index()
    }

    /// JSON value in the wire shape above (not yet canonical).
    #[must_use]
    pub fn to_json_value(&self) -> Value {
        let steps: Vec<Value> = self
            .steps
            .iter()
            .map(|s| {
                json!({
                    "step": s.step,
                    "low": s.low,
                    "high": s.high,
                    "mid": s.mid,
                    "ordering": s.ordering.as_str(),
                })
            })
            .collect();
        let outcome = match self.outcome {
            ProbeOutcomeV1::Found { index } => json!({"type": "found", "index": index}),
            ProbeOutcomeV1::Absent => json!({"type": "absent"}),
        };
        json!({
            "schema_version": TRACE_SCHEMA_VERSION,
            "len": self.len,
            "outcome": outcome,
            "steps": steps,
        })
    }

    /// Canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::Canon`] if canonicalization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, ProbeError> {
        Ok(canonical_json_bytes(&self.to_json_value())?)
    }

    /// Content hash of the canonical bytes under [`HashDomain::ProbeTrace`].
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::Canon`] if canonicalization fails.
    pub fn digest(&self) -> Result<ContentHash, ProbeError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(HashDomain::ProbeTrace, &bytes))
    }

    /// Parse and validate a trace from JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError`] if the bytes are not a well-formed trace of the
    /// current schema, or if the trace violates the halving rules.
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self, ProbeError> {
        let value: Value =
            serde_json::from_slice(bytes).map_err(|e| ProbeError::MalformedTrace {
                detail: e.to_string(),
            })?;
        Self::from_json_value(&value)
    }

    /// Parse and validate a trace from a JSON value.
    ///
    /// # Errors
    ///
    /// See [`ProbeTraceV1::from_json_bytes`].
    pub fn from_json_value(value: &Value) -> Result<Self, ProbeError> {
        let schema = value["schema_version"]
            .as_str()
            .ok_or_else(|| malformed("missing schema_version"))?;
        if schema != TRACE_SCHEMA_VERSION {
            return Err(ProbeError::UnsupportedSchema {
                found: schema.to_string(),
            });
        }

        let len = read_index(&value["len"], "len")?;

        let outcome = match value["outcome"]["type"].as_str() {
            Some("found") => ProbeOutcomeV1::Found {
                index: read_index(&value["outcome"]["index"], "outcome.index")?,
            },
            Some("absent") => ProbeOutcomeV1::Absent,
            Some(other) => return Err(malformed(&format!("unknown outcome type {other:?}"))),
            None => return Err(malformed("missing outcome.type")),
        };

        let raw_steps = value["steps"]
            .as_array()
            .ok_or_else(|| malformed("missing steps array"))?;
        let mut steps = Vec::with_capacity(raw_steps.len());
        for raw in raw_steps {
            let ordering_name = raw["ordering"]
                .as_str()
                .ok_or_else(|| malformed("step missing ordering"))?;
            steps.push(ProbeStepV1 {
                step: read_index(&raw["step"], "step")?,
                low: read_index(&raw["low"], "low")?,
                high: read_index(&raw["high"], "high")?,
                mid: read_index(&raw["mid"], "mid")?,
                ordering: ProbeOrdering::parse(ordering_name)
                    .ok_or_else(|| malformed(&format!("unknown ordering {ordering_name:?}")))?,
            });
        }

        let trace = Self {
            len,
            steps,
            outcome,
        };
        trace.validate()?;
        Ok(trace)
    }

    /// Check the trace against the halving rules.
    ///
    /// A valid trace is one the search loop could have produced for some
    /// comparator over `len` elements:
    /// - steps are numbered `0..k` with `k <= probe_budget(len)`;
    /// - step 0 covers `[0, len - 1]`; every later range follows from the
    ///   previous probe's ordering;
    /// - every `mid` is the lower midpoint of its range;
    /// - only the last step may be `equal`, and the outcome matches it;
    /// - an `absent` outcome means the last probe exhausted the range.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::InvalidTrace`] describing the first violation.
    pub fn validate(&self) -> Result<(), ProbeError> {
        let budget = probe_budget(self.len) as usize;
        if self.steps.len() > budget {
            return Err(invalid(
                None,
                format!("{} steps exceed budget {budget}", self.steps.len()),
            ));
        }
        if self.len > 0 && self.steps.is_empty() {
            return Err(invalid(None, "non-empty sequence with no probes".into()));
        }

        let mut low = 0;
        let mut end = self.len;
        for (i, s) in self.steps.iter().enumerate() {
            if s.step != i {
                return Err(invalid(Some(i), format!("numbered {}", s.step)));
            }
            if low >= end {
                return Err(invalid(Some(i), "probe after the range was exhausted".into()));
            }
            let high = end - 1;
            if s.low != low || s.high != high {
                return Err(invalid(
                    Some(i),
                    format!(
                        "range [{}, {}] but expected [{low}, {high}]",
                        s.low, s.high
                    ),
                ));
            }
            if s.mid != low + (high - low) / 2 {
                return Err(invalid(Some(i), format!("mid {} is not the lower midpoint", s.mid)));
            }
            match s.ordering {
                ProbeOrdering::Equal if i + 1 != self.steps.len() => {
                    return Err(invalid(Some(i), "equal probe is not the last step".into()));
                }
                ProbeOrdering::Equal => {}
                ProbeOrdering::Less => low = s.mid + 1,
                ProbeOrdering::Greater => end = s.mid,
            }
        }

        let expected = match self.steps.last() {
            Some(last) if last.ordering == ProbeOrdering::Equal => {
                ProbeOutcomeV1::Found { index: last.mid }
            }
            Some(_) if low < end => {
                return Err(invalid(None, "trace stops before the range is exhausted".into()));
            }
            _ => ProbeOutcomeV1::Absent,
        };
        if self.outcome != expected {
            return Err(invalid(
                None,
                format!("outcome {:?} but steps imply {expected:?}", self.outcome),
            ));
        }
        Ok(())
    }
}

fn read_index(value: &Value, field: &str) -> Result<usize, ProbeError> {
    let raw = value
        .as_u64()
        .ok_or_else(|| malformed(&format!("{field} is not an unsigned integer")))?;
    usize::try_from(raw).map_err(|_| malformed(&format!("{field} {raw} does not fit usize")))
}

fn malformed(detail: &str) -> ProbeError {
    ProbeError::MalformedTrace {
        detail: detail.to_string(),
    }
}

fn invalid(step: Option<usize>, detail: String) -> ProbeError {
    ProbeError::InvalidTrace { step, detail }
}
