//! `replay_verify()`: check a recorded trace by re-running the search.
//!
//! A trace records comparisons, not elements, so replay needs the original
//! sequence and target. The verdict pins the first step where the re-run
//! disagrees with the record.

use std::cmp::Ordering;

use crate::error::ProbeError;
use crate::recorder::trace_search_by;
use crate::trace::ProbeTraceV1;

/// Outcome of a replay that ran to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayVerdict {
    /// Every step and the outcome match.
    Match,
    /// The first point of disagreement. `step == trace.steps.len()` means the
    /// recorded steps all matched but the re-run went further or ended
    /// differently.
    Divergence { step: usize, detail: String },
}

/// Verify `trace` against `sequence` searched for `target`.
///
/// # Errors
///
/// Returns [`ProbeError::InvalidTrace`] if the trace is not structurally
/// valid; malformed traces are never replayed.
pub fn replay_verify<T: Ord>(
    trace: &ProbeTraceV1,
    sequence: &[T],
    target: &T,
) -> Result<ReplayVerdict, ProbeError> {
    replay_verify_by(trace, sequence, |probe| probe.cmp(target))
}

/// Verify `trace` against `sequence` searched with `compare`.
///
/// # Errors
///
/// See [`replay_verify`].
pub fn replay_verify_by<T, F>(
    trace: &ProbeTraceV1,
    sequence: &[T],
    compare: F,
) -> Result<ReplayVerdict, ProbeError>
where
    F: FnMut(&T) -> Ordering,
{
    trace.validate()?;

    if trace.len != sequence.len() {
        return Ok(ReplayVerdict::Divergence {
            step: 0,
            detail: format!(
                "trace recorded {} elements, sequence has {}",
                trace.len,
                sequence.len()
            ),
        });
    }

    let rerun = trace_search_by(sequence, compare);

    for (recorded, replayed) in trace.steps.iter().zip(&rerun.steps) {
        if recorded != replayed {
            return Ok(ReplayVerdict::Divergence {
                step: recorded.step,
                detail: format!(
                    "recorded mid {} {} but replay saw mid {} {}",
                    recorded.mid, recorded.ordering, replayed.mid, replayed.ordering
                ),
            });
        }
    }

    if trace.steps.len() != rerun.steps.len() || trace.outcome != rerun.outcome {
        return Ok(ReplayVerdict::Divergence {
            step: trace.steps.len().min(rerun.steps.len()),
            detail: format!(
                "recorded {:?} after {} steps, replay {:?} after {}",
                trace.outcome,
                trace.steps.len(),
                rerun.outcome,
                rerun.steps.len()
            ),
        });
    }

    Ok(ReplayVerdict::Match)
}
