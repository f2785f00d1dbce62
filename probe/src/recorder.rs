//! Probe recorder: the `ProbeObserver` that turns a search into a trace.

use std::cmp::Ordering;

use bisect_kernel::halving::{probe_budget, search_observed, Probe, ProbeObserver};

use crate::trace::{ProbeOutcomeV1, ProbeStepV1, ProbeTraceV1};

/// Collects every probe of one search, numbered from 0.
#[derive(Debug, Default)]
pub struct ProbeRecorder {
    steps: Vec<ProbeStepV1>,
}

impl ProbeRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size for a sequence of `len` elements so recording never reallocates.
    #[must_use]
    pub fn for_len(len: usize) -> Self {
        Self {
            steps: Vec::with_capacity(probe_budget(len) as usize),
        }
    }

    #[must_use]
    pub fn steps(&self) -> &[ProbeStepV1] {
        &self.steps
    }

    /// Seal the recording into a trace for a sequence of `len` elements.
    #[must_use]
    pub fn finish(self, len: usize, result: Option<usize>) -> ProbeTraceV1 {
        ProbeTraceV1 {
            len,
            steps: self.steps,
            outcome: ProbeOutcomeV1::from(result),
        }
    }
}

impl ProbeObserver for ProbeRecorder {
    fn on_probe(&mut self, probe: Probe) {
        self.steps.push(ProbeStepV1 {
            step: self.steps.len(),
            low: probe.low,
            high: probe.high,
            mid: probe.mid,
            ordering: probe.ordering,
        });
    }
}

/// Run [`bisect_kernel::halving::search`] and record its probes.
#[must_use]
pub fn trace_search<T: Ord>(sequence: &[T], target: &T) -> ProbeTraceV1 {
    trace_search_by(sequence, |probe| probe.cmp(target))
}

/// Run [`bisect_kernel::halving::search_by`] and record its probes.
#[must_use]
pub fn trace_search_by<T, F>(sequence: &[T], compare: F) -> ProbeTraceV1
where
    F: FnMut(&T) -> Ordering,
{
    let mut recorder = ProbeRecorder::for_len(sequence.len());
    let result = search_observed(sequence, compare, &mut recorder);
    recorder.finish(sequence.len(), result)
}
