//! Observer seam for the halving loop.

use std::cmp::Ordering;

/// How the probed element compares to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeOrdering {
    /// Element is below the target; the lower half is discarded.
    Less,
    /// Element equals the target; the search stops.
    Equal,
    /// Element is above the target; the upper half is discarded.
    Greater,
}

impl ProbeOrdering {
    /// Stable lowercase name used in serialized traces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Less => "less",
            Self::Equal => "equal",
            Self::Greater => "greater",
        }
    }

    /// Inverse of [`ProbeOrdering::as_str`].
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "less" => Some(Self::Less),
            "equal" => Some(Self::Equal),
            "greater" => Some(Self::Greater),
            _ => None,
        }
    }
}

impl From<Ordering> for ProbeOrdering {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Self::Less,
            Ordering::Equal => Self::Equal,
            Ordering::Greater => Self::Greater,
        }
    }
}

impl std::fmt::Display for ProbeOrdering {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One iteration of the halving loop.
///
/// `low` and `high` are the inclusive candidate range at the moment of the
/// probe, so `low <= mid <= high` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
    pub low: usize,
    pub high: usize,
    pub mid: usize,
    pub ordering: ProbeOrdering,
}

/// Receives every probe made by [`super::search_observed`], in order.
///
/// Observers see the loop; they cannot steer it.
pub trait ProbeObserver {
    fn on_probe(&mut self, probe: Probe);
}

/// Observer that discards everything. Used by the untraced entry points.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProbe;

impl ProbeObserver for NoProbe {
    #[inline]
    fn on_probe(&mut self, _probe: Probe) {}
}

impl<O: ProbeObserver + ?Sized> ProbeObserver for &mut O {
    #[inline]
    fn on_probe(&mut self, probe: Probe) {
        (**self).on_probe(probe);
    }
}
