//! `OrderedListing`: the presentation layer's sorted file-name list.
//!
//! The listing owns display order and the current selection. It owns no
//! search logic: every lookup is a call to [`bisect_kernel::halving::search_by`]
//! with the listing's [`Collation`], which is also the order the names were
//! sorted by.

use bisect_kernel::halving::search_by;
use bisect_kernel::proof::canon::canonical_json_bytes;
use bisect_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use bisect_probe::{trace_search_by, ProbeTraceV1};

use crate::config::{Collation, ListingConfig};

/// Error from a listing operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingError {
    /// `names[index - 1]` sorts after `names[index]`.
    NotSorted { index: usize },
    /// No name equals the query under the listing's collation.
    NotFound { name: String },
    /// Selection index past the end of the listing.
    IndexOutOfRange { index: usize, len: usize },
    /// Canonical JSON serialization of the snapshot failed.
    CanonError { detail: String },
}

impl std::fmt::Display for ListingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotSorted { index } => {
                write!(f, "names are not sorted: entry {index} sorts before its predecessor")
            }
            Self::NotFound { name } => write!(f, "no entry named {name:?}"),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for listing of {len}")
            }
            Self::CanonError { detail } => write!(f, "canonical JSON failed: {detail}"),
        }
    }
}

impl std::error::Error for ListingError {}

/// A sorted, displayable list of names with an optional selected row.
///
/// Invariant: `names` is non-decreasing under `collation`, and `selected` is
/// `None` or a valid index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedListing {
    names: Vec<String>,
    collation: Collation,
    selected: Option<usize>,
}

impl OrderedListing {
    /// Build a listing from unsorted names, as a folder load would.
    ///
    /// Keeps names whose extension is in `config.extensions`, sorts them by
    /// `config.collation`, drops exact duplicates, and selects row 0 when
    /// `config.select_first_on_load` is set and anything was kept.
    pub fn from_names<I, S>(names: I, config: &ListingConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let collation = config.collation;
        let mut offered = 0usize;
        let mut kept: Vec<String> = names
            .into_iter()
            .map(Into::into)
            .inspect(|_| offered += 1)
            .filter(|name| config.matches_extension(name))
            .collect();
        kept.sort_by(|a, b| collation.compare(a, b));
        kept.dedup();

        let selected = (config.select_first_on_load && !kept.is_empty()).then_some(0);
        tracing::debug!(
            offered,
            kept = kept.len(),
            collation = collation.as_str(),
            "listing loaded"
        );

        Self {
            names: kept,
            collation,
            selected,
        }
    }

    /// Adopt names that are already sorted under `collation`.
    ///
    /// Nothing is selected.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::NotSorted`] naming the first entry that sorts
    /// before its predecessor. Equal neighbours are allowed.
    pub fn from_sorted(names: Vec<String>, collation: Collation) -> Result<Self, ListingError> {
        if let Some(pos) = names
            .windows(2)
            .position(|pair| collation.compare(&pair[0], &pair[1]).is_gt())
        {
            return Err(ListingError::NotSorted { index: pos + 1 });
        }
        Ok(Self {
            names,
            collation,
            selected: None,
        })
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn collation(&self) -> Collation {
        self.collation
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Position of `name`, or `None` if absent. Selection is not touched.
    ///
    /// With duplicate names, any one of their positions may be returned.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<usize> {
        let collation = self.collation;
        search_by(&self.names, |probe| collation.compare(probe, name))
    }

    /// Same lookup as [`OrderedListing::find`], with its probes recorded.
    #[must_use]
    pub fn trace_find(&self, name: &str) -> ProbeTraceV1 {
        let collation = self.collation;
        trace_search_by(&self.names, |probe| collation.compare(probe, name))
    }

    /// Locate `name` and make it the selected row.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::NotFound`] on a miss; the previous selection
    /// is kept.
    pub fn find_and_select(&mut self, name: &str) -> Result<usize, ListingError> {
        match self.find(name) {
            Some(index) => {
                tracing::debug!(name, index, "find_and_select hit");
                self.selected = Some(index);
                Ok(index)
            }
            None => {
                tracing::debug!(name, "find_and_select miss");
                Err(ListingError::NotFound {
                    name: name.to_string(),
                })
            }
        }
    }

    /// Select row `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::IndexOutOfRange`] if `index >= len()`.
    pub fn select(&mut self, index: usize) -> Result<(), ListingError> {
        if index >= self.names.len() {
            return Err(ListingError::IndexOutOfRange {
                index,
                len: self.names.len(),
            });
        }
        self.selected = Some(index);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn selected_name(&self) -> Option<&str> {
        self.selected.and_then(|i| self.get(i))
    }

    /// Move the selection one row down, stopping at the last row.
    ///
    /// With nothing selected, selects the first row.
    pub fn select_next(&mut self) -> Option<usize> {
        let last = self.names.len().checked_sub(1)?;
        let next = self.selected.map_or(0, |i| (i + 1).min(last));
        self.selected = Some(next);
        Some(next)
    }

    /// Move the selection one row up, stopping at the first row.
    ///
    /// With nothing selected, selects the last row.
    pub fn select_previous(&mut self) -> Option<usize> {
        let last = self.names.len().checked_sub(1)?;
        let previous = self.selected.map_or(last, |i| i.saturating_sub(1));
        self.selected = Some(previous);
        Some(previous)
    }

    /// Canonical JSON of the listing contents (selection excluded).
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::CanonError`] if serialization fails.
    pub fn snapshot_bytes(&self) -> Result<Vec<u8>, ListingError> {
        let value = serde_json::json!({
            "collation": self.collation.as_str(),
            "names": self.names,
        });
        canonical_json_bytes(&value).map_err(|e| ListingError::CanonError {
            detail: e.to_string(),
        })
    }

    /// Content hash of [`OrderedListing::snapshot_bytes`].
    ///
    /// # Errors
    ///
    /// See [`OrderedListing::snapshot_bytes`].
    pub fn snapshot_digest(&self) -> Result<ContentHash, ListingError> {
        let bytes = self.snapshot_bytes()?;
        Ok(canonical_hash(HashDomain::ListingSnapshot, &bytes))
    }
}
