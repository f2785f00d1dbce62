//! Listing configuration: which names a listing keeps and how it orders them.
//!
//! A [`ListingConfig`] can be built in code (starting from `Default`) or read
//! from JSON. Every loaded config passes [`ListingConfig::validate`] before it
//! is handed out. Unknown JSON fields are ignored so older readers accept
//! newer files.

use std::cmp::Ordering;
use std::path::Path;

use bisect_kernel::proof::canon::canonical_json_bytes;
use bisect_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use serde::{Deserialize, Serialize};

/// Extensions a default listing keeps.
const DEFAULT_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Total order used to sort a listing and to search it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collation {
    /// Plain `str` ordering (byte order of UTF-8).
    #[default]
    ByteOrder,
    /// Lowercased comparison, ties broken by byte order so the order stays
    /// total and exact names remain distinguishable. Folds with Unicode
    /// `char::to_lowercase`, unlike [`ListingConfig::matches_extension`].
    CaseInsensitive,
}

impl Collation {
    /// Compare two names under this collation.
    #[must_use]
    pub fn compare(self, a: &str, b: &str) -> Ordering {
        match self {
            Self::ByteOrder => a.cmp(b),
            Self::CaseInsensitive => a
                .chars()
                .flat_map(char::to_lowercase)
                .cmp(b.chars().flat_map(char::to_lowercase))
                .then_with(|| a.cmp(b)),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ByteOrder => "byte_order",
            Self::CaseInsensitive => "case_insensitive",
        }
    }
}

/// Configuration for building an [`crate::listing::OrderedListing`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    /// File extensions (without the dot) a listing keeps. Matched
    /// ignoring ASCII case only.
    pub extensions: Vec<String>,
    pub collation: Collation,
    /// Select row 0 after loading a non-empty listing.
    pub select_first_on_load: bool,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| (*e).to_string()).collect(),
            collation: Collation::ByteOrder,
            select_first_on_load: true,
        }
    }
}

/// Error loading or validating a [`ListingConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The config file could not be read.
    Io { path: String, detail: String },
    /// The bytes are not a JSON config object.
    Parse { detail: String },
    /// The config parsed but is not usable.
    Invalid { detail: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, detail } => write!(f, "cannot read config {path}: {detail}"),
            Self::Parse { detail } => write!(f, "cannot parse config: {detail}"),
            Self::Invalid { detail } => write!(f, "invalid config: {detail}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl ListingConfig {
    /// Check that the extension list is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the list is empty, or any entry is
    /// empty, contains a `.` or path separator, or repeats another entry
    /// ignoring ASCII case.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.extensions.is_empty() {
            return Err(ConfigError::Invalid {
                detail: "extensions must not be empty".into(),
            });
        }
        for (i, ext) in self.extensions.iter().enumerate() {
            if ext.is_empty() || ext.contains(['.', '/', '\\']) {
                return Err(ConfigError::Invalid {
                    detail: format!("extension {ext:?} must be a bare suffix like \"png\""),
                });
            }
            if self.extensions[..i]
                .iter()
                .any(|prior| prior.eq_ignore_ascii_case(ext))
            {
                return Err(ConfigError::Invalid {
                    detail: format!("extension {ext:?} listed twice"),
                });
            }
        }
        Ok(())
    }

    /// Parse and validate a config from JSON. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for bad JSON and
    /// [`ConfigError::Invalid`] if validation fails.
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_slice(bytes).map_err(|e| ConfigError::Parse {
            detail: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`ListingConfig::from_json_bytes`].
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let bytes = std::fs::read(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            detail: e.to_string(),
        })?;
        let config = Self::from_json_bytes(&bytes)?;
        tracing::info!(
            path = %path.display(),
            extensions = ?config.extensions,
            collation = config.collation.as_str(),
            "loaded listing config"
        );
        Ok(config)
    }

    /// Whether `name` ends in one of the configured extensions.
    ///
    /// Folds ASCII case only, so `JPG` matches `jpg` but a non-ASCII
    /// extension must match exactly outside its ASCII letters. This is not
    /// the Unicode fold [`Collation::CaseInsensitive`] sorts by.
    #[must_use]
    pub fn matches_extension(&self, name: &str) -> bool {
        match name.rsplit_once('.') {
            Some((_, ext)) => self
                .extensions
                .iter()
                .any(|wanted| wanted.eq_ignore_ascii_case(ext)),
            None => false,
        }
    }

    /// Content hash of the config's canonical JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the config cannot be serialized.
    pub fn digest(&self) -> Result<ContentHash, ConfigError> {
        let value = serde_json::to_value(self).map_err(|e| ConfigError::Invalid {
            detail: e.to_string(),
        })?;
        let bytes = canonical_json_bytes(&value).map_err(|e| ConfigError::Invalid {
            detail: e.to_string(),
        })?;
        Ok(canonical_hash(HashDomain::ListingConfig, &bytes))
    }
}
