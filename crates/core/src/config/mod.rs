//! Sorter configuration: runtime options and their serializable form

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::trace;

use crate::core::sorter::EntrySorter;
use crate::error::{DirsortError, Result};
use crate::util::collate::{lexical_compare, natural_compare, natural_compare_case_sensitive};

/// Leaf string comparator shared by a sorter
pub type StringComparator = Arc<dyn Fn(&str, &str) -> Ordering + Send + Sync>;

/// Options captured by an [`EntrySorter`]
#[derive(Clone)]
pub struct SortOptions {
    comparator: StringComparator,
    kinds: bool,
}

impl SortOptions {
    pub fn new() -> Self {
        Self {
            comparator: Arc::new(natural_compare),
            kinds: false,
        }
    }

    /// Replace the leaf string comparator
    pub fn comparator<F>(mut self, comparator: F) -> Self
    where
        F: Fn(&str, &str) -> Ordering + Send + Sync + 'static,
    {
        self.comparator = Arc::new(comparator);
        self
    }

    /// Treat the segment before the extension as a kind tag
    pub fn kinds(mut self, kinds: bool) -> Self {
        self.kinds = kinds;
        self
    }

    pub fn is_kinds(&self) -> bool {
        self.kinds
    }

    pub fn string_comparator(&self) -> &StringComparator {
        &self.comparator
    }
}

impl Default for SortOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SortOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortOptions")
            .field("comparator", &"<fn>")
            .field("kinds", &self.kinds)
            .finish()
    }
}

/// Named leaf comparators available to serialized configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComparatorKind {
    /// Natural, case-insensitive (lowercase first on ties)
    #[default]
    Natural,
    /// Natural, uppercase before lowercase
    CaseSensitive,
    /// Code point order
    Lexical,
}

impl ComparatorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparatorKind::Natural => "natural",
            ComparatorKind::CaseSensitive => "case-sensitive",
            ComparatorKind::Lexical => "lexical",
        }
    }

    /// The comparator function behind this preset
    pub fn function(&self) -> fn(&str, &str) -> Ordering {
        match self {
            ComparatorKind::Natural => natural_compare,
            ComparatorKind::CaseSensitive => natural_compare_case_sensitive,
            ComparatorKind::Lexical => lexical_compare,
        }
    }
}

impl FromStr for ComparatorKind {
    type Err = DirsortError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "natural" | "default" => Ok(ComparatorKind::Natural),
            "case-sensitive" | "case_sensitive" | "natural-case-sensitive" => {
                Ok(ComparatorKind::CaseSensitive)
            }
            "lexical" | "ordinal" => Ok(ComparatorKind::Lexical),
            _ => Err(DirsortError::unknown_comparator(s)),
        }
    }
}

impl fmt::Display for ComparatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serializable sorter configuration
///
/// ```
/// use dirsort_core::config::{ComparatorKind, SortConfig};
///
/// let config = SortConfig::from_json(r#"{"comparator": "lexical", "kinds": true}"#).unwrap();
/// assert_eq!(config.comparator, ComparatorKind::Lexical);
/// assert!(config.kinds);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SortConfig {
    pub comparator: ComparatorKind,
    pub kinds: bool,
}

impl SortConfig {
    pub fn new(comparator: ComparatorKind, kinds: bool) -> Self {
        Self { comparator, kinds }
    }

    /// Parse a JSON configuration object
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SortConfig =
            serde_json::from_str(json).map_err(|e| DirsortError::invalid_config(e.to_string()))?;
        trace!(
            "Parsed sort config: comparator={}, kinds={}",
            config.comparator, config.kinds
        );
        Ok(config)
    }

    pub fn into_options(self) -> SortOptions {
        SortOptions::new()
            .comparator(self.comparator.function())
            .kinds(self.kinds)
    }

    pub fn build(self) -> EntrySorter {
        EntrySorter::new(self.into_options())
    }
}

impl From<SortConfig> for SortOptions {
    fn from(config: SortConfig) -> Self {
        config.into_options()
    }
}
