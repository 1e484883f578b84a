// Stable API facade for external consumers - Pure logic, no I/O

use std::cmp::Ordering;
use tracing::debug;

use crate::config::{SortConfig, SortOptions};
use crate::core::entry::{Entity, Entry};
use crate::core::sorter::{EntrySorter, compare_entries};
use crate::error::{DirsortError, Result};
use crate::util::collate::natural_compare;

/// The default leaf comparator: natural, case-insensitive
pub use crate::util::collate::natural_compare as default_comparator;

/// Compare two entries with the default options
///
/// Usable directly with `sort_by`:
///
/// ```
/// use dirsort_core::api::better_directory_sort;
/// use dirsort_core::core::Entity;
///
/// let mut entries = vec![Entity::file("a"), Entity::directory("b")];
/// entries.sort_by(better_directory_sort);
/// assert_eq!(entries[0], Entity::directory("b"));
/// ```
pub fn better_directory_sort<E: Entry + ?Sized>(a: &E, b: &E) -> Ordering {
    compare_entries(a, b, natural_compare, false)
}

/// Build a sorter around a custom leaf comparator, kinds mode off
pub fn custom<F>(comparator: F) -> EntrySorter
where
    F: Fn(&str, &str) -> Ordering + Send + Sync + 'static,
{
    EntrySorter::new(SortOptions::new().comparator(comparator))
}

/// Sort entries in place with the default options
pub fn sort_entries<E: Entry>(entries: &mut [E]) {
    debug!("Sorting {} entries", entries.len());
    entries.sort_by(better_directory_sort);
}

/// Sort entries in place with a configured sorter
pub fn sort_entries_with<E: Entry>(entries: &mut [E], sorter: &EntrySorter) {
    debug!(
        "Sorting {} entries (kinds: {})",
        entries.len(),
        sorter.options().is_kinds()
    );
    entries.sort_by(|a, b| sorter.compare(a, b));
}

/// Sort bare file names, every name treated as a file
pub fn sort_names(names: Vec<String>, config: &SortConfig) -> Vec<String> {
    let sorter = config.build();
    let mut sorted = names;
    sorted.sort_by(|a, b| sorter.compare(&(a, false), &(b, false)));
    sorted
}

/// Parse a JSON array of `{ "name": ..., "isDirectory": ... }` records
pub fn parse_entities(json: &str) -> Result<Vec<Entity>> {
    let entities: Vec<Entity> =
        serde_json::from_str(json).map_err(|e| DirsortError::parse(e.to_string()))?;
    debug!("Parsed {} entities", entities.len());
    Ok(entities)
}
