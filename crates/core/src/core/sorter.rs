//! Directory listing comparator

use std::cmp::Ordering;
use std::fmt;
use tracing::debug;

use super::entry::Entry;
use super::name::NamePartition;
use crate::config::{SortOptions, StringComparator};
use crate::util::collate::compare_nullable;

/// Comparator for directory listings
///
/// Entries are ordered like a file manager would show them:
/// 1. Directories before files
/// 2. Dotfiles before other names
/// 3. Stems (text before the first `.`) compared with the leaf comparator
/// 4. Kind tags, when kinds mode is on
/// 5. Middle parts, index by index, fewer parts first
/// 6. Extensions as the final tie-breaker
///
/// The sorter is immutable and cheap to clone; one instance can be shared
/// across threads.
///
/// # Examples
///
/// ```
/// use dirsort_core::core::{Entity, EntrySorter};
/// use dirsort_core::config::SortOptions;
///
/// let sorter = EntrySorter::new(SortOptions::new().kinds(true));
/// let mut entries = vec![
///     Entity::file("name.kindB.ext"),
///     Entity::file("name.a.kindA.ext"),
///     Entity::file("name.ext"),
/// ];
/// entries.sort_by(|a, b| sorter.compare(a, b));
///
/// let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
/// assert_eq!(names, ["name.ext", "name.a.kindA.ext", "name.kindB.ext"]);
/// ```
#[derive(Clone, Default)]
pub struct EntrySorter {
    options: SortOptions,
}

impl EntrySorter {
    pub fn new(options: SortOptions) -> Self {
        debug!("Creating entry sorter (kinds: {})", options.is_kinds());
        Self { options }
    }

    pub fn options(&self) -> &SortOptions {
        &self.options
    }

    /// Compare two entries
    pub fn compare<A, B>(&self, a: &A, b: &B) -> Ordering
    where
        A: Entry + ?Sized,
        B: Entry + ?Sized,
    {
        let comparator: &StringComparator = self.options.string_comparator();
        compare_entries(a, b, &**comparator, self.options.is_kinds())
    }

    /// Turn the sorter into a closure for `sort_by` and friends
    pub fn into_fn<E: Entry>(self) -> impl Fn(&E, &E) -> Ordering + Send + Sync + Clone {
        move |a, b| self.compare(a, b)
    }
}

impl fmt::Debug for EntrySorter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntrySorter")
            .field("options", &self.options)
            .finish()
    }
}

/// Ordering shared by [`EntrySorter`] and the default comparator
pub(crate) fn compare_entries<A, B, F>(a: &A, b: &B, comparator: F, kinds: bool) -> Ordering
where
    A: Entry + ?Sized,
    B: Entry + ?Sized,
    F: Fn(&str, &str) -> Ordering,
{
    // directories first
    match (a.is_directory(), b.is_directory()) {
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        _ => {}
    }

    // dotfiles first
    match (a.name().starts_with('.'), b.name().starts_with('.')) {
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        _ => {}
    }

    let a_parts = NamePartition::parse(a.name(), kinds);
    let b_parts = NamePartition::parse(b.name(), kinds);

    let ordering = compare_nullable(Some(a_parts.stem), Some(b_parts.stem), &comparator);
    if ordering != Ordering::Equal {
        return ordering;
    }

    if kinds {
        let ordering = compare_nullable(a_parts.kind, b_parts.kind, &comparator);
        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    let len = a_parts.middle.len().max(b_parts.middle.len());
    for i in 0..len {
        let ordering = compare_nullable(
            a_parts.middle_part(i),
            b_parts.middle_part(i),
            &comparator,
        );
        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    compare_nullable(a_parts.extension, b_parts.extension, &comparator)
}
