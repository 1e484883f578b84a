//! Leaf string comparators used for every name-segment comparison

use std::cmp::Ordering;

/// Compare two strings in natural, case-insensitive order
///
/// This is the default leaf comparator:
/// 1. Digit runs compare by value (`file2` < `file10`)
/// 2. Letters compare case-insensitively (`a` sorts next to `A`)
/// 3. Strings that are still equal are ordered lowercase first, then by code point
///
/// Step 3 keeps the ordering total: two distinct strings never compare `Equal`.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use dirsort_core::util::collate::natural_compare;
///
/// assert_eq!(natural_compare("file2", "file10"), Ordering::Less);
/// assert_eq!(natural_compare("aa", "Aa"), Ordering::Less);
/// assert_eq!(natural_compare("Aa", "ab"), Ordering::Less);
/// ```
pub fn natural_compare(a: &str, b: &str) -> Ordering {
    natord::compare_ignore_case(a, b)
        .then_with(|| a.chars().map(swap_case).cmp(b.chars().map(swap_case)))
        .then_with(|| a.cmp(b))
}

/// Compare two strings in natural order, respecting case
///
/// Uppercase letters sort before lowercase ones, following code point order.
pub fn natural_compare_case_sensitive(a: &str, b: &str) -> Ordering {
    natord::compare(a, b).then_with(|| a.cmp(b))
}

/// Plain code point ordering
pub fn lexical_compare(a: &str, b: &str) -> Ordering {
    a.cmp(b)
}

/// Compare two possibly-absent segments
///
/// An absent segment sorts before a present one, so names with fewer dotted
/// parts come first. Present segments are handed to `comparator`.
pub fn compare_nullable<F>(a: Option<&str>, b: Option<&str>, comparator: F) -> Ordering
where
    F: Fn(&str, &str) -> Ordering,
{
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => comparator(a, b),
    }
}

// Single-char swap so that lowercase sorts first under code point order
fn swap_case(c: char) -> char {
    if c.is_lowercase() {
        c.to_uppercase().next().unwrap_or(c)
    } else if c.is_uppercase() {
        c.to_lowercase().next().unwrap_or(c)
    } else {
        c
    }
}
