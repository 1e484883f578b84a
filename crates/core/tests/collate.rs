// Unit tests for leaf string comparators
use std::cmp::Ordering;

use dirsort_core::api::{better_directory_sort, custom, sort_entries_with};
use dirsort_core::core::Entity;
use dirsort_core::default_comparator;
use dirsort_core::util::collate::{compare_nullable, lexical_compare, natural_compare_case_sensitive};

#[test]
fn test_default_comparator_natural_numbers() {
    assert_eq!(default_comparator("file2", "file10"), Ordering::Less);
    assert_eq!(default_comparator("file10", "file2"), Ordering::Greater);
    assert_eq!(default_comparator("001", "010"), Ordering::Less);
}

#[test]
fn test_default_comparator_case() {
    assert_eq!(default_comparator("aa", "Aa"), Ordering::Less);
    assert_eq!(default_comparator("Aa", "ab"), Ordering::Less);
    assert_eq!(default_comparator("Readme", "Readme"), Ordering::Equal);
    assert_ne!(default_comparator("a", "A"), Ordering::Equal);
}

#[test]
fn test_default_comparator_composes() {
    let sorter = custom(default_comparator);
    let mut expected: Vec<Entity> = [
        "b.TXT", "b.txt", "a10.md", "a9.md", ".env", "A.tar.gz", "a.tar.gz", "",
    ]
    .iter()
    .map(|name| Entity::file(*name))
    .collect();
    expected.push(Entity::directory("lib"));

    let mut entries = expected.clone();
    sort_entries_with(&mut entries, &sorter);
    expected.sort_by(better_directory_sort);

    assert_eq!(entries, expected);
}

#[test]
fn test_case_sensitive_comparator() {
    assert_eq!(natural_compare_case_sensitive("Ab", "aa"), Ordering::Less);
    assert_eq!(natural_compare_case_sensitive("x2", "x10"), Ordering::Less);
}

#[test]
fn test_lexical_comparator() {
    assert_eq!(lexical_compare("x10", "x2"), Ordering::Less);
}

#[test]
fn test_compare_nullable() {
    assert_eq!(compare_nullable(None, None, default_comparator), Ordering::Equal);
    // Absent segments sort first
    assert_eq!(compare_nullable(None, Some("a"), default_comparator), Ordering::Less);
    assert_eq!(compare_nullable(Some("a"), None, default_comparator), Ordering::Greater);
    assert_eq!(compare_nullable(None, Some(""), default_comparator), Ordering::Less);
    assert_eq!(
        compare_nullable(Some("file2"), Some("file10"), default_comparator),
        Ordering::Less
    );
}

#[test]
fn test_compare_nullable_uses_given_comparator() {
    let reversed = |a: &str, b: &str| b.cmp(a);
    assert_eq!(compare_nullable(Some("a"), Some("b"), reversed), Ordering::Greater);
    // Absence is ordered independently of the comparator
    assert_eq!(compare_nullable(None, Some("b"), reversed), Ordering::Less);
}
