//! Human-friendly ordering for directory listings
//!
//! Directories come before files, dotfiles before other names, and dotted
//! names are compared part by part using natural, case-insensitive rules.
//!
//! ```
//! use dirsort_core::api::sort_entries;
//! use dirsort_core::core::Entity;
//!
//! let mut entries = vec![
//!     Entity::file("file10.txt"),
//!     Entity::file("file2.txt"),
//!     Entity::file(".env"),
//!     Entity::directory("src"),
//! ];
//! sort_entries(&mut entries);
//!
//! let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
//! assert_eq!(names, ["src", ".env", "file2.txt", "file10.txt"]);
//! ```

pub mod api;
pub mod config;
pub mod core;
pub mod error;
pub mod util;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use api::{better_directory_sort, custom, default_comparator};
pub use config::{ComparatorKind, SortConfig, SortOptions};
pub use crate::core::{Entity, Entry, EntrySorter};
pub use error::{DirsortError, Result};
