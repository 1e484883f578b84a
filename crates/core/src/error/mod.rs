/// Centralized error handling for dirsort
pub mod dirsort;

pub use dirsort::{DirsortError, Result};
