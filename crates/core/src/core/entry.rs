use serde::{Deserialize, Serialize};

/// Anything that can be placed in a directory listing
pub trait Entry {
    /// The entry's file name (no path separators), may be empty
    fn name(&self) -> &str;
    /// Whether the entry is a directory
    fn is_directory(&self) -> bool;
}

/// Directory listing entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entity {
    /// The file or directory name
    pub name: String,
    /// True for directories
    #[serde(rename = "isDirectory")]
    pub is_directory: bool,
}

impl Entity {
    /// Create an entry with an explicit directory flag
    pub fn new(name: impl Into<String>, is_directory: bool) -> Self {
        Self {
            name: name.into(),
            is_directory,
        }
    }

    /// Create a file entry
    pub fn file(name: impl Into<String>) -> Self {
        Self::new(name, false)
    }

    /// Create a directory entry
    pub fn directory(name: impl Into<String>) -> Self {
        Self::new(name, true)
    }
}

impl Entry for Entity {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_directory(&self) -> bool {
        self.is_directory
    }
}

impl<S: AsRef<str>> Entry for (S, bool) {
    fn name(&self) -> &str {
        self.0.as_ref()
    }

    fn is_directory(&self) -> bool {
        self.1
    }
}

impl<E: Entry + ?Sized> Entry for &E {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_directory(&self) -> bool {
        (**self).is_directory()
    }
}
