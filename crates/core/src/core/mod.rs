pub mod entry;
pub mod name;
pub mod sorter;

pub use entry::{Entity, Entry};
pub use name::NamePartition;
pub use sorter::EntrySorter;
