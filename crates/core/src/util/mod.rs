pub mod collate;

pub use collate::{
    compare_nullable, lexical_compare, natural_compare, natural_compare_case_sensitive,
};
