//! Collection Extensions
//!
//! In-place helpers over mutable collections: removing every occurrence of a
//! set of values with a strategy picked from the shape of the inputs, and
//! adding a value only when one is present.

pub mod collections;
pub mod equality_comparer;
pub mod error;
pub mod options;

// Re-export commonly used types
pub use collections::{
    add_if_present, remove_all, remove_all_by, BulkRemover, CollectionExtensions, Removal,
    RemovalReport, RemovalStrategy, RemovalTarget,
};
pub use equality_comparer::{EqualityComparer, FnEquality, KeyEquality, NaturalEquality};
pub use error::{ExtensionError, ExtensionResult};
pub use options::RemovalOptions;
