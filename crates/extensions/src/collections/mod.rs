//! Collection helpers: adaptive bulk removal and conditional insertion.

mod bulk_remover;
mod collection_extensions;
mod hash_set_extensions;
mod lookup;
mod removal;
mod target;

pub use bulk_remover::{BulkRemover, RemovalReport, RemovalStrategy};
pub use collection_extensions::{add_if_present, remove_all, remove_all_by, CollectionExtensions};
pub use removal::{LookupSet, Removal};
pub use target::{NaturalRemove, RemovalTarget, RetainValues};
