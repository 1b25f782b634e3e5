#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// Error type shared by the fallible table operations.
pub mod error;

/// A HashMap implementation using open addressing with double hashing.
///
/// This module provides a `HashMap` that wraps the `HashTable` and provides
/// a standard key-value map interface with configurable hashers.
pub mod hash_map;

pub mod hash_table;

/// The raw-storage capability backing the slot store.
pub mod raw_alloc;

pub use error::Error;
pub use hash_map::Entry;
pub use hash_map::HashMap;
pub use hash_table::HashTable;
pub use raw_alloc::Global;
pub use raw_alloc::RawAlloc;
pub use raw_alloc::Tagged;

cfg_if::cfg_if! {
    if #[cfg(feature = "foldhash")] {
        /// The default hash builder used by [`HashMap`] when none is supplied.
        pub type DefaultHashBuilder = foldhash::fast::RandomState;
    } else {
        /// Placeholder for the default hash builder.
        ///
        /// Without the `foldhash` feature there is no default hasher; maps
        /// must be constructed with an explicit builder via `with_hasher`.
        pub enum DefaultHashBuilder {}
    }
}
