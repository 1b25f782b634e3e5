use core::fmt;

use crate::raw_alloc::AllocError;

/// Errors reported by the fallible [`HashMap`] and [`HashTable`] operations.
///
/// No operation retries internally; every failure propagates to the
/// immediate caller with the table left in its prior valid state.
///
/// [`HashMap`]: crate::HashMap
/// [`HashTable`]: crate::HashTable
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// The requested key is not present in the table.
    KeyNotFound,
    /// A maximum load factor outside the open interval (0, 1) was rejected.
    InvalidLoadFactor(f32),
    /// The allocator failed to provide storage for a rebuild.
    AllocFailed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::KeyNotFound => f.write_str("key not present in table"),
            Error::InvalidLoadFactor(z) => {
                write!(f, "max load factor {z} outside the open interval (0, 1)")
            }
            Error::AllocFailed => f.write_str("allocator failed to provide storage"),
        }
    }
}

impl From<AllocError> for Error {
    fn from(_: AllocError) -> Self {
        Error::AllocFailed
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
