//! Container error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during dynamic array operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DynArrayError {
    /// A checked access or removal used an index at or past `len`.
    IndexOutOfBounds {
        /// The rejected index.
        index: usize,
        /// Number of live elements at the time of the access.
        len: usize,
    },
    /// The requested slot count cannot be expressed as an allocation
    /// (its byte size overflows `isize`).
    CapacityOverflow {
        /// Slot count that was requested.
        requested: usize,
    },
    /// The global allocator returned null.
    AllocationFailed {
        /// Size of the failed request in bytes.
        bytes: usize,
        /// Alignment of the failed request.
        align: usize,
    },
    /// An [`ArrayConfig`](crate::ArrayConfig) field is out of range.
    InvalidConfig {
        /// Which constraint was violated.
        reason: String,
    },
}

impl fmt::Display for DynArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} is out of bounds (len = {len})")
            }
            Self::CapacityOverflow { requested } => {
                write!(f, "capacity overflow: {requested} slots do not fit in memory")
            }
            Self::AllocationFailed { bytes, align } => {
                write!(f, "allocation of {bytes} bytes (align {align}) failed")
            }
            Self::InvalidConfig { reason } => write!(f, "invalid config: {reason}"),
        }
    }
}

impl Error for DynArrayError {}
