//! A growable contiguous array with doubling growth.
//!
//! [`DynArray<T>`] owns a single heap buffer of `T`, a live length and an
//! allocated capacity. Appends are amortised O(1): when the buffer is full
//! its capacity doubles, starting from one slot. Removal shifts later
//! elements left so order is preserved.
//!
//! # Architecture
//!
//! ```text
//! DynArray<T> (len, fatal mode, access tiers)
//! └── RawBuf<T> (pointer + capacity; alloc / realloc / dealloc only)
//! ```
//!
//! Only `raw` and `array` contain `unsafe` code; every block carries a
//! `// SAFETY:` comment.
//!
//! # Failure policy
//!
//! - Checked operations (`get`, `set`, `remove`, `try_*`) return
//!   [`DynArrayError`].
//! - Fail-fast operations (`at`, indexing, `new`, `push`) report through
//!   [`fatal`] and then panic or exit per [`FatalMode`].
//! - A null return from the allocator on a fail-fast path aborts via
//!   [`std::alloc::handle_alloc_error`].
//!
//! # Example
//!
//! ```
//! use dynarr::DynArray;
//!
//! let mut a = DynArray::new();
//! for i in 0..5 {
//!     a.push(i);
//! }
//! assert_eq!((a.len(), a.capacity()), (5, 8));
//! assert_eq!(a.remove(0), Ok(0));
//! assert_eq!(a.as_slice(), &[1, 2, 3, 4]);
//! a.clear();
//! assert_eq!((a.len(), a.capacity()), (0, 8));
//! a.free();
//! assert_eq!((a.len(), a.capacity()), (0, 0));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

mod array;
pub mod config;
pub mod error;
pub mod fatal;
mod macros;
mod raw;

// Public re-exports for the primary API surface.
pub use array::DynArray;
pub use config::{ArrayConfig, FatalMode};
pub use error::DynArrayError;
