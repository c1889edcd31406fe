//! Owned heap buffer underneath [`DynArray`](crate::DynArray).
//!
//! [`RawBuf`] tracks a pointer and a slot count and nothing else: it never
//! reads, writes or drops elements. Keeping allocation bookkeeping here
//! means the layout arithmetic and allocator calls are audited in one place.
//!
//! Zero-sized element types never reach the allocator. Their capacity is
//! still tracked and doubled so the growth schedule is the same for every `T`.

#![allow(unsafe_code)]

use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

use crate::error::DynArrayError;

/// A heap allocation of `cap` uninitialised slots of `T`.
pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
    _owns: PhantomData<T>,
}

// SAFETY: RawBuf uniquely owns its allocation; moving it between threads is
// sound whenever moving the elements is.
unsafe impl<T: Send> Send for RawBuf<T> {}
// SAFETY: shared access only ever yields `&T`.
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> RawBuf<T> {
    const IS_ZST: bool = mem::size_of::<T>() == 0;

    /// A buffer with no allocation and zero capacity.
    pub(crate) const fn empty() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            _owns: PhantomData,
        }
    }

    /// Allocate exactly `cap` slots.
    pub(crate) fn try_with_capacity(cap: usize) -> Result<Self, DynArrayError> {
        let mut buf = Self::empty();
        if cap == 0 {
            return Ok(buf);
        }
        if Self::IS_ZST {
            buf.cap = cap;
            return Ok(buf);
        }
        let layout = layout_for::<T>(cap)?;
        // SAFETY: `layout` has non-zero size (cap >= 1 and T is not zero-sized).
        let raw = unsafe { alloc::alloc(layout) };
        buf.ptr = NonNull::new(raw.cast::<T>()).ok_or_else(|| alloc_failed(layout))?;
        buf.cap = cap;
        Ok(buf)
    }

    /// Grow to the next capacity in the doubling schedule: `0 -> 1`, then
    /// `cap -> 2 * cap`.
    ///
    /// Slot contents are preserved byte-for-byte. On error the buffer is
    /// left exactly as it was.
    pub(crate) fn try_grow(&mut self) -> Result<(), DynArrayError> {
        let old_cap = self.cap;
        let new_cap = if old_cap == 0 {
            1
        } else {
            old_cap
                .checked_mul(2)
                .ok_or(DynArrayError::CapacityOverflow {
                    requested: usize::MAX,
                })?
        };

        if !Self::IS_ZST {
            let new_layout = layout_for::<T>(new_cap)?;
            let raw = if old_cap == 0 {
                // SAFETY: `new_layout` has non-zero size.
                unsafe { alloc::alloc(new_layout) }
            } else {
                let old_layout = layout_for::<T>(old_cap)?;
                // SAFETY: `ptr` came from the global allocator with `old_layout`
                // and is still live (old_cap > 0). The new size is non-zero and
                // was validated by `Layout::array`, so it does not overflow isize.
                unsafe { alloc::realloc(self.ptr.as_ptr().cast::<u8>(), old_layout, new_layout.size()) }
            };
            // A null realloc leaves the old block valid and `self.ptr` untouched.
            self.ptr = NonNull::new(raw.cast::<T>()).ok_or_else(|| alloc_failed(new_layout))?;
        }

        tracing::trace!(
            old_cap,
            new_cap,
            elem_size = mem::size_of::<T>(),
            "dynamic array buffer grew"
        );
        self.cap = new_cap;
        Ok(())
    }

    /// Return the allocation to the allocator and reset to [`RawBuf::empty`].
    ///
    /// Returns `false` if there was nothing to release, so a second call
    /// is a no-op.
    pub(crate) fn release(&mut self) -> bool {
        if self.cap == 0 {
            return false;
        }
        if !Self::IS_ZST {
            if let Ok(layout) = Layout::array::<T>(self.cap) {
                // SAFETY: `ptr` was allocated with exactly this layout and has
                // not been freed; `cap` is zeroed below so this runs once.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast::<u8>(), layout) };
            }
        }
        self.ptr = NonNull::dangling();
        self.cap = 0;
        true
    }

    /// Base pointer. Dangling (but aligned and non-null) when `cap == 0`.
    #[inline]
    pub(crate) fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Number of allocated slots.
    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        self.release();
    }
}

fn layout_for<T>(cap: usize) -> Result<Layout, DynArrayError> {
    Layout::array::<T>(cap).map_err(|_| DynArrayError::CapacityOverflow { requested: cap })
}

fn alloc_failed(layout: Layout) -> DynArrayError {
    DynArrayError::AllocationFailed {
        bytes: layout.size(),
        align: layout.align(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_has_no_capacity() {
        let buf = RawBuf::<u32>::empty();
        assert_eq!(buf.capacity(), 0);
        assert!(!buf.ptr().is_null());
    }

    #[test]
    fn grow_follows_doubling_schedule() {
        let mut buf = RawBuf::<u64>::empty();
        let mut seen = Vec::new();
        for _ in 0..5 {
            buf.try_grow().unwrap();
            seen.push(buf.capacity());
        }
        assert_eq!(seen, vec![1, 2, 4, 8, 16]);
    }

    #[test]
    fn grow_preserves_slot_contents() {
        let mut buf = RawBuf::<u32>::try_with_capacity(2).unwrap();
        unsafe {
            buf.ptr().write(11);
            buf.ptr().add(1).write(22);
        }
        buf.try_grow().unwrap();
        assert_eq!(buf.capacity(), 4);
        unsafe {
            assert_eq!(buf.ptr().read(), 11);
            assert_eq!(buf.ptr().add(1).read(), 22);
        }
    }

    #[test]
    fn release_is_idempotent() {
        let mut buf = RawBuf::<u8>::try_with_capacity(8).unwrap();
        assert!(buf.release());
        assert!(!buf.release());
        assert_eq!(buf.capacity(), 0);
    }

    #[test]
    fn zero_sized_types_track_capacity_without_allocating() {
        let mut buf = RawBuf::<()>::try_with_capacity(1).unwrap();
        buf.try_grow().unwrap();
        buf.try_grow().unwrap();
        assert_eq!(buf.capacity(), 4);
        assert_eq!(buf.ptr(), NonNull::<()>::dangling().as_ptr());
    }

    #[test]
    fn oversized_request_is_capacity_overflow() {
        let result = RawBuf::<u64>::try_with_capacity(usize::MAX / 4);
        assert!(matches!(
            result,
            Err(DynArrayError::CapacityOverflow { .. })
        ));
    }
}
