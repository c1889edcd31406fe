//! The growable contiguous container.
//!
//! [`DynArray`] pairs a [`RawBuf`] with a live-element count. Slots
//! `[0, len)` hold initialised values; slots `[len, cap)` are uninitialised.
//! Capacity starts at one slot and doubles whenever an append finds the
//! buffer full. It never shrinks until [`DynArray::free`] or drop.
//!
//! # Access tiers
//!
//! - **Recoverable:** [`get`](DynArray::get), [`set`](DynArray::set) and
//!   [`remove`](DynArray::remove) return [`DynArrayError`] on a bad index.
//! - **Fail-fast:** [`at`](DynArray::at) and `array[i]` stop the program per
//!   the array's [`FatalMode`].
//! - **Unchecked:** the `unsafe fn *_unchecked` family skips the bound check
//!   entirely; the caller upholds `index < len`.
//!
//! The container has no internal synchronisation. Mutation goes through
//! `&mut self`, so concurrent use needs an external lock.

#![allow(unsafe_code)]

use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};
use std::ptr;
use std::slice;

use crate::config::{ArrayConfig, FatalMode};
use crate::error::DynArrayError;
use crate::fatal;
use crate::raw::RawBuf;

/// A growable, contiguous, heap-allocated array of `T`.
///
/// Elements are stored inline with no boxing; every instantiation is a
/// separate monomorphised type.
pub struct DynArray<T> {
    buf: RawBuf<T>,
    len: usize,
    fatal_mode: FatalMode,
}

impl<T> DynArray<T> {
    /// Create an empty array with one allocated slot.
    ///
    /// Allocation failure aborts the process.
    pub fn new() -> Self {
        match Self::try_new() {
            Ok(array) => array,
            Err(err) => fatal::fail_alloc(err, FatalMode::Panic),
        }
    }

    /// Create an empty array with one allocated slot, reporting allocation
    /// failure instead of aborting.
    pub fn try_new() -> Result<Self, DynArrayError> {
        Self::with_config(ArrayConfig::default())
    }

    /// Create an empty array from an explicit configuration.
    pub fn with_config(config: ArrayConfig) -> Result<Self, DynArrayError> {
        config.validate()?;
        Ok(Self {
            buf: RawBuf::try_with_capacity(config.initial_capacity)?,
            len: 0,
            fatal_mode: config.fatal_mode,
        })
    }

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether there are no live elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots. Zero only after [`free`](Self::free).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// The fail-fast behaviour this array was configured with.
    pub fn fatal_mode(&self) -> FatalMode {
        self.fatal_mode
    }

    /// Append `value` at index `len`.
    ///
    /// If the buffer is full its capacity doubles first, which may move
    /// the buffer and invalidates any raw pointer from [`as_ptr`](Self::as_ptr).
    /// Amortised O(1).
    pub fn push(&mut self, value: T) {
        if self.len == self.buf.capacity() {
            if let Err(err) = self.buf.try_grow() {
                fatal::fail_alloc(err, self.fatal_mode);
            }
        }
        self.write_tail(value);
    }

    /// Append `value`, returning an error instead of aborting if the buffer
    /// cannot grow. On error `value` is dropped and the array is unchanged.
    pub fn try_push(&mut self, value: T) -> Result<(), DynArrayError> {
        if self.len == self.buf.capacity() {
            self.buf.try_grow()?;
        }
        self.write_tail(value);
        Ok(())
    }

    fn write_tail(&mut self, value: T) {
        debug_assert!(self.len < self.buf.capacity());
        // SAFETY: the caller grew the buffer so `len < cap`; slot `len` is
        // uninitialised, so nothing is overwritten without being dropped.
        unsafe { self.buf.ptr().add(self.len).write(value) };
        self.len += 1;
    }

    /// Bounds-checked shared access.
    pub fn get(&self, index: usize) -> Result<&T, DynArrayError> {
        let len = self.len;
        self.as_slice()
            .get(index)
            .ok_or(DynArrayError::IndexOutOfBounds { index, len })
    }

    /// Bounds-checked exclusive access.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, DynArrayError> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(DynArrayError::IndexOutOfBounds { index, len })
    }

    /// Bounds-checked write. Returns the element that was replaced.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, DynArrayError> {
        let slot = self.get_mut(index)?;
        Ok(mem::replace(slot, value))
    }

    /// Fail-fast shared access.
    ///
    /// # Panics
    ///
    /// If `index >= len`, reports the index and length and then panics or
    /// exits per [`fatal_mode`](Self::fatal_mode).
    #[track_caller]
    pub fn at(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => fatal::fail(err, self.fatal_mode),
        }
    }

    /// Fail-fast exclusive access. See [`at`](Self::at).
    #[track_caller]
    pub fn at_mut(&mut self, index: usize) -> &mut T {
        let mode = self.fatal_mode;
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => fatal::fail(err, mode),
        }
    }

    /// Shared access without a bound check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len).
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len);
        // SAFETY: caller guarantees `index < len`, so the slot is initialised.
        unsafe { &*self.buf.ptr().add(index) }
    }

    /// Exclusive access without a bound check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len).
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len);
        // SAFETY: caller guarantees `index < len`, so the slot is initialised.
        unsafe { &mut *self.buf.ptr().add(index) }
    }

    /// Overwrite the element at `index` without a bound check. The previous
    /// value is dropped.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len).
    #[inline]
    pub unsafe fn set_unchecked(&mut self, index: usize, value: T) {
        debug_assert!(index < self.len);
        // SAFETY: caller guarantees `index < len`; assignment drops the
        // initialised value already in the slot.
        unsafe { *self.buf.ptr().add(index) = value };
    }

    /// Drop every live element and set `len` to zero. Capacity is kept.
    pub fn clear(&mut self) {
        let live: *mut [T] = self.as_mut_slice();
        // Zero first so a panicking destructor cannot lead to a double drop.
        self.len = 0;
        // SAFETY: `live` covers exactly the formerly initialised prefix, and
        // nothing can observe those slots now that `len == 0`.
        unsafe { ptr::drop_in_place(live) };
    }

    /// Remove and return the element at `index`, shifting every later
    /// element one slot toward the front. O(len - index).
    pub fn remove(&mut self, index: usize) -> Result<T, DynArrayError> {
        if index >= self.len {
            return Err(DynArrayError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        // SAFETY: bound checked above.
        Ok(unsafe { self.remove_unchecked(index) })
    }

    /// [`remove`](Self::remove) without a bound check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len).
    pub unsafe fn remove_unchecked(&mut self, index: usize) -> T {
        debug_assert!(index < self.len);
        let tail = self.len - index - 1;
        // SAFETY: caller guarantees `index < len`. The value is read out of
        // the slot, then the `tail` initialised slots after it are moved down
        // one place (overlapping copy), leaving `[len - 1, cap)` logically
        // uninitialised once `len` is decremented.
        unsafe {
            let hole = self.buf.ptr().add(index);
            let value = hole.read();
            ptr::copy(hole.add(1), hole, tail);
            self.len -= 1;
            value
        }
    }

    /// Drop every element and return the buffer to the allocator.
    ///
    /// Afterwards `len == 0` and `capacity == 0`. Calling it again is a
    /// no-op. A later [`push`](Self::push) allocates a fresh one-slot buffer.
    pub fn free(&mut self) {
        self.clear();
        let cap = self.buf.capacity();
        if self.buf.release() {
            tracing::debug!(cap, "dynamic array buffer released");
        }
    }

    /// The live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the pointer is non-null and aligned even when dangling,
        // and `[0, len)` is initialised.
        unsafe { slice::from_raw_parts(self.buf.ptr(), self.len) }
    }

    /// The live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as for `as_slice`; `&mut self` makes the borrow unique.
        unsafe { slice::from_raw_parts_mut(self.buf.ptr(), self.len) }
    }

    /// Base pointer of the buffer. Invalidated by any growth.
    pub fn as_ptr(&self) -> *const T {
        self.buf.ptr()
    }

    /// Mutable base pointer of the buffer. Invalidated by any growth.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.ptr()
    }

    /// `(pointer, len, capacity)` for handing the buffer to C-style APIs.
    pub fn raw_parts(&self) -> (*const T, usize, usize) {
        (self.as_ptr(), self.len, self.capacity())
    }
}

impl<T> Drop for DynArray<T> {
    fn drop(&mut self) {
        self.free();
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynArray<T> {
    /// Clones keep the source's capacity, so they follow the same growth
    /// schedule from here on.
    fn clone(&self) -> Self {
        let config = ArrayConfig::new()
            .with_initial_capacity(self.capacity().max(1))
            .with_fatal_mode(self.fatal_mode);
        let mut out = match Self::with_config(config) {
            Ok(array) => array,
            Err(err) => fatal::fail_alloc(err, self.fatal_mode),
        };
        for item in self.as_slice() {
            out.push(item.clone());
        }
        out
    }
}

impl<T: fmt::Debug> fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: PartialEq> PartialEq for DynArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynArray<T> {}

impl<T> Index<usize> for DynArray<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        self.at(index)
    }
}

impl<T> IndexMut<usize> for DynArray<T> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.at_mut(index)
    }
}
