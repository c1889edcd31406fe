//! Test utilities and fixture types for dynarr development.
//!
//! Provides [`DropTally`] / [`Tracked`] for asserting exactly when the
//! container drops its elements, and sequence builders in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::cell::Cell;
use std::rc::Rc;

/// Shared counter of how many [`Tracked`] values have been dropped.
///
/// Clone the tally freely; every clone observes the same count.
#[derive(Clone, Debug, Default)]
pub struct DropTally {
    drops: Rc<Cell<usize>>,
}

impl DropTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an element whose drop is recorded by this tally.
    pub fn track(&self, id: u32) -> Tracked {
        Tracked {
            id,
            drops: Rc::clone(&self.drops),
        }
    }

    /// Drops observed so far.
    pub fn count(&self) -> usize {
        self.drops.get()
    }
}

/// An element that bumps its [`DropTally`] when dropped.
#[derive(Debug)]
pub struct Tracked {
    pub id: u32,
    drops: Rc<Cell<usize>>,
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}
