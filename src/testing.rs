// This file is part of inplace-optional.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Instrumented element type for lifecycle tests.
//!
//! Counters are per thread; the test harness runs each test on its own
//! thread, so call [`reset_counts`] at the start of a test and read them with
//! [`counts`].

// Core imports
use core::cell::Cell;

/// Snapshot of lifecycle events observed on [`Tracked`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Counts {
    /// `Tracked::new` calls.
    pub constructed: usize,
    /// `Tracked::default` calls (moved-from values).
    pub defaulted: usize,
    /// `Clone::clone` calls.
    pub cloned: usize,
    /// `Clone::clone_from` calls (assign-through).
    pub clone_assigned: usize,
    /// Drops.
    pub dropped: usize,
}

impl Counts {
    const ZERO: Self = Self {
        constructed: 0,
        defaulted: 0,
        cloned: 0,
        clone_assigned: 0,
        dropped: 0,
    };

    /// Values created minus values dropped.
    pub fn live(&self) -> usize {
        self.constructed + self.defaulted + self.cloned - self.dropped
    }
}

std::thread_local! {
    static COUNTS: Cell<Counts> = const { Cell::new(Counts::ZERO) };
}

fn bump(f: impl FnOnce(&mut Counts)) {
    COUNTS.with(|c| {
        let mut counts = c.get();
        f(&mut counts);
        c.set(counts);
    });
}

pub(crate) fn reset_counts() {
    COUNTS.with(|c| c.set(Counts::ZERO));
}

pub(crate) fn counts() -> Counts {
    COUNTS.with(Cell::get)
}

/// A value that records its construction, cloning and destruction.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct Tracked {
    pub id: i32,
}

impl Tracked {
    pub fn new(id: i32) -> Self {
        bump(|c| c.constructed += 1);
        Self { id }
    }
}

impl Default for Tracked {
    fn default() -> Self {
        bump(|c| c.defaulted += 1);
        Self { id: 0 }
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        bump(|c| c.cloned += 1);
        Self { id: self.id }
    }

    fn clone_from(&mut self, source: &Self) {
        bump(|c| c.clone_assigned += 1);
        self.id = source.id;
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        bump(|c| c.dropped += 1);
    }
}

/// A value that can be moved but not cloned.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct MoveOnly(pub i32);

/// A counted value with a moved-from default and no `Clone` impl.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct CountedMoveOnly {
    pub id: i32,
}

impl CountedMoveOnly {
    pub fn new(id: i32) -> Self {
        bump(|c| c.constructed += 1);
        Self { id }
    }
}

impl Default for CountedMoveOnly {
    fn default() -> Self {
        bump(|c| c.defaulted += 1);
        Self { id: 0 }
    }
}

impl Drop for CountedMoveOnly {
    fn drop(&mut self) {
        bump(|c| c.dropped += 1);
    }
}

/// A value whose clone always panics, for unwind-safety tests.
#[derive(Debug)]
pub(crate) struct PanicOnClone;

impl Clone for PanicOnClone {
    fn clone(&self) -> Self {
        panic!("clone refused");
    }
}
