//! A lock-free interior-mutable slot holding an optional same-kind id.
//!
//! [`World`](super::World) is shared (`&World`, never `&mut World`) across the
//! bounded worker pool during a ranking pass (§5): every worker reads
//! `match_cell()`s to decide what's already spoken for, and nothing writes
//! until the pass's single-threaded commit phase. A plain `Cell` cannot cross
//! that boundary (`Cell<T>` is never `Sync`, so a type containing one can't be
//! shared between threads at all); an atomic slot can be, and needs no
//! locking because the single-writer/many-reader split in time, not the
//! ordering of the store, is what the engine actually relies on.

use std::fmt;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU32, Ordering};

const NONE: u32 = u32::MAX;

/// Converts an arena id to and from its raw index, with `u32::MAX` reserved
/// to represent "no match".
pub(crate) trait RawId: Copy {
    fn to_raw(self) -> u32;
    fn from_raw(raw: u32) -> Self;
}

/// An `Option<T>` stored behind an [`AtomicU32`], for a `T` addressable by a
/// `u32` index (see [`RawId`]).
pub struct MatchCell<T> {
    slot: AtomicU32,
    _marker: PhantomData<T>,
}

impl<T: RawId> MatchCell<T> {
    /// A slot starting out unmatched, or matched to `initial`.
    pub(crate) fn new(initial: Option<T>) -> Self {
        Self {
            slot: AtomicU32::new(initial.map_or(NONE, RawId::to_raw)),
            _marker: PhantomData,
        }
    }

    /// The symbol currently matched to this one, if any.
    #[must_use]
    pub fn get(&self) -> Option<T> {
        match self.slot.load(Ordering::Relaxed) {
            NONE => None,
            raw => Some(T::from_raw(raw)),
        }
    }

    /// Sets (or clears) the match.
    pub fn set(&self, value: Option<T>) {
        self.slot.store(value.map_or(NONE, RawId::to_raw), Ordering::Relaxed);
    }
}

impl<T: RawId + fmt::Debug> fmt::Debug for MatchCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MatchCell").field(&self.get()).finish()
    }
}
