//! The bounded per-frame render list
//!
//! A [`RenderList`] collects the frame's draw records in append order and
//! hands them to the forward pass exactly once. Two historical layouts (a
//! fixed-capacity slot array and an unbounded ordered sequence) are
//! unified here as dynamic storage with a hard capacity: appends past the
//! bound fail loudly, and the per-frame reset clears the storage so stale
//! entries can never be observed.
//!
//! ## Phase discipline
//!
//! The list is a single-writer-then-single-reader resource per frame:
//! only the update pass appends, only the subsequent submission pass
//! reads, and the two phases never interleave. With that discipline
//! enforced by the frame loop no locking is needed. A future parallel
//! update pass would replace [`RenderList::append`] with an atomic bounded
//! push and relax the append-order guarantee to arrival order.

use crate::render::entry::RenderEntry;
use crate::render::{RenderError, RenderResult};

/// Default render list capacity
///
/// Bounds worst-case per-frame memory for the entry storage; the
/// historical fixed-array layout used the same figure.
pub const FORWARD_LIST_CAPACITY: usize = 65_535;

/// Bounded append-only sequence of render entries
#[derive(Debug)]
pub struct RenderList {
    entries: Vec<RenderEntry>,
    capacity: usize,
}

impl Default for RenderList {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderList {
    /// Create a list with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(FORWARD_LIST_CAPACITY)
    }

    /// Create a list with an explicit capacity
    ///
    /// Storage grows on demand up to the bound; the full capacity is never
    /// preallocated.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Append an entry, returning its slot index
    ///
    /// Fails with [`RenderError::ListFull`] once `len == capacity`. The
    /// caller drops the entry and logs; nothing is overwritten.
    pub fn append(&mut self, entry: RenderEntry) -> RenderResult<usize> {
        if self.entries.len() >= self.capacity {
            return Err(RenderError::ListFull {
                capacity: self.capacity,
            });
        }
        self.entries.push(entry);
        Ok(self.entries.len() - 1)
    }

    /// The live entries in append order
    pub fn entries(&self) -> &[RenderEntry] {
        &self.entries
    }

    /// Iterate entries in append order, read-only
    pub fn iter(&self) -> std::slice::Iter<'_, RenderEntry> {
        self.entries.iter()
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The fixed capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Truncate the list to zero at the frame boundary
    ///
    /// Called exactly once between submission and the next frame's first
    /// append. Idempotent: a second reset is a no-op. Dropping the entries
    /// releases their owned uniform buffers.
    pub fn reset(&mut self) {
        self.entries.clear();
    }
}
