//! Staging storage for one uniform block.
//!
//! [`StagingBuffer`] is the only mutable byte storage in the engine.
//! [`StagingCell`] pairs it with the dirty flag behind interior mutability so
//! that setters can take `&self`. The cell is `!Sync`: one thread of control
//! writes and flushes a block, and callers that share a block across threads
//! must serialize access themselves.

use std::cell::{Cell, RefCell};
use std::ops::Range;

/// Fixed-size, zero-initialized byte region sized by the layout calculator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagingBuffer {
    bytes: Box<[u8]>,
}

impl StagingBuffer {
    pub fn new(size: usize) -> Self {
        Self {
            bytes: vec![0u8; size].into_boxed_slice(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Mutable view of `range`.
    ///
    /// # Panics
    /// Panics if `range` is outside the buffer. Ranges come from descriptors
    /// laid out for this buffer, so this only fires on a broken layout.
    #[inline]
    pub fn span_mut(&mut self, range: Range<usize>) -> &mut [u8] {
        &mut self.bytes[range]
    }
}

/// Interior-mutable staging state: buffer plus dirty flag.
///
/// Starts clean. Every [`write`](Self::write) marks it dirty and bumps the
/// revision; [`mark_clean`](Self::mark_clean) clears the flag only if no write
/// happened since the revision it is given. No borrow of the buffer outlives a
/// method call, so reads and writes can interleave freely.
#[derive(Debug)]
pub struct StagingCell {
    buffer: RefCell<StagingBuffer>,
    dirty: Cell<bool>,
    revision: Cell<u64>,
}

impl StagingCell {
    pub fn new(size: usize) -> Self {
        Self {
            buffer: RefCell::new(StagingBuffer::new(size)),
            dirty: Cell::new(false),
            revision: Cell::new(0),
        }
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    /// Counter bumped by every write and every [`mark_dirty`](Self::mark_dirty).
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision.get()
    }

    #[inline]
    pub fn mark_dirty(&self) {
        self.revision.set(self.revision.get().wrapping_add(1));
        self.dirty.set(true);
    }

    /// Clears the dirty flag if the state is still at `revision`.
    ///
    /// Returns `false` (and stays dirty) when something was written after
    /// `revision` was read.
    #[inline]
    pub fn mark_clean(&self, revision: u64) -> bool {
        if self.revision.get() != revision {
            return false;
        }
        self.dirty.set(false);
        true
    }

    /// Runs `fill` over the bytes of `range` and marks the state dirty.
    ///
    /// Callers validate everything before calling this; `fill` must not fail.
    pub fn write(&self, range: Range<usize>, fill: impl FnOnce(&mut [u8])) {
        fill(self.buffer.borrow_mut().span_mut(range));
        self.mark_dirty();
    }

    /// Copy of the whole buffer.
    pub fn snapshot(&self) -> Vec<u8> {
        self.buffer.borrow().as_bytes().to_vec()
    }

    /// Copy of the bytes in `range`.
    pub fn copy_range(&self, range: Range<usize>) -> Vec<u8> {
        self.buffer.borrow().as_bytes()[range].to_vec()
    }
}
