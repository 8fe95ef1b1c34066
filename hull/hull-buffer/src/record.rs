//! Per-object records of a slot buffer.

use hull_types::HullVertex;

/// One object's bookkeeping inside a [`SlotBuffer`].
///
/// The record keeps its own copy of the slot's index and vertex data so an
/// object can be re-enabled (indices restored) after being disabled
/// (indices zeroed in the flat array).
///
/// Invariant: every record of one buffer has `indices` and `vertices` of
/// the buffer's uniform per-object lengths, and `slot` is unique within
/// `[0, max_objects)`.
///
/// [`SlotBuffer`]: crate::SlotBuffer
#[derive(Debug, Clone)]
pub struct ObjectRecord<I> {
    /// The object's addressing key.
    pub identifier: I,
    /// The slot this object occupies.
    pub slot: usize,
    /// Index data, already offset to the slot's vertex base.
    pub indices: Vec<u32>,
    /// Vertex data.
    pub vertices: Vec<HullVertex>,
    /// Whether the object is currently visible.
    pub enabled: bool,
}

impl<I> ObjectRecord<I> {
    /// Create an enabled record.
    #[must_use]
    pub fn new(identifier: I, slot: usize, indices: Vec<u32>, vertices: Vec<HullVertex>) -> Self {
        Self {
            identifier,
            slot,
            indices,
            vertices,
            enabled: true,
        }
    }
}
