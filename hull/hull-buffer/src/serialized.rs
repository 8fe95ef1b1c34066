//! Flat serialization shapes for slot buffers.

use serde::{Deserialize, Serialize};

use hull_types::HullVertex;

use crate::context::RenderContext;
use crate::record::ObjectRecord;
use crate::slot_buffer::SlotBuffer;

/// One object of a serialized buffer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializedRecord<I> {
    /// The object's addressing key.
    pub identifier: I,
    /// The slot the object occupied, preserved across reload.
    pub slot: usize,
    /// Index data, offset to the slot's vertex base.
    pub indices: Vec<u32>,
    /// Vertex data.
    pub vertices: Vec<HullVertex>,
    /// Visibility flag.
    pub enabled: bool,
}

/// The flat, persistable form of a [`SlotBuffer`].
///
/// Reloading a serialized buffer restores every record at its original
/// slot offset, so identifiers stay addressable in the same positions:
/// external systems that captured slot-based references before a save
/// find them valid after the load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializedSlotBuffer<I> {
    /// Capacity of the buffer.
    pub max_objects: usize,
    /// Primitives per object.
    pub primitives_per_object: usize,
    /// Vertices per object.
    pub vertices_per_object: usize,
    /// Indices per object.
    pub indices_per_object: usize,
    /// Every stored object, insertion order preserved.
    pub records: Vec<SerializedRecord<I>>,
}

impl<I: PartialEq + Clone> SlotBuffer<I> {
    /// Extract the buffer's full record set into its flat form.
    #[must_use]
    pub fn to_serialized(&self) -> SerializedSlotBuffer<I> {
        SerializedSlotBuffer {
            max_objects: self.max_objects(),
            primitives_per_object: self.primitives_per_object(),
            vertices_per_object: self.vertices_per_object(),
            indices_per_object: self.indices_per_object(),
            records: self
                .records()
                .iter()
                .map(|r| SerializedRecord {
                    identifier: r.identifier.clone(),
                    slot: r.slot,
                    indices: r.indices.clone(),
                    vertices: r.vertices.clone(),
                    enabled: r.enabled,
                })
                .collect(),
        }
    }

    /// Rebuild a buffer from its flat form.
    ///
    /// Records land at their recorded slots; disabled objects come back
    /// with zeroed live indices and their restore data intact.
    ///
    /// # Panics
    ///
    /// Panics (debug builds) if a record's slot is out of range or
    /// doubly occupied (a corrupted save, not a runtime condition).
    #[must_use]
    pub fn from_serialized(ctx: &RenderContext, serialized: &SerializedSlotBuffer<I>) -> Self {
        let mut buffer = Self::new(
            ctx,
            serialized.max_objects,
            serialized.primitives_per_object,
            serialized.vertices_per_object,
            serialized.indices_per_object,
        );
        buffer.set_manual_update(true);

        for record in &serialized.records {
            buffer.restore_record(record);
        }

        buffer.commit();
        buffer.set_manual_update(false);
        buffer
    }

    fn restore_record(&mut self, record: &SerializedRecord<I>) {
        debug_assert!(record.slot < self.max_objects());
        debug_assert!(!self.slot_occupied_at(record.slot));

        let ipo = self.indices_per_object();
        let vpo = self.vertices_per_object();

        self.occupy_slot(record.slot);
        self.write_vertices(record.slot * vpo, &record.vertices);
        if record.enabled {
            self.write_indices(record.slot * ipo, &record.indices);
        }
        self.push_record(ObjectRecord {
            identifier: record.identifier.clone(),
            slot: record.slot,
            indices: record.indices.clone(),
            vertices: record.vertices.clone(),
            enabled: record.enabled,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hull_types::{Point3, Vector2, Vector3};

    fn tri(x: f64) -> [HullVertex; 3] {
        [
            HullVertex::new(Point3::new(x, 0.0, 0.0), Vector3::y(), Vector2::zeros()),
            HullVertex::new(
                Point3::new(x + 1.0, 0.0, 0.0),
                Vector3::y(),
                Vector2::zeros(),
            ),
            HullVertex::new(
                Point3::new(x, 1.0, 0.0),
                Vector3::y(),
                Vector2::new(1.0, 1.0),
            ),
        ]
    }

    #[test]
    fn round_trip_preserves_offsets_and_flags() {
        let ctx = RenderContext::new();
        let mut buffer: SlotBuffer<u32> = SlotBuffer::new(&ctx, 8, 1, 3, 3);

        for id in 0..5 {
            buffer.add(id, &[0, 1, 2], &tri(f64::from(id)));
        }
        // Punch a hole so slots are not contiguous with insertion order.
        buffer.remove(&1);
        buffer.add(10, &[0, 1, 2], &tri(10.0));
        buffer.disable(&3);
        buffer.disable(&4);

        let serialized = buffer.to_serialized();
        let restored = SlotBuffer::from_serialized(&ctx, &serialized);

        assert_eq!(restored.object_count(), buffer.object_count());
        for (a, b) in buffer.records().iter().zip(restored.records()) {
            assert_eq!(a.identifier, b.identifier);
            assert_eq!(a.slot, b.slot);
            assert_eq!(a.enabled, b.enabled);
            assert_eq!(a.indices, b.indices);
        }
        // The live index arrays agree entry for entry.
        assert_eq!(restored.raw_indices(), buffer.raw_indices());
    }

    #[test]
    fn disabled_objects_restore_disabled() {
        let ctx = RenderContext::new();
        let mut buffer: SlotBuffer<u32> = SlotBuffer::new(&ctx, 2, 1, 3, 3);
        buffer.add(1, &[0, 1, 2], &tri(0.0));
        buffer.disable(&1);

        let restored = SlotBuffer::from_serialized(&ctx, &buffer.to_serialized());
        assert_eq!(restored.is_enabled(&1), Some(false));
        assert_eq!(&restored.raw_indices()[0..3], &[0, 0, 0]);

        // Re-enabling still works from the record's restore data.
        let mut restored = restored;
        assert!(restored.enable(&1));
        assert_eq!(&restored.raw_indices()[0..3], &[0, 1, 2]);
    }

    #[test]
    fn json_round_trip() {
        let ctx = RenderContext::new();
        let mut buffer: SlotBuffer<u32> = SlotBuffer::new(&ctx, 2, 1, 3, 3);
        buffer.add(42, &[0, 2, 1], &tri(3.0));

        let json = serde_json::to_string(&buffer.to_serialized()).unwrap();
        let parsed: SerializedSlotBuffer<u32> = serde_json::from_str(&json).unwrap();
        let restored = SlotBuffer::from_serialized(&ctx, &parsed);

        assert!(restored.contains(&42));
        assert_eq!(restored.records()[0].vertices[2].uv.x, 1.0);
    }
}
