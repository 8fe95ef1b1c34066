//! The fixed-capacity addressable geometry buffer.

use hull_types::HullVertex;

use crate::context::{BufferBinding, RenderContext};
use crate::record::ObjectRecord;

/// How the renderer should cull this buffer's faces.
///
/// Deck-visibility tooling hides the hull above the selected deck by
/// switching the wall buffers to interior culling, so the camera sees
/// through the near wall from above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FaceCulling {
    /// Draw both faces.
    #[default]
    Disabled,
    /// Cull the outward faces, leaving the interior visible.
    Interior,
}

/// A fixed-capacity container mapping identifiers to slots of geometry.
///
/// All objects in one buffer share the same vertices-per-object and
/// indices-per-object counts. Slots are allocated first-fit and densely
/// packed into `[0, max_objects)`; an object's indices are stored offset
/// by its slot's vertex base so the whole buffer draws as one range.
///
/// Identifier lookup is a linear scan: the key type only needs value
/// equality, which lets tolerance-compared keys (like panel identifiers)
/// address objects without a hash.
///
/// Mutations stage an asynchronous upload through the buffer's
/// [`RenderContext`] unless manual-update mode is on; bulk construction
/// turns manual mode on, mutates, then calls [`SlotBuffer::commit`] once.
///
/// # Example
///
/// ```
/// use hull_buffer::{RenderContext, SlotBuffer};
/// use hull_types::HullVertex;
///
/// let ctx = RenderContext::new();
/// let mut buffer: SlotBuffer<&str> = SlotBuffer::new(&ctx, 2, 1, 3, 3);
/// buffer.add("bow", &[0, 1, 2], &[HullVertex::default(); 3]);
///
/// assert_eq!(buffer.active_objects(), 1);
/// assert!(!buffer.contains(&"stern"));
/// ```
#[derive(Debug)]
pub struct SlotBuffer<I> {
    max_objects: usize,
    primitives_per_object: usize,
    vertices_per_object: usize,
    indices_per_object: usize,

    indices: Vec<u32>,
    vertices: Vec<HullVertex>,
    slot_occupied: Vec<bool>,
    records: Vec<ObjectRecord<I>>,

    visible: bool,
    culling: FaceCulling,
    manual_update: bool,

    ctx: RenderContext,
    binding: BufferBinding,
}

impl<I: PartialEq + Clone> SlotBuffer<I> {
    /// Create an empty buffer registered with the render context.
    #[must_use]
    pub fn new(
        ctx: &RenderContext,
        max_objects: usize,
        primitives_per_object: usize,
        vertices_per_object: usize,
        indices_per_object: usize,
    ) -> Self {
        Self {
            max_objects,
            primitives_per_object,
            vertices_per_object,
            indices_per_object,
            indices: vec![0; max_objects * indices_per_object],
            vertices: vec![HullVertex::default(); max_objects * vertices_per_object],
            slot_occupied: vec![false; max_objects],
            records: Vec::with_capacity(max_objects),
            visible: true,
            culling: FaceCulling::Disabled,
            manual_update: false,
            ctx: ctx.clone(),
            binding: ctx.register(),
        }
    }

    /// Maximum number of objects this buffer can hold.
    #[inline]
    #[must_use]
    pub fn max_objects(&self) -> usize {
        self.max_objects
    }

    /// Primitives per object (render-side draw metadata).
    #[inline]
    #[must_use]
    pub fn primitives_per_object(&self) -> usize {
        self.primitives_per_object
    }

    /// Vertices per object.
    #[inline]
    #[must_use]
    pub fn vertices_per_object(&self) -> usize {
        self.vertices_per_object
    }

    /// Indices per object.
    #[inline]
    #[must_use]
    pub fn indices_per_object(&self) -> usize {
        self.indices_per_object
    }

    /// Number of objects currently enabled.
    #[must_use]
    pub fn active_objects(&self) -> usize {
        self.records.iter().filter(|r| r.enabled).count()
    }

    /// Number of objects stored, enabled or not.
    #[must_use]
    pub fn object_count(&self) -> usize {
        self.records.len()
    }

    /// Whether the renderer should draw this buffer at all.
    #[inline]
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the whole buffer.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Current face-culling mode.
    #[inline]
    #[must_use]
    pub fn culling(&self) -> FaceCulling {
        self.culling
    }

    /// Set the face-culling mode.
    pub fn set_culling(&mut self, culling: FaceCulling) {
        self.culling = culling;
    }

    /// Whether mutations skip the automatic upload.
    #[inline]
    #[must_use]
    pub fn manual_update(&self) -> bool {
        self.manual_update
    }

    /// Switch manual-update mode on or off.
    ///
    /// With manual updates on, mutations only touch the CPU-side arrays;
    /// call [`SlotBuffer::commit`] to stage one upload for the lot.
    pub fn set_manual_update(&mut self, manual: bool) {
        self.manual_update = manual;
    }

    /// Stage an upload of the current geometry.
    ///
    /// Only meaningful in manual-update mode; automatic mode stages after
    /// every mutation.
    pub fn commit(&self) {
        self.ctx
            .queue_upload(self.binding.id(), self.vertices.clone(), self.indices.clone());
    }

    /// The buffer's registration with its render context.
    #[must_use]
    pub fn binding(&self) -> &BufferBinding {
        &self.binding
    }

    /// Add an object in the first free slot.
    ///
    /// The indices are slot-relative (`0..vertices_per_object`); the
    /// buffer offsets them to the slot's vertex base.
    ///
    /// # Panics
    ///
    /// Panics when no free slot exists: capacity is a contract between
    /// the buffer's creator and its users, and overflow means the caller's
    /// sizing is wrong. Also panics (debug builds) if the index or vertex
    /// counts don't match the buffer's per-object shape.
    pub fn add(&mut self, identifier: I, indices: &[u32], vertices: &[HullVertex]) {
        debug_assert_eq!(indices.len(), self.indices_per_object);
        debug_assert_eq!(vertices.len(), self.vertices_per_object);

        let slot = self
            .slot_occupied
            .iter()
            .position(|occupied| !occupied)
            .unwrap_or_else(|| {
                panic!(
                    "slot buffer capacity exceeded ({} objects)",
                    self.max_objects
                )
            });

        #[allow(clippy::cast_possible_truncation)]
        let base = (slot * self.vertices_per_object) as u32;
        let offset_indices: Vec<u32> = indices.iter().map(|i| i + base).collect();

        self.indices[slot * self.indices_per_object..(slot + 1) * self.indices_per_object]
            .copy_from_slice(&offset_indices);
        self.vertices[slot * self.vertices_per_object..(slot + 1) * self.vertices_per_object]
            .copy_from_slice(vertices);

        self.slot_occupied[slot] = true;
        self.records.push(ObjectRecord::new(
            identifier,
            slot,
            offset_indices,
            vertices.to_vec(),
        ));

        self.maybe_upload();
    }

    /// Remove every object matching the identifier.
    ///
    /// The matching slots' index entries are zeroed and the slots freed;
    /// vertex data is left stale but unreferenced. Returns `false` when
    /// nothing matched.
    pub fn remove(&mut self, identifier: &I) -> bool {
        let mut matched = false;
        let mut kept = Vec::with_capacity(self.records.len());
        for record in self.records.drain(..) {
            if record.identifier == *identifier {
                matched = true;
                self.slot_occupied[record.slot] = false;
                let start = record.slot * self.indices_per_object;
                self.indices[start..start + self.indices_per_object].fill(0);
            } else {
                kept.push(record);
            }
        }
        self.records = kept;

        if matched {
            self.maybe_upload();
        }
        matched
    }

    /// Drop every object and free every slot.
    pub fn clear(&mut self) {
        self.records.clear();
        self.slot_occupied.fill(false);
        self.indices.fill(0);
        self.maybe_upload();
    }

    /// Restore the index entries of every object matching the identifier.
    ///
    /// Returns `false` when nothing matched. O(matches), allocation-free
    /// on the geometry side: only index entries are written.
    pub fn enable(&mut self, identifier: &I) -> bool {
        let mut matched = false;
        for record in &mut self.records {
            if record.identifier == *identifier {
                matched = true;
                record.enabled = true;
                let start = record.slot * self.indices_per_object;
                self.indices[start..start + self.indices_per_object]
                    .copy_from_slice(&record.indices);
            }
        }
        if matched {
            self.maybe_upload();
        }
        matched
    }

    /// Zero the index entries of every object matching the identifier.
    ///
    /// Vertex data and slot allocation stay untouched, so a later
    /// [`SlotBuffer::enable`] restores the object bit-identically.
    /// Returns `false` when nothing matched.
    pub fn disable(&mut self, identifier: &I) -> bool {
        let mut matched = false;
        for record in &mut self.records {
            if record.identifier == *identifier {
                matched = true;
                record.enabled = false;
                let start = record.slot * self.indices_per_object;
                self.indices[start..start + self.indices_per_object].fill(0);
            }
        }
        if matched {
            self.maybe_upload();
        }
        matched
    }

    /// Whether any object matches the identifier.
    #[must_use]
    pub fn contains(&self, identifier: &I) -> bool {
        self.records.iter().any(|r| r.identifier == *identifier)
    }

    /// Whether the first object matching the identifier is enabled.
    ///
    /// Returns `None` when nothing matches.
    #[must_use]
    pub fn is_enabled(&self, identifier: &I) -> Option<bool> {
        self.records
            .iter()
            .find(|r| r.identifier == *identifier)
            .map(|r| r.enabled)
    }

    /// Iterate over the stored identifiers, in insertion order.
    pub fn identifiers(&self) -> impl Iterator<Item = &I> {
        self.records.iter().map(|r| &r.identifier)
    }

    /// The per-object records, in insertion order.
    #[must_use]
    pub fn records(&self) -> &[ObjectRecord<I>] {
        &self.records
    }

    /// Absorb every object of another buffer into this one.
    ///
    /// Records are re-added through [`SlotBuffer::add`] with their indices
    /// rebased to slot-relative form. With `allow_duplicates` off, records
    /// whose identifier already exists here are skipped. With
    /// `clear_other` on, the other buffer is emptied afterwards.
    ///
    /// # Panics
    ///
    /// Panics if this buffer runs out of slots mid-absorb.
    pub fn absorb(&mut self, other: &mut Self, allow_duplicates: bool, clear_other: bool) {
        let was_manual = self.manual_update;
        self.manual_update = true;

        for record in other.records.clone() {
            if !allow_duplicates && self.contains(&record.identifier) {
                continue;
            }
            #[allow(clippy::cast_possible_truncation)]
            let base = (record.slot * other.vertices_per_object) as u32;
            let rebased: Vec<u32> = record.indices.iter().map(|i| i - base).collect();
            self.add(record.identifier, &rebased, &record.vertices);
        }

        self.commit();
        self.manual_update = was_manual;
        if clear_other {
            other.clear();
        }
    }

    /// Apply a transform to every vertex, records included.
    ///
    /// Used for the final hull mirror after generation.
    pub fn apply_transform(&mut self, f: impl Fn(&HullVertex) -> HullVertex) {
        for vertex in &mut self.vertices {
            *vertex = f(vertex);
        }
        for record in &mut self.records {
            let base = record.slot * self.vertices_per_object;
            record
                .vertices
                .copy_from_slice(&self.vertices[base..base + self.vertices_per_object]);
        }
        self.maybe_upload();
    }

    /// The flat index array (disabled slots zeroed).
    #[must_use]
    pub fn raw_indices(&self) -> &[u32] {
        &self.indices
    }

    /// The flat vertex array.
    #[must_use]
    pub fn raw_vertices(&self) -> &[HullVertex] {
        &self.vertices
    }

    fn maybe_upload(&self) {
        if !self.manual_update {
            self.commit();
        }
    }

    // Restore-path helpers for rebuilding a buffer from its serialized form.

    pub(crate) fn slot_occupied_at(&self, slot: usize) -> bool {
        self.slot_occupied[slot]
    }

    pub(crate) fn occupy_slot(&mut self, slot: usize) {
        self.slot_occupied[slot] = true;
    }

    pub(crate) fn write_vertices(&mut self, start: usize, vertices: &[HullVertex]) {
        self.vertices[start..start + vertices.len()].copy_from_slice(vertices);
    }

    pub(crate) fn write_indices(&mut self, start: usize, indices: &[u32]) {
        self.indices[start..start + indices.len()].copy_from_slice(indices);
    }

    pub(crate) fn push_record(&mut self, record: ObjectRecord<I>) {
        self.records.push(record);
    }
}
