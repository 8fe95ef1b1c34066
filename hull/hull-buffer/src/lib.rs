//! Addressable geometry buffers.
//!
//! A [`SlotBuffer`] is a fixed-capacity container mapping opaque
//! identifiers to slots of vertex/index data. Members can be added,
//! removed, enabled and disabled without reallocation: disabling zeroes
//! only the slot's index entries, leaving vertex data and slot allocation
//! untouched, so damage/visibility toggles are allocation-free.
//!
//! Buffers are the unit handed to the external renderer: each one
//! registers with a [`RenderContext`] on creation and stages its geometry
//! there through asynchronous uploads. The render path joins all pending
//! uploads (one coarse-grained [`RenderContext::flush_uploads`]) before
//! consuming staged geometry.
//!
//! # Example
//!
//! ```
//! use hull_buffer::{RenderContext, SlotBuffer};
//! use hull_types::HullVertex;
//!
//! let ctx = RenderContext::new();
//! let mut buffer: SlotBuffer<u32> = SlotBuffer::new(&ctx, 4, 1, 3, 3);
//!
//! let verts = [HullVertex::default(); 3];
//! buffer.add(7, &[0, 1, 2], &verts);
//!
//! assert!(buffer.contains(&7));
//! assert!(buffer.disable(&7));
//! assert!(buffer.enable(&7));
//! assert!(buffer.remove(&7));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

mod context;
mod record;
mod serialized;
mod slot_buffer;

pub use context::{BufferBinding, RenderContext, StagedGeometry};
pub use record::ObjectRecord;
pub use serialized::{SerializedRecord, SerializedSlotBuffer};
pub use slot_buffer::{FaceCulling, SlotBuffer};
