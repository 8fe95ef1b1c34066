//! The renderer context: buffer registry and asynchronous upload queue.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::JoinHandle;

use hashbrown::HashMap;
use hull_types::HullVertex;
use tracing::{debug, error};

/// Geometry staged for the render side.
///
/// A snapshot of one buffer's flat vertex/index arrays, written by the
/// upload queue and read by the draw path after a flush.
#[derive(Debug, Clone, Default)]
pub struct StagedGeometry {
    /// Flat vertex array, `slot * vertices_per_object` addressed.
    pub vertices: Vec<HullVertex>,
    /// Flat index array; disabled slots hold zeroed entries.
    pub indices: Vec<u32>,
}

#[derive(Debug, Default)]
struct ContextInner {
    staging: Mutex<HashMap<u64, (u64, StagedGeometry)>>,
    pending: Mutex<Vec<JoinHandle<()>>>,
    next_id: AtomicU64,
    upload_seq: AtomicU64,
}

/// Explicit renderer context.
///
/// Buffers register here on creation and deregister when dropped; there is
/// no process-wide registry. Uploads are queued as background tasks and
/// joined all at once by [`RenderContext::flush_uploads`], the single
/// coarse-grained synchronization point between geometry mutation and
/// drawing. Once enqueued, an upload runs to completion; there is no
/// cancellation and no timeout.
///
/// Uploads carry a sequence number so a stale copy can never overwrite a
/// newer one, whatever order the background tasks finish in.
///
/// Cloning the context is cheap and shares the registry.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    inner: Arc<ContextInner>,
}

impl RenderContext {
    /// Create an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new buffer, returning its binding.
    #[must_use]
    pub(crate) fn register(&self) -> BufferBinding {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.lock_staging()
            .insert(id, (0, StagedGeometry::default()));
        debug!(buffer = id, "buffer registered with render context");
        BufferBinding {
            ctx: Arc::clone(&self.inner),
            id,
        }
    }

    /// Queue an asynchronous upload of a buffer's geometry.
    ///
    /// The caller does not block; the copy lands in the staging store when
    /// the background task completes.
    pub(crate) fn queue_upload(&self, id: u64, vertices: Vec<HullVertex>, indices: Vec<u32>) {
        let seq = self.inner.upload_seq.fetch_add(1, Ordering::Relaxed) + 1;
        let inner = Arc::clone(&self.inner);
        let handle = std::thread::spawn(move || {
            if let Ok(mut staging) = inner.staging.lock() {
                if let Some(entry) = staging.get_mut(&id) {
                    if entry.0 < seq {
                        *entry = (seq, StagedGeometry { vertices, indices });
                    }
                }
            }
        });
        if let Ok(mut pending) = self.inner.pending.lock() {
            pending.push(handle);
        }
    }

    /// Join every outstanding upload.
    ///
    /// The draw path calls this before consuming staged geometry; after it
    /// returns, the staging store reflects every mutation made so far.
    pub fn flush_uploads(&self) {
        let handles: Vec<JoinHandle<()>> = match self.inner.pending.lock() {
            Ok(mut pending) => pending.drain(..).collect(),
            Err(_) => return,
        };
        for handle in handles {
            if handle.join().is_err() {
                error!("geometry upload task panicked");
            }
        }
    }

    /// Number of uploads not yet joined.
    #[must_use]
    pub fn pending_uploads(&self) -> usize {
        self.inner.pending.lock().map_or(0, |p| p.len())
    }

    /// Number of live (registered) buffers.
    #[must_use]
    pub fn registered_buffers(&self) -> usize {
        self.lock_staging().len()
    }

    /// A snapshot of one buffer's staged geometry.
    ///
    /// Call [`RenderContext::flush_uploads`] first; this reads whatever
    /// has landed so far.
    #[must_use]
    pub fn staged(&self, binding: &BufferBinding) -> Option<StagedGeometry> {
        self.lock_staging()
            .get(&binding.id)
            .map(|(_, geo)| geo.clone())
    }

    fn lock_staging(&self) -> MutexGuard<'_, HashMap<u64, (u64, StagedGeometry)>> {
        // A poisoned lock only means an upload task panicked mid-insert;
        // the map itself is still structurally sound.
        match self.inner.staging.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

/// A buffer's registration with its render context.
///
/// Dropping the binding deregisters the buffer and discards its staged
/// geometry: scoped resource ownership instead of finalizer-based
/// disposal.
#[derive(Debug)]
pub struct BufferBinding {
    ctx: Arc<ContextInner>,
    id: u64,
}

impl BufferBinding {
    /// The binding's context-unique id.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Drop for BufferBinding {
    fn drop(&mut self) {
        if let Ok(mut staging) = self.ctx.staging.lock() {
            staging.remove(&self.id);
        }
        debug!(buffer = self.id, "buffer deregistered from render context");
    }
}
