use core::cmp::Ordering;

use super::{Renderable, SharedRenderable, ZIndex};

/// Position of an object in a [`RenderQueue`].
///
/// A renderable's z-index can change while it is queued, so `z` is refreshed
/// on every insertion. `order` is assigned once at insertion and never
/// reused, which keeps equal z-indices in the order they were added no matter
/// how often the queue is re-sorted.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SortKey {
    pub z: ZIndex,
    pub order: u64,
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.z.cmp(&other.z).then(self.order.cmp(&other.order))
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

struct QueueEntry {
    key: SortKey,
    object: SharedRenderable,
}

/// Viewport render queue.
///
/// Objects are kept sorted by [`SortKey`]: ascending z-index, insertion order
/// for equal z-index. Every insertion re-reads the z-index of all queued
/// objects, so a z-index changed after insertion takes effect on the next
/// `push`.
///
/// `changed()` reports whether membership moved since `mark_clean()`; world
/// viewports use it to decide when to re-partition.
#[derive(Default)]
pub struct RenderQueue {
    entries: Vec<QueueEntry>,
    next_order: u64,
    changed: bool,
}

impl RenderQueue {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn changed(&self) -> bool {
        self.changed
    }

    #[inline]
    pub fn mark_clean(&mut self) {
        self.changed = false;
    }

    /// Inserts `object` and restores paint order.
    pub fn push(&mut self, object: SharedRenderable) {
        let z = object.try_borrow().map(|o| o.z_index()).unwrap_or_default();
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.entries.push(QueueEntry {
            key: SortKey { z, order },
            object,
        });

        // An object borrowed elsewhere right now keeps its previous key.
        for entry in &mut self.entries {
            if let Ok(o) = entry.object.try_borrow() {
                entry.key.z = o.z_index();
            }
        }
        self.entries.sort_by(|a, b| a.key.cmp(&b.key));

        self.changed = true;
    }

    /// Drops every object whose `rendering_finished` flag is set and returns
    /// how many were removed.
    pub fn retain_unfinished(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| {
            entry
                .object
                .try_borrow()
                .map(|o| !o.rendering_finished())
                .unwrap_or(true)
        });

        let removed = before - self.entries.len();
        if removed > 0 {
            self.changed = true;
        }
        removed
    }

    /// Iterates objects in paint order (back-to-front).
    pub fn iter(&self) -> impl Iterator<Item = &SharedRenderable> {
        self.entries.iter().map(|e| &e.object)
    }
}

impl core::fmt::Debug for RenderQueue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RenderQueue")
            .field("keys", &self.entries.iter().map(|e| e.key).collect::<Vec<_>>())
            .field("changed", &self.changed)
            .finish()
    }
}
