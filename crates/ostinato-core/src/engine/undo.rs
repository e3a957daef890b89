//! Fixed-depth undo/redo snapshot history.
//!
//! An arena of up to [`MAX_UNDO_LEVELS`] snapshot buffers addressed by
//! circular indices. Buffers are allocated once at construction (each large
//! enough for the longest possible loop) and snapshots are taken only when
//! an overdub starts, never automatically.

/// Fixed cap on undo snapshot buffers.
pub const MAX_UNDO_LEVELS: usize = 3;

/// Circular snapshot store for a loop region's contents.
///
/// Note: saving a new snapshot deliberately does not reset the redo depth;
/// interleaving undo with a fresh save can leave stale redo entries. That
/// matches the device's long-standing behavior and is pinned by tests.
#[derive(Debug)]
pub struct UndoHistory {
    buffers: Vec<Vec<f32>>,
    write_index: usize,
    read_index: usize,
    undo_depth: usize,
    redo_depth: usize,
}

impl UndoHistory {
    /// `levels` is clamped to [`MAX_UNDO_LEVELS`]; zero disables history.
    pub fn new(levels: usize, capacity: usize) -> Self {
        let count = levels.min(MAX_UNDO_LEVELS);
        Self {
            buffers: (0..count).map(|_| vec![0.0; capacity]).collect(),
            write_index: 0,
            read_index: 0,
            undo_depth: 0,
            redo_depth: 0,
        }
    }

    pub fn enabled(&self) -> bool {
        !self.buffers.is_empty()
    }

    pub fn configured_levels(&self) -> usize {
        self.buffers.len()
    }

    pub fn can_undo(&self) -> bool {
        self.enabled() && self.undo_depth > 0
    }

    pub fn can_redo(&self) -> bool {
        self.enabled() && self.redo_depth > 0
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_depth
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_depth
    }

    /// Snapshot `length` samples of `store` starting at `start` (wrapping
    /// modulo the store).
    pub fn save_state(&mut self, store: &[f32], start: usize, length: usize) {
        let count = self.buffers.len();
        if count == 0 {
            return;
        }

        copy_region_out(store, start, length, &mut self.buffers[self.write_index]);

        self.write_index = (self.write_index + 1) % count;
        self.read_index = self.write_index;
        if self.undo_depth < count {
            self.undo_depth += 1;
        }
    }

    /// Restore the most recent snapshot into `store`. Returns false (leaving
    /// the store untouched) when no history is available.
    pub fn undo(&mut self, store: &mut [f32], start: usize, length: usize) -> bool {
        if !self.can_undo() {
            return false;
        }
        let count = self.buffers.len();

        self.read_index = (self.read_index + count - 1) % count;
        copy_region_in(&self.buffers[self.read_index], store, start, length);

        self.undo_depth -= 1;
        if self.redo_depth < MAX_UNDO_LEVELS - 1 {
            self.redo_depth += 1;
        }
        true
    }

    /// Re-apply a previously undone snapshot. Returns false when no redo is
    /// available.
    pub fn redo(&mut self, store: &mut [f32], start: usize, length: usize) -> bool {
        if !self.can_redo() {
            return false;
        }
        let count = self.buffers.len();

        self.read_index = (self.read_index + 1) % count;
        copy_region_in(&self.buffers[self.read_index], store, start, length);

        self.undo_depth += 1;
        self.redo_depth -= 1;
        true
    }
}

/// Copy a possibly wrapping region out of `store` into the front of `dest`.
fn copy_region_out(store: &[f32], start: usize, length: usize, dest: &mut [f32]) {
    let capacity = store.len();
    if capacity == 0 || length == 0 {
        return;
    }
    let start = start % capacity;
    let length = length.min(capacity).min(dest.len());

    let first = (capacity - start).min(length);
    dest[..first].copy_from_slice(&store[start..start + first]);
    dest[first..length].copy_from_slice(&store[..length - first]);
}

/// Copy the front of `src` back into a possibly wrapping region of `store`.
fn copy_region_in(src: &[f32], store: &mut [f32], start: usize, length: usize) {
    let capacity = store.len();
    if capacity == 0 || length == 0 {
        return;
    }
    let start = start % capacity;
    let length = length.min(capacity).min(src.len());

    let first = (capacity - start).min(length);
    store[start..start + first].copy_from_slice(&src[..first]);
    store[..length - first].copy_from_slice(&src[first..length]);
}
