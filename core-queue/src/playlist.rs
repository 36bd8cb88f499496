//! Ordered playlist cursor.

/// Minimal identifiable-item capability for queue entries.
///
/// The cursor itself never inspects identity; this trait exists so that
/// consumers (history, deduplication, diagnostics) can name entries without
/// coupling the playlist to any particular media-catalog type.
pub trait QueueItem {
    /// Stable identifier for this entry.
    fn queue_id(&self) -> &str;
}

/// A mutable ordered sequence of items plus a current-position cursor.
///
/// Invariant: `0 <= position <= len` at all times. `position == len` means
/// "past the end / nothing current".
///
/// Index policies, chosen once and documented rather than varying silently:
///
/// - `insert`: valid range is `[0, len]`; anything larger clamps to `len`
///   (append semantics). The cursor is **not** adjusted, so inserting before
///   the current position shifts which item is current.
/// - `remove`: removing an index strictly below the cursor shifts the cursor
///   down by one so the current item is unchanged; removing the current
///   index leaves the cursor in place and the next item becomes current.
/// - `jump_to`: clamps to `len` ("nothing current") instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist<T> {
    items: Vec<T>,
    position: usize,
}

impl<T> Playlist<T> {
    /// Create an empty playlist with the cursor at zero.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            position: 0,
        }
    }

    /// Create a playlist from an ordered list of items, starting at `start`
    /// (clamped to `items.len()`).
    pub fn from_items(items: Vec<T>, start: usize) -> Self {
        let position = start.min(items.len());
        Self { items, position }
    }

    /// Number of items in the playlist.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the playlist holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current cursor position, in `0..=len`.
    pub fn position(&self) -> usize {
        self.position
    }

    /// All items in order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The item under the cursor, or `None` when the cursor is past the end.
    pub fn current(&self) -> Option<&T> {
        self.items.get(self.position)
    }

    /// Insert `item` before `at`, shifting subsequent elements. `at` greater
    /// than `len` clamps to `len`. The cursor is not adjusted.
    pub fn insert(&mut self, item: T, at: usize) {
        let at = at.min(self.items.len());
        self.items.insert(at, item);
    }

    /// Remove and return the item at `at`, or `None` when `at` is out of
    /// range. Removing below the cursor shifts the cursor down by one so the
    /// current item is preserved.
    pub fn remove(&mut self, at: usize) -> Option<T> {
        if at >= self.items.len() {
            return None;
        }
        let item = self.items.remove(at);
        if at < self.position {
            self.position -= 1;
        }
        Some(item)
    }

    /// Add an item to the end. The cursor is not adjusted.
    pub fn append(&mut self, item: T) {
        self.items.push(item);
    }

    /// Move the cursor to `index`, clamped to `len` (nothing current).
    pub fn jump_to(&mut self, index: usize) {
        self.position = index.min(self.items.len());
    }

    /// Move the cursor forward and return the new current item.
    ///
    /// A no-op returning `None` when the cursor is already at or past the
    /// last element; there is no wraparound.
    pub fn advance(&mut self) -> Option<&T> {
        if self.position + 1 >= self.items.len() {
            return None;
        }
        self.position += 1;
        self.items.get(self.position)
    }

    /// Move the cursor back one place (idempotent at zero) and return the
    /// item at the resulting position.
    pub fn retreat(&mut self) -> Option<&T> {
        if self.position > 0 {
            self.position -= 1;
        }
        self.items.get(self.position)
    }
}

impl<T> Default for Playlist<T> {
    fn default() -> Self {
        Self::new()
    }
}
