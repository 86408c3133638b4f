//! The two-level board data model.
//!
//! A [`Board`] is an ordered sequence of [`ListContainer`]s, each of which is
//! an ordered sequence of [`Item`]s. The board is owned by the host
//! application; this crate only reads it to resolve drop positions and never
//! mutates it behind the host's back.
//!
//! Identity is by handle, not by value: every item and list receives a unique
//! [`ItemId`] / [`ListId`] when constructed, so two items with identical
//! payloads remain distinct entities for the duration of a drag.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ITEM_ID: AtomicU64 = AtomicU64::new(1);
static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(1);

/// Unique handle identifying an [`Item`] for its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(u64);

impl ItemId {
    fn next() -> Self {
        Self(NEXT_ITEM_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Unique handle identifying a [`ListContainer`] for its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListId(u64);

impl ListId {
    fn next() -> Self {
        Self(NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A single draggable entry in a list.
///
/// The payload is opaque to this crate. A locked item cannot be picked up by
/// a drag gesture, but it remains a valid drop target; the gesture layer is
/// responsible for never presenting a locked item as the dragged operand.
#[derive(Debug, Clone)]
pub struct Item<T> {
    id: ItemId,
    payload: T,
    locked: bool,
}

impl<T> Item<T> {
    /// Create a new unlocked item carrying the given payload.
    pub fn new(payload: T) -> Self {
        Self {
            id: ItemId::next(),
            payload,
            locked: false,
        }
    }

    /// Builder-style setter for the locked flag.
    pub fn locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    /// The item's identity handle.
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Borrow the payload.
    pub fn payload(&self) -> &T {
        &self.payload
    }

    /// Mutably borrow the payload.
    pub fn payload_mut(&mut self) -> &mut T {
        &mut self.payload
    }

    /// Returns true if the item cannot be dragged.
    pub fn is_locked(&self) -> bool {
        self.locked
    }
}

/// An ordered list of items with optional per-list overrides.
///
/// Insertion order is both the displayed and the logical order.
#[derive(Debug, Clone)]
pub struct ListContainer<T> {
    id: ListId,
    items: Vec<Item<T>>,
    locked: bool,
    requires_ghost: bool,
}

impl<T> ListContainer<T> {
    /// Create a new empty list.
    pub fn new() -> Self {
        Self {
            id: ListId::next(),
            items: Vec::new(),
            locked: false,
            requires_ghost: false,
        }
    }

    /// Create a list from existing items.
    pub fn with_items(items: impl IntoIterator<Item = Item<T>>) -> Self {
        let mut list = Self::new();
        list.items = items.into_iter().collect();
        list
    }

    /// Builder-style setter for the per-list lock override.
    ///
    /// A locked list's children cannot be dragged, regardless of the items'
    /// own flags.
    pub fn locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    /// Builder-style setter marking this list's style as needing a drag
    /// ghost placeholder. Configuration validation fails when such a list is
    /// present and no ghost is configured.
    pub fn requires_ghost(mut self, requires_ghost: bool) -> Self {
        self.requires_ghost = requires_ghost;
        self
    }

    /// The list's identity handle.
    pub fn id(&self) -> ListId {
        self.id
    }

    /// The ordered items.
    pub fn items(&self) -> &[Item<T>] {
        &self.items
    }

    /// Number of items in the list.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true if this list's children cannot be dragged.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Returns true if this list's style needs a ghost placeholder.
    pub fn needs_ghost(&self) -> bool {
        self.requires_ghost
    }

    /// Append an item (host-side mutation).
    pub fn push(&mut self, item: Item<T>) {
        self.items.push(item);
    }

    /// Insert an item at `index` (host-side mutation).
    pub fn insert(&mut self, index: usize, item: Item<T>) {
        self.items.insert(index, item);
    }

    /// Remove and return the item at `index` (host-side mutation).
    pub fn remove(&mut self, index: usize) -> Item<T> {
        self.items.remove(index)
    }
}

impl<T> Default for ListContainer<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Position of an item within a board: which list, and where in that list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemLocation {
    /// Index of the containing list within the board.
    pub list_index: usize,
    /// Index of the item within its list.
    pub item_index: usize,
}

impl ItemLocation {
    /// Create a new location.
    pub const fn new(list_index: usize, item_index: usize) -> Self {
        Self {
            list_index,
            item_index,
        }
    }
}

/// The full two-level ordered structure.
///
/// Owned exclusively by the host application. The reorder resolver reads it
/// to translate drag events into index operations; applying those operations
/// is the host's job (see the `apply_*` helpers, which exist for exactly
/// that call site).
#[derive(Debug, Clone, Default)]
pub struct Board<T> {
    lists: Vec<ListContainer<T>>,
}

impl<T> Board<T> {
    /// Create an empty board.
    pub fn new() -> Self {
        Self { lists: Vec::new() }
    }

    /// Create a board from existing lists.
    pub fn with_lists(lists: impl IntoIterator<Item = ListContainer<T>>) -> Self {
        Self {
            lists: lists.into_iter().collect(),
        }
    }

    /// The ordered lists.
    pub fn lists(&self) -> &[ListContainer<T>] {
        &self.lists
    }

    /// Number of lists on the board.
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Returns true if the board holds no lists.
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Borrow the list at `index`.
    pub fn list(&self, index: usize) -> Option<&ListContainer<T>> {
        self.lists.get(index)
    }

    /// Mutably borrow the list at `index` (host-side mutation).
    pub fn list_mut(&mut self, index: usize) -> Option<&mut ListContainer<T>> {
        self.lists.get_mut(index)
    }

    /// Append a list (host-side mutation).
    pub fn push_list(&mut self, list: ListContainer<T>) {
        self.lists.push(list);
    }

    /// Insert a list at `index` (host-side mutation).
    pub fn insert_list(&mut self, index: usize, list: ListContainer<T>) {
        self.lists.insert(index, list);
    }

    /// Remove and return the list at `index` (host-side mutation).
    pub fn remove_list(&mut self, index: usize) -> ListContainer<T> {
        self.lists.remove(index)
    }

    /// Apply a resolved item move: remove the item at `from` and insert it
    /// at `to` (host-side mutation).
    ///
    /// `to` must be a post-removal insertion point, exactly as produced by
    /// the resolver. `to == from` applies as an identity and leaves the
    /// order untouched.
    pub fn move_item(&mut self, from: ItemLocation, to: ItemLocation) {
        if from == to {
            return;
        }
        let item = self.lists[from.list_index].items.remove(from.item_index);
        self.lists[to.list_index].items.insert(to.item_index, item);
    }

    /// Apply a resolved list move (host-side mutation). `to == from` applies
    /// as an identity.
    pub fn move_list(&mut self, from: usize, to: usize) {
        if from == to {
            return;
        }
        let list = self.lists.remove(from);
        self.lists.insert(to, list);
    }

    /// Locate an item by handle with a linear scan over all lists.
    ///
    /// Returns `None` when the handle is not on the board, which the
    /// resolver interprets as "the element is being introduced from
    /// outside". Boards large enough for the scan to matter should maintain
    /// a handle-to-location map on the host side instead.
    pub fn locate_item(&self, id: ItemId) -> Option<ItemLocation> {
        for (list_index, list) in self.lists.iter().enumerate() {
            if let Some(item_index) = list.items.iter().position(|item| item.id == id) {
                return Some(ItemLocation::new(list_index, item_index));
            }
        }
        None
    }

    /// Locate a list by handle.
    pub fn locate_list(&self, id: ListId) -> Option<usize> {
        self.lists.iter().position(|list| list.id == id)
    }

    /// Borrow an item by handle.
    pub fn item(&self, id: ItemId) -> Option<&Item<T>> {
        let location = self.locate_item(id)?;
        self.lists[location.list_index].items.get(location.item_index)
    }

    /// Returns true if the item with the given handle can be dragged.
    ///
    /// An item is draggable when it exists, is not itself locked, and its
    /// containing list is not locked.
    pub fn is_draggable(&self, id: ItemId) -> bool {
        let Some(location) = self.locate_item(id) else {
            return false;
        };
        let list = &self.lists[location.list_index];
        !list.locked && !list.items[location.item_index].locked
    }
}
