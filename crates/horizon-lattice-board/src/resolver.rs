//! Reorder resolution: translating drag hover/drop events into index
//! operations.
//!
//! The resolver is a set of pure functions over a [`Board`]. Given the
//! dragged element and the receiver under the pointer (or an end marker), it
//! computes the tagged operation the host should apply: an `Add` for
//! elements introduced from outside the board, or a `Move` with
//! removal-shift-corrected indices for elements already present.
//!
//! All indices in a `Move` are valid insertion points for the structure *as
//! it will exist after the dragged element has been removed*. For a same-list
//! move whose destination lies after its source, the destination index is
//! decremented by one: removing the source shifts every later slot down
//! before the insertion happens. Cross-list moves need no correction, since
//! removal from one list does not shift indices in another.
//!
//! The functions have no side effects and are idempotent for an unchanged
//! board, so they can be called on every hover event as well as on the final
//! drop.

use tracing::debug;

use crate::board::{Board, ItemId, ItemLocation, ListId};

/// The receiver of an item drag: either another item, or the synthetic
/// end-of-list marker meaning "append after the last item of this list".
///
/// The end marker is also how drops onto an empty list are expressed, since
/// an empty list has no item to hover over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemDropTarget {
    /// The item currently under the pointer.
    Item(ItemId),
    /// The end-of-list drop zone of the given list.
    ListEnd(ListId),
}

/// The receiver of a list drag: another list, or the end-of-board marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListDropTarget {
    /// The list currently under the pointer.
    List(ListId),
    /// The drop zone after the last list on the board.
    BoardEnd,
}

/// The operation an item drop resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemReorder {
    /// The dragged element is not on the board; insert it at the given
    /// position. No correction applies since nothing is removed.
    Add {
        /// Index of the target list within the board.
        list_index: usize,
        /// Insertion index within the target list.
        item_index: usize,
    },
    /// The dragged element is on the board; remove it from `from` and insert
    /// it at `to`. When `to == from` the drop resolves to the element's own
    /// position and applying the move is an identity operation.
    Move {
        /// The dragged item's current location.
        from: ItemLocation,
        /// Post-removal insertion location.
        to: ItemLocation,
    },
}

/// The operation a list drop resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListReorder {
    /// The dragged list is not on the board; insert it at the given index.
    Add {
        /// Insertion index within the board.
        list_index: usize,
    },
    /// Remove the list from `from` and insert it at `to`. `to == from` is an
    /// identity operation.
    Move {
        /// The dragged list's current index.
        from: usize,
        /// Post-removal insertion index.
        to: usize,
    },
}

/// Resolve an item hover/drop into the operation the host should apply.
///
/// Returns `None` only when the receiver cannot be located on the board
/// (an unknown item handle, or an end marker for an unknown list); a stale
/// hover from a list the host has since removed resolves to nothing rather
/// than to an out-of-range index. A dragged element that is not on the board
/// is not an error: it resolves to [`ItemReorder::Add`].
pub fn resolve_item_reorder<T>(
    board: &Board<T>,
    dragged: ItemId,
    target: ItemDropTarget,
) -> Option<ItemReorder> {
    let receiver = match target {
        ItemDropTarget::Item(id) => board.locate_item(id)?,
        ItemDropTarget::ListEnd(list_id) => {
            let list_index = board.locate_list(list_id)?;
            ItemLocation::new(list_index, board.lists()[list_index].len())
        }
    };

    let resolved = match board.locate_item(dragged) {
        None => ItemReorder::Add {
            list_index: receiver.list_index,
            item_index: receiver.item_index,
        },
        Some(from) => {
            let mut to = receiver;
            if to.list_index == from.list_index && to.item_index > from.item_index {
                to.item_index -= 1;
            }
            ItemReorder::Move { from, to }
        }
    };

    debug!(target: "horizon_lattice_board::resolver", ?resolved, "resolved item drop");
    Some(resolved)
}

/// Resolve a list hover/drop into the operation the host should apply.
///
/// The end-of-board marker always means "after everything currently
/// present": for a move it resolves directly to `board.len() - 1` (the last
/// slot once the dragged list has been removed) with no further decrement,
/// and for an add it resolves to `board.len()`.
///
/// Returns `None` when the receiver list cannot be located, or when the end
/// marker is used against an empty board while the dragged list is already
/// supposed to be on it (an impossible state this crate refuses to index
/// into).
pub fn resolve_list_reorder<T>(
    board: &Board<T>,
    dragged: ListId,
    target: ListDropTarget,
) -> Option<ListReorder> {
    let resolved = match board.locate_list(dragged) {
        None => {
            let list_index = match target {
                ListDropTarget::List(id) => board.locate_list(id)?,
                ListDropTarget::BoardEnd => board.len(),
            };
            ListReorder::Add { list_index }
        }
        Some(from) => {
            let to = match target {
                ListDropTarget::List(id) => {
                    let receiver = board.locate_list(id)?;
                    if receiver > from {
                        receiver - 1
                    } else {
                        receiver
                    }
                }
                ListDropTarget::BoardEnd => board.len().checked_sub(1)?,
            };
            ListReorder::Move { from, to }
        }
    };

    debug!(target: "horizon_lattice_board::resolver", ?resolved, "resolved list drop");
    Some(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Item, ListContainer};

    fn labels(board: &Board<&'static str>, list_index: usize) -> Vec<&'static str> {
        board.lists()[list_index]
            .items()
            .iter()
            .map(|item| *item.payload())
            .collect()
    }

    fn board_abcd() -> Board<&'static str> {
        Board::with_lists([ListContainer::with_items([
            Item::new("a"),
            Item::new("b"),
            Item::new("c"),
            Item::new("d"),
        ])])
    }

    fn item_id(board: &Board<&'static str>, list: usize, index: usize) -> ItemId {
        board.lists()[list].items()[index].id()
    }

    #[test]
    fn test_same_list_move_is_corrected_for_removal() {
        let mut board = board_abcd();
        let a = item_id(&board, 0, 0);
        let d = item_id(&board, 0, 3);

        let resolved = resolve_item_reorder(&board, a, ItemDropTarget::Item(d)).unwrap();
        assert_eq!(
            resolved,
            ItemReorder::Move {
                from: ItemLocation::new(0, 0),
                to: ItemLocation::new(0, 2),
            }
        );

        let ItemReorder::Move { from, to } = resolved else {
            unreachable!();
        };
        board.move_item(from, to);
        assert_eq!(labels(&board, 0), ["b", "c", "a", "d"]);
    }

    #[test]
    fn test_same_list_move_up_is_not_corrected() {
        let mut board = board_abcd();
        let d = item_id(&board, 0, 3);
        let b = item_id(&board, 0, 1);

        let resolved = resolve_item_reorder(&board, d, ItemDropTarget::Item(b)).unwrap();
        assert_eq!(
            resolved,
            ItemReorder::Move {
                from: ItemLocation::new(0, 3),
                to: ItemLocation::new(0, 1),
            }
        );

        board.move_item(ItemLocation::new(0, 3), ItemLocation::new(0, 1));
        assert_eq!(labels(&board, 0), ["a", "d", "b", "c"]);
    }

    #[test]
    fn test_cross_list_move_is_not_corrected() {
        let board = Board::with_lists([
            ListContainer::with_items([Item::new("a"), Item::new("b")]),
            ListContainer::with_items([Item::new("x"), Item::new("y")]),
        ]);
        let a = item_id(&board, 0, 0);
        let y = item_id(&board, 1, 1);

        let resolved = resolve_item_reorder(&board, a, ItemDropTarget::Item(y)).unwrap();
        assert_eq!(
            resolved,
            ItemReorder::Move {
                from: ItemLocation::new(0, 0),
                to: ItemLocation::new(1, 1),
            }
        );
    }

    #[test]
    fn test_unknown_dragged_item_resolves_to_add() {
        let board = board_abcd();
        let c = item_id(&board, 0, 2);
        let external = Item::new("external");

        let resolved =
            resolve_item_reorder(&board, external.id(), ItemDropTarget::Item(c)).unwrap();
        assert_eq!(
            resolved,
            ItemReorder::Add {
                list_index: 0,
                item_index: 2,
            }
        );
    }

    #[test]
    fn test_end_drop_appends_cross_list() {
        let board = Board::with_lists([
            ListContainer::with_items([Item::new("a")]),
            ListContainer::with_items([Item::new("x"), Item::new("y")]),
        ]);
        let a = item_id(&board, 0, 0);
        let second = board.lists()[1].id();

        // Cross-list: destination is the receiving list's length before
        // removal, which removal elsewhere does not shift.
        let resolved = resolve_item_reorder(&board, a, ItemDropTarget::ListEnd(second)).unwrap();
        assert_eq!(
            resolved,
            ItemReorder::Move {
                from: ItemLocation::new(0, 0),
                to: ItemLocation::new(1, 2),
            }
        );
    }

    #[test]
    fn test_end_drop_appends_same_list() {
        let mut board = board_abcd();
        let b = item_id(&board, 0, 1);
        let list = board.lists()[0].id();

        // Same list: the append slot is length - 1 once the dragged item is
        // out.
        let resolved = resolve_item_reorder(&board, b, ItemDropTarget::ListEnd(list)).unwrap();
        assert_eq!(
            resolved,
            ItemReorder::Move {
                from: ItemLocation::new(0, 1),
                to: ItemLocation::new(0, 3),
            }
        );

        board.move_item(ItemLocation::new(0, 1), ItemLocation::new(0, 3));
        assert_eq!(labels(&board, 0), ["a", "c", "d", "b"]);
    }

    #[test]
    fn test_end_drop_onto_empty_list() {
        let board = Board::with_lists([
            ListContainer::with_items([Item::new("a")]),
            ListContainer::new(),
        ]);
        let a = item_id(&board, 0, 0);
        let empty = board.lists()[1].id();

        let resolved = resolve_item_reorder(&board, a, ItemDropTarget::ListEnd(empty)).unwrap();
        assert_eq!(
            resolved,
            ItemReorder::Move {
                from: ItemLocation::new(0, 0),
                to: ItemLocation::new(1, 0),
            }
        );
    }

    #[test]
    fn test_identity_drop_is_a_no_op() {
        let mut board = board_abcd();
        let b = item_id(&board, 0, 1);

        let resolved = resolve_item_reorder(&board, b, ItemDropTarget::Item(b)).unwrap();
        assert_eq!(
            resolved,
            ItemReorder::Move {
                from: ItemLocation::new(0, 1),
                to: ItemLocation::new(0, 1),
            }
        );

        board.move_item(ItemLocation::new(0, 1), ItemLocation::new(0, 1));
        assert_eq!(labels(&board, 0), ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_unknown_receiver_resolves_to_nothing() {
        let board = board_abcd();
        let a = item_id(&board, 0, 0);
        let stale_item = Item::new("gone");
        let stale_list = ListContainer::<&'static str>::new();

        assert_eq!(
            resolve_item_reorder(&board, a, ItemDropTarget::Item(stale_item.id())),
            None
        );
        assert_eq!(
            resolve_item_reorder(&board, a, ItemDropTarget::ListEnd(stale_list.id())),
            None
        );
    }

    fn board_three_lists() -> Board<&'static str> {
        Board::with_lists([
            ListContainer::with_items([Item::new("a")]),
            ListContainer::with_items([Item::new("b")]),
            ListContainer::with_items([Item::new("c")]),
        ])
    }

    #[test]
    fn test_list_move_is_corrected() {
        let board = board_three_lists();
        let first = board.lists()[0].id();
        let second = board.lists()[1].id();

        let resolved =
            resolve_list_reorder(&board, first, ListDropTarget::List(second)).unwrap();
        assert_eq!(resolved, ListReorder::Move { from: 0, to: 0 });
    }

    #[test]
    fn test_list_move_onto_board_end() {
        let mut board = board_three_lists();
        let first = board.lists()[0].id();

        let resolved = resolve_list_reorder(&board, first, ListDropTarget::BoardEnd).unwrap();
        assert_eq!(resolved, ListReorder::Move { from: 0, to: 2 });

        board.move_list(0, 2);
        let order: Vec<&str> = (0..3).map(|i| *board.lists()[i].items()[0].payload()).collect();
        assert_eq!(order, ["b", "c", "a"]);
    }

    #[test]
    fn test_list_move_up() {
        let board = board_three_lists();
        let third = board.lists()[2].id();
        let first = board.lists()[0].id();

        let resolved = resolve_list_reorder(&board, third, ListDropTarget::List(first)).unwrap();
        assert_eq!(resolved, ListReorder::Move { from: 2, to: 0 });
    }

    #[test]
    fn test_unknown_dragged_list_resolves_to_add() {
        let board = board_three_lists();
        let second = board.lists()[1].id();
        let external = ListContainer::<&'static str>::new();

        assert_eq!(
            resolve_list_reorder(&board, external.id(), ListDropTarget::List(second)),
            Some(ListReorder::Add { list_index: 1 })
        );
        assert_eq!(
            resolve_list_reorder(&board, external.id(), ListDropTarget::BoardEnd),
            Some(ListReorder::Add { list_index: 3 })
        );
    }

    #[test]
    fn test_identity_list_drop_is_a_no_op() {
        let board = board_three_lists();
        let second = board.lists()[1].id();

        let resolved =
            resolve_list_reorder(&board, second, ListDropTarget::List(second)).unwrap();
        assert_eq!(resolved, ListReorder::Move { from: 1, to: 1 });
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let board = board_abcd();
        let a = item_id(&board, 0, 0);
        let c = item_id(&board, 0, 2);

        let first = resolve_item_reorder(&board, a, ItemDropTarget::Item(c));
        let second = resolve_item_reorder(&board, a, ItemDropTarget::Item(c));
        assert_eq!(first, second);
    }
}
