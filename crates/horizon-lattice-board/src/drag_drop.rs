//! Coordination between the gesture layer, the resolver, and the host.
//!
//! [`DragDropCoordinator`] is the single entry point a host wires its
//! gesture/rendering layer to. It owns no board data: the host passes its
//! [`Board`] into each event, the coordinator resolves the drop with the
//! pure resolver functions, and the outcome is delivered through the
//! callbacks the host registered. The host is expected to apply the mutation
//! synchronously before the next frame.
//!
//! # Drag activation
//!
//! The coordinator also tracks how a drag begins. In
//! [`DragActivation::Immediate`] mode a pointer press arms a pending drag
//! that starts once movement exceeds the threshold, so ordinary clicks never
//! turn into drags. In [`DragActivation::LongPress`] mode the pending drag
//! starts when the gesture layer reports that the hold elapsed.
//!
//! # Example
//!
//! ```ignore
//! use horizon_lattice_board::prelude::*;
//!
//! let config = BoardConfig::new();
//! let mut coordinator = DragDropCoordinator::new(config, &board)?
//!     .on_item_reorder(|from, to| apply_move(from, to))
//!     .on_item_add(|list_index, item_index| apply_add(list_index, item_index));
//!
//! // From the gesture layer:
//! coordinator.prepare_item_drag(&board, item_id, press_position);
//! coordinator.check_drag_start(move_position);
//! coordinator.item_drop(&board, item_id, ItemDropTarget::Item(receiver_id));
//! ```

use tracing::debug;

use crate::board::{Board, ItemId, ItemLocation, ListId};
use crate::config::{BoardConfig, DragActivation};
use crate::error::Result;
use crate::geometry::Point;
use crate::resolver::{
    resolve_item_reorder, resolve_list_reorder, ItemDropTarget, ItemReorder, ListDropTarget,
    ListReorder,
};

/// The element a drag gesture is carrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOperand {
    /// An item drag.
    Item(ItemId),
    /// A whole-list drag.
    List(ListId),
}

/// A drag that has been armed but not yet started.
#[derive(Debug, Clone, Copy)]
struct PendingDrag {
    operand: DragOperand,
    press_position: Point,
}

/// Host callbacks fired when a drop resolves.
#[derive(Default)]
struct Callbacks {
    item_add: Option<Box<dyn Fn(usize, usize)>>,
    item_reorder: Option<Box<dyn Fn(ItemLocation, ItemLocation)>>,
    list_add: Option<Box<dyn Fn(usize)>>,
    list_reorder: Option<Box<dyn Fn(usize, usize)>>,
}

/// Wires drag lifecycle events to the reorder resolver and host callbacks.
pub struct DragDropCoordinator {
    config: BoardConfig,
    callbacks: Callbacks,
    pending: Option<PendingDrag>,
    active: Option<DragOperand>,
}

impl DragDropCoordinator {
    /// Create a coordinator, validating the configuration against the board
    /// it will serve.
    ///
    /// Fails fast with a [`crate::ConfigError`] on invalid combinations; see
    /// [`BoardConfig::validate`].
    pub fn new<T>(config: BoardConfig, board: &Board<T>) -> Result<Self> {
        config.validate(board)?;
        Ok(Self {
            config,
            callbacks: Callbacks::default(),
            pending: None,
            active: None,
        })
    }

    /// The configuration this coordinator was built with.
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // Callback registration
    // -------------------------------------------------------------------------

    /// Register the callback for items introduced from outside the board.
    pub fn on_item_add(mut self, callback: impl Fn(usize, usize) + 'static) -> Self {
        self.callbacks.item_add = Some(Box::new(callback));
        self
    }

    /// Register the callback for item moves. The destination is a
    /// post-removal insertion point; `from == to` means the drop resolved to
    /// the item's own position and applying it is an identity.
    pub fn on_item_reorder(
        mut self,
        callback: impl Fn(ItemLocation, ItemLocation) + 'static,
    ) -> Self {
        self.callbacks.item_reorder = Some(Box::new(callback));
        self
    }

    /// Register the callback for lists introduced from outside the board.
    pub fn on_list_add(mut self, callback: impl Fn(usize) + 'static) -> Self {
        self.callbacks.list_add = Some(Box::new(callback));
        self
    }

    /// Register the callback for list moves.
    pub fn on_list_reorder(mut self, callback: impl Fn(usize, usize) + 'static) -> Self {
        self.callbacks.list_reorder = Some(Box::new(callback));
        self
    }

    // -------------------------------------------------------------------------
    // Drag activation
    // -------------------------------------------------------------------------

    /// Arm a pending item drag at the pointer press position.
    ///
    /// Returns false (and arms nothing) when the item is locked, its list is
    /// locked, or the item is unknown to the board; external elements are
    /// introduced through the drop events directly, not through activation.
    pub fn prepare_item_drag<T>(
        &mut self,
        board: &Board<T>,
        item: ItemId,
        press_position: Point,
    ) -> bool {
        if !board.is_draggable(item) {
            debug!(
                target: "horizon_lattice_board::drag_drop",
                ?item,
                "refused drag of locked or unknown item"
            );
            return false;
        }
        self.pending = Some(PendingDrag {
            operand: DragOperand::Item(item),
            press_position,
        });
        true
    }

    /// Arm a pending list drag at the pointer press position.
    pub fn prepare_list_drag<T>(
        &mut self,
        board: &Board<T>,
        list: ListId,
        press_position: Point,
    ) -> bool {
        if board.locate_list(list).is_none() {
            return false;
        }
        self.pending = Some(PendingDrag {
            operand: DragOperand::List(list),
            press_position,
        });
        true
    }

    /// In immediate mode, check whether pointer movement starts the pending
    /// drag. Returns true when the drag has just started.
    ///
    /// In long-press mode movement never starts the drag; use
    /// [`Self::long_press_elapsed`].
    pub fn check_drag_start(&mut self, position: Point) -> bool {
        let DragActivation::Immediate { threshold } = self.config.activation else {
            return false;
        };
        let Some(pending) = self.pending else {
            return false;
        };

        if pending.press_position.distance_to(position) >= threshold {
            self.active = Some(pending.operand);
            self.pending = None;
            debug!(
                target: "horizon_lattice_board::drag_drop",
                operand = ?self.active,
                "drag started by movement threshold"
            );
            return true;
        }
        false
    }

    /// In long-press mode, start the pending drag because the gesture layer
    /// reported that the hold elapsed. Returns true when the drag started.
    pub fn long_press_elapsed(&mut self) -> bool {
        if !matches!(self.config.activation, DragActivation::LongPress { .. }) {
            return false;
        }
        let Some(pending) = self.pending.take() else {
            return false;
        };
        self.active = Some(pending.operand);
        debug!(
            target: "horizon_lattice_board::drag_drop",
            operand = ?self.active,
            "drag started by long press"
        );
        true
    }

    /// Cancel any pending (not yet started) drag.
    pub fn cancel_pending(&mut self) {
        self.pending = None;
    }

    /// Returns true if a drag is currently active.
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// The operand of the active drag, if any.
    pub fn active_drag(&self) -> Option<DragOperand> {
        self.active
    }

    // -------------------------------------------------------------------------
    // Drag lifecycle events
    // -------------------------------------------------------------------------

    /// Resolve the operation an item hover would produce, without firing
    /// callbacks. Hosts use this to position ghost/placeholder previews.
    pub fn item_hover<T>(
        &self,
        board: &Board<T>,
        dragged: ItemId,
        target: ItemDropTarget,
    ) -> Option<ItemReorder> {
        resolve_item_reorder(board, dragged, target)
    }

    /// Resolve a list hover, without firing callbacks.
    pub fn list_hover<T>(
        &self,
        board: &Board<T>,
        dragged: ListId,
        target: ListDropTarget,
    ) -> Option<ListReorder> {
        resolve_list_reorder(board, dragged, target)
    }

    /// An item was dropped onto `target`. Resolves the operation, fires the
    /// matching callback, and ends the drag.
    ///
    /// Returns the resolved operation, or `None` when the receiver could not
    /// be located (in which case no callback fires and the board is left as
    /// is).
    pub fn item_drop<T>(
        &mut self,
        board: &Board<T>,
        dragged: ItemId,
        target: ItemDropTarget,
    ) -> Option<ItemReorder> {
        let resolved = resolve_item_reorder(board, dragged, target);
        self.end_drag();

        match resolved? {
            resolved @ ItemReorder::Add {
                list_index,
                item_index,
            } => {
                if let Some(callback) = &self.callbacks.item_add {
                    callback(list_index, item_index);
                }
                Some(resolved)
            }
            resolved @ ItemReorder::Move { from, to } => {
                if let Some(callback) = &self.callbacks.item_reorder {
                    callback(from, to);
                }
                Some(resolved)
            }
        }
    }

    /// An item was dropped onto the end-of-list zone of `parent_list`.
    pub fn item_drop_on_list_end<T>(
        &mut self,
        board: &Board<T>,
        dragged: ItemId,
        parent_list: ListId,
    ) -> Option<ItemReorder> {
        self.item_drop(board, dragged, ItemDropTarget::ListEnd(parent_list))
    }

    /// A list was dropped onto `target`. Resolves the operation, fires the
    /// matching callback, and ends the drag.
    pub fn list_drop<T>(
        &mut self,
        board: &Board<T>,
        dragged: ListId,
        target: ListDropTarget,
    ) -> Option<ListReorder> {
        let resolved = resolve_list_reorder(board, dragged, target);
        self.end_drag();

        match resolved? {
            resolved @ ListReorder::Add { list_index } => {
                if let Some(callback) = &self.callbacks.list_add {
                    callback(list_index);
                }
                Some(resolved)
            }
            resolved @ ListReorder::Move { from, to } => {
                if let Some(callback) = &self.callbacks.list_reorder {
                    callback(from, to);
                }
                Some(resolved)
            }
        }
    }

    /// A list was dropped onto the end-of-board zone.
    pub fn list_drop_on_board_end<T>(
        &mut self,
        board: &Board<T>,
        dragged: ListId,
    ) -> Option<ListReorder> {
        self.list_drop(board, dragged, ListDropTarget::BoardEnd)
    }

    /// The drag ended without a drop (released outside any target).
    pub fn cancel_drag(&mut self) {
        self.end_drag();
    }

    fn end_drag(&mut self) {
        self.pending = None;
        self.active = None;
    }
}
