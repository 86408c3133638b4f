//! Drag-and-drop board reordering for Horizon Lattice style UIs.
//!
//! This crate provides the two rendering-free subsystems behind a
//! drag-and-drop board (ordered lists of ordered items):
//!
//! - **Reorder resolution**: pure functions that translate "dragged element X
//!   was dropped on element Y" into a tagged index operation, including the
//!   removal-shift correction for same-container moves, add semantics for
//!   elements introduced from outside the board, and end-marker drops that
//!   append after everything present.
//! - **Edge autoscroll**: a state machine that creeps a scrollable viewport
//!   while a drag hovers near its edge, stepping proportionally to how deep
//!   the pointer sits in the edge band and never racing more than one scroll
//!   animation at a time.
//!
//! Rendering, layout, and gesture capture stay with the host; the crate
//! consumes pointer and drag lifecycle events and a
//! [`Viewport`](autoscroll::Viewport) abstraction,
//! and produces index operations the host applies to its own board.
//!
//! # Example
//!
//! ```
//! use horizon_lattice_board::prelude::*;
//!
//! let board = Board::with_lists([
//!     ListContainer::with_items([Item::new("write"), Item::new("review")]),
//!     ListContainer::with_items([Item::new("ship")]),
//! ]);
//!
//! let dragged = board.lists()[0].items()[0].id();
//! let receiver = board.lists()[1].items()[0].id();
//!
//! let resolved = resolve_item_reorder(&board, dragged, ItemDropTarget::Item(receiver));
//! assert_eq!(
//!     resolved,
//!     Some(ItemReorder::Move {
//!         from: ItemLocation::new(0, 0),
//!         to: ItemLocation::new(1, 0),
//!     })
//! );
//! ```

pub mod autoscroll;
pub mod board;
pub mod config;
pub mod drag_drop;
pub mod easing;
pub mod geometry;
pub mod resolver;

mod error;

pub use error::{ConfigError, Result, ViewportError};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::autoscroll::{AutoscrollController, DragSession, Viewport};
    pub use crate::board::{Board, Item, ItemId, ItemLocation, ListContainer, ListId};
    pub use crate::config::{BoardConfig, DragActivation};
    pub use crate::drag_drop::{DragDropCoordinator, DragOperand};
    pub use crate::easing::{ease, Easing};
    pub use crate::error::{ConfigError, Result, ViewportError};
    pub use crate::geometry::{Axis, Point, Rect, Size};
    pub use crate::resolver::{
        resolve_item_reorder, resolve_list_reorder, ItemDropTarget, ItemReorder, ListDropTarget,
        ListReorder,
    };
}
