//! Host-supplied configuration for a drag and drop board.
//!
//! Configuration is validated once, when the coordinator is constructed, and
//! invalid combinations fail fast with a descriptive [`ConfigError`] rather
//! than misbehaving mid-drag.

use std::time::Duration;

use crate::board::Board;
use crate::error::{ConfigError, Result};
use crate::geometry::Axis;

/// Default scroll margin band width in logical units.
///
/// The pointer entering this strip at either edge of the viewport while a
/// drag is active triggers autoscroll.
pub const DEFAULT_SCROLL_MARGIN: f32 = 20.0;

/// Default duration of one incremental autoscroll animation step.
pub const DEFAULT_SCROLL_STEP: Duration = Duration::from_millis(30);

/// Default minimum distance in logical units the pointer must move before an
/// immediate-mode drag starts.
///
/// This prevents accidental drags from interfering with normal clicks.
pub const DEFAULT_DRAG_THRESHOLD: f32 = 4.0;

/// Default hold duration before a long-press-mode drag starts.
pub const DEFAULT_LONG_PRESS_TIMEOUT: Duration = Duration::from_millis(500);

/// How a drag gesture is activated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragActivation {
    /// The drag arms on pointer press and starts once movement exceeds
    /// `threshold` logical units.
    Immediate {
        /// Minimum movement before the drag starts.
        threshold: f32,
    },
    /// The drag starts when the gesture layer reports a hold of at least
    /// `timeout`.
    LongPress {
        /// Minimum hold duration.
        timeout: Duration,
    },
}

impl DragActivation {
    /// Immediate activation with the default movement threshold.
    pub fn immediate() -> Self {
        Self::Immediate {
            threshold: DEFAULT_DRAG_THRESHOLD,
        }
    }

    /// Long-press activation with the default hold timeout.
    pub fn long_press() -> Self {
        Self::LongPress {
            timeout: DEFAULT_LONG_PRESS_TIMEOUT,
        }
    }
}

impl Default for DragActivation {
    fn default() -> Self {
        Self::immediate()
    }
}

/// Configuration for a drag and drop board.
///
/// Build one with the builder-style setters and pass it to the coordinator,
/// which validates it against the board it will serve.
///
/// # Example
///
/// ```
/// use horizon_lattice_board::config::{BoardConfig, DragActivation};
/// use horizon_lattice_board::geometry::Axis;
///
/// let config = BoardConfig::new()
///     .axis(Axis::Horizontal)
///     .list_width(280.0)
///     .activation(DragActivation::default());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    /// The axis the board scrolls along.
    pub axis: Axis,
    /// Fixed list width; required and finite when the axis is horizontal.
    pub list_width: Option<f32>,
    /// How drags are activated.
    pub activation: DragActivation,
    /// Width of the edge scroll margin band.
    pub scroll_margin: f32,
    /// Duration of one incremental autoscroll step.
    pub scroll_step: Duration,
    /// Whether the host has configured a drag ghost placeholder.
    pub has_ghost: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            axis: Axis::Vertical,
            list_width: None,
            activation: DragActivation::default(),
            scroll_margin: DEFAULT_SCROLL_MARGIN,
            scroll_step: DEFAULT_SCROLL_STEP,
            has_ghost: false,
        }
    }
}

impl BoardConfig {
    /// Create a configuration with the default vertical layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the scroll axis.
    pub fn axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Set a fixed list width.
    pub fn list_width(mut self, width: f32) -> Self {
        self.list_width = Some(width);
        self
    }

    /// Set the drag activation mode.
    pub fn activation(mut self, activation: DragActivation) -> Self {
        self.activation = activation;
        self
    }

    /// Set the scroll margin band width.
    pub fn scroll_margin(mut self, margin: f32) -> Self {
        self.scroll_margin = margin;
        self
    }

    /// Set the incremental scroll step duration.
    pub fn scroll_step(mut self, step: Duration) -> Self {
        self.scroll_step = step;
        self
    }

    /// Declare that a drag ghost placeholder is configured.
    pub fn with_ghost(mut self) -> Self {
        self.has_ghost = true;
        self
    }

    /// Validate this configuration against the board it will serve.
    ///
    /// Fails when a horizontal axis is combined with an unbounded or
    /// non-finite list width, when a list requiring a ghost placeholder is
    /// present without one configured, or when the scroll margin is not a
    /// positive finite width.
    pub fn validate<T>(&self, board: &Board<T>) -> Result<()> {
        if self.axis == Axis::Horizontal {
            match self.list_width {
                Some(width) if width.is_finite() && width > 0.0 => {}
                width => return Err(ConfigError::UnboundedListWidth { width }),
            }
        }

        if !self.scroll_margin.is_finite() || self.scroll_margin <= 0.0 {
            return Err(ConfigError::InvalidScrollMargin {
                margin: self.scroll_margin,
            });
        }

        if !self.has_ghost {
            if let Some(list_index) = board.lists().iter().position(|list| list.needs_ghost()) {
                return Err(ConfigError::MissingGhost { list_index });
            }
        }

        Ok(())
    }
}
