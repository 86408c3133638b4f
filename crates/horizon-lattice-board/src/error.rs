//! Error types for board drag and drop.

/// Result type alias for board operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Fatal configuration errors raised at construction.
///
/// These indicate an invalid combination of host-supplied options. They are
/// not recoverable at runtime; the host must fix its configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A horizontal board needs a fixed, finite list width to lay lists out
    /// side by side.
    #[error("horizontal axis requires a finite list width, got {width:?}")]
    UnboundedListWidth {
        /// The offending width, if one was supplied at all.
        width: Option<f32>,
    },

    /// A list whose style needs a ghost placeholder is present, but the
    /// configuration carries none.
    #[error("list at index {list_index} requires a drag ghost, but none is configured")]
    MissingGhost {
        /// Index of the first offending list on the board.
        list_index: usize,
    },

    /// The scroll margin band must be a positive, finite width.
    #[error("scroll margin must be positive and finite, got {margin}")]
    InvalidScrollMargin {
        /// The offending margin.
        margin: f32,
    },
}

/// Transient viewport failures.
///
/// Geometry and scroll queries can fail before the viewport has been laid
/// out. The autoscroll controller treats this as "skip this tick" rather
/// than an error worth surfacing: the next pointer move re-triggers
/// evaluation naturally, so there is no retry storm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ViewportError {
    /// The viewport has not been laid out yet; no geometry is available.
    #[error("viewport is not laid out yet")]
    NotLaidOut,
}
