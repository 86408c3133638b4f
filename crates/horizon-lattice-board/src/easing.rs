//! Easing functions for animated scrolling.
//!
//! Easing functions map a linear progress value (0.0 to 1.0) to a transformed
//! value. The autoscroll controller always requests [`Easing::Linear`] for its
//! short incremental steps, but the viewport contract is easing-parameterized
//! so hosts can reuse it for their own scroll animations.

/// Available easing functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Linear interpolation (no easing).
    #[default]
    Linear,
    /// Quadratic ease-in (starts slow, accelerates).
    EaseIn,
    /// Quadratic ease-out (starts fast, decelerates).
    EaseOut,
    /// Quadratic ease-in-out (smooth start and end).
    EaseInOut,
}

/// Apply an easing function to a progress value.
///
/// `t` is clamped to the 0.0 to 1.0 range before evaluation.
#[inline]
pub fn ease(easing: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);

    match easing {
        Easing::Linear => t,
        Easing::EaseIn => t * t,
        Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
        Easing::EaseInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
            }
        }
    }
}

/// Interpolate between two values using an easing function.
///
/// This is the piece a [`Viewport`](crate::autoscroll::Viewport)
/// implementation needs to honor `animate_to`: sample the elapsed fraction
/// of the step duration and interpolate from the offset the animation
/// started at to the requested target.
///
/// # Example
///
/// ```
/// use horizon_lattice_board::easing::{lerp_eased, Easing};
///
/// // Halfway through a linear scroll step from offset 100 to 94.
/// assert_eq!(lerp_eased(Easing::Linear, 100.0, 94.0, 0.5), 97.0);
/// ```
#[inline]
pub fn lerp_eased(easing: Easing, start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * ease(easing, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_is_identity() {
        assert_eq!(ease(Easing::Linear, 0.0), 0.0);
        assert_eq!(ease(Easing::Linear, 0.5), 0.5);
        assert_eq!(ease(Easing::Linear, 1.0), 1.0);
    }

    #[test]
    fn test_ease_in_out_endpoints() {
        for easing in [Easing::EaseIn, Easing::EaseOut, Easing::EaseInOut] {
            assert_eq!(ease(easing, 0.0), 0.0);
            assert_eq!(ease(easing, 1.0), 1.0);
        }
    }

    #[test]
    fn test_input_is_clamped() {
        assert_eq!(ease(Easing::Linear, -1.0), 0.0);
        assert_eq!(ease(Easing::Linear, 2.0), 1.0);
    }

    #[test]
    fn test_lerp_eased() {
        assert_eq!(lerp_eased(Easing::Linear, 10.0, 20.0, 0.5), 15.0);
        assert_eq!(lerp_eased(Easing::Linear, 20.0, 10.0, 1.0), 10.0);
    }
}
