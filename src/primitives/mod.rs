//! Animated primitive builders.
//!
//! Each primitive is created once per composition, memoizing everything that does not depend on
//! the frame (arc length, gradient id, word split). Per frame it turns plain spring outputs into a
//! [`PrimitiveVisualState`] and then into scene nodes.

pub(crate) mod arc;
pub(crate) mod atom;
pub(crate) mod title;

use crate::style::color::Color;

/// Per-frame visual parameters of one primitive. Recomputed every frame, never stored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrimitiveVisualState {
    /// Stroke dash offset (arcs only, 0 otherwise).
    pub stroke_dashoffset: f64,
    /// Rotation about the canvas center in degrees.
    pub rotation_deg: f64,
    /// Uniform scale about the canvas center.
    pub scale: f64,
    /// Gradient endpoint colors.
    pub gradient_stops: [Color; 2],
}
