use crate::foundation::core::Point;
use crate::foundation::error::{LogoError, LogoResult};
use crate::primitives::PrimitiveVisualState;
use crate::scene::ids::{IdSource, ResourceId};
use crate::scene::model::{LinearGradient, Node, Paint, Transform2D};
use crate::style::color::ColorPair;

/// Radius of the logo's center circle.
pub const ATOM_RADIUS: f64 = 70.0;

/// Filled circle at the center of the logo, scaled in by a spring.
#[derive(Clone, Debug, PartialEq)]
pub struct AtomPrimitive {
    center: Point,
    radius: f64,
    colors: ColorPair,
    gradient_id: ResourceId,
}

impl AtomPrimitive {
    /// Validate the geometry and allocate the gradient id.
    pub fn new(
        center: Point,
        radius: f64,
        colors: ColorPair,
        ids: &mut dyn IdSource,
    ) -> LogoResult<Self> {
        if !center.is_finite() || !radius.is_finite() || radius <= 0.0 {
            return Err(LogoError::validation(format!(
                "atom needs a finite center and radius > 0, got center={center:?} r={radius}"
            )));
        }
        Ok(Self {
            center,
            radius,
            colors,
            gradient_id: ids.next_id("atom-gradient"),
        })
    }

    /// Circle center.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Circle radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Gradient definition id owned by this atom.
    pub fn gradient_id(&self) -> &ResourceId {
        &self.gradient_id
    }

    /// Visual state for a scale spring value. The atom never rotates.
    pub fn state(&self, scale: f64) -> PrimitiveVisualState {
        PrimitiveVisualState {
            stroke_dashoffset: 0.0,
            rotation_deg: 0.0,
            scale,
            gradient_stops: self.colors.stops(),
        }
    }

    /// Circle with a left-to-right gradient, scaled about its center.
    pub fn node(&self, state: &PrimitiveVisualState) -> Node {
        Node::Circle {
            key: "atom".to_owned(),
            center: self.center,
            r: self.radius,
            fill: Paint::LinearGradient(LinearGradient::two_stop(
                self.gradient_id.clone(),
                Point::ZERO,
                Point::new(1.0, 0.0),
                state.gradient_stops,
            )),
            transform: Transform2D::scale_about(self.center, state.scale),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/primitives/atom.rs"]
mod tests;
