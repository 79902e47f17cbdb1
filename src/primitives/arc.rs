use crate::foundation::core::Point;
use crate::foundation::error::LogoResult;
use crate::geometry::ellipse::{ArcSpec, dash_offset};
use crate::primitives::PrimitiveVisualState;
use crate::scene::ids::{IdSource, ResourceId};
use crate::scene::model::{LineCap, LinearGradient, Node, Paint, Stroke, Transform2D};
use crate::style::color::ColorPair;

/// One stroked ellipse of the logo, revealed by animating its dash offset.
#[derive(Clone, Debug, PartialEq)]
pub struct ArcPrimitive {
    key: String,
    spec: ArcSpec,
    rotation_deg: f64,
    colors: ColorPair,
    arc_length: f64,
    gradient_id: ResourceId,
}

impl ArcPrimitive {
    /// Validate `spec` and memoize its arc length and gradient id.
    pub fn new(
        key: impl Into<String>,
        spec: ArcSpec,
        rotation_deg: f64,
        colors: ColorPair,
        ids: &mut dyn IdSource,
    ) -> LogoResult<Self> {
        spec.validate()?;
        Ok(Self {
            key: key.into(),
            spec,
            rotation_deg,
            colors,
            arc_length: spec.arc_length(),
            gradient_id: ids.next_id("arc-gradient"),
        })
    }

    /// Node key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Geometry.
    pub fn spec(&self) -> ArcSpec {
        self.spec
    }

    /// Base rotation reached once the rotate spring has settled.
    pub fn rotation_deg(&self) -> f64 {
        self.rotation_deg
    }

    /// Memoized arc length, also used as the dash length.
    pub fn arc_length(&self) -> f64 {
        self.arc_length
    }

    /// Gradient definition id owned by this arc.
    pub fn gradient_id(&self) -> &ResourceId {
        &self.gradient_id
    }

    /// Visual state for the shared draw and rotate progress values of a frame.
    pub fn state(&self, progress: f64, rotate_progress: f64) -> PrimitiveVisualState {
        PrimitiveVisualState {
            stroke_dashoffset: dash_offset(self.arc_length, progress),
            rotation_deg: self.rotation_deg * rotate_progress,
            scale: 1.0,
            gradient_stops: self.colors.stops(),
        }
    }

    /// Stroked ellipse with a top-to-bottom gradient, rotated about its center.
    pub fn node(&self, state: &PrimitiveVisualState) -> Node {
        let center = self.spec.center();
        Node::Ellipse {
            key: self.key.clone(),
            center,
            rx: self.spec.rx,
            ry: self.spec.ry,
            fill: Paint::None,
            stroke: Some(Stroke {
                paint: Paint::LinearGradient(LinearGradient::two_stop(
                    self.gradient_id.clone(),
                    Point::ZERO,
                    Point::new(0.0, 1.0),
                    state.gradient_stops,
                )),
                width: self.spec.stroke_width,
                dash_array: Some(self.arc_length),
                dash_offset: state.stroke_dashoffset,
                line_cap: LineCap::Round,
            }),
            transform: Transform2D::rotate_about(center, state.rotation_deg),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/primitives/arc.rs"]
mod tests;
