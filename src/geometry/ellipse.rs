use crate::foundation::core::{Canvas, Point};
use crate::foundation::error::{LogoError, LogoResult};

/// Approximate ellipse circumference `2π·sqrt((rx² + ry²) / 2)`.
///
/// Exact only for circles. Stroke reveal timing is tuned against this value, so it is kept as is
/// rather than replaced by the elliptic-integral form.
pub fn ellipse_arc_length(rx: f64, ry: f64) -> f64 {
    std::f64::consts::TAU * ((rx * rx + ry * ry) / 2.0).sqrt()
}

/// Dash offset that reveals `progress` of a path of length `arc_length`.
///
/// `progress = 0` hides the stroke entirely (offset = length), `progress = 1` draws all of it.
pub fn dash_offset(arc_length: f64, progress: f64) -> f64 {
    arc_length - arc_length * progress
}

/// Geometry of one stroked logo ellipse.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ArcSpec {
    /// Horizontal radius.
    pub rx: f64,
    /// Vertical radius.
    pub ry: f64,
    /// Center x.
    pub cx: f64,
    /// Center y.
    pub cy: f64,
    /// Stroke width in pixels.
    pub stroke_width: f64,
}

impl ArcSpec {
    /// Logo ellipse geometry, centered on `canvas`.
    pub fn logo(canvas: Canvas) -> Self {
        let c = canvas.center();
        Self {
            rx: 135.0,
            ry: 300.0,
            cx: c.x,
            cy: c.y,
            stroke_width: 30.0,
        }
    }

    /// Reject non-finite values and non-positive radii or stroke width.
    pub fn validate(&self) -> LogoResult<()> {
        let vals = [self.rx, self.ry, self.cx, self.cy, self.stroke_width];
        if vals.iter().any(|v| !v.is_finite()) {
            return Err(LogoError::validation(format!(
                "arc geometry must be finite: {self:?}"
            )));
        }
        if self.rx <= 0.0 || self.ry <= 0.0 {
            return Err(LogoError::validation("arc radii must be > 0"));
        }
        if self.stroke_width <= 0.0 {
            return Err(LogoError::validation("arc stroke width must be > 0"));
        }
        Ok(())
    }

    /// Ellipse center.
    pub fn center(&self) -> Point {
        Point::new(self.cx, self.cy)
    }

    /// See [`ellipse_arc_length`].
    pub fn arc_length(&self) -> f64 {
        ellipse_arc_length(self.rx, self.ry)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/ellipse.rs"]
mod tests;
