use crate::foundation::core::{Affine, Point};
use crate::foundation::error::LogoResult;
use crate::scene::ids::ResourceId;
use crate::style::color::Color;
use serde::{Deserialize, Serialize};

/// Pivoted rotate + uniform scale.
///
/// Maps a point `p` to `origin + R(rotation) * S(scale) * (p - origin)`, which is how a CSS
/// `transform: scale(s) rotate(r)` with a centered `transform-origin` behaves.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform2D {
    /// Pivot in parent space.
    pub origin: Point,
    /// Clockwise rotation in degrees (y axis points down).
    pub rotation_deg: f64,
    /// Uniform scale factor.
    pub scale: f64,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self {
            origin: Point::ZERO,
            rotation_deg: 0.0,
            scale: 1.0,
        }
    }
}

impl Transform2D {
    /// Rotation about `origin`.
    pub fn rotate_about(origin: Point, rotation_deg: f64) -> Self {
        Self {
            origin,
            rotation_deg,
            scale: 1.0,
        }
    }

    /// Uniform scale about `origin`.
    pub fn scale_about(origin: Point, scale: f64) -> Self {
        Self {
            origin,
            rotation_deg: 0.0,
            scale,
        }
    }

    /// `true` when the transform leaves every point in place.
    pub fn is_identity(&self) -> bool {
        self.rotation_deg == 0.0 && self.scale == 1.0
    }

    /// Map a point through this transform.
    pub fn apply(self, p: Point) -> Point {
        self.to_affine() * p
    }

    /// Equivalent affine matrix.
    pub fn to_affine(self) -> Affine {
        let o = self.origin.to_vec2();
        // T(origin) * R * S * T(-origin)
        Affine::translate(o)
            * Affine::rotate(self.rotation_deg.to_radians())
            * Affine::scale(self.scale)
            * Affine::translate(-o)
    }
}

/// One color stop of a gradient. `offset` is in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Position along the gradient vector.
    pub offset: f64,
    /// Stop color.
    pub color: Color,
}

/// Linear gradient in the painted shape's bounding-box units.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearGradient {
    /// Definition id, unique per primitive instance.
    pub id: ResourceId,
    /// Gradient vector start, `(0, 0)` = top-left of the bounding box.
    pub start: Point,
    /// Gradient vector end, `(1, 1)` = bottom-right of the bounding box.
    pub end: Point,
    /// Ordered color stops.
    pub stops: Vec<GradientStop>,
}

impl LinearGradient {
    /// Two-stop gradient from `colors[0]` at `start` to `colors[1]` at `end`.
    pub fn two_stop(id: ResourceId, start: Point, end: Point, colors: [Color; 2]) -> Self {
        Self {
            id,
            start,
            end,
            stops: vec![
                GradientStop {
                    offset: 0.0,
                    color: colors[0],
                },
                GradientStop {
                    offset: 1.0,
                    color: colors[1],
                },
            ],
        }
    }
}

/// Fill or stroke paint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Paint {
    /// Not painted.
    None,
    /// Flat color.
    Solid {
        /// Paint color.
        color: Color,
    },
    /// Linear gradient.
    LinearGradient(LinearGradient),
}

impl Paint {
    /// Gradient carried by this paint, if any.
    pub fn gradient(&self) -> Option<&LinearGradient> {
        match self {
            Self::LinearGradient(g) => Some(g),
            Self::None | Self::Solid { .. } => None,
        }
    }
}

/// Stroke end cap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineCap {
    /// Flat cap at the path end.
    #[default]
    Butt,
    /// Semicircular cap.
    Round,
    /// Square cap extending past the end.
    Square,
}

/// Stroke specification.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// Stroke paint.
    pub paint: Paint,
    /// Width in pixels.
    pub width: f64,
    /// Single dash length (dash and gap both equal this value), if dashed.
    pub dash_array: Option<f64>,
    /// Dash offset; only meaningful with `dash_array`.
    pub dash_offset: f64,
    /// End caps.
    pub line_cap: LineCap,
}

/// Font selection for text nodes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    /// CSS-style family list.
    pub family: String,
    /// Font size in pixels.
    pub size_px: f64,
    /// Numeric weight (400 regular, 700 bold).
    pub weight: u16,
}

/// Drawable scene node. Children of a group are drawn in order, later nodes on top.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    /// Transformed container.
    Group {
        /// Stable key.
        key: String,
        /// Transform applied to all children.
        transform: Transform2D,
        /// Children in draw order.
        children: Vec<Node>,
    },
    /// Axis-aligned ellipse.
    Ellipse {
        /// Stable key.
        key: String,
        /// Center.
        center: Point,
        /// Horizontal radius.
        rx: f64,
        /// Vertical radius.
        ry: f64,
        /// Interior paint.
        fill: Paint,
        /// Outline, if any.
        stroke: Option<Stroke>,
        /// Node transform.
        transform: Transform2D,
    },
    /// Circle.
    Circle {
        /// Stable key.
        key: String,
        /// Center.
        center: Point,
        /// Radius.
        r: f64,
        /// Interior paint.
        fill: Paint,
        /// Node transform.
        transform: Transform2D,
    },
    /// Single line of text, horizontally centered on `anchor.x` with its baseline at `anchor.y`.
    Text {
        /// Stable key.
        key: String,
        /// Text content.
        text: String,
        /// Center-baseline anchor.
        anchor: Point,
        /// Font.
        font: FontSpec,
        /// Glyph paint.
        fill: Paint,
        /// Node transform.
        transform: Transform2D,
    },
}

impl Node {
    /// Stable key of this node.
    pub fn key(&self) -> &str {
        match self {
            Self::Group { key, .. }
            | Self::Ellipse { key, .. }
            | Self::Circle { key, .. }
            | Self::Text { key, .. } => key,
        }
    }

    /// Own transform of this node.
    pub fn transform(&self) -> Transform2D {
        match self {
            Self::Group { transform, .. }
            | Self::Ellipse { transform, .. }
            | Self::Circle { transform, .. }
            | Self::Text { transform, .. } => *transform,
        }
    }

    /// Children of a group, empty for leaves.
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Group { children, .. } => children,
            Self::Ellipse { .. } | Self::Circle { .. } | Self::Text { .. } => &[],
        }
    }

    /// Gradients referenced directly by this node (not its children).
    pub fn gradients(&self) -> Vec<&LinearGradient> {
        match self {
            Self::Group { .. } => Vec::new(),
            Self::Ellipse { fill, stroke, .. } => fill
                .gradient()
                .into_iter()
                .chain(stroke.as_ref().and_then(|s| s.paint.gradient()))
                .collect(),
            Self::Circle { fill, .. } | Self::Text { fill, .. } => {
                fill.gradient().into_iter().collect()
            }
        }
    }
}

/// Fully resolved, renderer-agnostic description of one frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Timeline frame this scene was built for.
    pub frame: u64,
    /// Top-level nodes in draw order.
    pub nodes: Vec<Node>,
}

impl Scene {
    /// Depth-first, draw-order traversal of every node.
    pub fn walk(&self) -> Vec<&Node> {
        fn rec<'a>(nodes: &'a [Node], out: &mut Vec<&'a Node>) {
            for n in nodes {
                out.push(n);
                rec(n.children(), out);
            }
        }
        let mut out = Vec::new();
        rec(&self.nodes, &mut out);
        out
    }

    /// Every gradient definition, in draw order.
    pub fn gradients(&self) -> Vec<&LinearGradient> {
        self.walk().into_iter().flat_map(Node::gradients).collect()
    }

    /// Find a node by key anywhere in the tree.
    pub fn find(&self, key: &str) -> Option<&Node> {
        self.walk().into_iter().find(|n| n.key() == key)
    }

    /// Compact JSON encoding.
    pub fn to_json(&self) -> LogoResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Indented JSON encoding.
    pub fn to_json_pretty(&self) -> LogoResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Canvas center, the pivot for the logo transforms.
    pub fn center(&self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
