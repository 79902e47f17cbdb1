use crate::animation::interpolate::LinearMap;
use crate::animation::spring::{SpringConfig, spring};
use crate::foundation::core::VideoConfig;
use crate::foundation::error::LogoResult;
use crate::geometry::ellipse::ArcSpec;
use crate::primitives::arc::ArcPrimitive;
use crate::primitives::atom::{ATOM_RADIUS, AtomPrimitive};
use crate::scene::ids::IdSource;
use crate::scene::model::{Node, Transform2D};
use crate::style::color::ColorPair;

/// Base rotations of the three arcs, in draw order.
pub const ARC_ROTATIONS_DEG: [f64; 3] = [30.0, 90.0, -30.0];

/// Spring values shared by every logo primitive at one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogoFrameParams {
    /// Stroke reveal progress of the arcs.
    pub progress: f64,
    /// Arc rotation progress, also the atom scale.
    pub rotate_progress: f64,
    /// Scale of the whole logo.
    pub scale: f64,
    /// Rotation of the whole logo in degrees.
    pub rotation_deg: f64,
}

/// Three arcs around an atom, rotated and scaled as one group.
#[derive(Clone, Debug)]
pub struct Logo {
    video: VideoConfig,
    draw: SpringConfig,
    rotate: SpringConfig,
    pop: SpringConfig,
    rotation: LinearMap,
    arcs: [ArcPrimitive; 3],
    atom: AtomPrimitive,
}

impl Logo {
    /// Build the primitives once. Gradient ids are drawn from `ids` here and never again.
    pub fn new(video: VideoConfig, colors: ColorPair, ids: &mut dyn IdSource) -> LogoResult<Self> {
        video.validate()?;

        let draw = SpringConfig::default().with_damping(100.0).with_mass(0.5);
        let rotate = draw;
        let pop = SpringConfig::default().with_mass(0.5);
        for cfg in [&draw, &rotate, &pop] {
            cfg.validate()?;
        }

        let rotation = LinearMap::clamped([0.0, video.duration_in_frames as f64], [0.0, 360.0])?;

        let canvas = video.canvas();
        let spec = ArcSpec::logo(canvas);
        let [r0, r1, r2] = ARC_ROTATIONS_DEG;
        let arcs = [
            ArcPrimitive::new("arc-0", spec, r0, colors, ids)?,
            ArcPrimitive::new("arc-1", spec, r1, colors, ids)?,
            ArcPrimitive::new("arc-2", spec, r2, colors, ids)?,
        ];
        let atom = AtomPrimitive::new(canvas.center(), ATOM_RADIUS, colors, ids)?;

        Ok(Self {
            video,
            draw,
            rotate,
            pop,
            rotation,
            arcs,
            atom,
        })
    }

    /// Video settings the logo was built for.
    pub fn video(&self) -> &VideoConfig {
        &self.video
    }

    /// The three arcs in draw order.
    pub fn arcs(&self) -> &[ArcPrimitive; 3] {
        &self.arcs
    }

    /// The center circle.
    pub fn atom(&self) -> &AtomPrimitive {
        &self.atom
    }

    /// Named spring configurations driving the logo.
    pub fn springs(&self) -> [(&'static str, SpringConfig); 3] {
        [
            ("draw", self.draw),
            ("rotate", self.rotate),
            ("scale", self.pop),
        ]
    }

    /// Evaluate each spring once for `frame`.
    pub fn frame_params(&self, frame: i64) -> LogoFrameParams {
        let fps = self.video.fps;
        LogoFrameParams {
            progress: spring(frame, fps, &self.draw),
            rotate_progress: spring(frame, fps, &self.rotate),
            scale: spring(frame, fps, &self.pop),
            rotation_deg: self.rotation.map(frame as f64),
        }
    }

    /// Logo group at `frame`: `arc-0`, `arc-1`, `arc-2`, then `atom`.
    pub fn node(&self, frame: i64) -> Node {
        let p = self.frame_params(frame);
        let center = self.video.canvas().center();

        let mut children: Vec<Node> = self
            .arcs
            .iter()
            .map(|a| a.node(&a.state(p.progress, p.rotate_progress)))
            .collect();
        children.push(self.atom.node(&self.atom.state(p.rotate_progress)));

        Node::Group {
            key: "logo".to_owned(),
            transform: Transform2D {
                origin: center,
                rotation_deg: p.rotation_deg,
                scale: p.scale,
            },
            children,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/logo.rs"]
mod tests;
