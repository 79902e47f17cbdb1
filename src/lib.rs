//! Wavyte Logo renders a short animated logo as a pure function of the frame index.
//!
//! Three stroked ellipses draw themselves in and swing into place around a center circle, the
//! whole mark spins once over the clip, and a title line pops in word by word underneath.
//!
//! # Pipeline overview
//!
//! 1. **Animate**: `frame + VideoConfig -> spring / interpolation values`
//!    ([`spring`], [`interpolate`])
//! 2. **Compose**: `values -> Scene`
//!    (three [`ArcPrimitive`]s, an [`AtomPrimitive`] and a [`Title`])
//! 3. **Encode**: `Scene -> JSON | SVG` ([`Scene::to_json`], [`to_svg`])
//! 4. **Rasterize** (optional): `Scene -> FrameRGBA` through a [`Rasterizer`]
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: the same frame and configuration always give a byte-identical scene, so
//!   frames may be built in any order and on any thread.
//! - **No IO in the library**: files are read and written by the `wavyte-logo` binary only.
//! - **Premultiplied RGBA8** out of the rasterizer.
//!
//! # Example
//!
//! ```
//! use wavyte_logo::{Composition, FrameIndex, LogoProps, VideoConfig, to_svg};
//!
//! let comp = Composition::new(VideoConfig::default(), LogoProps::default(), 0)?;
//! let scene = comp.scene(FrameIndex(12));
//! assert_eq!(scene.nodes.len(), 2);
//! assert!(to_svg(&scene).starts_with("<svg"));
//! # Ok::<(), wavyte_logo::LogoError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod diagnostics;
mod foundation;
mod geometry;
mod primitives;
mod render;
mod scene;
mod style;

pub use animation::ease::Ease;
pub use animation::interpolate::{
    Extrapolate, InterpolateOptions, LinearMap, interpolate, interpolate_with,
};
pub use animation::spring::{Spring, SpringConfig, measure_spring, spring};
#[cfg(feature = "diagnostics")]
pub use diagnostics::monitor::PerfMonitor;
pub use diagnostics::monitor::{
    FrameMetrics, FrameObserver, LOG_EVERY_FRAMES, NoopObserver, default_observer,
};
pub use foundation::core::{
    Affine, Canvas, Fps, FrameIndex, FrameRange, Point, Vec2, VideoConfig,
};
pub use foundation::error::{LogoError, LogoResult};
pub use geometry::ellipse::{ArcSpec, dash_offset, ellipse_arc_length};
pub use primitives::PrimitiveVisualState;
pub use primitives::arc::ArcPrimitive;
pub use primitives::atom::{ATOM_RADIUS, AtomPrimitive};
pub use primitives::title::{TITLE_STAGGER_FRAMES, Title, TitleStyle, WordState, split_words};
pub use render::pipeline::{
    FrameSink, RenderStats, RenderThreading, build_scenes, render_frame, render_frames,
    render_frames_to,
};
pub use render::raster::{FrameRGBA, Rasterizer, ResvgRasterizer};
pub use scene::composition::{Composition, LogoProps};
pub use scene::fingerprint::{SceneFingerprint, fingerprint_scene};
pub use scene::ids::{IdSource, ResourceId, SeededIds};
pub use scene::logo::{ARC_ROTATIONS_DEG, Logo, LogoFrameParams};
pub use scene::model::{
    FontSpec, GradientStop, LineCap, LinearGradient, Node, Paint, Scene, Stroke, Transform2D,
};
pub use scene::svg::to_svg;
pub use style::color::{Color, ColorPair};
