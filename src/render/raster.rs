use std::sync::Arc;

use crate::foundation::error::{LogoError, LogoResult};
use crate::scene::model::Scene;
use crate::scene::svg::to_svg;
use crate::style::color::Color;

/// One rendered frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Straight-alpha copy of the pixels, as expected by PNG encoders.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        if self.premultiplied {
            unpremultiply_rgba8_in_place(&mut out);
        }
        out
    }
}

/// Turns a scene into pixels. Implementations must be usable from several threads at once.
pub trait Rasterizer: Send + Sync {
    /// Rasterize `scene` at its own canvas size.
    fn rasterize(&self, scene: &Scene) -> LogoResult<FrameRGBA>;
}

/// CPU rasterizer: the scene is encoded as SVG, parsed by `usvg` and drawn by `resvg`.
#[derive(Clone)]
pub struct ResvgRasterizer {
    fontdb: Arc<usvg::fontdb::Database>,
    clear: Option<Color>,
}

impl ResvgRasterizer {
    /// Rasterizer with the system fonts loaded and a transparent background.
    pub fn new() -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        Self::with_fontdb(Arc::new(db))
    }

    /// Rasterizer with an explicit font database.
    pub fn with_fontdb(fontdb: Arc<usvg::fontdb::Database>) -> Self {
        Self {
            fontdb,
            clear: None,
        }
    }

    /// Fill every frame with `color` before drawing.
    pub fn with_clear(mut self, color: Color) -> Self {
        self.clear = Some(color);
        self
    }

    /// Number of font faces available for title text.
    pub fn font_faces(&self) -> usize {
        self.fontdb.len()
    }
}

impl std::fmt::Debug for ResvgRasterizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResvgRasterizer")
            .field("font_faces", &self.fontdb.len())
            .field("clear", &self.clear)
            .finish()
    }
}

impl Default for ResvgRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Rasterizer for ResvgRasterizer {
    fn rasterize(&self, scene: &Scene) -> LogoResult<FrameRGBA> {
        let svg = to_svg(scene);
        let opts = usvg::Options {
            fontdb: self.fontdb.clone(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_str(&svg, &opts)
            .map_err(|e| LogoError::raster(format!("svg parse failed: {e}")))?;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(scene.width, scene.height)
            .ok_or_else(|| LogoError::raster("failed to allocate frame pixmap"))?;
        if let Some(c) = self.clear {
            let [r, g, b, a] = c.to_rgba8();
            pixmap.fill(resvg::tiny_skia::Color::from_rgba8(r, g, b, a));
        }

        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::identity(),
            &mut pixmap.as_mut(),
        );

        Ok(FrameRGBA {
            width: scene.width,
            height: scene.height,
            data: pixmap.take(),
            premultiplied: true,
        })
    }
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        if a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
