use crate::foundation::core::{FrameIndex, VideoConfig};
use crate::foundation::error::LogoResult;
use crate::primitives::title::Title;
use crate::scene::ids::SeededIds;
use crate::scene::logo::Logo;
use crate::scene::model::Scene;
use crate::style::color::{Color, ColorPair};

/// User-facing style parameters.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LogoProps {
    /// First gradient color of every logo primitive.
    pub logo_color1: Color,
    /// Second gradient color of every logo primitive.
    pub logo_color2: Color,
    /// Title line, split into words on single spaces.
    pub title_text: String,
    /// Title fill color.
    pub title_color: Color,
}

impl Default for LogoProps {
    fn default() -> Self {
        Self {
            logo_color1: Color::rgb(0x91 as f64 / 255.0, 0xEA as f64 / 255.0, 0xE4 as f64 / 255.0),
            logo_color2: Color::rgb(0x86 as f64 / 255.0, 0xA8 as f64 / 255.0, 0xE7 as f64 / 255.0),
            title_text: "Welcome to Wavyte".to_owned(),
            title_color: Color::BLACK,
        }
    }
}

/// On-disk composition document.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
struct CompositionDoc {
    video: VideoConfig,
    props: LogoProps,
    seed: u64,
}

/// The full picture: a logo with the title line drawn on top.
///
/// Every primitive is built once here; [`Composition::scene`] is then a pure function of the
/// frame and may be called from any thread, in any order.
#[derive(Clone, Debug)]
pub struct Composition {
    video: VideoConfig,
    props: LogoProps,
    seed: u64,
    logo: Logo,
    title: Title,
}

impl Composition {
    /// Validate settings and build all primitives. `seed` fixes the gradient ids.
    pub fn new(video: VideoConfig, props: LogoProps, seed: u64) -> LogoResult<Self> {
        video.validate()?;
        let mut ids = SeededIds::new(seed);
        let colors = ColorPair::new(props.logo_color1, props.logo_color2);
        let logo = Logo::new(video, colors, &mut ids)?;
        let title = Title::new(&props.title_text, props.title_color, video.canvas())?;
        Ok(Self {
            video,
            props,
            seed,
            logo,
            title,
        })
    }

    /// Parse a `{ "video": .., "props": .., "seed": .. }` document. Missing parts use defaults.
    pub fn from_json(s: &str) -> LogoResult<Self> {
        let doc: CompositionDoc = serde_json::from_str(s)?;
        Self::new(doc.video, doc.props, doc.seed)
    }

    /// Like [`Composition::from_json`], reading from `r`.
    pub fn from_reader<R: std::io::Read>(r: R) -> LogoResult<Self> {
        let doc: CompositionDoc = serde_json::from_reader(r)?;
        Self::new(doc.video, doc.props, doc.seed)
    }

    /// Serialize the settings back into the document format.
    pub fn to_json(&self) -> LogoResult<String> {
        let doc = CompositionDoc {
            video: self.video,
            props: self.props.clone(),
            seed: self.seed,
        };
        Ok(serde_json::to_string_pretty(&doc)?)
    }

    /// Video settings.
    pub fn video(&self) -> &VideoConfig {
        &self.video
    }

    /// Style parameters.
    pub fn props(&self) -> &LogoProps {
        &self.props
    }

    /// Seed of the id source.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The logo part.
    pub fn logo(&self) -> &Logo {
        &self.logo
    }

    /// The title part.
    pub fn title(&self) -> &Title {
        &self.title
    }

    /// Scene for `frame`. Frames past the end show the settled picture.
    #[tracing::instrument(skip(self))]
    pub fn scene(&self, frame: FrameIndex) -> Scene {
        let f = frame.as_i64();
        Scene {
            width: self.video.width,
            height: self.video.height,
            frame: frame.0,
            nodes: vec![self.logo.node(f), self.title.node(f, self.video.fps)],
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/composition.rs"]
mod tests;
